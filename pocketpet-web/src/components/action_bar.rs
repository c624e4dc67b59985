use crate::game::Action;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub on_action: Callback<Action>,
}

const fn action_label(action: Action) -> (&'static str, &'static str) {
    match action {
        Action::Feed => ("🍎", "Feed"),
        Action::Play => ("✨", "Play"),
        Action::Drink => ("💧", "Drink"),
        Action::Sleep => ("🌙", "Sleep"),
    }
}

#[function_component(ActionBar)]
pub fn action_bar(p: &Props) -> Html {
    html! {
        <div class="action-grid">
            { for Action::ALL.into_iter().map(|action| {
                let on_action = p.on_action.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_action.emit(action));
                let (icon, label) = action_label(action);
                html! {
                    <button class={classes!("action-btn", format!("action-{action}"))} {onclick}>
                        <span class="action-icon" aria-hidden="true">{ icon }</span>
                        { label }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_one_button_per_action() {
        let props = Props {
            on_action: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ActionBar>::with_props(props).render());
        for class in ["action-feed", "action-play", "action-drink", "action-sleep"] {
            assert!(html.contains(class), "missing {class}: {html}");
        }
    }
}
