use super::action_bar::ActionBar;
use super::stat_meter::StatMeter;
use crate::game::{Action, Animation, PetView};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub view: PetView,
    #[prop_or_default]
    pub on_action: Callback<Action>,
}

#[function_component(PetCard)]
pub fn pet_card(p: &Props) -> Html {
    let view = &p.view;
    let scene = if view.daytime { "scene-day" } else { "scene-night" };
    let exp_width = format!("width: {}%", view.exp);
    html! {
        <main class={classes!("pet-scene", scene)}>
            <section class="pet-card">
                <header class="pet-header">
                    <div>
                        <h1 class="pet-name">{ view.name.clone() }</h1>
                        <p class="pet-meta">{ format!("Level {} • Day {}", view.level, view.day) }</p>
                    </div>
                    <div class="sky-icon" aria-hidden="true">{ if view.daytime { "☀️" } else { "🌙" } }</div>
                </header>
                <div class="exp-row">
                    <span>{ "EXP" }</span>
                    <span class="exp-value">{ format!("{}/100", view.exp) }</span>
                </div>
                <div class="bar-wrap slim">
                    <div class="bar-fill exp-fill" style={exp_width}></div>
                </div>
                <div class={classes!("pet-stage", (view.animation == Animation::Play).then_some("bounce"))}>
                    <div class={classes!("pet-face", (view.animation == Animation::Sleep).then_some("dimmed"))}>
                        { view.expression.emoji() }
                    </div>
                    {
                        view.message.map(|msg| html! {
                            <div class="speech-bubble" aria-live="polite"><p>{ msg }</p></div>
                        }).unwrap_or_default()
                    }
                </div>
                <div class="stat-list">
                    { for view.stats.iter().cloned().map(|line| html! { <StatMeter {line} /> }) }
                </div>
                <ActionBar on_action={p.on_action.clone()} />
            </section>
        </main>
    }
}
