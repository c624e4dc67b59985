//! Root component wiring the engine to the browser.
//!
//! The engine lives in one `Rc<RefCell<_>>` owned by the component; the
//! decay interval, effect timeouts and button callbacks all borrow it on the
//! event loop, so no two transitions ever overlap.
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::components::pet_card::PetCard;
#[cfg(target_arch = "wasm32")]
use crate::game::Action;
use crate::game::{PetView, WebEngine};
use yew::prelude::*;

pub type EngineHandle = Rc<RefCell<WebEngine>>;

/// Re-render from the engine's current state.
pub fn publish(engine: &EngineHandle, view: &UseStateHandle<PetView>) {
    if let Ok(engine) = engine.try_borrow() {
        view.set(engine.view());
    }
}

/// Clear expired effects and re-arm a timeout for the next pending one.
#[cfg(target_arch = "wasm32")]
pub fn schedule_refresh(engine: EngineHandle, view: UseStateHandle<PetView>) {
    use crate::game::Clock;

    let next = {
        let Ok(mut guard) = engine.try_borrow_mut() else {
            return;
        };
        let next = guard.refresh_presentation();
        next.map(|deadline| deadline.saturating_sub(guard.clock().now_ms()))
    };
    publish(&engine, &view);
    if let Some(wait) = next {
        let delay = u64::try_from(wait).unwrap_or(0);
        crate::timers::after(delay, move || schedule_refresh(engine, view));
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let engine = use_mut_ref(crate::game::create_web_engine);
    let view = use_state(|| engine.borrow().view());

    {
        let engine = engine.clone();
        let view = view.clone();
        use_effect_with((), move |()| {
            let report = engine.borrow_mut().start();
            log::info!("pet engine started: {report:?}");
            publish(&engine, &view);

            let period = engine.borrow().config().tick_period_ms;
            let decay = {
                let engine = engine.clone();
                let view = view.clone();
                crate::timers::Interval::start(period, move || {
                    if let Ok(mut guard) = engine.try_borrow_mut() {
                        guard.tick();
                    }
                    publish(&engine, &view);
                })
            };

            move || {
                drop(decay);
                if let Ok(mut guard) = engine.try_borrow_mut() {
                    guard.stop();
                }
            }
        });
    }

    let on_action = {
        let engine = engine.clone();
        let view = view.clone();
        Callback::from(move |action: Action| {
            let outcome = engine.borrow_mut().perform(action);
            log::debug!("{action}: accepted={}", outcome.accepted);
            schedule_refresh(engine.clone(), view.clone());
        })
    };

    html! { <PetCard view={(*view).clone()} {on_action} /> }
}
