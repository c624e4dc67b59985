//! Browser timer handles.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom;

/// A `setInterval` registration that is cleared when dropped.
pub struct Interval {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Run `callback` every `period_ms` until the handle is dropped.
    pub fn start(period_ms: u64, callback: impl FnMut() + 'static) -> Self {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = dom::window().and_then(|win| {
            win.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                dom::timer_delay(period_ms),
            )
            .map_err(|err| {
                dom::console_error(&format!(
                    "Failed to start decay interval: {}",
                    dom::js_error_message(&err)
                ));
            })
            .ok()
        });
        Self {
            id,
            _callback: callback,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.id.is_some()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id.take(), dom::window()) {
            win.clear_interval_with_handle(id);
        }
    }
}

/// Run `callback` once after `delay_ms`.
pub fn after(delay_ms: u64, callback: impl FnOnce() + 'static) {
    let timeout = Closure::once(callback);
    if let Some(win) = dom::window() {
        if let Err(err) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            timeout.as_ref().unchecked_ref(),
            dom::timer_delay(delay_ms),
        ) {
            dom::console_error(&format!(
                "Failed to schedule effect clear: {}",
                dom::js_error_message(&err)
            ));
        }
    } else {
        dom::console_error("Failed to schedule effect clear: window unavailable");
    }
    timeout.forget();
}
