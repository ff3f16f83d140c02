use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::{timeout_ms, WebRotator};
use crate::error::RotatorError;
use crate::rotator::Scheduler;

/// An armed `setTimeout` together with the callback it will invoke.
///
/// Dropping the handle frees the callback, so it must outlive the timer:
/// [`WindowScheduler::cancel`] clears the timeout before dropping.
pub struct TimerHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl TimerHandle {
    /// The browser's timeout id.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }
}

/// [`Scheduler`] backed by `window.setTimeout`.
///
/// Each timer calls back into the rotator it belongs to through a weak
/// reference, so pending timers never keep a rotator alive.
pub struct WindowScheduler {
    window: Window,
    target: Weak<RefCell<WebRotator>>,
}

impl WindowScheduler {
    /// Scheduler whose timers rotate `target`.
    #[must_use]
    pub fn new(window: Window, target: Weak<RefCell<WebRotator>>) -> Self {
        Self { window, target }
    }
}

impl Scheduler for WindowScheduler {
    type Handle = TimerHandle;

    fn schedule(
        &mut self,
        delay: Duration,
    ) -> Result<TimerHandle, RotatorError> {
        let target = self.target.clone();
        // The rotator drops this handle (and so this closure) from inside
        // the call; wasm-bindgen defers the free until the call returns.
        let callback: Closure<dyn FnMut()> = Closure::once(move || {
            let Some(rotator) = target.upgrade() else {
                return;
            };
            let result = rotator.borrow_mut().rotate_word();
            if let Err(e) = result {
                log::error!("word rotation failed: {e}");
            }
        });
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
                timeout_ms(delay),
            )?;
        Ok(TimerHandle {
            id,
            _callback: callback,
        })
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.id);
    }
}
