use crate::core::{Scheduler, TimerKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TimerSink = Rc<RefCell<Option<Box<dyn Fn(TimerKey)>>>>;

/// `setTimeout`-backed scheduler. Fired keys are forwarded to the sink,
/// which is bound once the owner of the scheduler exists.
pub struct BrowserScheduler {
    window: web::Window,
    sink: TimerSink,
}

impl BrowserScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            sink: Rc::new(RefCell::new(None)),
        }
    }

    pub fn sink(&self) -> TimerSink {
        self.sink.clone()
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = i32;

    fn after(&mut self, delay_ms: u32, key: TimerKey) -> i32 {
        let sink = self.sink.clone();
        // Frees itself after the single call; a cancelled timeout leaks its closure.
        let callback = Closure::once_into_js(move || {
            if let Some(f) = sink.borrow().as_ref() {
                f(key);
            }
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(id) => id,
            Err(e) => {
                log::error!("[narration] setTimeout failed for {:?}: {:?}", key, e);
                0
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
