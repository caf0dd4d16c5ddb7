//! Browser timers as owned handles: dropping one cancels it.

use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since the scene was mounted.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Fixed-period timer; the first tick fires one full period after creation.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _closure: closure,
            }),
            Err(e) => {
                log::warn!("[timers] setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// One-shot timer. Must not be dropped from inside its own callback.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _closure: closure,
            }),
            Err(e) => {
                log::warn!("[timers] setTimeout failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}

struct RescheduleState {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl RescheduleState {
    fn arm(&self, delay_ms: i32) {
        let Some(window) = web::window() else {
            return;
        };
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
        {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::warn!("[timers] reschedule failed: {:?}", e),
        }
    }
}

/// Self-rescheduling timeout: each run returns the delay before the next one.
pub struct Rescheduler {
    state: Rc<RescheduleState>,
}

impl Rescheduler {
    pub fn start(first_delay_ms: i32, mut step: impl FnMut() -> i32 + 'static) -> Self {
        let state = Rc::new(RescheduleState {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<RescheduleState> = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            let next = step();
            state.arm(next.max(0));
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(closure);
        state.arm(first_delay_ms.max(0));
        Self { state }
    }
}

impl Drop for Rescheduler {
    fn drop(&mut self) {
        if let (Some(w), Some(h)) = (web::window(), self.state.handle.take()) {
            w.clear_timeout_with_handle(h);
        }
        self.state.callback.borrow_mut().take();
    }
}
