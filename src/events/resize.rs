use crate::core::Debounce;
use crate::dom::Listener;
use crate::timers::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Window resize listener that runs `on_settled` once resizing has been
/// quiet for `delay_ms`.
pub struct DebouncedResize {
    _listener: Listener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl DebouncedResize {
    pub fn new(delay_ms: i32, on_settled: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let debounce = Rc::new(RefCell::new(Debounce::default()));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_settled = Rc::new(RefCell::new(on_settled));

        let pending_listener = pending.clone();
        let listener = Listener::new(&window, "resize", move |_| {
            let token = debounce.borrow_mut().poke();
            let debounce = debounce.clone();
            let on_settled = on_settled.clone();
            // replacing the pending timeout clears the previous one
            *pending_listener.borrow_mut() = Timeout::new(delay_ms, move || {
                if debounce.borrow().is_current(token) {
                    (&mut *on_settled.borrow_mut())();
                }
            });
        });
        Some(Self {
            _listener: listener,
            _pending: pending,
        })
    }
}
