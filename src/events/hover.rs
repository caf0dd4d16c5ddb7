use crate::dom::{set_style, Listener};
use web_sys as web;

/// Style writes applied on `mouseenter` and undone on `mouseleave`.
pub struct HoverStyle {
    pub enter: &'static [(&'static str, &'static str)],
    pub leave: &'static [(&'static str, &'static str)],
}

pub fn wire_hover_style(el: &web::Element, style: &'static HoverStyle) -> [Listener; 2] {
    let on_enter = el.clone();
    let on_leave = el.clone();
    [
        Listener::new(el, "mouseenter", move |_| {
            for (prop, value) in style.enter {
                set_style(&on_enter, prop, value);
            }
        }),
        Listener::new(el, "mouseleave", move |_| {
            for (prop, value) in style.leave {
                set_style(&on_leave, prop, value);
            }
        }),
    ]
}
