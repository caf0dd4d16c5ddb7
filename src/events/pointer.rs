use crate::dom::{self, Listener};
use glam::Vec2;
use web_sys as web;

/// Call `apply(client, viewport)` on every mousemove over `root`.
///
/// The viewport is read per event so a resized window needs no extra wiring.
pub fn wire_pointer_move(root: &web::Element, mut apply: impl FnMut(Vec2, Vec2) + 'static) -> Listener {
    Listener::new(root, "mousemove", move |ev: web::Event| {
        if let Some(client) = dom::client_pos(&ev) {
            apply(client, dom::viewport_size());
        }
    })
}
