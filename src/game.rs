//! Placeholder game page: a full-window canvas with a start banner.

use crate::constants::GAME_CANVAS_ID;
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct GameCanvas {
    _resize: Listener,
}

impl GameCanvas {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(GAME_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let window = web::window()?;
        fit_to_window(&canvas);
        draw_banner(&canvas);

        let canvas_resize = canvas.clone();
        let resize = Listener::new(&window, "resize", move |_| {
            fit_to_window(&canvas_resize);
        });
        log::info!("[game] canvas {}x{}", canvas.width(), canvas.height());
        Some(Self { _resize: resize })
    }
}

fn fit_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width.max(1.0) as u32);
        canvas.set_height(height.max(1.0) as u32);
    }
}

fn draw_banner(canvas: &web::HtmlCanvasElement) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        log::warn!("[game] no 2d context");
        return;
    };
    #[allow(deprecated)]
    ctx.set_fill_style(&"white".into());
    ctx.set_font("40px Arial");
    _ = ctx.fill_text("Game Starts!", 50.0, 100.0);
}
