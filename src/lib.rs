#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod emitter;
mod events;
mod game;
mod library;
mod meadow;
mod scene;
mod timers;

pub use scene::CoverScene;

thread_local! {
    // scene mounted by `start`; kept alive until `unmount`
    static MOUNTED: RefCell<Option<CoverScene>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cover-scene starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let ready_doc = document.clone();
    dom::on_dom_ready(&document, move || match init(&ready_doc, None) {
        Ok(scene) => MOUNTED.with(|m| *m.borrow_mut() = Some(scene)),
        Err(e) => log::error!("init error: {:?}", e),
    });
    Ok(())
}

fn init(document: &web::Document, seed: Option<u64>) -> anyhow::Result<CoverScene> {
    if document.body().is_none() {
        anyhow::bail!("document has no body");
    }
    let seed = seed.or_else(|| page_seed(document));
    Ok(CoverScene::mount_in(document, seed))
}

/// Seed taken from `data-seed` on a scene root, for reproducible captures.
fn page_seed(document: &web::Document) -> Option<u64> {
    [constants::SEL_SCENE, constants::SEL_LIBRARY_SCENE]
        .into_iter()
        .filter_map(|sel| dom::query(document, sel))
        .filter_map(|el| el.get_attribute(constants::SEED_ATTRIBUTE))
        .find_map(|s| match s.trim().parse::<u64>() {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("ignoring {}={:?}: {}", constants::SEED_ATTRIBUTE, s, e);
                None
            }
        })
}

/// Mount a fresh scene on the current document. Call `unmount` first if the
/// page was auto-mounted, or effects will run twice.
#[wasm_bindgen]
pub fn mount(seed: Option<u64>) -> Result<CoverScene, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    init(&document, seed).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tear down the scene mounted at start-up, if any.
#[wasm_bindgen]
pub fn unmount() {
    let scene = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(mut scene) = scene {
        scene.dispose();
    }
}
