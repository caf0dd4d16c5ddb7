use crate::core::rng::scene_seed;
use crate::core::EphemeralSet;
use crate::emitter::LiveSet;
use crate::game::GameCanvas;
use crate::library::Library;
use crate::meadow::Meadow;
use crate::timers::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Every effect mounted on a cover page, owned in one place so it can be torn down.
#[wasm_bindgen]
pub struct CoverScene {
    seed: u64,
    meadow: Option<Meadow>,
    library: Option<Library>,
    game: Option<GameCanvas>,
    live: LiveSet,
}

impl CoverScene {
    /// Mount both effect sets against whichever anchors `document` has.
    pub fn mount_in(document: &web::Document, seed: Option<u64>) -> Self {
        let seed = scene_seed(seed);
        let clock = Clock::start();
        let live: LiveSet = Rc::new(RefCell::new(EphemeralSet::new()));

        let meadow = Meadow::mount(document, seed, &live, clock);
        let library = Library::mount(document, seed, &live, clock);
        let game = GameCanvas::mount(document);
        log::info!(
            "[scene] seed={} meadow={} library={} game={}",
            seed,
            !meadow.is_empty(),
            !library.is_empty(),
            game.is_some()
        );
        Self {
            seed,
            meadow: Some(meadow),
            library: Some(library),
            game,
            live,
        }
    }
}

#[wasm_bindgen]
impl CoverScene {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn live_particles(&self) -> usize {
        self.live.borrow().len()
    }

    /// Cancel timers and listeners and remove everything the scene added.
    /// Calling it twice is harmless.
    pub fn dispose(&mut self) {
        if self.meadow.is_none() && self.library.is_none() && self.game.is_none() {
            return;
        }
        if let Some(m) = self.meadow.take() {
            m.dispose();
        }
        if let Some(l) = self.library.take() {
            l.dispose();
        }
        self.game.take();
        let leftover = self.live.borrow_mut().drain();
        for particle in leftover {
            particle.retire();
        }
        log::info!("[scene] disposed");
    }
}

impl Drop for CoverScene {
    fn drop(&mut self) {
        self.dispose();
    }
}
