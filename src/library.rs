//! Library cover: a procedurally filled bookshelf lit by a flickering lamp.

use crate::constants::*;
use crate::core::palette::LIBRARY_CAPTIONS;
use crate::core::pointer::{cursor_aura, lamp_glow, normalize_centered, normalize_unit, shelf_parallax};
use crate::core::rng::*;
use crate::core::{generate_shelf, CaptionCycler, Flicker, ParticleKind, ShelfLayout, ShelfParams};
use crate::dom::{self, set_style, Listener};
use crate::emitter::{Emitter, LiveSet};
use crate::events::hover::HoverStyle;
use crate::events::{wire_hover_style, wire_pointer_move, DebouncedResize};
use crate::timers::{Clock, Interval, Rescheduler};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

static BOOK_LINK_LIFT: HoverStyle = HoverStyle {
    enter: &[
        ("transform", BOOK_LINK_HOVER_TRANSFORM),
        ("transition", "transform 0.25s ease"),
    ],
    leave: &[("transform", "none")],
};

#[derive(Default)]
pub struct Library {
    listeners: Vec<Listener>,
    emitters: Vec<Emitter>,
    caption: Option<Interval>,
    flicker: Option<Rescheduler>,
    shelf: Option<Rc<Shelf>>,
    resize: Option<DebouncedResize>,
}

/// The shelf container plus what it needs to rebuild itself.
pub struct Shelf {
    container: web::Element,
    params: ShelfParams,
    rng: RefCell<SceneRng>,
}

impl Shelf {
    /// Clear the container and fill it for the current viewport.
    pub fn regenerate(&self, document: &web::Document) -> usize {
        let viewport = dom::viewport_size();
        let layout = generate_shelf(
            viewport.x,
            viewport.y,
            &self.params,
            &mut *self.rng.borrow_mut(),
        );
        self.container.set_inner_html("");
        render_shelf(document, &self.container, &layout, &self.params);
        layout.book_count()
    }

    fn clear(&self) {
        self.container.set_inner_html("");
    }
}

impl Library {
    pub fn mount(document: &web::Document, seed: u64, live: &LiveSet, clock: Clock) -> Self {
        let mut lib = Library::default();

        if let Some(container) = dom::query(document, SEL_BOOKSHELF) {
            let shelf = Rc::new(Shelf {
                container,
                params: ShelfParams::default(),
                rng: RefCell::new(child_rng(seed, SALT_SHELF)),
            });
            let books = shelf.regenerate(document);
            log::info!("[library] shelf books={}", books);

            let doc = document.clone();
            let weak = Rc::downgrade(&shelf);
            lib.resize = DebouncedResize::new(RESIZE_DEBOUNCE_MS, move || {
                if let Some(shelf) = weak.upgrade() {
                    let books = shelf.regenerate(&doc);
                    log::debug!("[library] shelf regenerated books={}", books);
                }
            });
            lib.shelf = Some(shelf);
        } else {
            log::debug!("[library] no {}; shelf skipped", SEL_BOOKSHELF);
        }

        if let Some(layer) = dom::query(document, SEL_PARTICLES) {
            for (kind, salt) in [
                (ParticleKind::DustMote, SALT_DUST),
                (ParticleKind::LightOrb, SALT_ORB),
                (ParticleKind::LampSparkle, SALT_LAMP_SPARKLE),
            ] {
                if let Some(e) = Emitter::start(document, &layer, kind, child_rng(seed, salt), live, clock) {
                    lib.emitters.push(e);
                }
            }
        }

        if let Some(light) = dom::query(document, SEL_LAMP_LIGHT) {
            let flicker = Flicker::default();
            let mut rng = child_rng(seed, SALT_FLICKER);
            let first = flicker.step(&mut rng);
            set_style(&light, "opacity", &format!("{:.3}", first.opacity));
            lib.flicker = Some(Rescheduler::start(first.delay_ms as i32, move || {
                let step = flicker.step(&mut rng);
                set_style(&light, "opacity", &format!("{:.3}", step.opacity));
                step.delay_ms as i32
            }));
        }

        if let Some(root) = dom::query(document, SEL_LIBRARY_SCENE) {
            lib.listeners.push(wire_lamp_pointer(document, &root));
        }

        if let Some(text) = dom::query(document, SEL_CAPTION_TEXT) {
            let mut cycler = CaptionCycler::new(LIBRARY_CAPTIONS);
            lib.caption = Interval::new(CAPTION_INTERVAL_MS, move || {
                if let Some(line) = cycler.advance() {
                    text.set_text_content(Some(line));
                }
            });
        }

        if let Some(link) = dom::query(document, SEL_BOOK_LINK) {
            lib.listeners.extend(wire_hover_style(&link, &BOOK_LINK_LIFT));
        }

        lib
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
            && self.emitters.is_empty()
            && self.caption.is_none()
            && self.flicker.is_none()
            && self.shelf.is_none()
    }

    /// Stop every effect and empty the shelf.
    pub fn dispose(self) {
        let Library {
            listeners,
            emitters,
            caption,
            flicker,
            shelf,
            resize,
        } = self;
        drop(resize);
        drop(listeners);
        drop(emitters);
        drop(caption);
        drop(flicker);
        if let Some(shelf) = shelf {
            shelf.clear();
        }
    }
}

fn wire_lamp_pointer(document: &web::Document, root: &web::Element) -> Listener {
    let glow = dom::query(document, SEL_LAMP_GLOW);
    let aura = dom::query(document, SEL_CURSOR_GLOW);
    let shelf = dom::query(document, SEL_BOOKSHELF);
    wire_pointer_move(root, move |client, viewport| {
        if let Some(glow) = &glow {
            set_style(glow, "background", &lamp_glow(normalize_unit(client, viewport)).background());
        }
        if let Some(aura) = &aura {
            let at = cursor_aura(client);
            set_style(aura, "left", &format!("{:.1}px", at.x));
            set_style(aura, "top", &format!("{:.1}px", at.y));
        }
        if let Some(shelf) = &shelf {
            set_style(shelf, "transform", &shelf_parallax(normalize_centered(client, viewport)));
        }
    })
}

fn render_shelf(
    document: &web::Document,
    container: &web::Element,
    layout: &ShelfLayout,
    params: &ShelfParams,
) {
    for row in &layout.rows {
        let Ok(row_el) = document.create_element("div") else {
            continue;
        };
        _ = row_el.set_attribute("class", "shelf-row");
        _ = row_el.set_attribute(
            "style",
            &format!(
                "position: absolute; left: 0; top: {:.0}px; width: 100%; height: {:.0}px; \
                 border-bottom: {:.0}px solid #3b2416;",
                row.top, params.row_height, params.shelf_thickness
            ),
        );
        for book in &row.books {
            let Ok(book_el) = document.create_element("div") else {
                continue;
            };
            _ = book_el.set_attribute("class", "book");
            _ = book_el.set_attribute(
                "style",
                &format!(
                    "position: absolute; bottom: 0; left: {:.1}px; width: {:.1}px; height: {:.1}px; \
                     background: {}; transform: rotate({:.1}deg); transform-origin: bottom left;",
                    book.x, book.width, book.height, book.color, book.lean_deg
                ),
            );
            _ = row_el.append_child(&book_el);
        }
        _ = container.append_child(&row_el);
    }
}
