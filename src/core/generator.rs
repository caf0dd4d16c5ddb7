// Procedural batches: grass blades along the horizon and bookshelf rows.
//
// Both generators are one-shot: they return a full description of the batch
// and the caller appends it to a container. The shelf is regenerated
// wholesale on resize rather than patched.

use crate::constants::*;
use crate::core::palette::BOOK_COLORS;
use crate::core::rng::{jitter, Spread};
use rand::seq::SliceRandom;
use rand::Rng;

/// The sway rule injected once per page for the grass blades.
pub const SWAY_KEYFRAMES: &str = "
@keyframes bladeSway {
    from { transform: rotate(-2deg); transform-origin: bottom center; }
    to { transform: rotate(2deg); transform-origin: bottom center; }
}
";

#[derive(Clone, Copy, Debug)]
pub struct GrassParams {
    pub count: usize,
    pub width: f32,
    pub baseline: f32,
    pub height: Spread,
    pub sway: Spread,
    // tip control point sways this much further than the mid point
    pub tip_sway_gain: f32,
    pub red: Spread,
    pub green: Spread,
    pub blue: Spread,
    pub stroke_width: Spread,
    pub sway_secs: Spread,
    pub delay_max_secs: f32,
}

impl GrassParams {
    pub const HORIZON: GrassParams = GrassParams {
        count: GRASS_HORIZON_COUNT,
        width: GRASS_VIEW_WIDTH,
        baseline: GRASS_HORIZON_BASELINE,
        height: Spread::new(15.0, 50.0),
        sway: Spread::new(5.0, 12.0),
        tip_sway_gain: 1.5,
        red: Spread::new(30.0, 40.0),
        green: Spread::new(100.0, 80.0),
        blue: Spread::new(80.0, 60.0),
        stroke_width: Spread::new(1.0, 2.5),
        sway_secs: Spread::new(2.0, 2.0),
        delay_max_secs: GRASS_SWAY_DELAY_MAX_SEC,
    };

    pub const TOP: GrassParams = GrassParams {
        count: GRASS_TOP_COUNT,
        width: GRASS_VIEW_WIDTH,
        baseline: GRASS_TOP_BASELINE,
        height: Spread::new(10.0, 30.0),
        sway: Spread::new(3.0, 8.0),
        tip_sway_gain: 1.0,
        red: Spread::new(50.0, 30.0),
        green: Spread::new(120.0, 60.0),
        blue: Spread::new(100.0, 50.0),
        stroke_width: Spread::new(0.8, 1.5),
        sway_secs: Spread::new(2.5, 2.0),
        delay_max_secs: GRASS_SWAY_DELAY_MAX_SEC,
    };
}

/// A single grass blade, ready to become an SVG `<path>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Blade {
    pub x: f32,
    pub height: f32,
    pub path: String,
    pub stroke: String,
    pub stroke_width: f32,
    pub animation: String,
}

pub fn generate_grass<R: Rng + ?Sized>(params: &GrassParams, rng: &mut R) -> Vec<Blade> {
    (0..params.count).map(|_| grass_blade(params, rng)).collect()
}

fn grass_blade<R: Rng + ?Sized>(p: &GrassParams, rng: &mut R) -> Blade {
    let x = rng.gen::<f32>() * p.width;
    let height = p.height.sample(rng);
    let sway = p.sway.sample(rng);
    let delay = rng.gen::<f32>() * p.delay_max_secs;
    let cp1x = x + jitter(rng, sway);
    let cp2x = x + jitter(rng, sway * p.tip_sway_gain);
    let base = p.baseline;

    let r = p.red.sample(rng).floor() as u8;
    let g = p.green.sample(rng).floor() as u8;
    let b = p.blue.sample(rng).floor() as u8;

    Blade {
        x,
        height,
        path: format!(
            "M{x} {base} Q{cp1x} {} {cp2x} {}",
            base - height * 0.6,
            base - height
        ),
        stroke: format!("rgb({r}, {g}, {b})"),
        stroke_width: p.stroke_width.sample(rng),
        animation: format!(
            "bladeSway {:.2}s ease-in-out {:.2}s infinite alternate",
            p.sway_secs.sample(rng),
            delay
        ),
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ShelfParams {
    pub row_height: f32,
    pub shelf_thickness: f32,
    pub book_width: Spread,
    pub book_height: Spread,
    pub gap: f32,
    pub lean_chance: f64,
    pub lean_deg: f32,
    pub colors: &'static [&'static str],
}

impl Default for ShelfParams {
    fn default() -> Self {
        Self {
            row_height: SHELF_ROW_HEIGHT,
            shelf_thickness: SHELF_BOARD_THICKNESS,
            book_width: Spread::new(BOOK_WIDTH_MIN, BOOK_WIDTH_SPAN),
            book_height: Spread::new(BOOK_HEIGHT_MIN, BOOK_HEIGHT_SPAN),
            gap: BOOK_GAP,
            lean_chance: BOOK_LEAN_CHANCE,
            lean_deg: BOOK_LEAN_DEG,
            colors: BOOK_COLORS,
        }
    }
}

impl ShelfParams {
    /// Narrowest advance one book can make along a row: its smallest width
    /// plus the gap after it.
    pub fn min_step(&self) -> f32 {
        self.book_width.bounds().0 + self.gap
    }

    /// Upper bound on books in one row for a given viewport width.
    ///
    /// Every book advances the row by at least `min_step`, so this many books
    /// always cover the width. Zero when a book can't advance the row at all.
    pub fn max_books_per_row(&self, viewport_w: f32) -> usize {
        let step = self.min_step();
        if !(step > 0.0) {
            return 0;
        }
        (viewport_w.max(0.0) / step).ceil() as usize + 1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
    pub lean_deg: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfRow {
    pub top: f32,
    pub books: Vec<Book>,
    covered: f32,
}

impl ShelfRow {
    /// Width taken by the books and the gaps after them.
    pub fn covered_width(&self) -> f32 {
        self.covered
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfLayout {
    pub width: f32,
    pub height: f32,
    pub rows: Vec<ShelfRow>,
}

impl ShelfLayout {
    pub fn book_count(&self) -> usize {
        self.rows.iter().map(|r| r.books.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Fill the viewport with shelf rows, each packed with books until it is covered.
pub fn generate_shelf<R: Rng + ?Sized>(
    viewport_w: f32,
    viewport_h: f32,
    params: &ShelfParams,
    rng: &mut R,
) -> ShelfLayout {
    if !(viewport_w > 0.0 && viewport_h > 0.0) || !(params.min_step() > 0.0) {
        return ShelfLayout::default();
    }
    let row_height = params.row_height.max(1.0);
    let rows = ((viewport_h / row_height).ceil() as usize).max(1);
    let cap = params.max_books_per_row(viewport_w);
    let max_book_height = (row_height - params.shelf_thickness).max(1.0);

    let rows = (0..rows)
        .map(|i| {
            let mut row = ShelfRow {
                top: i as f32 * row_height,
                books: Vec::new(),
                covered: 0.0,
            };
            while row.covered < viewport_w && row.books.len() < cap {
                let width = params.book_width.sample(rng);
                let height = params.book_height.sample(rng).min(max_book_height);
                let color = params.colors.choose(rng).copied().unwrap_or("#5d4037");
                let lean_deg = if rng.gen_bool(params.lean_chance.clamp(0.0, 1.0)) {
                    params.lean_deg
                } else {
                    0.0
                };
                row.books.push(Book {
                    x: row.covered,
                    width,
                    height,
                    color,
                    lean_deg,
                });
                row.covered += width + params.gap;
            }
            row
        })
        .collect();

    ShelfLayout {
        width: viewport_w,
        height: viewport_h,
        rows,
    }
}
