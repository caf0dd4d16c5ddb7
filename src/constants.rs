/// Scene tuning constants and DOM anchor names.
///
/// Every number the effects draw from lives here so the host tests and the
/// page agree on the same ranges.
// Anchors: meadow cover
pub const SEL_SCENE: &str = ".scene";
pub const SEL_TREE_GROUP: &str = ".tree-newton-group";
pub const SEL_SUN: &str = ".sun";
pub const SEL_CLOUD: &str = ".cloud";
pub const SEL_GRASS: &str = ".grass-blades";
pub const SEL_GRASS_TOP: &str = ".grass-blades-top";
pub const SEL_THOUGHT_TEXT: &str = ".thought-text";
pub const SEL_TITLE_WORD: &str = ".title-word";

// Anchors: library cover
pub const SEL_LIBRARY_SCENE: &str = ".library-scene";
pub const SEL_PARTICLES: &str = ".particles";
pub const SEL_BOOKSHELF: &str = ".bookshelf";
pub const SEL_LAMP_LIGHT: &str = ".lamp-light";
pub const SEL_LAMP_GLOW: &str = ".lamp-glow";
pub const SEL_CURSOR_GLOW: &str = ".cursor-glow";
pub const SEL_CAPTION_TEXT: &str = ".caption-text";
pub const SEL_BOOK_LINK: &str = ".book-link";

// Placeholder game canvas
pub const GAME_CANVAS_ID: &str = "gameCanvas";

// Attribute read from a scene root to seed the RNG
pub const SEED_ATTRIBUTE: &str = "data-seed";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Grass (viewBox units; the SVGs are 1920 wide)
pub const GRASS_VIEW_WIDTH: f32 = 1920.0;
pub const GRASS_HORIZON_COUNT: usize = 200;
pub const GRASS_HORIZON_BASELINE: f32 = 120.0;
pub const GRASS_TOP_COUNT: usize = 120;
pub const GRASS_TOP_BASELINE: f32 = 60.0;
pub const GRASS_SWAY_DELAY_MAX_SEC: f32 = 2.0;

// Meadow emitters (ms)
pub const LEAF_INTERVAL_MS: i32 = 2500;
pub const SPARKLE_INTERVAL_MS: i32 = 1000;
pub const THOUGHT_INTERVAL_MS: i32 = 5000;

// Meadow parallax gains (px per unit of centred pointer)
pub const TREE_SHIFT_X: f32 = -8.0;
pub const TREE_SHIFT_Y: f32 = -4.0;
pub const SUN_SHIFT_X: f32 = 15.0;
pub const SUN_SHIFT_Y: f32 = 10.0;
pub const SUN_SCALE_GAIN: f32 = 0.02;
pub const CLOUD_MARGIN_STEP: f32 = 5.0;

// Title hover
pub const TITLE_GLOW_FILTER: &str = "drop-shadow(0 0 15px rgba(74, 45, 138, 0.5))";
pub const TITLE_REST_FILTER: &str = "drop-shadow(2px 3px 4px rgba(0,0,0,0.15))";
pub const TITLE_GLOW_TRANSITION: &str = "filter 0.3s ease";

// Bookshelf
pub const SHELF_ROW_HEIGHT: f32 = 140.0;
pub const SHELF_BOARD_THICKNESS: f32 = 12.0;
pub const BOOK_WIDTH_MIN: f32 = 18.0;
pub const BOOK_WIDTH_SPAN: f32 = 26.0;
pub const BOOK_HEIGHT_MIN: f32 = 80.0;
pub const BOOK_HEIGHT_SPAN: f32 = 45.0;
pub const BOOK_GAP: f32 = 2.0;
pub const BOOK_LEAN_CHANCE: f64 = 0.08; // chance a book leans on its neighbour
pub const BOOK_LEAN_DEG: f32 = 6.0;
pub const RESIZE_DEBOUNCE_MS: i32 = 300;

// Library emitters (ms)
pub const DUST_INTERVAL_MS: i32 = 400;
pub const ORB_INTERVAL_MS: i32 = 1800;
pub const LAMP_SPARKLE_INTERVAL_MS: i32 = 700;
pub const CAPTION_INTERVAL_MS: i32 = 6000;

// Lamp flicker
pub const FLICKER_OPACITY_MIN: f32 = 0.82;
pub const FLICKER_OPACITY_MAX: f32 = 1.0;
pub const FLICKER_QUICK_CHANCE: f64 = 0.1; // rare quick flicker
pub const FLICKER_QUICK_DELAY_MS: (f32, f32) = (40.0, 120.0);
pub const FLICKER_BASE_DELAY_MS: (f32, f32) = (150.0, 600.0);

// Lamp glow / cursor aura
pub const LAMP_FOCAL_BASE_PCT: f32 = 50.0;
pub const LAMP_FOCAL_SPAN_PCT: f32 = 20.0; // focal point travel either side of centre
pub const LAMP_INTENSITY_BASE: f32 = 0.55;
pub const LAMP_INTENSITY_SPAN: f32 = 0.25;
pub const CURSOR_AURA_SIZE: f32 = 240.0;
pub const SHELF_PARALLAX_X: f32 = -6.0;
pub const SHELF_PARALLAX_Y: f32 = -3.0;
pub const BOOK_LINK_HOVER_TRANSFORM: &str = "translateY(-4px) rotate(-1deg)";
