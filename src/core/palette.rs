// Static content consumed by the generators and cyclers.

/// Thought-bubble captions of the meadow cover; index 0 is the page's initial text.
pub const THOUGHTS: &[&str] = &[
    "F = G(m₁m₂)/r²",
    "F = ma",
    "What if light is particles?",
    "Every action...",
    "∫ F·ds = ΔKE",
    "Gravity!",
    "Principia Mathematica",
    "v = u + at",
];

pub const LIBRARY_CAPTIONS: &[&str] = &[
    "Every book is a conversation across centuries",
    "Curiosity is the first experiment",
    "Read slowly. Think twice.",
    "The shelves remember what we forget",
    "One more chapter...",
];

pub const LEAF_COLORS: &[&str] = &[
    "#4CAF50", "#66BB6A", "#81C784", "#A5D6A7", "#8BC34A", "#689F38",
];

pub const BOOK_COLORS: &[&str] = &[
    "#7b2d26", "#a0522d", "#5d4037", "#2e4a3a", "#1f3b5a", "#6b4e71", "#8d6e63", "#b5894b",
    "#3e2723", "#4a5d23", "#2c3e50", "#7f1d1d",
];

pub const SPARKLE_BACKGROUND: &str =
    "radial-gradient(circle, rgba(255,255,200,0.9), rgba(255,255,150,0))";
pub const DUST_BACKGROUND: &str = "rgba(255,236,200,0.65)";
pub const ORB_BACKGROUND: &str =
    "radial-gradient(circle, rgba(255,214,150,0.55), rgba(255,190,110,0))";
pub const LAMP_SPARKLE_BACKGROUND: &str =
    "radial-gradient(circle, rgba(255,240,190,1), rgba(255,200,120,0))";
