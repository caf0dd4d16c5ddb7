use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The one random source every generator and emitter draws from.
pub type SceneRng = StdRng;

/// Per-effect salts so sibling effects get independent streams from one seed.
pub const SALT_GRASS: u64 = 1;
pub const SALT_GRASS_TOP: u64 = 2;
pub const SALT_LEAF: u64 = 3;
pub const SALT_SPARKLE: u64 = 4;
pub const SALT_SHELF: u64 = 5;
pub const SALT_DUST: u64 = 6;
pub const SALT_ORB: u64 = 7;
pub const SALT_LAMP_SPARKLE: u64 = 8;
pub const SALT_FLICKER: u64 = 9;

/// Derive an effect's RNG from the scene seed.
pub fn child_rng(seed: u64, salt: u64) -> SceneRng {
    let mix = seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

/// Pick the scene seed: the given one, or fresh entropy.
pub fn scene_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// `base + U[0,1) * spread`, the shape every randomized parameter takes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
    pub base: f32,
    pub spread: f32,
}

impl Spread {
    pub const fn new(base: f32, spread: f32) -> Self {
        Self { base, spread }
    }

    /// Spread covering `[lo, hi)`.
    pub const fn between(lo: f32, hi: f32) -> Self {
        Self {
            base: lo,
            spread: hi - lo,
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.base + rng.gen::<f32>() * self.spread
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.base + self.spread
    }

    /// `(low, high)` ends of the range, whichever way the spread points.
    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        let end = self.max();
        (self.base.min(end), self.base.max(end))
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        let (lo, hi) = self.bounds();
        v >= lo && v <= hi
    }
}

/// Symmetric jitter in `[-magnitude/2, magnitude/2)`.
#[inline]
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, magnitude: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * magnitude
}
