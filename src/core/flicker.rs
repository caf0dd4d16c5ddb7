use crate::constants::{
    FLICKER_BASE_DELAY_MS, FLICKER_OPACITY_MAX, FLICKER_OPACITY_MIN, FLICKER_QUICK_CHANCE,
    FLICKER_QUICK_DELAY_MS,
};
use crate::core::rng::Spread;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct FlickerParams {
    pub opacity: Spread,
    pub quick_chance: f64,
    pub quick_delay_ms: Spread,
    pub base_delay_ms: Spread,
}

impl Default for FlickerParams {
    fn default() -> Self {
        Self {
            opacity: Spread::between(FLICKER_OPACITY_MIN, FLICKER_OPACITY_MAX),
            quick_chance: FLICKER_QUICK_CHANCE,
            quick_delay_ms: Spread::between(FLICKER_QUICK_DELAY_MS.0, FLICKER_QUICK_DELAY_MS.1),
            base_delay_ms: Spread::between(FLICKER_BASE_DELAY_MS.0, FLICKER_BASE_DELAY_MS.1),
        }
    }
}

/// One flicker sample: the opacity to apply now and when to sample again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlickerStep {
    pub opacity: f32,
    pub delay_ms: f32,
    pub quick: bool,
}

/// Lamp flicker. Each step is drawn fresh from the band, so nothing
/// accumulates across ticks.
#[derive(Clone, Debug, Default)]
pub struct Flicker {
    pub params: FlickerParams,
}

impl Flicker {
    pub fn new(params: FlickerParams) -> Self {
        Self { params }
    }

    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> FlickerStep {
        let p = &self.params;
        let (lo, hi) = p.opacity.bounds();
        let opacity = p.opacity.sample(rng).clamp(lo, hi);
        let quick = rng.gen_bool(p.quick_chance.clamp(0.0, 1.0));
        let delay_ms = if quick {
            p.quick_delay_ms.sample(rng)
        } else {
            p.base_delay_ms.sample(rng)
        };
        FlickerStep {
            opacity,
            delay_ms,
            quick,
        }
    }
}
