// Host-side tests for timer-driven state: caption cycling, lamp flicker and
// resize debouncing. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod rng {
        include!("../src/core/rng.rs");
    }
    pub mod caption {
        include!("../src/core/caption.rs");
    }
    pub mod flicker {
        include!("../src/core/flicker.rs");
    }
    pub mod debounce {
        include!("../src/core/debounce.rs");
    }
}

use crate::constants::*;
use crate::core::caption::CaptionCycler;
use crate::core::debounce::Debounce;
use crate::core::flicker::*;
use crate::core::palette::{LIBRARY_CAPTIONS, THOUGHTS};
use crate::core::rng::{child_rng, Spread};

#[test]
fn caption_starts_on_first_line_without_advancing() {
    let c = CaptionCycler::new(THOUGHTS);
    assert_eq!(c.index(), 0);
    assert_eq!(c.current(), Some(THOUGHTS[0]));
}

#[test]
fn caption_after_n_ticks_shows_line_n_mod_len() {
    for lines in [THOUGHTS, LIBRARY_CAPTIONS] {
        let mut c = CaptionCycler::new(lines);
        for n in 1..=3 * lines.len() + 2 {
            let shown = c.advance();
            assert_eq!(shown, Some(lines[n % lines.len()]));
            assert_eq!(c.current(), shown);
        }
    }
}

#[test]
fn caption_wraps_back_to_start() {
    let mut c = CaptionCycler::new(THOUGHTS);
    for _ in 0..THOUGHTS.len() {
        c.advance();
    }
    assert_eq!(c.index(), 0);
    assert_eq!(c.current(), Some("F = G(m₁m₂)/r²"));
}

#[test]
fn empty_caption_list_never_advances() {
    let mut c = CaptionCycler::new(&[]);
    assert_eq!(c.current(), None);
    assert_eq!(c.advance(), None);
    assert_eq!(c.index(), 0);
}

#[test]
fn single_caption_stays_put() {
    static ONE: &[&str] = &["Gravity!"];
    let mut c = CaptionCycler::new(ONE);
    assert_eq!(c.advance(), Some("Gravity!"));
    assert_eq!(c.advance(), Some("Gravity!"));
}

#[test]
fn flicker_opacity_stays_in_band_over_many_ticks() {
    let flicker = Flicker::default();
    let mut rng = child_rng(2024, 9);
    for _ in 0..100_000 {
        let step = flicker.step(&mut rng);
        assert!(
            step.opacity >= FLICKER_OPACITY_MIN && step.opacity <= FLICKER_OPACITY_MAX,
            "opacity {} left the band",
            step.opacity
        );
    }
}

#[test]
fn flicker_delays_come_from_their_regime() {
    let flicker = Flicker::default();
    let quick = flicker.params.quick_delay_ms;
    let base = flicker.params.base_delay_ms;
    let mut rng = child_rng(1, 9);
    let mut quick_count = 0usize;
    let n = 20_000;
    for _ in 0..n {
        let step = flicker.step(&mut rng);
        if step.quick {
            quick_count += 1;
            assert!(quick.contains(step.delay_ms));
        } else {
            assert!(base.contains(step.delay_ms));
        }
    }
    // rare but present: expect ~10%, allow generous slack
    let share = quick_count as f64 / n as f64;
    assert!(share > 0.05 && share < 0.15, "quick share {share}");
}

#[test]
fn flicker_is_deterministic_for_a_seed() {
    let flicker = Flicker::default();
    let a: Vec<FlickerStep> = {
        let mut rng = child_rng(10, 9);
        (0..50).map(|_| flicker.step(&mut rng)).collect()
    };
    let b: Vec<FlickerStep> = {
        let mut rng = child_rng(10, 9);
        (0..50).map(|_| flicker.step(&mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn flicker_never_quick_when_chance_is_zero() {
    let flicker = Flicker::new(FlickerParams {
        quick_chance: 0.0,
        ..FlickerParams::default()
    });
    let mut rng = child_rng(4, 4);
    assert!((0..1000).all(|_| !flicker.step(&mut rng).quick));
}

#[test]
fn custom_band_is_respected() {
    let flicker = Flicker::new(FlickerParams {
        opacity: Spread::between(0.2, 0.3),
        ..FlickerParams::default()
    });
    let mut rng = child_rng(6, 6);
    for _ in 0..1000 {
        let o = flicker.step(&mut rng).opacity;
        assert!((0.2..=0.3).contains(&o));
    }
}

#[test]
fn inverted_band_is_sampled_without_panicking() {
    let flicker = Flicker::new(FlickerParams {
        opacity: Spread::between(1.0, 0.8),
        ..FlickerParams::default()
    });
    let mut rng = child_rng(8, 8);
    for _ in 0..1000 {
        let o = flicker.step(&mut rng).opacity;
        assert!((0.8..=1.0).contains(&o), "opacity {o} outside band");
    }
}

#[test]
fn debounce_only_latest_token_fires() {
    let mut d = Debounce::default();
    let first = d.poke();
    let second = d.poke();
    let third = d.poke();
    assert!(!d.is_current(first));
    assert!(!d.is_current(second));
    assert!(d.is_current(third));
}

#[test]
fn debounce_single_event_fires() {
    let mut d = Debounce::default();
    let t = d.poke();
    assert!(d.is_current(t));
}
