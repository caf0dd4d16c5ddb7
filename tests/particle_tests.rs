// Host-side tests for particle specs and the ephemeral-element lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

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
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
}

use crate::core::lifecycle::*;
use crate::core::particles::*;
use crate::core::rng::child_rng;

const ALL_KINDS: [ParticleKind; 5] = [
    ParticleKind::Leaf,
    ParticleKind::Sparkle,
    ParticleKind::DustMote,
    ParticleKind::LightOrb,
    ParticleKind::LampSparkle,
];

#[test]
fn spawned_particles_fade_out_and_respect_duration_range() {
    let mut rng = child_rng(42, 0);
    for kind in ALL_KINDS {
        let range = kind.duration_secs();
        for _ in 0..200 {
            let spec = kind.spawn(&mut rng);
            assert_eq!(spec.kind, kind);
            let secs = (spec.duration_ms / 1000.0) as f32;
            assert!(
                secs >= range.base - 1e-3 && secs <= range.max() + 1e-3,
                "{} lasted {secs}s",
                kind.name()
            );
            assert!(spec.keyframes.len() >= 3, "{} needs fade-in/drift/fade-out", kind.name());
            let last = spec.keyframes.last().unwrap();
            assert_eq!(last.opacity, 0.0, "{} must end invisible", kind.name());
            for k in &spec.keyframes {
                assert!((0.0..=1.0).contains(&k.opacity));
            }
            assert!(spec.css.contains("position: absolute"));
            assert!(spec.css.contains("pointer-events: none"));
        }
    }
}

#[test]
fn ambient_particles_fade_in_from_transparent() {
    let mut rng = child_rng(8, 1);
    for kind in [
        ParticleKind::Sparkle,
        ParticleKind::DustMote,
        ParticleKind::LightOrb,
        ParticleKind::LampSparkle,
    ] {
        let spec = kind.spawn(&mut rng);
        assert_eq!(spec.keyframes[0].opacity, 0.0);
        let peak = spec
            .keyframes
            .iter()
            .map(|k| k.opacity)
            .fold(0.0_f32, f32::max);
        assert!(peak > 0.0);
    }
}

#[test]
fn leaf_falls_from_resting_opacity() {
    let spec = ParticleKind::Leaf.spawn(&mut child_rng(3, 3));
    assert_eq!(spec.keyframes.len(), 4);
    assert_eq!(spec.keyframes[0].opacity, 0.8);
    assert_eq!(spec.keyframes[0].transform, "translate(0, 0) rotate(0deg)");
    assert!(spec.keyframes[3].transform.contains("400px"));
    assert_eq!(spec.easing, "ease-in");
}

#[test]
fn spawn_is_reproducible_per_seed() {
    let a = ParticleKind::DustMote.spawn(&mut child_rng(5, 6));
    let b = ParticleKind::DustMote.spawn(&mut child_rng(5, 6));
    assert_eq!(a.css, b.css);
    assert_eq!(a.keyframes, b.keyframes);
    assert_eq!(a.duration_ms, b.duration_ms);
}

#[test]
fn kinds_split_between_covers() {
    for kind in ParticleKind::MEADOW {
        assert!(!ParticleKind::LIBRARY.contains(&kind));
    }
    for kind in ALL_KINDS {
        assert!(kind.interval_ms() > 0);
    }
}

#[test]
fn record_is_not_expired_before_its_duration() {
    let mut set = EphemeralSet::new();
    let id = set.spawn("leaf", 1000.0, 4000.0);
    assert!(set.expire(1000.0).is_empty());
    assert!(set.expire(4999.9).is_empty());
    assert!(set.contains(id));
    assert_eq!(set.expire(5000.0), vec!["leaf"]);
    assert!(!set.contains(id));
    assert!(set.is_empty());
}

#[test]
fn completion_removes_exactly_once() {
    let mut set = EphemeralSet::new();
    let a = set.spawn(1u32, 0.0, 100.0);
    let b = set.spawn(2u32, 0.0, 100.0);
    assert_ne!(a, b);
    assert_eq!(set.complete(a), Some(1));
    assert_eq!(set.complete(a), None);
    assert_eq!(set.len(), 1);
    // a completed record is never swept again
    assert_eq!(set.expire(1_000.0), vec![2]);
    assert_eq!(set.complete(b), None);
}

#[test]
fn handle_can_be_updated_until_the_record_is_gone() {
    let mut set = EphemeralSet::new();
    let id = set.spawn(vec!["el"], 0.0, 100.0);
    if let Some(h) = set.get_mut(id) {
        h.push("animation");
    }
    assert_eq!(set.complete(id), Some(vec!["el", "animation"]));
    assert!(set.get_mut(id).is_none());
}

#[test]
fn expire_returns_oldest_first_and_keeps_the_rest() {
    let mut set = EphemeralSet::new();
    set.spawn("a", 0.0, 300.0);
    set.spawn("b", 100.0, 100.0);
    set.spawn("c", 200.0, 5_000.0);
    assert_eq!(set.expire(300.0), vec!["a", "b"]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.drain(), vec!["c"]);
    assert!(set.is_empty());
}

#[test]
fn every_spawn_is_eventually_removed() {
    let mut rng = child_rng(77, 2);
    let mut set = EphemeralSet::new();
    let mut now = 0.0;
    let mut removed = 0usize;
    let mut spawned = 0usize;
    for tick in 0..500 {
        now += ParticleKind::Sparkle.interval_ms() as f64;
        let spec = ParticleKind::Sparkle.spawn(&mut rng);
        let id = set.spawn(tick, now, spec.duration_ms);
        spawned += 1;
        // half the animations report completion, the rest are swept
        if tick % 2 == 0 {
            assert_eq!(set.complete(id), Some(tick));
            removed += 1;
        }
        removed += set.expire(now).len();
    }
    removed += set.expire(now + 60_000.0).len();
    assert_eq!(removed, spawned);
    assert!(set.is_empty());
}
