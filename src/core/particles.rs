use crate::constants::*;
use crate::core::palette::*;
use crate::core::rng::Spread;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

pub type Keyframes = SmallVec<[Keyframe; 4]>;

/// One keyframe of an ephemeral element's animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub transform: String,
    pub opacity: f32,
}

impl Keyframe {
    fn new(transform: impl Into<String>, opacity: f32) -> Self {
        Self {
            transform: transform.into(),
            opacity,
        }
    }
}

/// Everything needed to put one particle on the page and animate it away.
#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub css: String,
    pub keyframes: Keyframes,
    pub duration_ms: f64,
    pub easing: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Leaf,
    Sparkle,
    DustMote,
    LightOrb,
    LampSparkle,
}

impl ParticleKind {
    pub const MEADOW: [ParticleKind; 2] = [ParticleKind::Leaf, ParticleKind::Sparkle];
    pub const LIBRARY: [ParticleKind; 3] = [
        ParticleKind::DustMote,
        ParticleKind::LightOrb,
        ParticleKind::LampSparkle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParticleKind::Leaf => "leaf",
            ParticleKind::Sparkle => "sparkle",
            ParticleKind::DustMote => "dust",
            ParticleKind::LightOrb => "orb",
            ParticleKind::LampSparkle => "lamp-sparkle",
        }
    }

    pub fn interval_ms(self) -> i32 {
        match self {
            ParticleKind::Leaf => LEAF_INTERVAL_MS,
            ParticleKind::Sparkle => SPARKLE_INTERVAL_MS,
            ParticleKind::DustMote => DUST_INTERVAL_MS,
            ParticleKind::LightOrb => ORB_INTERVAL_MS,
            ParticleKind::LampSparkle => LAMP_SPARKLE_INTERVAL_MS,
        }
    }

    /// Lifetime range in seconds.
    pub fn duration_secs(self) -> Spread {
        match self {
            ParticleKind::Leaf => Spread::new(4.0, 6.0),
            ParticleKind::Sparkle => Spread::new(3.0, 4.0),
            ParticleKind::DustMote => Spread::new(6.0, 6.0),
            ParticleKind::LightOrb => Spread::new(5.0, 5.0),
            ParticleKind::LampSparkle => Spread::new(1.5, 1.5),
        }
    }

    /// Spawn region as (top %, left %).
    pub fn region(self) -> (Spread, Spread) {
        match self {
            ParticleKind::Leaf => (Spread::new(30.0, 20.0), Spread::new(55.0, 30.0)),
            ParticleKind::Sparkle => (Spread::new(30.0, 35.0), Spread::new(0.0, 100.0)),
            ParticleKind::DustMote => (Spread::new(10.0, 80.0), Spread::new(5.0, 90.0)),
            ParticleKind::LightOrb => (Spread::new(20.0, 50.0), Spread::new(10.0, 80.0)),
            ParticleKind::LampSparkle => (Spread::new(8.0, 12.0), Spread::new(70.0, 15.0)),
        }
    }

    fn z_index(self) -> u8 {
        match self {
            ParticleKind::Leaf => 12,
            ParticleKind::Sparkle => 15,
            ParticleKind::DustMote => 6,
            ParticleKind::LightOrb => 5,
            ParticleKind::LampSparkle => 8,
        }
    }

    pub fn spawn<R: Rng + ?Sized>(self, rng: &mut R) -> ParticleSpec {
        let (top, left) = self.region();
        let top = top.sample(rng);
        let left = left.sample(rng);
        let duration_ms = (self.duration_secs().sample(rng) * 1000.0) as f64;
        let z = self.z_index();

        let (look, keyframes, easing): (String, Keyframes, &'static str) = match self {
            ParticleKind::Leaf => {
                let w = Spread::new(6.0, 8.0).sample(rng);
                let h = Spread::new(4.0, 6.0).sample(rng);
                let color = LEAF_COLORS.choose(rng).copied().unwrap_or("#4CAF50");
                let drift = Spread::new(-50.0, 100.0).sample(rng);
                let r1 = Spread::new(90.0, 180.0).sample(rng);
                let r2 = Spread::new(180.0, 180.0).sample(rng);
                let r3 = Spread::new(360.0, 360.0).sample(rng);
                (
                    format!(
                        "width: {w:.1}px; height: {h:.1}px; background: {color}; \
                         border-radius: 0 50% 50% 50%; opacity: 0.8;"
                    ),
                    smallvec![
                        Keyframe::new("translate(0, 0) rotate(0deg)", 0.8),
                        Keyframe::new(
                            format!("translate({:.1}px, 100px) rotate({r1:.0}deg)", drift * 0.3),
                            0.7,
                        ),
                        Keyframe::new(
                            format!("translate({:.1}px, 250px) rotate({r2:.0}deg)", drift * 0.7),
                            0.5,
                        ),
                        Keyframe::new(
                            format!("translate({drift:.1}px, 400px) rotate({r3:.0}deg)"),
                            0.0,
                        ),
                    ],
                    "ease-in",
                )
            }
            ParticleKind::Sparkle => {
                let size = Spread::new(2.0, 4.0).sample(rng);
                (
                    round_look(size, SPARKLE_BACKGROUND),
                    smallvec![
                        Keyframe::new("scale(0.5)", 0.0),
                        Keyframe::new("scale(1.2)", 0.8),
                        Keyframe::new("scale(0.5) translateY(-30px)", 0.0),
                    ],
                    "ease-in-out",
                )
            }
            ParticleKind::DustMote => {
                let size = Spread::new(1.0, 2.5).sample(rng);
                let dx = Spread::new(-20.0, 40.0).sample(rng);
                let dy = Spread::new(-40.0, 30.0).sample(rng);
                (
                    round_look(size, DUST_BACKGROUND),
                    smallvec![
                        Keyframe::new("translate(0, 0)", 0.0),
                        Keyframe::new(
                            format!("translate({:.1}px, {:.1}px)", dx * 0.4, dy * 0.4),
                            0.5,
                        ),
                        Keyframe::new(
                            format!("translate({:.1}px, {:.1}px)", dx * 0.8, dy * 0.8),
                            0.35,
                        ),
                        Keyframe::new(format!("translate({dx:.1}px, {dy:.1}px)"), 0.0),
                    ],
                    "linear",
                )
            }
            ParticleKind::LightOrb => {
                let size = Spread::new(8.0, 14.0).sample(rng);
                let dx = Spread::new(-25.0, 50.0).sample(rng);
                let rise = Spread::new(20.0, 40.0).sample(rng);
                (
                    format!("{} filter: blur(2px);", round_look(size, ORB_BACKGROUND)),
                    smallvec![
                        Keyframe::new("translate(0, 0) scale(0.6)", 0.0),
                        Keyframe::new(
                            format!("translate({:.1}px, {:.1}px) scale(1)", dx * 0.5, -rise * 0.5),
                            0.6,
                        ),
                        Keyframe::new(
                            format!("translate({dx:.1}px, {:.1}px) scale(0.8)", -rise),
                            0.0,
                        ),
                    ],
                    "ease-in-out",
                )
            }
            ParticleKind::LampSparkle => {
                let size = Spread::new(2.0, 3.0).sample(rng);
                let dx = Spread::new(-10.0, 20.0).sample(rng);
                let rise = Spread::new(20.0, 30.0).sample(rng);
                (
                    round_look(size, LAMP_SPARKLE_BACKGROUND),
                    smallvec![
                        Keyframe::new("translate(0, 0) scale(0.4)", 0.0),
                        Keyframe::new(
                            format!("translate({:.1}px, {:.1}px) scale(1)", dx * 0.3, -rise * 0.3),
                            0.9,
                        ),
                        Keyframe::new(format!("translate({dx:.1}px, {:.1}px) scale(0.3)", -rise), 0.0),
                    ],
                    "ease-out",
                )
            }
        };

        ParticleSpec {
            kind: self,
            css: format!(
                "position: absolute; top: {top:.2}%; left: {left:.2}%; z-index: {z}; \
                 pointer-events: none; {look}"
            ),
            keyframes,
            duration_ms,
            easing,
        }
    }
}

fn round_look(size: f32, background: &str) -> String {
    format!("width: {size:.1}px; height: {size:.1}px; background: {background}; border-radius: 50%;")
}
