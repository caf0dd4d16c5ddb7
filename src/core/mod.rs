//! Platform-independent scene logic.
//!
//! Nothing under `core` touches the DOM: generators and emitters produce plain
//! descriptions that the web layer turns into elements, which keeps every
//! random draw reproducible from a seed and testable on the host.
pub mod caption;
pub mod debounce;
pub mod flicker;
pub mod generator;
pub mod lifecycle;
pub mod palette;
pub mod particles;
pub mod pointer;
pub mod rng;

pub use caption::CaptionCycler;
pub use debounce::Debounce;
pub use flicker::{Flicker, FlickerParams, FlickerStep};
pub use generator::{generate_grass, generate_shelf, Blade, GrassParams, ShelfLayout, ShelfParams};
pub use lifecycle::{EphemeralId, EphemeralSet};
pub use particles::{Keyframe, ParticleKind, ParticleSpec};
pub use rng::{child_rng, SceneRng, Spread};
