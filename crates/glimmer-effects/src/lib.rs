#![forbid(unsafe_code)]

//! Effect implementations.
//!
//! Every type here implements [`glimmer_runtime::Effect`]: per-tick state
//! behind an `advance` that produces one frame. Construction validates all
//! numeric bounds, so a built effect can never fail arithmetically; named
//! presets (spinner cycles, glow ramps, bar styles, charsets) fall back to
//! documented defaults instead of erroring.

pub mod matrix;
pub mod motion;
pub mod physics;
pub mod player;
pub mod presets;
pub mod progress;
pub mod reveal;
pub mod sequence;
pub mod spinner;
pub mod text;

pub use matrix::MatrixRain;
pub use motion::{BounceText, ScrollText, SnakeLoader};
pub use physics::{BouncingBall, Helix, ParticleSwarm, StarField};
pub use player::FramePlayer;
pub use progress::ProgressBar;
pub use reveal::{DecryptText, GlitchText, TypewriterText};
pub use sequence::TaskSequence;
pub use spinner::{PackageManagerSpinner, PulseRing, Spinner};
pub use text::{FadeText, FireText, GlowText, NeonText, WaveText};
