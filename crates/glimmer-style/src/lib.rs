#![forbid(unsafe_code)]

//! Color ramps and gradient selection for Glimmer effects.
//!
//! All tables here are read-only process-wide statics. Gradient lookup is
//! discrete-step: an intensity in `[0, 1]` picks `floor(intensity × (len−1))`,
//! never RGB interpolation, which is what gives the glow and fade effects
//! their stepped, retro look.

pub mod gradient;

pub use gradient::{
    FADE_RAMP, FIRE_PALETTE, Gradient, RAINBOW, glow_palette,
};
