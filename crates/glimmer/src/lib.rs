#![forbid(unsafe_code)]

//! Glimmer public facade crate.
//!
//! Re-exports the engine surface and offers the `run_with_*` drivers for
//! the common wrap-a-task-in-an-animation case:
//!
//! ```no_run
//! use glimmer::run_with_spinner;
//!
//! let answer = run_with_spinner("dots", "Crunching numbers", || {
//!     // ... long-running work ...
//!     42
//! })?;
//! # Ok::<(), glimmer::Error>(())
//! ```

// --- Render re-exports -----------------------------------------------------

pub use glimmer_render::ansi;
pub use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
pub use glimmer_render::frame::{Frame, Grid, Strip};

// --- Style re-exports ------------------------------------------------------

pub use glimmer_style::gradient::{self, Gradient};

// --- Terminal re-exports ---------------------------------------------------

#[cfg(unix)]
pub use glimmer_term::signal::SignalGuard;
pub use glimmer_term::signal::install_panic_hook;
pub use glimmer_term::{TermSink, terminal_size};

// --- Runtime re-exports ----------------------------------------------------

pub use glimmer_runtime::{
    Animator, DEFAULT_PERIOD, Effect, Error, ProgressHandle, Result,
};

// --- Effect re-exports -----------------------------------------------------

pub use glimmer_effects::{
    BounceText, BouncingBall, DecryptText, FadeText, FireText, FramePlayer, GlitchText,
    GlowText, Helix, MatrixRain, NeonText, PackageManagerSpinner, ParticleSwarm,
    ProgressBar, PulseRing, ScrollText, SnakeLoader, Spinner, StarField, TaskSequence,
    TypewriterText, WaveText, presets,
};
pub use glimmer_effects::motion::ScrollDirection;
pub use glimmer_effects::text::FadeMode;

/// Run `work` with a preset spinner animating on stdout.
///
/// The spinner starts before the closure and is always stopped (terminal
/// restored) before the closure's result is returned.
///
/// # Errors
///
/// Propagates animator lifecycle errors; the closure's own result is
/// returned unchanged alongside them.
pub fn run_with_spinner<T>(
    preset: &str,
    message: &str,
    work: impl FnOnce() -> T,
) -> Result<T> {
    let mut animator = Animator::new(Spinner::preset(preset, message));
    animator.start()?;
    let result = work();
    animator.stop()?;
    Ok(result)
}

/// Run `work` with a progress bar on stdout, handing it the feeding handle.
///
/// # Errors
///
/// [`Error::InvalidConfig`] for a zero `total`, plus animator lifecycle
/// errors.
pub fn run_with_progress<T>(
    total: u64,
    work: impl FnOnce(ProgressHandle) -> T,
) -> Result<T> {
    let bar = ProgressBar::new(total, 40)?.show_eta(true);
    let handle = bar.handle();
    let mut animator = Animator::new(bar);
    animator.start()?;
    let result = work(handle);
    animator.stop()?;
    Ok(result)
}
