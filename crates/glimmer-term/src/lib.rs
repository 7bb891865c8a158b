#![forbid(unsafe_code)]

//! Terminal sink: the only part of Glimmer that touches a real terminal.
//!
//! [`sink::TermSink`] owns cursor visibility, line/screen clearing, and the
//! presentation of rendered frames as single buffered writes. Restoration is
//! RAII: dropping a sink re-shows the cursor no matter how the animation
//! ended, and the unix [`signal::SignalGuard`] covers SIGINT/SIGTERM.

pub mod signal;
pub mod sink;

pub use sink::{TermSink, terminal_size};
