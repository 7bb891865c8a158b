#![forbid(unsafe_code)]

//! Render kernel: cells, strips, grids, and ANSI escape generation.
//!
//! This crate is the bottom of the Glimmer dependency graph. It knows how to
//! describe one renderable frame (a single-line [`frame::Strip`] or a
//! two-dimensional [`frame::Grid`]) and how to turn colors and styles into
//! byte-exact escape sequences. It performs no I/O and owns no terminal
//! state; that is the sink's job.

pub mod ansi;
pub mod cell;
pub mod frame;

pub use cell::{Cell, ColorRef, NamedColor, StyleFlags};
pub use frame::{Frame, Grid, Strip};
