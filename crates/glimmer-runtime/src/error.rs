#![forbid(unsafe_code)]

//! Error taxonomy for the animation engine.
//!
//! Configuration problems surface at construction, never at render time: a
//! constructed effect cannot fail arithmetically. Lifecycle misuse is limited
//! to double-start; stopping an idle animator is a no-op by contract.

use std::fmt;
use std::io;

/// Errors produced by the animation engine.
#[derive(Debug)]
pub enum Error {
    /// An effect was constructed with unusable parameters (zero total,
    /// zero-sized grid, empty glyph cycle).
    InvalidConfig(&'static str),
    /// `start` was called while the animator was already running.
    AlreadyRunning,
    /// The worker thread panicked; the terminal was still restored.
    WorkerPanicked,
    /// A sink write failed inside the worker, surfaced at `stop`.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(what) => write!(f, "invalid configuration: {what}"),
            Error::AlreadyRunning => write!(f, "animator is already running"),
            Error::WorkerPanicked => write!(f, "animation worker panicked"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
