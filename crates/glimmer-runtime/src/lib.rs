#![forbid(unsafe_code)]

//! Animation lifecycle core.
//!
//! An [`Animator`] owns one [`Effect`] and one worker thread. `start` spawns
//! the fixed-period frame loop; `stop` signals it, joins it, and restores the
//! terminal. The join is a true synchronization point: no frame is observable
//! after `stop` returns.

pub mod animator;
pub mod effect;
pub mod error;
pub mod progress;
pub mod stop;

pub use animator::{Animator, DEFAULT_PERIOD};
pub use effect::Effect;
pub use error::{Error, Result};
pub use progress::ProgressHandle;
pub use stop::{StopHandle, StopSignal};
