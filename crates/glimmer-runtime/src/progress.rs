#![forbid(unsafe_code)]

//! Caller→worker progress feeding.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared progress counter for driven effects.
///
/// The caller keeps one clone and calls [`set`](ProgressHandle::set) or
/// [`add`](ProgressHandle::add); the effect reads the value on its next
/// tick. Both sides are non-blocking. Clamping to the effect's total happens
/// inside the effect, which is the only place the total is known.
#[derive(Debug, Clone, Default)]
pub struct ProgressHandle {
    value: Arc<AtomicU64>,
}

impl ProgressHandle {
    /// A handle starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the current value.
    pub fn set(&self, value: u64) {
        self.value.store(value, Ordering::Relaxed);
    }

    /// Increase the current value by `amount`, saturating.
    pub fn add(&self, amount: u64) {
        // fetch_update never fails with a Some-returning closure.
        let _ = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                Some(v.saturating_add(amount))
            });
    }

    /// Read the current value.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
