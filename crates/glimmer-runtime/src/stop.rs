#![forbid(unsafe_code)]

//! Cooperative stop signaling between the caller and the worker.
//!
//! The worker's only blocking point is the inter-frame sleep. Backing that
//! sleep with a condvar means `stop` interrupts it immediately, so stop
//! latency is bounded by one tick of work, not one tick of sleep.

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Worker-side view of the stop flag.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

/// Caller-side trigger that sets the flag and wakes the sleeper.
pub struct StopHandle {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    /// Create a connected signal/handle pair.
    #[must_use]
    pub fn pair() -> (StopSignal, StopHandle) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        (
            StopSignal {
                inner: inner.clone(),
            },
            StopHandle { inner },
        )
    }

    /// Whether stop has been requested.
    #[must_use]
    pub fn is_set(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Sleep for up to `period`, waking early on stop.
    ///
    /// Returns `true` when stop was requested, `false` on a full sleep.
    /// Loops on spurious wakeups until the deadline truly passes.
    pub fn sleep(&self, period: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        let start = Instant::now();
        loop {
            if *stopped {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= period {
                return false;
            }
            let (guard, _) = cvar.wait_timeout(stopped, period - elapsed).unwrap();
            stopped = guard;
        }
    }
}

impl StopHandle {
    /// Request stop and wake any sleeper.
    pub fn set(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}
