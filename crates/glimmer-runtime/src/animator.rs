#![forbid(unsafe_code)]

//! The animator: one effect, one worker thread, one terminal.
//!
//! # Lifecycle
//!
//! ```text
//! idle --start()--> running --stop()--> idle
//! ```
//!
//! `start` spawns the worker; a second `start` without `stop` is
//! [`Error::AlreadyRunning`]. `stop` sets the stop flag, joins the worker,
//! and restores the sink; once it returns, no further frame can be observed.
//! `stop` on an idle animator is a no-op. A worker that fails mid-render
//! keeps its error until the join and surfaces it from `stop`.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use glimmer_term::TermSink;

use crate::effect::Effect;
use crate::error::{Error, Result};
use crate::stop::{StopHandle, StopSignal};

/// Default frame period (10 frames per second).
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

type WorkerOutcome<E, W> = (E, TermSink<W>, io::Result<()>);

struct Running<E: Effect, W: Write + Send + 'static> {
    handle: StopHandle,
    worker: thread::JoinHandle<WorkerOutcome<E, W>>,
}

/// Drives an [`Effect`] at a fixed period on a background worker thread.
pub struct Animator<E: Effect, W: Write + Send + 'static = io::Stdout> {
    period: Duration,
    idle: Option<(E, TermSink<W>)>,
    running: Option<Running<E, W>>,
}

impl<E: Effect> Animator<E, io::Stdout> {
    /// An animator rendering to standard output.
    #[must_use]
    pub fn new(effect: E) -> Self {
        Self::with_sink(effect, TermSink::stdout())
    }
}

impl<E: Effect, W: Write + Send + 'static> Animator<E, W> {
    /// An animator rendering to an explicit sink.
    #[must_use]
    pub fn with_sink(effect: E, sink: TermSink<W>) -> Self {
        Self {
            period: DEFAULT_PERIOD,
            idle: Some((effect, sink)),
            running: None,
        }
    }

    /// Set the tick period. Fixed per run; changing it requires the
    /// animator to be idle, which the builder position enforces.
    #[must_use]
    pub fn period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Whether a worker is currently owned (started and not yet stopped).
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Spawn the frame loop.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyRunning`] when called twice without `stop`.
    pub fn start(&mut self) -> Result<()> {
        if self.running.is_some() {
            return Err(Error::AlreadyRunning);
        }
        let Some((mut effect, mut sink)) = self.idle.take() else {
            return Err(Error::AlreadyRunning);
        };

        let (signal, handle) = StopSignal::pair();
        let period = self.period;
        let worker = thread::spawn(move || {
            let mut io_result = Ok(());
            loop {
                if signal.is_set() {
                    break;
                }
                let frame = effect.advance();
                if let Err(e) = sink.present(&frame) {
                    tracing::warn!(error = %e, "frame present failed, worker exiting");
                    io_result = Err(e);
                    break;
                }
                if effect.is_finished() {
                    tracing::debug!("effect reached terminal state");
                    break;
                }
                if signal.sleep(period) {
                    break;
                }
            }
            (effect, sink, io_result)
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "animator started");
        self.running = Some(Running { handle, worker });
        Ok(())
    }

    /// Signal the worker, join it, and restore the terminal.
    ///
    /// Idempotent: stopping an idle animator returns `Ok(())` and touches
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the worker's last render or the restore failed;
    /// [`Error::WorkerPanicked`] when the join recovered a panic (the sink's
    /// own drop has already restored the terminal in that case).
    pub fn stop(&mut self) -> Result<()> {
        let Some(running) = self.running.take() else {
            return Ok(());
        };
        running.handle.set();
        match running.worker.join() {
            Ok((effect, mut sink, io_result)) => {
                let restore_result = sink.restore();
                self.idle = Some((effect, sink));
                tracing::debug!("animator stopped");
                io_result?;
                restore_result?;
                Ok(())
            }
            Err(_) => {
                tracing::warn!("animation worker panicked");
                Err(Error::WorkerPanicked)
            }
        }
    }

    /// Borrow the effect while idle. `None` while running (the worker owns
    /// it exclusively).
    #[must_use]
    pub fn effect(&self) -> Option<&E> {
        self.idle.as_ref().map(|(effect, _)| effect)
    }
}

impl<E: Effect, W: Write + Send + 'static> Drop for Animator<E, W> {
    fn drop(&mut self) {
        if let Some(running) = self.running.take() {
            running.handle.set();
            // Don't join in drop to avoid blocking; the sink's drop in the
            // worker restores the terminal.
        }
    }
}
