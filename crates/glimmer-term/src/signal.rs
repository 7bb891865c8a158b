#![forbid(unsafe_code)]

//! Signal and panic restore guards.
//!
//! An animation that dies to SIGINT must not leave the cursor hidden or the
//! terminal mid-SGR. [`SignalGuard`] watches SIGINT/SIGTERM on a background
//! thread, writes the restore bytes, and exits with the conventional
//! `128 + signal` status. [`install_panic_hook`] chains the same restore in
//! front of the default panic handler.

use std::io::{self, Write};
use std::sync::OnceLock;

use glimmer_render::ansi;

/// Write cursor-show and SGR-reset straight to stdout, ignoring failures.
/// Safe to call from any thread at any time.
pub fn best_effort_restore() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(ansi::SHOW_CURSOR);
    let _ = stdout.write_all(ansi::SGR_RESET);
    let _ = stdout.flush();
}

/// Install a process-wide panic hook that restores the terminal before the
/// default handler runs. Installing more than once is a no-op.
pub fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_restore();
            previous(info);
        }));
    });
}

#[cfg(unix)]
pub use unix::SignalGuard;

#[cfg(unix)]
mod unix {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::io;

    /// Restores the terminal when the process is interrupted or terminated.
    ///
    /// Dropping the guard stops the watcher thread. While alive, SIGINT and
    /// SIGTERM restore the cursor and exit with `128 + signal`.
    #[derive(Debug)]
    pub struct SignalGuard {
        handle: signal_hook::iterator::Handle,
        thread: Option<std::thread::JoinHandle<()>>,
    }

    impl SignalGuard {
        /// Spawn the watcher thread.
        ///
        /// # Errors
        ///
        /// Fails if signal registration fails.
        pub fn new() -> io::Result<Self> {
            let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
            let handle = signals.handle();
            let thread = std::thread::spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    super::best_effort_restore();
                    std::process::exit(128 + signal);
                }
            });
            Ok(Self {
                handle,
                thread: Some(thread),
            })
        }
    }

    impl Drop for SignalGuard {
        fn drop(&mut self) {
            self.handle.close();
            if let Some(thread) = self.thread.take() {
                let _ = thread.join();
            }
        }
    }
}
