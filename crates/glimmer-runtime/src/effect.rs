#![forbid(unsafe_code)]

//! The effect capability.

use glimmer_render::frame::Frame;

/// A stateful unit producing one [`Frame`] per tick.
///
/// Effects own all of their mutable state exclusively; the animator only
/// ever calls [`advance`](Effect::advance) from the worker thread, once per
/// tick. Effects never read the wall clock; the only notion of time they
/// have is the tick count, whose real-time pacing belongs to the animator.
pub trait Effect: Send + 'static {
    /// Advance one tick and produce the frame to display.
    fn advance(&mut self) -> Frame;

    /// Whether the effect has reached a terminal state. The worker exits on
    /// its own once this is true; endless effects keep the default `false`.
    fn is_finished(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_render::cell::StyleFlags;
    use glimmer_render::frame::Strip;

    struct Counter(u32);

    impl Effect for Counter {
        fn advance(&mut self) -> Frame {
            self.0 += 1;
            Frame::Strip(Strip::from_str("x", None, StyleFlags::empty()))
        }

        fn is_finished(&self) -> bool {
            self.0 >= 3
        }
    }

    #[test]
    fn default_is_finished_is_false() {
        struct Endless;
        impl Effect for Endless {
            fn advance(&mut self) -> Frame {
                Frame::Strip(Strip::new())
            }
        }
        assert!(!Endless.is_finished());
    }

    #[test]
    fn terminal_effects_report_finished() {
        let mut counter = Counter(0);
        for _ in 0..3 {
            let _ = counter.advance();
        }
        assert!(counter.is_finished());
    }
}
