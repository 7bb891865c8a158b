#![forbid(unsafe_code)]

//! Driven progress bar.

use std::collections::VecDeque;
use std::time::Duration;

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::animator::DEFAULT_PERIOD;
use glimmer_runtime::{Effect, Error, ProgressHandle, Result};

use crate::presets::{self, BarStyle};

/// Ring-buffer capacity for throughput smoothing.
const SPEED_SAMPLES: usize = 10;

/// A progress bar fed by the caller through a [`ProgressHandle`].
///
/// The worker re-reads the shared counter every tick and clamps it to
/// `[0, total]`; feeding values past `total` is a documented no-op. The
/// effect terminates once the bar is full.
///
/// Elapsed time for ETA and throughput is tick-derived (`ticks × period`),
/// so the bar must be told the animator's period when it differs from the
/// default.
pub struct ProgressBar {
    total: u64,
    width: usize,
    style: BarStyle,
    color: ColorRef,
    show_percentage: bool,
    show_eta: bool,
    show_speed: bool,
    period: Duration,
    handle: ProgressHandle,
    current: u64,
    ticks: u64,
    start_tick: Option<u64>,
    last_update_tick: u64,
    speed_samples: VecDeque<f64>,
}

impl ProgressBar {
    /// A bar of `width` cells tracking `total` units of work.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when `total` or `width` is zero.
    pub fn new(total: u64, width: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::InvalidConfig("progress total must be > 0"));
        }
        if width == 0 {
            return Err(Error::InvalidConfig("progress width must be > 0"));
        }
        Ok(Self {
            total,
            width,
            style: presets::bar_style("blocks"),
            color: ColorRef::Named(NamedColor::Cyan),
            show_percentage: true,
            show_eta: false,
            show_speed: false,
            period: DEFAULT_PERIOD,
            handle: ProgressHandle::new(),
            current: 0,
            ticks: 0,
            start_tick: None,
            last_update_tick: 0,
            speed_samples: VecDeque::with_capacity(SPEED_SAMPLES),
        })
    }

    /// Pick a named bar style (`blocks`, `arrows`, `dots`, `lines`;
    /// unknown names fall back to `blocks`).
    #[must_use]
    pub fn style(mut self, name: &str) -> Self {
        self.style = presets::bar_style(name);
        self
    }

    /// Use explicit fill/empty glyphs.
    #[must_use]
    pub fn glyphs(mut self, fill: char, empty: char) -> Self {
        self.style = BarStyle { fill, empty };
        self
    }

    /// Set the bar color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Toggle the percentage readout.
    #[must_use]
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.show_percentage = show;
        self
    }

    /// Toggle the ETA readout.
    #[must_use]
    pub fn show_eta(mut self, show: bool) -> Self {
        self.show_eta = show;
        self
    }

    /// Toggle the smoothed-throughput readout.
    #[must_use]
    pub fn show_speed(mut self, show: bool) -> Self {
        self.show_speed = show;
        self
    }

    /// Tell the bar the animator's tick period, for time-derived readouts.
    #[must_use]
    pub fn tick_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// The caller-side feeding handle.
    #[must_use]
    pub fn handle(&self) -> ProgressHandle {
        self.handle.clone()
    }

    /// Clamped progress value as of the last tick.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Configured total.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Completion percentage as of the last tick.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        (self.current as f64 / self.total as f64) * 100.0
    }

    /// Filled cell count as of the last tick.
    #[must_use]
    pub fn filled_width(&self) -> usize {
        ((self.current as f64 / self.total as f64) * self.width as f64) as usize
    }

    /// Recorded throughput samples (most recent last).
    #[must_use]
    pub fn speed_samples(&self) -> &VecDeque<f64> {
        &self.speed_samples
    }

    fn observe(&mut self) {
        let fed = self.handle.get().min(self.total);
        if fed > self.current {
            if self.start_tick.is_none() {
                self.start_tick = Some(self.ticks);
            } else {
                let delta_ticks = self.ticks.saturating_sub(self.last_update_tick).max(1);
                let elapsed = delta_ticks as f64 * self.period.as_secs_f64();
                let rate = (fed - self.current) as f64 / elapsed;
                if self.speed_samples.len() == SPEED_SAMPLES {
                    self.speed_samples.pop_front();
                }
                self.speed_samples.push_back(rate);
            }
            self.last_update_tick = self.ticks;
            self.current = fed;
        }
    }

    fn render(&self) -> Strip {
        let filled = self.filled_width();
        let mut strip = Strip::new();
        strip.push_str("[", Some(self.color), StyleFlags::empty());
        for _ in 0..filled {
            strip.push(Cell::colored(self.style.fill, self.color));
        }
        for _ in filled..self.width {
            strip.push(Cell::colored(self.style.empty, self.color));
        }
        strip.push_str("]", Some(self.color), StyleFlags::empty());

        if self.show_percentage {
            let pct = format!(" {:5.1}%", self.percentage());
            strip.push_str(&pct, None, StyleFlags::empty());
        }

        let counts = format!(" ({}/{})", self.current, self.total);
        strip.push_str(&counts, None, StyleFlags::empty());

        if self.show_speed && !self.speed_samples.is_empty() {
            let mean: f64 =
                self.speed_samples.iter().sum::<f64>() / self.speed_samples.len() as f64;
            let speed = format!(" Speed: {mean:.1}/s");
            strip.push_str(&speed, None, StyleFlags::empty());
        }

        if self.show_eta && self.current > 0 && self.current < self.total {
            if let Some(start) = self.start_tick {
                let elapsed = (self.ticks - start) as f64 * self.period.as_secs_f64();
                let eta = elapsed / self.current as f64 * (self.total - self.current) as f64;
                let eta = format!(" ETA: {eta:.0}s");
                strip.push_str(&eta, None, StyleFlags::empty());
            }
        }
        strip
    }
}

impl Effect for ProgressBar {
    fn advance(&mut self) -> Frame {
        self.ticks += 1;
        self.observe();
        Frame::Strip(self.render())
    }

    fn is_finished(&self) -> bool {
        self.current == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strip_text(frame: &Frame) -> String {
        match frame {
            Frame::Strip(strip) => strip.cells().iter().map(|c| c.glyph).collect(),
            Frame::Grid(_) => panic!("expected a strip"),
        }
    }

    // --- construction ---

    #[test]
    fn zero_total_is_rejected() {
        assert!(matches!(
            ProgressBar::new(0, 10),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(
            ProgressBar::new(10, 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    // --- clamping ---

    #[test]
    fn update_clamps_to_total() {
        let mut bar = ProgressBar::new(50, 10).unwrap();
        let handle = bar.handle();
        handle.set(999);
        let _ = bar.advance();
        assert_eq!(bar.current(), 50);
        assert!((bar.percentage() - 100.0).abs() < f64::EPSILON);
        assert!(bar.is_finished());
    }

    #[test]
    fn spec_example_half_full() {
        let mut bar = ProgressBar::new(50, 10).unwrap();
        let handle = bar.handle();
        handle.set(25);
        let _ = bar.advance();
        assert_eq!(bar.current(), 25);
        assert_eq!(bar.filled_width(), 5);
        assert!((bar.percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rendered_bar_has_configured_width() {
        let mut bar = ProgressBar::new(4, 8).unwrap();
        bar.handle().set(2);
        let text = strip_text(&bar.advance());
        assert!(text.starts_with("[████░░░░]"));
    }

    #[test]
    fn eta_is_omitted_at_zero_progress() {
        let mut bar = ProgressBar::new(10, 10).unwrap().show_eta(true);
        let text = strip_text(&bar.advance());
        assert!(!text.contains("ETA"));
    }

    #[test]
    fn eta_appears_once_progress_is_nonzero() {
        let mut bar = ProgressBar::new(10, 10).unwrap().show_eta(true);
        bar.handle().set(2);
        let _ = bar.advance();
        bar.handle().set(4);
        let text = strip_text(&bar.advance());
        assert!(text.contains("ETA:"));
    }

    #[test]
    fn increment_accumulates() {
        let mut bar = ProgressBar::new(10, 10).unwrap();
        let handle = bar.handle();
        handle.add(3);
        handle.add(4);
        let _ = bar.advance();
        assert_eq!(bar.current(), 7);
    }

    // --- throughput ring buffer ---

    #[test]
    fn speed_samples_are_capped_fifo() {
        let mut bar = ProgressBar::new(1000, 10).unwrap().show_speed(true);
        let handle = bar.handle();
        for step in 1..=20u64 {
            handle.set(step * 10);
            let _ = bar.advance();
        }
        assert_eq!(bar.speed_samples().len(), SPEED_SAMPLES);
    }

    #[test]
    fn oldest_sample_is_evicted_first() {
        let mut bar = ProgressBar::new(10_000, 10).unwrap();
        let handle = bar.handle();
        // First feed sets the start tick; the next twelve produce samples
        // with strictly growing deltas, so rates grow too.
        handle.set(1);
        let _ = bar.advance();
        let mut fed = 1u64;
        for step in 1..=12u64 {
            fed += step * 10;
            handle.set(fed);
            let _ = bar.advance();
        }
        let samples: Vec<f64> = bar.speed_samples().iter().copied().collect();
        assert_eq!(samples.len(), SPEED_SAMPLES);
        // The two smallest (oldest) rates are gone.
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
        assert!(samples[0] > 20.0 / DEFAULT_PERIOD.as_secs_f64() - 1.0);
    }

    #[test]
    fn completion_is_terminal_and_sticky() {
        let mut bar = ProgressBar::new(5, 5).unwrap();
        let handle = bar.handle();
        handle.set(5);
        let _ = bar.advance();
        assert!(bar.is_finished());
        handle.set(3);
        let _ = bar.advance();
        // Progress never regresses: the bar keeps its completed state.
        assert_eq!(bar.current(), 5);
    }

    proptest! {
        #[test]
        fn current_is_always_clamped(feeds in proptest::collection::vec(0u64..10_000, 1..50)) {
            let mut bar = ProgressBar::new(100, 10).unwrap();
            let handle = bar.handle();
            for feed in feeds {
                handle.set(feed);
                let _ = bar.advance();
                prop_assert!(bar.current() <= bar.total());
            }
        }
    }
}
