#![forbid(unsafe_code)]

//! Composite task-queue animations (system-update style).

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::{Effect, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dwell ticks per task, picked at random.
const DWELL_RANGE: std::ops::RangeInclusive<u32> = 5..=20;

/// Stock package list for [`TaskSequence::system_update`].
const SYSTEM_PACKAGES: &[&str] = &[
    "linux-headers",
    "gcc",
    "python3",
    "nodejs",
    "git",
    "vim",
    "curl",
    "wget",
    "htop",
    "neofetch",
    "docker",
    "nginx",
];

/// Drives a queue of named tasks: each dwells in a redrawn-in-place
/// "processing" state for a randomized number of ticks, then emits a
/// newline-terminated "done" line that survives as scrollback. Terminal
/// once the queue is exhausted and the summary line has been printed.
pub struct TaskSequence {
    tasks: Vec<String>,
    verb: &'static str,
    index: usize,
    remaining: u32,
    finished: bool,
    rng: StdRng,
}

impl TaskSequence {
    /// A sequence over `tasks`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when the task list is empty.
    pub fn new(tasks: Vec<String>) -> Result<Self> {
        if tasks.is_empty() {
            return Err(Error::InvalidConfig("task list must not be empty"));
        }
        let mut rng = StdRng::from_entropy();
        let remaining = rng.gen_range(DWELL_RANGE);
        Ok(Self {
            tasks,
            verb: "installed",
            index: 0,
            remaining,
            finished: false,
            rng,
        })
    }

    /// A system-update sequence over the stock package list.
    #[must_use]
    pub fn system_update() -> Self {
        let mut rng = StdRng::from_entropy();
        let remaining = rng.gen_range(DWELL_RANGE);
        Self {
            tasks: SYSTEM_PACKAGES.iter().map(|s| (*s).to_string()).collect(),
            verb: "installed",
            index: 0,
            remaining,
            finished: false,
            rng,
        }
    }

    /// Set the completion verb shown on done lines.
    #[must_use]
    pub fn verb(mut self, verb: &'static str) -> Self {
        self.verb = verb;
        self
    }

    /// Index of the task currently processing.
    #[must_use]
    pub fn current_task(&self) -> usize {
        self.index
    }

    fn counter(&self) -> String {
        format!("[{}/{}]", self.index + 1, self.tasks.len())
    }

    fn processing_frame(&self) -> Strip {
        let mut strip = Strip::new();
        strip.push_str(
            &self.counter(),
            Some(ColorRef::Named(NamedColor::Green)),
            StyleFlags::empty(),
        );
        strip.push_str(" Processing ", None, StyleFlags::empty());
        strip.push_str(&self.tasks[self.index], None, StyleFlags::BOLD);
        strip.push_str("...", None, StyleFlags::empty());
        strip
    }

    fn done_frame(&self) -> Strip {
        let mut strip = Strip::new();
        strip.push_str(
            &self.counter(),
            Some(ColorRef::Named(NamedColor::Green)),
            StyleFlags::empty(),
        );
        strip.push_str(" ✓ ", Some(ColorRef::Named(NamedColor::Green)), StyleFlags::empty());
        strip.push_str(&self.tasks[self.index], None, StyleFlags::BOLD);
        strip.push_str(" ", None, StyleFlags::empty());
        strip.push_str(self.verb, None, StyleFlags::empty());
        strip.push(Cell::new('\n'));
        strip
    }

    fn summary_frame(&self) -> Strip {
        let mut strip = Strip::new();
        strip.push_str(
            "✓ All tasks completed successfully",
            Some(ColorRef::Named(NamedColor::BrightGreen)),
            StyleFlags::empty(),
        );
        strip.push(Cell::new('\n'));
        strip
    }
}

impl Effect for TaskSequence {
    fn advance(&mut self) -> Frame {
        if self.index >= self.tasks.len() {
            self.finished = true;
            return Frame::Strip(self.summary_frame());
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return Frame::Strip(self.processing_frame());
        }
        let done = self.done_frame();
        self.index += 1;
        if self.index < self.tasks.len() {
            self.remaining = self.rng.gen_range(DWELL_RANGE);
        }
        Frame::Strip(done)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
