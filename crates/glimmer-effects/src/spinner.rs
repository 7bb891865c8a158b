#![forbid(unsafe_code)]

//! Glyph-cycle spinners.

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::{Effect, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::presets::{self, PackageManagerTheme};

/// A message spinner: one glyph from a fixed cycle plus a label.
///
/// The cycle index wraps; the effect never terminates on its own.
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: Vec<String>,
    message: String,
    color: ColorRef,
    index: usize,
}

impl Spinner {
    /// Build from a named preset. Unknown names use the classic cycle.
    #[must_use]
    pub fn preset(name: &str, message: impl Into<String>) -> Self {
        let frames = presets::spinner_cycle(name)
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        Self {
            frames,
            message: message.into(),
            color: ColorRef::Named(NamedColor::Cyan),
            index: 0,
        }
    }

    /// Build from a caller-supplied glyph cycle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when the cycle is empty.
    pub fn custom(frames: Vec<String>, message: impl Into<String>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::InvalidConfig("spinner cycle must not be empty"));
        }
        Ok(Self {
            frames,
            message: message.into(),
            color: ColorRef::Named(NamedColor::Cyan),
            index: 0,
        })
    }

    /// Set the spinner color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Current cycle position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cycle length.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.frames.len()
    }
}

impl Effect for Spinner {
    fn advance(&mut self) -> Frame {
        let glyph = &self.frames[self.index];
        self.index = (self.index + 1) % self.frames.len();

        let mut strip = Strip::new();
        strip.push_str(glyph, Some(self.color), StyleFlags::empty());
        strip.push_str(" ", None, StyleFlags::empty());
        strip.push_str(&self.message, Some(self.color), StyleFlags::empty());
        strip.push_str("...", Some(self.color), StyleFlags::empty());
        Frame::Strip(strip)
    }
}

/// A pulsing ring framing a fixed label.
#[derive(Debug, Clone)]
pub struct PulseRing {
    label: String,
    color: ColorRef,
    index: usize,
}

/// Ring glyphs, widest to faintest and back.
const PULSE_RING: &[char] = &[
    '◯', '◉', '●', '◉', '◯', '○', '◦', '·', ' ', '·', '◦', '○',
];

impl PulseRing {
    /// A pulse ring around `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: ColorRef::Named(NamedColor::Magenta),
            index: 0,
        }
    }

    /// Set the ring color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }
}

impl Effect for PulseRing {
    fn advance(&mut self) -> Frame {
        let ring = PULSE_RING[self.index];
        self.index = (self.index + 1) % PULSE_RING.len();

        let mut strip = Strip::new();
        strip.push(Cell::colored(ring, self.color));
        strip.push_str(" ", None, StyleFlags::empty());
        strip.push_str(&self.label, Some(self.color), StyleFlags::empty());
        strip.push_str(" ", None, StyleFlags::empty());
        strip.push(Cell::colored(ring, self.color));
        Frame::Strip(strip)
    }
}

/// A package-manager-styled spinner with rotating status messages.
///
/// Every 50 ticks the status message is re-picked at random from the
/// theme's message list.
pub struct PackageManagerSpinner {
    theme: PackageManagerTheme,
    message: String,
    pinned_message: bool,
    index: usize,
    ticks_on_message: u32,
    rng: StdRng,
}

/// Ticks between message rotations (~5 s at the default period).
const MESSAGE_ROTATION_TICKS: u32 = 50;

impl PackageManagerSpinner {
    /// A spinner themed after `manager`. Unknown managers use the npm
    /// theme.
    #[must_use]
    pub fn new(manager: &str) -> Self {
        let theme = presets::package_manager(manager);
        let mut rng = StdRng::from_entropy();
        let message = theme.messages[rng.gen_range(0..theme.messages.len())].to_string();
        Self {
            theme,
            message,
            pinned_message: false,
            index: 0,
            ticks_on_message: 0,
            rng,
        }
    }

    /// Pin a fixed message instead of rotating through the theme's list.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self.pinned_message = true;
        self
    }

    /// The theme in use.
    #[must_use]
    pub fn theme(&self) -> &PackageManagerTheme {
        &self.theme
    }
}

impl Effect for PackageManagerSpinner {
    fn advance(&mut self) -> Frame {
        let glyph = self.theme.cycle[self.index];
        self.index = (self.index + 1) % self.theme.cycle.len();

        if !self.pinned_message {
            self.ticks_on_message += 1;
            if self.ticks_on_message > MESSAGE_ROTATION_TICKS {
                let pick = self.rng.gen_range(0..self.theme.messages.len());
                self.message = self.theme.messages[pick].to_string();
                self.ticks_on_message = 0;
            }
        }

        let mut strip = Strip::new();
        strip.push_str(glyph, Some(self.theme.color), StyleFlags::empty());
        strip.push_str(" ", None, StyleFlags::empty());
        strip.push_str(self.theme.prefix, Some(self.theme.color), StyleFlags::empty());
        strip.push_str(": ", Some(self.theme.color), StyleFlags::empty());
        strip.push_str(&self.message, Some(self.theme.color), StyleFlags::empty());
        strip.push_str("...", Some(self.theme.color), StyleFlags::empty());
        Frame::Strip(strip)
    }
}
