#![forbid(unsafe_code)]

//! Color-mapping text transforms.
//!
//! These effects keep the source string fixed and re-color it every tick
//! from a phase value or a random pick out of a fixed palette. Random picks
//! are a membership contract: any entry of the declared candidate set is a
//! correct frame.

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::Effect;
use glimmer_style::gradient::{self, Gradient};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rainbow colors sweeping through the text, one step per tick.
#[derive(Debug, Clone)]
pub struct WaveText {
    text: String,
    offset: usize,
}

impl WaveText {
    /// A wave over `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
        }
    }
}

impl Effect for WaveText {
    fn advance(&mut self) -> Frame {
        let rainbow = gradient::RAINBOW.colors();
        let mut strip = Strip::new();
        for (i, glyph) in self.text.chars().enumerate() {
            if glyph == ' ' {
                strip.push(Cell::new(' '));
            } else {
                let color = rainbow[(i + self.offset) % rainbow.len()];
                strip.push(Cell::colored(glyph, color));
            }
        }
        self.offset = self.offset.wrapping_add(1);
        Frame::Strip(strip)
    }
}

/// Flame-ramp glyphs used by the fire transform.
const FIRE_GLYPHS: &[char] = &[
    '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█', '▇', '▆', '▅', '▄', '▃', '▂',
];

/// Text replaced by flickering flame glyphs in fire colors.
pub struct FireText {
    text: String,
    rng: StdRng,
}

impl FireText {
    /// A fire over the shape of `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Effect for FireText {
    fn advance(&mut self) -> Frame {
        let palette = gradient::FIRE_PALETTE.colors();
        let mut strip = Strip::new();
        for glyph in self.text.chars() {
            if glyph == ' ' {
                strip.push(Cell::new(' '));
            } else {
                let flame = FIRE_GLYPHS[self.rng.gen_range(0..FIRE_GLYPHS.len())];
                let color = palette[self.rng.gen_range(0..palette.len())];
                strip.push(Cell::colored(flame, color));
            }
        }
        Frame::Strip(strip)
    }
}

/// Phase advance per tick for the glow pulse.
const GLOW_PHASE_STEP: f64 = 0.2;

/// Bold text pulsing through a named glow ramp.
#[derive(Debug, Clone)]
pub struct GlowText {
    text: String,
    palette: Gradient,
    phase: f64,
}

impl GlowText {
    /// A glow over `text` using the named ramp (`cyan`, `red`, `green`,
    /// `purple`; unknown names use the white ramp).
    #[must_use]
    pub fn new(text: impl Into<String>, glow_color: &str) -> Self {
        Self {
            text: text.into(),
            palette: gradient::glow_palette(glow_color),
            phase: 0.0,
        }
    }

    /// Current pulse intensity in `[0, 1]`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        (self.phase.sin() + 1.0) / 2.0
    }
}

impl Effect for GlowText {
    fn advance(&mut self) -> Frame {
        let color = self.palette.at(self.intensity());
        let mut strip = Strip::new();
        strip.push_str("  ", None, StyleFlags::empty());
        strip.push_str(&self.text, Some(color), StyleFlags::BOLD);
        strip.push_str("  ", None, StyleFlags::empty());
        self.phase += GLOW_PHASE_STEP;
        Frame::Strip(strip)
    }
}

/// Fade direction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeMode {
    /// Ramp up, then restart from dark.
    In,
    /// Ramp up, then back down, cycling.
    InOut,
}

/// Text stepping through the brightness ramp.
#[derive(Debug, Clone)]
pub struct FadeText {
    text: String,
    mode: FadeMode,
    level: usize,
    rising: bool,
}

impl FadeText {
    /// A fade over `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, mode: FadeMode) -> Self {
        Self {
            text: text.into(),
            mode,
            level: 0,
            rising: true,
        }
    }

    /// Current ramp index.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }
}

impl Effect for FadeText {
    fn advance(&mut self) -> Frame {
        let ramp = gradient::FADE_RAMP.colors();
        let color = ramp[self.level];
        let strip = Strip::from_str(&self.text, Some(color), StyleFlags::empty());

        let top = ramp.len() - 1;
        match self.mode {
            FadeMode::In => {
                self.level = if self.level == top { 0 } else { self.level + 1 };
            }
            FadeMode::InOut => {
                if self.rising {
                    if self.level == top {
                        self.rising = false;
                        self.level -= 1;
                    } else {
                        self.level += 1;
                    }
                } else if self.level == 0 {
                    self.rising = true;
                    self.level += 1;
                } else {
                    self.level -= 1;
                }
            }
        }
        Frame::Strip(strip)
    }
}

/// Bright/dim color pair for one neon tube color.
#[derive(Debug, Clone, Copy)]
struct NeonColors {
    bright: ColorRef,
    dim: ColorRef,
}

fn neon_colors(name: &str) -> NeonColors {
    match name {
        "cyan" => NeonColors {
            bright: ColorRef::Rgb(0, 255, 255),
            dim: ColorRef::Rgb(0, 128, 128),
        },
        "pink" => NeonColors {
            bright: ColorRef::Rgb(255, 0, 255),
            dim: ColorRef::Rgb(128, 0, 128),
        },
        "green" => NeonColors {
            bright: ColorRef::Rgb(0, 255, 0),
            dim: ColorRef::Rgb(0, 128, 0),
        },
        _ => NeonColors {
            bright: ColorRef::Named(NamedColor::BrightWhite),
            dim: ColorRef::Named(NamedColor::White),
        },
    }
}

/// Flicker probability per tick.
const NEON_FLICKER_CHANCE: f64 = 0.1;

/// A neon sign: bright and bold, with occasional flicker to the dim tube.
pub struct NeonText {
    text: String,
    colors: NeonColors,
    rng: StdRng,
}

impl NeonText {
    /// A neon sign reading `text` in the named tube color (`cyan`, `pink`,
    /// `green`; unknown names are white).
    #[must_use]
    pub fn new(text: impl Into<String>, neon_color: &str) -> Self {
        Self {
            text: text.into(),
            colors: neon_colors(neon_color),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Effect for NeonText {
    fn advance(&mut self) -> Frame {
        let flicker = self.rng.gen_bool(NEON_FLICKER_CHANCE);
        let strip = if flicker {
            if self.rng.gen_bool(0.5) {
                Strip::from_str(&self.text, Some(self.colors.dim), StyleFlags::empty())
            } else {
                Strip::from_str(&self.text, Some(self.colors.bright), StyleFlags::DIM)
            }
        } else {
            Strip::from_str(&self.text, Some(self.colors.bright), StyleFlags::BOLD)
        };
        Frame::Strip(strip)
    }
}
