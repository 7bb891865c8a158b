#![forbid(unsafe_code)]

//! Cell types: the unit of every frame.
//!
//! A [`Cell`] is one displayed glyph plus the color and style it should be
//! drawn with. Colors stay abstract ([`ColorRef`]) until presentation time,
//! so effect state never contains pre-rendered escape strings and the whole
//! effect layer stays terminal-protocol-agnostic.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// The 16 basic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NamedColor {
    /// Black (SGR 30).
    Black = 0,
    /// Red (SGR 31).
    Red = 1,
    /// Green (SGR 32).
    Green = 2,
    /// Yellow (SGR 33).
    Yellow = 3,
    /// Blue (SGR 34).
    Blue = 4,
    /// Magenta (SGR 35).
    Magenta = 5,
    /// Cyan (SGR 36).
    Cyan = 6,
    /// White (SGR 37).
    White = 7,
    /// Bright black (SGR 90).
    BrightBlack = 8,
    /// Bright red (SGR 91).
    BrightRed = 9,
    /// Bright green (SGR 92).
    BrightGreen = 10,
    /// Bright yellow (SGR 93).
    BrightYellow = 11,
    /// Bright blue (SGR 94).
    BrightBlue = 12,
    /// Bright magenta (SGR 95).
    BrightMagenta = 13,
    /// Bright cyan (SGR 96).
    BrightCyan = 14,
    /// Bright white (SGR 97).
    BrightWhite = 15,
}

impl NamedColor {
    /// SGR foreground code for this color (30–37 basic, 90–97 bright).
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        let idx = self as u8;
        if idx < 8 { 30 + idx } else { 90 + (idx - 8) }
    }
}

/// Protocol-independent color description, resolved at render time.
///
/// Effects store these; the ANSI layer turns them into escape bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// One of the 16 basic/bright colors.
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB.
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text style attributes, one bit per SGR toggle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold (SGR 1).
        const BOLD = 0b0000_0001;
        /// Dim (SGR 2).
        const DIM = 0b0000_0010;
        /// Italic (SGR 3).
        const ITALIC = 0b0000_0100;
        /// Underline (SGR 4).
        const UNDERLINE = 0b0000_1000;
        /// Blink (SGR 5).
        const BLINK = 0b0001_0000;
        /// Reverse video (SGR 7).
        const REVERSE = 0b0010_0000;
        /// Strikethrough (SGR 9).
        const STRIKETHROUGH = 0b0100_0000;
    }
}

impl StyleFlags {
    /// SGR enable code for a single flag bit.
    #[must_use]
    pub const fn sgr_code(flag: StyleFlags) -> Option<u8> {
        match flag.bits() {
            0b0000_0001 => Some(1),
            0b0000_0010 => Some(2),
            0b0000_0100 => Some(3),
            0b0000_1000 => Some(4),
            0b0001_0000 => Some(5),
            0b0010_0000 => Some(7),
            0b0100_0000 => Some(9),
            _ => None,
        }
    }
}

/// One glyph with its color and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The displayed character.
    pub glyph: char,
    /// Foreground color, or `None` for the terminal default.
    pub color: Option<ColorRef>,
    /// Style attributes.
    pub flags: StyleFlags,
}

impl Cell {
    /// A plain uncolored cell.
    #[must_use]
    pub const fn new(glyph: char) -> Self {
        Self {
            glyph,
            color: None,
            flags: StyleFlags::empty(),
        }
    }

    /// A colored cell with no extra style.
    #[must_use]
    pub const fn colored(glyph: char, color: ColorRef) -> Self {
        Self {
            glyph,
            color: Some(color),
            flags: StyleFlags::empty(),
        }
    }

    /// A colored and styled cell.
    #[must_use]
    pub const fn styled(glyph: char, color: ColorRef, flags: StyleFlags) -> Self {
        Self {
            glyph,
            color: Some(color),
            flags,
        }
    }

    /// Replace the style flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: StyleFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Display width of the glyph in terminal columns (wide glyphs count 2,
    /// zero-width marks count 0).
    #[must_use]
    pub fn width(&self) -> usize {
        self.glyph.width().unwrap_or(0)
    }

    /// Whether color and flags match, ignoring the glyph. Presentation uses
    /// this to coalesce adjacent cells into one SGR run.
    #[must_use]
    pub fn same_style(&self, other: &Cell) -> bool {
        self.color == other.color && self.flags == other.flags
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}
