#![forbid(unsafe_code)]

//! Identity-changing text transforms: characters are replaced, revealed, or
//! corrupted rather than re-colored.

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::Effect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Distractor pool for the decrypt transform.
const DECRYPT_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y',
    'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '!', '@', '#', '$', '%', '^',
    '&', '*', '(', ')',
];

/// Chance per tick for one unresolved character to resolve.
const DECRYPT_RESOLVE_CHANCE: f64 = 0.1;

/// Text that decrypts from random distractors.
///
/// Each position starts as a random distractor and resolves to its true
/// character independently, with probability 0.1 per tick. Resolution is
/// monotone: a resolved position never regresses. After the configured
/// iteration budget every remaining position is forced resolved and the
/// effect terminates.
pub struct DecryptText {
    text: Vec<char>,
    display: Vec<char>,
    resolved: Vec<bool>,
    iterations: u32,
    ticks: u32,
    color: ColorRef,
    rng: StdRng,
}

impl DecryptText {
    /// A decryption of `text` running at most `iterations` ticks.
    #[must_use]
    pub fn new(text: impl Into<String>, iterations: u32) -> Self {
        let text: Vec<char> = text.into().chars().collect();
        let mut rng = StdRng::from_entropy();
        let display = text
            .iter()
            .map(|_| DECRYPT_CHARS[rng.gen_range(0..DECRYPT_CHARS.len())])
            .collect();
        let resolved = vec![false; text.len()];
        Self {
            text,
            display,
            resolved,
            iterations,
            ticks: 0,
            color: ColorRef::Named(NamedColor::Green),
            rng,
        }
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Per-position resolution state.
    #[must_use]
    pub fn resolved(&self) -> &[bool] {
        &self.resolved
    }
}

impl Effect for DecryptText {
    fn advance(&mut self) -> Frame {
        self.ticks += 1;
        let force = self.ticks >= self.iterations;
        for i in 0..self.text.len() {
            if self.resolved[i] {
                continue;
            }
            if force || self.rng.gen_bool(DECRYPT_RESOLVE_CHANCE) {
                self.display[i] = self.text[i];
                self.resolved[i] = true;
            }
        }
        let mut strip = Strip::new();
        for glyph in &self.display {
            strip.push(Cell::colored(*glyph, self.color));
        }
        Frame::Strip(strip)
    }

    fn is_finished(&self) -> bool {
        self.resolved.iter().all(|r| *r)
    }
}

/// Typed-out text with a trailing blinking cursor.
///
/// One character appears per tick; the cursor disappears with the final
/// frame, at which point the effect terminates.
#[derive(Debug, Clone)]
pub struct TypewriterText {
    text: Vec<char>,
    cursor: char,
    revealed: usize,
    color: ColorRef,
}

impl TypewriterText {
    /// A typewriter over `text` with the given cursor glyph.
    #[must_use]
    pub fn new(text: impl Into<String>, cursor: char) -> Self {
        Self {
            text: text.into().chars().collect(),
            cursor,
            revealed: 0,
            color: ColorRef::Named(NamedColor::Cyan),
        }
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }
}

impl Effect for TypewriterText {
    fn advance(&mut self) -> Frame {
        if self.revealed < self.text.len() {
            self.revealed += 1;
        }
        let mut strip = Strip::new();
        for glyph in &self.text[..self.revealed] {
            strip.push(Cell::colored(*glyph, self.color));
        }
        if self.revealed < self.text.len() {
            strip.push(Cell::styled(self.cursor, self.color, StyleFlags::BLINK));
        }
        Frame::Strip(strip)
    }

    fn is_finished(&self) -> bool {
        self.revealed == self.text.len()
    }
}

/// Corruption pool for the glitch transform.
const GLITCH_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{',
    '}', '|', ';', '\'', ':', '"', ',', '.', '/', '<', '>', '?',
];

/// Corruption probability per character per tick.
const GLITCH_CHANCE: f64 = 0.1;

/// Text with random per-character corruption.
pub struct GlitchText {
    text: Vec<char>,
    color: ColorRef,
    rng: StdRng,
}

impl GlitchText {
    /// A glitching rendition of `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into().chars().collect(),
            color: ColorRef::Named(NamedColor::Cyan),
            rng: StdRng::from_entropy(),
        }
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }
}

impl Effect for GlitchText {
    fn advance(&mut self) -> Frame {
        let mut strip = Strip::new();
        for glyph in &self.text {
            let shown = if self.rng.gen_bool(GLITCH_CHANCE) {
                GLITCH_CHARS[self.rng.gen_range(0..GLITCH_CHARS.len())]
            } else {
                *glyph
            };
            strip.push(Cell::colored(shown, self.color));
        }
        Frame::Strip(strip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(frame: Frame) -> Vec<char> {
        match frame {
            Frame::Strip(strip) => strip.cells().iter().map(|c| c.glyph).collect(),
            Frame::Grid(_) => panic!("expected a strip"),
        }
    }

    // --- DecryptText ---

    #[test]
    fn resolution_is_monotone_per_position() {
        let text = "SECRET DATA";
        let mut decrypt = DecryptText::new(text, 60);
        let target: Vec<char> = text.chars().collect();
        let mut resolved_at: Vec<bool> = vec![false; target.len()];
        for _ in 0..60 {
            let frame = glyphs(decrypt.advance());
            for (i, was_resolved) in resolved_at.iter_mut().enumerate() {
                if *was_resolved {
                    assert_eq!(frame[i], target[i], "position {i} regressed");
                }
                if decrypt.resolved()[i] {
                    *was_resolved = true;
                }
            }
        }
    }

    #[test]
    fn iteration_budget_forces_completion() {
        let mut decrypt = DecryptText::new("hello", 5);
        let mut last = Vec::new();
        for _ in 0..5 {
            last = glyphs(decrypt.advance());
        }
        assert_eq!(last.iter().collect::<String>(), "hello");
        assert!(decrypt.is_finished());
    }

    #[test]
    fn unresolved_positions_show_pool_characters() {
        let mut decrypt = DecryptText::new("zzzz", 100);
        let frame = glyphs(decrypt.advance());
        for (i, glyph) in frame.iter().enumerate() {
            if !decrypt.resolved()[i] {
                assert!(DECRYPT_CHARS.contains(glyph));
            }
        }
    }

    // --- TypewriterText ---

    #[test]
    fn reveals_one_character_per_tick() {
        let mut tw = TypewriterText::new("abc", '|');
        assert_eq!(glyphs(tw.advance()), vec!['a', '|']);
        assert_eq!(glyphs(tw.advance()), vec!['a', 'b', '|']);
        assert_eq!(glyphs(tw.advance()), vec!['a', 'b', 'c']);
        assert!(tw.is_finished());
    }

    #[test]
    fn cursor_blinks_until_the_final_frame() {
        let mut tw = TypewriterText::new("ab", '_');
        let first = match tw.advance() {
            Frame::Strip(strip) => strip.cells().to_vec(),
            Frame::Grid(_) => panic!("expected a strip"),
        };
        assert!(first.last().unwrap().flags.contains(StyleFlags::BLINK));
        let last = match tw.advance() {
            Frame::Strip(strip) => strip.cells().to_vec(),
            Frame::Grid(_) => panic!("expected a strip"),
        };
        assert!(last.iter().all(|c| !c.flags.contains(StyleFlags::BLINK)));
    }

    // --- GlitchText ---

    #[test]
    fn glitched_characters_come_from_the_pool() {
        let text = "steady";
        let original: Vec<char> = text.chars().collect();
        let mut glitch = GlitchText::new(text);
        for _ in 0..50 {
            let frame = glyphs(glitch.advance());
            assert_eq!(frame.len(), original.len());
            for (shown, true_char) in frame.iter().zip(&original) {
                assert!(shown == true_char || GLITCH_CHARS.contains(shown));
            }
        }
    }
}
