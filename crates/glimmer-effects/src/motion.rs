#![forbid(unsafe_code)]

//! Sliding-window and oscillating text effects.

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Strip};
use glimmer_runtime::{Effect, Error, Result};

/// Scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Text moves leftwards (offset advances).
    Left,
    /// Text moves rightwards (offset retreats).
    Right,
}

/// A fixed window sliding over the text, wrapping around.
///
/// The text is padded with `width` spaces so it scrolls fully out of view
/// before re-entering. The offset is always reduced modulo the padded
/// length; no out-of-range index is ever produced.
#[derive(Debug, Clone)]
pub struct ScrollText {
    padded: Vec<char>,
    width: usize,
    direction: ScrollDirection,
    offset: usize,
    color: ColorRef,
}

impl ScrollText {
    /// A scroll over `text` through a `width`-cell window.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when `width` is zero.
    pub fn new(text: impl Into<String>, width: usize, direction: ScrollDirection) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidConfig("scroll width must be > 0"));
        }
        let mut padded: Vec<char> = text.into().chars().collect();
        padded.extend(std::iter::repeat_n(' ', width));
        Ok(Self {
            padded,
            width,
            direction,
            offset: 0,
            color: ColorRef::Named(NamedColor::Cyan),
        })
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Current window offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Effect for ScrollText {
    fn advance(&mut self) -> Frame {
        let len = self.padded.len();
        let mut strip = Strip::new();
        for i in 0..self.width {
            let glyph = self.padded[(self.offset + i) % len];
            strip.push(Cell::colored(glyph, self.color));
        }
        self.offset = match self.direction {
            ScrollDirection::Left => (self.offset + 1) % len,
            ScrollDirection::Right => (self.offset + len - 1) % len,
        };
        Frame::Strip(strip)
    }
}

/// Text sliding back and forth inside a fixed width.
///
/// The slide position stays in `[0, width − text_len]`; the direction
/// reflects at both ends, one cell per tick.
#[derive(Debug, Clone)]
pub struct BounceText {
    text: Vec<char>,
    span: usize,
    position: usize,
    direction: isize,
    color: ColorRef,
}

impl BounceText {
    /// A bounce of `text` within `width` cells.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when `width` does not exceed the text
    /// length (there would be no room to move).
    pub fn new(text: impl Into<String>, width: usize) -> Result<Self> {
        let text: Vec<char> = text.into().chars().collect();
        if width <= text.len() {
            return Err(Error::InvalidConfig("bounce width must exceed text length"));
        }
        Ok(Self {
            span: width - text.len(),
            text,
            position: 0,
            direction: 1,
            color: ColorRef::Named(NamedColor::Yellow),
        })
    }

    /// Set the text color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Current left padding.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Maximum left padding.
    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }
}

impl Effect for BounceText {
    fn advance(&mut self) -> Frame {
        let mut strip = Strip::new();
        for _ in 0..self.position {
            strip.push(Cell::new(' '));
        }
        for glyph in &self.text {
            strip.push(Cell::colored(*glyph, self.color));
        }
        for _ in self.position..self.span {
            strip.push(Cell::new(' '));
        }

        // Reflect at either end, then step.
        if (self.position == 0 && self.direction < 0)
            || (self.position == self.span && self.direction > 0)
        {
            self.direction = -self.direction;
        }
        self.position = self.position.saturating_add_signed(self.direction).min(self.span);
        Frame::Strip(strip)
    }
}

/// A snake sweeping back and forth across a bracketed track.
///
/// The head runs past either edge by the body length before turning, so the
/// tail fully exits before the sweep reverses. Only in-track cells are ever
/// drawn.
#[derive(Debug, Clone)]
pub struct SnakeLoader {
    length: usize,
    width: usize,
    position: isize,
    direction: isize,
    color: ColorRef,
}

impl SnakeLoader {
    /// A snake of `length` segments on a `width`-cell track.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when `length` or `width` is zero.
    pub fn new(length: usize, width: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidConfig("snake length must be > 0"));
        }
        if width == 0 {
            return Err(Error::InvalidConfig("snake width must be > 0"));
        }
        Ok(Self {
            length,
            width,
            position: 0,
            direction: 1,
            color: ColorRef::Named(NamedColor::Green),
        })
    }

    /// Set the snake color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    fn segment_glyph(&self, segment: usize) -> char {
        if segment == 0 {
            '●'
        } else if segment < self.length / 2 {
            '○'
        } else {
            '◦'
        }
    }
}

impl Effect for SnakeLoader {
    fn advance(&mut self) -> Frame {
        let mut track = vec![' '; self.width];
        for segment in 0..self.length {
            let pos = self.position - segment as isize;
            if (0..self.width as isize).contains(&pos) {
                track[pos as usize] = self.segment_glyph(segment);
            }
        }

        let mut strip = Strip::new();
        strip.push_str("[", None, StyleFlags::empty());
        for glyph in track {
            if glyph == ' ' {
                strip.push(Cell::new(' '));
            } else {
                strip.push(Cell::colored(glyph, self.color));
            }
        }
        strip.push_str("]", None, StyleFlags::empty());

        self.position += self.direction;
        if self.position >= (self.width + self.length) as isize {
            self.direction = -1;
        } else if self.position < -(self.length as isize) {
            self.direction = 1;
        }
        Frame::Strip(strip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn glyphs(frame: Frame) -> Vec<char> {
        match frame {
            Frame::Strip(strip) => strip.cells().iter().map(|c| c.glyph).collect(),
            Frame::Grid(_) => panic!("expected a strip"),
        }
    }

    // --- ScrollText ---

    #[test]
    fn zero_scroll_width_is_rejected() {
        assert!(matches!(
            ScrollText::new("hi", 0, ScrollDirection::Left),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn left_scroll_shifts_window_by_one() {
        let mut scroll = ScrollText::new("abcdef", 3, ScrollDirection::Left).unwrap();
        assert_eq!(glyphs(scroll.advance()), vec!['a', 'b', 'c']);
        assert_eq!(glyphs(scroll.advance()), vec!['b', 'c', 'd']);
    }

    #[test]
    fn right_scroll_wraps_backwards() {
        let mut scroll = ScrollText::new("ab", 2, ScrollDirection::Right).unwrap();
        // Padded content is "ab  " (len 4).
        assert_eq!(glyphs(scroll.advance()), vec!['a', 'b']);
        assert_eq!(glyphs(scroll.advance()), vec![' ', 'a']);
    }

    proptest! {
        #[test]
        fn scroll_offset_stays_in_padded_range(
            ticks in 0usize..200,
            width in 1usize..30,
            dir in prop::bool::ANY,
        ) {
            let direction = if dir { ScrollDirection::Left } else { ScrollDirection::Right };
            let mut scroll = ScrollText::new("wrap me around", width, direction).unwrap();
            let padded_len = "wrap me around".chars().count() + width;
            for _ in 0..ticks {
                let _ = scroll.advance();
                prop_assert!(scroll.offset() < padded_len);
            }
        }
    }

    // --- BounceText ---

    #[test]
    fn bounce_needs_room_to_move() {
        assert!(matches!(
            BounceText::new("toolong", 7),
            Err(Error::InvalidConfig(_))
        ));
        assert!(BounceText::new("ok", 3).is_ok());
    }

    #[test]
    fn bounce_reflects_at_both_ends() {
        let mut bounce = BounceText::new("x", 3).unwrap();
        // span = 2; positions walk 0,1,2,1,0,1...
        let expected = [0usize, 1, 2, 1, 0, 1];
        for want in expected {
            assert_eq!(bounce.position(), want);
            let _ = bounce.advance();
        }
    }

    #[test]
    fn bounce_frame_width_is_constant() {
        let mut bounce = BounceText::new("hi", 10).unwrap();
        for _ in 0..30 {
            assert_eq!(glyphs(bounce.advance()).len(), 10);
        }
    }

    proptest! {
        #[test]
        fn bounce_position_never_leaves_span(ticks in 0usize..300, width in 2usize..40) {
            let mut bounce = BounceText::new("x", width).unwrap();
            for _ in 0..ticks {
                let _ = bounce.advance();
                prop_assert!(bounce.position() <= bounce.span());
            }
        }
    }

    // --- SnakeLoader ---

    #[test]
    fn snake_zero_dimensions_rejected() {
        assert!(SnakeLoader::new(0, 10).is_err());
        assert!(SnakeLoader::new(5, 0).is_err());
    }

    #[test]
    fn snake_track_is_bracketed_and_fixed_width() {
        let mut snake = SnakeLoader::new(4, 12).unwrap();
        for _ in 0..60 {
            let frame = glyphs(snake.advance());
            assert_eq!(frame.len(), 14);
            assert_eq!(frame[0], '[');
            assert_eq!(frame[13], ']');
        }
    }

    #[test]
    fn snake_head_leads_with_filled_circle() {
        let mut snake = SnakeLoader::new(3, 10).unwrap();
        let frame = glyphs(snake.advance());
        // First tick: head at track cell 0.
        assert_eq!(frame[1], '●');
    }

    #[test]
    fn snake_sweeps_and_returns() {
        let mut snake = SnakeLoader::new(3, 8).unwrap();
        let mut saw_empty_track = false;
        for _ in 0..40 {
            let frame = glyphs(snake.advance());
            if frame[1..9].iter().all(|g| *g == ' ') {
                saw_empty_track = true;
            }
        }
        // The snake fully exits the track at the turnaround.
        assert!(saw_empty_track);
    }
}
