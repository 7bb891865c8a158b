#![forbid(unsafe_code)]

//! Pre-baked ASCII-art frame playback.

use glimmer_render::cell::{Cell, ColorRef, NamedColor};
use glimmer_render::frame::{Frame, Grid};
use glimmer_runtime::{Effect, Error, Result};

/// Cycles a fixed list of multi-line string frames as grids.
///
/// All frames share one canvas sized to the largest frame, so smaller
/// frames overwrite larger ones cleanly.
#[derive(Debug, Clone)]
pub struct FramePlayer {
    frames: Vec<String>,
    width: usize,
    height: usize,
    color: ColorRef,
    index: usize,
}

impl FramePlayer {
    /// A player over `frames`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when the list is empty or no frame has any
    /// visible content.
    pub fn new(frames: Vec<String>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::InvalidConfig("frame list must not be empty"));
        }
        let mut width = 0;
        let mut height = 0;
        for frame in &frames {
            height = height.max(frame.lines().count());
            for line in frame.lines() {
                width = width.max(line.chars().count());
            }
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("frames must have visible content"));
        }
        Ok(Self {
            frames,
            width,
            height,
            color: ColorRef::Named(NamedColor::Cyan),
            index: 0,
        })
    }

    /// Set the art color.
    #[must_use]
    pub fn color(mut self, color: ColorRef) -> Self {
        self.color = color;
        self
    }

    /// Shared canvas dimensions.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

impl Effect for FramePlayer {
    fn advance(&mut self) -> Frame {
        let art = &self.frames[self.index];
        self.index = (self.index + 1) % self.frames.len();

        let mut grid = Grid::new(self.width, self.height);
        for (y, line) in art.lines().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                if glyph != ' ' {
                    grid.set(x, y, Cell::colored(glyph, self.color));
                }
            }
        }
        Frame::Grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_list_rejected() {
        assert!(matches!(
            FramePlayer::new(Vec::new()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn blank_frames_rejected() {
        assert!(FramePlayer::new(vec![String::new()]).is_err());
    }

    #[test]
    fn canvas_fits_the_largest_frame() {
        let player = FramePlayer::new(vec!["ab\ncd".into(), "wider line".into()]).unwrap();
        assert_eq!(player.dimensions(), (10, 2));
    }

    #[test]
    fn frames_cycle_in_order() {
        let mut player = FramePlayer::new(vec!["A".into(), "B".into()]).unwrap();
        let glyph_at = |frame: Frame| match frame {
            Frame::Grid(grid) => grid.get(0, 0).unwrap().glyph,
            Frame::Strip(_) => panic!("expected a grid"),
        };
        assert_eq!(glyph_at(player.advance()), 'A');
        assert_eq!(glyph_at(player.advance()), 'B');
        assert_eq!(glyph_at(player.advance()), 'A');
    }

    #[test]
    fn art_lands_at_its_line_positions() {
        let mut player = FramePlayer::new(vec!["x\n y".into()]).unwrap();
        if let Frame::Grid(grid) = player.advance() {
            assert_eq!(grid.get(0, 0).unwrap().glyph, 'x');
            assert_eq!(grid.get(1, 1).unwrap().glyph, 'y');
            assert_eq!(grid.get(1, 0).unwrap().glyph, ' ');
        }
    }
}
