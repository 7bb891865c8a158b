#![forbid(unsafe_code)]

//! Matrix-style digital rain.

use glimmer_render::cell::{Cell, ColorRef, NamedColor, StyleFlags};
use glimmer_render::frame::{Frame, Grid};
use glimmer_runtime::{Effect, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Per-column trail length range.
const TRAIL_RANGE: std::ops::RangeInclusive<usize> = 5..=15;

/// Digital rain: one drop head per column with a fading trail.
///
/// Heads advance one row per tick. A head that has fallen past the bottom
/// (plus its trail) respawns at the top with probability `density` per
/// tick, re-rolling its trail length.
pub struct MatrixRain {
    width: usize,
    height: usize,
    charset: Vec<char>,
    density: f64,
    drops: Vec<i64>,
    lengths: Vec<usize>,
    rng: StdRng,
}

impl MatrixRain {
    /// Rain over a `width × height` grid using a named charset (`matrix`,
    /// `binary`, `katakana`, `hex`, `symbols`; any other string is used as
    /// a literal custom charset).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when a dimension is zero or the resolved
    /// charset is empty.
    pub fn new(width: usize, height: usize, charset: &str, density: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("rain dimensions must be > 0"));
        }
        let charset = crate::presets::matrix_charset(charset);
        if charset.is_empty() {
            return Err(Error::InvalidConfig("rain charset must not be empty"));
        }
        let mut rng = StdRng::from_entropy();
        let lengths = (0..width).map(|_| rng.gen_range(TRAIL_RANGE)).collect();
        Ok(Self {
            width,
            height,
            charset,
            density: density.clamp(0.0, 1.0),
            drops: vec![0; width],
            lengths,
            rng,
        })
    }

    /// Head rows per column.
    #[must_use]
    pub fn drops(&self) -> &[i64] {
        &self.drops
    }

    /// Trail lengths per column.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    fn random_glyph(&mut self) -> char {
        self.charset[self.rng.gen_range(0..self.charset.len())]
    }
}

impl Effect for MatrixRain {
    fn advance(&mut self) -> Frame {
        let mut grid = Grid::new(self.width, self.height);
        for x in 0..self.width {
            let head = self.drops[x];
            let length = self.lengths[x] as i64;
            for y in 0..self.height {
                let row = y as i64;
                let cell = if row == head {
                    Some(Cell::styled(
                        self.random_glyph(),
                        ColorRef::Named(NamedColor::BrightWhite),
                        StyleFlags::empty(),
                    ))
                } else if row < head && head - row < length {
                    let dist = head - row;
                    let cell = if dist < 3 {
                        Cell::colored(self.random_glyph(), ColorRef::Named(NamedColor::BrightGreen))
                    } else if dist < 6 {
                        Cell::colored(self.random_glyph(), ColorRef::Named(NamedColor::Green))
                    } else {
                        Cell::styled(
                            self.random_glyph(),
                            ColorRef::Named(NamedColor::Green),
                            StyleFlags::DIM,
                        )
                    };
                    Some(cell)
                } else {
                    None
                };
                if let Some(cell) = cell {
                    grid.set(x, y, cell);
                }
            }
        }

        for x in 0..self.width {
            let past_bottom = self.drops[x] > (self.height + self.lengths[x]) as i64;
            if past_bottom && self.rng.gen_bool(self.density) {
                self.drops[x] = 0;
                self.lengths[x] = self.rng.gen_range(TRAIL_RANGE);
            } else {
                self.drops[x] += 1;
            }
        }
        Frame::Grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_rejected() {
        assert!(MatrixRain::new(0, 10, "matrix", 0.1).is_err());
        assert!(MatrixRain::new(10, 0, "matrix", 0.1).is_err());
    }

    #[test]
    fn glyphs_come_from_the_charset() {
        let charset: Vec<char> = "01".chars().collect();
        let mut rain = MatrixRain::new(12, 8, "binary", 0.2).unwrap();
        for _ in 0..40 {
            if let Frame::Grid(grid) = rain.advance() {
                for cell in grid.rows().flatten() {
                    if cell.glyph != ' ' {
                        assert!(charset.contains(&cell.glyph));
                    }
                }
            }
        }
    }

    #[test]
    fn custom_charset_string_is_honored() {
        let mut rain = MatrixRain::new(6, 6, "xy", 0.5).unwrap();
        if let Frame::Grid(grid) = rain.advance() {
            for cell in grid.rows().flatten() {
                if cell.glyph != ' ' {
                    assert!(cell.glyph == 'x' || cell.glyph == 'y');
                }
            }
        }
    }

    #[test]
    fn drops_advance_one_row_per_tick() {
        let mut rain = MatrixRain::new(5, 30, "matrix", 0.0).unwrap();
        let before = rain.drops().to_vec();
        let _ = rain.advance();
        for (prev, now) in before.iter().zip(rain.drops()) {
            assert_eq!(*now, prev + 1);
        }
    }

    #[test]
    fn full_density_respawns_past_the_bottom() {
        let mut rain = MatrixRain::new(4, 5, "matrix", 1.0).unwrap();
        // Max trail is 15, so by 25 ticks every column is past bottom and
        // must respawn at density 1.0.
        for _ in 0..25 {
            let _ = rain.advance();
        }
        assert!(rain.drops().iter().any(|d| *d < 25));
        for _ in 0..25 {
            let _ = rain.advance();
            for (drop, length) in rain.drops().iter().zip(rain.lengths()) {
                assert!(*drop <= (5 + *length) as i64 + 1);
            }
        }
    }

    #[test]
    fn trail_lengths_stay_in_declared_range() {
        let mut rain = MatrixRain::new(8, 4, "matrix", 1.0).unwrap();
        for _ in 0..80 {
            let _ = rain.advance();
            for length in rain.lengths() {
                assert!(TRAIL_RANGE.contains(length));
            }
        }
    }
}
