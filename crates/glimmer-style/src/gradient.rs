#![forbid(unsafe_code)]

//! Fixed gradient tables and intensity-indexed selection.

use glimmer_render::cell::{ColorRef, NamedColor};

/// An ordered, fixed sequence of colors selected by normalized intensity.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    colors: &'static [ColorRef],
}

impl Gradient {
    /// Wrap a static color table. The table must be non-empty; every table
    /// in this crate is.
    #[must_use]
    pub const fn new(colors: &'static [ColorRef]) -> Self {
        Self { colors }
    }

    /// Select the entry for `intensity ∈ [0, 1]` (clamped) via
    /// `floor(intensity × (len − 1))`.
    #[must_use]
    pub fn at(&self, intensity: f64) -> ColorRef {
        let t = intensity.clamp(0.0, 1.0);
        let idx = (t * (self.colors.len() - 1) as f64) as usize;
        self.colors[idx]
    }

    /// The raw table, for effects that walk indices directly.
    #[must_use]
    pub const fn colors(&self) -> &'static [ColorRef] {
        self.colors
    }

    /// Number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table is empty. Always false for the built-in tables.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Cyan glow ramp, brightest first (256-palette blues).
pub const GLOW_CYAN: Gradient = Gradient::new(&[
    ColorRef::Indexed(51),
    ColorRef::Indexed(45),
    ColorRef::Indexed(39),
    ColorRef::Indexed(33),
    ColorRef::Indexed(27),
]);

/// Red glow ramp, brightest first.
pub const GLOW_RED: Gradient = Gradient::new(&[
    ColorRef::Indexed(196),
    ColorRef::Indexed(160),
    ColorRef::Indexed(124),
    ColorRef::Indexed(88),
    ColorRef::Indexed(52),
]);

/// Green glow ramp, brightest first.
pub const GLOW_GREEN: Gradient = Gradient::new(&[
    ColorRef::Indexed(46),
    ColorRef::Indexed(40),
    ColorRef::Indexed(34),
    ColorRef::Indexed(28),
    ColorRef::Indexed(22),
]);

/// Purple glow ramp, brightest first.
pub const GLOW_PURPLE: Gradient = Gradient::new(&[
    ColorRef::Indexed(129),
    ColorRef::Indexed(93),
    ColorRef::Indexed(57),
    ColorRef::Indexed(21),
    ColorRef::Indexed(19),
]);

/// White fallback ramp for unrecognized glow names.
pub const GLOW_WHITE: Gradient = Gradient::new(&[
    ColorRef::Named(NamedColor::BrightWhite),
    ColorRef::Named(NamedColor::White),
    ColorRef::Indexed(244),
]);

/// Fade ramp: very dark grey up to bright white, ten steps.
pub const FADE_RAMP: Gradient = Gradient::new(&[
    ColorRef::Indexed(235),
    ColorRef::Indexed(237),
    ColorRef::Indexed(239),
    ColorRef::Indexed(241),
    ColorRef::Indexed(243),
    ColorRef::Indexed(245),
    ColorRef::Indexed(247),
    ColorRef::Indexed(249),
    ColorRef::Indexed(251),
    ColorRef::Named(NamedColor::BrightWhite),
]);

/// Fire palette, red through yellow.
pub const FIRE_PALETTE: Gradient = Gradient::new(&[
    ColorRef::Rgb(255, 0, 0),
    ColorRef::Rgb(255, 69, 0),
    ColorRef::Rgb(255, 140, 0),
    ColorRef::Rgb(255, 165, 0),
    ColorRef::Rgb(255, 215, 0),
    ColorRef::Rgb(255, 255, 0),
]);

/// Seven-step rainbow for the wave transform.
pub const RAINBOW: Gradient = Gradient::new(&[
    ColorRef::Rgb(255, 0, 127),
    ColorRef::Rgb(255, 127, 0),
    ColorRef::Rgb(255, 255, 0),
    ColorRef::Rgb(127, 255, 0),
    ColorRef::Rgb(0, 255, 127),
    ColorRef::Rgb(0, 127, 255),
    ColorRef::Rgb(127, 0, 255),
]);

/// Look up a glow ramp by name. Unknown names fall back to the white ramp
/// rather than failing.
#[must_use]
pub fn glow_palette(name: &str) -> Gradient {
    match name {
        "cyan" => GLOW_CYAN,
        "red" => GLOW_RED,
        "green" => GLOW_GREEN,
        "purple" => GLOW_PURPLE,
        _ => GLOW_WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints_select_first_and_last() {
        assert_eq!(GLOW_CYAN.at(0.0), ColorRef::Indexed(51));
        assert_eq!(GLOW_CYAN.at(1.0), ColorRef::Indexed(27));
    }

    #[test]
    fn selection_is_floor_not_round() {
        // 10 entries, len-1 = 9; 0.99 * 9 = 8.91 → index 8, not 9.
        assert_eq!(FADE_RAMP.at(0.99), ColorRef::Indexed(251));
    }

    #[test]
    fn out_of_range_intensity_clamps() {
        assert_eq!(RAINBOW.at(-2.0), RAINBOW.colors()[0]);
        assert_eq!(RAINBOW.at(7.5), RAINBOW.colors()[6]);
    }

    #[test]
    fn unknown_glow_name_falls_back_to_white() {
        let g = glow_palette("no-such-ramp");
        assert_eq!(g.at(0.0), ColorRef::Named(NamedColor::BrightWhite));
    }

    #[test]
    fn known_glow_names_resolve() {
        assert_eq!(glow_palette("red").at(0.0), ColorRef::Indexed(196));
        assert_eq!(glow_palette("purple").at(0.0), ColorRef::Indexed(129));
    }

    proptest! {
        #[test]
        fn index_is_monotone_in_intensity(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let ramp = FADE_RAMP.colors();
            let lo_idx = ramp.iter().position(|c| *c == FADE_RAMP.at(lo)).unwrap();
            let hi_idx = ramp.iter().position(|c| *c == FADE_RAMP.at(hi)).unwrap();
            prop_assert!(lo_idx <= hi_idx);
        }
    }
}
