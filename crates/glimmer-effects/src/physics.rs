#![forbid(unsafe_code)]

//! Physics-driven grid effects: continuous positions, elastic reflection.
//!
//! All of them share one tick convention, fixed deliberately because the
//! alternatives disagree visually at the edges: **reflect** (negate a
//! velocity component whose next step would leave `[0, bound−1]`), then
//! **integrate** (add the velocity), then **clamp** into `[0, bound−1]`.

use std::collections::VecDeque;

use glimmer_render::cell::{Cell, ColorRef, NamedColor};
use glimmer_render::frame::{Frame, Grid};
use glimmer_runtime::{Effect, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Advance one axis by one tick: reflect, integrate, clamp.
///
/// The velocity is negated exactly when `pos + vel` would leave
/// `[0, bound − 1]`.
pub fn bounce_step(pos: &mut f64, vel: &mut f64, bound: usize) {
    let max = (bound - 1) as f64;
    let next = *pos + *vel;
    if next < 0.0 || next > max {
        *vel = -*vel;
    }
    *pos += *vel;
    *pos = pos.clamp(0.0, max);
}

/// Glyph ramp for trail segments, oldest first.
const TRAIL_GLYPHS: &[char] = &['·', '◦', '○'];

/// A ball bouncing inside a box, dragging a bounded trail.
pub struct BouncingBall {
    width: usize,
    height: usize,
    ball_glyph: char,
    trail_length: usize,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    trail: VecDeque<(usize, usize)>,
}

impl BouncingBall {
    /// A ball in a `width × height` box with a trail of `trail_length`
    /// recent positions.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when either dimension is zero.
    pub fn new(width: usize, height: usize, trail_length: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("ball box dimensions must be > 0"));
        }
        let mut rng = StdRng::from_entropy();
        Ok(Self {
            width,
            height,
            ball_glyph: '●',
            trail_length,
            x: (width / 2) as f64,
            y: (height / 2) as f64,
            vx: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            vy: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            trail: VecDeque::new(),
        })
    }

    /// Set the ball glyph.
    #[must_use]
    pub fn glyph(mut self, glyph: char) -> Self {
        self.ball_glyph = glyph;
        self
    }

    /// Current position, truncated to cells.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.x as usize, self.y as usize)
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }

    /// Recent positions, oldest first.
    #[must_use]
    pub fn trail(&self) -> &VecDeque<(usize, usize)> {
        &self.trail
    }

    /// Place one tick's position directly (tests drive the edge cases).
    #[cfg(test)]
    fn place(&mut self, x: f64, y: f64, vx: f64, vy: f64) {
        self.x = x;
        self.y = y;
        self.vx = vx;
        self.vy = vy;
    }

    fn draw_border(&self, grid: &mut Grid) {
        let border = ColorRef::Named(NamedColor::Blue);
        let right = self.width - 1;
        let bottom = self.height - 1;
        for x in 0..self.width {
            grid.set(x, 0, Cell::colored('─', border));
            grid.set(x, bottom, Cell::colored('─', border));
        }
        for y in 0..self.height {
            grid.set(0, y, Cell::colored('│', border));
            grid.set(right, y, Cell::colored('│', border));
        }
        grid.set(0, 0, Cell::colored('┌', border));
        grid.set(right, 0, Cell::colored('┐', border));
        grid.set(0, bottom, Cell::colored('└', border));
        grid.set(right, bottom, Cell::colored('┘', border));
    }
}

impl Effect for BouncingBall {
    fn advance(&mut self) -> Frame {
        bounce_step(&mut self.x, &mut self.vx, self.width);
        bounce_step(&mut self.y, &mut self.vy, self.height);

        self.trail.push_back((self.x as usize, self.y as usize));
        if self.trail.len() > self.trail_length {
            self.trail.pop_front();
        }

        let mut grid = Grid::new(self.width, self.height);
        let head = self.trail.len().saturating_sub(1);
        for (i, (tx, ty)) in self.trail.iter().enumerate() {
            let cell = if i == head {
                Cell::colored(self.ball_glyph, ColorRef::Named(NamedColor::BrightRed))
            } else {
                let glyph = TRAIL_GLYPHS[i.min(TRAIL_GLYPHS.len() - 1)];
                Cell::colored(glyph, ColorRef::Named(NamedColor::Red))
            };
            grid.set(*tx, *ty, cell);
        }
        self.draw_border(&mut grid);
        Frame::Grid(grid)
    }
}

/// Candidate glyphs for swarm particles.
const PARTICLE_GLYPHS: &[char] = &['.', '*', '+', '◦', '○', '●'];

/// Candidate colors for swarm particles.
const PARTICLE_COLORS: &[ColorRef] = &[
    ColorRef::Named(NamedColor::Red),
    ColorRef::Named(NamedColor::Green),
    ColorRef::Named(NamedColor::Blue),
    ColorRef::Named(NamedColor::Yellow),
    ColorRef::Named(NamedColor::Magenta),
    ColorRef::Named(NamedColor::Cyan),
];

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    glyph: char,
    color: ColorRef,
}

/// A swarm of particles bouncing off the frame edges.
pub struct ParticleSwarm {
    width: usize,
    height: usize,
    particles: Vec<Particle>,
}

impl ParticleSwarm {
    /// A swarm of `count` particles in a `width × height` field.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when a dimension or the count is zero.
    pub fn new(width: usize, height: usize, count: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("particle field dimensions must be > 0"));
        }
        if count == 0 {
            return Err(Error::InvalidConfig("particle count must be > 0"));
        }
        let mut rng = StdRng::from_entropy();
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width as f64),
                y: rng.gen_range(0.0..height as f64),
                vx: rng.gen_range(-1.0..1.0),
                vy: rng.gen_range(-1.0..1.0),
                glyph: PARTICLE_GLYPHS[rng.gen_range(0..PARTICLE_GLYPHS.len())],
                color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            })
            .collect();
        Ok(Self {
            width,
            height,
            particles,
        })
    }

    /// Particle positions, truncated to cells.
    #[must_use]
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.particles
            .iter()
            .map(|p| (p.x as usize, p.y as usize))
            .collect()
    }
}

impl Effect for ParticleSwarm {
    fn advance(&mut self) -> Frame {
        let mut grid = Grid::new(self.width, self.height);
        for particle in &mut self.particles {
            bounce_step(&mut particle.x, &mut particle.vx, self.width);
            bounce_step(&mut particle.y, &mut particle.vy, self.height);
            grid.set(
                particle.x as usize,
                particle.y as usize,
                Cell::colored(particle.glyph, particle.color),
            );
        }
        Frame::Grid(grid)
    }
}

/// Base brightness candidates for distant stars.
const STAR_COLORS: &[ColorRef] = &[
    ColorRef::Named(NamedColor::White),
    ColorRef::Named(NamedColor::BrightWhite),
    ColorRef::Named(NamedColor::Yellow),
];

/// Depth gained per tick at speed factor 1.0.
const STAR_APPROACH_RATE: f64 = 0.02;

struct Star {
    x: f64,
    y: f64,
    z: f64,
    base: ColorRef,
}

/// Stars approaching the viewer; depth maps to three brightness tiers.
///
/// A star whose depth passes 1.0 respawns at a random position with depth
/// 0.1, producing an endless approach.
pub struct StarField {
    width: usize,
    height: usize,
    speed_factor: f64,
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarField {
    /// A field of `count` stars in `width × height`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when a dimension or the count is zero.
    pub fn new(width: usize, height: usize, count: usize, speed_factor: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("starfield dimensions must be > 0"));
        }
        if count == 0 {
            return Err(Error::InvalidConfig("star count must be > 0"));
        }
        let mut rng = StdRng::from_entropy();
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..width as f64),
                y: rng.gen_range(0.0..height as f64),
                z: rng.gen_range(0.1..=1.0),
                base: STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())],
            })
            .collect();
        Ok(Self {
            width,
            height,
            speed_factor,
            stars,
            rng,
        })
    }

    /// Star depths, for invariant checks.
    #[must_use]
    pub fn depths(&self) -> Vec<f64> {
        self.stars.iter().map(|s| s.z).collect()
    }
}

impl Effect for StarField {
    fn advance(&mut self) -> Frame {
        let mut grid = Grid::new(self.width, self.height);
        for star in &mut self.stars {
            star.z += STAR_APPROACH_RATE * self.speed_factor;
            if star.z > 1.0 {
                star.x = self.rng.gen_range(0.0..self.width as f64);
                star.y = self.rng.gen_range(0.0..self.height as f64);
                star.z = 0.1;
            }
            let cell = if star.z > 0.8 {
                Cell::colored('★', ColorRef::Named(NamedColor::BrightYellow))
            } else if star.z > 0.6 {
                Cell::colored('✦', ColorRef::Named(NamedColor::Yellow))
            } else {
                Cell::colored('·', star.base)
            };
            grid.set(star.x as usize, star.y as usize, cell);
        }
        Frame::Grid(grid)
    }
}

/// Phase advance per tick.
const HELIX_PHASE_STEP: f64 = 0.2;
/// Rows between strand bridges.
const HELIX_BRIDGE_EVERY: usize = 4;

/// Two sinusoidal strands bridged every fourth row.
#[derive(Debug, Clone)]
pub struct Helix {
    width: usize,
    height: usize,
    phase: f64,
}

impl Helix {
    /// A helix filling `width × height`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] when a dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidConfig("helix dimensions must be > 0"));
        }
        Ok(Self {
            width,
            height,
            phase: 0.0,
        })
    }

    fn strand_columns(&self, y: usize) -> (usize, usize) {
        let angle = (y as f64 + self.phase) * 0.5;
        let mid = (self.width / 2) as f64;
        let span = (self.width / 4) as f64;
        let max = (self.width - 1) as f64;
        let x1 = (mid + angle.cos() * span).clamp(0.0, max) as usize;
        let x2 = (mid + (angle + std::f64::consts::PI).cos() * span).clamp(0.0, max) as usize;
        (x1, x2)
    }
}

impl Effect for Helix {
    fn advance(&mut self) -> Frame {
        let mut grid = Grid::new(self.width, self.height);
        let strand = ColorRef::Named(NamedColor::Blue);
        let bridge = ColorRef::Named(NamedColor::Cyan);
        for y in 0..self.height {
            let (x1, x2) = self.strand_columns(y);
            if y % HELIX_BRIDGE_EVERY == 0 {
                let (start, end) = (x1.min(x2), x1.max(x2));
                for x in start + 1..end {
                    grid.set(x, y, Cell::colored('─', bridge));
                }
            }
            grid.set(x1, y, Cell::colored('●', strand));
            grid.set(x2, y, Cell::colored('●', strand));
        }
        self.phase += HELIX_PHASE_STEP;
        Frame::Grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- bounce_step ---

    #[test]
    fn documented_edge_reflection() {
        // x=0, vx=-1, bound=10: reflect first, then move, landing on 1.
        let mut x = 0.0;
        let mut vx = -1.0;
        bounce_step(&mut x, &mut vx, 10);
        assert_eq!(vx, 1.0);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn far_edge_reflects_symmetrically() {
        let mut x = 9.0;
        let mut vx = 1.0;
        bounce_step(&mut x, &mut vx, 10);
        assert_eq!(vx, -1.0);
        assert_eq!(x, 8.0);
    }

    #[test]
    fn interior_motion_keeps_velocity() {
        let mut x = 4.0;
        let mut vx = 1.0;
        bounce_step(&mut x, &mut vx, 10);
        assert_eq!(vx, 1.0);
        assert_eq!(x, 5.0);
    }

    proptest! {
        #[test]
        fn bounce_step_never_escapes(
            start in 0.0f64..20.0,
            vel in -3.0f64..3.0,
            bound in 2usize..21,
            ticks in 1usize..200,
        ) {
            let mut pos = start.min((bound - 1) as f64);
            let mut vel = vel;
            for _ in 0..ticks {
                bounce_step(&mut pos, &mut vel, bound);
                prop_assert!(pos >= 0.0);
                prop_assert!(pos <= (bound - 1) as f64);
            }
        }

        #[test]
        fn velocity_negated_iff_leaving(
            start in 0.0f64..10.0,
            vel in -2.0f64..2.0,
        ) {
            let bound = 10usize;
            let mut pos = start.min(9.0);
            let before = vel;
            let mut vel = vel;
            let would_leave = !(0.0..=9.0).contains(&(pos + vel));
            bounce_step(&mut pos, &mut vel, bound);
            if would_leave {
                prop_assert_eq!(vel, -before);
            } else {
                prop_assert_eq!(vel, before);
            }
        }
    }

    // --- BouncingBall ---

    #[test]
    fn ball_stays_inside_the_box() {
        let mut ball = BouncingBall::new(20, 8, 5).unwrap();
        for _ in 0..500 {
            let _ = ball.advance();
            let (x, y) = ball.position();
            assert!(x < 20);
            assert!(y < 8);
        }
    }

    #[test]
    fn ball_edge_case_matches_documented_convention() {
        let mut ball = BouncingBall::new(10, 10, 3).unwrap();
        ball.place(0.0, 5.0, -1.0, 0.0);
        let _ = ball.advance();
        assert_eq!(ball.velocity().0, 1.0);
        assert_eq!(ball.position().0, 1);
    }

    #[test]
    fn trail_is_capped_fifo() {
        let mut ball = BouncingBall::new(30, 10, 4).unwrap();
        for _ in 0..20 {
            let _ = ball.advance();
        }
        assert_eq!(ball.trail().len(), 4);

        // The next tick evicts exactly the oldest entry: the surviving
        // prefix is the previous trail shifted by one.
        let before: Vec<_> = ball.trail().iter().copied().collect();
        let _ = ball.advance();
        let after: Vec<_> = ball.trail().iter().copied().collect();
        assert_eq!(after.len(), 4);
        assert_eq!(&after[..3], &before[1..]);
    }

    #[test]
    fn border_survives_the_trail() {
        let mut ball = BouncingBall::new(6, 4, 8).unwrap();
        for _ in 0..50 {
            if let Frame::Grid(grid) = ball.advance() {
                assert_eq!(grid.get(0, 0).unwrap().glyph, '┌');
                assert_eq!(grid.get(5, 0).unwrap().glyph, '┐');
                assert_eq!(grid.get(0, 3).unwrap().glyph, '└');
                assert_eq!(grid.get(5, 3).unwrap().glyph, '┘');
            }
        }
    }

    // --- ParticleSwarm ---

    #[test]
    fn zero_particle_count_rejected() {
        assert!(ParticleSwarm::new(10, 10, 0).is_err());
    }

    #[test]
    fn particles_stay_in_bounds() {
        let mut swarm = ParticleSwarm::new(15, 7, 12).unwrap();
        for _ in 0..300 {
            let _ = swarm.advance();
            for (x, y) in swarm.positions() {
                assert!(x < 15);
                assert!(y < 7);
            }
        }
    }

    #[test]
    fn particle_cells_use_declared_glyphs_and_colors() {
        let mut swarm = ParticleSwarm::new(10, 5, 6).unwrap();
        if let Frame::Grid(grid) = swarm.advance() {
            for cell in grid.rows().flatten() {
                if cell.glyph == ' ' {
                    continue;
                }
                assert!(PARTICLE_GLYPHS.contains(&cell.glyph));
                assert!(PARTICLE_COLORS.contains(&cell.color.unwrap()));
            }
        }
    }

    // --- StarField ---

    #[test]
    fn depths_stay_in_unit_range() {
        let mut field = StarField::new(20, 10, 15, 3.0).unwrap();
        for _ in 0..400 {
            let _ = field.advance();
            for z in field.depths() {
                assert!(z > 0.0);
                assert!(z <= 1.0);
            }
        }
    }

    #[test]
    fn near_stars_render_brightest_tier() {
        let mut field = StarField::new(10, 10, 30, 1.0).unwrap();
        let mut saw_bright = false;
        for _ in 0..100 {
            if let Frame::Grid(grid) = field.advance() {
                if grid.rows().flatten().any(|c| c.glyph == '★') {
                    saw_bright = true;
                }
            }
        }
        assert!(saw_bright);
    }

    // --- Helix ---

    #[test]
    fn strands_stay_inside_width() {
        let helix = Helix::new(24, 16).unwrap();
        for y in 0..16 {
            let (x1, x2) = helix.strand_columns(y);
            assert!(x1 < 24);
            assert!(x2 < 24);
        }
    }

    #[test]
    fn bridges_appear_only_on_fourth_rows() {
        let mut helix = Helix::new(30, 12).unwrap();
        if let Frame::Grid(grid) = helix.advance() {
            for (y, row) in grid.rows().enumerate() {
                let has_bridge = row.iter().any(|c| c.glyph == '─');
                if y % HELIX_BRIDGE_EVERY != 0 {
                    assert!(!has_bridge, "row {y} has an off-cycle bridge");
                }
            }
        }
    }

    #[test]
    fn each_row_has_strand_cells() {
        let mut helix = Helix::new(20, 9).unwrap();
        if let Frame::Grid(grid) = helix.advance() {
            for row in grid.rows() {
                assert!(row.iter().any(|c| c.glyph == '●'));
            }
        }
    }
}
