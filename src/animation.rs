//! Cursor-trail particle simulation.
//!
//! The simulation is target independent: drawing goes through [`Surface`]
//! so the browser binds it to a 2D canvas and tests bind it to a recorder.

use rand::Rng;

pub const SPAWN_PER_MOVE: usize = 3;
pub const SIZE_DECAY: f64 = 0.96;
pub const FADE_STEP: f64 = 0.02;
pub const MIN_SIZE: f64 = 5.0;
pub const MAX_SIZE: f64 = 20.0;
pub const MAX_SPEED: f64 = 1.0;

/// Trail colour; alpha comes from the particle.
pub const TRAIL_RGB: (u8, u8, u8) = (100, 150, 255);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn spawn<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            size: rng.gen_range(MIN_SIZE..MAX_SIZE),
            speed_x: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            speed_y: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            opacity: 1.0,
        }
    }

    fn advance(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        self.size *= SIZE_DECAY;
        self.opacity -= FADE_STEP;
    }

    pub fn is_spent(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Where a frame is drawn.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
}

/// The live particle set.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pointer moved to `(x, y)`.
    pub fn pointer_moved<R: Rng>(&mut self, x: f64, y: f64, rng: &mut R) {
        self.particles
            .extend((0..SPAWN_PER_MOVE).map(|_| Particle::spawn(x, y, rng)));
    }

    /// Advance one frame and draw it. Spent particles are dropped after drawing.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();
        for p in &mut self.particles {
            p.advance();
            // negative radius makes canvas arc() throw
            surface.fill_circle(p.x, p.y, p.size.max(0.0), p.opacity.max(0.0));
        }
        self.particles.retain(|p| !p.is_spent());
    }
}

/// Upper bound on frames a freshly spawned particle lives.
pub fn frames_to_drain() -> usize {
    (1.0 / FADE_STEP).ceil() as usize + 1
}
