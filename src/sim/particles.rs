//! Visual effect particles
//!
//! Particles never affect gameplay. They are spawned in bursts (one particle
//! per tick for the exhaust trail) and aged every tick in every phase, so a
//! crash explosion keeps animating on the game-over screen.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::EntityPool;
use super::state::{Particle, ParticleColor};

/// A sampling range `[min, max)`; collapses to `min` when empty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

/// How a burst picks particle colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorPolicy {
    Fixed(ParticleColor),
    /// Random hue in degrees, `[min, max)`
    HueBand { min: f32, max: f32 },
}

impl ColorPolicy {
    fn pick<R: Rng>(&self, rng: &mut R) -> ParticleColor {
        match *self {
            ColorPolicy::Fixed(color) => color,
            ColorPolicy::HueBand { min, max } => ParticleColor::Hue(Span::new(min, max).sample(rng)),
        }
    }
}

/// Shape of a one-shot particle burst
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Burst {
    pub count: u32,
    pub vel_x: Span,
    pub vel_y: Span,
    pub life: f32,
    pub color: ColorPolicy,
}

impl Burst {
    /// Same burst with every particle forced to `color`
    pub fn with_color(mut self, color: ParticleColor) -> Self {
        self.color = ColorPolicy::Fixed(color);
        self
    }
}

/// Spawn `burst.count` particles at `origin`, stopping at the pool's `cap`.
///
/// Returns how many were actually spawned.
pub fn spawn_burst<R: Rng>(
    pool: &mut EntityPool,
    origin: Vec2,
    burst: &Burst,
    rng: &mut R,
    cap: usize,
) -> usize {
    let mut spawned = 0;
    for _ in 0..burst.count {
        let vel = Vec2::new(burst.vel_x.sample(rng), burst.vel_y.sample(rng));
        let particle = Particle {
            pos: origin,
            vel,
            life: burst.life,
            color: burst.color.pick(rng),
        };
        if !pool.push_particle(particle, cap) {
            break;
        }
        spawned += 1;
    }
    spawned
}

/// Move every particle, drain `delta_life`, and prune the dead in one pass
pub fn age(pool: &mut EntityPool, delta_life: f32) {
    for particle in pool.particles_mut() {
        particle.pos += particle.vel;
        particle.life -= delta_life;
    }
    // NaN life or position never compares alive
    pool.retain_particles(|p| p.life > 0.0 && p.pos.is_finite());
}
