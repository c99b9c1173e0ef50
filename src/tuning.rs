//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults come from
//! [`crate::consts`]; a JSON document only needs the keys it wants to
//! override.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::particles::{Burst, ColorPolicy, Span};
use crate::sim::state::ParticleColor;

/// Errors from loading tuning or settings documents
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay balance, all units per tick unless noted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub gravity: f32,
    pub thrust_impulse: f32,
    pub drag: f32,
    pub tilt_factor: f32,
    pub player_x_fraction: f32,
    pub player_y_fraction: f32,
    pub player_half_width: f32,
    pub player_half_height: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub min_pillar_height: f32,
    pub spawn_interval_frames: u64,
    /// Distance past the right edge where obstacles appear
    pub obstacle_spawn_offset: f32,
    pub obstacle_cull_x: f32,

    // === Rings ===
    pub ring_chance: f64,
    pub ring_radius: f32,
    /// Distance past the right edge where rings start
    pub ring_spawn_offset: f32,
    /// Extra random distance added to `ring_spawn_offset`
    pub ring_spawn_jitter: f32,
    pub ring_pickup_distance: f32,
    pub ring_cull_x: f32,

    // === Scoring ===
    pub obstacle_points: u32,
    pub ring_points: u32,
    pub base_speed: f32,
    pub speed_step: f32,
    /// Speed rises by `speed_step` each time score crosses a multiple of this
    pub speed_step_every: u32,

    // === Effects ===
    pub crash_shake: f32,
    pub shake_decay: f32,
    pub shake_epsilon: f32,
    pub particle_decay: f32,
    pub trail: Burst,
    /// Trail particles spawn this far behind the player
    pub trail_offset_x: f32,
    pub explosion: Burst,
    pub sparkle: Burst,

    // === Music ===
    /// Simulated frames per second (seconds to ticks conversion)
    pub frame_rate: f32,
    pub beat_interval_secs: f32,
    pub beat_accent_every: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            thrust_impulse: THRUST_IMPULSE,
            drag: DRAG,
            tilt_factor: TILT_FACTOR,
            player_x_fraction: PLAYER_X_FRACTION,
            player_y_fraction: PLAYER_Y_FRACTION,
            player_half_width: PLAYER_HALF_WIDTH,
            player_half_height: PLAYER_HALF_HEIGHT,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_pillar_height: MIN_PILLAR_HEIGHT,
            spawn_interval_frames: SPAWN_INTERVAL_FRAMES,
            obstacle_spawn_offset: OBSTACLE_SPAWN_OFFSET,
            obstacle_cull_x: OBSTACLE_CULL_X,

            ring_chance: RING_CHANCE,
            ring_radius: RING_RADIUS,
            ring_spawn_offset: RING_SPAWN_OFFSET,
            ring_spawn_jitter: RING_SPAWN_JITTER,
            ring_pickup_distance: RING_PICKUP_DISTANCE,
            ring_cull_x: RING_CULL_X,

            obstacle_points: OBSTACLE_POINTS,
            ring_points: RING_POINTS,
            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_step_every: SPEED_STEP_EVERY,

            crash_shake: CRASH_SHAKE,
            shake_decay: SHAKE_DECAY,
            shake_epsilon: SHAKE_EPSILON,
            particle_decay: PARTICLE_DECAY,
            // Exhaust streams left, with a little vertical spread
            trail: Burst {
                count: 1,
                vel_x: Span::new(-10.0, -5.0),
                vel_y: Span::new(-1.0, 1.0),
                life: 0.5,
                color: ColorPolicy::Fixed(ParticleColor::Trail),
            },
            trail_offset_x: 20.0,
            explosion: Burst {
                count: 30,
                vel_x: Span::new(-10.0, 10.0),
                vel_y: Span::new(-10.0, 10.0),
                life: 1.0,
                color: ColorPolicy::HueBand {
                    min: 180.0,
                    max: 240.0,
                },
            },
            sparkle: Burst {
                count: 10,
                vel_x: Span::new(-5.0, 5.0),
                vel_y: Span::new(-5.0, 5.0),
                life: 0.8,
                color: ColorPolicy::Fixed(ParticleColor::Sparkle),
            },

            frame_rate: FRAME_RATE,
            beat_interval_secs: BEAT_INTERVAL_SECS,
            beat_accent_every: BEAT_ACCENT_EVERY,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            })
        }

        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return invalid("drag", "must be in (0, 1]");
        }
        if self.spawn_interval_frames == 0 {
            return invalid("spawn_interval_frames", "must be at least 1");
        }
        if !(self.gap_height > 0.0) {
            return invalid("gap_height", "must be positive");
        }
        if !(self.obstacle_width > 0.0) {
            return invalid("obstacle_width", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.ring_chance) {
            return invalid("ring_chance", "must be a probability in [0, 1]");
        }
        if !(self.ring_spawn_jitter >= 0.0) {
            return invalid("ring_spawn_jitter", "must not be negative");
        }
        if !(self.base_speed >= 0.0) || !(self.speed_step >= 0.0) {
            return invalid("base_speed", "speed and speed step must not be negative");
        }
        if self.speed_step_every == 0 {
            return invalid("speed_step_every", "must be at least 1");
        }
        if !(0.0..1.0).contains(&self.shake_decay) {
            return invalid("shake_decay", "must be in [0, 1)");
        }
        if !(self.particle_decay > 0.0) {
            return invalid("particle_decay", "must be positive so particles expire");
        }
        if !(self.frame_rate > 0.0) || !(self.beat_interval_secs > 0.0) {
            return invalid("beat_interval_secs", "frame rate and beat interval must be positive");
        }
        if self.beat_accent_every == 0 {
            return invalid("beat_accent_every", "must be at least 1");
        }
        for (field, burst) in [
            ("trail", &self.trail),
            ("explosion", &self.explosion),
            ("sparkle", &self.sparkle),
        ] {
            if !burst.vel_x.is_ordered() || !burst.vel_y.is_ordered() {
                return invalid(field, "velocity span min must not exceed max");
            }
        }
        Ok(())
    }

    /// Ticks between music beats (at least one)
    pub fn ticks_per_beat(&self) -> u64 {
        ((self.beat_interval_secs * self.frame_rate).round() as u64).max(1)
    }
}
