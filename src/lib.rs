//! Neon Jet - A synthwave jet runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (quality, shake, reduced motion)
//! - `platform`: Fixed-step host timing and browser bindings

pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use sim::{FrameSnapshot, GameEvent, GamePhase, Simulation};
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
///
/// These are the defaults behind [`Tuning::default`]. Gameplay code reads the
/// tuning values, never these directly.
pub mod consts {
    /// Nominal frame rate the per-tick constants are tuned for
    pub const FRAME_RATE: f32 = 60.0;

    /// Player defaults (per tick)
    pub const GRAVITY: f32 = 0.25;
    pub const THRUST_IMPULSE: f32 = 0.6;
    pub const DRAG: f32 = 0.96;
    pub const TILT_FACTOR: f32 = 0.06;
    /// Player x as a fraction of playfield width
    pub const PLAYER_X_FRACTION: f32 = 0.2;
    /// Player spawn y as a fraction of playfield height
    pub const PLAYER_Y_FRACTION: f32 = 0.5;
    /// Player hitbox half extents (around its point position)
    pub const PLAYER_HALF_WIDTH: f32 = 15.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 10.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 220.0;
    pub const MIN_PILLAR_HEIGHT: f32 = 100.0;
    pub const SPAWN_INTERVAL_FRAMES: u64 = 80;
    pub const OBSTACLE_SPAWN_OFFSET: f32 = 50.0;
    pub const OBSTACLE_CULL_X: f32 = -100.0;

    /// Ring defaults
    pub const RING_CHANCE: f64 = 0.5;
    pub const RING_RADIUS: f32 = 15.0;
    pub const RING_SPAWN_OFFSET: f32 = 80.0;
    pub const RING_SPAWN_JITTER: f32 = 100.0;
    pub const RING_PICKUP_DISTANCE: f32 = 30.0;
    pub const RING_CULL_X: f32 = -50.0;

    /// Scoring and difficulty
    pub const OBSTACLE_POINTS: u32 = 1;
    pub const RING_POINTS: u32 = 5;
    pub const BASE_SPEED: f32 = 6.0;
    pub const SPEED_STEP: f32 = 0.5;
    pub const SPEED_STEP_EVERY: u32 = 10;

    /// Screen shake
    pub const CRASH_SHAKE: f32 = 25.0;
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_EPSILON: f32 = 0.01;

    /// Particles
    pub const PARTICLE_DECAY: f32 = 0.03;
    pub const MAX_PARTICLES: usize = 500;

    /// Music beat spacing (seconds of simulated time)
    pub const BEAT_INTERVAL_SECS: f32 = 0.25;
    /// Every Nth beat is accented
    pub const BEAT_ACCENT_EVERY: u64 = 4;
}

