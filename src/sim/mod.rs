//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` is one frame)
//! - Seeded RNG only
//! - Stable iteration order (insertion order in the entity pool)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod particles;
pub mod physics;
pub mod pool;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, CollisionReport, evaluate};
pub use particles::{Burst, ColorPolicy, Span};
pub use pool::EntityPool;
pub use snapshot::{FrameSnapshot, PlayerPose, RunSummary};
pub use spawn::{SpawnError, SpawnPlan, maybe_spawn};
pub use state::{
    CrashCause, GameEvent, GamePhase, Obstacle, Particle, ParticleColor, Player, Playfield, Ring,
    RunState, Simulation,
};
