//! Game state and core simulation types
//!
//! Everything a run mutates is owned by one [`Simulation`]; hosts only read it
//! back through accessors and [`super::FrameSnapshot`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::pool::EntityPool;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Idle, waiting for the first start
    Start,
    /// Active gameplay
    Playing,
    /// Crashed, waiting for a restart
    Over,
}

/// Visible playfield in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// The player's jet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// x is fixed for the whole run; y is integrated every tick
    pub pos: Vec2,
    pub vel_y: f32,
    /// Cosmetic nose tilt (radians), derived from velocity
    pub tilt: f32,
}

impl Player {
    /// Place the player at its spawn point for the given playfield
    pub fn spawn(playfield: &Playfield, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                playfield.width * tuning.player_x_fraction,
                playfield.height * tuning.player_y_fraction,
            ),
            vel_y: 0.0,
            tilt: 0.0,
        }
    }
}

/// A pillar pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the gap (bottom of the upper pillar)
    pub gap_top: f32,
    pub gap_height: f32,
    /// Set once the player has flown past; guards the score award
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    #[inline]
    pub fn gap_center(&self) -> f32 {
        self.gap_top + self.gap_height / 2.0
    }
}

/// A bonus ring pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
}

/// Color tag for particle rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Engine exhaust (cyan)
    Trail,
    /// Ring pickup (yellow)
    Sparkle,
    /// Explicit hue in degrees, full saturation
    Hue(f32),
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 0-1, decreases every tick
    pub life: f32,
    pub color: ParticleColor,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrashCause {
    Obstacle,
    OutOfBounds,
}

/// Edge-triggered events for the audio/UI layer, drained every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Started,
    Crashed { cause: CrashCause, score: u32 },
    ObstaclePassed,
    RingCollected { points: u32 },
    SpeedUp { speed: f32 },
    /// Music beat; `index` counts from the start of the run
    Beat { index: u64, accent: bool },
}

/// Per-run counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub phase: GamePhase,
    pub score: u32,
    /// Scroll speed, never decreases within a run
    pub speed: f32,
    /// Ticks since the last reset (all phases)
    pub frame: u64,
    /// Ticks spent in Playing this run
    pub ticks_alive: u64,
    pub screen_shake: f32,
    pub beats: u64,
    pub obstacles_passed: u32,
    pub rings_collected: u32,
}

impl RunState {
    pub fn new(base_speed: f32) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            speed: base_speed,
            frame: 0,
            ticks_alive: 0,
            screen_shake: 0.0,
            beats: 0,
            obstacles_passed: 0,
            rings_collected: 0,
        }
    }

    /// Zero every counter, keeping the phase
    pub fn reset(&mut self, base_speed: f32) {
        *self = Self {
            phase: self.phase,
            ..Self::new(base_speed)
        };
    }
}

/// The whole game: one instance per host
///
/// Generic over the random source so tests and replays can inject their own;
/// [`Simulation::new`] seeds a [`Pcg32`].
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) settings: Settings,
    pub(crate) playfield: Playfield,
    pub(crate) player: Player,
    pub(crate) run: RunState,
    pub(crate) pool: EntityPool,
    /// Gameplay randomness (gap placement, ring chance)
    pub(crate) rng: R,
    /// Effects-only randomness, reseeded from `rng` on every reset so visual
    /// settings never shift the gameplay stream
    pub(crate) fx_rng: Pcg32,
    /// Events raised since the last snapshot
    pub(crate) events: Vec<GameEvent>,
    /// Effective thrust this tick (only true while Playing)
    pub(crate) thrusting: bool,
}

impl Simulation<Pcg32> {
    /// Create a simulation with default tuning and settings
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(
            Playfield::new(width, height),
            Tuning::default(),
            Settings::default(),
            seed,
        )
    }

    pub fn with_config(playfield: Playfield, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        log::info!("Simulation seeded with {}", seed);
        Self::with_rng(playfield, tuning, settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation drawing randomness from `rng`
    pub fn with_rng(playfield: Playfield, tuning: Tuning, settings: Settings, rng: R) -> Self {
        let playfield = if playfield.is_valid() {
            playfield
        } else {
            log::warn!(
                "Invalid playfield {}x{}, using default",
                playfield.width,
                playfield.height
            );
            Playfield::default()
        };
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Tuning::default()
            }
        };

        let mut sim = Self {
            player: Player::spawn(&playfield, &tuning),
            run: RunState::new(tuning.base_speed),
            tuning,
            settings,
            playfield,
            pool: EntityPool::new(),
            rng,
            fx_rng: Pcg32::seed_from_u64(0),
            events: Vec::new(),
            thrusting: false,
        };
        sim.reset();
        sim
    }

    pub fn phase(&self) -> GamePhase {
        self.run.phase
    }

    pub fn score(&self) -> u32 {
        self.run.score
    }

    pub fn speed(&self) -> f32 {
        self.run.speed
    }

    pub fn screen_shake(&self) -> f32 {
        self.run.screen_shake
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap preferences mid-run; live particles beyond a lower cap are dropped
    pub fn set_settings(&mut self, settings: Settings) {
        let cap = settings.max_particles();
        self.pool.truncate_particles(cap);
        if !settings.effective_screen_shake() {
            self.run.screen_shake = 0.0;
        }
        self.settings = settings;
    }
}
