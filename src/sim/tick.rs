//! Fixed-step simulation tick and run lifecycle
//!
//! Core game loop that advances the simulation one frame at a time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{self, CollisionOutcome};
use super::particles;
use super::physics;
use super::snapshot::FrameSnapshot;
use super::spawn;
use super::state::{CrashCause, GameEvent, GamePhase, Playfield, Player, Simulation};

impl<R: Rng> Simulation<R> {
    /// Begin a run from Start or Over. Ignored while already Playing.
    pub fn start(&mut self) -> bool {
        match self.run.phase {
            GamePhase::Playing => {
                log::debug!("start() ignored: run already in progress");
                false
            }
            GamePhase::Start | GamePhase::Over => {
                self.reset();
                self.run.phase = GamePhase::Playing;
                self.events.push(GameEvent::Started);
                log::info!(
                    "Run started on {}x{} playfield",
                    self.playfield.width,
                    self.playfield.height
                );
                true
            }
        }
    }

    /// Put the player back at spawn and clear every counter and entity.
    /// The phase is left alone.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.playfield, &self.tuning);
        self.run.reset(self.tuning.base_speed);
        self.pool.clear();
        self.thrusting = false;
        self.fx_rng = Pcg32::seed_from_u64(self.rng.random());
    }

    /// Change the playfield size. While idle in Start the player is re-centred.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let playfield = Playfield::new(width, height);
        if !playfield.is_valid() {
            log::warn!("Ignoring invalid playfield size {}x{}", width, height);
            return false;
        }
        self.playfield = playfield;
        if self.run.phase == GamePhase::Start {
            self.reset();
        }
        true
    }

    /// Advance one frame and return what the host should draw and play
    pub fn tick(&mut self, thrust_active: bool) -> FrameSnapshot {
        self.thrusting = thrust_active && self.run.phase == GamePhase::Playing;

        if self.run.phase == GamePhase::Playing {
            self.step_playing();
        }

        // Effects keep animating in every phase
        particles::age(&mut self.pool, self.tuning.particle_decay);
        self.decay_shake();
        self.run.frame += 1;

        let events = std::mem::take(&mut self.events);
        FrameSnapshot::capture(self, events)
    }

    fn step_playing(&mut self) {
        self.schedule_beat();

        if self.thrusting {
            let origin = Vec2::new(
                self.player.pos.x - self.tuning.trail_offset_x,
                self.player.pos.y,
            );
            self.emit_burst(origin, self.tuning.trail);
        }

        physics::integrate(&mut self.player, self.thrusting, &self.tuning);
        self.run.ticks_alive += 1;

        if self.player_out_of_bounds() {
            self.crash(CrashCause::OutOfBounds);
            return;
        }

        let plan = spawn::maybe_spawn(self.run.frame, &self.playfield, &mut self.rng, &self.tuning);
        if let Some(obstacle) = plan.obstacle {
            self.pool.insert_obstacle(obstacle);
        }
        if let Some(ring) = plan.ring {
            self.pool.insert_ring(ring);
        }

        self.pool.scroll(self.run.speed);

        let report = collision::evaluate(&self.player, &mut self.pool, &self.tuning);
        for outcome in report.outcomes {
            match outcome {
                CollisionOutcome::Scored(points) => {
                    self.run.obstacles_passed += 1;
                    self.events.push(GameEvent::ObstaclePassed);
                    self.add_score(points);
                }
                CollisionOutcome::Collected { ring, points } => {
                    self.run.rings_collected += 1;
                    self.events.push(GameEvent::RingCollected { points });
                    self.add_score(points);
                    self.emit_burst(ring.pos, self.tuning.sparkle);
                }
                CollisionOutcome::Crashed => self.crash(CrashCause::Obstacle),
            }
        }
    }

    /// Emit a music beat every `ticks_per_beat` frames of play
    fn schedule_beat(&mut self) {
        if self.run.frame % self.tuning.ticks_per_beat() != 0 {
            return;
        }
        let index = self.run.beats;
        self.events.push(GameEvent::Beat {
            index,
            accent: index % self.tuning.beat_accent_every == 0,
        });
        self.run.beats += 1;
    }

    fn player_out_of_bounds(&self) -> bool {
        let y = self.player.pos.y;
        !y.is_finite() || y < 0.0 || y > self.playfield.height
    }

    /// Award points; speed steps up once per multiple of `speed_step_every` crossed
    fn add_score(&mut self, points: u32) {
        let before = self.run.score;
        let after = before.saturating_add(points);
        self.run.score = after;

        let every = self.tuning.speed_step_every;
        let steps = after / every - before / every;
        if steps > 0 {
            self.run.speed += self.tuning.speed_step * steps as f32;
            self.events.push(GameEvent::SpeedUp {
                speed: self.run.speed,
            });
            log::debug!("Score {} -> speed {}", after, self.run.speed);
        }
    }

    fn crash(&mut self, cause: CrashCause) {
        self.run.phase = GamePhase::Over;
        self.thrusting = false;

        self.emit_burst(self.player.pos, self.tuning.explosion);
        if self.settings.effective_screen_shake() {
            self.run.screen_shake = self.tuning.crash_shake;
        }

        self.events.push(GameEvent::Crashed {
            cause,
            score: self.run.score,
        });
        log::info!(
            "Crashed ({:?}) with score {} after {} ticks",
            cause,
            self.run.score,
            self.run.ticks_alive
        );
    }

    fn emit_burst(&mut self, origin: Vec2, burst: particles::Burst) {
        let cap = self.settings.max_particles();
        particles::spawn_burst(&mut self.pool, origin, &burst, &mut self.fx_rng, cap);
    }

    fn decay_shake(&mut self) {
        self.run.screen_shake *= self.tuning.shake_decay;
        if self.run.screen_shake < self.tuning.shake_epsilon {
            self.run.screen_shake = 0.0;
        }
    }
}
