//! Read-only frame output for hosts
//!
//! A [`FrameSnapshot`] is everything a renderer and audio layer need for one
//! frame. It owns its data so hosts can hand it across the JS boundary as JSON.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, Obstacle, Particle, Ring, Simulation};

/// Where to draw the jet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPose {
    pub x: f32,
    pub y: f32,
    /// Nose tilt in radians
    pub tilt: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub player: PlayerPose,
    /// Engine running this tick (draw the flame, play the thrust sound)
    pub thrusting: bool,
    pub obstacles: Vec<Obstacle>,
    pub rings: Vec<Ring>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub speed: f32,
    /// Shake magnitude in world units; hosts pick the random offset
    pub screen_shake: f32,
    pub frame: u64,
    /// Events raised during the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn capture<R>(sim: &Simulation<R>, events: Vec<GameEvent>) -> Self {
        Self {
            phase: sim.run.phase,
            player: PlayerPose {
                x: sim.player.pos.x,
                y: sim.player.pos.y,
                tilt: sim.player.tilt,
            },
            thrusting: sim.thrusting,
            obstacles: sim.pool.obstacles().to_vec(),
            rings: sim.pool.rings().to_vec(),
            particles: sim.pool.particles().to_vec(),
            score: sim.run.score,
            speed: sim.run.speed,
            screen_shake: sim.run.screen_shake,
            frame: sim.run.frame,
            events,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Failed to serialize snapshot: {}", e);
            String::from("{}")
        })
    }
}

/// End-of-run statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks spent playing
    pub frames: u64,
    pub speed: f32,
    pub obstacles_passed: u32,
    pub rings_collected: u32,
}

impl<R> Simulation<R> {
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            phase: self.run.phase,
            score: self.run.score,
            frames: self.run.ticks_alive,
            speed: self.run.speed,
            obstacles_passed: self.run.obstacles_passed,
            rings_collected: self.run.rings_collected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::CrashCause;

    #[test]
    fn test_snapshot_json_shape() {
        let mut sim = Simulation::new(800.0, 800.0, 1);
        sim.start();
        let snap = sim.tick(true);
        let json = snap.to_json();
        assert!(json.contains(r#""phase":"PLAYING""#));
        assert!(json.contains(r#""type":"started""#));
        assert!(json.contains(r#""thrusting":true"#));

        let parsed: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_crash_event_json() {
        let event = GameEvent::Crashed {
            cause: CrashCause::OutOfBounds,
            score: 7,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"crashed","cause":"out_of_bounds","score":7}"#);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut sim = Simulation::new(800.0, 800.0, 1);
        sim.start();
        let snap = sim.tick(false);
        let obstacles = snap.obstacles.clone();
        sim.tick(false);
        // Later ticks scroll the pool, not the earlier snapshot
        assert_eq!(snap.obstacles, obstacles);
        assert_ne!(sim.pool().obstacles()[0].x, snap.obstacles[0].x);
    }

    #[test]
    fn test_summary_counts() {
        let mut sim = Simulation::new(800.0, 800.0, 1);
        sim.start();
        for _ in 0..10 {
            sim.tick(false);
        }
        let summary = sim.summary();
        assert_eq!(summary.phase, GamePhase::Playing);
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.speed, 6.0);
    }
}
