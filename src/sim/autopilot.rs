//! Simple thrust controller for demos and headless runs
//!
//! Not part of the game rules: it only reads a [`Simulation`] and returns the
//! thrust input a host would otherwise get from the player.

use rand::Rng;

use super::state::{GamePhase, Simulation};

/// Ticks of velocity to look ahead when predicting height
pub const LOOKAHEAD_TICKS: f32 = 8.0;

/// Height the jet should aim for: the gap centre of the next obstacle it has
/// not cleared, or mid-screen when none is coming.
pub fn target_y<R>(sim: &Simulation<R>) -> f32 {
    let player = &sim.player;
    let tail = player.pos.x - sim.tuning.player_half_width;

    sim.pool
        .obstacles()
        .iter()
        .filter(|o| o.right() > tail)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_center())
        .unwrap_or(sim.playfield.height * 0.5)
}

/// Thrust when the predicted height is below the target (screen y grows down)
pub fn decide<R: Rng>(sim: &Simulation<R>) -> bool {
    if sim.phase() != GamePhase::Playing {
        return false;
    }
    let predicted = sim.player.pos.y + sim.player.vel_y * LOOKAHEAD_TICKS;
    predicted > target_y(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn obstacle(x: f32, gap_top: f32) -> Obstacle {
        Obstacle {
            id: 0,
            x,
            width: 60.0,
            gap_top,
            gap_height: 220.0,
            passed: false,
        }
    }

    #[test]
    fn test_idle_outside_playing() {
        let sim = Simulation::new(800.0, 800.0, 3);
        assert!(!decide(&sim));
    }

    #[test]
    fn test_targets_nearest_uncleared_gap() {
        let mut sim = Simulation::new(800.0, 800.0, 3);
        sim.start();
        // Already behind the player
        sim.pool.insert_obstacle(obstacle(40.0, 100.0));
        sim.pool.insert_obstacle(obstacle(600.0, 480.0));
        sim.pool.insert_obstacle(obstacle(300.0, 200.0));
        assert_eq!(target_y(&sim), 310.0);
    }

    #[test]
    fn test_mid_screen_without_obstacles() {
        let mut sim = Simulation::new(800.0, 600.0, 3);
        sim.start();
        assert_eq!(target_y(&sim), 300.0);
    }

    #[test]
    fn test_thrust_direction() {
        let mut sim = Simulation::new(800.0, 800.0, 3);
        sim.start();

        // Gap well above the player: climb
        sim.pool.insert_obstacle(obstacle(400.0, 100.0));
        assert!(decide(&sim));

        // Gap well below: coast
        sim.pool.clear();
        sim.pool.insert_obstacle(obstacle(400.0, 480.0));
        assert!(!decide(&sim));
    }

    #[test]
    fn test_falling_fast_triggers_thrust() {
        let mut sim = Simulation::new(800.0, 800.0, 3);
        sim.start();
        // At the target but dropping
        sim.player.vel_y = 5.0;
        assert!(decide(&sim));
        sim.player.vel_y = -5.0;
        assert!(!decide(&sim));
    }

    #[test]
    fn test_survives_first_obstacles() {
        let mut sim = Simulation::new(800.0, 800.0, 12345);
        sim.start();
        for _ in 0..60 {
            let thrust = decide(&sim);
            sim.tick(thrust);
        }
        assert_eq!(sim.phase(), GamePhase::Playing);
    }
}
