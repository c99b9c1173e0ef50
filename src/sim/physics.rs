//! Player kinematics
//!
//! Vertical only: the player never moves horizontally, the world scrolls.

use super::state::Player;
use crate::tuning::Tuning;

/// Advance the player one tick.
///
/// Order matters for feel: thrust impulse, gravity, drag, then position.
/// Bounds are not checked here.
pub fn integrate(player: &mut Player, thrust_active: bool, tuning: &Tuning) {
    if thrust_active {
        player.vel_y -= tuning.thrust_impulse;
    }
    player.vel_y += tuning.gravity;
    player.vel_y *= tuning.drag;
    player.pos.y += player.vel_y;
    player.tilt = player.vel_y * tuning.tilt_factor;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;

    fn player_at(y: f32, vel_y: f32) -> Player {
        Player {
            pos: Vec2::new(160.0, y),
            vel_y,
            tilt: 0.0,
        }
    }

    #[test]
    fn test_gravity_from_rest() {
        let tuning = Tuning::default();
        let mut player = player_at(400.0, 0.0);
        integrate(&mut player, false, &tuning);
        assert!((player.vel_y - 0.24).abs() < 1e-6);
        assert!((player.pos.y - 400.24).abs() < 1e-4);
        assert!((player.tilt - 0.24 * 0.06).abs() < 1e-6);
        assert_eq!(player.pos.x, 160.0);
    }

    #[test]
    fn test_thrust_lifts() {
        let tuning = Tuning::default();
        let mut player = player_at(400.0, 0.0);
        integrate(&mut player, true, &tuning);
        // (0 - 0.6 + 0.25) * 0.96
        assert!((player.vel_y + 0.336).abs() < 1e-6);
        assert!(player.pos.y < 400.0);
        assert!(player.tilt < 0.0);
    }

    #[test]
    fn test_free_fall_approaches_terminal_velocity() {
        let tuning = Tuning::default();
        let mut player = player_at(0.0, 0.0);
        for _ in 0..500 {
            integrate(&mut player, false, &tuning);
        }
        // g * d / (1 - d)
        assert!((player.vel_y - 6.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn velocity_follows_recurrence(
            v in -20.0f32..20.0,
            y in 0.0f32..1000.0,
            thrust in any::<bool>(),
        ) {
            let tuning = Tuning::default();
            let mut player = player_at(y, v);
            integrate(&mut player, thrust, &tuning);

            let impulse = if thrust { tuning.thrust_impulse } else { 0.0 };
            let expected = ((v - impulse) + tuning.gravity) * tuning.drag;
            prop_assert!((player.vel_y - expected).abs() < 1e-4);
            prop_assert!((player.pos.y - (y + expected)).abs() < 1e-3);
            prop_assert_eq!(player.pos.x, 160.0);
        }
    }
}
