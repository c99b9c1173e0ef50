//! Procedural obstacle and ring placement
//!
//! Obstacles appear on a fixed frame cadence just past the right edge of the
//! playfield, so they scroll in rather than pop in.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use super::particles::Span;
use super::state::{Obstacle, Playfield, Ring};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    /// Playfield too short for two minimum pillars plus the gap
    #[error("gap range [{min}, {max}] is empty for playfield height {height}")]
    InvalidRange { height: f32, min: f32, max: f32 },
}

/// What to insert this frame (IDs are assigned by the pool)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnPlan {
    pub obstacle: Option<Obstacle>,
    pub ring: Option<Ring>,
}

impl SpawnPlan {
    pub fn is_empty(&self) -> bool {
        self.obstacle.is_none() && self.ring.is_none()
    }
}

/// Allowed range for an obstacle's gap top on a playfield of `height`
pub fn gap_top_range(height: f32, tuning: &Tuning) -> Result<(f32, f32), SpawnError> {
    let min = tuning.min_pillar_height;
    let max = height - tuning.gap_height - tuning.min_pillar_height;
    // Written so NaN heights also fail
    if !(max >= min) {
        return Err(SpawnError::InvalidRange { height, min, max });
    }
    Ok((min, max))
}

/// Place one obstacle off the right edge with a random gap
pub fn plan_obstacle<R: Rng>(
    playfield: &Playfield,
    rng: &mut R,
    tuning: &Tuning,
) -> Result<Obstacle, SpawnError> {
    let (min, max) = gap_top_range(playfield.height, tuning)?;
    Ok(Obstacle {
        id: 0,
        x: playfield.width + tuning.obstacle_spawn_offset,
        width: tuning.obstacle_width,
        gap_top: Span::new(min, max).sample(rng),
        gap_height: tuning.gap_height,
        passed: false,
    })
}

/// Maybe place a bonus ring centred in `obstacle`'s gap
pub fn plan_ring<R: Rng>(
    obstacle: &Obstacle,
    playfield: &Playfield,
    rng: &mut R,
    tuning: &Tuning,
) -> Option<Ring> {
    if !rng.random_bool(tuning.ring_chance) {
        return None;
    }
    let jitter = Span::new(0.0, tuning.ring_spawn_jitter).sample(rng);
    Some(Ring {
        id: 0,
        pos: Vec2::new(
            playfield.width + tuning.ring_spawn_offset + jitter,
            obstacle.gap_center(),
        ),
        radius: tuning.ring_radius,
    })
}

/// Spawn step for `frame`: fires once every `spawn_interval_frames`.
///
/// A playfield too short for the gap skips the spawn instead of failing.
pub fn maybe_spawn<R: Rng>(
    frame: u64,
    playfield: &Playfield,
    rng: &mut R,
    tuning: &Tuning,
) -> SpawnPlan {
    if frame % tuning.spawn_interval_frames != 0 {
        return SpawnPlan::default();
    }

    match plan_obstacle(playfield, rng, tuning) {
        Ok(obstacle) => {
            let ring = plan_ring(&obstacle, playfield, rng, tuning);
            SpawnPlan {
                obstacle: Some(obstacle),
                ring,
            }
        }
        Err(err) => {
            log::debug!("Skipping spawn at frame {}: {}", frame, err);
            SpawnPlan::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_spawns_only_on_cadence() {
        let tuning = Tuning::default();
        let playfield = Playfield::new(800.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(1);

        assert!(maybe_spawn(0, &playfield, &mut rng, &tuning).obstacle.is_some());
        for frame in 1..80 {
            assert!(maybe_spawn(frame, &playfield, &mut rng, &tuning).is_empty());
        }
        assert!(maybe_spawn(80, &playfield, &mut rng, &tuning).obstacle.is_some());
        assert!(maybe_spawn(160, &playfield, &mut rng, &tuning).obstacle.is_some());
    }

    #[test]
    fn test_obstacle_placement() {
        let tuning = Tuning::default();
        let playfield = Playfield::new(1024.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..500 {
            let o = plan_obstacle(&playfield, &mut rng, &tuning).unwrap();
            assert_eq!(o.x, 1074.0);
            assert!(o.x > playfield.width);
            assert_eq!(o.width, 60.0);
            assert_eq!(o.gap_height, 220.0);
            assert!(o.gap_top >= 100.0 && o.gap_top <= 480.0);
            // Both pillars keep their minimum height
            assert!(playfield.height - o.gap_bottom() >= 100.0);
            assert!(!o.passed);
        }
    }

    #[test]
    fn test_short_playfield_skips_spawn() {
        let tuning = Tuning::default();
        let playfield = Playfield::new(800.0, 400.0);
        let mut rng = Pcg32::seed_from_u64(1);

        let err = plan_obstacle(&playfield, &mut rng, &tuning).unwrap_err();
        assert_eq!(
            err,
            SpawnError::InvalidRange {
                height: 400.0,
                min: 100.0,
                max: 80.0,
            }
        );
        assert!(maybe_spawn(0, &playfield, &mut rng, &tuning).is_empty());
    }

    #[test]
    fn test_exact_fit_uses_minimum() {
        let tuning = Tuning::default();
        let playfield = Playfield::new(800.0, 420.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let o = plan_obstacle(&playfield, &mut rng, &tuning).unwrap();
        assert_eq!(o.gap_top, 100.0);
    }

    #[test]
    fn test_nan_height_is_invalid() {
        let tuning = Tuning::default();
        assert!(gap_top_range(f32::NAN, &tuning).is_err());
    }

    #[test]
    fn test_ring_centred_in_gap() {
        let tuning = Tuning {
            ring_chance: 1.0,
            ..Tuning::default()
        };
        let playfield = Playfield::new(800.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(9);

        for i in 0..100 {
            let plan = maybe_spawn(i * 80, &playfield, &mut rng, &tuning);
            let obstacle = plan.obstacle.unwrap();
            let ring = plan.ring.unwrap();
            assert_eq!(ring.pos.y, obstacle.gap_center());
            assert!(ring.pos.x >= 880.0 && ring.pos.x <= 980.0);
            assert_eq!(ring.radius, 15.0);
        }
    }

    #[test]
    fn test_ring_chance_extremes() {
        let playfield = Playfield::new(800.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(9);
        let never = Tuning {
            ring_chance: 0.0,
            ..Tuning::default()
        };
        for i in 0..50 {
            assert!(maybe_spawn(i * 80, &playfield, &mut rng, &never).ring.is_none());
        }
    }

    #[test]
    fn test_ring_chance_roughly_half() {
        let tuning = Tuning::default();
        let playfield = Playfield::new(800.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(2024);
        let rings = (0..1000u64)
            .filter(|i| maybe_spawn(i * 80, &playfield, &mut rng, &tuning).ring.is_some())
            .count();
        assert!((400..600).contains(&rings), "got {} rings", rings);
    }
}
