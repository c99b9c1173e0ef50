//! Collision detection and scoring checks
//!
//! Discrete overlap tests only: the player is a point with a small box around
//! it for pillars and a pickup radius for rings. No response, no sub-stepping.

use glam::Vec2;

use super::pool::EntityPool;
use super::state::{Obstacle, Player, Ring};
use crate::tuning::Tuning;

/// One thing that happened during an evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionOutcome {
    /// Player flew past an obstacle for the first time
    Scored(u32),
    /// Player picked up a ring (already removed from the pool)
    Collected { ring: Ring, points: u32 },
    /// Player hit a pillar; the pass stopped here
    Crashed,
}

/// Ordered outcomes of one evaluation pass. Empty means nothing happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub outcomes: Vec<CollisionOutcome>,
}

impl CollisionReport {
    pub fn is_none(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn crashed(&self) -> bool {
        self.outcomes.contains(&CollisionOutcome::Crashed)
    }

    /// Total points awarded by this pass
    pub fn points(&self) -> u32 {
        self.outcomes
            .iter()
            .map(|o| match o {
                CollisionOutcome::Scored(points) => *points,
                CollisionOutcome::Collected { points, .. } => *points,
                CollisionOutcome::Crashed => 0,
            })
            .sum()
    }
}

/// Player box vs. pillars: overlapping the obstacle's columns while any part
/// of the box is outside the gap
pub fn player_hits_obstacle(player_pos: Vec2, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let overlaps_x = player_pos.x + tuning.player_half_width > obstacle.x
        && player_pos.x - tuning.player_half_width < obstacle.right();
    if !overlaps_x {
        return false;
    }
    player_pos.y - tuning.player_half_height < obstacle.gap_top
        || player_pos.y + tuning.player_half_height > obstacle.gap_bottom()
}

/// Point-to-centre distance against the pickup radius
pub fn player_reaches_ring(player_pos: Vec2, ring: &Ring, tuning: &Tuning) -> bool {
    player_pos.distance(ring.pos) < tuning.ring_pickup_distance
}

/// Score, cull and collide every obstacle, then collect and cull every ring.
///
/// Both scans run in reverse index order so removals never skip an entity.
/// A crash ends the pass: later obstacles and all rings are left untouched.
pub fn evaluate(player: &Player, pool: &mut EntityPool, tuning: &Tuning) -> CollisionReport {
    let mut report = CollisionReport::default();
    let pos = player.pos;

    for i in (0..pool.obstacles().len()).rev() {
        let obstacle = pool.obstacle_mut(i);

        if !obstacle.passed && obstacle.x < pos.x {
            obstacle.passed = true;
            report.outcomes.push(CollisionOutcome::Scored(tuning.obstacle_points));
        }

        // Non-finite positions can never scroll back on screen
        if !obstacle.x.is_finite() || obstacle.x < tuning.obstacle_cull_x {
            pool.remove_obstacle(i);
            continue;
        }

        if player_hits_obstacle(pos, &pool.obstacles()[i], tuning) {
            report.outcomes.push(CollisionOutcome::Crashed);
            return report;
        }
    }

    for i in (0..pool.rings().len()).rev() {
        let ring = &pool.rings()[i];
        if player_reaches_ring(pos, ring, tuning) {
            let ring = pool.remove_ring(i);
            report.outcomes.push(CollisionOutcome::Collected {
                ring,
                points: tuning.ring_points,
            });
        } else if !ring.pos.is_finite() || ring.pos.x < tuning.ring_cull_x {
            pool.remove_ring(i);
        }
    }

    report
}
