//! Entity storage
//!
//! The only place obstacles, rings and particles are inserted or removed.
//! Collections keep insertion order, so iteration is stable across runs with
//! the same seed.

use super::state::{Obstacle, Particle, Ring};

#[derive(Debug, Clone)]
pub struct EntityPool {
    obstacles: Vec<Obstacle>,
    rings: Vec<Ring>,
    particles: Vec<Particle>,
    next_id: u32,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            rings: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn obstacle_mut(&mut self, index: usize) -> &mut Obstacle {
        &mut self.obstacles[index]
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Insert an obstacle, assigning it a fresh ID
    pub fn insert_obstacle(&mut self, mut obstacle: Obstacle) -> u32 {
        obstacle.id = self.next_entity_id();
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// Insert a ring, assigning it a fresh ID
    pub fn insert_ring(&mut self, mut ring: Ring) -> u32 {
        ring.id = self.next_entity_id();
        let id = ring.id;
        self.rings.push(ring);
        id
    }

    /// Add a particle unless the pool already holds `cap` of them
    pub fn push_particle(&mut self, particle: Particle, cap: usize) -> bool {
        if self.particles.len() >= cap {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Order-preserving removal (callers scan in reverse)
    pub(crate) fn remove_obstacle(&mut self, index: usize) -> Obstacle {
        self.obstacles.remove(index)
    }

    pub(crate) fn remove_ring(&mut self, index: usize) -> Ring {
        self.rings.remove(index)
    }

    pub(crate) fn retain_particles(&mut self, keep: impl FnMut(&Particle) -> bool) {
        self.particles.retain(keep);
    }

    /// Drop the oldest particles beyond `cap`
    pub(crate) fn truncate_particles(&mut self, cap: usize) {
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    /// Scroll obstacles and rings left by `dx`
    pub fn scroll(&mut self, dx: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= dx;
        }
        for ring in &mut self.rings {
            ring.pos.x -= dx;
        }
    }

    /// Remove every entity. IDs keep counting up.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.rings.clear();
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.rings.is_empty() && self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::ParticleColor;

    fn obstacle(x: f32) -> Obstacle {
        Obstacle {
            id: 0,
            x,
            width: 60.0,
            gap_top: 300.0,
            gap_height: 220.0,
            passed: false,
        }
    }

    fn particle() -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 1.0,
            color: ParticleColor::Trail,
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut pool = EntityPool::new();
        let a = pool.insert_obstacle(obstacle(100.0));
        let b = pool.insert_ring(Ring {
            id: 0,
            pos: Vec2::new(10.0, 10.0),
            radius: 15.0,
        });
        let c = pool.insert_obstacle(obstacle(200.0));
        assert!(a < b && b < c);

        // IDs survive a clear without reuse
        pool.clear();
        assert!(pool.is_empty());
        let d = pool.insert_obstacle(obstacle(0.0));
        assert!(d > c);
    }

    #[test]
    fn test_scroll_moves_obstacles_and_rings() {
        let mut pool = EntityPool::new();
        pool.insert_obstacle(obstacle(100.0));
        pool.insert_ring(Ring {
            id: 0,
            pos: Vec2::new(50.0, 20.0),
            radius: 15.0,
        });
        pool.scroll(6.0);
        assert_eq!(pool.obstacles()[0].x, 94.0);
        assert_eq!(pool.rings()[0].pos, Vec2::new(44.0, 20.0));
    }

    #[test]
    fn test_particle_cap() {
        let mut pool = EntityPool::new();
        assert!(pool.push_particle(particle(), 2));
        assert!(pool.push_particle(particle(), 2));
        assert!(!pool.push_particle(particle(), 2));
        assert_eq!(pool.particles().len(), 2);

        pool.truncate_particles(1);
        assert_eq!(pool.particles().len(), 1);
    }
}
