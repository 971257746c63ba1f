//! Random asteroid spawning
//!
//! Draws from the world's seeded RNG, so spawns are reproducible per seed.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use super::body::{Body, Transform};
use super::state::{Asteroid, AsteroidVariant, World};
use crate::consts::*;
use crate::geometry::{rotate, wrap};

impl World {
    /// Spawn one asteroid at a random spot clear of the player
    pub fn spawn_random_asteroid(&mut self) {
        let radius = self
            .rng
            .random_range(ASTEROID_SPAWN_RADIUS_MIN..ASTEROID_SPAWN_RADIUS_MAX);
        let variant = AsteroidVariant::from_index(self.rng.random_range(0..AsteroidVariant::COUNT));
        let pos = self.clear_spawn_position(radius);

        // Two-stage direction: a half-turn sample, then the body's own rotation
        let speed = self.rng.random::<f32>() * ASTEROID_MAX_SPEED;
        let base_angle = self.rng.random_range(0.0..PI);
        let rot = self.rng.random_range(0.0..TAU);
        let vel = rotate(rotate(Vec2::new(speed, 0.0), base_angle), rot);

        self.asteroids.push(Asteroid::new(
            Body::new(Transform::new(pos, rot), vel),
            radius,
            variant,
        ));
    }

    /// Rejection-sample a position at least `2 * radius + PLAYER_RADIUS` from the player
    fn clear_spawn_position(&mut self, radius: f32) -> Vec2 {
        let player_pos = self.player.body.pos();
        let keep_out = 2.0 * radius + PLAYER_RADIUS;

        for _ in 0..SPAWN_MAX_ATTEMPTS {
            let pos = Vec2::new(
                self.rng.random_range(0.0..self.size.x),
                self.rng.random_range(0.0..self.size.y),
            );
            if pos.distance(player_pos) >= keep_out {
                return pos;
            }
        }

        // Farthest point on the torus from the player
        let fallback = wrap(player_pos + self.size / 2.0, self.size);
        log::warn!(
            "Asteroid spawn rejected {} times, placing at ({:.1}, {:.1})",
            SPAWN_MAX_ATTEMPTS,
            fallback.x,
            fallback.y
        );
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_keeps_clear_of_player() {
        let mut world = World::with_asteroid_count(Vec2::new(100.0, 75.0), 7, 0);
        for _ in 0..50 {
            world.spawn_random_asteroid();
        }
        let player = world.player.body.pos();
        for asteroid in &world.asteroids {
            let keep_out = 2.0 * asteroid.radius + PLAYER_RADIUS;
            assert!(asteroid.body.pos().distance(player) >= keep_out);
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut world = World::with_asteroid_count(Vec2::new(100.0, 75.0), 11, 0);
        for _ in 0..100 {
            world.spawn_random_asteroid();
        }
        for asteroid in &world.asteroids {
            assert!(asteroid.radius >= ASTEROID_SPAWN_RADIUS_MIN);
            assert!(asteroid.radius < ASTEROID_SPAWN_RADIUS_MAX);
            assert!(asteroid.body.vel.length() <= ASTEROID_MAX_SPEED + 1e-4);
            let p = asteroid.body.pos();
            assert!((0.0..100.0).contains(&p.x) && (0.0..75.0).contains(&p.y));
            assert!(asteroid.alive);
        }
    }

    #[test]
    fn test_spawn_is_seeded() {
        let a = World::new(Vec2::new(100.0, 75.0), 42);
        let b = World::new(Vec2::new(100.0, 75.0), 42);
        let c = World::new(Vec2::new(100.0, 75.0), 43);
        assert_eq!(a.asteroids, b.asteroids);
        assert_ne!(a.asteroids, c.asteroids);
    }

    #[test]
    fn test_spawn_falls_back_when_world_too_small() {
        // Keep-out radius is at least 11, far larger than the whole world
        let mut world = World::with_asteroid_count(Vec2::new(4.0, 4.0), 3, 0);
        world.spawn_random_asteroid();
        let pos = world.asteroids[0].body.pos();
        // Player sits at (2, 2); the antipode wraps to (0, 0)
        assert!(pos.x.abs() < 1e-5 && pos.y.abs() < 1e-5);
    }
}
