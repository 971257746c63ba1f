//! Game state and core simulation types
//!
//! Everything the tick reads or writes lives on `World`, including the RNG,
//! so two worlds built from the same seed evolve identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{Body, Transform};
use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    /// Simulation time of the last shot fired
    pub last_shot: f32,
    /// Grace window after a hit; collisions are skipped while set
    pub invincible: bool,
    pub invincible_start: f32,
    pub score: i64,
    pub lives: u32,
}

impl Player {
    /// A fresh ship at the spawn pose
    pub fn new(spawn: Vec2) -> Self {
        Self {
            body: Self::spawn_body(spawn),
            // Allow a shot on the very first tick
            last_shot: -PLAYER_SHOOT_DELAY,
            invincible: false,
            invincible_start: 0.0,
            score: 0,
            lives: PLAYER_LIVES,
        }
    }

    fn spawn_body(spawn: Vec2) -> Body {
        Body::new(Transform::new(spawn, PLAYER_SPAWN_ROTATION), Vec2::ZERO)
    }

    /// Put the ship back on the spawn pose (position, heading, velocity only)
    pub fn respawn(&mut self, spawn: Vec2) {
        self.body = Self::spawn_body(spawn);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn direction(&self) -> Vec2 {
        self.body.trans.direction()
    }
}

/// Visual variant of an asteroid (selects a sprite palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsteroidVariant {
    #[default]
    Slate,
    Moss,
    Ember,
}

impl AsteroidVariant {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => AsteroidVariant::Slate,
            1 => AsteroidVariant::Moss,
            _ => AsteroidVariant::Ember,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// An asteroid entity
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: Body,
    pub radius: f32,
    pub variant: AsteroidVariant,
    pub alive: bool,
    /// Velocity of the projectile that killed it (valid only within the tick)
    pub kill_dir: Vec2,
}

impl Asteroid {
    pub fn new(body: Body, radius: f32, variant: AsteroidVariant) -> Self {
        Self {
            body,
            radius,
            variant,
            alive: true,
            kill_dir: Vec2::ZERO,
        }
    }
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Body,
    pub spawn_time: f32,
    pub alive: bool,
}

impl Projectile {
    pub fn new(body: Body, spawn_time: f32) -> Self {
        Self {
            body,
            spawn_time,
            alive: true,
        }
    }

    /// Seconds since the projectile was fired
    pub fn age(&self, now: f32) -> f32 {
        now - self.spawn_time
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Toroidal bounds: positions live in [0, size.x) x [0, size.y)
    pub size: Vec2,
    pub player: Player,
    /// Live asteroids, in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// Simulation clock (seconds), advanced only by tick `dt`
    pub time: f32,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world with the default number of initial asteroids
    pub fn new(size: Vec2, seed: u64) -> Self {
        Self::with_asteroid_count(size, seed, INITIAL_ASTEROIDS)
    }

    /// Create a world and spawn `count` random asteroids
    pub fn with_asteroid_count(size: Vec2, seed: u64, count: usize) -> Self {
        let mut world = Self {
            size,
            player: Player::new(size / 2.0),
            asteroids: Vec::new(),
            projectiles: Vec::new(),
            time: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };

        for _ in 0..count {
            world.spawn_random_asteroid();
        }

        log::debug!(
            "World {}x{} created (seed {}, {} asteroids)",
            size.x,
            size.y,
            seed,
            world.asteroids.len()
        );

        world
    }

    /// Where the ship (re)appears
    pub fn spawn_point(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn is_game_over(&self) -> bool {
        !self.player.is_alive()
    }
}
