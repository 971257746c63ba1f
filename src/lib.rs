//! Asteroid Field - a toroidal asteroids game drawn by a software rasterizer
//!
//! Core modules:
//! - `geometry`: Vector helpers (rotation, toroidal wrap)
//! - `sim`: Deterministic simulation (bodies, collisions, splitting, scoring)
//! - `renderer`: Software rasterizer writing straight into a pixel buffer
//! - `background`: Ambient starfield decoration
//! - `game`: Frame hooks driven by the host loop
//! - `settings`: Data-driven configuration

pub mod background;
pub mod game;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, Keys};
pub use geometry::{rotate, wrap, wrap_scalar};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::FRAC_PI_2;

    /// Logical screen resolution (pixels)
    pub const SCREEN_WIDTH: usize = 1024;
    pub const SCREEN_HEIGHT: usize = 768;

    /// World width in world units; height follows the screen aspect ratio
    pub const WORLD_WIDTH: f32 = 100.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 1.0;
    pub const PLAYER_LIVES: u32 = 3;
    /// Minimum seconds between two shots
    pub const PLAYER_SHOOT_DELAY: f32 = 0.02;
    /// Seconds of grace after losing a life
    pub const PLAYER_INVINCIBLE_DURATION: f32 = 1.0;
    /// Thrust acceleration (units/s²)
    pub const PLAYER_ACCELERATION: f32 = 30.0;
    /// Steering rate (radians/s)
    pub const PLAYER_TURN_RATE: f32 = 5.0;
    /// Ship faces up (world Y points up)
    pub const PLAYER_SPAWN_ROTATION: f32 = FRAC_PI_2;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 100.0;
    pub const PROJECTILE_LIFETIME: f32 = 1.0;
    pub const PROJECTILE_RADIUS: f32 = 0.1;

    /// Asteroids
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    pub const ASTEROID_MIN_RADIUS: f32 = 1.5;
    pub const ASTEROID_SPLIT_RATIO: f32 = 1.7;
    pub const ASTEROID_SPAWN_RADIUS_MIN: f32 = 5.0;
    pub const ASTEROID_SPAWN_RADIUS_MAX: f32 = 10.0;
    pub const INITIAL_ASTEROIDS: usize = 4;
    /// Rejection-sampling budget before falling back to the far side of the torus
    pub const SPAWN_MAX_ATTEMPTS: u32 = 64;

    /// Scoring
    pub const KILL_BONUS: i64 = 10;
    pub const HIT_PENALTY: i64 = 50;

    /// Starfield
    pub const STARS_PER_SECOND: f32 = 3.0;
}
