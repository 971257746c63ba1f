//! Game configuration
//!
//! Gameplay physics constants live in `crate::consts`; this holds the knobs
//! a host may want to change without rebuilding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_ASTEROIDS, SCREEN_HEIGHT, SCREEN_WIDTH, STARS_PER_SECOND, WORLD_WIDTH};

/// Host-tunable configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the first world; restarts derive their seeds from it
    pub seed: u64,
    /// Asteroids placed when a world is created
    pub initial_asteroids: usize,
    /// Seconds of simulation time between extra asteroid spawns (0 disables)
    pub asteroid_spawn_interval: f32,
    /// Periodic spawning pauses while this many asteroids are alive
    pub max_asteroids: usize,
    /// Draw the ambient starfield
    pub starfield: bool,
    /// Mean star spawn rate
    pub stars_per_second: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            initial_asteroids: INITIAL_ASTEROIDS,
            asteroid_spawn_interval: 5.0,
            max_asteroids: 24,
            starfield: true,
            stars_per_second: STARS_PER_SECOND,
        }
    }
}

impl GameConfig {
    /// Environment variable naming an optional JSON config file
    pub const CONFIG_ENV: &'static str = "ASTEROID_FIELD_CONFIG";

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// World bounds: fixed width, height following the screen aspect ratio
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            WORLD_WIDTH,
            WORLD_WIDTH * SCREEN_HEIGHT as f32 / SCREEN_WIDTH as f32,
        )
    }

    /// Load from the file named by `ASTEROID_FIELD_CONFIG`, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default config");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
