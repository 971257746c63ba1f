//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, inputs and `dt`
//! sequence, the simulation produces identical results.

pub mod body;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, Transform};
pub use collision::{child_radius, circles_collide, split_asteroid};
pub use state::{Asteroid, AsteroidVariant, Player, Projectile, World};
pub use tick::{StepInput, step};
