//! World-to-screen mapping

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Affine map from world units (Y up) to screen pixels (Y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    world_size: Vec2,
    screen_size: Vec2,
}

impl Viewport {
    /// Map `world_size` onto the full logical screen
    pub fn new(world_size: Vec2) -> Self {
        Self {
            world_size,
            screen_size: Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
        }
    }

    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.world_size.y - p.y) / self.world_size * self.screen_size
    }

    /// Scale a world length to pixels (uses the horizontal ratio)
    pub fn to_screen_len(&self, len: f32) -> f32 {
        len / self.world_size.x * self.screen_size.x
    }
}
