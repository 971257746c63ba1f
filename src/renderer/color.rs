//! Pixel color type

use bytemuck::{Pod, Zeroable};

/// One 4-byte pixel in the host buffer's BGRX layout
///
/// The fourth byte is a transparency flag, not an alpha channel: zero means
/// opaque, anything else marks the sprite sentinel that is never drawn.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub transparent: u8,
}

impl Color {
    /// The sprite transparency sentinel
    pub const TRANSPARENT: Color = Color {
        b: 0,
        g: 0,
        r: 0,
        transparent: 1,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            b,
            g,
            r,
            transparent: 0,
        }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.transparent != 0
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const SHIP: Color = Color::rgb(255, 0, 255);
    pub const SHIP_INVINCIBLE: Color = Color::rgb(255, 0, 0);
    pub const PROJECTILE: Color = Color::rgb(255, 0, 0);
    pub const STAR: Color = Color::rgb(100, 100, 100);
    pub const HEART: Color = Color::rgb(0xe0, 0x1e, 0x37);
    pub const TEXT: Color = Color::rgb(230, 230, 230);
}
