//! Fixed-size pixel buffer
//!
//! Row-major `SCREEN_WIDTH x SCREEN_HEIGHT` grid of [`Color`] cells. The host
//! owns the canvas and lends it to the draw pass.

use super::color::Color;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Software framebuffer
#[derive(Clone)]
pub struct Canvas {
    pixels: Vec<Color>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub const WIDTH: i32 = SCREEN_WIDTH as i32;
    pub const HEIGHT: i32 = SCREEN_HEIGHT as i32;

    /// Allocate a canvas cleared to black
    pub fn new() -> Self {
        Self {
            pixels: vec![Color::default(); SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn on_screen(x: i32, y: i32) -> bool {
        (0..Self::WIDTH).contains(&x) && (0..Self::HEIGHT).contains(&y)
    }

    #[inline]
    pub(crate) fn clip_x(x: i32) -> i32 {
        x.clamp(0, Self::WIDTH - 1)
    }

    #[inline]
    pub(crate) fn clip_y(y: i32) -> i32 {
        y.clamp(0, Self::HEIGHT - 1)
    }

    #[inline]
    fn index(x: i32, y: i32) -> usize {
        y as usize * SCREEN_WIDTH + x as usize
    }

    /// Read a pixel, `None` when off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        Self::on_screen(x, y).then(|| self.pixels[Self::index(x, y)])
    }

    /// Write a pixel if it lies on screen
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if Self::on_screen(x, y) {
            let i = Self::index(x, y);
            self.pixels[i] = color;
        }
    }

    /// Fill the inclusive span `[x0, x1]` on row `y`; caller clips
    #[inline]
    pub(crate) fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        debug_assert!(Self::on_screen(x0, y) && Self::on_screen(x1, y));
        let start = Self::index(x0, y);
        let end = Self::index(x1, y);
        self.pixels[start..=end].fill(color);
    }

    /// Fill the whole buffer
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw BGRX bytes for the host to present
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Buffer as native-endian 32-bit words
    pub fn as_words(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_read() {
        let mut canvas = Canvas::new();
        let red = Color::rgb(255, 0, 0);
        canvas.put(3, 4, red);
        assert_eq!(canvas.pixel(3, 4), Some(red));
        assert_eq!(canvas.pixel(4, 3), Some(Color::default()));
    }

    #[test]
    fn test_off_screen_is_ignored() {
        let mut canvas = Canvas::new();
        canvas.put(-1, 0, Color::rgb(1, 1, 1));
        canvas.put(Canvas::WIDTH, 0, Color::rgb(1, 1, 1));
        assert!(canvas.pixels().iter().all(|&c| c == Color::default()));
        assert_eq!(canvas.pixel(0, Canvas::HEIGHT), None);
    }

    #[test]
    fn test_byte_views() {
        let mut canvas = Canvas::new();
        canvas.clear(Color::rgb(10, 20, 30));
        assert_eq!(canvas.as_bytes().len(), SCREEN_WIDTH * SCREEN_HEIGHT * 4);
        assert_eq!(&canvas.as_bytes()[..4], &[30, 20, 10, 0]);
        assert_eq!(canvas.as_words().len(), SCREEN_WIDTH * SCREEN_HEIGHT);
    }
}
