//! Bitmap text layout
//!
//! One glyph sprite per character on a fixed grid: every glyph is drawn at
//! the same size and the pen advances by a constant pitch.

use std::collections::HashMap;

use super::canvas::Canvas;
use super::color::Color;
use super::sprite::{Sprite, SpriteError};

/// Rendered glyph size in pixels
pub const GLYPH_WIDTH: i32 = 15;
pub const GLYPH_HEIGHT: i32 = 21;
/// Pen advance per character and per line
pub const ADVANCE_X: i32 = 18;
pub const ADVANCE_Y: i32 = 27;

/// Horizontal anchoring of a single-line string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Glyph table keyed by character
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: HashMap<char, Sprite>,
}

impl Font {
    /// Build a font from `(char, rows)` glyph patterns drawn in one color
    pub fn from_patterns(patterns: &[(char, [&str; 7])], color: Color) -> Result<Self, SpriteError> {
        let glyphs = patterns
            .iter()
            .map(|(ch, rows)| Sprite::from_pattern(&rows.join("\n"), &[color]).map(|s| (*ch, s)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, ch: char) -> Option<&Sprite> {
        self.glyphs.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Width in pixels a single line of `text` occupies
pub fn line_width(text: &str) -> i32 {
    text.chars().count() as i32 * ADVANCE_X
}

impl Canvas {
    /// Draw `text` with its anchor at `(x, y)` (top edge)
    ///
    /// Alignment other than `Left` is only defined for single-line strings.
    /// Every character except space and newline must have a glyph.
    pub fn text(&mut self, x: i32, y: i32, text: &str, align: Align, font: &Font) {
        assert!(
            align == Align::Left || !text.contains('\n'),
            "aligned text must be a single line: {text:?}"
        );

        let start_x = match align {
            Align::Left => x,
            Align::Center => x - line_width(text) / 2,
            Align::Right => x - line_width(text),
        };

        let mut pen_x = start_x;
        let mut pen_y = y;
        for ch in text.chars() {
            match ch {
                '\n' => {
                    pen_x = start_x;
                    pen_y += ADVANCE_Y;
                    continue;
                }
                ' ' => {}
                _ => {
                    let glyph = font
                        .glyph(ch)
                        .unwrap_or_else(|| panic!("no glyph for character {ch:?}"));
                    self.sprite(pen_x, pen_y, GLYPH_WIDTH, GLYPH_HEIGHT, glyph);
                }
            }
            pen_x += ADVANCE_X;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::rgb(255, 255, 255);

    fn block_font() -> Font {
        let solid = ["00000"; 7];
        Font::from_patterns(&[('A', solid), ('B', solid)], INK).unwrap()
    }

    fn painted_columns(canvas: &Canvas, y: i32) -> Vec<i32> {
        (0..Canvas::WIDTH)
            .filter(|&x| canvas.pixel(x, y) == Some(INK))
            .collect()
    }

    #[test]
    fn test_left_layout() {
        let font = block_font();
        let mut canvas = Canvas::new();
        canvas.text(10, 10, "AB", Align::Left, &font);
        let cols = painted_columns(&canvas, 10);
        assert_eq!(cols.first(), Some(&10));
        assert_eq!(cols.last(), Some(&(10 + ADVANCE_X + GLYPH_WIDTH - 1)));
        assert_eq!(cols.len() as i32, 2 * GLYPH_WIDTH);
    }

    #[test]
    fn test_center_and_right_alignment() {
        let font = block_font();

        let mut canvas = Canvas::new();
        canvas.text(500, 10, "AB", Align::Center, &font);
        assert_eq!(painted_columns(&canvas, 10).first(), Some(&(500 - ADVANCE_X)));

        let mut canvas = Canvas::new();
        canvas.text(500, 10, "AB", Align::Right, &font);
        assert_eq!(painted_columns(&canvas, 10).first(), Some(&(500 - 2 * ADVANCE_X)));
    }

    #[test]
    fn test_newline_and_space() {
        let font = block_font();
        let mut canvas = Canvas::new();
        canvas.text(0, 0, "A B\nB", Align::Left, &font);
        assert_eq!(canvas.pixel(0, 0), Some(INK));
        assert_eq!(canvas.pixel(ADVANCE_X, 0), Some(Color::default()));
        assert_eq!(canvas.pixel(2 * ADVANCE_X, 0), Some(INK));
        assert_eq!(canvas.pixel(0, ADVANCE_Y), Some(INK));
    }

    #[test]
    #[should_panic(expected = "single line")]
    fn test_multiline_centered_rejected() {
        let font = block_font();
        let mut canvas = Canvas::new();
        canvas.text(0, 0, "A\nB", Align::Center, &font);
    }

    #[test]
    #[should_panic(expected = "no glyph")]
    fn test_missing_glyph_rejected() {
        let font = block_font();
        let mut canvas = Canvas::new();
        canvas.text(0, 0, "AZ", Align::Left, &font);
    }
}
