//! Palette-indexed sprites and nearest-neighbour blitting
//!
//! Sprites are built once from a textual pattern: each row is a line, `.` is
//! a transparent cell and a digit indexes into the supplied palette.

use std::fmt;

use super::canvas::Canvas;
use super::color::Color;

/// Character marking a transparent cell in a sprite pattern
pub const TRANSPARENT_CELL: char = '.';

/// Reasons a sprite pattern is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// Pattern contains no cells
    Empty,
    /// Character that is neither `.` nor a digit
    UnknownChar { ch: char, row: usize, col: usize },
    /// Digit beyond the end of the palette
    PaletteIndex { index: usize, palette_len: usize },
    /// Row length differs from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::Empty => write!(f, "sprite pattern is empty"),
            SpriteError::UnknownChar { ch, row, col } => {
                write!(f, "unknown sprite character {ch:?} at row {row}, column {col}")
            }
            SpriteError::PaletteIndex { index, palette_len } => write!(
                f,
                "palette index {index} out of range for palette of {palette_len} colors"
            ),
            SpriteError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "sprite row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for SpriteError {}

/// Immutable grid of colors with a transparent sentinel
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Sprite {
    /// Build a sprite from a textual pattern and palette
    ///
    /// Blank lines (including the usual leading/trailing ones of a raw string)
    /// are skipped.
    pub fn from_pattern(pattern: &str, palette: &[Color]) -> Result<Self, SpriteError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for line in pattern.split('\n').filter(|l| !l.is_empty()) {
            let row = height;
            let mut count = 0;
            for (col, ch) in line.chars().enumerate() {
                let color = match ch {
                    TRANSPARENT_CELL => Color::TRANSPARENT,
                    '0'..='9' => {
                        let index = ch as usize - '0' as usize;
                        *palette.get(index).ok_or(SpriteError::PaletteIndex {
                            index,
                            palette_len: palette.len(),
                        })?
                    }
                    _ => return Err(SpriteError::UnknownChar { ch, row, col }),
                };
                cells.push(color);
                count += 1;
            }

            let expected = *width.get_or_insert(count);
            if count != expected {
                return Err(SpriteError::RaggedRow {
                    row,
                    expected,
                    found: count,
                });
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(SpriteError::Empty),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`
    pub fn at(&self, x: usize, y: usize) -> Color {
        self.cells[y * self.width + x]
    }
}

/// Nearest source index when stretching `src_len` cells over `dst_len` pixels
#[inline]
fn nearest(i: i32, dst_len: i32, src_len: usize) -> usize {
    if dst_len <= 1 || src_len <= 1 {
        return 0;
    }
    let t = i as f32 * (src_len - 1) as f32 / (dst_len - 1) as f32;
    (t.round() as usize).min(src_len - 1)
}

impl Canvas {
    /// Stretch `sprite` over the `w x h` rectangle at `(x, y)`
    ///
    /// Transparent cells leave the destination untouched.
    pub fn sprite(&mut self, x: i32, y: i32, w: i32, h: i32, sprite: &Sprite) {
        if w <= 0 || h <= 0 {
            return;
        }

        // Clip window in i64: the origin may be anywhere in i32 range
        let clip = |origin: i32, len: i32, limit: i32| {
            let (origin, len) = (i64::from(origin), i64::from(len));
            let start = (-origin).clamp(0, len);
            let end = (i64::from(limit) - origin).clamp(0, len);
            (start as i32, end as i32)
        };
        let (row_start, row_end) = clip(y, h, Self::HEIGHT);
        let (col_start, col_end) = clip(x, w, Self::WIDTH);

        for j in row_start..row_end {
            let sy = nearest(j, h, sprite.height());
            for i in col_start..col_end {
                let color = sprite.at(nearest(i, w, sprite.width()), sy);
                if !color.is_transparent() {
                    self.put(x + i, y + j, color);
                }
            }
        }
    }

    /// Float variant of [`Canvas::sprite`]; position and size are rounded
    pub fn sprite_f(&mut self, x: f32, y: f32, w: f32, h: f32, sprite: &Sprite) {
        self.sprite(
            x.round() as i32,
            y.round() as i32,
            w.round() as i32,
            h.round() as i32,
            sprite,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn test_from_pattern() {
        let sprite = Sprite::from_pattern("\n.0.\n010\n", &[RED, BLUE]).unwrap();
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
        assert!(sprite.at(0, 0).is_transparent());
        assert_eq!(sprite.at(1, 0), RED);
        assert_eq!(sprite.at(1, 1), BLUE);
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(
            Sprite::from_pattern("0x", &[RED]),
            Err(SpriteError::UnknownChar {
                ch: 'x',
                row: 0,
                col: 1
            })
        );
        assert_eq!(
            Sprite::from_pattern("02", &[RED]),
            Err(SpriteError::PaletteIndex {
                index: 2,
                palette_len: 1
            })
        );
        assert_eq!(
            Sprite::from_pattern("00\n0", &[RED]),
            Err(SpriteError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(Sprite::from_pattern("\n\n", &[RED]), Err(SpriteError::Empty));
    }

    #[test]
    fn test_error_messages() {
        let err = Sprite::from_pattern("0?", &[RED]).unwrap_err();
        assert!(err.to_string().contains("'?'"));
    }

    #[test]
    fn test_blit_identity() {
        let sprite = Sprite::from_pattern("01\n10", &[RED, BLUE]).unwrap();
        let mut canvas = Canvas::new();
        canvas.sprite(5, 5, 2, 2, &sprite);
        assert_eq!(canvas.pixel(5, 5), Some(RED));
        assert_eq!(canvas.pixel(6, 5), Some(BLUE));
        assert_eq!(canvas.pixel(5, 6), Some(BLUE));
        assert_eq!(canvas.pixel(6, 6), Some(RED));
    }

    #[test]
    fn test_blit_scaled_nearest() {
        let sprite = Sprite::from_pattern("01", &[RED, BLUE]).unwrap();
        let mut canvas = Canvas::new();
        canvas.sprite(0, 0, 4, 1, &sprite);
        // 0 -> 0, 1 -> 0.33, 2 -> 0.67, 3 -> 1
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 0), Some(RED));
        assert_eq!(canvas.pixel(2, 0), Some(BLUE));
        assert_eq!(canvas.pixel(3, 0), Some(BLUE));
    }

    #[test]
    fn test_transparent_sprite_leaves_canvas_untouched() {
        let sprite = Sprite::from_pattern("...\n...", &[]).unwrap();
        let mut canvas = Canvas::new();
        canvas.clear(BLUE);
        canvas.put(10, 10, RED);
        let before = canvas.clone();
        canvas.sprite(8, 8, 30, 20, &sprite);
        assert_eq!(canvas.pixels(), before.pixels());
    }

    #[test]
    fn test_blit_clipped() {
        let sprite = Sprite::from_pattern("0", &[RED]).unwrap();
        let mut canvas = Canvas::new();
        canvas.sprite(-3, -3, 5, 5, &sprite);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::default()));
        canvas.sprite(Canvas::WIDTH + 1, 0, 5, 5, &sprite);
    }

    #[test]
    fn test_blit_extreme_origin_is_noop() {
        let sprite = Sprite::from_pattern("0", &[RED]).unwrap();
        let mut canvas = Canvas::new();
        canvas.sprite(i32::MIN, i32::MIN, 4, 4, &sprite);
        canvas.sprite(i32::MAX, i32::MAX, 4, 4, &sprite);
        canvas.sprite(i32::MIN, 0, i32::MAX, 4, &sprite);
        canvas.sprite_f(-1.0e12, -1.0e12, 4.0, 4.0, &sprite);
        canvas.sprite_f(1.0e12, 1.0e12, 4.0, 4.0, &sprite);
        assert!(canvas.pixels().iter().all(|&c| c == Color::default()));
    }
}
