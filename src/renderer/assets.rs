//! Static sprite data
//!
//! Built once at startup by [`Assets::load`]; a malformed pattern is an
//! asset bug and aborts initialization.

use super::color::{Color, colors};
use super::sprite::{Sprite, SpriteError};
use super::text::Font;
use crate::sim::AsteroidVariant;

const HEART: &str = r"
.00...00.
0000.0000
000000000
.0000000.
..00000..
...000...
....0....
";

const ASTEROID: &str = r"
................
......00000.....
....000110000...
...00001100000..
..0000000001100.
.000110000011000
.000110000000000
.000000001100000
.010000001100001
.011000000000011
.001100000110010
..00000000110000
..0001000000000.
...00111000000..
.....0000000....
................
";

/// Two-tone palettes for the asteroid variants (base, crater)
const ASTEROID_PALETTES: [[Color; 2]; AsteroidVariant::COUNT] = [
    [Color::rgb(0x6d, 0x4c, 0x41), Color::rgb(0x3e, 0x27, 0x23)],
    [Color::rgb(0x5c, 0x69, 0x00), Color::rgb(0x40, 0x4d, 0x00)],
    [Color::rgb(0xd8, 0x43, 0x15), Color::rgb(0xbf, 0x36, 0x0c)],
];

/// 5x7 glyphs
#[rustfmt::skip]
const GLYPHS: &[(char, [&str; 7])] = &[
    ('0', [".000.", "0...0", "0..00", "0.0.0", "00..0", "0...0", ".000."]),
    ('1', ["..0..", ".00..", "..0..", "..0..", "..0..", "..0..", ".000."]),
    ('2', [".000.", "0...0", "....0", "...0.", "..0..", ".0...", "00000"]),
    ('3', ["00000", "...0.", "..0..", "...0.", "....0", "0...0", ".000."]),
    ('4', ["...0.", "..00.", ".0.0.", "0..0.", "00000", "...0.", "...0."]),
    ('5', ["00000", "0....", "0000.", "....0", "....0", "0...0", ".000."]),
    ('6', ["..00.", ".0...", "0....", "0000.", "0...0", "0...0", ".000."]),
    ('7', ["00000", "....0", "...0.", "..0..", ".0...", ".0...", ".0..."]),
    ('8', [".000.", "0...0", "0...0", ".000.", "0...0", "0...0", ".000."]),
    ('9', [".000.", "0...0", "0...0", ".0000", "....0", "...0.", ".00.."]),
    ('A', [".000.", "0...0", "0...0", "00000", "0...0", "0...0", "0...0"]),
    ('B', ["0000.", "0...0", "0...0", "0000.", "0...0", "0...0", "0000."]),
    ('C', [".000.", "0...0", "0....", "0....", "0....", "0...0", ".000."]),
    ('D', ["000..", "0..0.", "0...0", "0...0", "0...0", "0..0.", "000.."]),
    ('E', ["00000", "0....", "0....", "0000.", "0....", "0....", "00000"]),
    ('F', ["00000", "0....", "0....", "0000.", "0....", "0....", "0...."]),
    ('G', [".000.", "0...0", "0....", "0.000", "0...0", "0...0", ".0000"]),
    ('H', ["0...0", "0...0", "0...0", "00000", "0...0", "0...0", "0...0"]),
    ('I', [".000.", "..0..", "..0..", "..0..", "..0..", "..0..", ".000."]),
    ('J', ["..000", "...0.", "...0.", "...0.", "...0.", "0..0.", ".00.."]),
    ('K', ["0...0", "0..0.", "0.0..", "00...", "0.0..", "0..0.", "0...0"]),
    ('L', ["0....", "0....", "0....", "0....", "0....", "0....", "00000"]),
    ('M', ["0...0", "00.00", "0.0.0", "0.0.0", "0...0", "0...0", "0...0"]),
    ('N', ["0...0", "0...0", "00..0", "0.0.0", "0..00", "0...0", "0...0"]),
    ('O', [".000.", "0...0", "0...0", "0...0", "0...0", "0...0", ".000."]),
    ('P', ["0000.", "0...0", "0...0", "0000.", "0....", "0....", "0...."]),
    ('Q', [".000.", "0...0", "0...0", "0...0", "0.0.0", "0..0.", ".00.0"]),
    ('R', ["0000.", "0...0", "0...0", "0000.", "0.0..", "0..0.", "0...0"]),
    ('S', [".0000", "0....", "0....", ".000.", "....0", "....0", "0000."]),
    ('T', ["00000", "..0..", "..0..", "..0..", "..0..", "..0..", "..0.."]),
    ('U', ["0...0", "0...0", "0...0", "0...0", "0...0", "0...0", ".000."]),
    ('V', ["0...0", "0...0", "0...0", "0...0", "0...0", ".0.0.", "..0.."]),
    ('W', ["0...0", "0...0", "0...0", "0.0.0", "0.0.0", "0.0.0", ".0.0."]),
    ('X', ["0...0", "0...0", ".0.0.", "..0..", ".0.0.", "0...0", "0...0"]),
    ('Y', ["0...0", "0...0", ".0.0.", "..0..", "..0..", "..0..", "..0.."]),
    ('Z', ["00000", "....0", "...0.", "..0..", ".0...", "0....", "00000"]),
    (':', [".....", "..0..", "..0..", ".....", "..0..", "..0..", "....."]),
    ('-', [".....", ".....", ".....", "00000", ".....", ".....", "....."]),
    ('!', ["..0..", "..0..", "..0..", "..0..", "..0..", ".....", "..0.."]),
];

/// Immutable sprite table handed to the renderer
#[derive(Debug, Clone)]
pub struct Assets {
    pub heart: Sprite,
    asteroids: Vec<Sprite>,
    pub font: Font,
}

impl Assets {
    pub fn load() -> Result<Self, SpriteError> {
        let heart = Sprite::from_pattern(HEART, &[colors::HEART])?;
        let asteroids = ASTEROID_PALETTES
            .iter()
            .map(|palette| Sprite::from_pattern(ASTEROID, palette))
            .collect::<Result<Vec<_>, _>>()?;
        let font = Font::from_patterns(GLYPHS, colors::TEXT)?;

        log::debug!(
            "Loaded assets: {} asteroid variants, {} glyphs",
            asteroids.len(),
            font.len()
        );

        Ok(Self {
            heart,
            asteroids,
            font,
        })
    }

    pub fn asteroid(&self, variant: AsteroidVariant) -> &Sprite {
        &self.asteroids[variant.index()]
    }
}
