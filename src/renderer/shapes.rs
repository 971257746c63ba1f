//! Rasterization of 2D primitives
//!
//! Every primitive clips against the canvas: geometry partly or entirely
//! off-screen is silently cut or skipped.

use glam::Vec2;
use std::mem::swap;

use super::canvas::Canvas;
use super::color::Color;

impl Canvas {
    /// Draw a one-pixel line segment
    ///
    /// Walks the major axis one pixel at a time and rounds the interpolated
    /// minor coordinate to the nearest pixel.
    pub fn line(&mut self, color: Color, p1: Vec2, p2: Vec2) {
        let (mut a, mut b) = (p1, p2);

        if (a.x - b.x).abs() >= (a.y - b.y).abs() {
            if a.x > b.x {
                swap(&mut a, &mut b);
            }
            let start = (a.x.round() as i32).max(0);
            let end = (b.x.round() as i32).min(Self::WIDTH - 1);
            for x in start..=end {
                let y = if b.x == a.x {
                    a.y
                } else {
                    a.y + (x as f32 - a.x) / (b.x - a.x) * (b.y - a.y)
                };
                self.put(x, y.round() as i32, color);
            }
        } else {
            if a.y > b.y {
                swap(&mut a, &mut b);
            }
            let start = (a.y.round() as i32).max(0);
            let end = (b.y.round() as i32).min(Self::HEIGHT - 1);
            for y in start..=end {
                let x = a.x + (y as f32 - a.y) / (b.y - a.y) * (b.x - a.x);
                self.put(x.round() as i32, y, color);
            }
        }
    }

    /// Draw a filled disk: every pixel whose center lies within `radius`
    ///
    /// Span bounds for each row are found by a local search starting from the
    /// previous row's bounds. The search never leaves the screen, so the work
    /// is proportional to the visible filled area.
    pub fn circle(&mut self, color: Color, center: Vec2, radius: f32) {
        if !(radius >= 0.0) || !center.is_finite() {
            return;
        }

        let max_x = (Self::WIDTH - 1) as f32;
        let max_y = (Self::HEIGHT - 1) as f32;
        if center.x + radius < 0.0
            || center.x - radius > max_x
            || center.y + radius < 0.0
            || center.y - radius > max_y
        {
            return;
        }

        let y0 = Self::clip_y((center.y - radius).floor() as i32);
        let y1 = Self::clip_y((center.y + radius).ceil() as i32);

        // The visible part of a row span, if any, contains one of the two
        // columns around the center clamped to the screen
        let cx = center.x.floor();
        let c0 = cx.clamp(0.0, max_x) as i32;
        let c1 = (cx + 1.0).clamp(0.0, max_x) as i32;
        let mut left = c0;
        let mut right = c0;

        for y in y0..=y1 {
            let inside = |x: i32| Vec2::new(x as f32, y as f32).distance(center) <= radius;

            let anchor = if inside(c0) {
                c0
            } else if inside(c1) {
                c1
            } else {
                continue;
            };

            if left > anchor {
                left = anchor;
            } else {
                while !inside(left) {
                    left += 1;
                }
            }
            while left > 0 && inside(left - 1) {
                left -= 1;
            }

            if right < anchor {
                right = anchor;
            } else {
                while !inside(right) {
                    right -= 1;
                }
            }
            while right < Self::WIDTH - 1 && inside(right + 1) {
                right += 1;
            }

            self.fill_span(y, left, right, color);
        }
    }

    /// Draw a filled axis-aligned rectangle with top-left corner `(x0, y0)`
    pub fn rect(&mut self, color: Color, x0: i32, y0: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        if x0.saturating_add(w) <= 0 || x0 >= Self::WIDTH {
            return;
        }
        if y0.saturating_add(h) <= 0 || y0 >= Self::HEIGHT {
            return;
        }

        let x1 = Self::clip_x(x0.saturating_add(w - 1));
        let y1 = Self::clip_y(y0.saturating_add(h - 1));
        let x0 = Self::clip_x(x0);
        let y0 = Self::clip_y(y0);

        for y in y0..=y1 {
            self.fill_span(y, x0, x1, color);
        }
    }

    /// Float variant of [`Canvas::rect`]; each argument is rounded to the nearest pixel
    pub fn rect_f(&mut self, color: Color, x0: f32, y0: f32, w: f32, h: f32) {
        self.rect(
            color,
            x0.round() as i32,
            y0.round() as i32,
            w.round() as i32,
            h.round() as i32,
        );
    }
}
