//! 2-D vector helpers on top of `glam::Vec2`
//!
//! Component-wise and scalar arithmetic, length and normalization come from
//! glam. This module adds what the simulation needs on top: rotation by an
//! angle and wrapping into a toroidal rectangle.

use glam::Vec2;

/// Wrap `x` into `[0, m)`, congruent to `x` modulo `m`.
///
/// `m` must be positive. Negative inputs wrap from the top of the range.
#[inline]
pub fn wrap_scalar(x: f32, m: f32) -> f32 {
    debug_assert!(m > 0.0, "wrap bound must be positive");
    let r = x.rem_euclid(m);
    // rem_euclid can round up to exactly `m` for tiny negative inputs
    if r >= m { 0.0 } else { r }
}

/// Wrap each axis of `v` into `[0, bounds)`
#[inline]
pub fn wrap(v: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_scalar(v.x, bounds.x), wrap_scalar(v.y, bounds.y))
}

/// Rotate `v` counter-clockwise by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Unit vector pointing along `angle`
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    rotate(Vec2::X, angle)
}

/// Normalize a vector the caller guarantees is non-zero
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    debug_assert!(v != Vec2::ZERO, "cannot normalize a zero vector");
    v / v.length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    const EPS: f32 = 1e-4;

    #[test]
    fn test_wrap_negative() {
        assert!((wrap_scalar(-1.0, 10.0) - 9.0).abs() < EPS);
        assert!((wrap_scalar(-25.0, 10.0) - 5.0).abs() < EPS);
        assert_eq!(wrap_scalar(10.0, 10.0), 0.0);
        assert_eq!(wrap_scalar(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_bound() {
        let w = wrap_scalar(-1e-9, 100.0);
        assert!((0.0..100.0).contains(&w));
    }

    #[test]
    fn test_wrap_vec() {
        let v = wrap(Vec2::new(105.0, -5.0), Vec2::new(100.0, 75.0));
        assert!((v.x - 5.0).abs() < EPS);
        assert!((v.y - 70.0).abs() < EPS);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(Vec2::X, PI / 2.0);
        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_direction_matches_rotation() {
        let d = direction(PI);
        assert!((d.x + 1.0).abs() < EPS);
        assert!(d.y.abs() < EPS);
    }

    #[test]
    fn test_unit_length() {
        let u = unit(Vec2::new(3.0, 4.0));
        assert!((u.length() - 1.0).abs() < EPS);
        assert!((u.x - 0.6).abs() < EPS);
    }

    proptest! {
        #[test]
        fn prop_wrap_in_range(x in -1.0e4f32..1.0e4, m in 0.5f32..500.0) {
            let w = wrap_scalar(x, m);
            prop_assert!(w >= 0.0);
            prop_assert!(w < m);
            // (w - x) is an integer multiple of m
            let k = (w - x) / m;
            prop_assert!((k - k.round()).abs() < 1e-2);
        }

        #[test]
        fn prop_rotate_round_trip(x in -100.0f32..100.0, y in -100.0f32..100.0, a in -10.0f32..10.0) {
            let v = Vec2::new(x, y);
            let back = rotate(rotate(v, a), -a);
            prop_assert!((back - v).length() < 1e-3);
        }

        #[test]
        fn prop_rotate_full_turn(x in -100.0f32..100.0, y in -100.0f32..100.0) {
            let v = Vec2::new(x, y);
            prop_assert!((rotate(v, TAU) - v).length() < 1e-3);
        }

        #[test]
        fn prop_rotate_preserves_length(x in -100.0f32..100.0, y in -100.0f32..100.0, a in -10.0f32..10.0) {
            let v = Vec2::new(x, y);
            prop_assert!((rotate(v, a).length() - v.length()).abs() < 1e-3);
        }
    }
}
