//! Collision detection and asteroid splitting
//!
//! Every collider in the game is a circle, so detection reduces to a distance
//! test. The boundary is inclusive: circles that exactly touch collide.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::state::Asteroid;
use crate::consts::{ASTEROID_MIN_RADIUS, ASTEROID_SPLIT_RATIO};
use crate::geometry::{rotate, unit};

/// True if two circles overlap or touch
#[inline]
pub fn circles_collide(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    (a - b).length() <= radius_a + radius_b
}

/// Radius the children of an asteroid of `radius` would have
#[inline]
pub fn child_radius(radius: f32) -> f32 {
    radius / ASTEROID_SPLIT_RATIO
}

/// Break a destroyed asteroid into two fragments
///
/// Fragments are pushed apart along the axis perpendicular to the killing
/// shot and gain a sideways kick proportional to the parent's speed. Returns
/// `None` when the fragments would be smaller than the minimum radius.
pub fn split_asteroid(parent: &Asteroid) -> Option<[Asteroid; 2]> {
    let radius = child_radius(parent.radius);
    if radius < ASTEROID_MIN_RADIUS {
        return None;
    }

    let kill_dir = if parent.kill_dir == Vec2::ZERO {
        Vec2::X
    } else {
        unit(parent.kill_dir)
    };
    let right = rotate(kill_dir, -FRAC_PI_2);
    let offset = right * parent.radius / 2.0;
    // Not momentum-conserving: both halves gain speed
    let kick = right * parent.body.vel.length() / 2.0;

    let mut first = parent.body;
    let mut second = parent.body;
    first.trans.pos += offset;
    second.trans.pos -= offset;
    first.vel += kick;
    second.vel -= kick;

    Some([
        Asteroid::new(first, radius, parent.variant),
        Asteroid::new(second, radius, parent.variant),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::{Body, Transform};
    use crate::sim::state::AsteroidVariant;

    fn asteroid(radius: f32, vel: Vec2) -> Asteroid {
        Asteroid::new(
            Body::new(Transform::new(Vec2::new(50.0, 50.0), 0.0), vel),
            radius,
            AsteroidVariant::Moss,
        )
    }

    #[test]
    fn test_touching_circles_collide() {
        assert!(circles_collide(Vec2::ZERO, 2.0, Vec2::new(5.0, 0.0), 3.0));
        assert!(!circles_collide(Vec2::ZERO, 2.0, Vec2::new(5.01, 0.0), 3.0));
    }

    #[test]
    fn test_concentric_circles_collide() {
        assert!(circles_collide(Vec2::ONE, 5.0, Vec2::ONE, 0.1));
    }

    #[test]
    fn test_split_geometry() {
        let mut parent = asteroid(8.0, Vec2::new(0.0, 2.0));
        parent.alive = false;
        parent.kill_dir = Vec2::new(0.0, 100.0);

        let [a, b] = split_asteroid(&parent).expect("large asteroid splits");

        assert!((a.radius - 8.0 / ASTEROID_SPLIT_RATIO).abs() < 1e-5);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.variant, AsteroidVariant::Moss);
        assert!(a.alive && b.alive);

        // Shot travels +Y, so "right" is +X
        assert!((a.body.pos() - Vec2::new(54.0, 50.0)).length() < 1e-4);
        assert!((b.body.pos() - Vec2::new(46.0, 50.0)).length() < 1e-4);
        assert!((a.body.vel - Vec2::new(1.0, 2.0)).length() < 1e-4);
        assert!((b.body.vel - Vec2::new(-1.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn test_small_asteroid_does_not_split() {
        let parent = asteroid(ASTEROID_MIN_RADIUS * ASTEROID_SPLIT_RATIO * 0.99, Vec2::X);
        assert!(split_asteroid(&parent).is_none());
    }

    #[test]
    fn test_split_at_threshold() {
        let parent = asteroid(ASTEROID_MIN_RADIUS * ASTEROID_SPLIT_RATIO * 1.01, Vec2::X);
        let children = split_asteroid(&parent).expect("just above threshold");
        assert!(children.iter().all(|c| c.radius >= ASTEROID_MIN_RADIUS));
    }
}
