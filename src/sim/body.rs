//! Kinematic bodies
//!
//! A body is a transform plus a linear velocity. Rotation is never integrated
//! from a rate stored here: steering changes `rot` directly in the tick.

use glam::Vec2;

use crate::geometry::{direction, rotate, wrap};

/// Position and heading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub pos: Vec2,
    /// Heading in radians, counter-clockwise from +X
    pub rot: f32,
}

impl Transform {
    pub fn new(pos: Vec2, rot: f32) -> Self {
        Self { pos, rot }
    }

    /// Map a point from local (ship) space to world space
    pub fn apply(&self, local: Vec2) -> Vec2 {
        self.pos + rotate(local, self.rot)
    }

    /// Unit vector along the heading
    pub fn direction(&self) -> Vec2 {
        direction(self.rot)
    }
}

/// A transform moving with constant velocity between ticks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub trans: Transform,
    pub vel: Vec2,
}

impl Body {
    pub fn new(trans: Transform, vel: Vec2) -> Self {
        Self { trans, vel }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.trans.pos
    }

    /// Explicit Euler step
    pub fn integrate(&mut self, dt: f32) {
        self.trans.pos += self.vel * dt;
    }

    /// Wrap the position back into the toroidal world
    pub fn wrap(&mut self, bounds: Vec2) {
        self.trans.pos = wrap(self.trans.pos, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_transform_apply() {
        let t = Transform::new(Vec2::new(10.0, 5.0), FRAC_PI_2);
        let p = t.apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_integrate_keeps_rotation() {
        let mut body = Body::new(Transform::new(Vec2::ZERO, 0.3), Vec2::new(2.0, -1.0));
        body.integrate(0.5);
        assert_eq!(body.pos(), Vec2::new(1.0, -0.5));
        assert_eq!(body.trans.rot, 0.3);
    }

    #[test]
    fn test_wrap_body() {
        let mut body = Body::new(Transform::new(Vec2::new(-1.0, 80.0), 0.0), Vec2::ZERO);
        body.wrap(Vec2::new(100.0, 75.0));
        assert!((body.pos().x - 99.0).abs() < 1e-4);
        assert!((body.pos().y - 5.0).abs() < 1e-4);
    }
}
