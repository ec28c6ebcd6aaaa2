//! Ray representation for 2D ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, a half-line in the
//! y-up simulation plane. Directions built from an angle are unit length,
//! so `t` is a distance.

use glam::Vec2;

/// Components smaller than this are treated as exactly zero.
///
/// `cos(90°)` evaluates to roughly 4e-8 in f32, which would otherwise turn a
/// ray parallel to an axis into one that reaches a wall millions of pixels away.
pub const AXIS_EPSILON: f32 = 1e-6;

/// Ray in the plane defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in simulation coordinates (y up).
    pub origin: Vec2,

    /// Direction vector of the ray.
    ///
    /// Unit length when built through [`Ray::from_angle`].
    pub direction: Vec2,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Create a unit-direction ray at `degrees`, counter-clockwise from +x.
    ///
    /// Direction components within [`AXIS_EPSILON`] of zero are snapped to
    /// zero so cardinal angles are exactly axis-parallel.
    pub fn from_angle(origin: Vec2, degrees: f32) -> Self {
        Self::new(origin, direction_from_degrees(degrees))
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + t * self.direction
    }
}

/// Normalize an angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit direction for an angle in degrees, with near-zero components snapped.
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let (sin, cos) = normalize_degrees(degrees).to_radians().sin_cos();
    Vec2::new(snap_to_zero(cos), snap_to_zero(sin))
}

fn snap_to_zero(value: f32) -> f32 {
    if value.abs() < AXIS_EPSILON {
        0.0
    } else {
        value
    }
}
