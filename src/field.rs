//! Ray-cast field: N evenly spaced rays from one origin, each with a
//! first wall hit and a single bounce.
//!
//! A field is an immutable snapshot. Moving the origin means casting a new
//! field, never patching the old one.

use glam::Vec2;
use log::trace;

use crate::boundary::{Boundary, Wall, WallHit};
use crate::ray::{normalize_degrees, Ray};

/// One cast ray with its first hit and its bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    /// Index in [0, N)
    pub index: usize,
    /// Direction in degrees, counter-clockwise from +x, in [0, 360)
    pub angle: f32,
    /// Distance from the origin to the first wall
    pub first_distance: f32,
    /// Point on the boundary where the ray first lands
    pub first_hit: Vec2,
    /// Wall the ray first lands on; selects the reflection rule
    pub wall: Wall,
    /// Direction after the bounce, in degrees [0, 360)
    pub bounce_angle: f32,
    /// Distance from the first hit to the next wall
    pub second_distance: f32,
    /// Point on the boundary where the bounced ray lands
    pub second_hit: Vec2,
}

/// All rays cast from one origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RayField {
    origin: Vec2,
    samples: Vec<RaySample>,
}

impl RayField {
    /// Cast `ray_count` rays at angles i * 360 / N from `origin`.
    ///
    /// The origin is clamped into the boundary first. `ray_count == 0`
    /// yields an empty field.
    pub fn cast(boundary: &Boundary, origin: Vec2, ray_count: usize) -> Self {
        let origin = boundary.clamp(origin);
        let step = if ray_count == 0 { 0.0 } else { 360.0 / ray_count as f32 };

        let samples = (0..ray_count)
            .map(|index| cast_ray(boundary, origin, index, index as f32 * step))
            .collect();

        Self { origin, samples }
    }

    /// Origin the rays were cast from
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Every ray, ordered by index
    pub fn samples(&self) -> &[RaySample] {
        &self.samples
    }

    /// Number of rays
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no rays were cast
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Line segments to draw: origin to first hit, first hit to second hit.
    pub fn segments(&self) -> impl Iterator<Item = [Vec2; 2]> + '_ {
        self.samples
            .iter()
            .flat_map(move |s| [[self.origin, s.first_hit], [s.first_hit, s.second_hit]])
    }
}

/// Cast a single ray at `degrees` from an origin inside the boundary.
///
/// Angles are taken modulo 360, so `degrees` and `degrees + 360` give the
/// same sample.
pub fn cast_ray(boundary: &Boundary, origin: Vec2, index: usize, degrees: f32) -> RaySample {
    let angle = normalize_degrees(degrees);
    let first = hit_or_stay(boundary, &Ray::from_angle(origin, angle));

    let bounce_angle = first.wall.reflect_degrees(angle);
    let second = hit_or_stay(boundary, &Ray::from_angle(first.point, bounce_angle));

    trace!(
        "ray {} at {:.2}deg: {:?} after {:.2}, bounce {:.2}deg travels {:.2}",
        index,
        angle,
        first.wall,
        first.distance,
        bounce_angle,
        second.distance
    );

    RaySample {
        index,
        angle,
        first_distance: first.distance,
        first_hit: first.point,
        wall: first.wall,
        bounce_angle,
        second_distance: second.distance,
        second_hit: second.point,
    }
}

// Rays built from an angle are never zero-length, so the fallback is unreachable
// in practice; it keeps the sample well-defined instead of panicking.
fn hit_or_stay(boundary: &Boundary, ray: &Ray) -> WallHit {
    boundary.hit(ray).unwrap_or(WallHit {
        point: ray.origin,
        distance: 0.0,
        wall: Wall::Corner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn boundary() -> Boundary {
        Boundary::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_zero_rays_is_empty() {
        let field = RayField::cast(&boundary(), Vec2::new(10.0, 10.0), 0);
        assert!(field.is_empty());
        assert_eq!(field.segments().count(), 0);
    }

    #[test]
    fn test_angles_are_evenly_spaced() {
        let field = RayField::cast(&boundary(), Vec2::new(400.0, 300.0), 8);
        let angles: Vec<f32> = field.samples().iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]);
    }

    #[test]
    fn test_horizontal_ray_bounces_back_across() {
        let b = boundary();
        let sample = cast_ray(&b, b.center(), 0, 0.0);

        assert_eq!(sample.wall, Wall::Right);
        assert!((sample.first_distance - 400.0).abs() < EPS);
        assert_eq!(sample.bounce_angle, 180.0);
        assert!((sample.second_distance - 800.0).abs() < EPS);
        assert!((sample.second_hit - Vec2::new(0.0, 300.0)).length() < EPS);
    }

    #[test]
    fn test_oblique_bounce_off_top() {
        // From (100, 500) at 45deg: top is 100 away in y, right is 700 away in x
        let b = boundary();
        let sample = cast_ray(&b, Vec2::new(100.0, 500.0), 0, 45.0);

        assert_eq!(sample.wall, Wall::Top);
        assert!((sample.first_hit - Vec2::new(200.0, 600.0)).length() < EPS);
        assert!((sample.first_distance - 100.0 * std::f32::consts::SQRT_2).abs() < EPS);
        assert!((sample.bounce_angle - 315.0).abs() < EPS);

        // Heading down-right from (200, 600): bottom is 600 away in y, right 600 in x
        assert!((sample.second_hit - Vec2::new(800.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_origin_outside_is_clamped() {
        let field = RayField::cast(&boundary(), Vec2::new(-50.0, 900.0), 4);
        assert_eq!(field.origin(), Vec2::new(0.0, 600.0));
        for s in field.samples() {
            assert!(s.first_distance >= 0.0 && s.first_distance.is_finite());
            assert!(s.second_distance >= 0.0 && s.second_distance.is_finite());
        }
    }

    #[test]
    fn test_two_segments_per_ray() {
        let field = RayField::cast(&boundary(), Vec2::new(250.0, 120.0), 36);
        let segments: Vec<_> = field.segments().collect();
        assert_eq!(segments.len(), 72);
        assert_eq!(segments[0][0], field.origin());
        assert_eq!(segments[0][1], segments[1][0]);
    }
}
