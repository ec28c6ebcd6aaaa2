//! Axis-aligned rectangular boundary and ray-wall intersection.
//!
//! The boundary spans [0, width] x [0, height] in simulation coordinates
//! (y up). A ray starting inside always leaves through exactly one wall,
//! or through a corner when both candidate walls are equally far.

use glam::Vec2;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::ray::Ray;

/// Relative tolerance under which the two candidate distances count as a corner hit.
const CORNER_TOLERANCE: f32 = 1e-5;

/// The edge of the boundary a ray reached first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    /// x = 0
    Left,
    /// x = width
    Right,
    /// y = 0
    Bottom,
    /// y = height
    Top,
    /// Both a vertical and a horizontal wall at once
    Corner,
}

impl Wall {
    /// Reflect a direction angle (degrees) off this wall, normalized to [0, 360).
    ///
    /// Vertical walls mirror the x component, horizontal walls the y
    /// component, and a corner sends the ray straight back.
    pub fn reflect_degrees(self, degrees: f32) -> f32 {
        let reflected = match self {
            Wall::Left | Wall::Right => 180.0 - degrees,
            Wall::Bottom | Wall::Top => -degrees,
            Wall::Corner => degrees + 180.0,
        };
        crate::ray::normalize_degrees(reflected)
    }
}

/// Ray-boundary intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Point where the ray meets the boundary, snapped onto the wall
    pub point: Vec2,
    /// Distance along the ray to the intersection point
    pub distance: f32,
    /// Which wall was reached first
    pub wall: Wall,
}

/// Fixed rectangle rays are cast within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    width: f32,
    height: f32,
}

impl Boundary {
    /// Create a boundary spanning [0, width] x [0, height].
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidBoundary { width, height });
        }
        Ok(Self { width, height })
    }

    /// Boundary width (W)
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Boundary height (H)
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Horizontal extent [0, W]
    pub fn x_extent(&self) -> Interval {
        Interval::new(0.0, self.width)
    }

    /// Vertical extent [0, H]
    pub fn y_extent(&self) -> Interval {
        Interval::new(0.0, self.height)
    }

    /// Center point (W/2, H/2)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Check whether a point lies on one of the four edges, within `epsilon`.
    pub fn on_boundary(&self, p: Vec2, epsilon: f32) -> bool {
        let x = self.x_extent();
        let y = self.y_extent();
        let near_x = Interval::new(-epsilon, self.width + epsilon).contains(p.x);
        let near_y = Interval::new(-epsilon, self.height + epsilon).contains(p.y);
        near_x && near_y && (x.on_edge(p.x, epsilon) || y.on_edge(p.y, epsilon))
    }

    /// Clamp a point onto the closed rectangle.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.x_extent().clamp(p.x), self.y_extent().clamp(p.y))
    }

    /// Convert screen coordinates (top-left origin, y down) to simulation
    /// coordinates (y up): `y' = H - y_screen`.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, self.height - screen.y)
    }

    /// Find where a ray starting inside the boundary first meets a wall.
    ///
    /// An axis the ray is parallel to yields an infinite candidate, so the
    /// finite one always wins. Returns `None` only for a zero direction.
    pub fn hit(&self, r: &Ray) -> Option<WallHit> {
        let o = r.origin;
        let d = r.direction;

        // Candidate along x: |dx / cos| against the wall the ray is heading to
        let (vertical, to_vertical, wall_x) = if d.x > 0.0 {
            (Wall::Right, ((self.width - o.x) / d.x).abs(), self.width)
        } else if d.x < 0.0 {
            (Wall::Left, (o.x / d.x).abs(), 0.0)
        } else {
            (Wall::Right, f32::INFINITY, o.x)
        };

        // Candidate along y: |dy / sin|
        let (horizontal, to_horizontal, wall_y) = if d.y > 0.0 {
            (Wall::Top, ((self.height - o.y) / d.y).abs(), self.height)
        } else if d.y < 0.0 {
            (Wall::Bottom, (o.y / d.y).abs(), 0.0)
        } else {
            (Wall::Top, f32::INFINITY, o.y)
        };

        if !to_vertical.is_finite() && !to_horizontal.is_finite() {
            return None;
        }

        let scale = to_vertical.min(to_horizontal).max(1.0);
        let hit = if (to_vertical - to_horizontal).abs() <= CORNER_TOLERANCE * scale {
            WallHit {
                point: Vec2::new(wall_x, wall_y),
                distance: to_vertical.min(to_horizontal),
                wall: Wall::Corner,
            }
        } else if to_vertical < to_horizontal {
            let y = self.y_extent().clamp(r.at(to_vertical).y);
            WallHit {
                point: Vec2::new(wall_x, y),
                distance: to_vertical,
                wall: vertical,
            }
        } else {
            let x = self.x_extent().clamp(r.at(to_horizontal).x);
            WallHit {
                point: Vec2::new(x, wall_y),
                distance: to_horizontal,
                wall: horizontal,
            }
        };

        Some(hit)
    }
}
