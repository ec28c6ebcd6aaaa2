//! Rotating wireframe cube.
//!
//! A unit cube centred on the origin spins about a fixed axis, is viewed
//! from +z and projected with a perspective camera into normalized device
//! coordinates.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Cube corners, ±0.5 on every axis.
pub const VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
];

/// Index pairs into [`VERTICES`]: back face, front face, then the four connectors.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Near clipping plane distance
const Z_NEAR: f32 = 0.1;
/// Far clipping plane distance
const Z_FAR: f32 = 100.0;

/// Camera and spin parameters for the cube demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeView {
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Width / height of the target image
    pub aspect: f32,
    /// Distance from the camera to the cube centre along +z
    pub distance: f32,
    /// Rotation axis, need not be normalized
    pub axis: Vec3,
    /// Spin speed in degrees per second
    pub degrees_per_second: f32,
}

impl Default for CubeView {
    fn default() -> Self {
        Self {
            vfov: 45.0,
            aspect: 800.0 / 600.0,
            distance: 3.0,
            axis: Vec3::new(0.5, 1.0, 0.0),
            degrees_per_second: 50.0,
        }
    }
}

impl CubeView {
    /// Model matrix after `seconds` of spinning.
    pub fn model(&self, seconds: f32) -> Mat4 {
        let axis = self.axis.try_normalize().unwrap_or(Vec3::Y);
        Mat4::from_axis_angle(axis, (self.degrees_per_second * seconds).to_radians())
    }

    /// Combined projection * view * model matrix.
    pub fn transform(&self, seconds: f32) -> Mat4 {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.distance), Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(self.vfov.to_radians(), self.aspect, Z_NEAR, Z_FAR);
        projection * view * self.model(seconds)
    }

    /// Edges of the cube at time `seconds`, in normalized device coordinates.
    ///
    /// Edges with an endpoint behind the camera are dropped.
    pub fn edges_ndc(&self, seconds: f32) -> Vec<[Vec2; 2]> {
        let transform = self.transform(seconds);
        let projected: Vec<Option<Vec2>> = VERTICES
            .iter()
            .map(|v| project(transform * v.extend(1.0)))
            .collect();

        EDGES
            .iter()
            .filter_map(|&(a, b)| Some([projected[a]?, projected[b]?]))
            .collect()
    }
}

/// Perspective divide; `None` when the point is at or behind the camera plane.
fn project(clip: Vec4) -> Option<Vec2> {
    if clip.w <= f32::EPSILON {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}
