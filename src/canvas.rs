//! Software rasterizer writing into an HDR image buffer.
//!
//! Pixel coordinates are continuous with the origin at the top-left corner
//! and y pointing down; pixel (i, j) covers [i, i+1) x [j, j+1).

use glam::{Vec2, Vec3A};
use image::{ImageBuffer, Rgb};
use rayon::prelude::*;

use crate::boundary::Boundary;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Pixels of slack kept around the image when clipping lines.
const CLIP_MARGIN: f32 = 1.0;

/// Linear f32 RGB image, the format every demo renders into.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Drawing surface backed by an [`HdrImage`].
pub struct Canvas {
    image: HdrImage,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: ImageBuffer::new(width.max(1), height.max(1)),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Take the rendered pixels
    pub fn into_image(self) -> HdrImage {
        self.image
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgb = to_rgb(color);
        self.image.pixels_mut().par_bridge().for_each(|pixel| *pixel = rgb);
    }

    /// Set a single pixel, ignoring points outside the image.
    ///
    /// A point exactly on the right or bottom edge belongs to the last pixel.
    pub fn plot(&mut self, p: Vec2, color: Color) {
        let (w, h) = (self.width() as f32, self.height() as f32);
        if !p.is_finite() || p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
            return;
        }
        let x = (p.x.floor() as u32).min(self.width() - 1);
        let y = (p.y.floor() as u32).min(self.height() - 1);
        self.image.put_pixel(x, y, to_rgb(color));
    }

    /// Draw a line segment by stepping one pixel at a time along the major axis.
    ///
    /// The segment is clipped to the image (plus a one pixel margin) before
    /// stepping, so the step count is bounded by the image size.
    pub fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let margin = Vec2::splat(CLIP_MARGIN);
        let max = Vec2::new(self.width() as f32, self.height() as f32) + margin;
        let Some((a, b)) = clip_segment(a, b, -margin, max) else {
            return;
        };
        let delta = b - a;
        let steps = delta.abs().max_element().ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(a + delta * t, color);
        }
    }

    /// Fill a triangle, sampling coverage at pixel centers. Either winding works.
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }
        let rgb = to_rgb(color);
        self.image
            .enumerate_pixels_mut()
            .par_bridge()
            .for_each(|(i, j, pixel)| {
                let p = Vec2::new(i as f32 + 0.5, j as f32 + 0.5);
                let w0 = edge(b, c, p) * area.signum();
                let w1 = edge(c, a, p) * area.signum();
                let w2 = edge(a, b, p) * area.signum();
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    *pixel = rgb;
                }
            });
    }

    /// Outline a boundary, mapped to fill the whole canvas.
    pub fn draw_boundary(&mut self, boundary: &Boundary, color: Color) {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(boundary.width(), 0.0),
            Vec2::new(boundary.width(), boundary.height()),
            Vec2::new(0.0, boundary.height()),
        ]
        .map(|p| self.world_to_pixel(boundary, p));
        for k in 0..corners.len() {
            self.draw_line(corners[k], corners[(k + 1) % corners.len()], color);
        }
    }

    /// Map normalized device coordinates ([-1, 1], y up) to pixel coordinates.
    pub fn ndc_to_pixel(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width() as f32,
            (1.0 - ndc.y) * 0.5 * self.height() as f32,
        )
    }

    /// Map boundary coordinates ([0, W] x [0, H], y up) to pixel coordinates.
    pub fn world_to_pixel(&self, boundary: &Boundary, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x / boundary.width() * self.width() as f32,
            (boundary.height() - p.y) / boundary.height() * self.height() as f32,
        )
    }
}

/// Box edge that limits a clipped segment end.
#[derive(Clone, Copy)]
enum ClipEdge {
    /// Unclipped, keep the parametric point
    None,
    /// Clipped at x = value
    X(f32),
    /// Clipped at y = value
    Y(f32),
}

/// Liang-Barsky clip of segment a->b against the box [min, max].
///
/// Clipped ends are placed exactly on the box edge rather than at
/// `a + t * d`, which loses all precision when a and b are huge.
/// Returns `None` when the segment misses the box or is not representable.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let d = b - a;
    if !a.is_finite() || !b.is_finite() || !d.is_finite() {
        return None;
    }
    let (mut t0, mut t1) = (0.0f32, 1.0f32);
    let (mut edge0, mut edge1) = (ClipEdge::None, ClipEdge::None);
    for (p, q, edge) in [
        (-d.x, a.x - min.x, ClipEdge::X(min.x)),
        (d.x, max.x - a.x, ClipEdge::X(max.x)),
        (-d.y, a.y - min.y, ClipEdge::Y(min.y)),
        (d.y, max.y - a.y, ClipEdge::Y(max.y)),
    ] {
        if p == 0.0 {
            // Parallel to this edge: entirely outside or no constraint
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 && r > t0 {
            t0 = r;
            edge0 = edge;
        } else if p > 0.0 && r < t1 {
            t1 = r;
            edge1 = edge;
        }
        if t0 > t1 {
            return None;
        }
    }

    let place = |t: f32, edge: ClipEdge| match edge {
        ClipEdge::None => a + d * t,
        ClipEdge::X(x) => Vec2::new(x, a.y + (x - a.x) * (d.y / d.x)),
        ClipEdge::Y(y) => Vec2::new(a.x + (y - a.y) * (d.x / d.y), y),
    };
    let (start, end) = (place(t0, edge0), place(t1, edge1));
    (start.is_finite() && end.is_finite()).then_some((start, end))
}

/// Twice the signed area of (a, b, p); positive when p is left of a->b in y-down space.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}

fn to_rgb(color: Color) -> Rgb<f32> {
    Rgb([color.x, color.y, color.z])
}
