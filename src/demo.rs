//! Frame renderers for each demo.
//!
//! Every renderer takes the resolved [`Config`] and returns finished HDR
//! frames; writing them anywhere is the caller's job.

use glam::Vec2;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::boundary::Boundary;
use crate::canvas::{Canvas, HdrImage};
use crate::config::{color, Config};
use crate::cube::CubeView;
use crate::field::RayField;

/// Triangle corners in normalized device coordinates.
pub const TRIANGLE: [Vec2; 3] = [
    Vec2::new(0.0, 0.5),   // top
    Vec2::new(0.5, -0.5),  // bottom right
    Vec2::new(-0.5, -0.5), // bottom left
];

/// Triangle fill color.
pub const TRIANGLE_COLOR: [f32; 3] = [0.3, 0.8, 0.9];

fn blank(config: &Config) -> Canvas {
    let mut canvas = Canvas::new(config.window.width, config.window.height);
    canvas.clear(color(config.window.clear_color));
    canvas
}

/// An empty frame: just the clear color.
pub fn render_window(config: &Config) -> HdrImage {
    blank(config).into_image()
}

/// The single filled triangle.
pub fn render_triangle(config: &Config) -> HdrImage {
    let mut canvas = blank(config);
    let [a, b, c] = TRIANGLE.map(|p| canvas.ndc_to_pixel(p));
    canvas.fill_triangle(a, b, c, color(TRIANGLE_COLOR));
    canvas.into_image()
}

/// Boundary outline plus two segments per ray.
pub fn render_raycast(config: &Config, boundary: &Boundary, field: &RayField) -> HdrImage {
    let mut canvas = blank(config);
    let ray_color = color(config.raycast.ray_color);
    let bounce_color = color(config.raycast.bounce_color);

    // Bounces first so the primary rays stay on top where they overlap
    for sample in field.samples() {
        let a = canvas.world_to_pixel(boundary, sample.first_hit);
        let b = canvas.world_to_pixel(boundary, sample.second_hit);
        canvas.draw_line(a, b, bounce_color);
    }
    let origin = canvas.world_to_pixel(boundary, field.origin());
    for sample in field.samples() {
        let hit = canvas.world_to_pixel(boundary, sample.first_hit);
        canvas.draw_line(origin, hit, ray_color);
    }
    canvas.draw_boundary(boundary, color(config.raycast.boundary_color));

    debug!("Rendered {} rays from ({:.1}, {:.1})", field.len(), field.origin().x, field.origin().y);
    canvas.into_image()
}

/// Cube view matching the configured frame and spin speed.
pub fn cube_view(config: &Config) -> CubeView {
    CubeView {
        aspect: config.window.width.max(1) as f32 / config.window.height.max(1) as f32,
        degrees_per_second: config.cube.degrees_per_second,
        ..CubeView::default()
    }
}

/// One wireframe cube frame at `seconds`.
pub fn render_cube_frame(config: &Config, view: &CubeView, seconds: f32) -> HdrImage {
    let mut canvas = blank(config);
    let edge_color = color(config.cube.color);
    for [a, b] in view.edges_ndc(seconds) {
        let (a, b) = (canvas.ndc_to_pixel(a), canvas.ndc_to_pixel(b));
        canvas.draw_line(a, b, edge_color);
    }
    canvas.into_image()
}

/// All configured cube frames, rendered in parallel. Frame k is at time k / fps.
pub fn render_cube(config: &Config) -> Vec<HdrImage> {
    let view = cube_view(config);
    let frames = config.cube.frames.max(1);
    let fps = if config.cube.fps > 0.0 { config.cube.fps } else { 30.0 };

    info!("Rendering {} cube frames using {} CPU cores...", frames, rayon::current_num_threads());
    let generation_start = std::time::Instant::now();
    let pb = ProgressBar::new(frames as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
        pb.set_style(style);
    }

    let images: Vec<HdrImage> = (0..frames)
        .into_par_iter()
        .map(|frame| {
            let image = render_cube_frame(config, &view, frame as f32 / fps);
            pb.inc(1);
            image
        })
        .collect();

    pb.finish();
    info!("Frames generated in {:.2?}", generation_start.elapsed());
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.window.width = 80;
        config.window.height = 60;
        config
    }

    #[test]
    fn test_window_is_clear_color() {
        let mut config = small_config();
        config.window.clear_color = [0.2, 0.3, 0.4];
        let image = render_window(&config);
        assert_eq!(image.dimensions(), (80, 60));
        assert!(image.pixels().all(|p| p.0 == [0.2, 0.3, 0.4]));
    }

    #[test]
    fn test_triangle_covers_center_not_corners() {
        let image = render_triangle(&small_config());
        assert_eq!(image.get_pixel(40, 30).0, TRIANGLE_COLOR);
        assert_eq!(image.get_pixel(0, 0).0, [0.0; 3]);
        assert_eq!(image.get_pixel(79, 59).0, [0.0; 3]);
    }

    #[test]
    fn test_raycast_draws_rays_and_outline() {
        let config = small_config();
        let boundary = Boundary::new(80.0, 60.0).unwrap();
        let field = RayField::cast(&boundary, boundary.center(), 4);
        let image = render_raycast(&config, &boundary, &field);

        // Outline
        assert_eq!(image.get_pixel(0, 10).0, config.raycast.boundary_color);
        // The 0deg ray runs from the centre to the right wall along row 30
        assert_eq!(image.get_pixel(60, 30).0, config.raycast.ray_color);
    }

    #[test]
    fn test_cube_frames_follow_config() {
        let mut config = small_config();
        config.cube.frames = 3;
        let frames = render_cube(&config);
        assert_eq!(frames.len(), 3);
        let edge = config.cube.color;
        for frame in &frames {
            assert!(frame.pixels().any(|p| p.0 == edge));
        }
        // The cube has spun between the first and last frame
        assert_ne!(frames[0], frames[2]);
    }
}
