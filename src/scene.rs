//! Ray-casting scene driven by explicit input events.
//!
//! The scene owns the boundary and the latest [`RayField`]. Each click
//! replaces the field wholesale; nothing is patched incrementally.

use std::sync::Arc;

use glam::Vec2;
use log::debug;

use crate::boundary::Boundary;
use crate::field::RayField;

/// Keys the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Close the demo
    Escape,
    /// Anything else, ignored
    Other,
}

/// Input delivered to [`Scene::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse click in screen coordinates (top-left origin, y down)
    Click {
        /// Click position in screen pixels
        screen: Vec2,
    },
    /// Key press
    Key(Key),
    /// Framebuffer resized; only the viewport follows, the boundary is fixed
    Resize {
        /// New framebuffer width in pixels
        width: u32,
        /// New framebuffer height in pixels
        height: u32,
    },
}

/// Current ray-casting state.
#[derive(Debug, Clone)]
pub struct Scene {
    boundary: Boundary,
    ray_count: usize,
    viewport: (u32, u32),
    field: Option<Arc<RayField>>,
    should_close: bool,
}

impl Scene {
    /// Create a scene with no field cast yet.
    pub fn new(boundary: Boundary, ray_count: usize) -> Self {
        Self {
            boundary,
            ray_count,
            viewport: (boundary.width() as u32, boundary.height() as u32),
            field: None,
            should_close: false,
        }
    }

    /// Apply one event. Returns the new field snapshot when the event
    /// produced one (clicks only).
    pub fn update(&mut self, event: InputEvent) -> Option<Arc<RayField>> {
        match event {
            InputEvent::Click { screen } => {
                let origin = self.boundary.screen_to_world(screen);
                let field = Arc::new(RayField::cast(&self.boundary, origin, self.ray_count));
                debug!(
                    "Click at screen ({:.1}, {:.1}) -> origin ({:.1}, {:.1}), {} rays",
                    screen.x,
                    screen.y,
                    field.origin().x,
                    field.origin().y,
                    field.len()
                );
                self.field = Some(Arc::clone(&field));
                Some(field)
            }
            InputEvent::Key(Key::Escape) => {
                debug!("Escape pressed, closing");
                self.should_close = true;
                None
            }
            InputEvent::Key(Key::Other) => None,
            InputEvent::Resize { width, height } => {
                debug!("Viewport resized to {}x{}", width, height);
                self.viewport = (width, height);
                None
            }
        }
    }

    /// Boundary rays are cast within
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Latest field, if any click happened yet
    pub fn field(&self) -> Option<&Arc<RayField>> {
        self.field.as_ref()
    }

    /// Current viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Whether a close was requested
    pub fn should_close(&self) -> bool {
        self.should_close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(Boundary::new(800.0, 600.0).unwrap(), 16)
    }

    #[test]
    fn test_click_converts_screen_to_world() {
        let mut scene = scene();
        let field = scene
            .update(InputEvent::Click { screen: Vec2::new(100.0, 100.0) })
            .unwrap();

        assert_eq!(field.origin(), Vec2::new(100.0, 500.0));
        assert_eq!(field.len(), 16);
        assert!(Arc::ptr_eq(scene.field().unwrap(), &field));
    }

    #[test]
    fn test_click_replaces_previous_field() {
        let mut scene = scene();
        let first = scene.update(InputEvent::Click { screen: Vec2::new(10.0, 10.0) }).unwrap();
        let second = scene.update(InputEvent::Click { screen: Vec2::new(700.0, 500.0) }).unwrap();

        assert_ne!(first.origin(), second.origin());
        assert_eq!(scene.field().unwrap().origin(), Vec2::new(700.0, 100.0));
        // The earlier snapshot is untouched
        assert_eq!(first.origin(), Vec2::new(10.0, 590.0));
    }

    #[test]
    fn test_escape_requests_close() {
        let mut scene = scene();
        assert!(scene.update(InputEvent::Key(Key::Other)).is_none());
        assert!(!scene.should_close());
        assert!(scene.update(InputEvent::Key(Key::Escape)).is_none());
        assert!(scene.should_close());
    }

    #[test]
    fn test_resize_keeps_boundary() {
        let mut scene = scene();
        assert!(scene.update(InputEvent::Resize { width: 1024, height: 768 }).is_none());
        assert_eq!(scene.viewport(), (1024, 768));
        assert_eq!(scene.boundary().width(), 800.0);
        assert!(scene.field().is_none());
    }
}
