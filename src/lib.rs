//! Headless graphics demos
//!
//! A colored triangle, an empty clear-color frame, a rotating wireframe cube,
//! and a 2D ray-casting visualizer: rays fired from a click point are traced
//! to the walls of a rectangular boundary and bounced once.
//! Frames render into HDR image buffers and are saved as PNG/EXR or streamed to TEV.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod boundary;
pub mod canvas;
pub mod config;
pub mod cube;
pub mod demo;
pub mod error;
pub mod field;
pub mod interval;
pub mod output;
pub mod ray;
pub mod scene;

pub use boundary::{Boundary, Wall, WallHit};
pub use error::{Error, Result};
pub use field::{cast_ray, RayField, RaySample};
pub use scene::{InputEvent, Key, Scene};
