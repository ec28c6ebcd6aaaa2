//! Crate-wide error type.
//!
//! The geometry itself never fails; everything that touches the outside
//! world (config files, image files) reports through [`Error`].

use std::path::PathBuf;

/// Errors raised outside the pure geometry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Boundary dimensions must be finite and strictly positive.
    #[error("invalid boundary {width}x{height}: dimensions must be finite and positive")]
    InvalidBoundary {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A `--click` argument was not of the form `X,Y`.
    #[error("invalid click '{0}': expected X,Y in screen pixels")]
    InvalidClick(String),

    /// Output path has an extension we cannot encode.
    #[error("unsupported file extension '{0}': only .png and .exr are supported")]
    UnsupportedFormat(String),

    /// PNG encoding or file I/O failed.
    #[error("failed to save image {path}: {source}")]
    ImageSave {
        /// Output path
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },

    /// EXR encoding or file I/O failed.
    #[error("failed to save EXR image {path}: {source}")]
    ExrSave {
        /// Output path
        path: PathBuf,
        /// Underlying exr error
        #[source]
        source: exr::error::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
