//! # Output Module
//!
//! Writes rendered frames out of the process:
//! - PNG file export with sRGB gamma encoding
//! - EXR file export with full linear HDR precision
//! - Live display in TEV (The EXR Viewer) over TCP
//!
//! File exports return an error; TEV streaming is best effort and only logs.

use std::net::TcpStream;
use std::path::{Path, PathBuf};

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use crate::canvas::HdrImage;
use crate::error::{Error, Result};

/// Default TEV port, used when the address has none.
pub const TEV_DEFAULT_PORT: u16 = 14158;

/// Image file formats we can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// 8-bit sRGB
    Png,
    /// 32-bit float linear
    Exr,
}

impl ImageFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "png" => Ok(Self::Png),
            "exr" => Ok(Self::Exr),
            _ => Err(Error::UnsupportedFormat(extension)),
        }
    }
}

/// Save a frame, choosing PNG or EXR from the file extension.
pub fn save_image(image: &HdrImage, output_path: &Path) -> Result<()> {
    match ImageFormat::from_path(output_path)? {
        ImageFormat::Png => save_image_as_png(image, output_path),
        ImageFormat::Exr => save_image_as_exr(image, output_path),
    }
}

/// Path for frame `index` of `count`: the path itself for a single frame,
/// otherwise `stem_0003.ext`.
pub fn numbered_path(path: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return path.to_path_buf();
    }
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{:04}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{:04}", stem, index),
    };
    path.with_file_name(name)
}

/// sRGB transfer function: linear portion for dark values, 1/2.4 power curve above.
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Save an f32 RGB image as PNG, clamping to [0, 1] and applying sRGB gamma.
pub fn save_image_as_png(image: &HdrImage, output_path: &Path) -> Result<()> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);
            Rgb(pixel.0.map(|c| (linear_to_gamma(c.clamp(0.0, 1.0)) * 255.0).round() as u8))
        });

    u8_image.save(output_path).map_err(|source| Error::ImageSave {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save an f32 RGB image as EXR, linear values untouched.
pub fn save_image_as_exr(image: &HdrImage, output_path: &Path) -> Result<()> {
    let width = image.width() as usize;
    write_rgb_file(output_path, width, image.height() as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })
    .map_err(|source| Error::ExrSave {
        path: output_path.to_path_buf(),
        source,
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Append the default TEV port when the address has none.
pub fn tev_address_with_port(address: &str) -> String {
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, TEV_DEFAULT_PORT)
    }
}

/// Send an f32 RGB image to TEV for display.
///
/// TEV wants planar channels, so the interleaved RGBRGB... buffer is split
/// into RRR...GGG...BBB... before sending. Failures are logged, never raised.
pub fn send_image_to_tev(image: &HdrImage, tev_address: &str, image_name: &str) {
    let tev_address = tev_address_with_port(tev_address);
    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let (width, height) = image.dimensions();
    let create_packet = PacketCreateImage {
        image_name,
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    let planar = planar_channels(image);
    let pixel_count = (width * height) as u64;
    let start_time = std::time::Instant::now();
    let update_packet = PacketUpdateImage {
        image_name,
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, pixel_count, 2 * pixel_count],
        channel_strides: &[1, 1, 1],
        data: &planar,
    };

    match client.send(update_packet) {
        Ok(_) => info!("Image data sent to TEV at {} in {:.2?}", tev_address, start_time.elapsed()),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

/// Reorder interleaved RGB into three consecutive planes.
pub fn planar_channels(image: &HdrImage) -> Vec<f32> {
    let mut planar = Vec::with_capacity(image.as_raw().len());
    for channel in 0..3 {
        planar.extend(image.pixels().map(|pixel| pixel[channel]));
    }
    planar
}
