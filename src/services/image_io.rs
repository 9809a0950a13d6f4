//! Image intake and PNG output.
//!
//! Decoded images are resized to a fixed working width before analysis so
//! that face coordinates and crop sizes are comparable across inputs.

use image::imageops::FilterType;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tone_engine::PixelBuffer;

use crate::error::ImageError;

/// Working images may be at most this many times taller than wide.
pub const MAX_ASPECT_RATIO: u32 = 8;

/// Upper bound on working-image pixels (64 MiB of RGBA).
pub const MAX_WORKING_PIXELS: u64 = 16 * 1024 * 1024;

/// Strip a `file://` scheme from a location string.
pub fn strip_file_scheme(location: &str) -> PathBuf {
    PathBuf::from(location.strip_prefix("file://").unwrap_or(location))
}

/// Working-image height for a source of `width`×`height` resized to
/// `target_width`, aspect preserved.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = (target_width as f32 / width as f32) * height as f32;
    (scaled as u32).max(1)
}

/// Decode encoded image bytes into a working-size RGBA buffer.
pub fn decode_image(bytes: &[u8], target_width: u32) -> Result<PixelBuffer, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }

    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 || target_width == 0 {
        return Err(ImageError::UnsupportedDimensions { width, height });
    }

    let target_height = scaled_height(width, height, target_width);
    let (tw, th) = (target_width as u64, target_height as u64);
    if th > tw * MAX_ASPECT_RATIO as u64 || tw * th > MAX_WORKING_PIXELS
    {
        tracing::warn!(width, height, target_width, target_height, "Rejected image dimensions");
        return Err(ImageError::UnsupportedDimensions { width, height });
    }

    let resized = if width == target_width {
        decoded.to_rgba8()
    } else {
        decoded
            .resize_exact(target_width, target_height, FilterType::Triangle)
            .to_rgba8()
    };

    tracing::debug!(
        source_width = width,
        source_height = height,
        width = target_width,
        height = target_height,
        "Decoded image"
    );

    let buffer = PixelBuffer::from_rgba_bytes(
        resized.width() as usize,
        resized.height() as usize,
        resized.as_raw(),
    )?;
    Ok(buffer)
}

/// Read and decode an image file. Accepts plain paths and `file://` URIs.
pub fn load_image(location: &str, target_width: u32) -> Result<PixelBuffer, ImageError> {
    let path = strip_file_scheme(location);
    let bytes = std::fs::read(&path)?;
    decode_image(&bytes, target_width)
}

/// Encode a buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ImageError> {
    let (width, height) = (buffer.width() as u32, buffer.height() as u32);
    if width == 0 || height == 0 {
        return Err(ImageError::UnsupportedDimensions { width, height });
    }

    let data: Vec<u8> = buffer.pixels().iter().flat_map(|p| *p).collect();
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Write a buffer as PNG to `path`, creating parent directories.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ImageError> {
    let bytes = encode_png(buffer)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
