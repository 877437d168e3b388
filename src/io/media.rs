// Copyright (c) 2025, ImageMuse contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Image ingestion: decode, downscale to the display bounding box, and
//! re-encode a binary payload suitable for upload.
//!
//! Ingestion keeps both forms of the image together: RGBA pixels for the
//! egui texture and an encoded blob (original format preserved) for the
//! multipart submission. Replacing the image replaces both.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// Maximum display width an ingested image is scaled to fit within.
pub const MAX_WIDTH: u32 = 800;
/// Maximum display height an ingested image is scaled to fit within.
pub const MAX_HEIGHT: u32 = 800;

/// An ingested image, ready for display and upload.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data for the display texture.
    pub pixels: Vec<u8>,
    /// Encoded bytes for upload, in the original format.
    pub encoded: Vec<u8>,
    /// MIME type matching `encoded`.
    pub mime: String,
    /// Original file name, forwarded with the upload.
    pub file_name: String,
}

/// Clamp `(width, height)` to fit within `(max_width, max_height)`,
/// preserving aspect ratio. The larger dimension is clamped to its maximum
/// and the other scaled to match; dimensions already within bounds are
/// returned unchanged.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width > height {
        if width > max_width {
            let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
            return (max_width, scaled.max(1));
        }
    } else if height > max_height {
        let scaled = (width as f64 * max_height as f64 / height as f64).round() as u32;
        return (scaled.max(1), max_height);
    }
    (width, height)
}

/// Decode raw file bytes, downscale to the bounding box if needed, and
/// produce display pixels plus an upload blob.
///
/// Every failure (unrecognized format, decode error, encode error) is an
/// explicit error; callers surface it to the user instead of hanging.
pub fn ingest(bytes: Vec<u8>, file_name: String) -> Result<LoadedImage> {
    let format = image::guess_format(&bytes)
        .with_context(|| format!("unrecognized image format: {file_name}"))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("failed to decode image: {file_name}"))?;

    let (width, height) = fit_within(decoded.width(), decoded.height(), MAX_WIDTH, MAX_HEIGHT);
    let resized = width != decoded.width() || height != decoded.height();
    let display = if resized {
        decoded.resize_exact(width, height, FilterType::Triangle)
    } else {
        decoded
    };

    // Only a downscale forces a re-encode; otherwise the original bytes ship
    // as-is.
    let encoded = if resized {
        let mut out = Cursor::new(Vec::new());
        display
            .write_to(&mut out, format)
            .with_context(|| format!("failed to re-encode resized image: {file_name}"))?;
        out.into_inner()
    } else {
        bytes
    };

    Ok(LoadedImage {
        width,
        height,
        pixels: display.to_rgba8().into_raw(),
        encoded,
        mime: format.to_mime_type().to_string(),
        file_name,
    })
}

/// Read and ingest an image file from disk.
pub fn ingest_file(path: &Path) -> Result<LoadedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    ingest(bytes, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([120, 40, 200, 255]),
        ));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_fit_within_clamps_wide_images() {
        assert_eq!(fit_within(1600, 800, 800, 800), (800, 400));
    }

    #[test]
    fn test_fit_within_clamps_tall_images() {
        assert_eq!(fit_within(500, 2000, 800, 800), (200, 800));
    }

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(640, 480, 800, 800), (640, 480));
        assert_eq!(fit_within(800, 800, 800, 800), (800, 800));
    }

    #[test]
    fn test_fit_within_preserves_aspect_ratio() {
        let (w, h) = fit_within(3008, 2000, 800, 800);
        let original = 3008.0 / 2000.0;
        let scaled = w as f64 / h as f64;
        assert!((original - scaled).abs() < 0.01);
        assert!(w.max(h) <= 800);
    }

    #[test]
    fn test_fit_within_never_collapses_to_zero() {
        assert_eq!(fit_within(100_000, 10, 800, 800), (800, 1));
    }

    #[test]
    fn test_ingest_downscales_and_reencodes() {
        let loaded = ingest(png_bytes(1600, 800), "big.png".to_string()).unwrap();
        assert_eq!((loaded.width, loaded.height), (800, 400));
        assert_eq!(loaded.mime, "image/png");
        assert_eq!(loaded.pixels.len(), 800 * 400 * 4);

        // The upload blob reflects the downscaled size.
        let reopened = image::load_from_memory(&loaded.encoded).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (800, 400));
    }

    #[test]
    fn test_ingest_keeps_original_bytes_when_within_bounds() {
        let bytes = png_bytes(320, 240);
        let loaded = ingest(bytes.clone(), "small.png".to_string()).unwrap();
        assert_eq!((loaded.width, loaded.height), (320, 240));
        assert_eq!(loaded.encoded, bytes);
    }

    #[test]
    fn test_ingest_rejects_non_image_bytes() {
        let err = ingest(b"not an image at all".to_vec(), "note.txt".to_string());
        assert!(err.is_err());
    }
}
