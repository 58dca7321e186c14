use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;

/// Decoded RGBA pixel data, the only input the extraction pipeline sees.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA bytes, row-major, `width * height * 4` long.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}

/// Rasterization capability injected into the extractor.
///
/// Keeps the sampling/scoring/selection pipeline pure: tests and alternative
/// frontends hand in pixel buffers directly, the shipped implementation goes
/// through the `image` crate.
pub trait PixelSource {
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;
}

const MAX_DIM: u32 = 512;

/// Default `PixelSource` backed by the `image` crate.
///
/// Oversized logos are resized to fit within 512x512 (preserving aspect
/// ratio) before readback so extraction time stays bounded regardless of
/// upload size.
pub struct ImageDecoder;

impl PixelSource for ImageDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let img = image::open(path).with_context(|| {
            if !path.exists() {
                format!("file not found: {}", path.display())
            } else {
                format!(
                    "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                    path.display()
                )
            }
        })?;

        let img = if img.width() > MAX_DIM || img.height() > MAX_DIM {
            img.resize(MAX_DIM, MAX_DIM, FilterType::Lanczos3)
        } else {
            img
        };
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(PixelBuffer::new(width, height, rgba.into_raw()))
    }
}
