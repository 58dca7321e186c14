//! Palette extraction pipeline: decode -> sample -> score -> select.
//!
//! Everything after decode is pure; the decode step is injected via
//! [`decode::PixelSource`] so the pipeline can run against synthetic buffers
//! in tests and against the `image` crate in production.

pub mod decode;
pub mod sample;
pub mod score;
pub mod select;

use std::path::Path;

use anyhow::Result;

use crate::pipeline::decode::{PixelBuffer, PixelSource};
use crate::pipeline::select::Palette;

/// Sample count the automatic stride aims for, regardless of image size.
const TARGET_SAMPLES: usize = 10_000;

/// Tunables for a single extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Pixel stride for sampling. `None` derives one from the image area so
    /// that roughly [`TARGET_SAMPLES`] pixels are visited.
    pub stride: Option<usize>,
    /// Maximum palette length.
    pub max_colors: usize,
    /// Minimum Euclidean RGB distance between palette entries.
    pub min_distance: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            stride: None,
            max_colors: select::MAX_COLORS,
            min_distance: select::MIN_DISTANCE,
        }
    }
}

impl ExtractOptions {
    fn effective_stride(&self, pixel_count: usize) -> usize {
        match self.stride {
            Some(s) => s.max(1),
            None => (pixel_count / TARGET_SAMPLES).max(1),
        }
    }
}

/// Extract a brand palette from a decoded pixel buffer.
///
/// Pure and deterministic: the same buffer and options always produce the
/// same palette. A degenerate result (fewer than 2 colors, possibly none)
/// is a valid output, not an error.
pub fn extract_palette(buffer: &PixelBuffer, options: &ExtractOptions) -> Palette {
    let stride = options.effective_stride(buffer.pixel_count());
    let buckets = sample::sample_pixels(buffer, stride);
    let candidates = score::score_buckets(&buckets);
    select::select_palette(&candidates, options.max_colors, options.min_distance)
}

/// Decode a logo through `source` and extract its palette.
///
/// Decode failure aborts the whole extraction; no theme state is touched,
/// so the caller keeps whatever colors it already had.
pub fn extract_from_path(
    source: &dyn PixelSource,
    path: &Path,
    options: &ExtractOptions,
) -> Result<Palette> {
    let buffer = source.decode(path)?;
    Ok(extract_palette(&buffer, options))
}
