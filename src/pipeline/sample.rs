use std::collections::HashMap;

use crate::pipeline::decode::PixelBuffer;

/// Quantization step applied per channel. Divides the RGB cube into
/// roughly 11^3 cells so anti-aliased shades collapse into one bucket.
pub const QUANT_STEP: u8 = 24;

/// Samples below this alpha are treated as transparent and skipped.
pub const MIN_ALPHA: u8 = 128;

/// A sparse quantization cell accumulating every sample that fell into it.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub key: (u8, u8, u8),
    pub sum_r: u64,
    pub sum_g: u64,
    pub sum_b: u64,
    pub count: u64,
}

impl Bucket {
    fn new(key: (u8, u8, u8)) -> Self {
        Self {
            key,
            sum_r: 0,
            sum_g: 0,
            sum_b: 0,
            count: 0,
        }
    }

    fn add(&mut self, r: u8, g: u8, b: u8) {
        self.sum_r += r as u64;
        self.sum_g += g as u64;
        self.sum_b += b as u64;
        self.count += 1;
    }
}

fn quantize(c: u8) -> u8 {
    (c / QUANT_STEP) * QUANT_STEP
}

/// Walk the buffer at `stride` pixels per step, drop transparent samples,
/// and accumulate the rest into quantization buckets.
///
/// Buckets come back in first-touch order, which keeps downstream tie
/// handling deterministic for a given buffer and stride.
pub fn sample_pixels(buffer: &PixelBuffer, stride: usize) -> Vec<Bucket> {
    assert!(stride >= 1, "stride must be at least 1");

    let mut index: HashMap<(u8, u8, u8), usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    let mut i = 0;
    let bytes = &buffer.data;
    while i + 3 < bytes.len() {
        let (r, g, b, a) = (bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]);
        if a >= MIN_ALPHA {
            let key = (quantize(r), quantize(g), quantize(b));
            let slot = *index.entry(key).or_insert_with(|| {
                buckets.push(Bucket::new(key));
                buckets.len() - 1
            });
            buckets[slot].add(r, g, b);
        }
        i += stride * 4;
    }

    buckets
}
