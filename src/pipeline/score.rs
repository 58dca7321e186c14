use crate::color::Color;
use crate::pipeline::sample::Bucket;

/// A ranked palette candidate derived from a bucket. Immutable once scored.
#[derive(Debug, Clone)]
pub struct ScoredColor {
    pub color: Color,
    pub count: u64,
    pub score: f32,
}

const NEAR_WHITE_MIN: f32 = 230.0;
const NEAR_BLACK_MAX: f32 = 30.0;
const NEUTRAL_SPREAD: f32 = 20.0;

/// Demote colors that are almost never brand colors. First match wins.
///
/// Near-white is usually logo padding and gets pushed to the very bottom;
/// near-black (outlines, text) and neutral grays are deprioritized but can
/// still surface in images that contain nothing else.
fn penalty(max_ch: f32, min_ch: f32) -> f32 {
    if max_ch > NEAR_WHITE_MIN && min_ch > NEAR_WHITE_MIN {
        0.01
    } else if max_ch < NEAR_BLACK_MAX && min_ch < NEAR_BLACK_MAX {
        0.1
    } else if max_ch - min_ch < NEUTRAL_SPREAD {
        0.2
    } else {
        1.0
    }
}

/// Average each bucket and rank by dominance: frequency weighted by a
/// saturation proxy, with penalties for whites, blacks, and grays.
///
/// `score = count * (saturation + 0.1) * penalty`. The 0.1 floor lets a very
/// frequent but slightly desaturated color outrank a rare vivid one. The
/// sort is stable, so buckets tied on score keep their first-touch order.
pub fn score_buckets(buckets: &[Bucket]) -> Vec<ScoredColor> {
    let mut scored: Vec<ScoredColor> = buckets
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| {
            let avg_r = (b.sum_r / b.count) as f32;
            let avg_g = (b.sum_g / b.count) as f32;
            let avg_b = (b.sum_b / b.count) as f32;

            let max_ch = avg_r.max(avg_g).max(avg_b);
            let min_ch = avg_r.min(avg_g).min(avg_b);
            let saturation = if max_ch > 0.0 {
                (max_ch - min_ch) / max_ch
            } else {
                0.0
            };

            ScoredColor {
                color: Color::new(avg_r as u8, avg_g as u8, avg_b as u8),
                count: b.count,
                score: b.count as f32 * (saturation + 0.1) * penalty(max_ch, min_ch),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
    scored
}
