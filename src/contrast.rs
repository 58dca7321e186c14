//! Adaptive contrast resolution.
//!
//! One shared, pure utility: every rendering surface that needs readable text
//! on an arbitrary background calls the same function, so the luminance
//! threshold can be tuned in exactly one place.

use anyhow::Result;

use crate::color::Color;

/// Choose black or white text for the given background color.
///
/// Stateless and total: any background maps to exactly one of
/// `Color::BLACK` / `Color::WHITE`. A background with luminance exactly 0.5
/// classifies as dark and gets white text.
pub fn text_color(background: Color) -> Color {
    if background.is_light() {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Hex-string convenience wrapper around [`text_color`].
///
/// Fails closed: anything that is not a 6-digit hex color is rejected
/// instead of being parsed into garbage.
pub fn text_color_hex(background: &str) -> Result<String> {
    let bg = Color::from_hex(background)?;
    Ok(text_color(bg).to_hex())
}
