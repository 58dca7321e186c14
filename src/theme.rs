use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Color;
use crate::pipeline::select::Palette;

/// The named color slots consumed by website templates.
///
/// Extraction only ever writes `primary` and `secondary`; every other slot
/// keeps whatever the caller configured.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub primary: Color,
    pub primary_dark: Color,
    pub primary_light: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_light: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: Color::new(0x25, 0x63, 0xeb),
            primary_dark: Color::new(0x1e, 0x40, 0xaf),
            primary_light: Color::new(0x60, 0xa5, 0xfa),
            secondary: Color::new(0x10, 0xb9, 0x81),
            accent: Color::new(0xf5, 0x9e, 0x0b),
            background: Color::new(0xff, 0xff, 0xff),
            surface: Color::new(0xf3, 0xf4, 0xf6),
            text: Color::new(0x1f, 0x29, 0x37),
            text_light: Color::new(0x6b, 0x72, 0x80),
            success: Color::new(0x22, 0xc5, 0x5e),
            warning: Color::new(0xea, 0xb3, 0x08),
            error: Color::new(0xef, 0x44, 0x44),
        }
    }
}

impl ThemeColors {
    /// Promote the palette's top two colors into the primary/secondary slots.
    ///
    /// A palette with fewer than two entries is not applied at all: an
    /// undersized suggestion must never half-overwrite a working theme.
    /// Returns whether the theme was changed.
    pub fn apply_palette(&mut self, palette: &Palette) -> bool {
        let (Some(primary), Some(secondary)) = (palette.primary(), palette.secondary()) else {
            return false;
        };
        self.primary = primary;
        self.secondary = secondary;
        true
    }

    /// All slots in declaration order, with their config key names.
    pub fn slots(&self) -> [(&'static str, Color); 12] {
        [
            ("primary", self.primary),
            ("primary_dark", self.primary_dark),
            ("primary_light", self.primary_light),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("text_light", self.text_light),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }

    /// Serialize to the website config key-value format, one slot per line.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (name, color) in self.slots() {
            out.push_str(&format!("{} = {}\n", name, color.to_hex()));
        }
        out
    }

    /// Write the serialized theme to an arbitrary path.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.serialize())
            .with_context(|| format!("failed to write theme to {}", path.display()))
    }
}
