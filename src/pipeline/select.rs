use crate::color::Color;
use crate::pipeline::score::ScoredColor;

/// Default minimum Euclidean RGB distance between any two palette entries.
pub const MIN_DISTANCE: f32 = 50.0;

/// Default maximum number of palette entries.
pub const MAX_COLORS: usize = 4;

/// An ordered list of visually diverse brand color suggestions.
///
/// The first entry is the primary suggestion, the second the secondary;
/// anything beyond that is surfaced for manual picking only. A palette with
/// fewer than two entries means the logo had nothing worth promoting and the
/// caller's existing theme must be left alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn empty() -> Self {
        Self { colors: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn primary(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    pub fn secondary(&self) -> Option<Color> {
        self.colors.get(1).copied()
    }

    /// Entries beyond primary/secondary, offered as manual-pick suggestions.
    pub fn suggestions(&self) -> &[Color] {
        if self.colors.len() > 2 {
            &self.colors[2..]
        } else {
            &[]
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Greedily pick up to `max_colors` from the ranked candidates, accepting a
/// candidate only if it sits at least `min_distance` from every color
/// already accepted. The top scores are often shades of one hue; the
/// distance gate is what turns them into a diverse palette.
pub fn select_palette(
    candidates: &[ScoredColor],
    max_colors: usize,
    min_distance: f32,
) -> Palette {
    let mut accepted: Vec<Color> = Vec::new();

    for candidate in candidates {
        if accepted.len() >= max_colors {
            break;
        }
        let diverse = accepted
            .iter()
            .all(|c| c.distance(candidate.color) >= min_distance);
        if diverse {
            accepted.push(candidate.color);
        }
    }

    Palette { colors: accepted }
}
