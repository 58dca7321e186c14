use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::contrast::text_color;
use crate::pipeline::select::Palette;
use crate::theme::ThemeColors;

fn term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// One colored swatch: the label centered on the slot color, with the label
/// color chosen by the contrast resolver.
fn swatch(label: &str, color: Color) -> String {
    let fg = text_color(color);
    format!("{:^18}", format!("{label} {}", color.to_hex()))
        .with(term(fg))
        .on(term(color))
        .to_string()
}

/// Print every theme slot as a labeled swatch, two per row.
pub fn print_theme(theme: &ThemeColors) {
    let slots = theme.slots();
    for pair in slots.chunks(2) {
        let mut line = String::new();
        for (name, color) in pair {
            line.push_str(&swatch(name, *color));
            line.push(' ');
        }
        println!("{line}");
    }
}

/// Print the raw extracted palette, ranked, one swatch per entry.
pub fn print_palette(palette: &Palette) {
    for (i, color) in palette.colors().iter().enumerate() {
        let label = match i {
            0 => "primary",
            1 => "secondary",
            _ => "suggestion",
        };
        println!("{}", swatch(label, *color));
    }
}
