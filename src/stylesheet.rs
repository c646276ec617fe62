//! CSS for class-mode output.
//!
//! Class mode emits `ansi-<color>-fg` / `ansi-<color>-bg` classes; this
//! module produces the rules that give them meaning. True color has no
//! static rule, its value travels in `data-ansi-truecolor-*` attributes.

use crate::ansi::palette::{class_name, rgb, STANDARD_COLORS};
use crate::ansi::Color;

/// Build the stylesheet for the 16 standard colors and palette 16-255.
pub fn class_stylesheet() -> String {
    let standard = (0..STANDARD_COLORS.len()).map(|i| Color::Standard(i as u8));
    let palette = (16..=255u8).map(Color::Palette);

    let mut css = String::new();
    for color in standard.chain(palette) {
        css.push_str(&color_rules(color));
    }
    css
}

/// The `-fg` and `-bg` rules for one color.
fn color_rules(color: Color) -> String {
    let class = class_name(color);
    let value = rgb(color);
    format!(
        ".{class}-fg {{ color: rgb({value}); }}\n.{class}-bg {{ background-color: rgb({value}); }}\n"
    )
}
