//! Color tables and resolution.
//!
//! - 16 standard colors in two banks (normal, bright), each with a fixed
//!   RGB value and CSS class name
//! - 256-color palette: the standard 16, a 6x6x6 cube, a 24-step gray ramp
//!
//! Both tables are `const`, built at compile time.

use std::borrow::Cow;

use super::types::{Color, Rgb};

/// A named entry of the 16-color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardColor {
    pub rgb: Rgb,
    pub class: &'static str,
}

const fn standard(r: u8, g: u8, b: u8, class: &'static str) -> StandardColor {
    StandardColor {
        rgb: Rgb(r, g, b),
        class,
    }
}

/// The 16 standard colors, normal bank first.
pub const STANDARD_COLORS: [StandardColor; 16] = [
    standard(0, 0, 0, "ansi-black"),
    standard(187, 0, 0, "ansi-red"),
    standard(0, 187, 0, "ansi-green"),
    standard(187, 187, 0, "ansi-yellow"),
    standard(0, 0, 187, "ansi-blue"),
    standard(187, 0, 187, "ansi-magenta"),
    standard(0, 187, 187, "ansi-cyan"),
    standard(255, 255, 255, "ansi-white"),
    standard(85, 85, 85, "ansi-bright-black"),
    standard(255, 85, 85, "ansi-bright-red"),
    standard(0, 255, 0, "ansi-bright-green"),
    standard(255, 255, 85, "ansi-bright-yellow"),
    standard(85, 85, 255, "ansi-bright-blue"),
    standard(255, 85, 255, "ansi-bright-magenta"),
    standard(85, 255, 255, "ansi-bright-cyan"),
    standard(255, 255, 255, "ansi-bright-white"),
];

/// Intensity ramp of the 6x6x6 color cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Class used for 24-bit colors; the value itself travels in a data attribute.
pub const TRUECOLOR_CLASS: &str = "ansi-truecolor";

/// The full 256-color palette.
pub const PALETTE: [Rgb; 256] = build_palette();

const fn build_palette() -> [Rgb; 256] {
    let mut table = [Rgb(0, 0, 0); 256];

    let mut n = 0;
    while n < 16 {
        table[n] = STANDARD_COLORS[n].rgb;
        n += 1;
    }

    while n < 232 {
        let k = n - 16;
        table[n] = Rgb(
            CUBE_LEVELS[k / 36],
            CUBE_LEVELS[(k % 36) / 6],
            CUBE_LEVELS[k % 6],
        );
        n += 1;
    }

    while n < 256 {
        let level = (8 + (n - 232) * 10) as u8;
        table[n] = Rgb(level, level, level);
        n += 1;
    }

    table
}

/// Resolve a color reference to its concrete RGB value.
pub fn rgb(color: Color) -> Rgb {
    match color {
        Color::Standard(index) => STANDARD_COLORS[usize::from(index & 0x0f)].rgb,
        Color::Palette(index) => PALETTE[usize::from(index)],
        Color::TrueColor(rgb) => rgb,
    }
}

/// Resolve a color reference to the class name stem used in class mode.
///
/// The `-fg` / `-bg` suffix is added by the renderer.
pub fn class_name(color: Color) -> Cow<'static, str> {
    match color {
        Color::Standard(index) => Cow::Borrowed(STANDARD_COLORS[usize::from(index & 0x0f)].class),
        Color::Palette(index) if index < 16 => {
            Cow::Borrowed(STANDARD_COLORS[usize::from(index)].class)
        }
        Color::Palette(index) => Cow::Owned(format!("ansi-palette-{}", index)),
        Color::TrueColor(_) => Cow::Borrowed(TRUECOLOR_CLASS),
    }
}
