//! Interpreter data types.
//!
//! Contains the core data structures for representing SGR state:
//! - Rgb: a concrete 24-bit color
//! - Color: a color reference as selected by an SGR code
//! - SgrState: foreground, background and brightness threaded between chunks
//! - RenderMode / ConvertOptions: how a styled span is emitted

use std::fmt;

/// A concrete 24-bit color.
///
/// Displays as `"R, G, B"`, the form used inside `rgb(...)` and the
/// `data-ansi-truecolor-*` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// A color reference selected by an SGR sequence.
///
/// The reference is kept symbolic and resolved only when a span is
/// rendered, so the same state can be rendered in either [`RenderMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 standard colors (0-7 normal bank, 8-15 bright bank).
    Standard(u8),
    /// 256-color palette index (`38;5;n` / `48;5;n`).
    Palette(u8),
    /// 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`).
    TrueColor(Rgb),
}

/// Which half of the 16-color table codes 30-37 / 40-47 select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brightness {
    #[default]
    Normal,
    Bright,
}

impl Brightness {
    /// Offset into the 16-color table for this bank.
    pub const fn bank_offset(self) -> u8 {
        match self {
            Brightness::Normal => 0,
            Brightness::Bright => 8,
        }
    }
}

/// Interpreter state carried from one chunk to the next.
///
/// The state is a small `Copy` value: every step takes the current state
/// and returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SgrState {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub brightness: Brightness,
}

impl SgrState {
    /// True when neither channel carries a color.
    pub fn is_unstyled(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// How styled text is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Strip sequences, never emit markup.
    Text,
    /// `<span style="color:rgb(...)">` markup.
    #[default]
    InlineStyle,
    /// `<span class="ansi-red-fg">` markup, resolved by a stylesheet.
    Classes,
}

/// Options for [`ansi_to_html`](super::ansi_to_html).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Emit class names instead of inline styles.
    pub use_classes: bool,
}

impl ConvertOptions {
    /// Class-based markup.
    pub fn classes() -> Self {
        Self { use_classes: true }
    }

    /// The HTML render mode these options select.
    pub fn render_mode(&self) -> RenderMode {
        if self.use_classes {
            RenderMode::Classes
        } else {
            RenderMode::InlineStyle
        }
    }
}
