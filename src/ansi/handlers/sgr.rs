//! SGR (Select Graphic Rendition) handler.
//!
//! Applies the parameters of a CSI m sequence to an [`SgrState`]:
//! - Reset (0, or an empty parameter)
//! - Brightness (1)
//! - Standard and bright colors (30-37, 90-97, 40-47, 100-107)
//! - Channel resets (39, 49)
//! - 256-color and RGB extended colors (38, 48)
//!
//! Parameters are split once and walked with a cursor, so long lists stay
//! linear.

use tracing::debug;

use super::super::types::{Brightness, Color, Rgb, SgrState};

/// Which channel an extended color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Foreground,
    Background,
}

impl SgrState {
    /// Apply a semicolon-separated SGR parameter list and return the new state.
    ///
    /// Parameters are consumed left to right; 38 and 48 consume the
    /// parameters that follow them.
    pub fn apply_sgr(self, params: &str) -> SgrState {
        let params: Vec<&str> = params.split(';').collect();
        let mut state = self;
        let mut pos = 0;

        while let Some(&param) = params.get(pos) {
            pos += 1;
            let code = match param.parse::<u32>() {
                Ok(code) => code,
                // All digits but too large: an unknown code, not a reset.
                Err(_) if !param.is_empty() && param.bytes().all(|b| b.is_ascii_digit()) => {
                    continue
                }
                Err(_) => {
                    state = SgrState::default();
                    continue;
                }
            };

            match code {
                0 => state = SgrState::default(),
                1 => state.brightness = Brightness::Bright,
                30..=37 => state.fg = Some(state.standard(code - 30)),
                90..=97 => state.fg = Some(Color::Standard(8 + (code - 90) as u8)),
                39 => state.fg = None,
                40..=47 => state.bg = Some(state.standard(code - 40)),
                100..=107 => state.bg = Some(Color::Standard(8 + (code - 100) as u8)),
                49 => state.bg = None,
                38 => pos += state.apply_extended(&params[pos..], Channel::Foreground),
                48 => pos += state.apply_extended(&params[pos..], Channel::Background),
                _ => {}
            }
        }

        state
    }

    /// Standard color for `hue` (0-7) in the current brightness bank.
    fn standard(&self, hue: u32) -> Color {
        Color::Standard(self.brightness.bank_offset() + hue as u8)
    }

    /// Apply an extended color (`5;n` or `2;r;g;b`) from `rest`, returning
    /// how many parameters were consumed.
    ///
    /// Out-of-range values leave the state untouched. The mode parameter is
    /// consumed even when its arguments are missing.
    fn apply_extended(&mut self, rest: &[&str], channel: Channel) -> usize {
        let Some((&mode, args)) = rest.split_first() else {
            return 0;
        };

        let (color, consumed) = match (mode, args) {
            ("5", [index, ..]) => match parse_component(index) {
                Some(index) => (Color::Palette(index), 2),
                None => {
                    debug!(index = %index, "Ignoring out-of-range palette index");
                    return 2;
                }
            },
            ("2", [r, g, b, ..]) => {
                match (parse_component(r), parse_component(g), parse_component(b)) {
                    (Some(r), Some(g), Some(b)) => (Color::TrueColor(Rgb(r, g, b)), 4),
                    _ => {
                        debug!(components = ?[r, g, b], "Ignoring out-of-range true color");
                        return 4;
                    }
                }
            }
            _ => return 1,
        };

        match channel {
            Channel::Foreground => self.fg = Some(color),
            Channel::Background => self.bg = Some(color),
        }
        consumed
    }
}

/// Parse a 0-255 component; anything else is rejected.
fn parse_component(value: &str) -> Option<u8> {
    value.parse::<u8>().ok()
}
