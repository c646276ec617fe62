//! Span rendering.
//!
//! Turns a piece of literal text plus the current [`SgrState`] into output
//! for the requested [`RenderMode`].

use super::chunk::Chunk;
use super::handlers::{log_malformed_csi, log_unsupported_csi};
use super::palette::{class_name, rgb};
use super::types::{Color, RenderMode, SgrState};

/// Process one chunk (the text after a CSI) against `state`.
///
/// Returns the state for the next chunk and the rendered fragment.
/// Unsupported and malformed sequences leave the state untouched and
/// yield their text unstyled.
pub fn render_chunk(state: SgrState, chunk: &str, mode: RenderMode) -> (SgrState, String) {
    match Chunk::parse(chunk) {
        Chunk::Sgr { params, text } => {
            let next = state.apply_sgr(params);
            (next, render_span(&next, text, mode))
        }
        Chunk::Unsupported {
            private,
            params,
            command,
            text,
        } => {
            log_unsupported_csi(private, params, command);
            (state, text.to_string())
        }
        Chunk::Malformed { text } => {
            log_malformed_csi(text);
            (state, text.to_string())
        }
    }
}

/// Wrap `text` in markup for `state`.
///
/// Text mode and an unstyled state return the text as-is.
pub fn render_span(state: &SgrState, text: &str, mode: RenderMode) -> String {
    if mode == RenderMode::Text || state.is_unstyled() {
        return text.to_string();
    }

    match mode {
        RenderMode::Classes => class_span(state, text),
        _ => style_span(state, text),
    }
}

fn style_span(state: &SgrState, text: &str) -> String {
    let mut styles = Vec::with_capacity(2);
    if let Some(fg) = state.fg {
        styles.push(format!("color:rgb({})", rgb(fg)));
    }
    if let Some(bg) = state.bg {
        styles.push(format!("background-color:rgb({})", rgb(bg)));
    }
    format!("<span style=\"{}\">{}</span>", styles.join(";"), text)
}

fn class_span(state: &SgrState, text: &str) -> String {
    let mut classes = Vec::with_capacity(2);
    let mut data = String::new();

    for (color, suffix) in [(state.fg, "fg"), (state.bg, "bg")] {
        let Some(color) = color else {
            continue;
        };
        classes.push(format!("{}-{}", class_name(color), suffix));
        if let Color::TrueColor(value) = color {
            data.push_str(&format!(" data-ansi-truecolor-{}=\"{}\"", suffix, value));
        }
    }

    format!(
        "<span class=\"{}\"{}>{}</span>",
        classes.join(" "),
        data,
        text
    )
}
