//! ANSI escape sequence interpreter.
//!
//! Converts SGR color sequences embedded in text (build and CI logs) into
//! styled HTML or strips them for plain text. Other control sequences are
//! recognised and dropped.
//!
//! A conversion is a single forward pass: the input is split on every CSI
//! ([`tokenizer`]), each chunk is classified ([`chunk`]), SGR parameters
//! update the [`SgrState`] ([`handlers`]) and the chunk's text is rendered
//! with the new state ([`render`]). The outputs are concatenated.

pub mod chunk;
mod handlers;
pub mod palette;
pub mod render;
pub mod tokenizer;
mod types;

pub use chunk::Chunk;
pub use render::{render_chunk, render_span};
pub use tokenizer::{tokenize, Tokens, CSI};
pub use types::{Brightness, Color, ConvertOptions, RenderMode, Rgb, SgrState};

/// Convert ANSI-colored text to HTML with a fresh interpreter.
///
/// The text is not HTML-escaped; apply [`escape_for_html`](crate::html::escape_for_html)
/// first when the input is untrusted.
pub fn ansi_to_html(text: &str, options: &ConvertOptions) -> String {
    AnsiConverter::new().ansi_to_html(text, options)
}

/// Strip ANSI escape sequences with a fresh interpreter.
pub fn ansi_to_text(text: &str) -> String {
    AnsiConverter::new().ansi_to_text(text)
}

/// Convert `text` starting from `state`, returning the final state and output.
///
/// The leading fragment (before the first CSI) is emitted as-is.
pub fn convert(state: SgrState, text: &str, mode: RenderMode) -> (SgrState, String) {
    let tokens = tokenize(text);
    let mut output = String::with_capacity(text.len());
    output.push_str(tokens.leading);

    let state = tokens.chunks.iter().fold(state, |state, chunk| {
        let (next, fragment) = render_chunk(state, chunk, mode);
        output.push_str(&fragment);
        next
    });

    (state, output)
}

/// An interpreter whose state persists across calls.
///
/// Use this when one logical stream arrives in several pieces (for example
/// a log delivered line by line) and colors must carry over between them.
#[derive(Debug, Clone, Default)]
pub struct AnsiConverter {
    state: SgrState,
}

impl AnsiConverter {
    /// Create an interpreter with default (unstyled) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interpreter state.
    pub fn state(&self) -> SgrState {
        self.state
    }

    /// Return to default state.
    pub fn reset(&mut self) {
        self.state = SgrState::default();
    }

    /// Process the text following a single CSI.
    pub fn process_chunk(&mut self, chunk: &str, mode: RenderMode) -> String {
        let (next, fragment) = render_chunk(self.state, chunk, mode);
        self.state = next;
        fragment
    }

    /// Process a complete piece of text.
    pub fn process(&mut self, text: &str, mode: RenderMode) -> String {
        let (next, output) = convert(self.state, text, mode);
        self.state = next;
        output
    }

    /// Convert to HTML, continuing from the current state.
    pub fn ansi_to_html(&mut self, text: &str, options: &ConvertOptions) -> String {
        self.process(text, options.render_mode())
    }

    /// Strip escape sequences, continuing from the current state.
    pub fn ansi_to_text(&mut self, text: &str) -> String {
        self.process(text, RenderMode::Text)
    }
}
