//! Escape sequence handlers.
//!
//! - sgr: Select Graphic Rendition parameters (colors, brightness)
//!
//! Every other control sequence is recognised and dropped; the helpers
//! below report those at trace level.

pub mod sgr;

use tracing::trace;

/// Log a well-formed CSI sequence that is not SGR.
pub fn log_unsupported_csi(private: &str, params: &str, command: &str) {
    trace!(
        command = %command,
        params = %params,
        private = %private,
        "Unsupported CSI sequence"
    );
}

/// Log a chunk that does not start with a control sequence.
pub fn log_malformed_csi(text: &str) {
    trace!(
        prefix = ?text.chars().take(8).collect::<String>(),
        "Malformed CSI sequence, passing text through"
    );
}
