//! Splits raw text on the CSI introducer.

/// Control Sequence Introducer: ESC `[`.
pub const CSI: &str = "\x1b[";

/// Raw text split into the plain leading fragment and the chunks that
/// follow each introducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    /// Text before the first introducer. Never contains escape codes.
    pub leading: &'a str,
    /// Everything after each introducer, up to the next one or end of input.
    pub chunks: Vec<&'a str>,
}

/// Split `text` on every [`CSI`].
///
/// Empty input yields an empty leading fragment and no chunks.
pub fn tokenize(text: &str) -> Tokens<'_> {
    let mut parts = text.split(CSI);
    let leading = parts.next().unwrap_or_default();
    Tokens {
        leading,
        chunks: parts.collect(),
    }
}
