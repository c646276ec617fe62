//! escape_for_html and linkify tests.

use ansi_html::{ansi_to_html, escape_for_html, linkify, ConvertOptions};

#[test]
fn escape_handles_all_three_entities() {
    assert_eq!(escape_for_html("a<b>&c"), "a&lt;b&gt;&amp;c");
}

#[test]
fn escape_preserves_escape_sequences() {
    assert_eq!(escape_for_html("\x1b[31m<x>"), "\x1b[31m&lt;x&gt;");
}

#[test]
fn linkify_example_from_docs() {
    assert_eq!(
        linkify("see http://example.com/x"),
        "see <a href=\"http://example.com/x\">http://example.com/x</a>"
    );
}

#[test]
fn linkify_multiple_lines() {
    assert_eq!(
        linkify("a http://x.io\nb https://y.io/z"),
        "a <a href=\"http://x.io\">http://x.io</a>\nb <a href=\"https://y.io/z\">https://y.io/z</a>"
    );
}

#[test]
fn composed_escape_then_convert() {
    let html = ansi_to_html(
        &escape_for_html("\x1b[31m<error>\x1b[0m"),
        &ConvertOptions::default(),
    );
    assert_eq!(html, "<span style=\"color:rgb(187, 0, 0)\">&lt;error&gt;</span>");
}
