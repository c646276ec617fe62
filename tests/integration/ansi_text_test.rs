//! Plain-text conversion tests.

use ansi_html::ansi_to_text;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(ansi_to_text("hello\nworld"), "hello\nworld");
}

#[test]
fn strips_sgr_sequences() {
    assert_eq!(
        ansi_to_text("\x1b[1;31merror:\x1b[0m something broke"),
        "error: something broke"
    );
}

#[test]
fn strips_extended_colors() {
    assert_eq!(
        ansi_to_text("\x1b[38;5;196ma\x1b[48;2;1;2;3mb\x1b[0m"),
        "ab"
    );
}

#[test]
fn strips_unsupported_sequences() {
    assert_eq!(ansi_to_text("\x1b[2K\x1b[1Gprogress 50%"), "progress 50%");
    assert_eq!(ansi_to_text("\x1b[?25lhidden\x1b[?25h"), "hidden");
}

#[test]
fn malformed_sequence_keeps_its_text() {
    assert_eq!(ansi_to_text("a\x1b[\nb"), "a\nb");
}

#[test]
fn never_emits_markup() {
    let text = ansi_to_text("\x1b[31mred\x1b[42mgreen bg\x1b[0m");
    assert!(!text.contains('<'));
    assert_eq!(text, "redgreen bg");
}

#[test]
fn idempotent_on_typical_log() {
    let log = "\x1b[32m✓\x1b[0m test a\n\x1b[31m✗\x1b[0m test b\n";
    let once = ansi_to_text(log);
    assert_eq!(once, "✓ test a\n✗ test b\n");
    assert_eq!(ansi_to_text(&once), once);
}
