//! Stateful interpreter tests.

use ansi_html::ansi::{tokenize, Color, SgrState};
use ansi_html::{AnsiConverter, ConvertOptions, RenderMode};

#[test]
fn state_carries_across_process_calls() {
    let mut converter = AnsiConverter::new();
    let first = converter.ansi_to_html("\x1b[1m", &ConvertOptions::default());
    let second = converter.ansi_to_html("\x1b[32mok", &ConvertOptions::default());

    assert_eq!(first, "");
    assert_eq!(second, "<span style=\"color:rgb(0, 255, 0)\">ok</span>");
}

#[test]
fn leading_fragment_is_never_styled() {
    let mut converter = AnsiConverter::new();
    converter.ansi_to_html("\x1b[31mred", &ConvertOptions::default());
    assert_eq!(
        converter.ansi_to_html("still red?", &ConvertOptions::default()),
        "still red?"
    );
    assert_eq!(converter.state().fg, Some(Color::Standard(1)));
}

#[test]
fn separate_converters_do_not_share_state() {
    let mut a = AnsiConverter::new();
    let mut b = AnsiConverter::new();
    a.ansi_to_text("\x1b[31m");
    assert_eq!(a.state().fg, Some(Color::Standard(1)));
    assert_eq!(b.state(), SgrState::default());
    assert_eq!(b.ansi_to_html("\x1b[mplain", &ConvertOptions::default()), "plain");
}

#[test]
fn state_is_mode_independent() {
    let mut converter = AnsiConverter::new();
    converter.ansi_to_text("\x1b[38;5;196m");
    assert_eq!(
        converter.process("\x1b[44mx", RenderMode::Classes),
        "<span class=\"ansi-palette-196-fg ansi-blue-bg\">x</span>"
    );
}

#[test]
fn chunk_by_chunk_matches_whole_text() {
    let text = "lead\x1b[33mwarn\x1b[2Kx\x1b[0mdone";
    let whole = AnsiConverter::new().process(text, RenderMode::InlineStyle);

    let tokens = tokenize(text);
    let mut converter = AnsiConverter::new();
    let mut pieces = tokens.leading.to_string();
    for chunk in tokens.chunks {
        pieces.push_str(&converter.process_chunk(chunk, RenderMode::InlineStyle));
    }

    assert_eq!(pieces, whole);
}

#[test]
fn converter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnsiConverter>();
}
