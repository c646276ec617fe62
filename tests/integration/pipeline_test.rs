//! Log pipeline, stylesheet and document tests.

use ansi_html::{
    class_stylesheet, render_log, render_log_line, wrap_document, ConvertOptions,
    DocumentOptions, RenderOptions,
};

#[test]
fn log_line_with_crlf() {
    assert_eq!(
        render_log_line("\x1b[33mwarning\x1b[0m: x & y\r\n", &RenderOptions::default()),
        "<span style=\"color:rgb(187, 187, 0)\">warning</span>: x &amp; y"
    );
}

#[test]
fn log_line_class_mode_with_links() {
    let options = RenderOptions {
        convert: ConvertOptions::classes(),
        escape_html: true,
        linkify: true,
    };
    assert_eq!(
        render_log_line("\x1b[36mdocs\x1b[0m https://example.com", &options),
        "<span class=\"ansi-cyan-fg\">docs</span> \
         <a href=\"https://example.com\">https://example.com</a>"
    );
}

#[test]
fn whole_log_keeps_trailing_newline() {
    assert_eq!(render_log("a\nb\n", &RenderOptions::default()), "a\nb\n");
}

#[test]
fn class_output_is_covered_by_stylesheet() {
    let css = class_stylesheet();
    let html = render_log(
        "\x1b[1;35ma\x1b[38;5;100mb",
        &RenderOptions {
            convert: ConvertOptions::classes(),
            ..RenderOptions::default()
        },
    );
    for class in ["ansi-bright-magenta-fg", "ansi-palette-100-fg"] {
        assert!(html.contains(class), "missing {class} in {html}");
        assert!(css.contains(&format!(".{class} ")), "no rule for {class}");
    }
}

#[test]
fn document_contains_rendered_body() {
    let body = render_log("\x1b[32mok\x1b[0m", &RenderOptions::default());
    let html = wrap_document(&body, &DocumentOptions::default());
    assert!(html.contains("<pre><span style=\"color:rgb(0, 187, 0)\">ok</span></pre>"));
    assert!(html.contains("<title>ansi-html</title>"));
}
