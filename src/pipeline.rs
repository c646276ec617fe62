//! Log rendering pipeline.
//!
//! Composes the HTML helpers and the ANSI interpreter in the order a log
//! viewer applies them: escape, linkify, convert.

use crate::ansi::{AnsiConverter, ConvertOptions};
use crate::html::{escape_for_html, linkify};

/// Which steps of the pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub convert: ConvertOptions,
    pub escape_html: bool,
    pub linkify: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            convert: ConvertOptions::default(),
            escape_html: true,
            linkify: false,
        }
    }
}

/// Render a single log line with a fresh interpreter.
///
/// One trailing `\n` or `\r\n` is removed first. The linkify caveat of
/// [`render_log`] applies here too.
pub fn render_log_line(line: &str, options: &RenderOptions) -> String {
    let line = strip_line_ending(line);
    AnsiConverter::new().ansi_to_html(&prepare(line, options), &options.convert)
}

/// Render a whole log in one pass so colors carry across line breaks.
///
/// Linkify runs before conversion. A URL directly followed by an escape
/// sequence (`\x1b[34mhttps://x.io\x1b[0m`) absorbs the sequence into its
/// match, which puts the generated `</span>` inside the `href`. Separate
/// URLs from escape sequences with whitespace when linkifying.
pub fn render_log(text: &str, options: &RenderOptions) -> String {
    AnsiConverter::new().ansi_to_html(&prepare(text, options), &options.convert)
}

fn prepare(text: &str, options: &RenderOptions) -> String {
    let text = if options.escape_html {
        escape_for_html(text)
    } else {
        text.to_string()
    };
    if options.linkify {
        linkify(&text)
    } else {
        text
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
