//! ansi-html Library
//!
//! Converts ANSI SGR color sequences in build and CI logs into styled HTML
//! or plain text.
//!
//! ```
//! use ansi_html::{ansi_to_html, ansi_to_text, ConvertOptions};
//!
//! let html = ansi_to_html("\x1b[31mred\x1b[0m", &ConvertOptions::default());
//! assert_eq!(html, "<span style=\"color:rgb(187, 0, 0)\">red</span>");
//! assert_eq!(ansi_to_text("\x1b[1;32mok\x1b[0m"), "ok");
//! ```

pub mod ansi;
pub mod cli;
pub mod config;
pub mod document;
pub mod html;
pub mod logging;
pub mod pipeline;
pub mod stylesheet;

pub use ansi::{ansi_to_html, ansi_to_text, AnsiConverter, ConvertOptions, RenderMode};
pub use config::Config;
pub use document::{wrap_document, DocumentOptions};
pub use html::{escape_for_html, linkify};
pub use pipeline::{render_log, render_log_line, RenderOptions};
pub use stylesheet::class_stylesheet;
