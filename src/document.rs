//! Standalone HTML documents.

use tracing::warn;

use crate::config::FORBIDDEN_FONT_CHARS;
use crate::html::escape_for_html;
use crate::stylesheet::class_stylesheet;

const FALLBACK_FONT_FAMILY: &str = "monospace";

/// Settings for [`wrap_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub title: String,
    /// CSS `font-family` value. Values containing `;`, `{`, `}`, `<` or
    /// `>` are replaced with `monospace`.
    pub font_family: String,
    /// Include the class stylesheet in a `<style>` block.
    pub embed_stylesheet: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "ansi-html".to_string(),
            font_family: FALLBACK_FONT_FAMILY.to_string(),
            embed_stylesheet: true,
        }
    }
}

/// Wrap rendered markup in a minimal HTML5 document.
///
/// The body goes inside a `<pre>` unchanged; it must already be escaped.
pub fn wrap_document(body: &str, options: &DocumentOptions) -> String {
    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n",
        escape_for_html(&options.title)
    ));
    html.push_str(&format!(
        "<style>\npre {{ font-family: {}; }}\n",
        font_family(&options.font_family)
    ));
    if options.embed_stylesheet {
        html.push_str(&class_stylesheet());
    }
    html.push_str("</style>\n</head>\n<body>\n<pre>");
    html.push_str(body);
    html.push_str("</pre>\n</body>\n</html>\n");
    html
}

/// The font family to emit, or the fallback when `requested` could break
/// out of the style block.
fn font_family(requested: &str) -> &str {
    if requested.trim().is_empty() || requested.contains(FORBIDDEN_FONT_CHARS) {
        warn!(font_family = %requested, "Unsafe font family, using the fallback");
        return FALLBACK_FONT_FAMILY;
    }
    requested
}
