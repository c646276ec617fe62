//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Markup flavour for converted output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Inline `style="color:rgb(...)"` attributes
    #[default]
    Style,
    /// `ansi-*` class names, resolved by the class stylesheet
    Class,
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub mode: MarkupMode,
    /// Escape `&`, `<`, `>` before converting
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
    /// Wrap bare URLs in anchors
    #[serde(default)]
    pub linkify: bool,
}

pub fn default_escape_html() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: MarkupMode::default(),
            escape_html: default_escape_html(),
            linkify: false,
        }
    }
}

/// Standalone document configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Wrap output in a complete HTML document
    #[serde(default)]
    pub standalone: bool,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Embed the class stylesheet when class mode is used
    #[serde(default = "default_embed_stylesheet")]
    pub embed_stylesheet: bool,
}

pub fn default_title() -> String {
    "ansi-html".to_string()
}

pub fn default_font_family() -> String {
    "monospace".to_string()
}

pub fn default_embed_stylesheet() -> bool {
    true
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: default_title(),
            font_family: default_font_family(),
            embed_stylesheet: default_embed_stylesheet(),
        }
    }
}
