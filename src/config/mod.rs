//! Configuration management for ansi-html

mod error;
mod io;
mod types;

pub use error::*;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::ansi::ConvertOptions;
use crate::document::DocumentOptions;
use crate::pipeline::RenderOptions;

impl Config {
    /// Get the config file path (~/.config/ansi-html/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansi-html)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default path, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.document.title.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "document.title",
            });
        }
        let font = &self.document.font_family;
        if font.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "document.font_family",
            });
        }
        if let Some(ch) = font.chars().find(|c| FORBIDDEN_FONT_CHARS.contains(c)) {
            return Err(ConfigError::ForbiddenChar {
                field: "document.font_family",
                ch,
            });
        }
        Ok(())
    }

    /// Pipeline options derived from `[render]`.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            convert: ConvertOptions {
                use_classes: self.render.mode == MarkupMode::Class,
            },
            escape_html: self.render.escape_html,
            linkify: self.render.linkify,
        }
    }

    /// Document options derived from `[document]`.
    ///
    /// The stylesheet is only embedded for class-mode output.
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            title: self.document.title.clone(),
            font_family: self.document.font_family.clone(),
            embed_stylesheet: self.document.embed_stylesheet
                && self.render.mode == MarkupMode::Class,
        }
    }
}
