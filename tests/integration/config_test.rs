//! Config loading, validation and option derivation tests.

use std::fs;

use ansi_html::config::{ConfigError, MarkupMode};
use ansi_html::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.render.mode, MarkupMode::Style);
    assert!(config.render.escape_html);
    assert!(!config.render.linkify);
    assert!(!config.document.standalone);
    assert_eq!(config.document.title, "ansi-html");
    assert_eq!(config.document.font_family, "monospace");
    assert!(config.document.embed_stylesheet);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.render.mode = MarkupMode::Class;
    config.document.title = "CI log".to_string();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_fills_defaults() {
    let config: Config = toml::from_str("[render]\nmode = \"class\"\n").unwrap();
    assert_eq!(config.render.mode, MarkupMode::Class);
    assert!(config.render.escape_html);
    assert_eq!(config.document, Config::default().document);
}

#[test]
fn unknown_mode_fails_to_parse() {
    assert!(toml::from_str::<Config>("[render]\nmode = \"fancy\"\n").is_err());
}

#[test]
fn default_path_lives_in_config_dir() {
    let dir = Config::config_dir().unwrap();
    assert!(dir.ends_with(".config/ansi-html"));
    assert_eq!(Config::config_path().unwrap(), dir.join("config.toml"));
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sub").join("config.toml");
    let mut config = Config::default();
    config.render.linkify = true;
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn load_rejects_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[render\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn load_rejects_failed_validation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[document]\nfont_family = \"mono; color: red\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
    assert!(format!("{:#}", err).contains("forbidden character ';'"));
}

#[test]
fn validate_empty_title() {
    let mut config = Config::default();
    config.document.title = "  ".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::Empty {
            field: "document.title"
        })
    );
}

#[test]
fn validate_forbidden_font_char() {
    let mut config = Config::default();
    config.document.font_family = "x}".to_string();
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "document.font_family contains forbidden character '}'"
    );
}

#[test]
fn render_options_follow_config() {
    let mut config = Config::default();
    config.render.mode = MarkupMode::Class;
    config.render.escape_html = false;
    let options = config.render_options();
    assert!(options.convert.use_classes);
    assert!(!options.escape_html);
    assert!(!options.linkify);
}

#[test]
fn document_options_embed_only_in_class_mode() {
    let mut config = Config::default();
    assert!(!config.document_options().embed_stylesheet);
    config.render.mode = MarkupMode::Class;
    assert!(config.document_options().embed_stylesheet);
    config.document.embed_stylesheet = false;
    assert!(!config.document_options().embed_stylesheet);
}
