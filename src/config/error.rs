//! Configuration validation errors.

/// Characters that would break out of the `font-family` declaration.
pub const FORBIDDEN_FONT_CHARS: [char; 5] = [';', '{', '}', '<', '>'];

/// Errors found when validating a loaded configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} contains forbidden character '{ch}'")]
    ForbiddenChar { field: &'static str, ch: char },
}
