//! Error types for Themekit

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for theme asset operations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Path is not a directory")]
    NotADirectory(PathBuf),

    #[error("Path is a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    #[error("Invalid base64 attachment for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Invalid JSON in {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl ThemeError {
    /// True when a single-file load targeted a directory
    pub fn is_dir(&self) -> bool {
        matches!(self, ThemeError::IsADirectory(_))
    }

    /// True when a scan root did not resolve to a directory
    pub fn is_not_dir(&self) -> bool {
        matches!(self, ThemeError::NotADirectory(_))
    }
}

/// Result type alias for Themekit operations
pub type Result<T> = std::result::Result<T, ThemeError>;

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::TomlParse(err.to_string())
    }
}
