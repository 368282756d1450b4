//! # Style Error Types
//!
//! Errors raised while loading the resources the stylesheet depends on.
//! Widget factories never surface these; they recover locally and log instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading style resources.
#[derive(Error, Debug)]
pub enum StyleError {
    /// The font file does not exist.
    #[error("Font file not found: {path:?}")]
    FontNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The font file exists but does not contain usable font data.
    #[error("Failed to parse font file {path:?}: {details}")]
    FontParse {
        /// The path of the font that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// The icon file could not be opened or decoded.
    #[error("Failed to load icon {path:?}: {source}")]
    IconLoad {
        /// The path of the icon.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// Error parsing a style configuration file.
    #[error("Failed to parse style config {path:?}: {details}")]
    ConfigParse {
        /// The path of the configuration file.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

impl StyleError {
    /// Create a font not found error.
    pub fn font_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FontNotFound { path: path.into() }
    }

    /// Create a font parse error.
    pub fn font_parse(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::FontParse {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Create an icon load error.
    pub fn icon_load(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::IconLoad {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration parse error.
    pub fn config_parse(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.to_string(),
        }
    }
}
