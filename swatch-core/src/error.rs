//! # Core Error Types
//!
//! Failures while loading configuration or text bundles. Scheme switching
//! failures are [ThemeError](swatch_theme::ThemeError)s; missing text and
//! missing images are never errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::locale::Locale;

/// Errors that can occur while loading configuration or catalogs.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML content could not be parsed.
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON content could not be parsed.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not supported for this kind of file.
    #[error("Unsupported file format: {path:?}")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A text bundle has a value that is not a string or table.
    #[error("Invalid text bundle for locale '{locale}': {details}")]
    InvalidBundle {
        /// The locale of the bundle.
        locale: Locale,
        /// What was wrong.
        details: String,
    },
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
