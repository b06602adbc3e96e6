//! # Theme Error Types
//!
//! Errors raised by scheme switching and by loading custom scheme files.
//! A missing style record is a caller configuration error and is never
//! substituted by a default record.

use std::path::PathBuf;
use thiserror::Error;

use crate::id::WidgetId;
use crate::scheme::SchemeId;

/// Errors that can occur in the theming layer.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// An element was asked to switch to a scheme it has no record for.
    #[error("Element {element} has no style record registered for scheme '{scheme}'")]
    UnregisteredScheme {
        /// The element kind that is missing the record.
        element: WidgetId,
        /// The requested scheme.
        scheme: SchemeId,
    },

    /// Scheme file was not found.
    #[error("Scheme file not found: {path:?}")]
    SchemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Scheme file could not be parsed.
    #[error("Failed to parse scheme file {path:?}: {details}")]
    SchemeFileParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Scheme file has an extension other than `.toml` or `.json`.
    #[error("Unsupported scheme file format: {path:?}. Use .toml or .json")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A section of a scheme file does not decode into the element's record shape.
    #[error("Scheme file section for {widget} is not a valid style record: {details}")]
    RecordDecode {
        /// The element kind whose section failed.
        widget: WidgetId,
        /// Details about the decode error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an unregistered scheme error.
    pub fn unregistered(element: WidgetId, scheme: SchemeId) -> Self {
        Self::UnregisteredScheme { element, scheme }
    }

    /// Create a scheme file parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl ToString) -> Self {
        Self::SchemeFileParse {
            path: path.into(),
            details: details.to_string(),
        }
    }

    /// Create a record decode error.
    pub fn record_decode(widget: WidgetId, details: impl ToString) -> Self {
        Self::RecordDecode {
            widget,
            details: details.to_string(),
        }
    }

    /// Returns `true` if this is an [ThemeError::UnregisteredScheme] error.
    pub fn is_unregistered_scheme(&self) -> bool {
        matches!(self, Self::UnregisteredScheme { .. })
    }
}
