//! # Theme Configuration
//!
//! Which scheme an application starts in, and which custom scheme files it
//! loads. The configuration is usually embedded in the application config
//! under a `[theme]` table:
//!
//! ```toml
//! [theme]
//! default_scheme = "Dark"
//! scheme_files = ["themes/solarized.toml"]
//! ```
//!
//! ## Environment Variables
//!
//! - `SWATCH_SCHEME`: overrides the default scheme (`light`, `dark`, or any custom name)

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::scheme::SchemeId;
use crate::scheme_file::SchemeFile;

/// Scheme settings of an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// The scheme applied at startup.
    pub default_scheme: SchemeId,
    /// Custom scheme files to load.
    pub scheme_files: Vec<PathBuf>,
}

impl ThemeConfig {
    /// Create a configuration with the `Light` scheme and no scheme files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default scheme.
    pub fn with_default_scheme(mut self, scheme: SchemeId) -> Self {
        self.default_scheme = scheme;
        self
    }

    /// Add a scheme file to load.
    pub fn with_scheme_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.scheme_files.push(path.into());
        self
    }

    /// Apply the `SWATCH_SCHEME` environment variable, if set.
    pub fn apply_env(&mut self) {
        if let Ok(scheme) = env::var("SWATCH_SCHEME") {
            if scheme.trim().is_empty() {
                log::warn!("Ignoring empty SWATCH_SCHEME");
            } else {
                self.default_scheme = SchemeId::parse_lenient(&scheme);
            }
        }
    }

    /// The default configuration with environment overrides applied.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();
        config.apply_env();
        config
    }

    /// Load every configured scheme file, in order.
    ///
    /// Stops at the first file that cannot be read or parsed.
    pub fn load_scheme_files(&self) -> ThemeResult<Vec<SchemeFile>> {
        self.scheme_files
            .iter()
            .map(|path| {
                log::debug!("Loading scheme file {:?}", path);
                SchemeFile::from_file(path)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let config: ThemeConfig = toml::from_str("default_scheme = \"Dark\"").unwrap();
        assert_eq!(config.default_scheme, SchemeId::dark());
        assert!(config.scheme_files.is_empty());
    }

    #[test]
    fn missing_scheme_file_is_reported() {
        let config = ThemeConfig::new().with_scheme_file("/nonexistent/scheme.toml");
        assert!(config.load_scheme_files().is_err());
    }
}
