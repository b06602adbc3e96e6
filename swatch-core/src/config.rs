//! # Configuration
//!
//! Defaults every element starts from: the scheme, the locale and the font.
//!
//! ```toml
//! locale = "en_us"
//!
//! [theme]
//! default_scheme = "Dark"
//!
//! [font]
//! family = "Noto Sans"
//! size = 14.0
//! ```
//!
//! ## Environment Variables
//!
//! - `SWATCH_CONFIG`: path to a TOML configuration file
//! - `SWATCH_SCHEME`: overrides `theme.default_scheme`
//! - `SWATCH_LOCALE`: overrides `locale`
//! - `SWATCH_FONT_SIZE`: overrides `font.size`

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swatch_theme::config::ThemeConfig;

use crate::error::{CoreError, CoreResult};
use crate::locale::Locale;
use crate::metrics::Font;

/// swatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme settings.
    pub theme: ThemeConfig,
    /// Locale texts are resolved against initially.
    pub locale: Locale,
    /// Font of new elements.
    pub font: Font,
}

impl Config {
    /// Parse a configuration from TOML content. Missing sections keep their defaults.
    pub fn from_toml(content: &str) -> CoreResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a `.toml` file.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Load the configuration named by `SWATCH_CONFIG` (or the defaults) and
    /// apply the other environment overrides.
    ///
    /// Values that cannot be used are logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = match env::var("SWATCH_CONFIG") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring SWATCH_CONFIG '{}': {}", path, err);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.apply_env();
        config
    }

    /// Apply `SWATCH_SCHEME`, `SWATCH_LOCALE` and `SWATCH_FONT_SIZE`.
    pub fn apply_env(&mut self) {
        self.theme.apply_env();

        if let Ok(locale) = env::var("SWATCH_LOCALE") {
            self.locale = Locale::new(locale);
        }

        if let Ok(size) = env::var("SWATCH_FONT_SIZE") {
            match size.trim().parse::<f64>() {
                Ok(size) if size > 0.0 && size.is_finite() => self.font.size = size,
                _ => log::warn!("Ignoring SWATCH_FONT_SIZE '{}': not a positive number", size),
            }
        }
    }
}
