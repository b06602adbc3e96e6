//! # Scheme Files
//!
//! A scheme file defines one named scheme for any number of element kinds.
//! Each element kind has its own section, named after the kind's
//! [WidgetId::id]; every key in a section is a colour slot of that kind's
//! style record.
//!
//! ```toml
//! scheme = "Solarized"
//!
//! [Button]
//! background = "#fdf6e3"
//! font = "#657b83"
//!
//! [Label]
//! font = "#586e75"
//! ```
//!
//! The same layout is accepted as JSON.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ThemeError, ThemeResult};
use crate::id::WidgetId;
use crate::scheme::SchemeId;

#[derive(Deserialize)]
struct RawSchemeFile {
    scheme: SchemeId,
    #[serde(flatten)]
    sections: Map<String, Value>,
}

/// A parsed scheme file.
#[derive(Debug, Clone)]
pub struct SchemeFile {
    scheme: SchemeId,
    sections: Map<String, Value>,
}

impl SchemeFile {
    /// Parse a scheme file from TOML content.
    pub fn from_toml_str(content: &str) -> ThemeResult<Self> {
        Self::from_toml_at(content, Path::new("<inline>"))
    }

    /// Parse a scheme file from JSON content.
    pub fn from_json_str(content: &str) -> ThemeResult<Self> {
        Self::from_json_at(content, Path::new("<inline>"))
    }

    /// Load a scheme file, choosing the format by extension (`.toml` or `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::SchemeFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path.extension().and_then(|ext| ext.to_str());
        match extension {
            Some("toml") => Self::from_toml_at(&fs::read_to_string(path)?, path),
            Some("json") => Self::from_json_at(&fs::read_to_string(path)?, path),
            _ => Err(ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn from_toml_at(content: &str, path: &Path) -> ThemeResult<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ThemeError::parse_error(path, e))?;
        let value = serde_json::to_value(table).map_err(|e| ThemeError::parse_error(path, e))?;
        Self::from_value(value, path)
    }

    fn from_json_at(content: &str, path: &Path) -> ThemeResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ThemeError::parse_error(path, e))?;
        Self::from_value(value, path)
    }

    fn from_value(value: Value, path: &Path) -> ThemeResult<Self> {
        let raw: RawSchemeFile =
            serde_json::from_value(value).map_err(|e| ThemeError::parse_error(path, e))?;
        if let Some((name, _)) = raw.sections.iter().find(|(_, section)| !section.is_object()) {
            return Err(ThemeError::parse_error(
                path,
                format!("'{name}' is not a section"),
            ));
        }
        Ok(Self {
            scheme: raw.scheme,
            sections: raw.sections,
        })
    }

    /// The scheme this file defines.
    pub fn scheme(&self) -> &SchemeId {
        &self.scheme
    }

    /// Names of the sections in this file.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Decode the section for `widget` as a complete record.
    ///
    /// Returns `Ok(None)` if the file has no such section.
    pub fn record<R: DeserializeOwned>(&self, widget: &WidgetId) -> ThemeResult<Option<R>> {
        match self.sections.get(widget.id()) {
            Some(section) => serde_json::from_value(section.clone())
                .map(Some)
                .map_err(|e| ThemeError::record_decode(widget.clone(), e)),
            None => Ok(None),
        }
    }

    /// Decode the section for `widget`, taking slots it does not set from `base`.
    pub fn record_over<R>(&self, widget: &WidgetId, base: &R) -> ThemeResult<Option<R>>
    where
        R: Serialize + DeserializeOwned,
    {
        let Some(Value::Object(section)) = self.sections.get(widget.id()) else {
            return Ok(None);
        };

        let mut merged = match serde_json::to_value(base) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(ThemeError::record_decode(widget.clone(), "record is not a struct")),
            Err(e) => return Err(ThemeError::record_decode(widget.clone(), e)),
        };
        for (slot, value) in section {
            if !merged.contains_key(slot) {
                log::warn!("Scheme '{}' sets unknown slot '{}' for {}", self.scheme, slot, widget);
                continue;
            }
            merged.insert(slot.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(merged))
            .map(Some)
            .map_err(|e| ThemeError::record_decode(widget.clone(), e))
    }
}
