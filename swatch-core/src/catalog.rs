//! # Text Catalogs
//!
//! A [Catalog] maps `(key, locale)` to a message template. Resolution is a
//! total function: it walks the locale's fallback chain and, if nothing
//! matches, returns the key itself.
//!
//! Templates take positional arguments:
//!
//! - `{}` is replaced by the next argument,
//! - `{N}` by argument `N` (zero based),
//! - `{{` and `}}` are literal braces.
//!
//! A placeholder without a matching argument is kept verbatim.
//!
//! ```rust
//! use swatch_core::catalog::{Catalog, MapCatalog};
//! use swatch_core::locale::Locale;
//!
//! let catalog = MapCatalog::new()
//!     .with_entry("en", "greeting", "Hello, {}!")
//!     .with_entry("zh_cn", "greeting", "你好，{}！");
//!
//! let en_us = Locale::new("en_US");
//! assert_eq!(catalog.resolve("greeting", &en_us, &["Ada".to_string()]), "Hello, Ada!");
//! assert_eq!(catalog.resolve("farewell", &en_us, &[]), "farewell");
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::locale::Locale;

/// A source of localized message templates.
pub trait Catalog {
    /// The template for `key` in exactly `locale`, without fallback.
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String>;

    /// Resolve `key` for `locale` and fill in `args`.
    ///
    /// Falls back along [Locale::fallback_chain] and returns `key` unchanged
    /// if no locale has it.
    fn resolve(&self, key: &str, locale: &Locale, args: &[String]) -> String {
        for candidate in locale.fallback_chain() {
            if let Some(template) = self.lookup(key, &candidate) {
                return format_message(&template, args);
            }
        }
        log::debug!("No text for key '{}' in locale '{}'", key, locale);
        key.to_owned()
    }
}

/// An in-memory catalog of per-locale string tables.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    bundles: IndexMap<Locale, IndexMap<String, String>>,
}

impl MapCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite one template.
    pub fn insert(&mut self, locale: impl Into<Locale>, key: impl Into<String>, template: impl Into<String>) {
        self.bundles
            .entry(locale.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Builder form of [MapCatalog::insert].
    pub fn with_entry(
        mut self,
        locale: impl Into<Locale>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(locale, key, template);
        self
    }

    /// Locales with at least one entry.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    /// Merge a TOML string table into the bundle for `locale`.
    ///
    /// Nested tables are flattened with `.`-joined keys, so
    /// `[button] ok = "OK"` defines `button.ok`.
    pub fn load_toml_str(&mut self, locale: impl Into<Locale>, content: &str) -> CoreResult<()> {
        let table: toml::Table = toml::from_str(content)?;
        self.load_value(locale.into(), serde_json::to_value(table)?)
    }

    /// Merge a JSON object into the bundle for `locale`.
    pub fn load_json_str(&mut self, locale: impl Into<Locale>, content: &str) -> CoreResult<()> {
        let value: Value = serde_json::from_str(content)?;
        self.load_value(locale.into(), value)
    }

    /// Merge a `.toml` or `.json` bundle file into the bundle for `locale`.
    pub fn load_file(&mut self, locale: impl Into<Locale>, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => self.load_toml_str(locale, &fs::read_to_string(path)?),
            Some("json") => self.load_json_str(locale, &fs::read_to_string(path)?),
            _ => Err(CoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn load_value(&mut self, locale: Locale, value: Value) -> CoreResult<()> {
        let Value::Object(root) = value else {
            return Err(CoreError::InvalidBundle {
                locale,
                details: "bundle is not a table".to_string(),
            });
        };

        let mut entries = Vec::new();
        flatten(&locale, "", &root, &mut entries)?;
        log::debug!("Loaded {} texts for locale '{}'", entries.len(), locale);

        let bundle = self.bundles.entry(locale).or_default();
        bundle.extend(entries);
        Ok(())
    }
}

fn flatten(
    locale: &Locale,
    prefix: &str,
    table: &serde_json::Map<String, Value>,
    out: &mut Vec<(String, String)>,
) -> CoreResult<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::String(text) => out.push((key, text.clone())),
            Value::Object(nested) => flatten(locale, &key, nested, out)?,
            other => {
                return Err(CoreError::InvalidBundle {
                    locale: locale.clone(),
                    details: format!("'{key}' is {other}, expected a string"),
                })
            }
        }
    }
    Ok(())
}

impl Catalog for MapCatalog {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        self.bundles.get(locale)?.get(key).cloned()
    }
}

/// Substitute `args` into `template`.
pub fn format_message(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('{') {
            if let Some(close) = tail.find('}') {
                let index = &tail[1..close];
                if index.bytes().all(|b| b.is_ascii_digit()) {
                    let arg = if index.is_empty() {
                        next += 1;
                        args.get(next - 1)
                    } else {
                        index.parse::<usize>().ok().and_then(|n| args.get(n))
                    };
                    match arg {
                        Some(arg) => out.push_str(arg),
                        None => out.push_str(&tail[..=close]),
                    }
                    rest = &tail[close + 1..];
                    continue;
                }
            }
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn sequential_and_positional_placeholders() {
        assert_eq!(format_message("{} of {}", &args(&["3", "7"])), "3 of 7");
        assert_eq!(format_message("{1} before {0}", &args(&["a", "b"])), "b before a");
    }

    #[test]
    fn missing_arguments_stay_verbatim() {
        assert_eq!(format_message("{} and {}", &args(&["x"])), "x and {}");
        assert_eq!(format_message("{5}", &[]), "{5}");
    }

    #[test]
    fn escapes_and_stray_braces() {
        assert_eq!(format_message("{{literal}} {name}", &args(&["x"])), "{literal} {name}");
        assert_eq!(format_message("open { only", &[]), "open { only");
        assert_eq!(format_message("close } only", &[]), "close } only");
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let catalog = MapCatalog::new();
        assert_eq!(catalog.resolve("unknown.key", &Locale::new("xx"), &[]), "unknown.key");
        assert_eq!(
            catalog.resolve("unknown.key", &Locale::new("xx"), &args(&["ignored"])),
            "unknown.key"
        );
    }

    #[test]
    fn falls_back_to_language_then_root() {
        let catalog = MapCatalog::new()
            .with_entry("en", "ok", "OK")
            .with_entry("", "cancel", "Cancel");
        let locale = Locale::new("en_GB");
        assert_eq!(catalog.resolve("ok", &locale, &[]), "OK");
        assert_eq!(catalog.resolve("cancel", &locale, &[]), "Cancel");
    }

    #[test]
    fn toml_tables_are_flattened() {
        let mut catalog = MapCatalog::new();
        catalog
            .load_toml_str("en", "title = \"Demo\"\n[button]\nok = \"OK\"\n")
            .unwrap();
        assert_eq!(catalog.lookup("button.ok", &Locale::new("en")).as_deref(), Some("OK"));
        assert_eq!(catalog.lookup("title", &Locale::new("en")).as_deref(), Some("Demo"));
    }

    #[test]
    fn non_string_values_are_rejected() {
        let mut catalog = MapCatalog::new();
        let err = catalog.load_json_str("en", r#"{ "count": 3 }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBundle { .. }));
    }
}
