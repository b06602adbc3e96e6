use std::fmt::{Display, Formatter};

use crate::catalog::Catalog;
use crate::locale::Locale;

/// A localizable string: a catalog key plus the arguments to substitute.
///
/// The value is immutable. The display string is produced on demand by
/// [Text::resolve], so the same `Text` renders correctly after every locale
/// switch. A key with no catalog entry renders as the key itself, which makes
/// plain strings usable directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    key: String,
    args: Vec<String>,
}

impl Text {
    /// Create a text without arguments.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Create a text with substitution arguments.
    pub fn with_args<I, A>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: ToString,
    {
        Self {
            key: key.into(),
            args: args.into_iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// The catalog key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The captured arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns `true` if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// The display string for `locale`.
    pub fn resolve(&self, catalog: &dyn Catalog, locale: &Locale) -> String {
        if self.key.is_empty() {
            return String::new();
        }
        catalog.resolve(&self.key, locale, &self.args)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for Text {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Text {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MapCatalog;

    #[test]
    fn resolution_is_repeatable() {
        let catalog = MapCatalog::new()
            .with_entry("en", "items", "{} items")
            .with_entry("zh_cn", "items", "{}项");
        let text = Text::with_args("items", [3]);

        assert_eq!(text.resolve(&catalog, &Locale::new("en")), "3 items");
        assert_eq!(text.resolve(&catalog, &Locale::new("zh_cn")), "3项");
        assert_eq!(text.resolve(&catalog, &Locale::new("en")), "3 items");
    }

    #[test]
    fn plain_strings_pass_through() {
        let catalog = MapCatalog::new();
        let text = Text::from("Save");
        assert_eq!(text.resolve(&catalog, &Locale::default()), "Save");
        assert_eq!(Text::default().resolve(&catalog, &Locale::default()), "");
    }
}
