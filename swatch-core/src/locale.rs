use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The default locale of a fresh [Config](crate::config::Config).
pub const DEFAULT_LOCALE: &str = "zh_cn";

/// A locale identifier such as `en_us` or `zh_cn`.
///
/// Identifiers are normalised to lower case with `_` as separator, so
/// `"en-US"` and `"en_us"` name the same locale. The empty identifier is the
/// root locale that every lookup falls back to last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Create a locale from an identifier, normalising it.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('-', "_").to_lowercase())
    }

    /// The root locale.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns `true` for the root locale.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The normalised identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The locales to consult, most specific first, ending with the root.
    ///
    /// `en_us_posix` yields `en_us_posix`, `en_us`, `en`, root.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = Vec::new();
        let mut tag = self.0.as_str();
        while !tag.is_empty() {
            chain.push(Self(tag.to_owned()));
            tag = match tag.rfind('_') {
                Some(pos) => &tag[..pos],
                None => "",
            };
        }
        chain.push(Self::root());
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_separator_and_case() {
        assert_eq!(Locale::new("en-US"), Locale::new("en_us"));
        assert_eq!(Locale::new(" ZH_CN ").as_str(), "zh_cn");
    }

    #[test]
    fn fallback_chain_ends_at_root() {
        let chain = Locale::new("en_us").fallback_chain();
        let tags: Vec<_> = chain.iter().map(Locale::as_str).collect();
        assert_eq!(tags, ["en_us", "en", ""]);
        assert_eq!(Locale::root().fallback_chain(), vec![Locale::root()]);
    }

    #[test]
    fn default_is_simplified_chinese() {
        assert_eq!(Locale::default().as_str(), "zh_cn");
    }
}
