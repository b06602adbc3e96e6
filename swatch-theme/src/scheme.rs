use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Name of the built-in light scheme.
pub const LIGHT: &str = "Light";
/// Name of the built-in dark scheme.
pub const DARK: &str = "Dark";

/// The name of a colour scheme.
///
/// Two identifiers are equal iff their names are equal, so a scheme defined in
/// a file and one created in code with the same name are the same scheme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(String);

impl SchemeId {
    /// Create a scheme identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The built-in `"Light"` scheme.
    pub fn light() -> Self {
        Self::new(LIGHT)
    }

    /// The built-in `"Dark"` scheme.
    pub fn dark() -> Self {
        Self::new(DARK)
    }

    /// Returns the scheme name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a scheme name the way it is written in environment variables:
    /// `light` and `dark` are case-insensitive aliases of the built-ins,
    /// anything else is taken verbatim.
    pub fn parse_lenient(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case(LIGHT) {
            Self::light()
        } else if trimmed.eq_ignore_ascii_case(DARK) {
            Self::dark()
        } else {
            Self::new(trimmed)
        }
    }
}

impl Default for SchemeId {
    fn default() -> Self {
        Self::light()
    }
}

impl Display for SchemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SchemeId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
