//! # Widget Identifiers
//!
//! A [WidgetId] names an element *kind* (not an instance). It tags style
//! registries so errors and log lines can say which kind of element is
//! missing a record, and it names the section of a scheme file that holds
//! that kind's colours.
//!
//! ```rust
//! use swatch_theme::id::WidgetId;
//!
//! let button_id = WidgetId::new("swatch-widgets", "Button");
//! assert_eq!(button_id.namespace(), "swatch-widgets");
//! assert_eq!(button_id.id(), "Button");
//! assert_eq!(button_id.to_string(), "swatch-widgets:Button");
//! ```

use std::fmt::{Debug, Display, Formatter};

/// An identifier for an element kind.
///
/// It consists of a namespace (typically the crate name) and an id (the
/// element type name), so third-party element kinds cannot clash with the
/// built-in ones.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    ///
    /// Example:
    /// ```
    /// let id = swatch_theme::id::WidgetId::new("my_crate", "MyWidget");
    /// ```
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
