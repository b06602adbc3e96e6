#![warn(missing_docs)]

//! # swatch Theming State
//!
//! Per-element colour-scheme state for the swatch widget set.
//!
//! Every element owns a [StyleRegistry](registry::StyleRegistry) mapping a
//! [SchemeId](scheme::SchemeId) (`"Light"`, `"Dark"`, or any custom name) to a
//! style record of the element kind's own shape. Switching scheme resolves the
//! element's record for the requested scheme and fails fast with
//! [ThemeError::UnregisteredScheme](error::ThemeError::UnregisteredScheme) when
//! the element has none.
//!
//! ## Quick Start
//!
//! ```rust
//! use swatch_theme::id::WidgetId;
//! use swatch_theme::registry::SchemeState;
//! use swatch_theme::scheme::SchemeId;
//! use swatch_theme::{style_record, Color};
//!
//! style_record! {
//!     /// Colours used by a badge.
//!     pub struct BadgeStyle {
//!         background,
//!         font,
//!     }
//! }
//!
//! let light = BadgeStyle { background: Color::WHITE, font: Color::BLACK };
//! let dark = BadgeStyle { background: Color::BLACK, font: Color::WHITE };
//! let mut state = SchemeState::new(WidgetId::new("my-app", "Badge"), light, dark);
//!
//! state.apply(&SchemeId::dark()).unwrap();
//! assert_eq!(state.current().background, Color::BLACK);
//! assert!(state.apply(&SchemeId::new("Solarized")).is_err());
//! ```
//!
//! ## Custom Schemes
//!
//! Records can be registered programmatically or loaded from a
//! [SchemeFile](scheme_file::SchemeFile) written in TOML or JSON.

extern crate self as swatch_theme;

pub use vello::peniko::Color;

/// Contains the [config::ThemeConfig] struct for scheme configuration.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [id::WidgetId] struct.
pub mod id;
/// Contains the [style_record!] macro.
pub mod record;
/// Contains [registry::StyleRegistry] and [registry::SchemeState].
pub mod registry;
/// Contains the [scheme::SchemeId] struct.
pub mod scheme;
/// Contains the [scheme_file::SchemeFile] loader for custom schemes.
pub mod scheme_file;
/// Serde helpers for hex colours.
pub mod serde_color;

pub use error::{ThemeError, ThemeResult};
pub use id::WidgetId;
pub use registry::{SchemeState, StyleRegistry};
pub use scheme::SchemeId;
