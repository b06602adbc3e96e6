#![warn(missing_docs)]

//! Core library for swatch => See `swatch` crate.
//!
//! Contains the element model, scheme and locale propagation, deferred
//! localizable text and the text-metrics sizing engine.

pub use swatch_theme as theme;
pub use vello::kurbo;

/// Contains the [Config](config::Config) struct.
pub mod config;

/// Contains the [UiContext](context::UiContext) handed to element constructors.
pub mod context;

/// Contains the [CoreError](error::CoreError) type.
pub mod error;

/// Contains the [Element](element::Element) trait and its capabilities.
pub mod element;

/// Contains the [ImageHandle](image::ImageHandle) type.
pub mod image;

/// Contains the [Locale](locale::Locale) identifier.
pub mod locale;

/// Contains the [Catalog](catalog::Catalog) trait and [MapCatalog](catalog::MapCatalog).
pub mod catalog;

/// Contains font measurement.
pub mod metrics;

/// Contains the [Painter](painter::Painter) render-backend trait.
pub mod painter;

/// Contains scheme and locale propagation through element trees.
pub mod propagate;

/// Contains the [AutoSize](sizing::AutoSize) engine.
pub mod sizing;

/// Contains the deferred localizable [Text](text::Text) value.
pub mod text;

pub use error::{CoreError, CoreResult};
