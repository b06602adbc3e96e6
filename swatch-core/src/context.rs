use std::rc::Rc;

use crate::catalog::{Catalog, MapCatalog};
use crate::config::Config;
use crate::locale::Locale;
use crate::metrics::{FixedAdvanceMetrics, Font, TextMetrics};
use crate::text::Text;

/// Shared services and defaults handed to every element constructor.
///
/// Cloning is cheap; clones share the metrics provider and the catalog.
/// Everything here is single threaded.
#[derive(Clone)]
pub struct UiContext {
    metrics: Rc<dyn TextMetrics>,
    catalog: Rc<dyn Catalog>,
    font: Font,
    locale: Locale,
}

impl UiContext {
    /// Create a context with default font and locale.
    pub fn new(metrics: Rc<dyn TextMetrics>, catalog: Rc<dyn Catalog>) -> Self {
        Self {
            metrics,
            catalog,
            font: Font::default(),
            locale: Locale::default(),
        }
    }

    /// Create a context taking font and locale from `config`.
    pub fn from_config(config: &Config, metrics: Rc<dyn TextMetrics>, catalog: Rc<dyn Catalog>) -> Self {
        Self {
            metrics,
            catalog,
            font: config.font.clone(),
            locale: config.locale.clone(),
        }
    }

    /// A context with [FixedAdvanceMetrics] and an empty catalog.
    pub fn headless() -> Self {
        Self::new(Rc::new(FixedAdvanceMetrics::default()), Rc::new(MapCatalog::new()))
    }

    /// Replace the default font.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Replace the default locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, catalog: Rc<dyn Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// The metrics provider.
    pub fn metrics(&self) -> &Rc<dyn TextMetrics> {
        &self.metrics
    }

    /// The text catalog.
    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    /// Font of new elements.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Initial locale of new elements.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve `text` for `locale` against the catalog.
    pub fn resolve(&self, text: &Text, locale: &Locale) -> String {
        text.resolve(self.catalog(), locale)
    }
}
