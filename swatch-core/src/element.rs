//! # Elements
//!
//! Every widget implements [Element]. Participation in scheme and locale
//! switching is opt-in through capability queries:
//!
//! - [Element::scheme_switchable] returns the element as a [SchemeSwitchable],
//! - [Element::locale_switchable] returns it as a [LocaleSwitchable].
//!
//! Elements that return `None` are skipped by propagation. Ownership of child
//! elements is exposed through two separate enumerations:
//!
//! - [Element::children_mut] lists the structural children of a container,
//! - [Element::auxiliary_mut] lists elements reachable only through an
//!   auxiliary structure: icons, tab pages, tick labels, popup lists.
//!
//! Propagation (see [crate::propagate]) visits both, so no widget needs to
//! duplicate the traversal.

use bitflags::bitflags;
use vello::kurbo::{Point, Rect, Size};

use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{SchemeId, ThemeResult, WidgetId};

use crate::locale::Locale;
use crate::painter::Painter;

bitflags! {
    /// Work an element asks its host to do.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The element must be painted again.
        const DRAW = 0b01;
        /// The element's size changed; the host must lay out again.
        const LAYOUT = 0b10;
    }
}

/// State shared by every element: placement, pending updates and the applied locale.
#[derive(Debug, Clone, Default)]
pub struct ElementBase {
    position: Point,
    size: Size,
    update: Update,
    locale: Locale,
    enabled: bool,
}

impl ElementBase {
    /// Create a base at the origin with zero size.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            enabled: true,
            ..Self::default()
        }
    }

    /// Position relative to the parent.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the element.
    pub fn set_position(&mut self, position: Point) {
        if position != self.position {
            self.position = position;
            self.request(Update::DRAW);
        }
    }

    /// Current size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the element.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.request(Update::LAYOUT | Update::DRAW);
        }
    }

    /// Bounds relative to the parent.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// The locale the element's texts were last resolved against.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Record the applied locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Whether the element accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the element.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled != self.enabled {
            self.enabled = enabled;
            self.request(Update::DRAW);
        }
    }

    /// Ask for a repaint.
    pub fn request_repaint(&mut self) {
        self.request(Update::DRAW);
    }

    /// Accumulate update flags.
    pub fn request(&mut self, update: Update) {
        self.update.insert(update);
    }

    /// Pending update flags.
    pub fn pending(&self) -> Update {
        self.update
    }

    /// Drain pending update flags.
    pub fn take_update(&mut self) -> Update {
        std::mem::take(&mut self.update)
    }
}

/// The base trait for all elements.
pub trait Element {
    /// The element kind.
    fn widget_id(&self) -> WidgetId;

    /// Shared element state.
    fn base(&self) -> &ElementBase;

    /// Mutable shared element state.
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Issue draw calls for this element and its children.
    ///
    /// `origin` is the absolute position of the element's top-left corner.
    fn paint(&self, painter: &mut dyn Painter, origin: Point);

    /// This element as a [SchemeSwitchable], if it supports scheme switching.
    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        None
    }

    /// This element as a [LocaleSwitchable], if it supports locale switching.
    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        None
    }

    /// Structural children, in order.
    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        Vec::new()
    }

    /// Elements reachable through auxiliary structures, in order.
    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        Vec::new()
    }

    /// Structural children, in order.
    fn children(&self) -> Vec<&dyn Element> {
        Vec::new()
    }
}

/// A boxed element.
pub type BoxedElement = Box<dyn Element>;

/// An element that owns per-scheme style records.
pub trait SchemeSwitchable {
    /// Look up and apply this element's own record for `scheme`.
    ///
    /// Must leave the element unchanged when it fails. Children are handled
    /// by the caller.
    fn apply_own_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()>;

    /// The scheme currently applied.
    fn active_scheme(&self) -> &SchemeId;

    /// Register the record `file` defines for this element kind.
    ///
    /// Returns `false` if the file has no section for this kind. Elements
    /// whose records do not come from files keep the default.
    fn register_scheme_file(&mut self, _file: &SchemeFile) -> ThemeResult<bool> {
        Ok(false)
    }
}

/// An element that owns localizable texts.
pub trait LocaleSwitchable {
    /// Re-resolve this element's own texts for `locale` and resize if needed.
    ///
    /// Never fails: missing texts render as their keys.
    fn apply_own_locale(&mut self, locale: &Locale);
}

/// Borrow boxed elements as trait objects.
pub fn elements_mut(elements: &mut [BoxedElement]) -> Vec<&mut dyn Element> {
    elements
        .iter_mut()
        .map(|element| element.as_mut() as &mut dyn Element)
        .collect()
}

/// Borrow boxed elements as trait objects.
pub fn elements(elements: &[BoxedElement]) -> Vec<&dyn Element> {
    elements
        .iter()
        .map(|element| element.as_ref() as &dyn Element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_update_drains_flags() {
        let mut base = ElementBase::new(Locale::default());
        base.set_size(Size::new(10.0, 10.0));
        assert_eq!(base.take_update(), Update::LAYOUT | Update::DRAW);
        assert!(base.take_update().is_empty());
    }

    #[test]
    fn unchanged_geometry_requests_nothing() {
        let mut base = ElementBase::new(Locale::default());
        base.set_position(Point::ZERO);
        base.set_enabled(true);
        assert!(base.pending().is_empty());
    }
}
