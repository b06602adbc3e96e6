//! Child bookkeeping shared by the container elements.

use swatch_core::element::{self, BoxedElement, Element};
use swatch_core::kurbo::Point;
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_theme::{SchemeId, ThemeResult};

/// Absolutely positioned children of a container.
#[derive(Default)]
pub struct Children {
    elements: Vec<BoxedElement>,
}

impl Children {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `child` at `position` and add it after syncing it to `scheme` and `locale`.
    ///
    /// If the child has no record for `scheme` it is dropped and the error returned.
    pub fn attach(
        &mut self,
        mut child: BoxedElement,
        position: Point,
        scheme: &SchemeId,
        locale: &Locale,
    ) -> ThemeResult<&mut dyn Element> {
        child.base_mut().set_position(position);
        if let Err(err) = propagate::sync_to(child.as_mut(), scheme, locale) {
            log::debug!("Not attaching {}: {}", child.widget_id(), err);
            return Err(err);
        }
        self.elements.push(child);
        let index = self.elements.len() - 1;
        Ok(self.elements[index].as_mut() as &mut dyn Element)
    }

    /// Add `child` as is, without syncing.
    pub fn push(&mut self, child: BoxedElement) {
        self.elements.push(child);
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<BoxedElement> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The child at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Element> {
        self.elements.get(index).map(|child| child.as_ref())
    }

    /// The child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Element> {
        self.elements
            .get_mut(index)
            .map(|child| child.as_mut() as &mut dyn Element)
    }

    /// Children as trait objects, in order.
    pub fn as_dyn(&self) -> Vec<&dyn Element> {
        element::elements(&self.elements)
    }

    /// Children as trait objects, in order.
    pub fn as_dyn_mut(&mut self) -> Vec<&mut dyn Element> {
        element::elements_mut(&mut self.elements)
    }

    /// Paint every child relative to `origin`.
    pub fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        for child in &self.elements {
            let offset = child.base().position().to_vec2();
            child.paint(painter, origin + offset);
        }
    }
}
