use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, WidgetId};

use crate::palette::{gray, rgb};
use crate::styled::{styled, Styled};

const INSET: f64 = 5.0;
const TEXT_X: f64 = 10.0;

style_record! {
    /// Colours of a [List].
    pub struct ListStyle {
        /// Highlight of the selected row.
        selected,
        /// Text of the selected row.
        selected_font,
        /// Fill.
        background,
        /// Row text.
        font,
    }
}

impl ListStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            selected: rgb(42, 137, 215),
            selected_font: Color::WHITE,
            background: Color::WHITE,
            font: Color::BLACK,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            selected: rgb(32, 108, 170),
            selected_font: Color::WHITE,
            background: gray(54),
            font: Color::WHITE,
        }
    }
}

/// A vertical list of localized rows with a single selection.
pub struct List {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<ListStyle>,
    items: Vec<Text>,
    selected: Option<usize>,
    paint_background: bool,
    arc: f64,
}

impl List {
    /// Create a list of `items`.
    pub fn new(context: &UiContext, size: Size, items: Vec<Text>) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "List"), ListStyle::light(), ListStyle::dark()),
            items,
            selected: None,
            paint_background: true,
            arc: 10.0,
        }
    }

    /// Append a row.
    pub fn push(&mut self, item: impl Into<Text>) {
        self.items.push(item.into());
        self.base.request_repaint();
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolved text of row `index`.
    pub fn item_text(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|item| self.context.resolve(item, self.base.locale()))
    }

    /// Select row `index`, or nothing. Out of range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|index| *index < self.items.len());
        self.base.request_repaint();
    }

    /// The selected row.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Turn background painting on or off.
    pub fn set_paint_background(&mut self, paint_background: bool) {
        self.paint_background = paint_background;
        self.base.request_repaint();
    }

    /// Height of a row: text height plus 4.
    pub fn row_height(&self) -> f64 {
        self.context.metrics().measure(self.context.font(), "Ag").height + 4.0
    }

    /// Row under `y`, relative to the list.
    pub fn row_at(&self, y: f64) -> Option<usize> {
        if y < INSET {
            return None;
        }
        let row = ((y - INSET) / self.row_height()) as usize;
        (row < self.items.len()).then_some(row)
    }
}

impl Element for List {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "List")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let style = self.style();
        let size = self.base.size();
        let radius = self.arc / 2.0;
        if self.paint_background {
            painter.fill_rounded_rect(Rect::from_origin_size(origin, size), radius, style.background);
        }

        let font = self.context.font();
        let row_height = self.row_height();
        for (index, item) in self.items.iter().enumerate() {
            let top = origin.y + INSET + index as f64 * row_height;
            let row = Rect::new(origin.x + INSET, top, origin.x + size.width - INSET, top + row_height);
            let color = if self.selected == Some(index) {
                painter.fill_rounded_rect(row, radius, style.selected);
                style.selected_font
            } else {
                style.font
            };
            let text = self.context.resolve(item, self.base.locale());
            let text_height = self.context.metrics().measure(font, &text).height;
            let at = Point::new(row.x0 + TEXT_X, top + (row_height - text_height) / 2.0);
            painter.draw_text(&text, at, font, color);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }
}

styled!(List, ListStyle);

impl LocaleSwitchable for List {
    fn apply_own_locale(&mut self, _locale: &Locale) {}
}
