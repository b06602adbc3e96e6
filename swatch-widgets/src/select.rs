use swatch_core::context::UiContext;
use swatch_core::element::{BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, ThemeResult, WidgetId};

use crate::palette::{dark_gray, gray, light_gray, mid_gray, rgb};
use crate::scroll::ScrollContainer;
use crate::styled::{styled, Styled};

const MAX_POPUP_HEIGHT: f64 = 200.0;
const TEXT_ROW_PADDING: f64 = 6.0;

style_record! {
    /// Colours of a [Select].
    pub struct SelectStyle {
        /// Fill of the box and the popup list.
        background,
        /// Outline.
        border,
        /// Item text.
        font,
        /// Highlight of the hovered item.
        select,
        /// Drop-down arrow.
        arrow,
    }
}

impl SelectStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            border: gray(193),
            font: Color::BLACK,
            select: rgb(45, 151, 231),
            arrow: mid_gray(),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            background: gray(90),
            border: dark_gray(),
            font: Color::WHITE,
            select: rgb(36, 125, 193),
            arrow: Color::WHITE,
        }
    }
}

/// One choice of a [Select].
pub enum SelectItem {
    /// A localized string.
    Text(Text),
    /// An element drawn in place of text.
    Element(BoxedElement),
}

impl From<Text> for SelectItem {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SelectItem {
    fn from(key: &str) -> Self {
        Self::Text(Text::new(key))
    }
}

/// A drop-down choice between text or element items.
///
/// The popup is a [ScrollContainer] owned by the select; it and every
/// element item switch together with the select.
pub struct Select {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<SelectStyle>,
    items: Vec<SelectItem>,
    selected: Option<usize>,
    highlighted: Option<usize>,
    popup: ScrollContainer,
    popup_open: bool,
    arc: f64,
}

impl Select {
    /// Create a select without items.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "Select"), SelectStyle::light(), SelectStyle::dark()),
            items: Vec::new(),
            selected: None,
            highlighted: None,
            popup: ScrollContainer::new(context, Size::new(size.width, 0.0)).without_horizontal_bar(),
            popup_open: false,
            arc: 10.0,
        }
    }

    /// Append `item`; element items are synced to the select's scheme and locale first.
    pub fn add_item(&mut self, item: impl Into<SelectItem>) -> ThemeResult<()> {
        let mut item = item.into();
        if let SelectItem::Element(element) = &mut item {
            let scheme = self.style.active().clone();
            propagate::sync_to(element.as_mut(), &scheme, self.base.locale())?;
        }
        self.items.push(item);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.resize_popup();
        self.base.request_repaint();
        Ok(())
    }

    /// Builder form of [Select::add_item].
    pub fn with_item(mut self, item: impl Into<SelectItem>) -> ThemeResult<Self> {
        self.add_item(item)?;
        Ok(self)
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Index of the chosen item.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Choose item `index` and close the popup.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
            self.close_popup();
            self.base.request_repaint();
        }
    }

    /// Resolved text of the chosen item, if it is a text item.
    pub fn selected_text(&self) -> Option<String> {
        match self.items.get(self.selected?)? {
            SelectItem::Text(text) => Some(self.context.resolve(text, self.base.locale())),
            SelectItem::Element(_) => None,
        }
    }

    /// Show the item list below the box.
    pub fn open_popup(&mut self) {
        if self.base.is_enabled() && !self.popup_open {
            self.popup_open = true;
            self.highlighted = self.selected;
            self.base.request_repaint();
        }
    }

    /// Hide the item list.
    pub fn close_popup(&mut self) {
        if self.popup_open {
            self.popup_open = false;
            self.base.request_repaint();
        }
    }

    /// Whether the item list is shown.
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Highlight the item under the pointer.
    pub fn set_highlighted(&mut self, index: Option<usize>) {
        self.highlighted = index.filter(|index| *index < self.items.len());
        self.base.request_repaint();
    }

    /// The popup container.
    pub fn popup(&self) -> &ScrollContainer {
        &self.popup
    }

    /// The popup container, for registering its schemes.
    pub fn popup_mut(&mut self) -> &mut ScrollContainer {
        &mut self.popup
    }

    fn item_height(&self, item: &SelectItem) -> f64 {
        match item {
            SelectItem::Text(text) => {
                let display = self.context.resolve(text, self.base.locale());
                self.context.metrics().measure(self.context.font(), &display).height.floor() + TEXT_ROW_PADDING
            }
            SelectItem::Element(element) => element.base().size().height,
        }
    }

    fn resize_popup(&mut self) {
        let total: f64 = self.items.iter().map(|item| self.item_height(item)).sum();
        let width = self.base.size().width;
        self.popup
            .base_mut()
            .set_size(Size::new(width, (total + 6.0).min(MAX_POPUP_HEIGHT)));
        self.popup.set_content_extent(Size::new(width, total));
    }

    fn paint_text(&self, painter: &mut dyn Painter, text: &Text, x: f64, row: Rect, color: Color) {
        let display = self.context.resolve(text, self.base.locale());
        let font = self.context.font();
        let height = self.context.metrics().measure(font, &display).height;
        painter.draw_text(&display, Point::new(x, row.y0 + (row.height() - height) / 2.0), font, color);
    }

    fn paint_popup(&self, painter: &mut dyn Painter, origin: Point) {
        let style = self.style();
        let popup_origin = Point::new(origin.x, origin.y + self.base.size().height);
        let popup_size = self.popup.base().size();
        painter.fill_rect(Rect::from_origin_size(popup_origin, popup_size), light_gray());
        self.popup.paint(painter, popup_origin);

        let viewport = self.popup.viewport() + popup_origin.to_vec2();
        let mut top = viewport.y0 - self.popup.scroll_offset().y;
        painter.fill_rect(viewport, style.background);
        for (index, item) in self.items.iter().enumerate() {
            let height = self.item_height(item);
            let row = Rect::new(viewport.x0, top, viewport.x1, top + height);
            top += height;
            if row.y1 < viewport.y0 || row.y0 > viewport.y1 {
                continue;
            }
            let highlighted = self.highlighted == Some(index);
            if highlighted {
                painter.fill_rounded_rect(row, self.arc / 2.0, style.select);
            }
            let color = if highlighted { Color::WHITE } else { style.font };
            match item {
                SelectItem::Text(text) => self.paint_text(painter, text, row.x0 + 20.0, row, color),
                SelectItem::Element(element) => element.paint(painter, Point::new(row.x0 + 10.0, row.y0)),
            }
            if self.selected == Some(index) {
                let mark = [(5.0, 10.0), (8.0, 14.0), (14.0, 7.0)].map(|(x, y)| Point::new(row.x0 + x, row.y0 + y));
                painter.stroke_polyline(&mark, 2.0, color);
            }
        }
    }
}

impl Element for Select {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Select")
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
        let bounds = Rect::from_origin_size(origin, size);
        let enabled = self.base.is_enabled();
        painter.fill_rounded_rect(bounds, self.arc / 2.0, style.border);
        let fill = if enabled { style.background } else { gray(217) };
        painter.fill_rounded_rect(bounds.inset(-1.0), self.arc / 2.0, fill);

        let color = if enabled { style.font } else { mid_gray() };
        match self.selected.and_then(|index| self.items.get(index)) {
            Some(SelectItem::Text(text)) => self.paint_text(painter, text, origin.x + 5.0, bounds, color),
            Some(SelectItem::Element(element)) => element.paint(painter, Point::new(origin.x + 10.0, origin.y)),
            None => {}
        }

        let arrow_x = bounds.x1 - 16.0;
        let arrow_y = origin.y + (size.height - 5.0) / 2.0;
        let arrow = [(3.0, 0.0), (13.0, 0.0), (8.0, 5.0), (3.0, 0.0)].map(|(x, y)| Point::new(arrow_x + x, arrow_y + y));
        painter.stroke_polyline(&arrow, 1.0, style.arrow);

        if self.popup_open {
            self.paint_popup(painter, origin);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        let mut auxiliary: Vec<&mut dyn Element> = self
            .items
            .iter_mut()
            .filter_map(|item| match item {
                SelectItem::Element(element) => Some(element.as_mut() as &mut dyn Element),
                SelectItem::Text(_) => None,
            })
            .collect();
        auxiliary.push(&mut self.popup);
        auxiliary
    }
}

styled!(Select, SelectStyle);

impl LocaleSwitchable for Select {
    fn apply_own_locale(&mut self, locale: &Locale) {
        // Item heights are measured against the base locale.
        self.base.set_locale(locale.clone());
        self.resize_popup();
    }
}
