use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, WidgetId};

use crate::palette::{dark_gray, light_gray, rgb};
use crate::styled::{styled, Styled};

const CELL_PADDING: f64 = 4.0;

style_record! {
    /// Colours of a [Table].
    pub struct TableStyle {
        /// Highlight of the selected row.
        select,
        /// Text of the selected row.
        select_font,
        /// Cell separators.
        grid,
        /// Cell text.
        font,
        /// Fill.
        background,
        /// Rule below the header.
        title,
    }
}

impl TableStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            select: rgb(76, 152, 250),
            select_font: Color::WHITE,
            grid: light_gray(),
            font: Color::BLACK,
            background: Color::WHITE,
            title: Color::WHITE,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            select: rgb(56, 127, 215),
            select_font: Color::WHITE,
            grid: light_gray(),
            font: Color::WHITE,
            background: Color::BLACK,
            title: dark_gray(),
        }
    }
}

style_record! {
    /// Colours of a [TableHeader].
    pub struct TableHeaderStyle {
        /// Fill.
        background,
        /// Column titles.
        font,
    }
}

impl TableHeaderStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            font: Color::BLACK,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            background: dark_gray(),
            font: Color::WHITE,
        }
    }
}

/// The row of column titles above a [Table].
///
/// Owned by the table and switched along with it.
pub struct TableHeader {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TableHeaderStyle>,
    titles: Vec<Text>,
    display: Vec<String>,
}

impl TableHeader {
    fn new(context: &UiContext) -> Self {
        Self {
            context: context.clone(),
            base: ElementBase::new(context.locale().clone()),
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "TableHeader"),
                TableHeaderStyle::light(),
                TableHeaderStyle::dark(),
            ),
            titles: Vec::new(),
            display: Vec::new(),
        }
    }

    fn set_titles(&mut self, titles: Vec<Text>) {
        self.titles = titles;
        let locale = self.base.locale().clone();
        self.resolve(&locale);
    }

    fn resolve(&mut self, locale: &Locale) {
        self.display = self
            .titles
            .iter()
            .map(|title| self.context.resolve(title, locale))
            .collect();
        self.base.request_repaint();
    }

    /// Resolved column titles.
    pub fn titles(&self) -> &[String] {
        &self.display
    }
}

impl Element for TableHeader {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "TableHeader")
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
        painter.fill_rect(Rect::from_origin_size(origin, size), style.background);
        if self.display.is_empty() {
            return;
        }
        let column_width = size.width / self.display.len() as f64;
        for (index, title) in self.display.iter().enumerate() {
            let x = origin.x + index as f64 * column_width + CELL_PADDING;
            painter.draw_text(title, Point::new(x, origin.y + CELL_PADDING / 2.0), self.context.font(), style.font);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }
}

styled!(TableHeader, TableHeaderStyle);

impl LocaleSwitchable for TableHeader {
    fn apply_own_locale(&mut self, locale: &Locale) {
        self.resolve(locale);
    }
}

/// A grid of localized cells under a header of column titles.
pub struct Table {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TableStyle>,
    header: TableHeader,
    rows: Vec<Vec<Text>>,
    selected: Option<usize>,
    editable: bool,
}

impl Table {
    /// Create an empty table.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        let mut table = Self {
            context: context.clone(),
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "Table"), TableStyle::light(), TableStyle::dark()),
            header: TableHeader::new(context),
            rows: Vec::new(),
            selected: None,
            editable: false,
        };
        let row_height = table.row_height();
        table.header.base_mut().set_size(Size::new(size.width, row_height));
        table
    }

    /// Replace all rows and the column titles.
    pub fn set_data(&mut self, rows: Vec<Vec<Text>>, columns: Vec<Text>) {
        self.rows = rows;
        self.selected = None;
        self.header.set_titles(columns);
        self.base.request_repaint();
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolved text of a cell.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        let cell = self.rows.get(row)?.get(column)?;
        Some(self.context.resolve(cell, self.base.locale()))
    }

    /// Allow or forbid editing cells.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Whether cells can be edited.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Highlight `row`, or nothing.
    pub fn select_row(&mut self, row: Option<usize>) {
        self.selected = row.filter(|row| *row < self.rows.len());
        self.base.request_repaint();
    }

    /// The header.
    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    /// The header, for registering its schemes.
    pub fn header_mut(&mut self) -> &mut TableHeader {
        &mut self.header
    }

    fn row_height(&self) -> f64 {
        self.context.metrics().measure(self.context.font(), "Ag").height + CELL_PADDING
    }
}

impl Element for Table {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Table")
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
        painter.fill_rect(Rect::from_origin_size(origin, size), style.background);
        self.header.paint(painter, origin);

        let row_height = self.row_height();
        let top = origin.y + self.header.base().size().height;
        painter.fill_rect(Rect::new(origin.x, top - 1.0, origin.x + size.width, top), style.title);

        let columns = self.header.titles().len().max(1);
        let column_width = size.width / columns as f64;
        for (index, row) in self.rows.iter().enumerate() {
            let y = top + index as f64 * row_height;
            let selected = self.selected == Some(index);
            if selected {
                painter.fill_rect(Rect::new(origin.x, y, origin.x + size.width, y + row_height), style.select);
            }
            let color = if selected { style.select_font } else { style.font };
            for (column, cell) in row.iter().enumerate() {
                let x = origin.x + column as f64 * column_width;
                let text = self.context.resolve(cell, self.base.locale());
                painter.draw_text(&text, Point::new(x + CELL_PADDING, y + CELL_PADDING / 2.0), self.context.font(), color);
            }
            painter.fill_rect(
                Rect::new(origin.x, y + row_height - 1.0, origin.x + size.width, y + row_height),
                style.grid,
            );
        }
        for column in 1..columns {
            let x = origin.x + column as f64 * column_width;
            painter.fill_rect(Rect::new(x, top, x + 1.0, origin.y + size.height), style.grid);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        vec![&mut self.header as &mut dyn Element]
    }
}

styled!(Table, TableStyle);

impl LocaleSwitchable for Table {
    fn apply_own_locale(&mut self, _locale: &Locale) {}
}
