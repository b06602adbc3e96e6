use swatch_core::context::UiContext;
use swatch_core::element::{BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, ThemeResult, WidgetId};

use crate::container::Children;
use crate::icon::Icon;
use crate::palette::{dark_gray, gray, light_gray};
use crate::styled::{styled, Styled};

/// Size of one tab header.
pub const TAB_SIZE: Size = Size::new(100.0, 30.0);
const BORDER_INSET: f64 = 5.0;
const TAB_AREA_TOP: f64 = 5.0;
const TAB_AREA_LEFT: f64 = 10.0;
const CONTENT_INSET: f64 = 5.0;

style_record! {
    /// Colours of a [TabbedPane].
    pub struct TabStyle {
        /// Content area and selected tab.
        main,
        /// Outline of content area and selected tab.
        border,
        /// Unselected tabs.
        sub,
        /// Title of the selected tab.
        main_font,
        /// Titles of unselected tabs.
        sub_font,
    }
}

impl TabStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            main: gray(248),
            border: light_gray(),
            sub: light_gray(),
            main_font: Color::BLACK,
            sub_font: dark_gray(),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            main: gray(54),
            border: Color::BLACK,
            sub: Color::BLACK,
            main_font: Color::WHITE,
            sub_font: light_gray(),
        }
    }
}

struct TabHeader {
    title: Text,
    display_title: String,
    icon: Option<Icon>,
}

/// A stack of pages with a row of titled tabs on top; one page shows at a time.
///
/// Propagation visits the pages and the tab icons. The header strip itself
/// is chrome and has no children.
pub struct TabbedPane {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TabStyle>,
    headers: Vec<TabHeader>,
    pages: Children,
    selected: usize,
    arc: f64,
}

impl TabbedPane {
    /// Create a pane without tabs.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "TabbedPane"),
                TabStyle::light(),
                TabStyle::dark(),
            ),
            headers: Vec::new(),
            pages: Children::new(),
            selected: 0,
            arc: 15.0,
        }
    }

    /// Append a tab showing `page`, synced to the pane's scheme and locale first.
    pub fn add_tab(&mut self, title: impl Into<Text>, page: impl Element + 'static) -> ThemeResult<()> {
        self.add_tab_with_icon(title, Box::new(page), None)
    }

    /// Append a tab with an icon before its title.
    pub fn add_tab_with_icon(
        &mut self,
        title: impl Into<Text>,
        page: BoxedElement,
        mut icon: Option<Icon>,
    ) -> ThemeResult<()> {
        let scheme = self.style.active().clone();
        let locale = self.base.locale().clone();
        if let Some(icon) = icon.as_mut() {
            propagate::sync_to(icon, &scheme, &locale)?;
        }
        let position = self.content_bounds().origin() + (CONTENT_INSET, CONTENT_INSET);
        self.pages.attach(page, position, &scheme, &locale)?;

        let title = title.into();
        self.headers.push(TabHeader {
            display_title: self.context.resolve(&title, &locale),
            title,
            icon,
        });
        self.base.request_repaint();
        Ok(())
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.headers.len()
    }

    /// Resolved title of tab `index`.
    pub fn title_at(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(|header| header.display_title.as_str())
    }

    /// The page of tab `index`.
    pub fn page_at(&self, index: usize) -> Option<&dyn Element> {
        self.pages.get(index)
    }

    /// Index of the shown tab.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Show tab `index`. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.headers.len() && index != self.selected {
            self.selected = index;
            self.base.request_repaint();
        }
    }

    /// Corner diameter.
    pub fn with_arc(mut self, arc: f64) -> Self {
        self.arc = arc;
        self
    }

    fn tab_bounds(&self, index: usize) -> Rect {
        let x = BORDER_INSET + TAB_AREA_LEFT + index as f64 * TAB_SIZE.width;
        Rect::from_origin_size((x, BORDER_INSET + TAB_AREA_TOP), TAB_SIZE)
    }

    /// Content area relative to the pane.
    fn content_bounds(&self) -> Rect {
        let top = BORDER_INSET + TAB_AREA_TOP + TAB_SIZE.height;
        let size = self.base.size();
        Rect::new(BORDER_INSET, top, size.width - BORDER_INSET, size.height - BORDER_INSET)
    }

    fn paint_header(&self, painter: &mut dyn Painter, index: usize, rect: Rect) {
        let style = self.style();
        let radius = self.arc / 2.0;
        let selected = index == self.selected;
        let mut top = 0.0;
        if selected {
            painter.fill_rounded_rect(Rect::new(rect.x0 + 1.0, rect.y0, rect.x1 - 1.0, rect.y1), radius, style.border);
            painter.fill_rounded_rect(
                Rect::new(rect.x0 + 2.0, rect.y0 + 1.0, rect.x1 - 2.0, rect.y1 - 1.0),
                radius,
                style.main,
            );
        } else {
            painter.fill_rounded_rect(Rect::new(rect.x0 + 1.0, rect.y0 + 3.0, rect.x1 - 2.0, rect.y1), radius, style.sub);
            top = 3.0;
        }

        let header = &self.headers[index];
        let mut left = 10.0;
        if let Some(icon) = &header.icon {
            let side = rect.height() - 12.0;
            icon.paint_into(
                painter,
                Rect::from_origin_size((rect.x0 + 6.0, rect.y0 + 6.0 + top), (side, side)),
            );
            left += side + 2.0;
        }

        let font = self.context.font();
        let text_height = self.context.metrics().measure(font, &header.display_title).height;
        let color = if selected { style.main_font } else { style.sub_font };
        let origin = Point::new(rect.x0 + left, rect.y0 + top + (rect.height() - text_height) / 2.0);
        painter.draw_text(&header.display_title, origin, font, color);
    }
}

impl Element for TabbedPane {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "TabbedPane")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let offset = origin.to_vec2();
        let style = self.style();
        let content = self.content_bounds() + offset;
        painter.fill_rounded_rect(content, self.arc / 2.0, style.border);
        painter.fill_rounded_rect(content.inset(-1.0), self.arc / 2.0, style.main);

        for index in 0..self.headers.len() {
            self.paint_header(painter, index, self.tab_bounds(index) + offset);
        }
        if let Some(page) = self.pages.get(self.selected) {
            page.paint(painter, origin + page.base().position().to_vec2());
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.pages.as_dyn_mut()
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        self.headers
            .iter_mut()
            .filter_map(|header| header.icon.as_mut())
            .map(|icon| icon as &mut dyn Element)
            .collect()
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.pages.as_dyn()
    }
}

styled!(TabbedPane, TabStyle);

impl LocaleSwitchable for TabbedPane {
    fn apply_own_locale(&mut self, locale: &Locale) {
        for header in &mut self.headers {
            header.display_title = self.context.resolve(&header.title, locale);
        }
    }
}

#[cfg(test)]
mod tests {
    use swatch_core::painter::RecordingPainter;

    use super::*;
    use crate::label::Label;

    #[test]
    fn only_selected_page_is_painted() {
        let context = UiContext::headless();
        let mut tabs = TabbedPane::new(&context, Size::new(400.0, 300.0));
        tabs.add_tab("One", Label::new(&context, "first")).unwrap();
        tabs.add_tab("Two", Label::new(&context, "second")).unwrap();
        tabs.select(1);

        let mut painter = RecordingPainter::new();
        tabs.paint(&mut painter, Point::ZERO);
        assert_eq!(painter.texts(), vec!["One", "Two", "second"]);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let context = UiContext::headless();
        let mut tabs = TabbedPane::new(&context, Size::new(400.0, 300.0));
        tabs.add_tab("One", Label::new(&context, "first")).unwrap();
        tabs.select(3);
        assert_eq!(tabs.selected(), 0);
    }

    #[test]
    fn pages_sit_inside_content_area() {
        let context = UiContext::headless();
        let mut tabs = TabbedPane::new(&context, Size::new(400.0, 300.0));
        tabs.add_tab("One", Label::new(&context, "first")).unwrap();
        assert_eq!(tabs.page_at(0).unwrap().base().position(), Point::new(10.0, 45.0));
    }
}
