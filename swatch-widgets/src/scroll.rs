use swatch_core::context::UiContext;
use swatch_core::element::{BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size, Vec2};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_theme::{style_record, Color, SchemeState, ThemeResult, WidgetId};

use crate::container::Children;
use crate::palette::gray;
use crate::styled::{styled, Styled};

/// Thickness of a scroll bar.
pub const BAR_WIDTH: f64 = 15.0;
const INSET: f64 = 3.0;
const MIN_THUMB: f64 = 10.0;

style_record! {
    /// Colours of a [ScrollContainer].
    pub struct ScrollStyle {
        /// Scroll bar track.
        track,
        /// Scroll bar thumb.
        thumb,
        /// Fill behind the viewport.
        background,
    }
}

impl ScrollStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            track: gray(241),
            thumb: gray(154),
            background: Color::WHITE,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            track: gray(208),
            thumb: gray(154),
            background: gray(66),
        }
    }
}

/// A viewport onto content larger than itself, with scroll bars as needed.
///
/// Only the viewport's children take part in scheme and locale switching;
/// the bars are drawn from this element's own record.
pub struct ScrollContainer {
    base: ElementBase,
    style: SchemeState<ScrollStyle>,
    content: Children,
    content_extent: Size,
    offset: Vec2,
    horizontal_bar: bool,
    arc: f64,
}

impl ScrollContainer {
    /// Create an empty container.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "ScrollContainer"),
                ScrollStyle::light(),
                ScrollStyle::dark(),
            ),
            content: Children::new(),
            content_extent: Size::ZERO,
            offset: Vec2::ZERO,
            horizontal_bar: true,
            arc: 15.0,
        }
    }

    /// Put `content` in the viewport at its top-left corner.
    pub fn with_content(mut self, content: impl Element + 'static) -> ThemeResult<Self> {
        self.add(Box::new(content), 0.0, 0.0)?;
        Ok(self)
    }

    /// Never show a horizontal bar.
    pub fn without_horizontal_bar(mut self) -> Self {
        self.horizontal_bar = false;
        self
    }

    /// Attach `child` to the viewport in the container's scheme and locale.
    pub fn add(&mut self, child: BoxedElement, x: f64, y: f64) -> ThemeResult<&mut dyn Element> {
        self.base.request_repaint();
        let scheme = self.style.active().clone();
        self.content.attach(child, Point::new(x, y), &scheme, self.base.locale())
    }

    /// The viewport's children.
    pub fn content(&self) -> &Children {
        &self.content
    }

    /// Reserve room for content the owner draws itself.
    pub fn set_content_extent(&mut self, extent: Size) {
        self.content_extent = extent;
        self.scroll_to(self.offset.to_point());
    }

    /// Size of everything scrollable.
    pub fn content_size(&self) -> Size {
        let mut size = self.content_extent;
        for child in self.content.as_dyn() {
            let bounds = child.base().bounds();
            size.width = size.width.max(bounds.x1);
            size.height = size.height.max(bounds.y1);
        }
        size
    }

    /// Visible part of the content, relative to the container.
    pub fn viewport(&self) -> Rect {
        let size = self.base.size();
        let content = self.content_size();
        let inner = Size::new(size.width - 2.0 * INSET, size.height - 2.0 * INSET);
        let vertical = content.height > inner.height;
        let horizontal = self.horizontal_bar && content.width > inner.width - if vertical { BAR_WIDTH } else { 0.0 };
        let width = inner.width - if vertical { BAR_WIDTH } else { 0.0 };
        let height = inner.height - if horizontal { BAR_WIDTH } else { 0.0 };
        Rect::from_origin_size((INSET, INSET), (width.max(0.0), height.max(0.0)))
    }

    /// Current scroll position.
    pub fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    /// Scroll so `position` of the content is at the viewport's top-left, clamped.
    pub fn scroll_to(&mut self, position: Point) {
        let viewport = self.viewport();
        let content = self.content_size();
        let max_x = (content.width - viewport.width()).max(0.0);
        let max_y = (content.height - viewport.height()).max(0.0);
        let offset = Vec2::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y));
        if offset != self.offset {
            self.offset = offset;
            self.base.request_repaint();
        }
    }

    /// Scroll by `delta`, clamped.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll_to((self.offset + delta).to_point());
    }

    fn paint_bars(&self, painter: &mut dyn Painter, origin: Point, viewport: Rect) {
        let style = self.style();
        let content = self.content_size();
        let offset = origin.to_vec2();

        if content.height > viewport.height() {
            let track = Rect::new(viewport.x1, viewport.y0, viewport.x1 + BAR_WIDTH, viewport.y1) + offset;
            painter.fill_rounded_rect(track, 5.0, style.track);
            let length = (viewport.height() / content.height * track.height()).max(MIN_THUMB);
            let travel = track.height() - length;
            let start = track.y0 + travel * self.offset.y / (content.height - viewport.height());
            let thumb = Rect::new(track.x0 + 1.0, start + 1.0, track.x1 - 1.0, start + length - 1.0);
            painter.fill_rounded_rect(thumb, 5.0, style.thumb);
        }
        if self.horizontal_bar && content.width > viewport.width() {
            let track = Rect::new(viewport.x0, viewport.y1, viewport.x1, viewport.y1 + BAR_WIDTH) + offset;
            painter.fill_rounded_rect(track, 5.0, style.track);
            let length = (viewport.width() / content.width * track.width()).max(MIN_THUMB);
            let travel = track.width() - length;
            let start = track.x0 + travel * self.offset.x / (content.width - viewport.width());
            let thumb = Rect::new(start + 1.0, track.y0 + 1.0, start + length - 1.0, track.y1 - 1.0);
            painter.fill_rounded_rect(thumb, 5.0, style.thumb);
        }
    }
}

impl Element for ScrollContainer {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "ScrollContainer")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let bounds = Rect::from_origin_size(origin, self.base.size());
        painter.fill_rounded_rect(bounds, self.arc / 2.0, self.style().background);
        let viewport = self.viewport();
        self.content.paint(painter, origin + viewport.origin().to_vec2() - self.offset);
        self.paint_bars(painter, origin, viewport);
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.content.as_dyn_mut()
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.content.as_dyn()
    }
}

styled!(ScrollContainer, ScrollStyle);

impl LocaleSwitchable for ScrollContainer {
    fn apply_own_locale(&mut self, _locale: &Locale) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;

    #[test]
    fn scrolling_is_clamped_to_content() {
        let context = UiContext::headless();
        let mut scroll = ScrollContainer::new(&context, Size::new(106.0, 106.0))
            .without_horizontal_bar()
            .with_content(Panel::new(&context, Size::new(50.0, 300.0)))
            .unwrap();
        assert_eq!(scroll.viewport(), Rect::new(3.0, 3.0, 88.0, 103.0));
        scroll.scroll_by(Vec2::new(0.0, 500.0));
        assert_eq!(scroll.scroll_offset(), Vec2::new(0.0, 200.0));
        scroll.scroll_to(Point::new(-5.0, -5.0));
        assert_eq!(scroll.scroll_offset(), Vec2::ZERO);
    }

    #[test]
    fn no_bars_when_content_fits() {
        let context = UiContext::headless();
        let scroll = ScrollContainer::new(&context, Size::new(106.0, 106.0))
            .with_content(Panel::new(&context, Size::new(50.0, 50.0)))
            .unwrap();
        assert_eq!(scroll.viewport(), Rect::new(3.0, 3.0, 103.0, 103.0));
    }
}
