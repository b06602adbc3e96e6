use swatch_core::context::UiContext;
use swatch_core::element::{BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::text::Text;
use swatch_theme::{style_record, SchemeState, ThemeResult, WidgetId};

use crate::container::Children;
use crate::palette::gray;
use crate::styled::{styled, Styled};

style_record! {
    /// Colours of a [Panel].
    pub struct PanelStyle {
        /// Fill.
        background,
        /// One pixel outline.
        border,
    }
}

impl PanelStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            background: gray(234),
            border: gray(222),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            background: gray(24),
            border: gray(69),
        }
    }
}

/// A rounded container with absolutely positioned children.
///
/// Children added through [Panel::add] take over the panel's current
/// scheme and locale before they are attached.
///
/// ### Theming
/// - `background` - The fill.
/// - `border` - The outline.
pub struct Panel {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<PanelStyle>,
    title: Text,
    display_title: String,
    arc: f64,
    paint_background: bool,
    children: Children,
}

impl Panel {
    /// Create an empty panel of the given size.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "Panel"),
                PanelStyle::light(),
                PanelStyle::dark(),
            ),
            title: Text::default(),
            display_title: String::new(),
            arc: 15.0,
            paint_background: true,
            children: Children::new(),
        }
    }

    /// Name the panel. The title is not drawn but follows the locale.
    pub fn with_title(mut self, title: impl Into<Text>) -> Self {
        self.set_title(title);
        self
    }

    /// Rename the panel.
    pub fn set_title(&mut self, title: impl Into<Text>) {
        self.title = title.into();
        self.display_title = self.context.resolve(&self.title, self.base.locale());
    }

    /// The title as currently resolved.
    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    /// Corner diameter of the fill.
    pub fn with_arc(mut self, arc: f64) -> Self {
        self.arc = arc;
        self
    }

    /// Turn background painting on or off; children are painted either way.
    pub fn set_paint_background(&mut self, paint_background: bool) {
        self.paint_background = paint_background;
        self.base.request_repaint();
    }

    /// Attach `child` at (`x`, `y`) in the panel's scheme and locale.
    pub fn add(&mut self, child: impl Element + 'static, x: f64, y: f64) -> ThemeResult<&mut dyn Element> {
        self.add_boxed(Box::new(child), x, y)
    }

    /// Boxed form of [Panel::add].
    pub fn add_boxed(&mut self, child: BoxedElement, x: f64, y: f64) -> ThemeResult<&mut dyn Element> {
        self.base.request_repaint();
        let scheme = self.style.active().clone();
        self.children
            .attach(child, Point::new(x, y), &scheme, self.base.locale())
    }

    /// The attached children.
    pub fn elements(&self) -> &Children {
        &self.children
    }

    /// The attached children.
    pub fn elements_mut(&mut self) -> &mut Children {
        &mut self.children
    }
}

impl Element for Panel {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Panel")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        if self.paint_background {
            let bounds = Rect::from_origin_size(origin, self.base.size());
            let style = self.style();
            painter.fill_rounded_rect(bounds, 7.5, style.border);
            painter.fill_rounded_rect(bounds.inset(-1.0), self.arc / 2.0, style.background);
        }
        self.children.paint(painter, origin);
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.children.as_dyn_mut()
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.children.as_dyn()
    }
}

styled!(Panel, PanelStyle);

impl LocaleSwitchable for Panel {
    fn apply_own_locale(&mut self, locale: &Locale) {
        self.display_title = self.context.resolve(&self.title, locale);
    }
}

#[cfg(test)]
mod tests {
    use swatch_core::painter::{PaintOp, RecordingPainter};
    use swatch_core::propagate;
    use swatch_theme::SchemeId;

    use super::*;
    use crate::label::Label;

    #[test]
    fn children_follow_panel_scheme() {
        let context = UiContext::headless();
        let mut panel = Panel::new(&context, Size::new(200.0, 100.0));
        panel.add(Label::new(&context, "a"), 10.0, 10.0).unwrap();
        propagate::apply_scheme(&mut panel, &SchemeId::dark()).unwrap();

        let child = panel.elements().get(0).unwrap();
        assert_eq!(child.base().position(), Point::new(10.0, 10.0));
        let mut painter = RecordingPainter::new();
        panel.paint(&mut painter, Point::ZERO);
        assert!(matches!(
            painter.ops()[1],
            PaintOp::RoundedRect { color, .. } if color == PanelStyle::dark().background
        ));
    }

    #[test]
    fn hidden_background_still_paints_children() {
        let context = UiContext::headless();
        let mut panel = Panel::new(&context, Size::new(200.0, 100.0));
        panel.add(Label::new(&context, "a"), 0.0, 0.0).unwrap();
        panel.set_paint_background(false);
        let mut painter = RecordingPainter::new();
        panel.paint(&mut painter, Point::new(5.0, 5.0));
        assert_eq!(painter.ops().len(), 1);
        assert_eq!(painter.texts(), vec!["a"]);
    }
}
