use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::sizing::{AutoSize, Rounding, SizePolicy};
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, WidgetId};

use crate::label::paint_lines;
use crate::palette::{disabled_text, gray, rgb};
use crate::styled::{styled, Styled};

/// Default side length of the box.
pub const DEFAULT_BOX_SIZE: f64 = 17.0;

style_record! {
    /// Colours of a [Checkbox].
    pub struct CheckboxStyle {
        /// Box fill while checked.
        selected,
        /// Box fill while unchecked.
        background,
        /// Text colour.
        font,
        /// Check mark or dot.
        center,
        /// Box fill while disabled.
        disabled,
        /// Outline.
        border,
    }
}

impl CheckboxStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            selected: rgb(43, 137, 213),
            background: Color::WHITE,
            font: Color::BLACK,
            center: Color::WHITE,
            disabled: gray(220),
            border: gray(220),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            selected: rgb(37, 119, 186),
            background: gray(75),
            font: Color::WHITE,
            center: Color::WHITE,
            disabled: gray(220),
            border: gray(220),
        }
    }
}

/// Outline of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckShape {
    /// A rounded square with a check mark. The default.
    #[default]
    Rectangle,
    /// A circle with a dot, as used for radio groups.
    Round,
}

/// A box that can be checked, followed by a localized caption.
///
/// The element is as tall as the box and as wide as box plus caption.
pub struct Checkbox {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<CheckboxStyle>,
    text: Text,
    auto: AutoSize,
    box_size: f64,
    shape: CheckShape,
    checked: bool,
}

impl Checkbox {
    /// Create an unchecked box with a caption.
    pub fn new(context: &UiContext, text: impl Into<Text>) -> Self {
        let policy = SizePolicy {
            rounding: Rounding::Floor,
            ..SizePolicy::TIGHT
        };
        let mut checkbox = Self {
            context: context.clone(),
            base: ElementBase::new(context.locale().clone()),
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "Checkbox"),
                CheckboxStyle::light(),
                CheckboxStyle::dark(),
            ),
            text: text.into(),
            auto: AutoSize::new(context.metrics().clone(), context.font().clone(), policy),
            box_size: DEFAULT_BOX_SIZE,
            shape: CheckShape::default(),
            checked: false,
        };
        checkbox.refresh_text();
        checkbox.sync_size();
        checkbox
    }

    /// Use a box with side length `size`.
    pub fn with_box_size(mut self, size: f64) -> Self {
        self.box_size = size;
        self.sync_size();
        self
    }

    /// Use `shape` for the box.
    pub fn with_shape(mut self, shape: CheckShape) -> Self {
        self.shape = shape;
        self
    }

    /// Start checked.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Whether the box is checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Check or uncheck the box.
    pub fn set_checked(&mut self, checked: bool) {
        if checked != self.checked {
            self.checked = checked;
            self.base.request_repaint();
        }
    }

    /// Flip the checked state, unless disabled.
    pub fn toggle(&mut self) {
        if self.base.is_enabled() {
            self.set_checked(!self.checked);
        }
    }

    /// Replace the caption.
    pub fn set_text(&mut self, text: impl Into<Text>) {
        self.text = text.into();
        self.refresh_text();
    }

    /// The caption as currently displayed.
    pub fn display_text(&self) -> &str {
        self.auto.text()
    }

    fn refresh_text(&mut self) {
        let display = self.context.resolve(&self.text, self.base.locale());
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }

    fn sync_size(&mut self) {
        let width = self.box_size + self.auto.size().width + 1.0;
        self.base.set_size(Size::new(width, self.box_size));
    }

    fn paint_box(&self, painter: &mut dyn Painter, rect: Rect) {
        let style = self.style();
        let fill = if !self.base.is_enabled() {
            style.disabled
        } else if self.checked {
            style.selected
        } else {
            style.background
        };
        let inner = rect.inset(-1.0);
        match self.shape {
            CheckShape::Round => {
                painter.fill_ellipse(rect, style.border);
                painter.fill_ellipse(inner, fill);
                if self.checked {
                    painter.fill_ellipse(rect.inset(-rect.width() / 3.0), style.center);
                }
            }
            CheckShape::Rectangle => {
                painter.fill_rounded_rect(rect, 3.0, style.border);
                painter.fill_rounded_rect(inner, 3.0, fill);
                if self.checked {
                    // Drawn on a 17px grid.
                    let scale = rect.width() / DEFAULT_BOX_SIZE;
                    let mark = [(4.0, 8.0), (7.0, 12.0), (13.0, 5.0)]
                        .map(|(x, y)| Point::new(rect.x0 + x * scale, rect.y0 + y * scale));
                    painter.stroke_polyline(&mark, 2.0 * scale, style.center);
                }
            }
        }
    }
}

impl Element for Checkbox {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Checkbox")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let side = self.box_size;
        self.paint_box(painter, Rect::from_origin_size(origin, (side, side)));
        let color = if self.base.is_enabled() { self.style().font } else { disabled_text() };
        paint_lines(painter, &self.auto, Point::new(origin.x + side + 1.0, origin.y), side, color);
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }
}

styled!(Checkbox, CheckboxStyle);

impl LocaleSwitchable for Checkbox {
    fn apply_own_locale(&mut self, locale: &Locale) {
        let display = self.context.resolve(&self.text, locale);
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }
}

#[cfg(test)]
mod tests {
    use swatch_core::metrics::Font;
    use swatch_core::painter::{PaintOp, RecordingPainter};

    use super::*;

    fn context() -> UiContext {
        UiContext::headless().with_font(Font::new("", 10.0))
    }

    #[test]
    fn width_is_box_plus_caption() {
        let checkbox = Checkbox::new(&context(), "Wifi");
        assert_eq!(checkbox.base().size(), Size::new(17.0 + 20.0 + 1.0, 17.0));
    }

    #[test]
    fn disabled_box_ignores_toggle() {
        let mut checkbox = Checkbox::new(&context(), "Wifi");
        checkbox.base_mut().set_enabled(false);
        checkbox.toggle();
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn checked_rectangle_draws_mark() {
        let checkbox = Checkbox::new(&context(), "Wifi").with_checked(true);
        let mut painter = RecordingPainter::new();
        checkbox.paint(&mut painter, Point::ZERO);
        assert!(painter
            .ops()
            .iter()
            .any(|op| matches!(op, PaintOp::Polyline { points, .. } if points.len() == 3)));
    }
}
