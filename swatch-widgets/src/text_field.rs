use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::text::Text;
use swatch_theme::{style_record, Color, SchemeState, ThemeResult, WidgetId};

use crate::icon::Icon;
use crate::palette::{gray, light_gray, mid_gray};
use crate::styled::{styled, Styled};

style_record! {
    /// Colours of a [TextField] or [TextArea](crate::text_area::TextArea).
    pub struct TextFieldStyle {
        /// Typed text.
        font,
        /// Fill.
        background,
        /// Outline.
        border,
        /// Placeholder text.
        hint,
        /// Fill while disabled.
        disabled,
    }
}

impl TextFieldStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            font: Color::BLACK,
            background: Color::WHITE,
            border: light_gray(),
            hint: light_gray(),
            disabled: gray(219),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            font: Color::WHITE,
            background: gray(42),
            border: mid_gray(),
            hint: mid_gray(),
            disabled: gray(118),
        }
    }
}

/// Typed content with an optional character limit.
#[derive(Debug, Clone, Default)]
pub(crate) struct EditBuffer {
    value: String,
    max_length: usize,
}

impl EditBuffer {
    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// Replace the content, cut to the limit.
    pub(crate) fn set(&mut self, value: &str) {
        self.value = self.truncated(value);
    }

    /// `0` means unlimited.
    pub(crate) fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
        self.value = self.truncated(&self.value);
    }

    /// Append typed text; rejected as a whole when it would exceed the limit.
    pub(crate) fn insert(&mut self, typed: &str) -> bool {
        if self.max_length > 0 && self.value.chars().count() + typed.chars().count() > self.max_length {
            return false;
        }
        self.value.push_str(typed);
        true
    }

    pub(crate) fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    fn truncated(&self, value: &str) -> String {
        match self.max_length {
            0 => value.to_string(),
            max => value.chars().take(max).collect(),
        }
    }
}

/// Paint the rounded frame shared by text inputs.
pub(crate) fn paint_input_frame(painter: &mut dyn Painter, bounds: Rect, arc: f64, style: &TextFieldStyle, enabled: bool) {
    painter.fill_rounded_rect(bounds, arc / 2.0, style.border);
    let fill = if enabled { style.background } else { style.disabled };
    painter.fill_rounded_rect(bounds.inset(-1.0), arc / 2.0, fill);
}

/// A single-line input with a localized placeholder and an optional leading icon.
///
/// ### Theming
/// - `font` - Typed text.
/// - `background` - The fill.
/// - `border` - The outline.
/// - `hint` - The placeholder.
/// - `disabled` - The fill while disabled.
pub struct TextField {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TextFieldStyle>,
    hint: Text,
    display_hint: String,
    buffer: EditBuffer,
    icon: Option<Icon>,
    arc: f64,
}

impl TextField {
    /// Create an empty field.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "TextField"),
                TextFieldStyle::light(),
                TextFieldStyle::dark(),
            ),
            hint: Text::default(),
            display_hint: String::new(),
            buffer: EditBuffer::default(),
            icon: None,
            arc: 10.0,
        }
    }

    /// Show `hint` while the field is empty.
    pub fn with_hint(mut self, hint: impl Into<Text>) -> Self {
        self.hint = hint.into();
        self.display_hint = self.context.resolve(&self.hint, self.base.locale());
        self
    }

    /// Show `icon` at the left edge, synced to the field's scheme.
    pub fn with_icon(mut self, mut icon: Icon) -> ThemeResult<Self> {
        propagate::sync_to(&mut icon, self.style.active(), self.base.locale())?;
        self.icon = Some(icon);
        Ok(self)
    }

    /// Start with `value`.
    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Limit the content to `max_length` characters; `0` means unlimited.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.buffer.set_max_length(max_length);
        self
    }

    /// The typed content.
    pub fn value(&self) -> &str {
        self.buffer.value()
    }

    /// Replace the content, cut to the limit.
    pub fn set_value(&mut self, value: &str) {
        self.buffer.set(value);
        self.base.request_repaint();
    }

    /// Type `text` at the end. Returns `false` if the limit rejects it.
    pub fn type_str(&mut self, text: &str) -> bool {
        let accepted = self.base.is_enabled() && self.buffer.insert(text);
        if accepted {
            self.base.request_repaint();
        }
        accepted
    }

    /// Delete the last character.
    pub fn backspace(&mut self) {
        if self.buffer.backspace() {
            self.base.request_repaint();
        }
    }

    /// The placeholder as currently resolved.
    pub fn display_hint(&self) -> &str {
        &self.display_hint
    }

    /// Where text starts, relative to the field.
    fn text_offset(&self) -> f64 {
        match self.icon {
            Some(_) => self.base.size().height - 8.0 + 10.0,
            None => 7.0,
        }
    }
}

impl Element for TextField {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "TextField")
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
        paint_input_frame(painter, bounds, self.arc, style, self.base.is_enabled());

        if let Some(icon) = &self.icon {
            let side = (size.height - 8.0).max(0.0);
            let y = origin.y + (size.height - side) / 2.0;
            icon.paint_into(painter, Rect::from_origin_size((origin.x + 4.0, y), (side, side)));
        }

        let (text, color) = if self.buffer.value().is_empty() {
            (self.display_hint.as_str(), style.hint)
        } else {
            (self.buffer.value(), style.font)
        };
        if text.is_empty() {
            return;
        }
        let font = self.context.font();
        let height = self.context.metrics().measure(font, text).height;
        let at = Point::new(origin.x + self.text_offset(), origin.y + (size.height - height) / 2.0);
        painter.draw_text(text, at, font, color);
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        self.icon.iter_mut().map(|icon| icon as &mut dyn Element).collect()
    }
}

styled!(TextField, TextFieldStyle);

impl LocaleSwitchable for TextField {
    fn apply_own_locale(&mut self, locale: &Locale) {
        self.display_hint = self.context.resolve(&self.hint, locale);
    }
}

#[cfg(test)]
mod tests {
    use swatch_core::image::ImageHandle;
    use swatch_core::painter::{PaintOp, RecordingPainter};

    use super::*;

    #[test]
    fn limit_rejects_overflowing_input() {
        let mut field = TextField::new(&UiContext::headless(), Size::new(120.0, 30.0)).with_max_length(3);
        assert!(field.type_str("ab"));
        assert!(!field.type_str("cd"));
        assert!(field.type_str("c"));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn initial_value_is_cut_to_limit() {
        let field = TextField::new(&UiContext::headless(), Size::new(120.0, 30.0))
            .with_max_length(2)
            .with_value("hello");
        assert_eq!(field.value(), "he");
    }

    #[test]
    fn hint_shows_only_while_empty() {
        let mut field = TextField::new(&UiContext::headless(), Size::new(120.0, 30.0)).with_hint("Search");
        let mut painter = RecordingPainter::new();
        field.paint(&mut painter, Point::ZERO);
        assert_eq!(painter.texts(), vec!["Search"]);

        field.type_str("x");
        painter.clear();
        field.paint(&mut painter, Point::ZERO);
        assert_eq!(painter.texts(), vec!["x"]);
    }

    #[test]
    fn icon_pushes_hint_right() {
        let context = UiContext::headless();
        let field = TextField::new(&context, Size::new(120.0, 30.0))
            .with_hint("Search")
            .with_icon(Icon::new(&context, ImageHandle::new("glass", 16, 16)))
            .unwrap();
        let mut painter = RecordingPainter::new();
        field.paint(&mut painter, Point::ZERO);
        let origin = painter.ops().iter().find_map(|op| match op {
            PaintOp::Text { origin, .. } => Some(*origin),
            _ => None,
        });
        assert_eq!(origin.map(|origin| origin.x), Some(32.0));
    }
}
