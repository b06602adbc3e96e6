use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::sizing::{self, WrappedLine};
use swatch_core::text::Text;
use swatch_theme::{SchemeState, WidgetId};

use crate::styled::{styled, Styled};
use crate::text_field::{paint_input_frame, EditBuffer, TextFieldStyle};

const INSET: f64 = 5.0;

/// Colours of a [TextArea]; the same slots as a text field.
pub type TextAreaStyle = TextFieldStyle;

/// A multi-line input that wraps its content to its width.
///
/// Wrapping uses the same character-wise breaking as wrapped labels.
pub struct TextArea {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<TextAreaStyle>,
    hint: Text,
    display_hint: String,
    buffer: EditBuffer,
    arc: f64,
}

impl TextArea {
    /// Create an empty area.
    pub fn new(context: &UiContext, size: Size) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "TextArea"),
                TextAreaStyle::light(),
                TextAreaStyle::dark(),
            ),
            hint: Text::default(),
            display_hint: String::new(),
            buffer: EditBuffer::default(),
            arc: 10.0,
        }
    }

    /// Show `hint` while the area is empty.
    pub fn with_hint(mut self, hint: impl Into<Text>) -> Self {
        self.hint = hint.into();
        self.display_hint = self.context.resolve(&self.hint, self.base.locale());
        self
    }

    /// Start with `value`.
    pub fn with_value(mut self, value: &str) -> Self {
        self.buffer.set(value);
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

    /// The content broken into display lines.
    pub fn lines(&self) -> Vec<&str> {
        self.wrapped()
            .into_iter()
            .filter_map(|line| self.buffer.value().get(line.range))
            .collect()
    }

    fn wrapped(&self) -> Vec<WrappedLine> {
        let width = self.base.size().width - 2.0 * INSET;
        sizing::wrap_lines(
            self.context.metrics().as_ref(),
            self.context.font(),
            self.buffer.value(),
            width,
        )
    }
}

impl Element for TextArea {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "TextArea")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let style = self.style();
        let bounds = Rect::from_origin_size(origin, self.base.size());
        paint_input_frame(painter, bounds, self.arc, style, self.base.is_enabled());

        let font = self.context.font();
        let start = Point::new(origin.x + INSET, origin.y + INSET);
        if self.buffer.value().is_empty() {
            if !self.display_hint.is_empty() {
                painter.draw_text(&self.display_hint, start, font, style.hint);
            }
            return;
        }
        let mut y = start.y;
        for line in self.wrapped() {
            if let Some(text) = self.buffer.value().get(line.range.clone()) {
                painter.draw_text(text, Point::new(start.x, y), font, style.font);
            }
            y += line.height;
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }
}

styled!(TextArea, TextAreaStyle);

impl LocaleSwitchable for TextArea {
    fn apply_own_locale(&mut self, locale: &Locale) {
        self.display_hint = self.context.resolve(&self.hint, locale);
    }
}
