use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect};
use swatch_core::locale::Locale;
use swatch_core::metrics::Font;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::sizing::{AutoSize, SizePolicy};
use swatch_core::text::Text;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{style_record, Color, SchemeId, SchemeState, ThemeResult, WidgetId};

use crate::icon::Icon;
use crate::palette::gray;
use crate::styled::{styled, Styled};

style_record! {
    /// Colours of a [Label].
    pub struct LabelStyle {
        /// Text colour.
        font,
    }
}

impl LabelStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self { font: Color::BLACK }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self { font: gray(230) }
    }
}

/// A localized line (or block) of text with an optional leading icon.
///
/// The label sizes itself to its text. With a wrap width set, the text is
/// broken into lines no wider than that width and the label grows downwards.
///
/// ### Theming
/// - `font` - The text colour.
pub struct Label {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<LabelStyle>,
    text: Text,
    auto: AutoSize,
    icon: Option<Icon>,
}

impl Label {
    /// Create a label showing `text` resolved for the context's locale.
    pub fn new(context: &UiContext, text: impl Into<Text>) -> Self {
        let auto = AutoSize::new(context.metrics().clone(), context.font().clone(), SizePolicy::TIGHT);
        let mut label = Self {
            context: context.clone(),
            base: ElementBase::new(context.locale().clone()),
            style: SchemeState::new(Self::id(), LabelStyle::light(), LabelStyle::dark()),
            text: text.into(),
            auto,
            icon: None,
        };
        label.refresh_text();
        label
    }

    fn id() -> WidgetId {
        WidgetId::new("swatch-widgets", "Label")
    }

    /// Wrap the text at `width`. `0` turns wrapping off.
    pub fn with_wrap_width(mut self, width: f64) -> Self {
        self.set_wrap_width(width);
        self
    }

    /// Show `icon` before the text.
    pub fn with_icon(mut self, icon: Icon) -> ThemeResult<Self> {
        self.set_icon(Some(icon))?;
        Ok(self)
    }

    /// Use `font` instead of the context's default.
    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Replace the text and resize.
    pub fn set_text(&mut self, text: impl Into<Text>) {
        self.text = text.into();
        self.refresh_text();
    }

    /// The unresolved text.
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// The text as currently displayed.
    pub fn display_text(&self) -> &str {
        self.auto.text()
    }

    /// Change the font and resize.
    pub fn set_font(&mut self, font: Font) {
        if self.auto.set_font(font) {
            self.sync_size();
        }
    }

    /// The font.
    pub fn font(&self) -> &Font {
        self.auto.font()
    }

    /// Change the wrap width and resize.
    pub fn set_wrap_width(&mut self, width: f64) {
        if self.auto.set_wrap_width(width) {
            self.sync_size();
        }
    }

    /// Replace the leading icon and resize.
    ///
    /// The icon is synced to the label's scheme first, so the label sizes
    /// itself for the image it will actually show.
    pub fn set_icon(&mut self, mut icon: Option<Icon>) -> ThemeResult<()> {
        if let Some(icon) = icon.as_mut() {
            propagate::sync_to(icon, self.style.active(), self.base.locale())?;
        }
        self.icon = icon;
        let size = self.icon.as_ref().map(Icon::size);
        if self.auto.set_icon(size) {
            self.sync_size();
        }
        Ok(())
    }

    /// The leading icon.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The displayed lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.auto.lines().iter().map(|line| self.auto.line_text(line)).collect()
    }

    fn refresh_text(&mut self) {
        let display = self.context.resolve(&self.text, self.base.locale());
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }

    fn sync_size(&mut self) {
        self.base.set_size(self.auto.size());
    }
}

/// Paint the lines of `auto` starting at `origin`, vertically centred in `height`.
pub(crate) fn paint_lines(painter: &mut dyn Painter, auto: &AutoSize, origin: Point, height: f64, color: Color) {
    let total = auto.lines().iter().map(|line| line.height).sum::<f64>();
    let mut y = origin.y + ((height - total) / 2.0).max(0.0);
    for line in auto.lines() {
        painter.draw_text(auto.line_text(line), Point::new(origin.x, y), auto.font(), color);
        y += line.height;
    }
}

/// Paint `icon` at the left edge of `rect`, vertically centred.
pub(crate) fn paint_leading_icon(painter: &mut dyn Painter, icon: &Icon, rect: Rect) -> f64 {
    let size = icon.size();
    let y = rect.y0 + ((rect.height() - size.height) / 2.0).max(0.0);
    icon.paint_into(painter, Rect::from_origin_size((rect.x0, y), size));
    size.width
}

impl Element for Label {
    fn widget_id(&self) -> WidgetId {
        Self::id()
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let bounds = Rect::from_origin_size(origin, self.base.size());
        let mut x = origin.x;
        if let Some(icon) = &self.icon {
            x += paint_leading_icon(painter, icon, bounds);
        }
        paint_lines(painter, &self.auto, Point::new(x, origin.y), bounds.height(), self.style().font);
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

styled!(Label, LabelStyle, custom_apply);

impl SchemeSwitchable for Label {
    fn apply_own_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()> {
        self.style.apply(scheme)?;
        // The icon is visited after us; size for the image it is about to show.
        let icon = self.icon.as_ref().map(|icon| icon.image_for(scheme).size());
        if self.auto.set_icon(icon) {
            self.sync_size();
        }
        Ok(())
    }

    fn active_scheme(&self) -> &SchemeId {
        self.style.active()
    }

    fn register_scheme_file(&mut self, file: &SchemeFile) -> ThemeResult<bool> {
        self.style.register_from(file)
    }
}

impl LocaleSwitchable for Label {
    fn apply_own_locale(&mut self, locale: &Locale) {
        let display = self.context.resolve(&self.text, locale);
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use swatch_core::catalog::MapCatalog;
    use swatch_core::image::ImageHandle;
    use swatch_core::kurbo::Size;
    use swatch_core::painter::RecordingPainter;

    use super::*;

    fn context() -> UiContext {
        let catalog = MapCatalog::new()
            .with_entry("en", "greeting", "Hi")
            .with_entry("de", "greeting", "Hallo");
        UiContext::headless()
            .with_catalog(Rc::new(catalog))
            .with_locale(Locale::new("en"))
            .with_font(Font::new("", 10.0))
    }

    #[test]
    fn sizes_to_resolved_text() {
        let label = Label::new(&context(), "greeting");
        assert_eq!(label.display_text(), "Hi");
        assert_eq!(label.base().size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn locale_switch_resizes() {
        let mut label = Label::new(&context(), "greeting");
        propagate::apply_locale(&mut label, &Locale::new("de"));
        assert_eq!(label.display_text(), "Hallo");
        assert_eq!(label.base().size().width, 25.0);
    }

    #[test]
    fn icon_adds_its_width() {
        let icon = Icon::new(&context(), ImageHandle::new("dot", 12, 12));
        let label = Label::new(&context(), "greeting").with_icon(icon).unwrap();
        assert_eq!(label.base().size(), Size::new(22.0, 12.0));
    }

    #[test]
    fn icon_set_after_switch_shows_active_scheme_image() {
        let mut label = Label::new(&context(), "greeting");
        propagate::apply_scheme(&mut label, &SchemeId::dark()).unwrap();
        let icon = Icon::new(&context(), ImageHandle::new("sun", 12, 12))
            .with_image(SchemeId::dark(), ImageHandle::new("moon", 20, 20));
        label.set_icon(Some(icon)).unwrap();

        assert_eq!(label.icon().map(|icon| icon.image().id()), Some("moon"));
        assert_eq!(label.base().size(), Size::new(30.0, 20.0));
    }

    #[test]
    fn wrapped_label_paints_every_line() {
        let label = Label::new(&context(), "abcdefgh").with_wrap_width(15.0);
        let mut painter = RecordingPainter::new();
        label.paint(&mut painter, Point::ZERO);
        assert_eq!(painter.texts(), vec!["abc", "def", "gh"]);
    }
}
