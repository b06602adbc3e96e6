use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::sizing::{AutoSize, Rounding, SizePolicy};
use swatch_core::text::Text;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{style_record, Color, SchemeId, SchemeState, ThemeResult, WidgetId};

use crate::icon::Icon;
use crate::label::paint_lines;
use crate::palette::{disabled_text, gray};
use crate::styled::{styled, Styled};

const PADDING: f64 = 8.0;
const ICON_GAP: f64 = 4.0;
const CORNER_RADIUS: f64 = 5.0;

style_record! {
    /// Colours of a [Button].
    pub struct ButtonStyle {
        /// Face colour.
        background,
        /// Face colour while disabled.
        disabled,
        /// Outline.
        border,
        /// Text colour.
        font,
        /// Face colour while held down.
        pressed,
    }
}

impl ButtonStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            disabled: gray(231),
            border: gray(226),
            font: Color::BLACK,
            pressed: gray(222),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            background: gray(83),
            disabled: gray(147),
            border: gray(104),
            font: gray(230),
            pressed: gray(137),
        }
    }
}

/// A push button with a localized caption and an optional leading icon.
///
/// Buttons size themselves to their caption with 8px of padding unless
/// given an explicit size with [Button::with_size].
///
/// ### Theming
/// - `background` - The face colour.
/// - `disabled` - The face colour while disabled.
/// - `border` - The outline colour.
/// - `font` - The caption colour.
/// - `pressed` - The face colour while pressed.
pub struct Button {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<ButtonStyle>,
    text: Text,
    auto: AutoSize,
    icon: Option<Icon>,
    fixed_size: Option<Size>,
    pressed: bool,
}

impl Button {
    /// Create a button with a caption.
    pub fn new(context: &UiContext, text: impl Into<Text>) -> Self {
        let policy = SizePolicy::padded(PADDING, ICON_GAP, Rounding::Floor);
        let mut button = Self {
            context: context.clone(),
            base: ElementBase::new(context.locale().clone()),
            style: SchemeState::new(Self::id(), ButtonStyle::light(), ButtonStyle::dark()),
            text: text.into(),
            auto: AutoSize::new(context.metrics().clone(), context.font().clone(), policy),
            icon: None,
            fixed_size: None,
            pressed: false,
        };
        button.refresh_text();
        button
    }

    fn id() -> WidgetId {
        WidgetId::new("swatch-widgets", "Button")
    }

    /// Show `icon` before the caption.
    pub fn with_icon(mut self, icon: Icon) -> ThemeResult<Self> {
        self.set_icon(Some(icon))?;
        Ok(self)
    }

    /// Pin the size; text changes no longer resize the button.
    pub fn with_size(mut self, size: Size) -> Self {
        self.set_fixed_size(Some(size));
        self
    }

    /// Pin the size, or hand sizing back to the caption with `None`.
    pub fn set_fixed_size(&mut self, size: Option<Size>) {
        self.fixed_size = size;
        self.sync_size();
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

    /// Replace the leading icon, synced to the button's scheme and locale.
    pub fn set_icon(&mut self, mut icon: Option<Icon>) -> ThemeResult<()> {
        if let Some(icon) = icon.as_mut() {
            propagate::sync_to(icon, self.style.active(), self.base.locale())?;
        }
        self.icon = icon;
        if self.auto.set_icon(self.icon.as_ref().map(Icon::size)) {
            self.sync_size();
        }
        Ok(())
    }

    /// Track the pointer holding the button down.
    pub fn set_pressed(&mut self, pressed: bool) {
        if pressed != self.pressed {
            self.pressed = pressed;
            self.base.request_repaint();
        }
    }

    /// Whether the button is held down.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn refresh_text(&mut self) {
        let display = self.context.resolve(&self.text, self.base.locale());
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }

    fn sync_size(&mut self) {
        let size = self.fixed_size.unwrap_or(self.auto.size());
        self.base.set_size(size);
    }

    fn face_color(&self) -> Color {
        let style = self.style();
        if self.pressed {
            style.pressed
        } else if !self.base.is_enabled() {
            style.disabled
        } else {
            style.background
        }
    }
}

impl Element for Button {
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
        let style = self.style();
        painter.fill_rounded_rect(bounds, CORNER_RADIUS, style.border);
        painter.fill_rounded_rect(bounds.inset(-1.0), CORNER_RADIUS, self.face_color());

        let font_color = if self.base.is_enabled() { style.font } else { disabled_text() };
        let x = match &self.icon {
            Some(icon) => {
                let side = (bounds.width().min(bounds.height()) - PADDING).max(0.0);
                let rect = Rect::from_origin_size((origin.x + 4.0, origin.y + 4.0), (side, side));
                icon.paint_into(painter, rect);
                origin.x + side + PADDING
            }
            None => {
                let text_width = self.auto.metrics().measure(self.auto.font(), self.auto.text()).width;
                origin.x + ((bounds.width() - text_width) / 2.0).max(0.0)
            }
        };
        paint_lines(painter, &self.auto, Point::new(x, origin.y), bounds.height(), font_color);
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

styled!(Button, ButtonStyle, custom_apply);

impl SchemeSwitchable for Button {
    fn apply_own_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()> {
        self.style.apply(scheme)?;
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

impl LocaleSwitchable for Button {
    fn apply_own_locale(&mut self, locale: &Locale) {
        let display = self.context.resolve(&self.text, locale);
        if self.auto.set_text(display) {
            self.sync_size();
        }
    }
}
