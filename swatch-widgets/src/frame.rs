use swatch_core::config::Config;
use swatch_core::context::UiContext;
use swatch_core::element::{BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_core::text::Text;
use swatch_theme::scheme_file::SchemeFile;
use swatch_theme::{style_record, SchemeId, SchemeState, ThemeResult, WidgetId};

use crate::container::Children;
use crate::palette::gray;
use crate::styled::{styled, Styled};

style_record! {
    /// Colours of a [Frame].
    pub struct FrameStyle {
        /// Window content fill.
        background,
    }
}

impl FrameStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self { background: gray(240) }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self { background: gray(19) }
    }
}

/// The content of a top-level window and the usual root of a switch.
///
/// The window itself belongs to the host; the frame only owns its title and
/// the element tree painted into it.
pub struct Frame {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<FrameStyle>,
    title: Text,
    display_title: String,
    content: Children,
    scheme_files: Vec<SchemeFile>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new(context: &UiContext, size: Size, title: impl Into<Text>) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        let title = title.into();
        let display_title = context.resolve(&title, base.locale());
        Self {
            context: context.clone(),
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "Frame"),
                FrameStyle::light(),
                FrameStyle::dark(),
            ),
            title,
            display_title,
            content: Children::new(),
            scheme_files: Vec::new(),
        }
    }

    /// Window title as currently resolved, for the host to show.
    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    /// Retitle the window.
    pub fn set_title(&mut self, title: impl Into<Text>) {
        self.title = title.into();
        self.display_title = self.context.resolve(&self.title, self.base.locale());
    }

    /// Attach `child` at (`x`, `y`) in the frame's scheme and locale.
    pub fn add(&mut self, child: impl Element + 'static, x: f64, y: f64) -> ThemeResult<&mut dyn Element> {
        self.add_boxed(Box::new(child), x, y)
    }

    /// Boxed form of [Frame::add].
    ///
    /// Scheme files added to the frame are registered on `child` first.
    pub fn add_boxed(&mut self, mut child: BoxedElement, x: f64, y: f64) -> ThemeResult<&mut dyn Element> {
        for file in &self.scheme_files {
            propagate::register_scheme_file(child.as_mut(), file)?;
        }
        self.base.request_repaint();
        let scheme = self.style.active().clone();
        self.content.attach(child, Point::new(x, y), &scheme, self.base.locale())
    }

    /// The attached elements.
    pub fn content(&self) -> &Children {
        &self.content
    }

    /// The attached elements.
    pub fn content_mut(&mut self) -> &mut Children {
        &mut self.content
    }

    /// Switch the whole window to `scheme`.
    ///
    /// Stops at the first element without a record for `scheme`.
    pub fn switch_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()> {
        propagate::apply_scheme(self, scheme)
    }

    /// Switch the whole window to `locale`.
    pub fn switch_locale(&mut self, locale: &Locale) {
        propagate::apply_locale(self, locale);
    }

    /// Register the records of `file` on the whole window.
    ///
    /// The file is kept, so elements added later can take its scheme too.
    /// Returns how many elements took a record.
    pub fn add_scheme_file(&mut self, file: SchemeFile) -> ThemeResult<usize> {
        let registered = propagate::register_scheme_file(self, &file)?;
        self.scheme_files.push(file);
        Ok(registered)
    }

    /// Load the configured scheme files, then apply the scheme and locale
    /// `config` asks for.
    pub fn apply_config(&mut self, config: &Config) -> ThemeResult<()> {
        for file in config.theme.load_scheme_files()? {
            self.add_scheme_file(file)?;
        }
        self.switch_scheme(&config.theme.default_scheme)?;
        self.switch_locale(&config.locale);
        Ok(())
    }
}

impl Element for Frame {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Frame")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        painter.fill_rect(Rect::from_origin_size(origin, self.base.size()), self.style().background);
        self.content.paint(painter, origin);
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

styled!(Frame, FrameStyle);

impl LocaleSwitchable for Frame {
    fn apply_own_locale(&mut self, locale: &Locale) {
        self.display_title = self.context.resolve(&self.title, locale);
    }
}
