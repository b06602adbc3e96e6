use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, SchemeSwitchable};
use swatch_core::image::ImageHandle;
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::painter::Painter;
use swatch_theme::{SchemeId, SchemeState, ThemeResult, WidgetId};

/// An image that can change with the scheme.
///
/// Icons are decorative: switching to a scheme without a registered image
/// keeps the image currently shown instead of failing.
pub struct Icon {
    base: ElementBase,
    images: SchemeState<ImageHandle>,
}

impl Icon {
    /// Create an icon showing `image` in the `Light` scheme and any scheme without an override.
    pub fn new(context: &UiContext, image: ImageHandle) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(image.size());
        Self {
            base,
            images: SchemeState::light_only(WidgetId::new("swatch-widgets", "Icon"), image),
        }
    }

    /// Use `image` while `scheme` is active.
    pub fn register_image(&mut self, scheme: SchemeId, image: ImageHandle) {
        self.images.register(scheme, image);
    }

    /// Builder form of [Icon::register_image].
    pub fn with_image(mut self, scheme: SchemeId, image: ImageHandle) -> Self {
        self.register_image(scheme, image);
        self
    }

    /// The image shown now.
    pub fn image(&self) -> &ImageHandle {
        self.images.current()
    }

    /// The image that would be shown after switching to `scheme`.
    pub fn image_for(&self, scheme: &SchemeId) -> &ImageHandle {
        self.images.record(scheme).unwrap_or(self.images.current())
    }

    /// Display size.
    pub fn size(&self) -> Size {
        self.base.size()
    }

    /// Paint the image scaled into `rect`.
    pub fn paint_into(&self, painter: &mut dyn Painter, rect: Rect) {
        painter.draw_image(self.image(), rect);
    }
}

impl Element for Icon {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Icon")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        self.paint_into(painter, Rect::from_origin_size(origin, self.base.size()));
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }
}

impl SchemeSwitchable for Icon {
    fn apply_own_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()> {
        if self.images.apply_soft(scheme) {
            self.base.set_size(self.images.current().size());
        } else {
            log::debug!("Icon has no image for scheme '{}', keeping '{}'", scheme, self.image().id());
        }
        Ok(())
    }

    fn active_scheme(&self) -> &SchemeId {
        self.images.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_for_previews_without_switching() {
        let context = UiContext::headless();
        let icon = Icon::new(&context, ImageHandle::new("sun", 16, 16))
            .with_image(SchemeId::dark(), ImageHandle::new("moon", 16, 16));
        assert_eq!(icon.image_for(&SchemeId::dark()).id(), "moon");
        assert_eq!(icon.image_for(&SchemeId::new("Sepia")).id(), "sun");
        assert_eq!(icon.image().id(), "sun");
    }
}
