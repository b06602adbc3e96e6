use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, SchemeSwitchable};
use swatch_core::image::ImageHandle;
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::painter::Painter;
use swatch_theme::{style_record, Color, SchemeState, WidgetId};

use crate::palette::{dark_gray, light_gray};
use crate::styled::{styled, Styled};

style_record! {
    /// Colours of an [Image].
    pub struct ImageStyle {
        /// Optional outline.
        border,
        /// Overlay drawn over the picture; darkens it in the dark scheme.
        mask,
    }
}

impl ImageStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            border: light_gray(),
            mask: Color::from_rgba8(255, 255, 255, 0),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            border: dark_gray(),
            mask: Color::from_rgba8(1, 1, 1, 40),
        }
    }
}

/// A picture scaled to the element's size, with a scheme-dependent mask.
///
/// Unlike [Icon](crate::icon::Icon), an image fails to switch to a scheme it
/// has no record for.
pub struct Image {
    base: ElementBase,
    style: SchemeState<ImageStyle>,
    image: Option<ImageHandle>,
    paint_border: bool,
    paint_mask: bool,
    arc: f64,
}

impl Image {
    /// Show `image` scaled to `size`.
    pub fn new(context: &UiContext, size: Size, image: ImageHandle) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "Image"), ImageStyle::light(), ImageStyle::dark()),
            image: Some(image),
            paint_border: false,
            paint_mask: true,
            arc: 0.0,
        }
    }

    /// Replace the picture; `None` shows nothing.
    pub fn set_image(&mut self, image: Option<ImageHandle>) {
        self.image = image;
        self.base.request_repaint();
    }

    /// The picture.
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Draw an outline.
    pub fn set_paint_border(&mut self, paint_border: bool) {
        self.paint_border = paint_border;
        self.base.request_repaint();
    }

    /// Draw the mask overlay.
    pub fn set_paint_mask(&mut self, paint_mask: bool) {
        self.paint_mask = paint_mask;
        self.base.request_repaint();
    }

    /// Corner diameter of mask and outline.
    pub fn with_arc(mut self, arc: f64) -> Self {
        self.arc = arc;
        self
    }
}

impl Element for Image {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Image")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let Some(image) = &self.image else {
            return;
        };
        let style = self.style();
        let bounds = Rect::from_origin_size(origin, self.base.size());
        painter.draw_image(image, bounds);
        if self.paint_mask {
            painter.fill_rounded_rect(bounds, self.arc / 2.0, style.mask);
        }
        if self.paint_border {
            let edge = bounds.inset(-1.0);
            let outline = [
                Point::new(edge.x0, edge.y0),
                Point::new(edge.x1, edge.y0),
                Point::new(edge.x1, edge.y1),
                Point::new(edge.x0, edge.y1),
                Point::new(edge.x0, edge.y0),
            ];
            painter.stroke_polyline(&outline, 2.0, style.border);
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }
}

styled!(Image, ImageStyle);
