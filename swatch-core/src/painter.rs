//! Render backend abstraction.
//!
//! Elements describe what to draw through [Painter]; the backend decides how.
//! Coordinates are absolute: containers pass each child its own origin.

use vello::kurbo::{Point, Rect};
use vello::peniko::Color;

use crate::image::ImageHandle;
use crate::metrics::Font;

/// A trait for issuing primitive draw calls.
pub trait Painter {
    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Draw a string with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);

    /// Draw an image scaled into `rect`.
    fn draw_image(&mut self, image: &ImageHandle, rect: Rect);

    /// Stroke connected line segments.
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// See [Painter::fill_rounded_rect].
    RoundedRect {
        /// Area.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill.
        color: Color,
    },
    /// See [Painter::fill_rect].
    Rect {
        /// Area.
        rect: Rect,
        /// Fill.
        color: Color,
    },
    /// See [Painter::fill_ellipse].
    Ellipse {
        /// Bounding box.
        rect: Rect,
        /// Fill.
        color: Color,
    },
    /// See [Painter::draw_text].
    Text {
        /// The string.
        text: String,
        /// Top-left corner.
        origin: Point,
        /// Colour.
        color: Color,
    },
    /// See [Painter::draw_image].
    Image {
        /// Backend id of the image.
        id: String,
        /// Destination.
        rect: Rect,
    },
    /// See [Painter::stroke_polyline].
    Polyline {
        /// Vertices.
        points: Vec<Point>,
        /// Colour.
        color: Color,
    },
}

/// A [Painter] that records every call, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Recorded strings, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Painter for RecordingPainter {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.ops.push(PaintOp::RoundedRect { rect, radius, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::Rect { rect, color });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.ops.push(PaintOp::Ellipse { rect, color });
    }

    fn draw_text(&mut self, text: &str, origin: Point, _font: &Font, color: Color) {
        self.ops.push(PaintOp::Text {
            text: text.to_owned(),
            origin,
            color,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect) {
        self.ops.push(PaintOp::Image {
            id: image.id().to_owned(),
            rect,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], _width: f64, color: Color) {
        self.ops.push(PaintOp::Polyline {
            points: points.to_vec(),
            color,
        });
    }
}
