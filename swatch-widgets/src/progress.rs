use std::f64::consts::{FRAC_PI_2, TAU};

use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::painter::Painter;
use swatch_theme::{style_record, SchemeState, WidgetId};

use crate::palette::{gray, rgb};
use crate::styled::{styled, Styled};

const RING_WIDTH: f64 = 4.0;
const RING_SEGMENTS: usize = 64;

style_record! {
    /// Colours of a [Progress] bar.
    pub struct ProgressStyle {
        /// Outline of the line shape.
        border,
        /// Unfilled part.
        background,
        /// Filled part.
        fill,
    }
}

impl ProgressStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            border: gray(222),
            background: gray(231),
            fill: rgb(29, 139, 236),
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            border: gray(75),
            background: gray(59),
            fill: rgb(32, 134, 226),
        }
    }
}

/// How a [Progress] is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressShape {
    /// A horizontal bar filling from the left.
    #[default]
    Line,
    /// A ring filling clockwise from the top. Works best in a square.
    Round,
}

/// A progress indicator over a floating point range, `0..=100` by default.
pub struct Progress {
    base: ElementBase,
    style: SchemeState<ProgressStyle>,
    shape: ProgressShape,
    min: f64,
    max: f64,
    value: f64,
    arc: f64,
}

impl Progress {
    /// Create an empty indicator.
    pub fn new(context: &UiContext, size: Size, shape: ProgressShape) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        Self {
            base,
            style: SchemeState::new(
                WidgetId::new("swatch-widgets", "Progress"),
                ProgressStyle::light(),
                ProgressStyle::dark(),
            ),
            shape,
            min: 0.0,
            max: 100.0,
            value: 0.0,
            arc: 5.0,
        }
    }

    /// Change the range; the value is clamped into it.
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min.min(max);
        self.max = max.max(min);
        self.set_value(self.value);
    }

    /// Set the value, clamped to the range.
    pub fn set_value(&mut self, value: f64) {
        let value = value.clamp(self.min, self.max);
        if value != self.value {
            self.value = value;
            self.base.request_repaint();
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Filled share of the range, in `0..=1`.
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.value - self.min) / span
    }

    fn ring(center: Point, radius: f64, sweep: f64) -> Vec<Point> {
        let steps = ((RING_SEGMENTS as f64 * sweep).ceil() as usize).max(1);
        (0..=steps)
            .map(|step| {
                let angle = -FRAC_PI_2 + TAU * sweep * step as f64 / steps as f64;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect()
    }
}

impl Element for Progress {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Progress")
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
        match self.shape {
            ProgressShape::Line => {
                let bounds = Rect::from_origin_size(origin, size);
                painter.fill_rounded_rect(bounds, self.arc / 2.0, style.border);
                painter.fill_rounded_rect(bounds.inset(-1.0), self.arc / 2.0, style.background);
                let filled = (size.width * self.fraction()).floor();
                if filled > 0.0 {
                    let bar = Rect::from_origin_size(origin, (filled, size.height));
                    painter.fill_rounded_rect(bar, self.arc / 2.0, style.fill);
                }
            }
            ProgressShape::Round => {
                let diameter = (size.width.min(size.height) - 2.0 * RING_WIDTH).max(0.0);
                let center = Point::new(origin.x + RING_WIDTH + diameter / 2.0, origin.y + RING_WIDTH + diameter / 2.0);
                let radius = diameter / 2.0;
                painter.stroke_polyline(&Self::ring(center, radius, 1.0), RING_WIDTH, style.background);
                let fraction = self.fraction();
                if fraction > 0.0 {
                    painter.stroke_polyline(&Self::ring(center, radius, fraction), RING_WIDTH, style.fill);
                }
            }
        }
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }
}

styled!(Progress, ProgressStyle);

#[cfg(test)]
mod tests {
    use swatch_core::painter::{PaintOp, RecordingPainter};

    use super::*;

    #[test]
    fn value_is_clamped_to_range() {
        let mut progress = Progress::new(&UiContext::headless(), Size::new(100.0, 8.0), ProgressShape::Line);
        progress.set_value(140.0);
        assert_eq!(progress.value(), 100.0);
        progress.set_range(0.0, 50.0);
        assert_eq!(progress.value(), 50.0);
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn line_fill_tracks_fraction() {
        let mut progress = Progress::new(&UiContext::headless(), Size::new(200.0, 8.0), ProgressShape::Line);
        progress.set_value(25.0);
        let mut painter = RecordingPainter::new();
        progress.paint(&mut painter, Point::ZERO);
        assert!(matches!(
            painter.ops()[2],
            PaintOp::RoundedRect { rect, .. } if rect.width() == 50.0
        ));
    }

    #[test]
    fn empty_ring_draws_only_track() {
        let progress = Progress::new(&UiContext::headless(), Size::new(40.0, 40.0), ProgressShape::Round);
        let mut painter = RecordingPainter::new();
        progress.paint(&mut painter, Point::ZERO);
        assert_eq!(painter.ops().len(), 1);
    }
}
