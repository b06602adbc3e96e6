use indexmap::IndexMap;
use swatch_core::context::UiContext;
use swatch_core::element::{Element, ElementBase, LocaleSwitchable, SchemeSwitchable};
use swatch_core::kurbo::{Point, Rect, Size};
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate;
use swatch_theme::{style_record, Color, SchemeState, ThemeResult, WidgetId};

use crate::label::Label;
use crate::palette::{gray, light_gray};
use crate::styled::{styled, Styled};

const THUMB: f64 = 17.0;
const TRACK_OFFSET: f64 = 6.0;
const LABEL_OFFSET: f64 = 18.0;

style_record! {
    /// Colours of a [Slider].
    pub struct SliderStyle {
        /// Track outline, ticks and thumb outline.
        border,
        /// Track and thumb fill.
        background,
        /// Default tick label colour.
        font,
    }
}

impl SliderStyle {
    /// The built-in `Light` record.
    pub fn light() -> Self {
        Self {
            border: light_gray(),
            background: Color::WHITE,
            font: Color::BLACK,
        }
    }

    /// The built-in `Dark` record.
    pub fn dark() -> Self {
        Self {
            border: gray(111),
            background: gray(61),
            font: Color::WHITE,
        }
    }
}

/// Direction of a [Slider].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Minimum on the left.
    #[default]
    Horizontal,
    /// Minimum at the top.
    Vertical,
}

/// A thumb moving along a track between `min` and `max`, with major ticks
/// every `step` and a label per tick.
///
/// Tick labels are ordinary [Label]s keyed by value; they switch scheme and
/// locale together with the slider.
pub struct Slider {
    context: UiContext,
    base: ElementBase,
    style: SchemeState<SliderStyle>,
    orientation: Orientation,
    min: i32,
    max: i32,
    value: i32,
    step: i32,
    labels: IndexMap<i32, Label>,
}

impl Slider {
    /// Create a slider with a label for every major tick.
    pub fn new(context: &UiContext, orientation: Orientation, size: Size, min: i32, max: i32, value: i32, step: i32) -> Self {
        let mut base = ElementBase::new(context.locale().clone());
        base.set_size(size);
        let mut slider = Self {
            context: context.clone(),
            base,
            style: SchemeState::new(WidgetId::new("swatch-widgets", "Slider"), SliderStyle::light(), SliderStyle::dark()),
            orientation,
            min: min.min(max),
            max: max.max(min),
            value: 0,
            step,
            labels: IndexMap::new(),
        };
        slider.value = slider.clamp(value);
        slider.labels = slider.standard_labels(slider.min, slider.max, step);
        slider
    }

    fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// One label per major tick, in the context's default scheme and locale.
    fn standard_labels(&self, min: i32, max: i32, step: i32) -> IndexMap<i32, Label> {
        let mut labels = IndexMap::new();
        if step <= 0 {
            return labels;
        }
        let mut value = min;
        while value <= max {
            labels.insert(value, Label::new(&self.context, value.to_string()));
            match value.checked_add(step) {
                Some(next) => value = next,
                None => break,
            }
        }
        labels
    }

    /// Change range, value and tick spacing.
    ///
    /// Standard labels are regenerated and synced to the slider's scheme and
    /// locale. The slider is left unchanged if a label cannot take the scheme.
    pub fn set_tick(&mut self, min: i32, max: i32, value: i32, step: i32) -> ThemeResult<()> {
        let (min, max) = (min.min(max), max.max(min));
        let mut labels = self.standard_labels(min, max, step);
        let scheme = self.style.active().clone();
        for label in labels.values_mut() {
            propagate::sync_to(label, &scheme, self.base.locale())?;
        }
        self.min = min;
        self.max = max;
        self.step = step;
        self.value = self.clamp(value);
        self.labels = labels;
        self.base.request_repaint();
        Ok(())
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Move the thumb, clamped to the range.
    pub fn set_value(&mut self, value: i32) {
        let value = self.clamp(value);
        if value != self.value {
            self.value = value;
            self.base.request_repaint();
        }
    }

    /// Replace the label at tick `value`, synced to the slider's scheme and locale.
    pub fn set_label(&mut self, value: i32, mut label: Label) -> ThemeResult<()> {
        let scheme = self.style.active().clone();
        propagate::sync_to(&mut label, &scheme, self.base.locale())?;
        self.labels.insert(value, label);
        self.base.request_repaint();
        Ok(())
    }

    /// Tick labels keyed by value.
    pub fn labels(&self) -> &IndexMap<i32, Label> {
        &self.labels
    }

    fn track_length(&self) -> f64 {
        let size = self.base.size();
        let extent = match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        };
        (extent - THUMB).max(0.0)
    }

    /// Offset of `value` along the track from the track start.
    fn offset_of(&self, value: i32) -> f64 {
        let span = self.max as f64 - self.min as f64;
        if span <= 0.0 {
            return 0.0;
        }
        let fraction = (value as f64 - self.min as f64) / span;
        match self.orientation {
            Orientation::Horizontal => fraction * self.track_length(),
            Orientation::Vertical => (1.0 - fraction) * self.track_length(),
        }
    }

    /// Map an along-track position (from the track start) back to the nearest value.
    pub fn value_at(&self, offset: f64) -> i32 {
        let length = self.track_length();
        if length <= 0.0 {
            return self.min;
        }
        let mut fraction = (offset / length).clamp(0.0, 1.0);
        if self.orientation == Orientation::Vertical {
            fraction = 1.0 - fraction;
        }
        let span = self.max as f64 - self.min as f64;
        self.min + (fraction * span).round() as i32
    }

    /// Point on the track for `value`, relative to the slider.
    fn track_point(&self, value: i32) -> Point {
        let along = THUMB / 2.0 + self.offset_of(value);
        match self.orientation {
            Orientation::Horizontal => Point::new(along, 0.0),
            Orientation::Vertical => Point::new(0.0, along),
        }
    }
}

impl Element for Slider {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("swatch-widgets", "Slider")
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, painter: &mut dyn Painter, origin: Point) {
        let style = self.style();
        let length = self.track_length();
        let offset = origin.to_vec2();
        let (track, inner) = match self.orientation {
            Orientation::Horizontal => (
                Rect::new(THUMB / 2.0, TRACK_OFFSET, THUMB / 2.0 + length, TRACK_OFFSET + 5.0),
                Rect::new(THUMB / 2.0 + 1.0, TRACK_OFFSET + 1.0, THUMB / 2.0 + length - 1.0, TRACK_OFFSET + 4.0),
            ),
            Orientation::Vertical => (
                Rect::new(TRACK_OFFSET, THUMB / 2.0, TRACK_OFFSET + 5.0, THUMB / 2.0 + length),
                Rect::new(TRACK_OFFSET + 1.0, THUMB / 2.0 + 1.0, TRACK_OFFSET + 4.0, THUMB / 2.0 + length - 1.0),
            ),
        };
        painter.fill_rect(track + offset, style.border);
        painter.fill_rect(inner + offset, style.background);

        for (value, label) in &self.labels {
            let at = self.track_point(*value) + offset;
            let label_size = label.base().size();
            let (tick, label_origin) = match self.orientation {
                Orientation::Horizontal => (
                    Rect::new(at.x - 2.0, origin.y + 3.0, at.x + 2.0, origin.y + 14.0),
                    Point::new(at.x - label_size.width / 2.0, origin.y + LABEL_OFFSET),
                ),
                Orientation::Vertical => (
                    Rect::new(origin.x + 3.0, at.y - 2.0, origin.x + 14.0, at.y + 2.0),
                    Point::new(origin.x + LABEL_OFFSET, at.y - label_size.height / 2.0),
                ),
            };
            painter.fill_rounded_rect(tick, 2.0, style.border);
            label.paint(painter, label_origin);
        }

        let center = self.track_point(self.value) + offset;
        let thumb = match self.orientation {
            Orientation::Horizontal => Rect::new(center.x - THUMB / 2.0, origin.y, center.x + THUMB / 2.0, origin.y + THUMB),
            Orientation::Vertical => Rect::new(origin.x, center.y - THUMB / 2.0, origin.x + THUMB, center.y + THUMB / 2.0),
        };
        painter.fill_ellipse(thumb, style.border);
        painter.fill_ellipse(thumb.inset(-1.0), style.background);
    }

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        Some(self)
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        Some(self)
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        self.labels.values_mut().map(|label| label as &mut dyn Element).collect()
    }
}

styled!(Slider, SliderStyle);

impl LocaleSwitchable for Slider {
    fn apply_own_locale(&mut self, _locale: &Locale) {}
}

#[cfg(test)]
mod tests {
    use swatch_core::propagate;
    use swatch_theme::SchemeId;

    use super::*;
    use crate::label::LabelStyle;

    fn slider() -> Slider {
        Slider::new(
            &UiContext::headless(),
            Orientation::Horizontal,
            Size::new(117.0, 40.0),
            0,
            100,
            150,
            25,
        )
    }

    #[test]
    fn value_is_clamped() {
        let mut slider = slider();
        assert_eq!(slider.value(), 100);
        slider.set_value(-3);
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn standard_labels_every_step() {
        let slider = slider();
        let keys: Vec<i32> = slider.labels().keys().copied().collect();
        assert_eq!(keys, vec![0, 25, 50, 75, 100]);
        assert_eq!(slider.labels()[&50].display_text(), "50");
    }

    #[test]
    fn tick_labels_switch_with_slider() {
        let mut slider = slider();
        propagate::apply_scheme(&mut slider, &SchemeId::dark()).unwrap();
        assert!(slider.labels().values().all(|label| label.style() == &LabelStyle::dark()));
    }

    #[test]
    fn new_ticks_take_the_active_scheme() {
        let mut slider = slider();
        propagate::apply_scheme(&mut slider, &SchemeId::dark()).unwrap();
        slider.set_tick(0, 10, 0, 5).unwrap();

        let keys: Vec<i32> = slider.labels().keys().copied().collect();
        assert_eq!(keys, vec![0, 5, 10]);
        assert!(slider
            .labels()
            .values()
            .all(|label| label.active_scheme() == &SchemeId::dark() && label.style() == &LabelStyle::dark()));
    }

    #[test]
    fn track_positions_round_trip() {
        let slider = slider();
        assert_eq!(slider.value_at(50.0), 50);
        assert_eq!(slider.value_at(-10.0), 0);
    }
}
