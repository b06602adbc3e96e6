//! # Automatic Sizing
//!
//! Elements whose footprint follows their text (labels, buttons, check boxes)
//! embed an [AutoSize]. It caches the inputs of the size computation and
//! recomputes the [Footprint] synchronously whenever one of them changes.
//!
//! Two modes exist:
//!
//! - **Unconstrained** (wrap width `<= 0`): the size is the bounding box of the
//!   whole string plus the element kind's padding.
//! - **Wrapped** (wrap width `> 0`): text is broken greedily, one character at
//!   a time, and lines are stacked. Breaks ignore word boundaries.
//!
//! In both modes a leading icon adds its width plus a gap, and the height
//! becomes the larger of text and icon height.
//!
//! The per-line height in wrap mode is a heuristic, not a typographic line
//! height: the measured height is floored and a correction of
//! `round(descent / height * 4)` pixels is added, since measured boxes
//! tend to under-report the visual line pitch. For common fonts that
//! correction is one pixel.

use std::ops::Range;
use std::rc::Rc;

use vello::kurbo::Size;

use crate::metrics::{Font, TextMetrics};

/// How measured extents are rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round up. Nothing gets clipped.
    #[default]
    Ceil,
    /// Round down.
    Floor,
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Ceil => value.ceil(),
            Rounding::Floor => value.floor(),
        }
    }
}

/// Per-element-kind padding around measured text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizePolicy {
    /// Added to the text width.
    pub pad_width: f64,
    /// Added to the text height.
    pub pad_height: f64,
    /// Space between a leading icon and the text.
    pub icon_gap: f64,
    /// Rounding of unconstrained measurements.
    pub rounding: Rounding,
}

impl SizePolicy {
    /// No padding, rounded up.
    pub const TIGHT: Self = Self {
        pad_width: 0.0,
        pad_height: 0.0,
        icon_gap: 0.0,
        rounding: Rounding::Ceil,
    };

    /// Create a policy with the same padding on both axes.
    pub fn padded(pad: f64, icon_gap: f64, rounding: Rounding) -> Self {
        Self {
            pad_width: pad,
            pad_height: pad,
            icon_gap,
            rounding,
        }
    }
}

/// One line of wrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    /// Byte range into the display string.
    pub range: Range<usize>,
    /// Height this line contributes.
    pub height: f64,
}

/// The computed size of an element and the lines its text occupies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Footprint {
    /// Outer size including padding and icon.
    pub size: Size,
    /// Lines of text. Unconstrained mode has at most one.
    pub lines: Vec<WrappedLine>,
}

/// Line height used in wrap mode.
fn line_height(metrics: &dyn TextMetrics, font: &Font, line: &str) -> f64 {
    let bounds = metrics.measure(font, line);
    if bounds.height <= 0.0 {
        return 0.0;
    }
    bounds.height.floor() + (bounds.descent / bounds.height * 4.0).round()
}

/// Break `text` into lines no wider than `max_width`, greedily by character.
///
/// A line grows while its width stays below `max_width`; the character that
/// reaches or crosses the limit still belongs to the line. A single character
/// wider than `max_width` therefore makes a line of its own.
pub fn wrap_lines(metrics: &dyn TextMetrics, font: &Font, text: &str, max_width: f64) -> Vec<WrappedLine> {
    let mut bounds: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    bounds.push(text.len());
    let char_count = bounds.len() - 1;

    let mut lines = Vec::new();
    let mut start = 0;
    let mut end = 0;
    while end < char_count {
        let mut reached_end = false;
        while metrics.measure(font, &text[bounds[start]..bounds[end]]).width < max_width {
            if end >= char_count {
                reached_end = true;
                break;
            }
            end += 1;
        }

        let range = bounds[start]..bounds[end];
        let height = line_height(metrics, font, &text[range.clone()]);
        lines.push(WrappedLine { range, height });

        if reached_end {
            break;
        }
        start = end;
    }
    lines
}

/// Compute the footprint of `text` as a pure function of its inputs.
pub fn measure_footprint(
    metrics: &dyn TextMetrics,
    font: &Font,
    text: &str,
    wrap_width: f64,
    icon: Option<Size>,
    policy: &SizePolicy,
) -> Footprint {
    let (mut width, mut height, lines) = if wrap_width > 0.0 {
        let lines = wrap_lines(metrics, font, text, wrap_width);
        let total = lines.iter().map(|line| line.height).sum::<f64>();
        (wrap_width, total, lines)
    } else {
        let bounds = metrics.measure(font, text);
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            vec![WrappedLine {
                range: 0..text.len(),
                height: bounds.height,
            }]
        };
        (
            policy.rounding.apply(bounds.width),
            policy.rounding.apply(bounds.height),
            lines,
        )
    };

    width += policy.pad_width;
    height += policy.pad_height;
    if let Some(icon) = icon {
        width += icon.width + policy.icon_gap;
        height = height.max(icon.height);
    }

    Footprint {
        size: Size::new(width, height),
        lines,
    }
}

/// Cached automatic sizing for one element.
pub struct AutoSize {
    metrics: Rc<dyn TextMetrics>,
    policy: SizePolicy,
    text: String,
    font: Font,
    wrap_width: f64,
    icon: Option<Size>,
    footprint: Footprint,
}

impl AutoSize {
    /// Create the engine for an element with no text yet.
    pub fn new(metrics: Rc<dyn TextMetrics>, font: Font, policy: SizePolicy) -> Self {
        let mut auto_size = Self {
            metrics,
            policy,
            text: String::new(),
            font,
            wrap_width: 0.0,
            icon: None,
            footprint: Footprint::default(),
        };
        auto_size.recompute();
        auto_size
    }

    /// Set the display string. Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.recompute();
        true
    }

    /// Set the font. Returns `true` if it changed.
    pub fn set_font(&mut self, font: Font) -> bool {
        if font == self.font {
            return false;
        }
        self.font = font;
        self.recompute();
        true
    }

    /// Set the wrap width; `<= 0` turns wrapping off. Returns `true` if it changed.
    pub fn set_wrap_width(&mut self, wrap_width: f64) -> bool {
        let wrap_width = wrap_width.max(0.0);
        if wrap_width == self.wrap_width {
            return false;
        }
        self.wrap_width = wrap_width;
        self.recompute();
        true
    }

    /// Set the leading icon size. Returns `true` if it changed.
    pub fn set_icon(&mut self, icon: Option<Size>) -> bool {
        if icon == self.icon {
            return false;
        }
        self.icon = icon;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.footprint = measure_footprint(
            self.metrics.as_ref(),
            &self.font,
            &self.text,
            self.wrap_width,
            self.icon,
            &self.policy,
        );
        log::trace!(
            "Resized {:?} to {}x{}",
            self.text,
            self.footprint.size.width,
            self.footprint.size.height
        );
    }

    /// The display string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// The wrap width, `0` when unconstrained.
    pub fn wrap_width(&self) -> f64 {
        self.wrap_width
    }

    /// The computed outer size.
    pub fn size(&self) -> Size {
        self.footprint.size
    }

    /// The computed lines.
    pub fn lines(&self) -> &[WrappedLine] {
        &self.footprint.lines
    }

    /// Text of one computed line.
    pub fn line_text(&self, line: &WrappedLine) -> &str {
        self.text.get(line.range.clone()).unwrap_or_default()
    }

    /// The full computed footprint.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// The metrics provider.
    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedAdvanceMetrics;

    fn font() -> Font {
        Font::new("", 10.0)
    }

    #[test]
    fn crossing_character_stays_on_the_line() {
        let metrics = FixedAdvanceMetrics::default();
        // 5px per char: four chars reach 20px exactly.
        let lines = wrap_lines(&metrics, &font(), "abcdefghij", 20.0);
        let texts: Vec<_> = lines.iter().map(|l| &"abcdefghij"[l.range.clone()]).collect();
        assert_eq!(texts, ["abcd", "efgh", "ij"]);

        // 22px is crossed by the fifth char, which is kept.
        let lines = wrap_lines(&metrics, &font(), "abcdefghij", 22.0);
        let texts: Vec<_> = lines.iter().map(|l| &"abcdefghij"[l.range.clone()]).collect();
        assert_eq!(texts, ["abcde", "fghij"]);
    }

    #[test]
    fn multibyte_text_breaks_on_char_boundaries() {
        let metrics = FixedAdvanceMetrics::default();
        let text = "你好世界";
        let lines = wrap_lines(&metrics, &font(), text, 10.0);
        let texts: Vec<_> = lines.iter().map(|l| &text[l.range.clone()]).collect();
        assert_eq!(texts, ["你好", "世界"]);
    }

    #[test]
    fn oversized_glyph_gets_its_own_line() {
        let metrics = FixedAdvanceMetrics::default();
        let lines = wrap_lines(&metrics, &font(), "abc", 3.0);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let metrics = FixedAdvanceMetrics::default();
        assert!(wrap_lines(&metrics, &font(), "", 20.0).is_empty());
        let footprint = measure_footprint(&metrics, &font(), "", 40.0, None, &SizePolicy::TIGHT);
        assert_eq!(footprint.size, Size::new(40.0, 0.0));
    }

    #[test]
    fn icon_adds_width_and_raises_height() {
        let metrics = FixedAdvanceMetrics::default();
        let policy = SizePolicy::padded(8.0, 4.0, Rounding::Floor);
        let footprint = measure_footprint(&metrics, &font(), "OK", 0.0, Some(Size::new(16.0, 30.0)), &policy);
        assert_eq!(footprint.size, Size::new(10.0 + 8.0 + 16.0 + 4.0, 30.0));
    }
}
