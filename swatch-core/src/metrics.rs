//! # Font Metrics
//!
//! [TextMetrics] is the boundary to whatever measures glyphs (a shaping
//! engine, a platform font API). The sizing engine and a few elements that
//! hit-test drawn text only ever talk to this trait.

use serde::{Deserialize, Serialize};

/// A font request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Family name. Empty means the backend's default family.
    pub family: String,
    /// Size in pixels.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
}

impl Font {
    /// Create a regular-weight font.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// The same font at another size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// The same font with bold weight toggled.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("", 13.0)
    }
}

/// Bounding box of a measured string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    /// Advance width.
    pub width: f64,
    /// Line height.
    pub height: f64,
    /// Distance from the top of the line to the baseline.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line.
    pub descent: f64,
}

/// Measures strings in a given font.
///
/// Implementations must be deterministic: the same font and string always
/// measure the same.
pub trait TextMetrics {
    /// Measure `text` set in `font`.
    fn measure(&self, font: &Font, text: &str) -> TextBounds;
}

/// Metrics where every character has the same advance.
///
/// Used when no shaping backend is available and in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMetrics {
    /// Advance per character as a fraction of the font size.
    pub advance_ratio: f64,
    /// Ascent as a fraction of the font size.
    pub ascent_ratio: f64,
    /// Descent as a fraction of the font size.
    pub descent_ratio: f64,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
        }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&self, font: &Font, text: &str) -> TextBounds {
        // Bold glyphs are a tenth wider.
        let weight = if font.bold { 1.1 } else { 1.0 };
        let ascent = font.size * self.ascent_ratio;
        let descent = font.size * self.descent_ratio;
        TextBounds {
            width: text.chars().count() as f64 * font.size * self.advance_ratio * weight,
            height: font.size * (self.ascent_ratio + self.descent_ratio),
            ascent,
            descent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let metrics = FixedAdvanceMetrics::default();
        let font = Font::new("", 10.0);
        assert_eq!(metrics.measure(&font, "abcd").width, 20.0);
        assert_eq!(metrics.measure(&font, "你好").width, 10.0);
        assert_eq!(metrics.measure(&font, "").height, 10.0);
    }
}
