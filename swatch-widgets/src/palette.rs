//! Named colours shared by the built-in records.

use swatch_theme::Color;

pub(crate) fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

pub(crate) fn gray(level: u8) -> Color {
    rgb(level, level, level)
}

pub(crate) fn light_gray() -> Color {
    gray(192)
}

pub(crate) fn mid_gray() -> Color {
    gray(128)
}

pub(crate) fn dark_gray() -> Color {
    gray(64)
}

/// Text colour of disabled elements.
pub(crate) fn disabled_text() -> Color {
    gray(167)
}
