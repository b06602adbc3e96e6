//! Serde helpers for [Color] as `#rrggbb` or `#rrggbbaa` strings.
//!
//! Use on a field with `#[serde(with = "swatch_theme::serde_color")]`.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

/// Serialize a Color as a hex string. The alpha byte is omitted when opaque.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex(&hex).map_err(Error::custom)
}

/// Format a colour as `#rrggbb`, or `#rrggbbaa` if it is not opaque.
pub fn to_hex(color: &Color) -> String {
    let [r, g, b, a] = color.components.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex(hex: &str) -> Result<Color, String> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(format!("Invalid hex color '{hex}'"));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("Invalid hex color '{hex}'"))
    };
    match hex.len() {
        6 => Ok(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err("Hex color must be 6 or 8 characters".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colours_drop_alpha() {
        assert_eq!(to_hex(&Color::from_rgb8(45, 151, 231)), "#2d97e7");
        assert_eq!(to_hex(&Color::from_rgba8(1, 1, 1, 40)), "#01010128");
    }

    #[test]
    fn parses_both_lengths() {
        assert_eq!(parse_hex("#2d97e7").unwrap(), Color::from_rgb8(45, 151, 231));
        assert_eq!(parse_hex("01010128").unwrap(), Color::from_rgba8(1, 1, 1, 40));
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#zzzzzz").is_err());
    }
}
