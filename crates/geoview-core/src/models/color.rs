//! Layer colors and the styles derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{
    DEFAULT_LAYER_COLOR, FILL_ALPHA, POINT_OUTLINE_COLOR, POINT_OUTLINE_WIDTH, POINT_RADIUS,
    STROKE_WIDTH,
};
use crate::error::ColorParseError;

/// An opaque RGB color, as produced by an `<input type="color">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as a CSS `rgba(...)` string with the given opacity.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        // Matches DEFAULT_LAYER_COLOR (#3b82f6).
        Self::rgb(0x3b, 0x82, 0xf6)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #abc expands to #aabbcc
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Vector style for one data layer.
///
/// Stroke, fill and point marker all share the layer's base color.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill_color: String,
    pub point_radius: f64,
    pub point_fill: String,
    pub point_outline: String,
    pub point_outline_width: f64,
}

impl LayerStyle {
    pub fn for_color(color: Color) -> Self {
        let hex = color.to_hex();
        Self {
            stroke_color: hex.clone(),
            stroke_width: STROKE_WIDTH,
            fill_color: color.rgba(FILL_ALPHA),
            point_radius: POINT_RADIUS,
            point_fill: hex,
            point_outline: POINT_OUTLINE_COLOR.to_string(),
            point_outline_width: POINT_OUTLINE_WIDTH,
        }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::for_color(Color::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_config() {
        assert_eq!(Color::default().to_string(), DEFAULT_LAYER_COLOR);
        assert_eq!(DEFAULT_LAYER_COLOR.parse::<Color>(), Ok(Color::default()));
    }

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("#ff0000".parse::<Color>(), Ok(Color::rgb(255, 0, 0)));
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert_eq!("#0f0".parse::<Color>(), Ok(Color::rgb(0, 255, 0)));
        assert_eq!(" #123456 ".parse::<Color>(), Ok(Color::rgb(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "ff0000".parse::<Color>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#ff00".parse::<Color>(),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "#gg0000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            "#ééé".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_rgba() {
        assert_eq!(Color::default().rgba(0.1), "rgba(59, 130, 246, 0.1)");
    }

    #[test]
    fn test_style_shares_base_hue() {
        let style = LayerStyle::for_color(Color::rgb(255, 0, 0));
        assert_eq!(style.stroke_color, "#ff0000");
        assert_eq!(style.point_fill, "#ff0000");
        assert_eq!(style.fill_color, "rgba(255, 0, 0, 0.1)");
        assert_eq!(style.point_outline, "white");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(1, 2, 3));
        assert!(serde_json::from_str::<Color>("\"red\"").is_err());
    }
}
