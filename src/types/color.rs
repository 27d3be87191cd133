//! RGB colors as handed to the rendering side, plus the three anchor colors of a scale.

use crate::scale::error::ScaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color.
///
/// Parses from and formats to CSS hex notation, which is also its serialized form.
///
/// # Examples
///
/// ```
/// use choropleth::Color;
///
/// let color: Color = "#80adf1".parse().unwrap();
/// assert_eq!(color, Color::new(0x80, 0xad, 0xf1));
/// assert_eq!(color.to_string(), "#80adf1");
///
/// let short: Color = "#EEE".parse().unwrap();
/// assert_eq!(short, Color::new(0xee, 0xee, 0xee));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScaleError::InvalidHexColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #rgb doubles each digit
            3 => Ok(Color::new(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ScaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The anchor colors bound to the minimum, midpoint and maximum of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorStops {
    pub low: Color,
    pub mid: Color,
    pub high: Color,
}

impl ColorStops {
    pub const fn new(low: Color, mid: Color, high: Color) -> Self {
        Self { low, mid, high }
    }
}

impl Default for ColorStops {
    /// Light blue for cold, green in the middle, red for hot.
    fn default() -> Self {
        Self {
            low: Color::new(0x80, 0xad, 0xf1),
            mid: Color::new(0x73, 0xff, 0x00),
            high: Color::new(0xff, 0x00, 0x00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_hex() {
        for input in ["80adf1", "#80adf", "#zzzzzz", "#", "#80adf1ff", "#ééé", "#+fffff"] {
            assert!(
                input.parse::<Color>().is_err(),
                "'{}' should not parse",
                input
            );
        }
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"#73FF00\"").unwrap();
        assert_eq!(back, Color::new(0x73, 0xff, 0x00));
    }

    #[test]
    fn test_stops_fill_missing_fields_with_defaults() {
        let stops: ColorStops = serde_json::from_str(r##"{"high": "#000000"}"##).unwrap();
        assert_eq!(stops.low, ColorStops::default().low);
        assert_eq!(stops.high, Color::new(0, 0, 0));
    }
}
