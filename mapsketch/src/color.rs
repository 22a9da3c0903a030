#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidColor;

/// Platform independent RGBA color.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value).ok_or(InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FF0000FF`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Green color: `#00FF00FF`
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#0000FFFF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// Yellow color: `#FFFF00FF`
    pub const YELLOW: Color = Color::rgba(255, 255, 0, 255);
    /// Orange color: `#FF8000FF`
    pub const ORANGE: Color = Color::rgba(255, 128, 0, 255);
    /// Purple color: `#800080FF`
    pub const PURPLE: Color = Color::rgba(128, 0, 128, 255);
    /// Gray color: `#808080FF`
    pub const GRAY: Color = Color::rgba(128, 128, 128, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#000000FF`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into f32 array with channel values in `[0, 1]`.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Converts the color into u8 array (RGBA).
    pub fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if !hex_string.is_ascii()
            || hex_string.len() != 7 && hex_string.len() != 9
            || !hex_string.starts_with('#')
        {
            return None;
        }

        let r = u8::from_str_radix(&hex_string[1..3], 16).ok()?;
        let g = u8::from_str_radix(&hex_string[3..5], 16).ok()?;
        let b = u8::from_str_radix(&hex_string[5..7], 16).ok()?;
        let a = if hex_string.len() == 9 {
            u8::from_str_radix(&hex_string[7..9], 16).ok()?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).expect("valid hex");
        assert_eq!(&color.to_hex(), hex);

        assert_eq!(Color::try_from_hex("#FFFF00"), Some(Color::YELLOW));
        assert_eq!(Color::try_from_hex("FFFF00"), None);
        assert_eq!(Color::try_from_hex("#FFZZ00"), None);
        assert_eq!(Color::try_from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn alpha() {
        assert_eq!(Color::BLUE.with_alpha(128).to_u8_array(), [0, 0, 255, 128]);
        assert_eq!(Color::WHITE.to_f32_array(), [1.0; 4]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_as_hex() {
        let json = serde_json::to_string(&Color::ORANGE).expect("serialization");
        assert_eq!(json, "\"#FF8000FF\"");

        let color: Color = serde_json::from_str("\"#800080\"").expect("deserialization");
        assert_eq!(color, Color::PURPLE);
        assert!(serde_json::from_str::<Color>("\"purple\"").is_err());
    }
}
