//! Packed colors
//!
//! Stored as ABGR (`0xAABBGGRR`) so the little-endian bytes are `[R, G, B, A]`
//! and a pixel buffer copies straight into canvas `ImageData`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::rgba(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn abgr(self) -> u32 {
        self.0
    }

    pub const fn channels(self) -> [u8; 4] {
        let v = self.0;
        [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Result<Self, EngineError> {
        let bad = || EngineError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let nibble = ch.to_digit(16).ok_or_else(bad)? as u8;
                    out[i] = nibble * 17;
                }
                Ok(Color::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.channels();
        if a == 0xFF {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms_parse_to_abgr() {
        assert_eq!(Color::parse_hex("#ff0000").unwrap().abgr(), 0xFF0000FF);
        assert_eq!(Color::parse_hex("00ff00").unwrap().abgr(), 0xFF00FF00);
        assert_eq!(Color::parse_hex("#00f").unwrap().abgr(), 0xFFFF0000);
        assert_eq!(Color::parse_hex("#11223380").unwrap().channels(), [0x11, 0x22, 0x33, 0x80]);
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in ["", "#", "#12345", "#gggggg", "red", "#ffé", "#+fffff"] {
            assert!(Color::parse_hex(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn display_drops_opaque_alpha() {
        assert_eq!(Color::rgb(0x22, 0xc5, 0x5e).to_string(), "#22c55e");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
