//! ARGB colors.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
const RGB_PATTERN: &str = r"^(?i)rgb\s*\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$";

/// A color stored as a packed `0xAARRGGBB` value.
///
/// Black (`0xFF000000`) and the all-zero default are ordinary colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    argb: u32,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);
    /// White.
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    /// Red.
    pub const RED: Color = Color::from_argb(0xFFFF_0000);
    /// Green.
    pub const GREEN: Color = Color::from_argb(0xFF00_8000);
    /// Blue.
    pub const BLUE: Color = Color::from_argb(0xFF00_00FF);

    /// Create a color from a packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Packed ARGB value.
    pub fn argb(&self) -> u32 {
        self.argb
    }

    /// Alpha component.
    pub fn a(&self) -> u8 {
        (self.argb >> 24) as u8
    }

    /// Red component.
    pub fn r(&self) -> u8 {
        (self.argb >> 16) as u8
    }

    /// Green component.
    pub fn g(&self) -> u8 {
        (self.argb >> 8) as u8
    }

    /// Blue component.
    pub fn b(&self) -> u8 {
        self.argb as u8
    }

    /// Check if the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a() == 0xFF
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "blue" => Some(Color::BLUE),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "RGB({},{},{})", self.r(), self.g(), self.b())
        } else {
            write!(f, "0x{:08X}", self.argb)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `RGB(r,g,b)`, `0xAARRGGBB`, `#RRGGBB` and a few color names.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            if hex.is_empty() || hex.len() > 8 || !is_hex(hex) {
                return Err(Error::invalid_value("color", s));
            }
            return u32::from_str_radix(hex, 16)
                .map(Color::from_argb)
                .map_err(|_| Error::invalid_value("color", s));
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !is_hex(hex) {
                return Err(Error::invalid_value("color", s));
            }
            return u32::from_str_radix(hex, 16)
                .map(|rgb| Color::from_argb(0xFF00_0000 | rgb))
                .map_err(|_| Error::invalid_value("color", s));
        }

        let re = RGB_REGEX.get_or_init(|| Regex::new(RGB_PATTERN).unwrap());
        if let Some(caps) = re.captures(s) {
            let component = |i: usize| -> Result<u8> {
                caps[i].parse().map_err(|_| Error::invalid_value("color", s))
            };
            return Ok(Color::rgb(component(1)?, component(2)?, component(3)?));
        }

        Color::from_name(s).ok_or_else(|| Error::invalid_value("color", s))
    }
}

// `from_str_radix` alone would also take a sign.
fn is_hex(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}
