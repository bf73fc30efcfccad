//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::{FigureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A logical image category: a book chapter or topic used as a subdirectory
/// name under the images root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(pub String);

impl Category {
    /// Chapter 1: electronics fundamentals.
    pub const ELETTRONICA: &'static str = "01_elettronica";
    /// Chapter 5: transmitters.
    pub const TRASMETTITORI: &'static str = "05_trasmettitori";
    /// Chapter 7: propagation.
    pub const PROPAGAZIONE: &'static str = "07_propagazione";
    /// Chapter 9: interference.
    pub const DISTURBI: &'static str = "09_disturbi";
    /// Appendix B: operating procedures.
    pub const OPERATIVA: &'static str = "b_operativa";

    /// Creates a category from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as used on disk.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<std::path::Path> for Category {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure white, the default figure and axes background.
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }

    /// Parses `#rrggbb`, `#rgb` or one of a few named colors.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| FigureError::validation(format!("invalid hex color '{input}'")));
        }

        let named = match trimmed.to_ascii_lowercase().as_str() {
            "white" => Rgb::WHITE,
            "black" => Rgb::BLACK,
            "red" => Rgb(255, 0, 0),
            "green" => Rgb(0, 128, 0),
            "blue" => Rgb(0, 0, 255),
            "gray" | "grey" => Rgb(128, 128, 128),
            "orange" => Rgb(255, 165, 0),
            "yellow" => Rgb(255, 255, 0),
            "brown" => Rgb(165, 42, 42),
            _ => return Err(FigureError::validation(format!("unknown color '{input}'"))),
        };
        Ok(named)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => Some(Rgb(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "plotters")]
impl From<Rgb> for plotters::style::RGBColor {
    fn from(color: Rgb) -> Self {
        plotters::style::RGBColor(color.0, color.1, color.2)
    }
}
