//! 8-bit RGB color type
//!
//! Samples, region averages and palette swatches are all carried as plain
//! 8-bit triples. Hex output is always `#RRGGBB`, uppercase, zero-padded.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Neutral skin color returned when a region has nothing to average.
    pub const NEUTRAL_SKIN: Rgb = Rgb::new(210, 180, 160);

    /// Create a new color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from integer channels, clamping each to 0..=255.
    ///
    /// # Example
    /// ```
    /// use tone_engine::Rgb;
    /// assert_eq!(Rgb::clamped(300, -4, 17), Rgb::new(255, 0, 17));
    /// ```
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB`.
    ///
    /// # Example
    /// ```
    /// use tone_engine::Rgb;
    /// assert_eq!(Rgb::new(10, 171, 255).to_hex(), "#0AABFF");
    /// ```
    pub fn to_hex(self) -> String {
        to_hex(self.r, self.g, self.b)
    }
}

/// Format three channels as `#RRGGBB` (uppercase, zero-padded).
pub fn to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // Digits only: signs and inner whitespace are rejected
        let Some(nibbles) = digits
            .bytes()
            .map(|b| (b as char).to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
        else {
            return Err(ParseColorError::NotHex {
                input: input.to_string(),
            });
        };

        match *nibbles.as_slice() {
            // Shorthand: 0xF expands to 0xFF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ParseColorError::Length {
                input: input.to_string(),
                digits: nibbles.len(),
            }),
        }
    }
}
