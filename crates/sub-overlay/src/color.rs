//! RGBA colors in the player's option syntax

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// 8-bit RGBA color as the player's style options carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 255 = opaque
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the "disabled" value for optional colors.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from all four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Error parsing a `#RRGGBB` / `#AARRGGBB` color option.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The value does not start with `#`.
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    /// The value has the wrong number of hex digits.
    #[error("color needs 6 or 8 hex digits, got {0}")]
    BadLength(usize),

    /// The value contains a non-hex digit.
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.into()))?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::BadLength(hex.len()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit(s.into()));
        }
        let digits =
            u32::from_str_radix(hex, 16).map_err(|_| ParseColorError::BadDigit(s.into()))?;
        Ok(if hex.len() == 6 {
            Self {
                r: (digits >> 16) as u8,
                g: (digits >> 8) as u8,
                b: digits as u8,
                a: 255,
            }
        } else {
            Self {
                a: (digits >> 24) as u8,
                r: (digits >> 16) as u8,
                g: (digits >> 8) as u8,
                b: digits as u8,
            }
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
