//! Rejected hex color input

use std::fmt;

/// A string that is not a `#RGB` / `#RRGGBB` color.
///
/// Both variants keep the offending input so callers can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of digits after the optional `#`.
    Length { input: String, digits: usize },
    /// Something other than `0-9a-fA-F` in the digits, signs included.
    NotHex { input: String },
}

impl ParseColorError {
    /// The input as it was given, before trimming.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::Length { input, .. } | ParseColorError::NotHex { input } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Length { input, digits } => {
                write!(f, "{input:?} has {digits} hex digits, expected 3 or 6")
            }
            ParseColorError::NotHex { input } => write!(f, "{input:?} is not a hex color"),
        }
    }
}

impl std::error::Error for ParseColorError {}
