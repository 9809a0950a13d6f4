//! Color types and conversion utilities
//!
//! This module provides the two color representations the analysis works in:
//!
//! - [`Rgb`]: 8-bit sRGB triple, used for sampling, averaging and hex output
//! - [`Hsv`]: hue/saturation/value, used for skin gating, matting and palettes
//!
//! Hue is circular. Any distance between two hues must go through
//! [`hue_distance`], never a plain subtraction.
//!
//! # Example
//!
//! ```
//! use tone_engine::{Hsv, Rgb};
//!
//! let skin = Rgb::new(230, 190, 170);
//! let hsv = Hsv::from(skin);
//! assert!(hsv.h > 19.0 && hsv.h < 21.0);
//!
//! let back = Rgb::from(hsv);
//! assert_eq!(back.to_hex(), "#E6BEAA");
//! ```

mod error;
mod hsv;
mod rgb;

pub use error::ParseColorError;
pub use hsv::{hue_distance, rotate_hue, Hsv};
pub use rgb::{to_hex, Rgb};
