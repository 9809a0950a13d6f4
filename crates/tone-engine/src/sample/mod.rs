//! Color sampling from pixel buffers.
//!
//! Two samplers feed the classifier:
//!
//! 1. [`region_average`] - strided mean over a rectangle. Used as the
//!    whole-buffer fallback (stride 5) and for eye/hair regions (stride 3).
//! 2. [`sample_skin_color`] - seeded random sampling from the central part
//!    of a face crop, keeping only pixels that pass the [`is_skin_tone`] gate.
//!
//! The random sampler draws from a [`RandomSource`] owned by the call, never
//! from a shared or thread-global generator, so concurrent analyses stay
//! reproducible.
//!
//! # Example
//!
//! ```
//! use tone_engine::{sample_skin_color, PixelBuffer, Rgb, SampleOptions};
//!
//! let buffer = PixelBuffer::filled(40, 40, [230, 190, 170, 255]);
//! let skin = sample_skin_color(&buffer, &SampleOptions::default());
//! assert_eq!(skin, Rgb::new(230, 190, 170));
//! ```

mod options;
mod region;
mod skin;

pub use options::SampleOptions;
pub use region::{region_average, FALLBACK_STRIDE, FEATURE_STRIDE};
pub use skin::{is_skin_tone, sample_skin_color, sample_skin_color_with, RandomSource};
