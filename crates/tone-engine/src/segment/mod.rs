//! Model-free foreground/background segmentation of a face crop.
//!
//! The matte is built in four pure stages, each taking the previous stage's
//! output by reference and allocating its own:
//!
//! ```text
//! PixelBuffer ──> Trimap        (Pass 1: elliptical FG / BG / uncertain zones)
//!      │            │
//!      └────────> AlphaMask     (Pass 2: skin score × elliptic falloff)
//!                   │
//!                   v
//!                 AlphaMask     (Pass 3: 3× separable box blur)
//!                   │
//!                   v
//! PixelBuffer <── finalize      (Pass 4: smoothstep, dead-zone snap, write alpha)
//! ```
//!
//! Matting confidence for an uncertain pixel is the product of how skin-like
//! its color is and how close it sits to the inner ellipse. Neither term on
//! its own decides the alpha.
//!
//! # Example
//!
//! ```
//! use tone_engine::{Hsv, PixelBuffer, Rgb, Segmenter};
//!
//! let skin = Rgb::new(220, 170, 140);
//! let crop = PixelBuffer::filled(60, 80, [220, 170, 140, 255]);
//!
//! let cutout = Segmenter::default().remove_background(crop, Hsv::from(skin));
//! assert_eq!(cutout.width(), 60);
//! // Center of the ellipse is opaque, the corner is transparent
//! assert_eq!(cutout.pixel(30, 38)[3], 255);
//! assert_eq!(cutout.pixel(0, 0)[3], 0);
//! ```

mod blur;
mod finalize;
mod mask;
mod options;
mod score;
mod trimap;

pub use blur::{blur_radius, box_blur_alpha};
pub use finalize::{finalize_alpha, s_curve};
pub use mask::AlphaMask;
pub use options::SegmentOptions;
pub use score::{score_alpha, SkinTolerance};
pub use trimap::{FaceEllipse, Trimap, Zone};

use crate::buffer::PixelBuffer;
use crate::color::Hsv;

/// Runs the four-pass matting pipeline with a fixed set of options.
///
/// `Segmenter` holds no per-image state, so one instance can be shared
/// across threads and reused for any number of crops.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    #[inline]
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// The options this segmenter runs with.
    #[inline]
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Replace the alpha channel of `crop` with the computed matte.
    ///
    /// `skin` is the sampled skin reference. RGB channels of the returned
    /// buffer are those of `crop`, untouched. An empty buffer is returned
    /// unchanged.
    pub fn remove_background(&self, crop: PixelBuffer, skin: Hsv) -> PixelBuffer {
        if crop.is_empty() {
            return crop;
        }

        let ellipse = FaceEllipse::for_crop(crop.width(), crop.height(), &self.options);
        let trimap = Trimap::build(crop.width(), crop.height(), &ellipse, &self.options);
        let raw = score_alpha(&crop, &trimap, skin, &self.options);

        let radius = blur_radius(crop.width(), crop.height(), &self.options);
        let blurred = box_blur_alpha(&raw, radius, self.options.blur_iterations);

        finalize_alpha(crop, &blurred, &self.options)
    }

    /// Compute the raw matte (passes 1-2) and the smoothed one (pass 3)
    /// without touching the pixels. Useful for inspecting the matte.
    pub fn matte(&self, crop: &PixelBuffer, skin: Hsv) -> (AlphaMask, AlphaMask) {
        let ellipse = FaceEllipse::for_crop(crop.width(), crop.height(), &self.options);
        let trimap = Trimap::build(crop.width(), crop.height(), &ellipse, &self.options);
        let raw = score_alpha(crop, &trimap, skin, &self.options);
        let radius = blur_radius(crop.width(), crop.height(), &self.options);
        let blurred = box_blur_alpha(&raw, radius, self.options.blur_iterations);
        (raw, blurred)
    }
}
