//! Pass 4: contrast curve, dead-zone snapping, alpha write-back.

use super::mask::AlphaMask;
use super::options::SegmentOptions;
use crate::buffer::PixelBuffer;

/// Smoothstep `t²(3 - 2t)` on `t` clamped to `[0, 1]`.
#[inline]
pub fn s_curve(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn to_alpha(value: f32, options: &SegmentOptions) -> u8 {
    let alpha = (s_curve(value) * 255.0).round() as u8;
    if alpha < options.transparent_below {
        0
    } else if alpha > options.opaque_above {
        255
    } else {
        alpha
    }
}

/// Write `mask` into the alpha channel of `crop`. RGB is left as is.
pub fn finalize_alpha(crop: PixelBuffer, mask: &AlphaMask, options: &SegmentOptions) -> PixelBuffer {
    debug_assert_eq!(crop.width(), mask.width());
    debug_assert_eq!(crop.height(), mask.height());

    let alpha: Vec<u8> = mask.values().iter().map(|&v| to_alpha(v, options)).collect();
    crop.with_alpha(&alpha)
}
