//! Strided region averaging.

use crate::buffer::{PixelBuffer, Rect};
use crate::color::Rgb;

/// Stride used when averaging a whole buffer as a fallback.
pub const FALLBACK_STRIDE: usize = 5;

/// Stride used for the small eye and hair regions.
pub const FEATURE_STRIDE: usize = 3;

/// Mean RGB over `rect`, visiting every `stride`-th pixel on each axis.
///
/// The rectangle is clamped to the buffer first. If nothing is left to
/// average, [`Rgb::NEUTRAL_SKIN`] is returned instead. A stride of zero is
/// treated as one.
pub fn region_average(buffer: &PixelBuffer, rect: Rect, stride: usize) -> Rgb {
    let r = rect.clamp_to(buffer.width(), buffer.height());
    if r.is_empty() {
        return Rgb::NEUTRAL_SKIN;
    }

    let stride = stride.max(1);
    let (mut sum_r, mut sum_g, mut sum_b, mut count) = (0u64, 0u64, 0u64, 0u64);

    for y in (r.top as usize..r.bottom as usize).step_by(stride) {
        for x in (r.left as usize..r.right as usize).step_by(stride) {
            let [pr, pg, pb, _] = buffer.pixel(x, y);
            sum_r += pr as u64;
            sum_g += pg as u64;
            sum_b += pb as u64;
            count += 1;
        }
    }

    Rgb::new(
        (sum_r / count) as u8,
        (sum_g / count) as u8,
        (sum_b / count) as u8,
    )
}
