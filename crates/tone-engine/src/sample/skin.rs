//! Seeded random skin-tone sampling.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::options::SampleOptions;
use super::region::{region_average, FALLBACK_STRIDE};
use crate::buffer::PixelBuffer;
use crate::color::{Hsv, Rgb};

/// A source of uniformly distributed indices.
///
/// Implemented for every [`rand::Rng`]; tests can implement it directly to
/// replay a fixed sequence of draws.
pub trait RandomSource {
    /// Return a uniformly distributed value in `0..bound`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Broad skin-tone gate over HSV.
///
/// Hue in `[0, 50]` or `[340, 360]`, saturation in `[0.12, 0.78]` and value
/// in `[0.18, 0.96]`. All three must hold.
pub fn is_skin_tone(hsv: Hsv) -> bool {
    let Hsv { h, s, v } = hsv;
    let hue_ok = (0.0..=50.0).contains(&h) || (340.0..=360.0).contains(&h);
    let sat_ok = (0.12..=0.78).contains(&s);
    let val_ok = (0.18..=0.96).contains(&v);
    hue_ok && sat_ok && val_ok
}

/// Sample the subject's skin color with a generator seeded from `options.seed`.
///
/// The generator is created for this call only. Identical buffers and
/// options always give identical results.
pub fn sample_skin_color(buffer: &PixelBuffer, options: &SampleOptions) -> Rgb {
    let mut rng = StdRng::seed_from_u64(options.seed);
    sample_skin_color_with(buffer, options, &mut rng)
}

/// Sample the subject's skin color drawing coordinates from `rng`.
///
/// Draws `options.sample_count` coordinates uniformly from the centered
/// `options.central_fraction` of each axis and keeps the pixels that pass
/// [`is_skin_tone`]. With fewer than `options.min_skin_samples` survivors (or
/// an empty central window) the strided average of the whole buffer is
/// returned instead.
pub fn sample_skin_color_with<R: RandomSource + ?Sized>(
    buffer: &PixelBuffer,
    options: &SampleOptions,
    rng: &mut R,
) -> Rgb {
    let (width, height) = (buffer.width(), buffer.height());
    let margin = (1.0 - options.central_fraction.clamp(0.0, 1.0)) / 2.0;

    let left = (width as f32 * margin) as usize;
    let right = ((width as f32 * (1.0 - margin)) as usize).min(width);
    let top = (height as f32 * margin) as usize;
    let bottom = ((height as f32 * (1.0 - margin)) as usize).min(height);

    if right <= left || bottom <= top {
        return region_average(buffer, buffer.bounds(), FALLBACK_STRIDE);
    }

    let (mut sum_r, mut sum_g, mut sum_b, mut count) = (0u64, 0u64, 0u64, 0usize);

    for _ in 0..options.sample_count {
        let x = left + rng.next_below(right - left);
        let y = top + rng.next_below(bottom - top);
        let color = buffer.rgb(x, y);

        if is_skin_tone(Hsv::from(color)) {
            sum_r += color.r as u64;
            sum_g += color.g as u64;
            sum_b += color.b as u64;
            count += 1;
        }
    }

    if count < options.min_skin_samples || count == 0 {
        return region_average(buffer, buffer.bounds(), FALLBACK_STRIDE);
    }

    let n = count as u64;
    Rgb::new((sum_r / n) as u8, (sum_g / n) as u8, (sum_b / n) as u8)
}
