//! Pass 3: iterated separable box blur.

use super::mask::AlphaMask;
use super::options::SegmentOptions;

/// Blur radius for a `width`×`height` crop.
pub fn blur_radius(width: usize, height: usize, options: &SegmentOptions) -> usize {
    let divisor = options.blur_divisor.max(1);
    (width.min(height) / divisor).max(options.min_blur_radius)
}

/// Blur `mask` with `iterations` horizontal+vertical box passes.
///
/// Each output value is the mean of the window `[i - radius, i + radius]`
/// clipped to the row or column, so edges average over fewer samples rather
/// than padding. Window sums are updated incrementally as the window slides.
pub fn box_blur_alpha(mask: &AlphaMask, radius: usize, iterations: usize) -> AlphaMask {
    let (width, height) = (mask.width(), mask.height());
    let mut current: Vec<f32> = mask.values().to_vec();
    if width == 0 || height == 0 {
        return AlphaMask::new(width, height, current);
    }

    let mut scratch = vec![0.0f32; current.len()];
    for _ in 0..iterations {
        for y in 0..height {
            let row = y * width;
            slide(&current, &mut scratch, row, 1, width, radius);
        }
        for x in 0..width {
            slide(&scratch, &mut current, x, width, height, radius);
        }
    }

    AlphaMask::new(width, height, current)
}

/// Sliding mean over one line of `len` values starting at `start`, `step` apart.
fn slide(src: &[f32], dst: &mut [f32], start: usize, step: usize, len: usize, radius: usize) {
    let at = |i: usize| start + i * step;

    let mut sum = 0.0f64;
    let mut count = 0usize;
    for i in 0..len.min(radius + 1) {
        sum += f64::from(src[at(i)]);
        count += 1;
    }

    for i in 0..len {
        dst[at(i)] = (sum / count as f64) as f32;

        let incoming = i + radius + 1;
        if incoming < len {
            sum += f64::from(src[at(incoming)]);
            count += 1;
        }
        if i >= radius {
            sum -= f64::from(src[at(i - radius)]);
            count -= 1;
        }
    }
}
