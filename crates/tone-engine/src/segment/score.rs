//! Pass 2: HSV skin scoring of the uncertain ring.

use std::f32::consts::PI;

use super::mask::AlphaMask;
use super::options::SegmentOptions;
use super::trimap::{Trimap, Zone};
use crate::buffer::PixelBuffer;
use crate::color::{hue_distance, Hsv, Rgb};

/// Per-channel Gaussian tolerances derived from the skin reference.
///
/// Richer skin widens the hue window; brighter skin widens the saturation
/// window; darker skin widens the value window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinTolerance {
    /// Hue tolerance in degrees.
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl SkinTolerance {
    pub fn from_reference(skin: Hsv) -> Self {
        Self {
            hue: 28.0 + skin.s * 12.0,
            saturation: 0.22 + skin.v * 0.10,
            value: 0.25 + (1.0 - skin.v) * 0.10,
        }
    }

    /// Product of the three per-channel similarities, in `[0, 1]`.
    pub fn skin_score(&self, reference: Hsv, pixel: Hsv) -> f32 {
        let dh = hue_distance(pixel.h, reference.h);
        let ds = pixel.s - reference.s;
        let dv = pixel.v - reference.v;
        gaussian(dh, self.hue) * gaussian(ds, self.saturation) * gaussian(dv, self.value)
    }
}

#[inline]
fn gaussian(distance: f32, tolerance: f32) -> f32 {
    (-(distance * distance) / (2.0 * tolerance * tolerance)).exp()
}

/// Cosine falloff across the ring: 1 at the inner radius, 0 at the outer.
#[inline]
fn elliptic_weight(radius: f32, options: &SegmentOptions) -> f32 {
    let span = options.outer_radius - options.inner_radius;
    if span <= 0.0 {
        return 0.0;
    }
    let t = ((radius - options.inner_radius) / span).clamp(0.0, 1.0);
    0.5 * (1.0 + (PI * t).cos())
}

/// Resolve the trimap into a raw alpha mask.
///
/// Definite zones map to 1 and 0. An uncertain pixel gets its skin score
/// multiplied by its elliptic weight.
pub fn score_alpha(
    crop: &PixelBuffer,
    trimap: &Trimap,
    skin: Hsv,
    options: &SegmentOptions,
) -> AlphaMask {
    debug_assert_eq!(crop.width(), trimap.width());
    debug_assert_eq!(crop.height(), trimap.height());

    let tolerance = SkinTolerance::from_reference(skin);
    let values = trimap
        .zones()
        .iter()
        .zip(crop.pixels())
        .map(|(zone, px)| match *zone {
            Zone::Foreground => 1.0,
            Zone::Background => 0.0,
            Zone::Uncertain { radius } => {
                let hsv = Hsv::from(Rgb::new(px[0], px[1], px[2]));
                tolerance.skin_score(skin, hsv) * elliptic_weight(radius, options)
            }
        })
        .collect();

    AlphaMask::new(trimap.width(), trimap.height(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::trimap::FaceEllipse;

    #[test]
    fn test_tolerance_scales_with_reference() {
        let t = SkinTolerance::from_reference(Hsv::new(20.0, 0.5, 0.8));
        assert!((t.hue - 34.0).abs() < 1e-5);
        assert!((t.saturation - 0.30).abs() < 1e-5);
        assert!((t.value - 0.27).abs() < 1e-5);
    }

    #[test]
    fn test_identical_color_scores_one() {
        let skin = Hsv::new(20.0, 0.4, 0.8);
        let t = SkinTolerance::from_reference(skin);
        assert!((t.skin_score(skin, skin) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_hue_uses_circular_distance() {
        let reference = Hsv::new(5.0, 0.4, 0.8);
        let t = SkinTolerance::from_reference(reference);
        let across_zero = t.skin_score(reference, Hsv::new(355.0, 0.4, 0.8));
        let same_side = t.skin_score(reference, Hsv::new(15.0, 0.4, 0.8));
        assert!((across_zero - same_side).abs() < 1e-6);
    }

    #[test]
    fn test_green_scores_near_zero() {
        let skin = Hsv::from(Rgb::new(220, 170, 140));
        let t = SkinTolerance::from_reference(skin);
        let green = Hsv::from(Rgb::new(20, 200, 40));
        assert!(t.skin_score(skin, green) < 0.01);
    }

    #[test]
    fn test_elliptic_weight_endpoints() {
        let options = SegmentOptions::default();
        assert!((elliptic_weight(0.70, &options) - 1.0).abs() < 1e-6);
        assert!(elliptic_weight(1.15, &options).abs() < 1e-6);
        assert!((elliptic_weight(0.925, &options) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_score_is_product_of_color_and_position() {
        let options = SegmentOptions::default();
        let (w, h) = (50, 50);
        let crop = PixelBuffer::filled(w, h, [220, 170, 140, 255]);
        let skin = Hsv::from(Rgb::new(220, 170, 140));
        let ellipse = FaceEllipse::for_crop(w, h, &options);
        let trimap = Trimap::build(w, h, &ellipse, &options);
        let mask = score_alpha(&crop, &trimap, skin, &options);

        for (zone, &alpha) in trimap.zones().iter().zip(mask.values()) {
            match *zone {
                Zone::Foreground => assert_eq!(alpha, 1.0),
                Zone::Background => assert_eq!(alpha, 0.0),
                Zone::Uncertain { radius } => {
                    // Perfect color match leaves only the spatial term
                    let expected = elliptic_weight(radius, &options);
                    assert!((alpha - expected).abs() < 1e-5);
                }
            }
        }
    }
}
