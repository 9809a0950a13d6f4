//! Hue-relative color theory palettes.

use super::{swatch, Palette};
use crate::color::{rotate_hue, Hsv};

/// Monochromatic ramp: lighter and desaturated to darker and richer.
pub fn monochromatic(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    Palette::new(
        "Monochromatic",
        [
            swatch(h, s - 0.35, v + 0.25),
            swatch(h, s - 0.18, v + 0.12),
            swatch(h, s, v),
            swatch(h, s + 0.18, v - 0.12),
            swatch(h, s + 0.30, v - 0.22),
        ],
    )
}

/// Neighbors at ±30° and ±60°.
pub fn analogous(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    Palette::new(
        "Analogous",
        [
            swatch(rotate_hue(h, -60.0), s, v),
            swatch(rotate_hue(h, -30.0), s, v),
            swatch(h, s, v),
            swatch(rotate_hue(h, 30.0), s, v),
            swatch(rotate_hue(h, 60.0), s, v),
        ],
    )
}

pub fn complementary(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    let opposite = rotate_hue(h, 180.0);
    Palette::new(
        "Complementary",
        [
            swatch(h, s, v + 0.10),
            swatch(h, s, v),
            swatch(h, s + 0.15, v - 0.15),
            swatch(opposite, s, v),
            swatch(opposite, s - 0.15, v + 0.10),
        ],
    )
}

pub fn triadic(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    let (second, third) = (rotate_hue(h, 120.0), rotate_hue(h, 240.0));
    Palette::new(
        "Triadic",
        [
            swatch(h, s, v),
            swatch(second, s, v),
            swatch(third, s, v),
            swatch(second, s - 0.20, v + 0.10),
            swatch(third, s - 0.20, v + 0.10),
        ],
    )
}

pub fn split_complementary(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    let (left, right) = (rotate_hue(h, 150.0), rotate_hue(h, 210.0));
    Palette::new(
        "Split-Complementary",
        [
            swatch(h, s, v),
            swatch(left, s, v),
            swatch(right, s, v),
            swatch(left, s - 0.15, v + 0.12),
            swatch(right, s - 0.15, v + 0.12),
        ],
    )
}

/// Square scheme at 90° steps plus a lightened base.
pub fn tetradic(base: Hsv) -> Palette {
    let Hsv { h, s, v } = base;
    Palette::new(
        "Tetradic",
        [
            swatch(h, s, v),
            swatch(rotate_hue(h, 90.0), s, v),
            swatch(rotate_hue(h, 180.0), s, v),
            swatch(rotate_hue(h, 270.0), s, v),
            swatch(h, s - 0.25, v + 0.15),
        ],
    )
}

/// Five hues at -60, -30, 0, +30, +60 with fixed saturation/value pairs.
pub(super) fn hue_fan(name: &'static str, h: f32, sv: [(f32, f32); 5]) -> Palette {
    const OFFSETS: [f32; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];
    let mut colors: [String; 5] = Default::default();
    for ((slot, offset), (s, v)) in colors.iter_mut().zip(OFFSETS).zip(sv) {
        *slot = swatch(rotate_hue(h, offset), s, v);
    }
    Palette::new(name, colors)
}
