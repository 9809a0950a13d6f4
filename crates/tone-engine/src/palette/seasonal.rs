//! Season, undertone and feature driven palettes.

use super::theory::hue_fan;
use super::{swatch, Palette};
use crate::classify::{Depth, Family, Undertone};
use crate::color::Hsv;
use crate::features::{ContrastLevel, IntensityLevel};

type FixedPalette = (&'static str, [&'static str; 5]);

const SPRING: [FixedPalette; 3] = [
    ("Spring Brights", ["#FF6F61", "#FFB347", "#FFD700", "#98FB98", "#40E0D0"]),
    ("Spring Pastels", ["#FFDAB9", "#FFE4B5", "#F0E68C", "#B0E0E6", "#FFB6C1"]),
    ("Spring Neutrals", ["#FFF8DC", "#F5DEB3", "#D2B48C", "#C19A6B", "#8B7355"]),
];

const SUMMER: [FixedPalette; 3] = [
    ("Summer Soft Hues", ["#B0C4DE", "#D8BFD8", "#C3B1E1", "#9FB6CD", "#E6A8D7"]),
    ("Summer Pastels", ["#E0FFFF", "#E6E6FA", "#FFE4E1", "#F0F8FF", "#DCD0FF"]),
    ("Summer Neutrals", ["#F5F5F5", "#C0C0C0", "#A9A9B8", "#708090", "#5D6D7E"]),
];

const AUTUMN: [FixedPalette; 3] = [
    ("Autumn Spice", ["#B7410E", "#CC7722", "#DAA520", "#808000", "#8B4513"]),
    ("Autumn Earth", ["#A0522D", "#6B8E23", "#556B2F", "#CD853F", "#D2691E"]),
    ("Autumn Neutrals", ["#F5F5DC", "#D2B48C", "#A67B5B", "#6F4E37", "#3D2B1F"]),
];

const WINTER: [FixedPalette; 3] = [
    ("Winter Jewels", ["#0F52BA", "#50C878", "#E0115F", "#9966CC", "#008080"]),
    ("Winter Icy", ["#F0FFFF", "#E0FFFF", "#E6E6FA", "#F8F8FF", "#DCDCDC"]),
    ("Winter Neutrals", ["#FFFFFF", "#D3D3D3", "#808080", "#36454F", "#000000"]),
];

fn fixed(entry: &FixedPalette) -> Palette {
    let (name, hexes) = *entry;
    Palette::new(name, hexes.map(String::from))
}

/// The three fixed palettes of a season family.
pub fn family_palettes(family: Family) -> [Palette; 3] {
    let table = match family {
        Family::Spring => &SPRING,
        Family::Summer => &SUMMER,
        Family::Autumn => &AUTUMN,
        Family::Winter => &WINTER,
    };
    [fixed(&table[0]), fixed(&table[1]), fixed(&table[2])]
}

/// Fixed-hue temperature palette for the undertone.
pub fn undertone_palette(undertone: Undertone) -> Palette {
    match undertone {
        Undertone::Warm => hsv_palette(
            "Warm Tones",
            [(12.0, 0.60, 0.88), (25.0, 0.65, 0.82), (35.0, 0.70, 0.75), (45.0, 0.60, 0.78), (55.0, 0.50, 0.80)],
        ),
        Undertone::Cool => hsv_palette(
            "Cool Tones",
            [(200.0, 0.45, 0.80), (230.0, 0.50, 0.75), (260.0, 0.48, 0.72), (290.0, 0.42, 0.78), (320.0, 0.38, 0.82)],
        ),
        Undertone::Neutral => hsv_palette(
            "Balanced Tones",
            [(20.0, 0.25, 0.80), (180.0, 0.20, 0.70), (340.0, 0.22, 0.78), (90.0, 0.18, 0.68), (250.0, 0.20, 0.72)],
        ),
    }
}

/// Earth tones for warm undertones, jewel tones for everyone else.
pub fn accent_palette(undertone: Undertone) -> Palette {
    if undertone.is_warm() {
        hsv_palette(
            "Earth Tones",
            [(10.0, 0.55, 0.58), (22.0, 0.60, 0.62), (35.0, 0.55, 0.55), (75.0, 0.48, 0.45), (50.0, 0.45, 0.68)],
        )
    } else {
        hsv_palette(
            "Jewel Tones",
            [(215.0, 0.82, 0.50), (155.0, 0.78, 0.40), (350.0, 0.80, 0.52), (275.0, 0.72, 0.48), (185.0, 0.76, 0.42)],
        )
    }
}

/// Hue fan around `h` at a lightness matching `depth`.
pub fn depth_palette(h: f32, depth: Depth) -> Palette {
    match depth {
        Depth::Light => hue_fan(
            "Light & Pastel",
            h,
            [(0.22, 0.94), (0.25, 0.92), (0.28, 0.96), (0.25, 0.93), (0.22, 0.95)],
        ),
        Depth::Medium => hue_fan(
            "Mid-Tone Classics",
            h,
            [(0.45, 0.66), (0.48, 0.62), (0.50, 0.64), (0.48, 0.60), (0.45, 0.68)],
        ),
        Depth::Deep => hue_fan(
            "Deep & Rich",
            h,
            [(0.68, 0.35), (0.72, 0.42), (0.75, 0.38), (0.70, 0.45), (0.65, 0.32)],
        ),
    }
}

pub fn contrast_palette(contrast: ContrastLevel) -> Palette {
    let entry: FixedPalette = match contrast {
        ContrastLevel::High => ("High Contrast", ["#000000", "#FFFFFF", "#C8102E", "#002868", "#FFD100"]),
        ContrastLevel::Medium => ("Medium Contrast", ["#2F4F4F", "#F5F5DC", "#8B4513", "#4682B4", "#DAA520"]),
        ContrastLevel::Low => ("Low Contrast", ["#D8CFC4", "#BFB5A8", "#A89F91", "#C9B8A8", "#E6DDD3"]),
    };
    fixed(&entry)
}

pub fn intensity_palette(h: f32, intensity: IntensityLevel) -> Palette {
    match intensity {
        IntensityLevel::Bright => hue_fan(
            "Clear & Vivid",
            h,
            [(0.80, 0.85), (0.85, 0.88), (0.88, 0.90), (0.82, 0.87), (0.78, 0.84)],
        ),
        IntensityLevel::Soft => hue_fan(
            "Muted & Soft",
            h,
            [(0.18, 0.65), (0.20, 0.60), (0.22, 0.68), (0.20, 0.63), (0.18, 0.70)],
        ),
    }
}

/// Near-grey ramp tinted with the base hue, light to dark.
pub fn neutral_harmony(base: Hsv) -> Palette {
    let h = base.h;
    Palette::new(
        "Neutral Harmony",
        [
            swatch(h, 0.04, 0.96),
            swatch(h, 0.07, 0.78),
            swatch(h, 0.09, 0.56),
            swatch(h, 0.11, 0.32),
            swatch(h, 0.13, 0.12),
        ],
    )
}

fn hsv_palette(name: &'static str, hsv: [(f32, f32, f32); 5]) -> Palette {
    Palette::new(name, hsv.map(|(h, s, v)| swatch(h, s, v)))
}
