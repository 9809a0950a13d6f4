//! Palette generation.
//!
//! A palette set always has fifteen entries in a fixed order:
//!
//! | # | Palette | Driven by |
//! |---|---------|-----------|
//! | 1-6 | Monochromatic, Analogous, Complementary, Triadic, Split-Complementary, Tetradic | base hue, saturation, value |
//! | 7-9 | three fixed palettes of the season family | season |
//! | 10 | Warm Tones / Cool Tones / Balanced Tones | undertone |
//! | 11 | Earth Tones / Jewel Tones | undertone |
//! | 12 | Light & Pastel / Mid-Tone Classics / Deep & Rich | depth |
//! | 13 | High / Medium / Low Contrast | contrast |
//! | 14 | Clear & Vivid / Muted & Soft | intensity |
//! | 15 | Neutral Harmony | base hue |
//!
//! Generation has no hidden state: identical input yields identical output.
//!
//! # Example
//!
//! ```
//! use tone_engine::{classify, generate_palettes, FeatureSet, Hsv, Rgb};
//!
//! let skin = Rgb::new(230, 190, 170);
//! let features = FeatureSet::default();
//! let result = classify(skin, &features);
//!
//! let palettes = generate_palettes(Hsv::from(skin), &result, &features);
//! assert_eq!(palettes.len(), 15);
//! assert_eq!(palettes[0].name, "Monochromatic");
//! assert_eq!(palettes[6].name, "Spring Brights");
//! ```

mod seasonal;
mod theory;

pub use seasonal::{
    accent_palette, contrast_palette, depth_palette, family_palettes, intensity_palette, neutral_harmony,
    undertone_palette,
};
pub use theory::{analogous, complementary, monochromatic, split_complementary, tetradic, triadic};

use crate::classify::ClassificationResult;
use crate::color::Hsv;
use crate::features::FeatureSet;

/// Number of palettes in a full set.
pub const PALETTE_COUNT: usize = 15;

/// A named five-color swatch row. Colors are `#RRGGBB`, upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [String; 5],
}

impl Palette {
    pub fn new(name: &'static str, colors: [String; 5]) -> Self {
        Self { name, colors }
    }
}

/// Hex for an HSV triple with saturation and value clamped to `[0, 1]`.
#[inline]
pub(crate) fn swatch(h: f32, s: f32, v: f32) -> String {
    Hsv::new(h, s, v).normalized().to_hex()
}

/// Generate the full ordered palette set.
pub fn generate_palettes(base: Hsv, classification: &ClassificationResult, features: &FeatureSet) -> Vec<Palette> {
    let base = base.normalized();
    let mut palettes = Vec::with_capacity(PALETTE_COUNT);

    palettes.push(monochromatic(base));
    palettes.push(analogous(base));
    palettes.push(complementary(base));
    palettes.push(triadic(base));
    palettes.push(split_complementary(base));
    palettes.push(tetradic(base));

    palettes.extend(family_palettes(classification.family()));
    palettes.push(undertone_palette(classification.undertone));
    palettes.push(accent_palette(classification.undertone));
    palettes.push(depth_palette(base.h, classification.depth));
    palettes.push(contrast_palette(features.contrast));
    palettes.push(intensity_palette(base.h, features.intensity));
    palettes.push(neutral_harmony(base));

    debug_assert_eq!(palettes.len(), PALETTE_COUNT);
    palettes
}
