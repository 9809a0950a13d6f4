//! Undertone and seasonal classification.
//!
//! Both decisions are expressed as static rule tables rather than inline
//! branching: [`UNDERTONE_RULES`] is an ordered cascade where the first match
//! wins, and [`SEASON_RULES`] is a full cross of three axes so that every
//! input lands in exactly one cell.
//!
//! # Example
//!
//! ```
//! use tone_engine::{classify, FeatureSet, Rgb, Season, Undertone};
//!
//! let result = classify(Rgb::new(230, 190, 170), &FeatureSet::default());
//! assert_eq!(result.undertone, Undertone::Warm);
//! assert_eq!(result.season, Season::LightSpring);
//! assert_eq!(result.season_full(), "Light Spring (Warm · Light · Soft)");
//! ```

mod season;
mod undertone;

pub use season::{
    season_axes, season_rule, Clarity, Depth, Family, Season, SeasonRule, Temperature, SEASON_RULES,
};
pub use undertone::{undertone_rule, ChannelDiffs, Undertone, UndertoneRule, UNDERTONE_RULES};

use crate::color::{Hsv, Rgb};
use crate::features::FeatureSet;

/// Outcome of classifying one skin color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    pub undertone: Undertone,
    pub undertone_detail: &'static str,
    pub season: Season,
    pub temperature: Temperature,
    pub depth: Depth,
    pub clarity: Clarity,
}

impl ClassificationResult {
    /// Display name followed by the three axes.
    pub fn season_full(&self) -> String {
        format!(
            "{} ({} · {} · {})",
            self.season.name(),
            self.temperature,
            self.depth,
            self.clarity
        )
    }

    /// Lower-case family key, e.g. `"spring"`.
    #[inline]
    pub fn season_category(&self) -> &'static str {
        self.season.family().key()
    }

    #[inline]
    pub fn family(&self) -> Family {
        self.season.family()
    }
}

/// Classify a skin color. Total: every input maps to exactly one result.
///
/// Depth is taken from the value of `color` itself; clarity from the
/// saturation and intensity in `features`.
pub fn classify(color: Rgb, features: &FeatureSet) -> ClassificationResult {
    let tone = undertone_rule(color);
    let hsv = Hsv::from(color);
    let (temperature, depth, clarity) = season_axes(tone.undertone, hsv.v, features);
    let rule = season_rule(temperature, depth, clarity);

    ClassificationResult {
        undertone: tone.undertone,
        undertone_detail: tone.detail,
        season: rule.season,
        temperature,
        depth,
        clarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{analyze_skin_only, ContrastLevel, IntensityLevel};
    use pretty_assertions::assert_eq;

    fn features(saturation: f32, intensity: IntensityLevel) -> FeatureSet {
        FeatureSet {
            contrast: ContrastLevel::Medium,
            intensity,
            saturation,
            brightness: 0.5,
        }
    }

    #[test]
    fn test_light_warm_soft_is_light_spring() {
        let color = Rgb::new(230, 190, 170);
        let result = classify(color, &analyze_skin_only(color));
        assert_eq!(result.undertone_detail, "Golden (medium)");
        assert_eq!(result.season, Season::LightSpring);
        assert_eq!(result.season_category(), "spring");
    }

    #[test]
    fn test_neutral_goes_cool() {
        let result = classify(Rgb::new(200, 195, 190), &features(0.2, IntensityLevel::Soft));
        assert_eq!(result.undertone, Undertone::Neutral);
        assert_eq!(result.temperature, Temperature::Cool);
        assert_eq!(result.season, Season::LightSummer);
    }

    #[test]
    fn test_bright_intensity_makes_clear() {
        let result = classify(Rgb::new(230, 190, 170), &features(0.2, IntensityLevel::Bright));
        assert_eq!(result.season, Season::BrightSpring);
    }

    #[test]
    fn test_deep_and_medium_depths() {
        // v = 0.35
        let deep = classify(Rgb::new(90, 60, 40), &features(0.2, IntensityLevel::Soft));
        assert_eq!(deep.depth, Depth::Deep);
        assert_eq!(deep.season, Season::DeepAutumn);

        // v = 0.5, cool rosy
        let mid = classify(Rgb::new(110, 128, 105), &features(0.5, IntensityLevel::Soft));
        assert_eq!(mid.undertone, Undertone::Cool);
        assert_eq!(mid.season, Season::CoolSummer);
    }

    #[test]
    fn test_season_full_format() {
        let result = classify(Rgb::new(90, 60, 40), &features(0.6, IntensityLevel::Soft));
        assert_eq!(result.season, Season::WarmAutumn);
        assert_eq!(result.season_full(), "Warm Autumn (Warm · Deep · Clear)");
    }

    #[test]
    fn test_classification_is_total_and_consistent() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let color = Rgb::new(r as u8, g as u8, b as u8);
                    let result = classify(color, &analyze_skin_only(color));
                    assert_eq!(result.family(), result.season.family());
                    let rule = season_rule(result.temperature, result.depth, result.clarity);
                    assert_eq!(rule.season, result.season);
                }
            }
        }
    }
}
