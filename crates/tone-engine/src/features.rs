//! Contrast and intensity analysis.

use std::fmt;

use crate::color::{Hsv, Rgb};

/// Luminance contrast between skin, eyes and hair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    Low,
    Medium,
    High,
}

impl ContrastLevel {
    /// Level for a mean pairwise luminance difference (0..=255 scale).
    pub fn from_luminance_delta(delta: f32) -> Self {
        if delta > 70.0 {
            ContrastLevel::High
        } else if delta > 40.0 {
            ContrastLevel::Medium
        } else {
            ContrastLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Low => "Low",
            ContrastLevel::Medium => "Medium",
            ContrastLevel::High => "High",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether overall coloring reads as high-chroma or muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntensityLevel {
    Bright,
    Soft,
}

impl IntensityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IntensityLevel::Bright => "Bright",
            IntensityLevel::Soft => "Soft",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived coloring features of one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    pub contrast: ContrastLevel,
    pub intensity: IntensityLevel,
    /// Mean saturation in `[0, 1]`.
    pub saturation: f32,
    /// Mean value in `[0, 1]`.
    pub brightness: f32,
}

impl Default for FeatureSet {
    /// Medium contrast and soft intensity. Saturation sits below the clear
    /// threshold so it does not decide clarity on its own.
    fn default() -> Self {
        Self {
            contrast: ContrastLevel::Medium,
            intensity: IntensityLevel::Soft,
            saturation: 0.3,
            brightness: 0.5,
        }
    }
}

/// Absolute Rec. 709 luminance difference between two colors.
pub fn luminance_delta(a: Rgb, b: Rgb) -> f32 {
    let dr = f32::from(a.r) - f32::from(b.r);
    let dg = f32::from(a.g) - f32::from(b.g);
    let db = f32::from(a.b) - f32::from(b.b);
    (0.2126 * dr + 0.7152 * dg + 0.0722 * db).abs()
}

/// Full analysis from skin, eye and hair colors.
///
/// # Example
///
/// ```
/// use tone_engine::{analyze_features, ContrastLevel, Rgb};
///
/// let f = analyze_features(
///     Rgb::new(235, 200, 180),
///     Rgb::new(60, 40, 30),
///     Rgb::new(20, 15, 10),
/// );
/// assert_eq!(f.contrast, ContrastLevel::High);
/// ```
pub fn analyze_features(skin: Rgb, eye: Rgb, hair: Rgb) -> FeatureSet {
    let delta = (luminance_delta(skin, eye) + luminance_delta(skin, hair) + luminance_delta(eye, hair)) / 3.0;

    let (s, e, h) = (Hsv::from(skin), Hsv::from(eye), Hsv::from(hair));
    let saturation = (s.s + e.s + h.s) / 3.0;
    let brightness = (s.v + e.v + h.v) / 3.0;

    FeatureSet {
        contrast: ContrastLevel::from_luminance_delta(delta),
        intensity: intensity_for(saturation, brightness > 0.6),
        saturation,
        brightness,
    }
}

/// Reduced analysis when only the skin color is known.
///
/// Contrast cannot be measured and defaults to medium. Intensity follows
/// skin saturation alone.
pub fn analyze_skin_only(skin: Rgb) -> FeatureSet {
    let hsv = Hsv::from(skin);
    FeatureSet {
        contrast: ContrastLevel::Medium,
        intensity: intensity_for(hsv.s, true),
        saturation: hsv.s,
        brightness: hsv.v,
    }
}

#[inline]
fn intensity_for(saturation: f32, bright_enough: bool) -> IntensityLevel {
    if saturation > 0.4 && bright_enough {
        IntensityLevel::Bright
    } else {
        IntensityLevel::Soft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_thresholds() {
        assert_eq!(ContrastLevel::from_luminance_delta(70.5), ContrastLevel::High);
        assert_eq!(ContrastLevel::from_luminance_delta(70.0), ContrastLevel::Medium);
        assert_eq!(ContrastLevel::from_luminance_delta(40.5), ContrastLevel::Medium);
        assert_eq!(ContrastLevel::from_luminance_delta(40.0), ContrastLevel::Low);
        assert_eq!(ContrastLevel::from_luminance_delta(0.0), ContrastLevel::Low);
    }

    #[test]
    fn test_luminance_delta_is_symmetric() {
        let a = Rgb::new(200, 150, 120);
        let b = Rgb::new(40, 30, 20);
        assert_eq!(luminance_delta(a, b), luminance_delta(b, a));
        assert_eq!(luminance_delta(a, a), 0.0);
    }

    #[test]
    fn test_same_colors_are_low_contrast() {
        let c = Rgb::new(200, 160, 140);
        let f = analyze_features(c, c, c);
        assert_eq!(f.contrast, ContrastLevel::Low);
        assert_eq!(f.saturation, Hsv::from(c).s);
    }

    #[test]
    fn test_intensity_needs_saturation_and_value() {
        // Saturated and bright
        let vivid = Rgb::new(240, 120, 60);
        assert_eq!(analyze_features(vivid, vivid, vivid).intensity, IntensityLevel::Bright);

        // Saturated but dark
        let dark = Rgb::new(100, 40, 20);
        assert_eq!(analyze_features(dark, dark, dark).intensity, IntensityLevel::Soft);

        // Bright but muted
        let muted = Rgb::new(230, 210, 200);
        assert_eq!(analyze_features(muted, muted, muted).intensity, IntensityLevel::Soft);
    }

    #[test]
    fn test_skin_only_variant() {
        let f = analyze_skin_only(Rgb::new(230, 190, 170));
        assert_eq!(f.contrast, ContrastLevel::Medium);
        assert_eq!(f.intensity, IntensityLevel::Soft);

        // Saturation alone decides, even when dark
        let f = analyze_skin_only(Rgb::new(100, 40, 20));
        assert_eq!(f.intensity, IntensityLevel::Bright);
    }

    #[test]
    fn test_display() {
        assert_eq!(ContrastLevel::High.to_string(), "High");
        assert_eq!(IntensityLevel::Soft.to_string(), "Soft");
    }
}
