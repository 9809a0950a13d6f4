//! Twelve-season rule table.

use std::fmt;

use super::undertone::Undertone;
use crate::features::{FeatureSet, IntensityLevel};

/// Warm or cool axis. Neutral undertones fall on the cool side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Warm,
    Cool,
}

impl From<Undertone> for Temperature {
    fn from(u: Undertone) -> Self {
        match u {
            Undertone::Warm => Temperature::Warm,
            Undertone::Cool | Undertone::Neutral => Temperature::Cool,
        }
    }
}

/// Light/dark axis from HSV value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

impl Depth {
    pub fn from_value(value: f32) -> Self {
        if value > 0.6 {
            Depth::Light
        } else if value < 0.4 {
            Depth::Deep
        } else {
            Depth::Medium
        }
    }
}

/// Clear/soft axis from saturation and intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clarity {
    Clear,
    Soft,
}

impl Clarity {
    pub fn from_features(saturation: f32, intensity: IntensityLevel) -> Self {
        if saturation > 0.45 || intensity == IntensityLevel::Bright {
            Clarity::Clear
        } else {
            // Anything not clear is soft, the 0.35..=0.45 band included
            Clarity::Soft
        }
    }
}

macro_rules! axis_display {
    ($($ty:ty { $($variant:ident),+ })+) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self { $(Self::$variant => stringify!($variant)),+ })
            }
        }
    )+};
}

axis_display! {
    Temperature { Warm, Cool }
    Depth { Light, Medium, Deep }
    Clarity { Clear, Soft }
}

/// Season family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Spring => "Spring",
            Family::Summer => "Summer",
            Family::Autumn => "Autumn",
            Family::Winter => "Winter",
        }
    }

    /// Lower-case category key.
    pub fn key(self) -> &'static str {
        match self {
            Family::Spring => "spring",
            Family::Summer => "summer",
            Family::Autumn => "autumn",
            Family::Winter => "winter",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the twelve seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    BrightSpring,
    LightSpring,
    WarmSpring,
    LightSummer,
    CoolSummer,
    SoftSummer,
    SoftAutumn,
    WarmAutumn,
    DeepAutumn,
    BrightWinter,
    CoolWinter,
    DeepWinter,
}

impl Season {
    pub const ALL: [Season; 12] = [
        Season::BrightSpring,
        Season::LightSpring,
        Season::WarmSpring,
        Season::LightSummer,
        Season::CoolSummer,
        Season::SoftSummer,
        Season::SoftAutumn,
        Season::WarmAutumn,
        Season::DeepAutumn,
        Season::BrightWinter,
        Season::CoolWinter,
        Season::DeepWinter,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Season::BrightSpring => "BSP",
            Season::LightSpring => "LSP",
            Season::WarmSpring => "WSP",
            Season::LightSummer => "LSU",
            Season::CoolSummer => "CSU",
            Season::SoftSummer => "SSU",
            Season::SoftAutumn => "SAU",
            Season::WarmAutumn => "WAU",
            Season::DeepAutumn => "DAU",
            Season::BrightWinter => "BWI",
            Season::CoolWinter => "CWI",
            Season::DeepWinter => "DWI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::BrightSpring => "Bright Spring",
            Season::LightSpring => "Light Spring",
            Season::WarmSpring => "Warm Spring",
            Season::LightSummer => "Light Summer",
            Season::CoolSummer => "Cool Summer",
            Season::SoftSummer => "Soft Summer",
            Season::SoftAutumn => "Soft Autumn",
            Season::WarmAutumn => "Warm Autumn",
            Season::DeepAutumn => "Deep Autumn",
            Season::BrightWinter => "Bright Winter",
            Season::CoolWinter => "Cool Winter",
            Season::DeepWinter => "Deep Winter",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Season::BrightSpring | Season::LightSpring | Season::WarmSpring => Family::Spring,
            Season::LightSummer | Season::CoolSummer | Season::SoftSummer => Family::Summer,
            Season::SoftAutumn | Season::WarmAutumn | Season::DeepAutumn => Family::Autumn,
            Season::BrightWinter | Season::CoolWinter | Season::DeepWinter => Family::Winter,
        }
    }

    /// Look a season up by its short code.
    pub fn from_code(code: &str) -> Option<Season> {
        Season::ALL.into_iter().find(|s| s.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell of the season table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRule {
    pub temperature: Temperature,
    pub depth: Depth,
    pub clarity: Clarity,
    pub season: Season,
}

const fn rule(temperature: Temperature, depth: Depth, clarity: Clarity, season: Season) -> SeasonRule {
    SeasonRule {
        temperature,
        depth,
        clarity,
        season,
    }
}

/// Every axis combination mapped to exactly one season.
pub static SEASON_RULES: [SeasonRule; 12] = {
    use Clarity::*;
    use Depth::*;
    use Temperature::*;
    [
        rule(Warm, Light, Clear, Season::BrightSpring),
        rule(Warm, Light, Soft, Season::LightSpring),
        rule(Warm, Medium, Clear, Season::WarmSpring),
        rule(Warm, Medium, Soft, Season::SoftAutumn),
        rule(Warm, Deep, Clear, Season::WarmAutumn),
        rule(Warm, Deep, Soft, Season::DeepAutumn),
        rule(Cool, Light, Clear, Season::BrightWinter),
        rule(Cool, Light, Soft, Season::LightSummer),
        rule(Cool, Medium, Clear, Season::CoolSummer),
        rule(Cool, Medium, Soft, Season::SoftSummer),
        rule(Cool, Deep, Clear, Season::CoolWinter),
        rule(Cool, Deep, Soft, Season::DeepWinter),
    ]
};

/// The table cell for a set of axes.
pub fn season_rule(temperature: Temperature, depth: Depth, clarity: Clarity) -> &'static SeasonRule {
    let index = match temperature {
        Temperature::Warm => 0,
        Temperature::Cool => 6,
    } + match depth {
        Depth::Light => 0,
        Depth::Medium => 2,
        Depth::Deep => 4,
    } + match clarity {
        Clarity::Clear => 0,
        Clarity::Soft => 1,
    };
    &SEASON_RULES[index]
}

/// Resolve the three axes for `undertone`, HSV value and features.
pub fn season_axes(undertone: Undertone, value: f32, features: &FeatureSet) -> (Temperature, Depth, Clarity) {
    (
        Temperature::from(undertone),
        Depth::from_value(value),
        Clarity::from_features(features.saturation, features.intensity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_index_matches_table_axes() {
        for rule in SEASON_RULES.iter() {
            let found = season_rule(rule.temperature, rule.depth, rule.clarity);
            assert_eq!(found, rule);
        }
    }

    #[test]
    fn test_table_covers_every_season_once() {
        let mut seen: Vec<Season> = SEASON_RULES.iter().map(|r| r.season).collect();
        seen.sort_by_key(|s| s.code());
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_depth_bands() {
        assert_eq!(Depth::from_value(0.61), Depth::Light);
        assert_eq!(Depth::from_value(0.6), Depth::Medium);
        assert_eq!(Depth::from_value(0.4), Depth::Medium);
        assert_eq!(Depth::from_value(0.39), Depth::Deep);
    }

    #[test]
    fn test_clarity_bands() {
        assert_eq!(Clarity::from_features(0.5, IntensityLevel::Soft), Clarity::Clear);
        assert_eq!(Clarity::from_features(0.2, IntensityLevel::Bright), Clarity::Clear);
        assert_eq!(Clarity::from_features(0.40, IntensityLevel::Soft), Clarity::Soft);
        assert_eq!(Clarity::from_features(0.2, IntensityLevel::Soft), Clarity::Soft);
    }

    #[test]
    fn test_neutral_is_cool() {
        assert_eq!(Temperature::from(Undertone::Neutral), Temperature::Cool);
        assert_eq!(Temperature::from(Undertone::Warm), Temperature::Warm);
    }

    #[test]
    fn test_codes_and_families() {
        assert_eq!(Season::from_code("lsp"), Some(Season::LightSpring));
        assert_eq!(Season::from_code("XYZ"), None);
        assert_eq!(Season::SoftAutumn.family(), Family::Autumn);
        assert_eq!(Season::BrightWinter.family().key(), "winter");
        for s in Season::ALL {
            assert!(s.name().ends_with(s.family().name()));
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Temperature::Warm.to_string(), "Warm");
        assert_eq!(Depth::Medium.to_string(), "Medium");
        assert_eq!(Clarity::Soft.to_string(), "Soft");
    }
}
