//! Undertone rule table.

use std::fmt;

use crate::color::Rgb;

/// Coarse undertone of a skin color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl Undertone {
    pub fn as_str(self) -> &'static str {
        match self {
            Undertone::Warm => "Warm",
            Undertone::Cool => "Cool",
            Undertone::Neutral => "Neutral",
        }
    }

    #[inline]
    pub fn is_warm(self) -> bool {
        self == Undertone::Warm
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed channel differences the undertone bands are defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelDiffs {
    /// R - G
    pub rg: i32,
    /// G - B
    pub gb: i32,
    /// R - B
    pub rb: i32,
}

impl From<Rgb> for ChannelDiffs {
    fn from(c: Rgb) -> Self {
        let (r, g, b) = (i32::from(c.r), i32::from(c.g), i32::from(c.b));
        Self {
            rg: r - g,
            gb: g - b,
            rb: r - b,
        }
    }
}

/// One band of the undertone cascade.
#[derive(Debug, Clone, Copy)]
pub struct UndertoneRule {
    pub band: &'static str,
    pub matches: fn(ChannelDiffs) -> bool,
    pub undertone: Undertone,
    pub detail: &'static str,
}

/// Undertone bands, strongest warm first. Evaluated top to bottom; the first
/// match wins. Later bands overlap earlier ones, so order is significant.
/// The last band always matches.
pub static UNDERTONE_RULES: &[UndertoneRule] = &[
    UndertoneRule {
        band: "golden-intense",
        matches: |d| d.rg > 40 && d.rb > 60,
        undertone: Undertone::Warm,
        detail: "Golden (intense)",
    },
    UndertoneRule {
        band: "golden-medium",
        matches: |d| d.rg > 30 && d.rb > 45,
        undertone: Undertone::Warm,
        detail: "Golden (medium)",
    },
    UndertoneRule {
        band: "golden-mild",
        matches: |d| d.rg > 20 && d.rb > 25,
        undertone: Undertone::Warm,
        detail: "Golden (mild)",
    },
    UndertoneRule {
        band: "rosy-intense",
        matches: |d| d.gb > 25 && d.rb < 5,
        undertone: Undertone::Cool,
        detail: "Rosy (intense)",
    },
    UndertoneRule {
        band: "rosy-medium",
        matches: |d| d.gb > 20 && d.rb < 10,
        undertone: Undertone::Cool,
        detail: "Rosy (medium)",
    },
    UndertoneRule {
        band: "rosy-mild",
        matches: |d| d.gb > 15 && d.rb < 15,
        undertone: Undertone::Cool,
        detail: "Rosy (mild)",
    },
    UndertoneRule {
        band: "neutral",
        matches: |d| d.rg.abs() < 12 && d.gb.abs() < 12 && d.rb.abs() < 20,
        undertone: Undertone::Neutral,
        detail: "Neutral",
    },
    UndertoneRule {
        band: "peach",
        matches: |d| d.rg > 10 && d.rb > 15 && d.gb < 5,
        undertone: Undertone::Warm,
        detail: "Peach",
    },
    UndertoneRule {
        band: "olive",
        matches: |d| d.gb >= 10 && d.rg <= 20,
        undertone: Undertone::Warm,
        detail: "Olive",
    },
    UndertoneRule {
        band: "neutral-mild",
        matches: |_| true,
        undertone: Undertone::Neutral,
        detail: "Neutral (mild)",
    },
];

/// First matching rule for `color`.
pub fn undertone_rule(color: Rgb) -> &'static UndertoneRule {
    let diffs = ChannelDiffs::from(color);
    let last = &UNDERTONE_RULES[UNDERTONE_RULES.len() - 1];
    UNDERTONE_RULES
        .iter()
        .find(|rule| (rule.matches)(diffs))
        .unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(r: u8, g: u8, b: u8) -> &'static str {
        undertone_rule(Rgb::new(r, g, b)).detail
    }

    #[test]
    fn test_each_band_is_reachable() {
        assert_eq!(detail(230, 180, 150), "Golden (intense)");
        assert_eq!(detail(230, 190, 170), "Golden (medium)");
        assert_eq!(detail(220, 195, 190), "Golden (mild)");
        assert_eq!(detail(180, 206, 178), "Rosy (intense)");
        assert_eq!(detail(180, 195, 173), "Rosy (medium)");
        assert_eq!(detail(180, 190, 168), "Rosy (mild)");
        assert_eq!(detail(200, 195, 190), "Neutral");
        assert_eq!(detail(215, 200, 198), "Peach");
        assert_eq!(detail(190, 190, 170), "Olive");
        assert_eq!(detail(150, 170, 180), "Neutral (mild)");
    }

    #[test]
    fn test_earlier_band_wins_overlap() {
        // Satisfies golden-mild and peach; golden-mild is listed first
        let c = Rgb::new(230, 205, 202);
        let d = ChannelDiffs::from(c);
        assert!(d.rg > 20 && d.rb > 25);
        assert!(d.rg > 10 && d.rb > 15 && d.gb < 5);
        assert_eq!(undertone_rule(c).detail, "Golden (mild)");
    }

    #[test]
    fn test_table_is_total() {
        let fallback = UNDERTONE_RULES[UNDERTONE_RULES.len() - 1];
        assert!((fallback.matches)(ChannelDiffs {
            rg: -255,
            gb: -255,
            rb: -255,
        }));
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let rule = undertone_rule(Rgb::new(r as u8, g as u8, b as u8));
                    assert!(!rule.detail.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_coarse_labels() {
        assert_eq!(undertone_rule(Rgb::new(230, 180, 150)).undertone, Undertone::Warm);
        assert_eq!(undertone_rule(Rgb::new(180, 206, 178)).undertone, Undertone::Cool);
        assert_eq!(undertone_rule(Rgb::new(200, 195, 190)).undertone, Undertone::Neutral);
        assert_eq!(Undertone::Warm.to_string(), "Warm");
    }
}
