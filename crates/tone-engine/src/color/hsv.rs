//! HSV color type and hue arithmetic
//!
//! Hue is in degrees, `[0, 360)`. Saturation and value are in `[0, 1]`.
//! Conversions clamp out-of-range saturation/value and wrap out-of-range hue,
//! so every `Hsv` converts to some valid [`Rgb`].

use super::rgb::Rgb;

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`
    pub h: f32,
    /// Saturation, `[0, 1]`
    pub s: f32,
    /// Value, `[0, 1]`
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color. Values are stored as given; conversion clamps.
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Return a copy with hue wrapped into `[0, 360)` and saturation/value
    /// clamped into `[0, 1]`.
    pub fn normalized(self) -> Self {
        Self {
            h: rotate_hue(self.h, 0.0),
            s: clamp_unit(self.s),
            v: clamp_unit(self.v),
        }
    }

    /// Convert to 8-bit RGB, rounding each channel.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self.normalized();

        let c = v * s;
        let h6 = h / 60.0;
        let sector = h6.floor() as u32;
        let frac = h6 - sector as f32;
        let x = if sector & 1 == 0 {
            c * frac
        } else {
            c * (1.0 - frac)
        };
        let m = v - c;

        let (r1, g1, b1) = match sector {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
    }

    /// Format as `#RRGGBB` after clamping.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max > 0.0 { delta / max } else { 0.0 };

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        Self {
            h: rotate_hue(h * 60.0, 0.0),
            s,
            v: max,
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Circular distance between two hues, in `[0, 180]`.
///
/// # Example
/// ```
/// use tone_engine::hue_distance;
/// assert_eq!(hue_distance(10.0, 350.0), 20.0);
/// assert_eq!(hue_distance(90.0, 90.0), 0.0);
/// ```
pub fn hue_distance(h1: f32, h2: f32) -> f32 {
    let d = (rotate_hue(h1, 0.0) - rotate_hue(h2, 0.0)).abs();
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Rotate a hue by `degrees`, wrapping into `[0, 360)`.
///
/// # Example
/// ```
/// use tone_engine::rotate_hue;
/// assert_eq!(rotate_hue(350.0, 30.0), 20.0);
/// assert_eq!(rotate_hue(20.0, -60.0), 320.0);
/// ```
pub fn rotate_hue(h: f32, degrees: f32) -> f32 {
    let r = (h + degrees).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 || r.is_nan() {
        0.0
    } else {
        r
    }
}

#[inline]
fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[inline]
fn to_channel(x: f32) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
