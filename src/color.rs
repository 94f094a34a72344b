//! Color value types and conversions between RGB, HSL, and HSV.
//!
//! All hue-like components are normalized to `[0, 1]` as a fraction of a full
//! turn, not degrees. The conversions are pure and deterministic; round trips
//! through HSL or HSV reproduce the starting channels within ±1 after
//! rounding.
//!
//! # Examples
//!
//! ```
//! use colorcontrast::color::Rgb;
//!
//! let gray = Rgb::new(128, 128, 128);
//! let hsl = gray.to_hsl();
//! assert_eq!(hsl.saturation, 0.0); // achromatic
//!
//! let (r, g, b) = hsl.to_rgb();
//! assert_eq!(r.round() as u8, 128);
//! # let _ = (g, b);
//! ```

use std::fmt;

/// RGB color with channel values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns CSS-style rgb format `rgb(r,g,b)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// Returns normalized channels as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Convert to HSL (Hue, Saturation, Lightness).
    ///
    /// Lightness is the midpoint of the channel extremes. An achromatic color
    /// (all channels equal) has hue and saturation 0.
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = f64::midpoint(max, min);

        if (max - min).abs() < f64::EPSILON {
            return Hsl::new(0.0, 0.0, lightness);
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = hue_sector(r, g, b, max, delta) / 6.0;

        Hsl::new(hue, saturation, lightness)
    }

    /// Convert to HSV (Hue, Saturation, Value).
    ///
    /// Value is the channel maximum; saturation is 0 for black.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max.abs() < f64::EPSILON {
            0.0
        } else {
            delta / max
        };
        let hue = if delta.abs() < f64::EPSILON {
            0.0
        } else {
            hue_sector(r, g, b, max, delta) / 6.0
        };

        Hsv::new(hue, saturation, max)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Six-sector hue in 0.0-6.0, shared by the HSL and HSV conversions.
fn hue_sector(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + (if g < b { 6.0 } else { 0.0 })
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    }
}

/// HSL color with hue, saturation, and lightness each in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL color. Components are expected in 0.0-1.0.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to RGB.
    ///
    /// Channels are returned as floats already scaled to 0.0-255.0, not
    /// rounded: the border deriver takes the ceiling, other callers round.
    #[must_use]
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        if self.saturation.abs() < f64::EPSILON {
            // achromatic
            let level = self.lightness * 255.0;
            return (level, level, level);
        }

        let q = if self.lightness < 0.5 {
            self.lightness * (1.0 + self.saturation)
        } else {
            self.lightness + self.saturation - self.lightness * self.saturation
        };
        let p = 2.0 * self.lightness - q;

        (
            hue_to_channel(p, q, self.hue + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, self.hue) * 255.0,
            hue_to_channel(p, q, self.hue - 1.0 / 3.0) * 255.0,
        )
    }

    /// Reduce lightness by `amount` of its current value (multiplicative,
    /// not additive), keeping hue and saturation.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        Self {
            lightness: self.lightness - self.lightness * amount,
            ..*self
        }
    }
}

/// Hue interpolation helper for HSL→RGB, with `t` wrapped into `[0, 1)`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSV color with hue, saturation, and value each in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Create a new HSV color. Components are expected in 0.0-1.0.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert to RGB.
    ///
    /// Channels are returned as floats already scaled to 0.0-255.0.
    #[must_use]
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        let scaled = self.hue * 6.0;
        let f = scaled - scaled.floor();
        let v = self.value;
        let p = v * (1.0 - self.saturation);
        let q = v * (1.0 - f * self.saturation);
        let t = v * (1.0 - (1.0 - f) * self.saturation);

        #[expect(
            clippy::cast_possible_truncation,
            reason = "hue in [0,1] puts the sector index in a small integer range"
        )]
        let sector = (scaled.floor() as i64).rem_euclid(6);
        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        (r * 255.0, g * 255.0, b * 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to 0-255 before the cast"
    )]
    fn round_channel(c: f64) -> u8 {
        c.round().clamp(0.0, 255.0) as u8
    }

    #[test]
    fn test_rgb_hex() {
        let c = Rgb::new(255, 0, 128);
        assert_eq!(c.hex(), "#ff0080");
    }

    #[test]
    fn test_rgb_css_string() {
        let c = Rgb::new(100, 150, 200);
        assert_eq!(c.css(), "rgb(100,150,200)");
    }

    #[test]
    fn test_rgb_normalized() {
        let c = Rgb::new(255, 128, 0);
        let (r, g, b) = c.normalized();
        assert!((r - 1.0).abs() < f64::EPSILON);
        assert!((g - 128.0 / 255.0).abs() < 0.001);
        assert!(b.abs() < f64::EPSILON);
    }

    #[test]
    fn test_hsl_black_is_achromatic() {
        let hsl = Rgb::new(0, 0, 0).to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsl_white_is_achromatic() {
        let hsl = Rgb::new(255, 255, 255).to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hsl_pure_red() {
        let hsl = Rgb::new(255, 0, 0).to_hsl();
        assert!(hsl.hue.abs() < f64::EPSILON);
        assert!((hsl.saturation - 1.0).abs() < f64::EPSILON);
        assert!((hsl.lightness - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hsl_pure_green_hue_third() {
        let hsl = Rgb::new(0, 255, 0).to_hsl();
        assert!((hsl.hue - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_pure_blue_hue_two_thirds() {
        let hsl = Rgb::new(0, 0, 255).to_hsl();
        assert!((hsl.hue - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_to_rgb_achromatic_scales() {
        let (r, g, b) = Hsl::new(0.0, 0.0, 0.5).to_rgb();
        assert!((r - 127.5).abs() < 1e-9);
        assert!((g - 127.5).abs() < 1e-9);
        assert!((b - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_roundtrip_primaries() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
        ] {
            let (r, g, b) = rgb.to_hsl().to_rgb();
            assert_eq!(round_channel(r), rgb.red);
            assert_eq!(round_channel(g), rgb.green);
            assert_eq!(round_channel(b), rgb.blue);
        }
    }

    #[test]
    fn test_hsv_value_is_max() {
        let hsv = Rgb::new(64, 128, 32).to_hsv();
        assert!((hsv.value - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsv_black() {
        let hsv = Rgb::new(0, 0, 0).to_hsv();
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsv_roundtrip_sectors() {
        // One representative per sector of the hue wheel.
        for rgb in [
            Rgb::new(255, 128, 0),
            Rgb::new(128, 255, 0),
            Rgb::new(0, 255, 128),
            Rgb::new(0, 128, 255),
            Rgb::new(128, 0, 255),
            Rgb::new(255, 0, 128),
        ] {
            let (r, g, b) = rgb.to_hsv().to_rgb();
            assert!(u16::from(round_channel(r)).abs_diff(u16::from(rgb.red)) <= 1);
            assert!(u16::from(round_channel(g)).abs_diff(u16::from(rgb.green)) <= 1);
            assert!(u16::from(round_channel(b)).abs_diff(u16::from(rgb.blue)) <= 1);
        }
    }

    #[test]
    fn test_hsv_full_turn_wraps_to_red() {
        let (r, g, b) = Hsv::new(1.0, 1.0, 1.0).to_rgb();
        assert_eq!(round_channel(r), 255);
        assert_eq!(round_channel(g), 0);
        assert_eq!(round_channel(b), 0);
    }

    #[test]
    fn test_darken_is_multiplicative() {
        let hsl = Hsl::new(0.25, 0.5, 0.8);
        let darker = hsl.darken(0.1);
        assert!((darker.lightness - 0.72).abs() < 1e-9);
        assert!((darker.hue - 0.25).abs() < f64::EPSILON);
        assert!((darker.saturation - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_darken_zero_stays_zero() {
        let darker = Hsl::new(0.0, 0.0, 0.0).darken(0.1);
        assert!(darker.lightness.abs() < f64::EPSILON);
    }

    #[test]
    fn test_rgb_display_matches_css() {
        let c = Rgb::new(12, 34, 56);
        assert_eq!(c.to_string(), c.css());
    }

    #[test]
    fn test_rgb_from_tuple_and_array() {
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::from([1, 2, 3]), Rgb::new(1, 2, 3));
    }
}
