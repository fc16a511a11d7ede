// SPDX-License-Identifier: MIT
//
// RGB and HSL colors with lossless-enough conversions between them.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   "#rrggbb" / "#rgb"  →  Rgb (u8 channels)  ↔  Hsl (f64 fractions)
//                              │
//                              ├→ "#rrggbb"     (public color value)
//                              └→ "rgb(r,g,b)"  (SVG fill attribute)
//
// HSL math runs in f64 so the results match what browsers and other
// pattern implementations compute for the same input byte-for-byte.
// RGB → HSL → RGB is not guaranteed to be bit-exact after rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A string that could not be parsed as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color `{input}` (expected #rgb or #rrggbb)")]
pub struct ParseColorError {
    /// The rejected input, verbatim.
    pub input: String,
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use tessera_color::Rgb;
///
/// let brick = Rgb::from_hex("#933c3c").unwrap();
/// assert_eq!(brick, Rgb::new(0x93, 0x3c, 0x3c));
/// assert_eq!(brick.to_css(), "rgb(147,60,60)");
/// assert_eq!(Rgb::from_hex("f80").unwrap().to_hex(), "#ff8800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`,
    /// in either case. Returns `None` for anything else.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS functional color, `rgb(r,g,b)`, with no spaces.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    ///
    /// Achromatic colors (all channels equal) get hue and saturation 0.
    #[must_use]
    #[allow(clippy::float_cmp)] // channel values are exact multiples of 1/255
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).ok_or_else(|| ParseColorError { input: s.to_owned() })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space, every component a fraction in 0.0–1.0.
///
/// Hue is stored as a fraction of a full turn (0.5 = 180°), which is the
/// form the hue-to-RGB formula consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue, fraction of a turn.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl Hsl {
    /// Hue in degrees (0–360).
    #[inline]
    #[must_use]
    pub fn hue_degrees(self) -> f64 {
        self.h * 360.0
    }

    /// Rotate the hue backwards by `degrees` (0–360), wrapping into one turn.
    #[must_use]
    pub fn shift_hue_degrees(self, degrees: f64) -> Self {
        let h = ((self.hue_degrees() - degrees) + 360.0) % 360.0 / 360.0;
        Self { h, ..self }
    }

    /// Add `percent` points of saturation (negative to remove), clamped
    /// to 0–1.
    #[must_use]
    pub fn adjust_saturation(self, percent: f64) -> Self {
        let s = ((self.s * 100.0 + percent) / 100.0).clamp(0.0, 1.0);
        Self { s, ..self }
    }

    /// Convert to 8-bit RGB, rounding each channel half-up.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn to_rgb(self) -> Rgb {
        let Self { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

// ─── Conversion Helpers ──────────────────────────────────────────────────────

/// One channel of the HSL → RGB conversion.
///
/// `t` is the hue offset for the channel; it is wrapped into 0–1 once
/// before the piecewise ramp is evaluated.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert a 0.0–1.0 channel to 0–255, rounding half-up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn hex_parsing_short_expands_digits() {
        assert_eq!(Rgb::from_hex("#f80"), Some(Rgb::new(0xff, 0x88, 0x00)));
        assert_eq!(Rgb::from_hex("#222"), Some(Rgb::new(0x22, 0x22, 0x22)));
    }

    #[test]
    fn hex_parsing_no_hash_and_uppercase() {
        assert_eq!(Rgb::from_hex("00FF00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::from_hex("DdD"), Some(Rgb::new(0xdd, 0xdd, 0xdd)));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Rgb::from_hex("xyz").is_none());
        assert!(Rgb::from_hex("#12345").is_none());
        assert!(Rgb::from_hex("#ff000080").is_none());
        assert!(Rgb::from_hex("").is_none());
        assert!(Rgb::from_hex("#").is_none());
    }

    #[test]
    fn from_str_reports_input() {
        let err = "#zzz".parse::<Rgb>().unwrap_err();
        assert_eq!(err.input, "#zzz");
        assert!(err.to_string().contains("#zzz"));
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        assert_eq!(Rgb::from_hex(original).unwrap().to_hex(), original);
    }

    // ── Text Forms ───────────────────────────────────────────────────────

    #[test]
    fn css_string_has_no_spaces() {
        assert_eq!(Rgb::new(69, 94, 138).to_css(), "rgb(69,94,138)");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test]
    fn gray_is_achromatic() {
        let hsl = Rgb::new(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!(approx_eq(hsl.l, 128.0 / 255.0, 1e-12));
    }

    #[test]
    fn primaries_have_expected_hues() {
        assert!(approx_eq(Rgb::new(255, 0, 0).to_hsl().h, 0.0, 1e-12));
        assert!(approx_eq(Rgb::new(0, 255, 0).to_hsl().h, 1.0 / 3.0, 1e-12));
        assert!(approx_eq(Rgb::new(0, 0, 255).to_hsl().h, 2.0 / 3.0, 1e-12));
        assert!(approx_eq(Rgb::new(255, 0, 255).to_hsl().h, 5.0 / 6.0, 1e-12));
    }

    #[test]
    fn base_brick_red_to_hsl() {
        let hsl = Rgb::new(0x93, 0x3c, 0x3c).to_hsl();
        assert!(approx_eq(hsl.hue_degrees(), 0.0, 1e-9));
        assert!(approx_eq(hsl.s, 0.420_289_855_072_463_8, 1e-9));
        assert!(approx_eq(hsl.l, 0.405_882_352_941_176_5, 1e-9));
    }

    #[test]
    fn light_colors_use_upper_saturation_branch() {
        // l > 0.5 switches the saturation denominator.
        let hsl = Rgb::new(255, 200, 200).to_hsl();
        assert!(hsl.l > 0.5);
        assert!(approx_eq(hsl.s, 1.0, 1e-9));
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(Hsl { h: 0.7, s: 0.0, l: 0.5 }.to_rgb(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn pure_hues_roundtrip() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb, "roundtrip failed for {rgb}");
        }
    }

    #[test]
    fn arbitrary_colors_roundtrip() {
        for hex in ["#933c3c", "#455e8a", "#ff7f00", "#123456", "#fedcba"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(Hsl::from(rgb).to_rgb().to_hex(), hex);
        }
    }

    #[test]
    fn hue_wraps_per_channel() {
        // Red channel offset h + 1/3 exceeds 1 and must wrap.
        let rgb = Hsl { h: 0.9, s: 1.0, l: 0.5 }.to_rgb();
        assert_eq!(rgb, Rgb::new(255, 0, 153));
    }

    // ── HSL Adjustments ──────────────────────────────────────────────────

    #[test]
    fn hue_shift_wraps_into_one_turn() {
        let hsl = Hsl { h: 0.0, s: 0.5, l: 0.5 }.shift_hue_degrees(90.0);
        assert!(approx_eq(hsl.hue_degrees(), 270.0, 1e-9));
        let hsl = Hsl { h: 0.5, s: 0.5, l: 0.5 }.shift_hue_degrees(90.0);
        assert!(approx_eq(hsl.hue_degrees(), 90.0, 1e-9));
    }

    #[test]
    fn saturation_adjustment_clamps() {
        assert_eq!(Hsl { h: 0.0, s: 0.95, l: 0.5 }.adjust_saturation(10.0).s, 1.0);
        assert_eq!(Hsl { h: 0.0, s: 0.05, l: 0.5 }.adjust_saturation(-10.0).s, 0.0);
        assert!(approx_eq(Hsl { h: 0.0, s: 0.5, l: 0.5 }.adjust_saturation(-9.0).s, 0.41, 1e-12));
    }

    #[test]
    fn shifted_brick_red_becomes_slate_blue() {
        let rgb = Rgb::new(0x93, 0x3c, 0x3c)
            .to_hsl()
            .shift_hue_degrees(141.232_967_032_967_03)
            .adjust_saturation(-9.0)
            .to_rgb();
        assert_eq!(rgb, Rgb::new(69, 94, 138));
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn deserializes_from_hex_string() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StrDeserializer};

        let de: StrDeserializer<'_, Error> = "#abc".into_deserializer();
        assert_eq!(Rgb::deserialize(de).unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));

        let de: StrDeserializer<'_, Error> = "nope".into_deserializer();
        assert!(Rgb::deserialize(de).is_err());
    }
}
