//! Fill tones, opacities, and the background color.
//!
//! Patterns are drawn in two fixed tones over a tinted background: a
//! nibble's parity picks light or dark, and its magnitude picks an
//! opacity between [`OPACITY_MIN`] and [`OPACITY_MAX`]. Only the
//! background varies in hue.
//!
//! ```text
//! base color ─→ HSL ─→ hue   -= remap(hex_value(14, 3), 0..4095 → 0..359)
//!                   └→ sat   ±= hex_value(17)   (+ if even, − if odd)
//!                          ─→ RGB ─→ <rect fill="rgb(r,g,b)">
//! ```

use tessera_color::Rgb;
use tessera_svg::{Style, format_number};

use crate::digest::Digest;
use crate::scale::remap;

/// Tone for odd nibbles.
pub const FILL_COLOR_DARK: &str = "#222";
/// Tone for even nibbles.
pub const FILL_COLOR_LIGHT: &str = "#ddd";
/// Outline color shared by every stroked shape.
pub const STROKE_COLOR: &str = "#000";
/// Outline opacity shared by every stroked shape.
pub const STROKE_OPACITY: f64 = 0.02;
/// Opacity for nibble 0.
pub const OPACITY_MIN: f64 = 0.02;
/// Opacity for nibble 15.
pub const OPACITY_MAX: f64 = 0.15;

/// Default base color the background hue is derived from.
pub const DEFAULT_BASE_COLOR: Rgb = Rgb::new(0x93, 0x3c, 0x3c);

/// `#ddd` for even values, `#222` for odd.
#[inline]
#[must_use]
pub const fn fill_color(n: u32) -> &'static str {
    if n % 2 == 0 { FILL_COLOR_LIGHT } else { FILL_COLOR_DARK }
}

/// Opacity for a nibble, linear between the two bounds.
#[inline]
#[must_use]
pub fn fill_opacity(n: u32) -> f64 {
    remap(f64::from(n), 0.0, 15.0, OPACITY_MIN, OPACITY_MAX)
}

/// The background color for a digest.
///
/// An explicit `color` wins outright. Otherwise the base color is rotated
/// in hue and nudged in saturation by digits of the digest.
#[must_use]
pub fn resolve_background(digest: &Digest, base_color: Rgb, color: Option<Rgb>) -> Rgb {
    if let Some(color) = color {
        return color;
    }

    let hue_offset = remap(f64::from(digest.hex_value(14, 3)), 0.0, 4095.0, 0.0, 359.0);
    let sat_offset = digest.nibble(17);
    let signed = if sat_offset % 2 == 0 {
        f64::from(sat_offset)
    } else {
        -f64::from(sat_offset)
    };

    base_color
        .to_hsl()
        .shift_hue_degrees(hue_offset)
        .adjust_saturation(signed)
        .to_rgb()
}

// ─── Style Presets ───────────────────────────────────────────────────────────
//
// Attribute order is part of the output, so each family of generators
// builds its style through one of these.

/// Filled shape with a faint outline: fill, fill-opacity, stroke,
/// stroke-opacity.
#[must_use]
pub fn filled(n: u32) -> Style {
    Style::new()
        .fill(fill_color(n))
        .fill_opacity(fill_opacity(n))
        .stroke(STROKE_COLOR)
        .stroke_opacity(STROKE_OPACITY)
}

/// Outline only, in the nibble's tone: fill none, stroke, opacity,
/// stroke-width with a `px` unit.
#[must_use]
pub fn outlined(n: u32, stroke_width: f64) -> Style {
    Style::new()
        .fill("none")
        .stroke(fill_color(n))
        .opacity(fill_opacity(n))
        .stroke_width(format!("{}px", format_number(stroke_width)))
}

/// Flat fill with whole-element opacity: fill, opacity.
#[must_use]
pub fn washed(n: u32) -> Style {
    Style::new().fill(fill_color(n)).opacity(fill_opacity(n))
}

/// Outline-first fill used by faceted tiles: stroke, stroke-opacity, fill,
/// fill-opacity, stroke-width 1.
#[must_use]
pub fn faceted(n: u32) -> Style {
    Style::new()
        .stroke(STROKE_COLOR)
        .stroke_opacity(STROKE_OPACITY)
        .fill(fill_color(n))
        .fill_opacity(fill_opacity(n))
        .stroke_width(1.0)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(style: &Style) -> Vec<&'static str> {
        style.iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn parity_picks_tone() {
        assert_eq!(fill_color(0), "#ddd");
        assert_eq!(fill_color(7), "#222");
        assert_eq!(fill_color(14), "#ddd");
    }

    #[test]
    fn opacity_bounds() {
        assert_eq!(fill_opacity(0), OPACITY_MIN);
        assert_eq!(fill_opacity(15), OPACITY_MAX);
        assert!(fill_opacity(7) > OPACITY_MIN && fill_opacity(7) < OPACITY_MAX);
    }

    #[test]
    fn background_from_default_base() {
        let bg = resolve_background(&Digest::of("GitHub"), DEFAULT_BASE_COLOR, None);
        assert_eq!(bg.to_hex(), "#455e8a");
        assert_eq!(bg.to_css(), "rgb(69,94,138)");
    }

    #[test]
    fn explicit_color_wins() {
        let orange = Rgb::new(0xff, 0x7f, 0x00);
        let bg = resolve_background(&Digest::of("GitHub"), DEFAULT_BASE_COLOR, Some(orange));
        assert_eq!(bg, orange);
    }

    #[test]
    fn base_color_changes_background() {
        let digest = Digest::of("GitHub");
        let a = resolve_background(&digest, DEFAULT_BASE_COLOR, None);
        let b = resolve_background(&digest, Rgb::new(0x33, 0x99, 0x33), None);
        assert_ne!(a, b);
    }

    #[test]
    fn preset_attribute_orders() {
        assert_eq!(names(&filled(1)), ["fill", "fill-opacity", "stroke", "stroke-opacity"]);
        assert_eq!(names(&outlined(1, 2.0)), ["fill", "stroke", "opacity", "stroke-width"]);
        assert_eq!(names(&washed(1)), ["fill", "opacity"]);
        assert_eq!(
            names(&faceted(1)),
            ["stroke", "stroke-opacity", "fill", "fill-opacity", "stroke-width"]
        );
    }

    #[test]
    fn outline_width_carries_unit() {
        let style = outlined(4, 12.5);
        assert_eq!(style.get("stroke-width").unwrap().to_string(), "12.5px");
        assert_eq!(style.get("stroke").unwrap().to_string(), "#ddd");
    }
}
