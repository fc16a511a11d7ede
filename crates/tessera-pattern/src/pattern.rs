//! Pattern generation and the finished image.
//!
//! [`generate`] runs the whole pipeline in one call and either fails
//! before drawing anything or returns a complete [`Pattern`]:
//!
//! ```text
//! input ─→ Digest ─┬→ background color ─→ <rect> filling the canvas
//!                  └→ Generator ───────→ primitives, canvas size
//! ```

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tessera_color::Rgb;
use tessera_svg::{Canvas, Draw, Style};

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::options::Options;
use crate::palette::resolve_background;

/// A generated tiling image.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    digest: Digest,
    generator: Generator,
    background: Rgb,
    canvas: Canvas,
}

impl Pattern {
    /// Background color as `#rrggbb`.
    #[must_use]
    pub fn color(&self) -> String {
        self.background.to_hex()
    }

    /// Background color.
    #[must_use]
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// The generator that drew the pattern.
    #[must_use]
    pub const fn generator(&self) -> Generator {
        self.generator
    }

    /// The digest every parameter was read from.
    #[must_use]
    pub const fn digest(&self) -> &Digest {
        &self.digest
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.canvas.width()
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.canvas.height()
    }

    /// The drawing, for inspection.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.canvas.to_svg()
    }

    /// The SVG document, base64 encoded.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_svg())
    }

    /// `data:image/svg+xml;base64,...`
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", self.to_base64())
    }

    /// The data URI wrapped for CSS: `url("data:...")`.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("url(\"{}\")", self.to_data_uri())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

/// Generate the pattern for `input`.
///
/// With no input, the current local time is hashed instead, so every call
/// differs.
///
/// # Errors
///
/// - [`Error::InvalidDigest`] if `options.hash` is not 40 hex digits.
/// - [`Error::UnknownGenerator`] if `options.generator` names no generator.
///
/// # Examples
///
/// ```
/// use tessera_pattern::{Options, generate};
///
/// let pattern = generate(Some("GitHub"), &Options::default()).unwrap();
/// assert_eq!(pattern.color(), "#455e8a");
/// assert!(pattern.to_svg().starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
/// ```
pub fn generate(input: Option<&str>, options: &Options) -> Result<Pattern> {
    let digest = match &options.hash {
        Some(hash) => Digest::parse(hash)?,
        None => match input {
            Some(input) => Digest::of(input),
            None => Digest::of(&chrono::Local::now().to_rfc3339()),
        },
    };

    let background = resolve_background(&digest, options.base_color, options.color);

    let generator = match &options.generator {
        Some(name) => {
            Generator::from_name(name).ok_or_else(|| Error::UnknownGenerator(name.clone()))?
        }
        None => Generator::from_digest(&digest),
    };

    let mut canvas = Canvas::new();
    canvas.rect(0.0, 0.0, "100%", "100%", &Style::new().fill(background.to_css()));
    generator.draw(&digest, &mut canvas);

    tracing::debug!(
        %digest,
        %generator,
        color = %background,
        width = canvas.width(),
        height = canvas.height(),
        elements = canvas.element_count(),
        "generated pattern"
    );

    Ok(Pattern {
        digest,
        generator,
        background,
        canvas,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use pretty_assertions::assert_eq;

    fn github(options: &Options) -> Pattern {
        generate(Some("GitHub"), options).unwrap()
    }

    // ── Background ───────────────────────────────────────────────────────

    #[test]
    fn github_background() {
        let pattern = github(&Options::new());
        assert_eq!(pattern.color(), "#455e8a");
        assert!(pattern.to_svg().contains(
            r#"<rect fill="rgb(69,94,138)" x="0" y="0" width="100%" height="100%"></rect>"#
        ));
    }

    #[test]
    fn explicit_color_is_returned_verbatim() {
        let options = Options::new().with_color("#ff7f00").unwrap();
        for input in ["", "GitHub", "tessera", "ünïcödé"] {
            assert_eq!(generate(Some(input), &options).unwrap().color(), "#ff7f00");
        }
    }

    #[test]
    fn background_is_drawn_first() {
        let pattern = github(&Options::new());
        let first = &pattern.canvas().elements()[0];
        assert_eq!(first.attr("width").unwrap().to_string(), "100%");
        assert_eq!(first.attr("fill").unwrap().to_string(), "rgb(69,94,138)");
    }

    // ── Generator Selection ──────────────────────────────────────────────

    #[test]
    fn digest_picks_squares_for_github() {
        assert_eq!(github(&Options::new()).generator(), Generator::Squares);
    }

    #[test]
    fn override_wins_for_every_generator() {
        for &g in Generator::all() {
            let pattern = github(&Options::new().with_generator(g.name()));
            assert_eq!(pattern.generator(), g);
        }
    }

    #[test]
    fn sine_waves_fixture() {
        let pattern = github(&Options::new().with_generator("sineWaves"));
        assert!(
            pattern
                .to_svg()
                .contains(r#"stroke-width="10px" d="M0 48 C 35 0, 65 0, 100 48"#)
        );
    }

    #[test]
    fn unknown_generator_is_rejected() {
        let err = generate(Some("GitHub"), &Options::new().with_generator("spirals")).unwrap_err();
        assert_eq!(err, Error::UnknownGenerator("spirals".into()));
        assert_eq!(err.to_string(), "the generator `spirals` does not exist");
    }

    #[test]
    fn generator_names_are_case_sensitive() {
        for name in ["Hexagons", "HEXAGONS", "SineWaves"] {
            let err = generate(Some("GitHub"), &Options::new().with_generator(name)).unwrap_err();
            assert_eq!(err, Error::UnknownGenerator(name.into()));
        }
    }

    // ── Digest ───────────────────────────────────────────────────────────

    #[test]
    fn explicit_hash_replaces_input() {
        let options = Options::new().with_hash("5442E2B64FA09764B9F593867E59A97292C84059");
        let from_hash = generate(Some("something else"), &options).unwrap();
        assert_eq!(from_hash.to_svg(), github(&Options::new()).to_svg());
        assert_eq!(from_hash.digest().as_str(), "5442e2b64fa09764b9f593867e59a97292c84059");
    }

    #[test]
    fn malformed_hash_is_rejected() {
        let err = generate(Some("GitHub"), &Options::new().with_hash("abc")).unwrap_err();
        assert_eq!(err, Error::InvalidDigest("abc".into()));
    }

    #[test]
    fn no_input_still_generates() {
        let pattern = generate(None, &Options::new()).unwrap();
        assert!(pattern.width() > 0.0);
        assert_eq!(pattern.digest().as_str().len(), 40);
    }

    // ── Determinism ──────────────────────────────────────────────────────

    #[test]
    fn same_input_same_svg() {
        let options = Options::new().with_generator("xes");
        let a = generate(Some("tessera"), &options).unwrap();
        let b = generate(Some("tessera"), &options).unwrap();
        assert_eq!(a.to_svg(), b.to_svg());
        assert_eq!(a, b);
    }

    // ── Reference Output ─────────────────────────────────────────────────

    /// Each generator fed its own name.
    const REFERENCE: [(Generator, &str); 16] = [
        (Generator::Octagons, include_str!("generator/fixtures/octagons.svg")),
        (Generator::OverlappingCircles, include_str!("generator/fixtures/overlappingCircles.svg")),
        (Generator::PlusSigns, include_str!("generator/fixtures/plusSigns.svg")),
        (Generator::Xes, include_str!("generator/fixtures/xes.svg")),
        (Generator::SineWaves, include_str!("generator/fixtures/sineWaves.svg")),
        (Generator::Hexagons, include_str!("generator/fixtures/hexagons.svg")),
        (Generator::OverlappingRings, include_str!("generator/fixtures/overlappingRings.svg")),
        (Generator::Plaid, include_str!("generator/fixtures/plaid.svg")),
        (Generator::Triangles, include_str!("generator/fixtures/triangles.svg")),
        (Generator::Squares, include_str!("generator/fixtures/squares.svg")),
        (Generator::ConcentricCircles, include_str!("generator/fixtures/concentricCircles.svg")),
        (Generator::Diamonds, include_str!("generator/fixtures/diamonds.svg")),
        (Generator::Tessellation, include_str!("generator/fixtures/tessellation.svg")),
        (Generator::NestedSquares, include_str!("generator/fixtures/nestedSquares.svg")),
        (Generator::MosaicSquares, include_str!("generator/fixtures/mosaicSquares.svg")),
        (Generator::Chevrons, include_str!("generator/fixtures/chevrons.svg")),
    ];

    #[test]
    fn reference_table_covers_every_generator() {
        let listed: Vec<Generator> = REFERENCE.iter().map(|(g, _)| *g).collect();
        assert_eq!(listed, Generator::all().to_vec());
    }

    #[test]
    fn every_generator_matches_its_reference() {
        for (g, expected) in REFERENCE {
            let pattern = generate(Some(g.name()), &Options::new().with_generator(g.name())).unwrap();
            assert_eq!(pattern.to_svg(), expected.trim_end(), "{g}");
        }
    }

    #[test]
    fn different_inputs_differ() {
        let a = generate(Some("a"), &Options::new()).unwrap();
        let b = generate(Some("b"), &Options::new()).unwrap();
        assert_ne!(a.to_svg(), b.to_svg());
    }

    // ── Export Formats ───────────────────────────────────────────────────

    #[test]
    fn export_formats_wrap_each_other() {
        let pattern = github(&Options::new());
        let b64 = pattern.to_base64();
        assert_eq!(STANDARD.decode(&b64).unwrap(), pattern.to_svg().into_bytes());
        assert_eq!(pattern.to_data_uri(), format!("data:image/svg+xml;base64,{b64}"));
        assert_eq!(
            pattern.to_data_url(),
            format!("url(\"data:image/svg+xml;base64,{b64}\")")
        );
        assert_eq!(pattern.to_string(), pattern.to_svg());
    }

    #[test]
    fn size_matches_svg_header() {
        let pattern = github(&Options::new());
        let header = format!(
            "width=\"{}\" height=\"{}\"",
            pattern.width(),
            pattern.height()
        );
        assert!(pattern.to_svg().contains(&header));
    }

    #[test]
    fn pattern_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
    }
}
