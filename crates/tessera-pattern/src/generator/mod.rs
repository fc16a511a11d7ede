//! The sixteen tiling generators and their dispatch table.
//!
//! Each generator reads its parameters from the digest, declares the
//! canvas size, and appends its primitives. Shapes on the first row or
//! column are drawn a second time one full tile width/height away, so the
//! image repeats without a seam when used as a background.
//!
//! Generators are grouped by the family of shape they draw:
//!
//! | module         | generators                                          |
//! |----------------|-----------------------------------------------------|
//! | `polygons`     | octagons, hexagons, triangles, squares, diamonds, nested squares |
//! | `circles`      | overlapping circles, overlapping rings, concentric circles |
//! | `crosses`      | plus signs, xes                                     |
//! | `stripes`      | sine waves, plaid, chevrons                         |
//! | `mosaic`       | mosaic squares                                      |
//! | `tessellation` | tessellation                                        |

mod circles;
mod crosses;
mod mosaic;
mod polygons;
mod stripes;
mod tessellation;

use std::fmt;
use std::str::FromStr;

use tessera_svg::Canvas;

use crate::digest::Digest;
use crate::error::Error;

/// One of the sixteen tiling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Octagons,
    OverlappingCircles,
    PlusSigns,
    Xes,
    SineWaves,
    Hexagons,
    OverlappingRings,
    Plaid,
    Triangles,
    Squares,
    ConcentricCircles,
    Diamonds,
    Tessellation,
    NestedSquares,
    MosaicSquares,
    Chevrons,
}

impl Generator {
    /// All generators, in dispatch order. The digest picks by index into
    /// this table, so the order is fixed.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Octagons, Self::OverlappingCircles, Self::PlusSigns, Self::Xes,
            Self::SineWaves, Self::Hexagons, Self::OverlappingRings, Self::Plaid,
            Self::Triangles, Self::Squares, Self::ConcentricCircles, Self::Diamonds,
            Self::Tessellation, Self::NestedSquares, Self::MosaicSquares, Self::Chevrons,
        ]
    }

    /// Canonical name, as accepted in options.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Octagons => "octagons",
            Self::OverlappingCircles => "overlappingCircles",
            Self::PlusSigns => "plusSigns",
            Self::Xes => "xes",
            Self::SineWaves => "sineWaves",
            Self::Hexagons => "hexagons",
            Self::OverlappingRings => "overlappingRings",
            Self::Plaid => "plaid",
            Self::Triangles => "triangles",
            Self::Squares => "squares",
            Self::ConcentricCircles => "concentricCircles",
            Self::Diamonds => "diamonds",
            Self::Tessellation => "tessellation",
            Self::NestedSquares => "nestedSquares",
            Self::MosaicSquares => "mosaicSquares",
            Self::Chevrons => "chevrons",
        }
    }

    /// Look a generator up by its exact name. The historical spelling
    /// `octogons` is accepted for [`Self::Octagons`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "octogons" {
            return Some(Self::Octagons);
        }
        Self::all().iter().find(|g| g.name() == name).copied()
    }

    /// The generator a digest selects when none is requested.
    #[must_use]
    pub fn from_digest(digest: &Digest) -> Self {
        let all = Self::all();
        all[digest.nibble(20) as usize % all.len()]
    }

    /// Draw this pattern onto `canvas`.
    pub fn draw(self, digest: &Digest, canvas: &mut Canvas) {
        match self {
            Self::Octagons => polygons::octagons(digest, canvas),
            Self::OverlappingCircles => circles::overlapping_circles(digest, canvas),
            Self::PlusSigns => crosses::plus_signs(digest, canvas),
            Self::Xes => crosses::xes(digest, canvas),
            Self::SineWaves => stripes::sine_waves(digest, canvas),
            Self::Hexagons => polygons::hexagons(digest, canvas),
            Self::OverlappingRings => circles::overlapping_rings(digest, canvas),
            Self::Plaid => stripes::plaid(digest, canvas),
            Self::Triangles => polygons::triangles(digest, canvas),
            Self::Squares => polygons::squares(digest, canvas),
            Self::ConcentricCircles => circles::concentric_circles(digest, canvas),
            Self::Diamonds => polygons::diamonds(digest, canvas),
            Self::Tessellation => tessellation::tessellation(digest, canvas),
            Self::NestedSquares => polygons::nested_squares(digest, canvas),
            Self::MosaicSquares => mosaic::mosaic_squares(digest, canvas),
            Self::Chevrons => stripes::chevrons(digest, canvas),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownGenerator(s.to_owned()))
    }
}

// ─── Grid Helpers ────────────────────────────────────────────────────────────

/// Side of the square grid most generators tile.
const GRID: u32 = 6;

/// Cells of the 6×6 grid in row-major order: `(index, x, y)`.
fn grid() -> impl Iterator<Item = (usize, u32, u32)> {
    (0..GRID).flat_map(|y| (0..GRID).map(move |x| ((y * GRID + x) as usize, x, y)))
}

// ─── Test Helpers ────────────────────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
