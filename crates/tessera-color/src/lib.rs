// SPDX-License-Identifier: MIT
//
// tessera-color — the color plumbing under the pattern engine.
//
// Patterns are specified in two color spaces: the background hue and
// saturation are nudged in HSL, while everything written to SVG is 8-bit
// RGB. This crate holds both representations and the conversions between
// them, plus the two text forms the engine emits (`#rrggbb` and
// `rgb(r,g,b)`).

pub mod color;

pub use color::{Hsl, ParseColorError, Rgb};
