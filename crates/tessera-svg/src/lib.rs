// SPDX-License-Identifier: MIT
//
// tessera-svg — the drawing surface pattern generators paint onto.
//
// Generators never build markup directly. They append primitives (rect,
// circle, polyline, path, group) to a `Canvas`, each with an ordered style
// record and an optional transform, and declare the canvas size. The canvas
// then serializes everything in emission order:
//
//   generator → Canvas::{rect, circle, polyline, path, group}
//             → Element { tag, attributes, children }
//             → Canvas::to_svg() → "<svg ...>...</svg>"
//
// Attribute order is part of the output contract: style attributes first,
// in the order they were set, then geometry, then `transform`. Numbers are
// formatted the way JavaScript prints them, so the text is stable across
// implementations of the same pattern.

pub mod canvas;
pub mod element;
pub mod style;
pub mod transform;
pub mod value;

pub use canvas::Canvas;
pub use element::{Draw, Element, Tag};
pub use style::Style;
pub use transform::Transform;
pub use value::{Value, format_number, join_numbers};
