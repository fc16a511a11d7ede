//! Point lists for the polygons the generators tile.
//!
//! Every builder is pure and returns the `points` attribute text (or, for
//! the plus sign, rectangle geometry). Shapes are drawn at the origin and
//! placed with transforms.

use std::f64::consts::PI;

use tessera_svg::join_numbers;

/// Flat-topped hexagon with side `c`, bounding box `2c × 2·sin(60°)·c`.
#[must_use]
pub fn hexagon(c: f64) -> String {
    let a = c / 2.0;
    let b = (60.0 * PI / 180.0).sin() * c;
    join_numbers(&[
        0.0, b, a, 0.0, a + c, 0.0, 2.0 * c, b, a + c, 2.0 * b, a, 2.0 * b, 0.0, b,
    ])
}

/// The two halves of a chevron `w` wide and `h` tall.
#[must_use]
pub fn chevron(w: f64, h: f64) -> [String; 2] {
    let e = h * 0.66;
    [
        join_numbers(&[0.0, 0.0, w / 2.0, h - e, w / 2.0, h, 0.0, e, 0.0, 0.0]),
        join_numbers(&[w / 2.0, h - e, w, 0.0, w, e, w / 2.0, h, w / 2.0, h - e]),
    ]
}

/// A plus sign as two rectangles `[x, y, width, height]`: the vertical
/// bar, then the horizontal one. Arms are `s` thick, the sign `3s` across.
#[must_use]
pub fn plus(s: f64) -> [[f64; 4]; 2] {
    [[s, 0.0, s, s * 3.0], [0.0, s, s * 3.0, s]]
}

/// Octagon inscribed in an `s × s` square, corners cut at a third.
#[must_use]
pub fn octagon(s: f64) -> String {
    let c = s * 0.33;
    join_numbers(&[
        c, 0.0, s - c, 0.0, s, c, s, s - c, s - c, s, c, s, 0.0, s - c, 0.0, c, c, 0.0,
    ])
}

/// Upward triangle with base `side` and the given height.
#[must_use]
pub fn triangle(side: f64, height: f64) -> String {
    join_numbers(&[side / 2.0, 0.0, side, height, 0.0, height, side / 2.0, 0.0])
}

/// Triangle pointing right: `side` tall, `width` deep.
#[must_use]
pub fn rotated_triangle(side: f64, width: f64) -> String {
    join_numbers(&[0.0, 0.0, width, side / 2.0, 0.0, side, 0.0, 0.0])
}

/// Rhombus inscribed in a `w × h` box.
#[must_use]
pub fn diamond(w: f64, h: f64) -> String {
    join_numbers(&[w / 2.0, 0.0, w, h / 2.0, w / 2.0, h, 0.0, h / 2.0])
}

/// Right isosceles triangle with legs `s`, right angle at bottom-left.
#[must_use]
pub fn right_triangle(s: f64) -> String {
    join_numbers(&[0.0, 0.0, s, s, 0.0, s, 0.0, 0.0])
}

// ─── Tests ───────────────────────────────────────────────────────────────────
