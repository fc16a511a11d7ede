//! Mosaic squares: a 4×4 board of tiles, each built from four mirrored
//! right triangles.
//!
//! Tiles alternate between two arrangements on a checkerboard:
//!
//! ```text
//!   outer ◸◹   inner ◿◺
//!         ◺◿         ◹◸
//! ```

use tessera_svg::{Canvas, Draw, Style, Transform};

use crate::digest::Digest;
use crate::palette::{STROKE_COLOR, STROKE_OPACITY, fill_color, fill_opacity};
use crate::shape;

const BOARD: u32 = 4;

fn tile_style(n: u32) -> Style {
    Style::new()
        .stroke(STROKE_COLOR)
        .stroke_opacity(STROKE_OPACITY)
        .fill_opacity(fill_opacity(n))
        .fill(fill_color(n))
}

/// Place one triangle: translate, then mirror through `scale`.
fn put(canvas: &mut Canvas, triangle: &str, style: &Style, at: (f64, f64), scale: (f64, f64)) {
    canvas
        .polyline(triangle, style)
        .transform(Transform::translation(at.0, at.1).scale(scale.0, scale.1));
}

/// Triangles meet at the tile's vertical center line; two digits color
/// the upper and lower pairs.
fn inner_tile(canvas: &mut Canvas, triangle: &str, (x, y): (f64, f64), size: f64, vals: [u32; 2]) {
    let style = tile_style(vals[0]);
    put(canvas, triangle, &style, (x + size, y), (-1.0, 1.0));
    put(canvas, triangle, &style, (x + size, y + size * 2.0), (1.0, -1.0));

    let style = tile_style(vals[1]);
    put(canvas, triangle, &style, (x + size, y + size * 2.0), (-1.0, -1.0));
    put(canvas, triangle, &style, (x + size, y), (1.0, 1.0));
}

/// Triangles meet at the tile's horizontal center line, one color.
fn outer_tile(canvas: &mut Canvas, triangle: &str, (x, y): (f64, f64), size: f64, val: u32) {
    let style = tile_style(val);
    put(canvas, triangle, &style, (x, y + size), (1.0, -1.0));
    put(canvas, triangle, &style, (x + size * 2.0, y + size), (-1.0, -1.0));
    put(canvas, triangle, &style, (x, y + size), (1.0, 1.0));
    put(canvas, triangle, &style, (x + size * 2.0, y + size), (-1.0, 1.0));
}

pub fn mosaic_squares(digest: &Digest, canvas: &mut Canvas) {
    let size = digest.scaled(0, 15.0, 50.0);
    let triangle = shape::right_triangle(size);
    tracing::trace!(size, "mosaic squares");

    canvas.set_width(size * 8.0);
    canvas.set_height(size * 8.0);

    for row in 0..BOARD {
        for col in 0..BOARD {
            let i = (row * BOARD + col) as usize;
            let at = (f64::from(col) * size * 2.0, f64::from(row) * size * 2.0);
            if col % 2 == row % 2 {
                outer_tile(canvas, &triangle, at, size, digest.nibble(i));
            } else {
                inner_tile(canvas, &triangle, at, size, [digest.nibble(i), digest.nibble(i + 1)]);
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
