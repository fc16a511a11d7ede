//! Tessellation: a 3.3.4.3.4 tiling of squares and triangles.
//!
//! Unlike the grid generators, the tile is twenty hand-placed cells, one
//! digit each. Squares sit on the tile corners and edges or are tilted by
//! ±30°; triangles fill the gaps, mirrored with negative scales. Several
//! tilted squares mirror the whole coordinate system before translating,
//! so their transform lists start with `scale`.

use tessera_svg::{Canvas, Draw, Transform};

use crate::digest::Digest;
use crate::palette::faceted;
use crate::shape;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub fn tessellation(digest: &Digest, canvas: &mut Canvas) {
    let side = digest.scaled(0, 5.0, 40.0);
    let hex_height = side * SQRT_3;
    let hex_width = side * 2.0;
    let tri_height = side / 2.0 * SQRT_3;
    let triangle = shape::rotated_triangle(side, tri_height);
    let tile_width = side * 3.0 + tri_height * 2.0;
    let tile_height = hex_height * 2.0 + side * 2.0;
    tracing::trace!(side, tile_width, tile_height, "tessellation");

    canvas.set_width(tile_width);
    canvas.set_height(tile_height);

    let half = side / 2.0;
    // Pivot used by the upright triangles.
    let pivot = (half, tri_height / 2.0);

    for cell in 0..20 {
        let style = faceted(digest.nibble(cell));

        let mut square = |x: f64, y: f64, transform: Transform| {
            canvas.rect(x, y, side, side, &style).transform(transform);
        };
        let upright = Transform::new;

        match cell {
            // Corners.
            0 => {
                square(-half, -half, upright());
                square(tile_width - half, -half, upright());
                square(-half, tile_height - half, upright());
                square(tile_width - half, tile_height - half, upright());
            }
            // Center top.
            1 => square(hex_width / 2.0 + tri_height, hex_height / 2.0, upright()),
            // Side midpoints.
            2 => {
                square(-half, tile_height / 2.0 - half, upright());
                square(tile_width - half, tile_height / 2.0 - half, upright());
            }
            // Center bottom.
            3 => square(hex_width / 2.0 + tri_height, hex_height * 1.5 + side, upright()),
            // Tilted squares.
            12 => square(
                0.0,
                0.0,
                Transform::translation(half, half).rotate(-30.0, 0.0, 0.0),
            ),
            13 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(-1.0, 1.0)
                    .translate(-tile_width + half, half)
                    .rotate(-30.0, 0.0, 0.0),
            ),
            14 => square(
                0.0,
                0.0,
                Transform::translation(half, tile_height / 2.0 - half - side).rotate(30.0, 0.0, side),
            ),
            15 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(-1.0, 1.0)
                    .translate(-tile_width + half, tile_height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            ),
            16 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(1.0, -1.0)
                    .translate(half, -tile_height + tile_height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            ),
            17 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(-1.0, -1.0)
                    .translate(-tile_width + half, -tile_height + tile_height / 2.0 - half - side)
                    .rotate(30.0, 0.0, side),
            ),
            18 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(1.0, -1.0)
                    .translate(half, -tile_height + half)
                    .rotate(-30.0, 0.0, 0.0),
            ),
            19 => square(
                0.0,
                0.0,
                Transform::new()
                    .scale(-1.0, -1.0)
                    .translate(-tile_width + half, -tile_height + half)
                    .rotate(-30.0, 0.0, 0.0),
            ),
            _ => {
                for transform in triangle_placements(cell, side, hex_height, tile_width, tile_height, pivot) {
                    canvas.polyline(&triangle, &style).transform(transform);
                }
            }
        }
    }
}

/// Transforms for the triangle cells (4–11).
fn triangle_placements(
    cell: usize,
    side: f64,
    hex_height: f64,
    tile_width: f64,
    tile_height: f64,
    (px, py): (f64, f64),
) -> Vec<Transform> {
    let half = side / 2.0;
    match cell {
        // Top and bottom edges.
        4 => vec![
            Transform::translation(half, -half).rotate(0.0, px, py),
            Transform::translation(half, tile_height - -half)
                .rotate(0.0, px, py)
                .scale(1.0, -1.0),
        ],
        5 => vec![
            Transform::translation(tile_width - half, -half)
                .rotate(0.0, px, py)
                .scale(-1.0, 1.0),
            Transform::translation(tile_width - half, tile_height + half)
                .rotate(0.0, px, py)
                .scale(-1.0, -1.0),
        ],
        // Around the center squares.
        6 => vec![Transform::translation(tile_width / 2.0 + half, hex_height / 2.0)],
        7 => vec![
            Transform::translation(tile_width - tile_width / 2.0 - half, hex_height / 2.0)
                .scale(-1.0, 1.0),
        ],
        8 => vec![
            Transform::translation(tile_width / 2.0 + half, tile_height - hex_height / 2.0)
                .scale(1.0, -1.0),
        ],
        9 => vec![
            Transform::translation(
                tile_width - tile_width / 2.0 - half,
                tile_height - hex_height / 2.0,
            )
            .scale(-1.0, -1.0),
        ],
        // Left and right edges.
        10 => vec![Transform::translation(half, tile_height / 2.0 - half)],
        11 => vec![
            Transform::translation(tile_width - half, tile_height / 2.0 - half).scale(-1.0, 1.0),
        ],
        _ => Vec::new(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
