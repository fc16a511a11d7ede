//! Generators that tile a single filled polygon per cell.

use tessera_svg::{Canvas, Draw, Transform};

use super::grid;
use crate::digest::Digest;
use crate::palette::{filled, outlined};
use crate::shape;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub fn octagons(digest: &Digest, canvas: &mut Canvas) {
    let size = digest.scaled(0, 10.0, 60.0);
    let tile = shape::octagon(size);
    tracing::trace!(size, "octagons");

    canvas.set_width(size * 6.0);
    canvas.set_height(size * 6.0);

    for (i, x, y) in grid() {
        let (x, y) = (f64::from(x), f64::from(y));
        canvas
            .polyline(&tile, &filled(digest.nibble(i)))
            .transform(Transform::translation(x * size, y * size));
    }
}

pub fn hexagons(digest: &Digest, canvas: &mut Canvas) {
    let side = digest.scaled(0, 8.0, 60.0);
    let hex_height = side * SQRT_3;
    let hex_width = side * 2.0;
    let hex = shape::hexagon(side);
    tracing::trace!(side, "hexagons");

    canvas.set_width(hex_width * 3.0 + side * 3.0);
    canvas.set_height(hex_height * 6.0);

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = filled(digest.nibble(i));
        let stagger = |base: f64| {
            if col % 2 == 0 { base } else { base + hex_height / 2.0 }
        };
        let dy = stagger(y * hex_height);

        let mut place = |tx: f64, ty: f64| {
            canvas.polyline(&hex, &style).transform(Transform::translation(tx, ty));
        };
        place(x * side * 1.5 - hex_width / 2.0, dy - hex_height / 2.0);

        if col == 0 {
            place(6.0 * side * 1.5 - hex_width / 2.0, dy - hex_height / 2.0);
        }
        if row == 0 {
            let dy = stagger(6.0 * hex_height);
            place(x * side * 1.5 - hex_width / 2.0, dy - hex_height / 2.0);
        }
        if col == 0 && row == 0 {
            place(
                6.0 * side * 1.5 - hex_width / 2.0,
                5.0 * hex_height + hex_height / 2.0,
            );
        }
    }
}

pub fn triangles(digest: &Digest, canvas: &mut Canvas) {
    let side = digest.scaled(0, 15.0, 80.0);
    let height = side / 2.0 * SQRT_3;
    let triangle = shape::triangle(side, height);
    tracing::trace!(side, height, "triangles");

    canvas.set_width(side * 3.0);
    canvas.set_height(height * 6.0);

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = filled(digest.nibble(i));

        // Alternate point-up / point-down, offset by one on odd rows.
        let flipped = if row % 2 == 0 { col % 2 == 0 } else { col % 2 != 0 };
        let rotation = if flipped { 180.0 } else { 0.0 };

        let mut place = |tx: f64| {
            canvas.polyline(&triangle, &style).transform(
                Transform::translation(tx, height * y).rotate(rotation, side / 2.0, height / 2.0),
            );
        };
        place(x * side * 0.5 - side / 2.0);

        if col == 0 {
            place(6.0 * side * 0.5 - side / 2.0);
        }
    }
}

pub fn squares(digest: &Digest, canvas: &mut Canvas) {
    let size = digest.scaled(0, 10.0, 60.0);
    tracing::trace!(size, "squares");

    canvas.set_width(size * 6.0);
    canvas.set_height(size * 6.0);

    for (i, x, y) in grid() {
        let (x, y) = (f64::from(x), f64::from(y));
        canvas.rect(x * size, y * size, size, size, &filled(digest.nibble(i)));
    }
}

pub fn diamonds(digest: &Digest, canvas: &mut Canvas) {
    let width = digest.scaled(0, 10.0, 50.0);
    let height = digest.scaled(1, 10.0, 50.0);
    let diamond = shape::diamond(width, height);
    tracing::trace!(width, height, "diamonds");

    canvas.set_width(width * 6.0);
    canvas.set_height(height * 3.0);

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = filled(digest.nibble(i));
        let dx = if row % 2 == 0 { 0.0 } else { width / 2.0 };

        let mut place = |tx: f64, ty: f64| {
            canvas.polyline(&diamond, &style).transform(Transform::translation(tx, ty));
        };
        let near_x = x * width - width / 2.0 + dx;
        let far_x = 6.0 * width - width / 2.0 + dx;
        let near_y = height / 2.0 * y - height / 2.0;
        let far_y = height / 2.0 * 6.0 - height / 2.0;

        place(near_x, near_y);
        if col == 0 {
            place(far_x, near_y);
        }
        if row == 0 {
            place(near_x, far_y);
        }
        if col == 0 && row == 0 {
            place(far_x, far_y);
        }
    }
}

pub fn nested_squares(digest: &Digest, canvas: &mut Canvas) {
    let block = digest.scaled(0, 4.0, 12.0);
    let square = block * 7.0;
    tracing::trace!(block, square, "nested squares");

    let size = (square + block) * 6.0 + block * 6.0;
    canvas.set_width(size);
    canvas.set_height(size);

    for (i, x, y) in grid() {
        let (x, y) = (f64::from(x), f64::from(y));
        let left = x * square + x * block * 2.0 + block / 2.0;
        let top = y * square + y * block * 2.0 + block / 2.0;

        canvas.rect(left, top, square, square, &outlined(digest.nibble(i), block));
        canvas.rect(
            left + block * 2.0,
            top + block * 2.0,
            block * 3.0,
            block * 3.0,
            &outlined(digest.nibble(39 - i), block),
        );
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
