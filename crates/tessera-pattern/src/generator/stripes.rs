//! Generators laid out in horizontal (and, for plaid, vertical) bands.

use tessera_svg::{Canvas, Draw, Style, Transform, format_number};

use super::grid;
use crate::digest::Digest;
use crate::palette::{faceted, fill_color, fill_opacity, outlined};
use crate::shape;

/// Number of wave rows; one per digit read.
const WAVE_ROWS: usize = 36;

pub fn sine_waves(digest: &Digest, canvas: &mut Canvas) {
    let period = digest.scaled(0, 100.0, 400.0).floor();
    let amplitude = digest.scaled(1, 30.0, 100.0).floor();
    let wave_width = digest.scaled(2, 3.0, 30.0).floor();
    tracing::trace!(period, amplitude, wave_width, "sine waves");

    canvas.set_width(period);
    canvas.set_height(wave_width * 36.0);

    let x_offset = period / 4.0 * 0.7;
    let path = wave_path(period, amplitude, x_offset);

    for (row, i) in (0..WAVE_ROWS).zip(0_u32..) {
        let style = outlined(digest.nibble(row), wave_width);
        let top = wave_width * f64::from(i) - amplitude * 1.5;

        canvas
            .path(&path, &style)
            .transform(Transform::translation(-period / 4.0, top));
        canvas
            .path(&path, &style)
            .transform(Transform::translation(-period / 4.0, top + wave_width * 36.0));
    }
}

/// One and a half periods of a smooth wave as cubic Bézier segments.
fn wave_path(period: f64, amplitude: f64, x_offset: f64) -> String {
    let n = format_number;
    format!(
        "M0 {amp} C {xo} 0, {c1} 0, {half} {amp} S {c2} {amp2}, {period} {amp} S {c3} 0, {end}, {amp}",
        amp = n(amplitude),
        xo = n(x_offset),
        c1 = n(period / 2.0 - x_offset),
        half = n(period / 2.0),
        c2 = n(period - x_offset),
        amp2 = n(amplitude * 2.0),
        period = n(period),
        c3 = n(period * 1.5 - x_offset),
        end = n(period * 1.5),
    )
}

pub fn plaid(digest: &Digest, canvas: &mut Canvas) {
    // Each pair of digits is (gap before the stripe, stripe thickness).
    let bands = || {
        (0..36).step_by(2).map(move |i| {
            let n = digest.nibble(i + 1);
            (
                f64::from(digest.nibble(i)) + 5.0,
                f64::from(n) + 5.0,
                Style::new().opacity(fill_opacity(n)).fill(fill_color(n)),
            )
        })
    };

    let mut height = 0.0;
    for (gap, thickness, style) in bands() {
        height += gap;
        canvas.rect(0.0, height, "100%", thickness, &style);
        height += thickness;
    }

    let mut width = 0.0;
    for (gap, thickness, style) in bands() {
        width += gap;
        canvas.rect(width, 0.0, thickness, "100%", &style);
        width += thickness;
    }

    tracing::trace!(width, height, "plaid");
    canvas.set_width(width);
    canvas.set_height(height);
}

pub fn chevrons(digest: &Digest, canvas: &mut Canvas) {
    let width = digest.scaled(0, 30.0, 80.0);
    let height = width;
    let halves = shape::chevron(width, height);
    tracing::trace!(width, "chevrons");

    canvas.set_width(width * 6.0);
    canvas.set_height(height * 6.0 * 0.66);

    let place = |canvas: &mut Canvas, style: &Style, tx: f64, ty: f64| {
        let group = canvas.group(style);
        group.transform(Transform::translation(tx, ty));
        for points in &halves {
            group.polyline(points, &Style::new());
        }
    };

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = faceted(digest.nibble(i));

        place(canvas, &style, x * width, y * height * 0.66 - height / 2.0);
        if row == 0 {
            place(canvas, &style, x * width, 6.0 * height * 0.66 - height / 2.0);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
