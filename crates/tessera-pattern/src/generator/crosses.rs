//! Plus signs, upright and turned 45° into crosses.
//!
//! Both generators draw each sign as a group holding the two bars from
//! [`shape::plus`]; the group carries the style and the placement.

use tessera_svg::{Canvas, Draw, Style, Transform};

use super::grid;
use crate::digest::Digest;
use crate::palette::{STROKE_COLOR, STROKE_OPACITY, fill_color, fill_opacity, washed};
use crate::shape;

/// Append one plus sign as a styled, transformed group.
fn draw_plus(canvas: &mut Canvas, bars: &[[f64; 4]; 2], style: &Style, transform: Transform) {
    let group = canvas.group(style);
    group.transform(transform);
    for &[x, y, w, h] in bars {
        group.rect(x, y, w, h, &Style::new());
    }
}

pub fn plus_signs(digest: &Digest, canvas: &mut Canvas) {
    let square = digest.scaled(0, 10.0, 25.0);
    let plus = square * 3.0;
    let bars = shape::plus(square);
    tracing::trace!(square, plus, "plus signs");

    canvas.set_width(square * 12.0);
    canvas.set_height(square * 12.0);

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let n = digest.nibble(i);
        let style = Style::new()
            .fill(fill_color(n))
            .stroke(STROKE_COLOR)
            .stroke_opacity(STROKE_OPACITY)
            .fill_opacity(fill_opacity(n));
        let dx = if row % 2 == 0 { 0.0 } else { 1.0 };

        let near_x = x * plus - x * square + dx * square - square;
        let far_x = 4.0 * plus - x * square + dx * square - square;
        let near_y = y * plus - y * square - plus / 2.0;
        let far_y = 4.0 * plus - y * square - plus / 2.0;

        draw_plus(canvas, &bars, &style, Transform::translation(near_x, near_y));
        if col == 0 {
            draw_plus(canvas, &bars, &style, Transform::translation(far_x, near_y));
        }
        if row == 0 {
            draw_plus(canvas, &bars, &style, Transform::translation(near_x, far_y));
        }
        if col == 0 && row == 0 {
            draw_plus(canvas, &bars, &style, Transform::translation(far_x, far_y));
        }
    }
}

pub fn xes(digest: &Digest, canvas: &mut Canvas) {
    let square = digest.scaled(0, 10.0, 25.0);
    let x_size = square * 3.0 * 0.943;
    let bars = shape::plus(square);
    tracing::trace!(square, x_size, "xes");

    canvas.set_width(x_size * 3.0);
    canvas.set_height(x_size * 3.0);

    let turned = |tx: f64, ty: f64| {
        Transform::translation(tx, ty).rotate(45.0, x_size / 2.0, x_size / 2.0)
    };

    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = washed(digest.nibble(i));
        let stagger = |base: f64| {
            if col % 2 == 0 { base } else { base + x_size / 4.0 }
        };

        let dy = stagger(y * x_size - x_size * 0.5);
        let near_x = x * x_size / 2.0 - x_size / 2.0;
        let far_x = 6.0 * x_size / 2.0 - x_size / 2.0;

        draw_plus(canvas, &bars, &style, turned(near_x, dy - y * x_size / 2.0));

        if col == 0 {
            draw_plus(canvas, &bars, &style, turned(far_x, dy - y * x_size / 2.0));
        }
        // The first row wraps to the bottom edge from a shifted baseline.
        let dy = if row == 0 {
            let dy = stagger(6.0 * x_size - x_size / 2.0);
            draw_plus(canvas, &bars, &style, turned(near_x, dy - 6.0 * x_size / 2.0));
            dy
        } else {
            dy
        };
        if row == 5 {
            draw_plus(canvas, &bars, &style, turned(near_x, dy - 11.0 * x_size / 2.0));
        }
        if col == 0 && row == 0 {
            draw_plus(canvas, &bars, &style, turned(far_x, dy - 6.0 * x_size / 2.0));
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use tessera_svg::Tag;

    use super::super::Generator;
    use super::super::testing::{digest, offset, render, text_attr};
    use pretty_assertions::assert_eq;

    // ── Plus Signs ───────────────────────────────────────────────────────

    #[test]
    fn plus_signs_are_groups_of_two_bars() {
        let canvas = render(Generator::PlusSigns, &digest("0"));
        assert_eq!((canvas.width(), canvas.height()), (120.0, 120.0));
        assert_eq!(canvas.count_tag(Tag::Group), 49);
        assert_eq!(canvas.count_tag(Tag::Rect), 98);

        let group = &canvas.elements()[0];
        assert_eq!(group.children().len(), 2);
        assert_eq!(text_attr(&group.children()[0], "height"), "30");
        assert!(group.children()[0].attrs().all(|(n, _)| ["x", "y", "width", "height"].contains(n)));
    }

    #[test]
    fn plus_signs_wrap_edges() {
        let canvas = render(Generator::PlusSigns, &digest("0"));
        let els = canvas.elements();
        assert_eq!(offset(&els[0]), (-10.0, -15.0));
        assert_eq!(offset(&els[1]), (110.0, -15.0));
        assert_eq!(offset(&els[2]), (-10.0, 105.0));
        assert_eq!(offset(&els[3]), (110.0, 105.0));
    }

    #[test]
    fn plus_sign_style_order() {
        let canvas = render(Generator::PlusSigns, &digest("0"));
        let names: Vec<_> = canvas.elements()[0].attrs().map(|(n, _)| *n).collect();
        assert_eq!(names, ["fill", "stroke", "stroke-opacity", "fill-opacity"]);
    }

    #[test]
    fn odd_rows_shift_by_one_arm() {
        let canvas = render(Generator::PlusSigns, &digest("0"));
        // Row 1 starts after row 0's 6 cells and 8 edge copies.
        let row1 = &canvas.elements()[14];
        assert_eq!(offset(row1), (0.0, 5.0));
    }

    // ── Xes ──────────────────────────────────────────────────────────────

    #[test]
    fn xes_wrap_top_and_bottom() {
        let canvas = render(Generator::Xes, &digest("0"));
        // 36 cells, 6 left-column, 6 top-row and 6 bottom-row copies, 1 corner.
        assert_eq!(canvas.count_tag(Tag::Group), 55);
        assert_eq!(canvas.width(), 84.0);
    }

    #[test]
    fn xes_are_rotated_about_the_tile_center() {
        let canvas = render(Generator::Xes, &digest("0"));
        let t = canvas.elements()[0].applied_transform().unwrap().to_string();
        assert_eq!(
            t,
            "translate(-14.145,-14.145) rotate(45,14.145,14.145)"
        );
    }
}
