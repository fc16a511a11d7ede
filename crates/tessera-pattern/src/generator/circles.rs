//! Circle-based generators.

use tessera_svg::{Canvas, Draw, Style};

use super::grid;
use crate::digest::Digest;
use crate::palette::{fill_color, fill_opacity, outlined, washed};

/// Draw a circle in every grid cell plus its wrap-around copies, centered
/// on grid intersections `pitch` apart.
fn overlapping(canvas: &mut Canvas, pitch: f64, radius: f64, style_for: impl Fn(usize) -> Style) {
    for (i, col, row) in grid() {
        let (x, y) = (f64::from(col), f64::from(row));
        let style = style_for(i);

        canvas.circle(x * pitch, y * pitch, radius, &style);
        if col == 0 {
            canvas.circle(6.0 * pitch, y * pitch, radius, &style);
        }
        if row == 0 {
            canvas.circle(x * pitch, 6.0 * pitch, radius, &style);
        }
        if col == 0 && row == 0 {
            canvas.circle(6.0 * pitch, 6.0 * pitch, radius, &style);
        }
    }
}

pub fn overlapping_circles(digest: &Digest, canvas: &mut Canvas) {
    let diameter = digest.scaled(0, 25.0, 200.0);
    let radius = diameter / 2.0;
    tracing::trace!(radius, "overlapping circles");

    canvas.set_width(radius * 6.0);
    canvas.set_height(radius * 6.0);

    overlapping(canvas, radius, radius, |i| washed(digest.nibble(i)));
}

pub fn overlapping_rings(digest: &Digest, canvas: &mut Canvas) {
    let ring = digest.scaled(0, 10.0, 60.0);
    let stroke_width = ring / 4.0;
    tracing::trace!(ring, stroke_width, "overlapping rings");

    canvas.set_width(ring * 6.0);
    canvas.set_height(ring * 6.0);

    overlapping(canvas, ring, ring - stroke_width / 2.0, |i| {
        outlined(digest.nibble(i), stroke_width)
    });
}

pub fn concentric_circles(digest: &Digest, canvas: &mut Canvas) {
    let ring = digest.scaled(0, 10.0, 60.0);
    let stroke_width = ring / 5.0;
    tracing::trace!(ring, stroke_width, "concentric circles");

    canvas.set_width((ring + stroke_width) * 6.0);
    canvas.set_height((ring + stroke_width) * 6.0);

    for (i, x, y) in grid() {
        let (x, y) = (f64::from(x), f64::from(y));
        let cx = x * ring + x * stroke_width + (ring + stroke_width) / 2.0;
        let cy = y * ring + y * stroke_width + (ring + stroke_width) / 2.0;

        canvas.circle(cx, cy, ring / 2.0, &outlined(digest.nibble(i), stroke_width));

        let dot = digest.nibble(39 - i);
        canvas.circle(
            cx,
            cy,
            ring / 4.0,
            &Style::new().fill(fill_color(dot)).fill_opacity(fill_opacity(dot)),
        );
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use tessera_svg::{Element, Tag};

    use super::super::Generator;
    use super::super::testing::{digest, render, text_attr};
    use pretty_assertions::assert_eq;

    fn center(el: &Element) -> (String, String) {
        (text_attr(el, "cx"), text_attr(el, "cy"))
    }

    #[test]
    fn overlapping_circles_wrap_edges() {
        let canvas = render(Generator::OverlappingCircles, &digest("0"));
        // diameter 25, radius 12.5
        assert_eq!((canvas.width(), canvas.height()), (75.0, 75.0));
        assert_eq!(canvas.count_tag(Tag::Circle), 49);

        let els = canvas.elements();
        assert_eq!(center(&els[0]), ("0".into(), "0".into()));
        assert_eq!(center(&els[1]), ("75".into(), "0".into()));
        assert_eq!(center(&els[2]), ("0".into(), "75".into()));
        assert_eq!(center(&els[3]), ("75".into(), "75".into()));
        assert_eq!(text_attr(&els[0], "r"), "12.5");
    }

    #[test]
    fn duplicates_share_the_cell_style() {
        let canvas = render(Generator::OverlappingCircles, &digest("3"));
        let els = canvas.elements();
        for dup in &els[1..4] {
            assert_eq!(text_attr(dup, "fill"), text_attr(&els[0], "fill"));
            assert_eq!(text_attr(dup, "opacity"), text_attr(&els[0], "opacity"));
        }
        assert_eq!(text_attr(&els[0], "fill"), "#222");
    }

    #[test]
    fn rings_are_outlines_inset_by_half_the_stroke() {
        let canvas = render(Generator::OverlappingRings, &digest("0"));
        assert_eq!((canvas.width(), canvas.height()), (60.0, 60.0));
        assert_eq!(canvas.count_tag(Tag::Circle), 49);

        let first = &canvas.elements()[0];
        assert_eq!(text_attr(first, "r"), "8.75");
        assert_eq!(text_attr(first, "fill"), "none");
        assert_eq!(text_attr(first, "stroke-width"), "2.5px");
    }

    #[test]
    fn concentric_circles_pair_ring_and_dot() {
        let canvas = render(Generator::ConcentricCircles, &digest("0"));
        // ring 10, stroke 2
        assert_eq!((canvas.width(), canvas.height()), (72.0, 72.0));
        assert_eq!(canvas.count_tag(Tag::Circle), 72);

        let els = canvas.elements();
        assert_eq!(center(&els[0]), ("6".into(), "6".into()));
        assert_eq!(center(&els[1]), ("6".into(), "6".into()));
        assert_eq!(text_attr(&els[0], "r"), "5");
        assert_eq!(text_attr(&els[1], "r"), "2.5");
        assert_eq!(text_attr(&els[0], "stroke-width"), "2px");

        let dot: Vec<_> = els[1].attrs().map(|(n, _)| *n).collect();
        assert_eq!(dot, ["fill", "fill-opacity", "cx", "cy", "r"]);
        // Second cell sits one ring plus one stroke further right.
        assert_eq!(center(&els[2]), ("18".into(), "6".into()));
    }
}
