// SPDX-License-Identifier: MIT
//
// Canvas — the root of the drawing surface.
//
// Holds the declared document size and the top-level elements in emission
// order. The canvas is append-only: generators push primitives and never
// read them back, and serialization walks the tree once.
//
// Size: width and height start at 100 and are floored to whole units
// when a generator declares them, matching the integer `width`/`height`
// attributes of the emitted `<svg>` root.

use std::fmt;

use crate::element::{Draw, Element, Tag};

/// XML namespace written on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const DEFAULT_SIZE: f64 = 100.0;

/// An append-only SVG document under construction.
///
/// # Examples
///
/// ```
/// use tessera_svg::{Canvas, Draw, Style, Transform};
///
/// let mut canvas = Canvas::new();
/// canvas.set_width(40.7);
/// canvas.set_height(20.0);
/// canvas
///     .circle(5.0, 5.0, 2.5, &Style::new().fill("#222"))
///     .transform(Transform::translation(1.0, 1.0));
///
/// assert_eq!(
///     canvas.to_svg(),
///     "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"40\" height=\"20\">\
///      <circle fill=\"#222\" cx=\"5\" cy=\"5\" r=\"2.5\" transform=\"translate(1,1)\"></circle>\
///      </svg>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl Canvas {
    /// An empty 100×100 canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            elements: Vec::new(),
        }
    }

    /// Declare the document width (floored to a whole number).
    pub fn set_width(&mut self, width: f64) {
        self.width = width.floor();
    }

    /// Declare the document height (floored to a whole number).
    pub fn set_height(&mut self, height: f64) {
        self.height = height.floor();
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Top-level elements in emission order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Total number of elements in the tree, groups and their children
    /// included.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Element::count).sum()
    }

    /// Number of elements with the given tag, at any depth.
    #[must_use]
    pub fn count_tag(&self, tag: Tag) -> usize {
        fn walk(el: &Element, tag: Tag) -> usize {
            usize::from(el.tag() == tag) + el.children().iter().map(|c| walk(c, tag)).sum::<usize>()
        }
        self.elements.iter().map(|el| walk(el, tag)).sum()
    }

    /// Serialize the whole document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(128 + self.element_count() * 160);
        out.push_str("<svg xmlns=\"");
        out.push_str(SVG_NAMESPACE);
        out.push_str("\" width=\"");
        out.push_str(&crate::format_number(self.width));
        out.push_str("\" height=\"");
        out.push_str(&crate::format_number(self.height));
        out.push_str("\">");
        for el in &self.elements {
            el.write_to(&mut out);
        }
        out.push_str("</svg>");
        out
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Draw for Canvas {
    fn push(&mut self, element: Element) -> &mut Element {
        let idx = self.elements.len();
        self.elements.push(element);
        &mut self.elements[idx]
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
