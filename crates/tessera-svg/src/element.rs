// SPDX-License-Identifier: MIT
//
// Element — one primitive (or group) on the drawing surface.
//
// An element is built from a style plus its geometry. Attributes are kept
// in the order they will be written:
//
//   <polyline fill=".." fill-opacity=".." points=".." transform=".."></polyline>
//             └──── style, as set ────┘  └geometry┘  └─ optional ─┘
//
// Groups carry only a style and a transform; their children inherit both.
// The `Draw` trait is implemented for the canvas and for elements, so
// generators append to a group with the same calls they use on the canvas.

use crate::style::Style;
use crate::transform::Transform;
use crate::value::Value;

// ─── Tag ─────────────────────────────────────────────────────────────────────

/// The kind of primitive an element draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Rect,
    Circle,
    Polyline,
    Path,
    Group,
}

impl Tag {
    /// The SVG element name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Polyline => "polyline",
            Self::Path => "path",
            Self::Group => "g",
        }
    }
}

// ─── Element ─────────────────────────────────────────────────────────────────

/// A primitive with its attributes, optional transform, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    attrs: Vec<(&'static str, Value)>,
    transform: Option<Transform>,
    children: Vec<Element>,
}

impl Element {
    /// Start an element from a style. Geometry is added with [`Self::with`].
    #[must_use]
    pub fn new(tag: Tag, style: &Style) -> Self {
        Self {
            tag,
            attrs: style.iter().cloned().collect(),
            transform: None,
            children: Vec::new(),
        }
    }

    /// Add (or replace) an attribute.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Attach a transform, replacing any previous one.
    pub fn transform(&mut self, transform: Transform) -> &mut Self {
        self.transform = if transform.is_empty() { None } else { Some(transform) };
        self
    }

    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Attributes in serialization order (excluding the transform).
    pub fn attrs(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.attrs.iter()
    }

    /// The transform attached to this element, if any.
    #[must_use]
    pub const fn applied_transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// This element plus all of its descendants, depth-first.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Append the markup for this element (and its children) to `out`.
    pub fn write_to(&self, out: &mut String) {
        let name = self.tag.name();
        out.push('<');
        out.push_str(name);
        for (attr, value) in &self.attrs {
            write_attr(out, attr, &value.to_string());
        }
        if let Some(transform) = &self.transform {
            write_attr(out, "transform", &transform.to_string());
        }
        out.push('>');
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

/// Escape the characters that would break a double-quoted attribute.
fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

// ─── Draw ────────────────────────────────────────────────────────────────────

/// Anything primitives can be appended to: the canvas or a group.
///
/// Each method appends one element and returns it, so a transform can be
/// chained on: `canvas.polyline(points, &style).transform(t)`.
pub trait Draw {
    /// Append an element and return a handle to it.
    fn push(&mut self, element: Element) -> &mut Element;

    fn rect(
        &mut self,
        x: impl Into<Value>,
        y: impl Into<Value>,
        width: impl Into<Value>,
        height: impl Into<Value>,
        style: &Style,
    ) -> &mut Element {
        self.push(
            Element::new(Tag::Rect, style)
                .with("x", x)
                .with("y", y)
                .with("width", width)
                .with("height", height),
        )
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) -> &mut Element {
        self.push(
            Element::new(Tag::Circle, style)
                .with("cx", cx)
                .with("cy", cy)
                .with("r", r),
        )
    }

    fn polyline(&mut self, points: &str, style: &Style) -> &mut Element {
        self.push(Element::new(Tag::Polyline, style).with("points", points.to_owned()))
    }

    fn path(&mut self, d: &str, style: &Style) -> &mut Element {
        self.push(Element::new(Tag::Path, style).with("d", d.to_owned()))
    }

    /// Open a group. Append children to the returned element.
    fn group(&mut self, style: &Style) -> &mut Element {
        self.push(Element::new(Tag::Group, style))
    }
}

impl Draw for Element {
    fn push(&mut self, element: Element) -> &mut Element {
        let idx = self.children.len();
        self.children.push(element);
        &mut self.children[idx]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
