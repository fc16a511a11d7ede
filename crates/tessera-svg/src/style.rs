// SPDX-License-Identifier: MIT
//
// Style — the presentation attributes attached to a primitive.
//
// A style is an ordered attribute list, not a struct of optional fields:
// generators choose which attributes to set and in which order, and that
// order is what ends up in the serialized element. Setting an attribute
// that is already present replaces its value in place.

use crate::value::Value;

/// Ordered presentation attributes for one primitive or group.
///
/// # Examples
///
/// ```
/// use tessera_svg::Style;
///
/// let style = Style::new()
///     .fill("#ddd")
///     .fill_opacity(0.02)
///     .stroke("#000");
/// let names: Vec<_> = style.iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, ["fill", "fill-opacity", "stroke"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    attrs: Vec<(&'static str, Value)>,
}

impl Style {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Set an arbitrary attribute.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn fill(self, value: impl Into<Value>) -> Self {
        self.set("fill", value)
    }

    #[must_use]
    pub fn fill_opacity(self, value: f64) -> Self {
        self.set("fill-opacity", value)
    }

    #[must_use]
    pub fn stroke(self, value: impl Into<Value>) -> Self {
        self.set("stroke", value)
    }

    #[must_use]
    pub fn stroke_opacity(self, value: f64) -> Self {
        self.set("stroke-opacity", value)
    }

    /// Stroke width; either a bare number or text with a unit (`"4px"`).
    #[must_use]
    pub fn stroke_width(self, value: impl Into<Value>) -> Self {
        self.set("stroke-width", value)
    }

    /// Whole-element opacity.
    #[must_use]
    pub fn opacity(self, value: f64) -> Self {
        self.set("opacity", value)
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.attrs.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
