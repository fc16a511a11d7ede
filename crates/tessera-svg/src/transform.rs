// SPDX-License-Identifier: MIT
//
// Transform — an ordered list of 2D affine operations.
//
// SVG applies a transform list left to right in the element's parent
// coordinate system, so `translate(..) scale(..)` and `scale(..)
// translate(..)` place a shape differently. The list therefore keeps the
// exact order the caller composed it in, and serializes as
//
//   translate(x,y) rotate(deg,cx,cy) scale(sx,sy)
//
// with one space between operations and commas between arguments.

use std::fmt;

use crate::value::join_numbers;

/// A single transform operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Move by `(x, y)`.
    Translate(f64, f64),
    /// Rotate by `degrees` about the pivot `(cx, cy)`.
    Rotate { degrees: f64, cx: f64, cy: f64 },
    /// Scale by `(x, y)`; negative factors mirror.
    Scale(f64, f64),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate(x, y) => write!(f, "translate({})", join_numbers(&[x, y])),
            Self::Rotate { degrees, cx, cy } => {
                write!(f, "rotate({})", join_numbers(&[degrees, cx, cy]))
            }
            Self::Scale(x, y) => write!(f, "scale({})", join_numbers(&[x, y])),
        }
    }
}

/// An ordered transform list.
///
/// # Examples
///
/// ```
/// use tessera_svg::Transform;
///
/// let t = Transform::new().translate(10.0, -5.0).rotate(45.0, 3.0, 3.0);
/// assert_eq!(t.to_string(), "translate(10,-5) rotate(45,3,3)");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Shorthand for a transform that is only a translation.
    #[must_use]
    pub fn translation(x: f64, y: f64) -> Self {
        Self::new().translate(x, y)
    }

    #[must_use]
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.ops.push(TransformOp::Translate(x, y));
        self
    }

    #[must_use]
    pub fn rotate(mut self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.ops.push(TransformOp::Rotate { degrees, cx, cy });
        self
    }

    #[must_use]
    pub fn scale(mut self, x: f64, y: f64) -> Self {
        self.ops.push(TransformOp::Scale(x, y));
        self
    }

    /// The first translation in the list, if any.
    #[must_use]
    pub fn translation_offset(&self) -> Option<(f64, f64)> {
        self.ops.iter().find_map(|op| match *op {
            TransformOp::Translate(x, y) => Some((x, y)),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_transform_prints_nothing() {
        assert!(Transform::new().is_empty());
        assert_eq!(Transform::new().to_string(), "");
    }

    #[test]
    fn keeps_composition_order() {
        let t = Transform::new()
            .scale(-1.0, 1.0)
            .translate(-90.5, 4.0)
            .rotate(-30.0, 0.0, 0.0);
        assert_eq!(t.to_string(), "scale(-1,1) translate(-90.5,4) rotate(-30,0,0)");
    }

    #[test]
    fn translate_rotate_scale() {
        let t = Transform::translation(1.5, 2.0)
            .rotate(180.0, 7.5, 6.5)
            .scale(1.0, -1.0);
        assert_eq!(t.to_string(), "translate(1.5,2) rotate(180,7.5,6.5) scale(1,-1)");
    }

    #[test]
    fn negative_zero_arguments_print_as_zero() {
        let t = Transform::translation(-0.0, 3.0);
        assert_eq!(t.to_string(), "translate(0,3)");
    }

    #[test]
    fn translation_offset_finds_first_translate() {
        let t = Transform::new().scale(-1.0, -1.0).translate(4.0, 5.0);
        assert_eq!(t.translation_offset(), Some((4.0, 5.0)));
        assert_eq!(Transform::new().rotate(1.0, 0.0, 0.0).translation_offset(), None);
    }
}
