// SPDX-License-Identifier: MIT
//
// Attribute values and number formatting.
//
// Every attribute written to SVG is either a number or a piece of text.
// Numbers go through `format_number`, which reproduces ECMAScript's
// Number-to-String rules:
//
//   35.0      → "35"          (integral values print without a fraction)
//   -0.0      → "0"           (negative zero loses its sign)
//   0.1 + 0.2 → "0.30000000000000004"  (shortest round-trip digits)
//   1e21      → "1e+21"       (exponent form outside [1e-6, 1e21))
//
// Rust's `Display` for f64 already prints the shortest round-trip digits,
// so only the sign of zero, non-finite values, and the exponent ranges
// need special handling.

use std::borrow::Cow;
use std::fmt;

// ─── Value ───────────────────────────────────────────────────────────────────

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A number, formatted with [`format_number`].
    Number(f64),
    /// Literal text (colors, point lists, path data, `"10px"`, `"100%"`).
    Text(Cow<'static, str>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

// ─── Number Formatting ───────────────────────────────────────────────────────

/// Format a number the way ECMAScript's `String(number)` does.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return "0".to_owned();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{n}");
    }

    // Exponent form: Rust writes "1e21" / "1.5e-7", ECMAScript wants an
    // explicit sign on the exponent.
    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

/// Join numbers with commas, the form used for point lists and
/// transform arguments.
#[must_use]
pub fn join_numbers(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 6);
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format_number(*v));
    }
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
