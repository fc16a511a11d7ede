//! Affine remapping between numeric ranges.

/// Map `value` from `src_min..src_max` onto `dst_min..dst_max`.
///
/// No clamping: values outside the source range extrapolate. The operation
/// order is fixed because patterns are compared as text and a reordered
/// expression can change the last printed digit.
#[inline]
#[must_use]
pub fn remap(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    (value - src_min) * (dst_max - dst_min) / (src_max - src_min) + dst_min
}
