//! Undefined-value sentinel for surface samples.
//!
//! Surfaces mark "no data" cells with a very large magnitude rather than NaN.
//! Anything at or above [`UNDEF_MAP_LIMIT`] is treated as undefined.

/// Fill value written into cells that hold no data.
pub const UNDEF_MAP: f64 = 1.0e33;

/// Threshold at or above which a sample is undefined.
pub const UNDEF_MAP_LIMIT: f64 = 9.9e32;

/// Returns true if `value` is the undefined sentinel (or any larger value).
#[inline]
pub fn is_undefined(value: f64) -> bool {
    value >= UNDEF_MAP_LIMIT
}

/// Returns true if `value` should be emitted as data.
///
/// This is the plain `<` comparison against the limit, so NaN is never defined.
#[inline]
pub fn is_defined(value: f64) -> bool {
    value < UNDEF_MAP_LIMIT
}
