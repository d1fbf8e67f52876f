//! Lossy numeric conversions with the clippy casting lints silenced in one place.
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Converts a non-negative `f64` into a `usize`.
///
/// Negative values and NaN map to zero, values beyond `usize::MAX` saturate.
#[must_use]
pub const fn f64_to_usize(value: f64) -> usize {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let newval = value as usize;
    newval
}
