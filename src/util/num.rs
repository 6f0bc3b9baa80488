/// Formats a number with the fewest digits that parse back to the same value.
///
/// Never uses exponent notation, so the result is always a valid numeric
/// literal for the lexer (after an optional leading `-`).
///
/// ## Example
/// ```
/// use celform::util::num::format_number;
///
/// assert_eq!(format_number(12345.0), "12345");
/// assert_eq!(format_number(0.1), "0.1");
/// assert_eq!(format_number(-2.5), "-2.5");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// Out-of-range values saturate at `i64::MIN` / `i64::MAX` and `NaN` becomes
/// `0`; builtins that take counts and positions use this to interpret their
/// numeric arguments.
///
/// ## Example
/// ```
/// use celform::util::num::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(2.9), 2);
/// assert_eq!(truncate_to_i64(-2.9), -2);
/// assert_eq!(truncate_to_i64(f64::NAN), 0);
/// assert_eq!(truncate_to_i64(1e300), i64::MAX);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn truncate_to_i64(value: f64) -> i64 {
    value as i64
}

/// Converts a count or position to `usize`, clamping negatives to `0`.
///
/// ## Example
/// ```
/// use celform::util::num::clamp_to_usize;
///
/// assert_eq!(clamp_to_usize(7), 7);
/// assert_eq!(clamp_to_usize(-3), 0);
/// ```
#[must_use]
pub fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Converts a `usize` (a length or position) to `f64`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
