/// Safely converts an `f64` to `u32` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Returns
/// - `Some(u32)`: The converted value if it is exact.
/// - `None`: For non-finite, negative, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use scical::util::num::f64_to_u32_checked;
///
/// assert_eq!(f64_to_u32_checked(7.0), Some(7));
/// assert_eq!(f64_to_u32_checked(-5.0), None);
/// assert_eq!(f64_to_u32_checked(1.23), None);
/// assert_eq!(f64_to_u32_checked(1e20), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u32_checked(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) || value.fract() != 0.0 {
        return None;
    }

    Some(value as u32)
}

/// Returns `true` if `value` has no fractional part.
///
/// ## Example
/// ```
/// use scical::util::num::is_integral;
///
/// assert!(is_integral(3.0));
/// assert!(!is_integral(3.5));
/// assert!(!is_integral(f64::NAN));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
