/// Smallest magnitude shown in fixed notation.
pub const FIXED_MIN: f64 = 1e-6;
/// Magnitude from which exponential notation is used.
pub const FIXED_MAX: f64 = 1e8;

/// Formats an evaluation result for display.
///
/// Values with a magnitude in `[1e-6, 1e8)` are written in fixed notation with
/// at most twelve decimals and no trailing zeros. Everything else (except
/// zero) is written in exponential notation with ten decimals and a signed
/// exponent.
///
/// # Example
/// ```
/// use scical::format::format_result;
///
/// assert_eq!(format_result(0.0), "0");
/// assert_eq!(format_result(0.5), "0.5");
/// assert_eq!(format_result(120.0), "120");
/// assert_eq!(format_result(1.0 / 3.0), "0.333333333333");
/// assert_eq!(format_result(123_456_789.0), "1.2345678900e+8");
/// assert_eq!(format_result(-0.000_000_1), "-1.0000000000e-7");
/// assert_eq!(format_result(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(FIXED_MIN..FIXED_MAX).contains(&magnitude) {
        return format_exponential(value);
    }

    let fixed = format!("{value:.12}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Writes `value` as `d.dddddddddde±x`.
fn format_exponential(value: f64) -> String {
    let formatted = format!("{value:.10e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}
