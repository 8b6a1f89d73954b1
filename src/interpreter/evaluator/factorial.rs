use crate::{
    error::DomainError,
    util::num::{f64_to_u32_checked, is_integral},
};

/// Largest argument whose factorial is finite as an `f64`.
pub const MAX_FACTORIAL: u32 = 170;

/// Computes `x!` for integers in `0..=170`.
///
/// Each way of leaving the domain has its own error, checked in this order:
/// non-finite, negative, fractional, too large.
///
/// # Errors
/// Returns the matching [`DomainError`] variant for arguments outside the
/// domain.
///
/// # Example
/// ```
/// use scical::{error::DomainError, interpreter::evaluator::factorial::factorial};
///
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert!(factorial(170.0).unwrap().is_finite());
///
/// assert_eq!(factorial(-1.0), Err(DomainError::FactorialNegative { value: -1.0 }));
/// assert_eq!(factorial(3.5), Err(DomainError::FactorialNonInteger { value: 3.5 }));
/// assert_eq!(factorial(171.0), Err(DomainError::FactorialTooLarge { value: 171.0 }));
/// ```
pub fn factorial(x: f64) -> Result<f64, DomainError> {
    if !x.is_finite() {
        return Err(DomainError::FactorialNonFinite { value: x });
    }
    if x < 0.0 {
        return Err(DomainError::FactorialNegative { value: x });
    }
    if !is_integral(x) {
        return Err(DomainError::FactorialNonInteger { value: x });
    }

    let n = f64_to_u32_checked(x).filter(|n| *n <= MAX_FACTORIAL)
                                 .ok_or(DomainError::FactorialTooLarge { value: x })?;

    Ok((2..=n).map(f64::from).product())
}
