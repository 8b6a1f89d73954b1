#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents arguments outside the domain of the factorial operator.
///
/// Factorial is only defined for integers in `0..=170`; anything larger
/// overflows `f64`.
pub enum DomainError {
    /// The argument was `NaN` or infinite.
    FactorialNonFinite {
        /// The argument.
        value: f64,
    },
    /// The argument was negative.
    FactorialNegative {
        /// The argument.
        value: f64,
    },
    /// The argument had a fractional part.
    FactorialNonInteger {
        /// The argument.
        value: f64,
    },
    /// The argument exceeded the largest factorial representable as `f64`.
    FactorialTooLarge {
        /// The argument.
        value: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactorialNonFinite { value } => {
                write!(f, "Factorial is not defined for non-finite value {value}.")
            },
            Self::FactorialNegative { value } => {
                write!(f, "Factorial is not defined for negative number {value}.")
            },
            Self::FactorialNonInteger { value } => {
                write!(f, "Factorial is only defined for integers, but found {value}.")
            },
            Self::FactorialTooLarge { value } => write!(f,
                                                        "Factorial of {value} is too large; the maximum is {}.",
                                                        crate::interpreter::evaluator::factorial::MAX_FACTORIAL),
        }
    }
}

impl std::error::Error for DomainError {}
