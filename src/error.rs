/// Tokenizer errors.
///
/// Raised when the source text contains a character that cannot start any
/// token, or a numeric literal that cannot be read as a number.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the structural errors detected while converting the token stream
/// to Reverse Polish Notation: unbalanced parentheses, misplaced commas, empty
/// call arguments and unknown operator symbols.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing an RPN sequence: unknown
/// functions and identifiers, wrong arities, leftover or missing operands and
/// non-finite results.
pub mod eval_error;
/// Domain errors.
///
/// Raised when an operator receives an argument outside of its mathematical
/// domain, currently only the factorial.
pub mod domain_error;

pub use domain_error::DomainError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// The broad family an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad character in the input.
    Lex,
    /// Mismatched parentheses or commas, unknown operator.
    Parse,
    /// Unknown function, wrong arity, non-finite result.
    Eval,
    /// Factorial out of domain.
    Domain,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::Eval => "EvalError",
            Self::Domain => "DomainError",
        };
        f.write_str(name)
    }
}

/// Any error produced while evaluating an expression.
///
/// Every stage fails fast, so an evaluation yields exactly one `CalcError`.
/// The `Display` output is meant to be shown to the end user as is.
///
/// # Example
/// ```
/// use scical::{AngleMode, ErrorKind, evaluate};
///
/// let err = evaluate("(2+3", AngleMode::Radians, 0.0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Parse);
/// assert_eq!(err.to_string(), "Mismatched parentheses.");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The parser rejected the token stream.
    Parse(ParseError),
    /// The evaluator could not reduce the RPN sequence.
    Eval(EvalError),
    /// An operator argument was outside its domain.
    Domain(DomainError),
}

impl CalcError {
    /// Returns the family this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Eval(_) => ErrorKind::Eval,
            Self::Domain(_) => ErrorKind::Domain,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Eval(e) => e.fmt(f),
            Self::Domain(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Domain(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for CalcError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl From<DomainError> for CalcError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
