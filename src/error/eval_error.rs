use crate::interpreter::environment::function::Arity;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating an RPN sequence.
pub enum EvalError {
    /// Called a function that has no definition.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Referenced a bare identifier that is neither `ans` nor a constant.
    UnknownIdentifier {
        /// The identifier as written (lowercased).
        name: String,
    },
    /// A function was called with an argument count its arity rejects.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The arity the function declares.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operator or function needed more operands than the stack holds.
    MissingOperands {
        /// The operator symbol or function name.
        what: String,
    },
    /// The evaluation stack did not reduce to exactly one value.
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// The final value was `NaN` or infinite.
    NonFiniteResult {
        /// The offending value.
        value: f64,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::UnknownIdentifier { name } => write!(f, "Unknown identifier '{name}'."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected}, but found {found}."),
            Self::MissingOperands { what } => write!(f, "Missing operands for '{what}'."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Malformed expression: {remaining} values left after evaluation."),
            Self::NonFiniteResult { value } => {
                write!(f, "Result is not a finite number ({value}).")
            },
        }
    }
}

impl std::error::Error for EvalError {}
