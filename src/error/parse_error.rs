#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting tokens to RPN.
pub enum ParseError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParentheses,
    /// A `,` appeared outside of a function call.
    MisplacedComma,
    /// An operator is missing an operand, as in `3+` or `(*2)`.
    MissingOperand {
        /// The operator symbol.
        symbol: char,
    },
    /// A function call contained an empty argument, as in `max(1,,2)`.
    EmptyArgument {
        /// The name of the called function.
        name: String,
    },
    /// An operator symbol has no definition.
    UnknownOperator {
        /// The symbol as it appeared in the token stream.
        symbol: char,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
            Self::MisplacedComma => write!(f, "Misplaced comma outside of a function call."),
            Self::MissingOperand { symbol } => write!(f, "Operator '{symbol}' is missing an operand."),
            Self::EmptyArgument { name } => {
                write!(f, "Empty argument in call to function '{name}'.")
            },
            Self::UnknownOperator { symbol } => write!(f, "Unknown operator '{symbol}'."),
        }
    }
}

impl std::error::Error for ParseError {}
