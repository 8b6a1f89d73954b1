use crate::interpreter::environment::operator::Operator;

/// A token of an expression in Reverse Polish Notation.
///
/// The parser emits these in postfix order: every operator and call follows
/// its operands, so the evaluator can reduce the sequence in one pass with a
/// value stack.
#[derive(Debug, Clone, PartialEq)]
pub enum RpnToken {
    /// A literal, or a constant already replaced by its value.
    Number(f64),
    /// A bare identifier such as `ans`, resolved during evaluation.
    Identifier(String),
    /// An operator, including unary negation and the postfix factorial.
    Operator(Operator),
    /// A call to the function `name` with `argc` arguments on the stack.
    Call {
        /// Lowercase name of the function.
        name: String,
        /// Number of arguments written in the call.
        argc: usize,
    },
}

impl std::fmt::Display for RpnToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Operator(Operator::Negate) => f.write_str("neg"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Call { name, argc } => write!(f, "{name}/{argc}"),
        }
    }
}

/// Renders an RPN sequence as space-separated tokens, e.g. `2 3 4 * +`.
///
/// # Example
/// ```
/// use scical::{
///     interpreter::environment::operator::Operator,
///     rpn::{RpnToken, render},
/// };
///
/// let rpn = [RpnToken::Number(2.0), RpnToken::Operator(Operator::Negate)];
/// assert_eq!(render(&rpn), "2 neg");
/// ```
#[must_use]
pub fn render(rpn: &[RpnToken]) -> String {
    rpn.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
