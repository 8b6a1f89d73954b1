use crate::{interpreter::environment::operator::Operator, rpn::RpnToken};

/// An entry on the parser's operator stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackEntry {
    /// An operator waiting for its right-hand side to be complete.
    Operator(Operator),
    /// A plain `(`.
    Group,
    /// A pending function call, opened by `name(`.
    Call {
        /// Lowercase function name.
        name:   String,
        /// Commas seen directly inside this call so far.
        commas: usize,
    },
}

/// What the previously consumed token was.
///
/// A `-` negates when nothing that can end an operand precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Previous {
    /// Nothing has been consumed yet.
    Start,
    /// A number, constant or bare identifier.
    Operand,
    /// A binary operator or a negation.
    Operator,
    /// A `(`, including the one opening a call.
    Open,
    /// A `,`.
    Comma,
    /// A postfix `!`.
    Postfix,
    /// A `)`.
    Close,
}

impl Previous {
    /// Whether a `-` following this token is unary.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::parser::stack::Previous;
    ///
    /// assert!(Previous::Start.expects_operand());
    /// assert!(Previous::Comma.expects_operand());
    /// assert!(!Previous::Close.expects_operand());
    /// assert!(!Previous::Postfix.expects_operand());
    /// ```
    #[must_use]
    pub const fn expects_operand(self) -> bool {
        matches!(self, Self::Start | Self::Operator | Self::Open | Self::Comma)
    }
}

/// Moves operators from the top of `stack` to `output` until a group or call
/// entry is on top.
///
/// Returns `false` when the stack ran empty without reaching one.
pub fn drain_to_group(stack: &mut Vec<StackEntry>, output: &mut Vec<RpnToken>) -> bool {
    while let Some(StackEntry::Operator(op)) = stack.last() {
        output.push(RpnToken::Operator(*op));
        stack.pop();
    }
    !stack.is_empty()
}
