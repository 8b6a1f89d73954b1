/// Shunting-yard conversion from infix tokens to RPN.
///
/// Walks the token stream once, emitting operands immediately and holding
/// operators, groups and pending function calls on an explicit stack until
/// precedence, associativity or a closing parenthesis releases them.
pub mod core;

/// Operator stack entries and helpers shared by the conversion loop.
///
/// Tracks the kind of the previous token, which decides whether a `-` is a
/// negation and whether a call argument is empty.
pub mod stack;
