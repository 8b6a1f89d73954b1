/// The environment module defines everything an expression can refer to.
///
/// Operators, builtin functions and constants are closed enums with their
/// precedence, arity and numeric behaviour attached. The `Environment` struct
/// bundles the per-call inputs: the angle mode and the previous answer.
///
/// # Responsibilities
/// - Maps symbols and names to operator, function and constant kinds.
/// - Implements the numeric operation behind every kind.
/// - Converts angles between the active mode and radians.
pub mod environment;
/// The evaluator module reduces RPN sequences to numbers.
///
/// The evaluator walks the postfix sequence once with a value stack, applying
/// operators and functions as they appear. It is the last stage of the
/// pipeline and the only one that touches numeric domains.
///
/// # Responsibilities
/// - Resolves `ans` and builtin function names.
/// - Checks call arities and operand availability.
/// - Rejects malformed sequences, non-finite results and out-of-domain
///   factorial arguments.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw source text and produces a flat sequence of
/// numbers, operators, parentheses, commas and identifiers. This is the first
/// stage of evaluation.
///
/// # Responsibilities
/// - Reads numeric literals with fractions, exponents and percent suffixes.
/// - Folds identifiers to lowercase.
/// - Reports the first character that cannot start a token.
pub mod lexer;
/// The parser module rearranges tokens into Reverse Polish Notation.
///
/// The parser applies operator precedence and associativity, decides which
/// minus signs are negations and counts function call arguments, producing a
/// postfix sequence the evaluator can reduce without further lookahead.
///
/// # Responsibilities
/// - Converts infix tokens into RPN with the shunting-yard algorithm.
/// - Substitutes constants by their values.
/// - Reports unbalanced parentheses, stray commas and unknown operators.
pub mod parser;
