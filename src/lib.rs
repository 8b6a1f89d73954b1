//! # scical
//!
//! scical is the expression engine of a scientific calculator written in
//! Rust. It tokenizes an expression, rearranges it into Reverse Polish
//! Notation with the shunting-yard algorithm and evaluates the result with a
//! value stack, supporting operator precedence, right-associative powers,
//! unary minus, postfix factorials, percent literals, constants, builtin
//! functions with angle modes, and the previous answer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_rpn, lexer::tokenize, parser::core::to_rpn,
};

/// Provides unified error types for every stage of evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression, and the `CalcError` wrapper that the
/// public entry point returns.
///
/// # Responsibilities
/// - Defines one error enum per family (lex, parse, eval, domain).
/// - Attaches the offending character, symbol, name or value to each error.
/// - Classifies errors by `ErrorKind` for callers that branch on the family.
pub mod error;
/// Formats results for display.
///
/// Not part of evaluation; callers use it to render numbers the way the
/// calculator shows them, switching to exponential notation for very small
/// and very large magnitudes.
pub mod format;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// environment they share.
///
/// # Responsibilities
/// - Coordinates the three stages: tokens, RPN, value.
/// - Defines the operator, function and constant tables.
/// - Exposes every stage so it can be driven on its own.
pub mod interpreter;
/// The postfix token sequence passed from the parser to the evaluator.
pub mod rpn;
/// A stateful calculator session on top of the stateless engine.
///
/// Keeps the angle mode, the previous answer, a memory register and a
/// bounded history between evaluations.
pub mod session;
/// General utilities for safe numeric conversion.
pub mod util;

pub use crate::{
    error::{CalcError, ErrorKind},
    interpreter::environment::angle::AngleMode,
};

/// Evaluates a calculator expression.
///
/// The expression is tokenized, converted to RPN and reduced to a number.
/// Nothing is shared between calls: `angle_mode` and `previous_answer` are
/// the only inputs besides the expression, so repeated calls with the same
/// arguments give the same result (except for `rand()`).
///
/// # Errors
/// Returns the first error any stage encounters; see [`CalcError::kind`].
///
/// # Examples
/// ```
/// use scical::{AngleMode, ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4", AngleMode::Radians, 0.0).unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2", AngleMode::Radians, 0.0).unwrap(), 512.0);
/// assert_eq!(evaluate("ans+1", AngleMode::Radians, 5.0).unwrap(), 6.0);
///
/// let sine = evaluate("sin(90)", AngleMode::Degrees, 0.0).unwrap();
/// assert!((sine - 1.0).abs() < 1e-12);
///
/// let err = evaluate("1/0", AngleMode::Radians, 0.0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Eval);
/// ```
pub fn evaluate(expression: &str,
                angle_mode: AngleMode,
                previous_answer: f64)
                -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let rpn = to_rpn(&tokens)?;
    let env = Environment::new(angle_mode, previous_answer);

    eval_rpn(&rpn, &env)
}
