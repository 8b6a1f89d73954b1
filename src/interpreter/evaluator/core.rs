use crate::{
    error::{CalcError, EvalError},
    interpreter::environment::{Environment, function::Function},
    rpn::RpnToken,
};

/// Result type used by the evaluator.
///
/// Evaluation can fail with an `EvalError` or, through the factorial, with a
/// `DomainError`, so the error side is the crate-wide `CalcError`.
pub type EvalResult<T> = Result<T, CalcError>;

/// Reduces an RPN sequence to a single finite number.
///
/// Runs one left-to-right pass with a value stack:
/// - numbers are pushed;
/// - identifiers are resolved through the environment (`ans`);
/// - calls pop as many values as they were written with, and the builtin
///   rejects a count that does not match its arity;
/// - operators pop one or two values, the right operand being on top.
///
/// # Errors
/// - `EvalError::UnknownFunction` / `UnknownIdentifier` for unresolvable
///   names.
/// - `EvalError::ArgumentCountMismatch` when a call's argument count is not
///   accepted by the builtin.
/// - `EvalError::MissingOperands` when the stack runs dry.
/// - `EvalError::MalformedExpression` when anything but one value remains.
/// - `EvalError::NonFiniteResult` when the result is `NaN` or infinite.
/// - `DomainError` from the factorial.
///
/// # Example
/// ```
/// use scical::{
///     AngleMode,
///     interpreter::{
///         environment::{Environment, operator::Operator},
///         evaluator::core::eval_rpn,
///     },
///     rpn::RpnToken,
/// };
///
/// let rpn = [RpnToken::Identifier("ans".to_string()),
///            RpnToken::Number(1.0),
///            RpnToken::Operator(Operator::Sub)];
/// let env = Environment::new(AngleMode::Radians, 5.0);
///
/// assert_eq!(eval_rpn(&rpn, &env).unwrap(), 4.0);
/// ```
pub fn eval_rpn(rpn: &[RpnToken], env: &Environment) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(rpn.len());

    for token in rpn {
        let value = match token {
            RpnToken::Number(value) => *value,
            RpnToken::Identifier(name) => {
                env.lookup(name)
                   .ok_or_else(|| EvalError::UnknownIdentifier { name: name.clone() })?
            },
            RpnToken::Call { name, argc } => {
                let function =
                    Function::from_name(name).ok_or_else(|| EvalError::UnknownFunction { name:
                                                                                            name.clone() })?;

                let args = pop_operands(&mut stack, *argc, name)?;
                function.apply(&args, env.angle_mode)?
            },
            RpnToken::Operator(op) => {
                let operands = pop_operands(&mut stack, op.arity(), op)?;
                op.apply(&operands)?
            },
        };

        log::trace!("{token} -> {value}");
        stack.push(value);
    }

    match stack.as_slice() {
        [value] if value.is_finite() => {
            log::debug!("result: {value}");
            Ok(*value)
        },
        [value] => Err(EvalError::NonFiniteResult { value: *value }.into()),
        _ => Err(EvalError::MalformedExpression { remaining: stack.len() }.into()),
    }
}

/// Pops the top `count` values, returned bottom to top.
fn pop_operands(stack: &mut Vec<f64>,
                count: usize,
                what: impl std::fmt::Display)
                -> EvalResult<Vec<f64>> {
    if stack.len() < count {
        return Err(EvalError::MissingOperands { what: what.to_string() }.into());
    }

    Ok(stack.split_off(stack.len() - count))
}
