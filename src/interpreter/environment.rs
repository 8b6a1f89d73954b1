/// Angle modes and conversions.
pub mod angle;
/// Named constants (`pi`, `e`).
pub mod constant;
/// Builtin functions, their names, arities and implementations.
///
/// The function set is a closed enum, so adding a builtin without giving it
/// an arity or an implementation fails to compile.
pub mod function;
/// Operators with their precedence, associativity and arity.
pub mod operator;

use crate::interpreter::environment::angle::AngleMode;

/// The inputs an evaluation depends on besides the expression itself.
///
/// An environment is built fresh for every call from the caller's angle mode
/// and previous answer. It holds no other state, so evaluations never
/// influence each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Environment {
    /// Unit used by the trigonometric functions.
    pub angle_mode:      AngleMode,
    /// Value substituted for the identifier `ans`.
    pub previous_answer: f64,
}

impl Environment {
    /// Creates an environment for a single evaluation.
    #[must_use]
    pub const fn new(angle_mode: AngleMode, previous_answer: f64) -> Self {
        Self { angle_mode,
               previous_answer }
    }

    /// Resolves a bare identifier to a value.
    ///
    /// Only `ans` is bound; constants are substituted before evaluation.
    ///
    /// # Example
    /// ```
    /// use scical::{AngleMode, interpreter::environment::Environment};
    ///
    /// let env = Environment::new(AngleMode::Radians, 42.0);
    /// assert_eq!(env.lookup("ans"), Some(42.0));
    /// assert_eq!(env.lookup("x"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        (name == "ans").then_some(self.previous_answer)
    }
}
