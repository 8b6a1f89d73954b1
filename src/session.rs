use std::collections::VecDeque;

use crate::{AngleMode, error::CalcError, evaluate};

/// Maximum number of entries kept in a session history.
pub const HISTORY_LIMIT: usize = 200;

/// A successfully evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The expression as the user typed it.
    pub expression: String,
    /// Its value.
    pub result:     f64,
}

/// The state a calculator front end keeps between evaluations.
///
/// The engine itself is stateless; a `Session` feeds it the angle mode and
/// the previous answer, and records what comes back. It also provides the
/// memory register of a pocket calculator.
///
/// # Example
/// ```
/// use scical::session::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.evaluate("6 * 7").unwrap(), 42.0);
/// assert_eq!(session.evaluate("ans / 2").unwrap(), 21.0);
/// assert_eq!(session.history().len(), 2);
/// assert_eq!(session.history()[0].expression, "ans / 2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    angle_mode: AngleMode,
    answer:     f64,
    memory:     f64,
    history:    VecDeque<HistoryEntry>,
}

impl Session {
    /// Creates a session in radians with a zero answer, empty memory and no
    /// history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub const fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    /// The value `ans` currently stands for.
    #[must_use]
    pub const fn answer(&self) -> f64 {
        self.answer
    }

    pub const fn set_answer(&mut self, answer: f64) {
        self.answer = answer;
    }

    /// Past evaluations, newest first.
    #[must_use]
    pub const fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Evaluates an expression and commits the result.
    ///
    /// The `π` glyph is accepted as `pi`. On success the result becomes the
    /// new answer and is recorded in the history, which keeps at most
    /// [`HISTORY_LIMIT`] entries. On failure the session is left untouched.
    ///
    /// # Errors
    /// Returns the engine's error unchanged.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, CalcError> {
        let result = self.preview(expression)?;

        self.answer = result;
        self.history.push_front(HistoryEntry { expression: expression.to_string(),
                                               result });
        self.history.truncate(HISTORY_LIMIT);

        Ok(result)
    }

    /// Evaluates an expression without changing the session, as a live
    /// preview does while the user is still typing.
    ///
    /// # Errors
    /// Returns the engine's error unchanged.
    pub fn preview(&self, expression: &str) -> Result<f64, CalcError> {
        evaluate(&expression.replace('π', "pi"), self.angle_mode, self.answer)
    }

    /// The value in the memory register.
    #[must_use]
    pub const fn memory_recall(&self) -> f64 {
        self.memory
    }

    pub const fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    pub const fn memory_store(&mut self, value: f64) {
        self.memory = value;
    }

    /// Adds `value` to the memory register.
    pub fn memory_add(&mut self, value: f64) {
        self.memory += value;
    }

    /// Subtracts `value` from the memory register.
    pub fn memory_subtract(&mut self, value: f64) {
        self.memory -= value;
    }
}
