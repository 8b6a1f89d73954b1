use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, factorial::factorial},
};

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Every operator the calculator understands.
///
/// Binary operators come straight from the token stream, `Negate` is what the
/// parser turns a prefix `-` into, and `Factorial` is the postfix `!`.
///
/// | operator      | precedence | associativity | arity |
/// |---------------|-----------:|---------------|------:|
/// | `+` `-`       | 2          | left          | 2     |
/// | `*` `/` `%`   | 3          | left          | 2     |
/// | `^`           | 4          | right         | 2     |
/// | unary `-`     | 5          | right         | 1     |
/// | postfix `!`   | 6          | left          | 1     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// Binary `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`, the floating-point remainder.
    Mod,
    /// `^`
    Pow,
    /// Prefix `-`
    Negate,
    /// Postfix `!`
    Factorial,
}

impl Operator {
    /// Looks up a binary operator by its symbol.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::environment::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol('&'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Looks up a postfix operator by its symbol.
    #[must_use]
    pub const fn from_postfix_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' => Some(Self::Factorial),
            _ => None,
        }
    }

    /// The symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub | Self::Negate => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
            Self::Factorial => '!',
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Pow => 4,
            Self::Negate => 5,
            Self::Factorial => 6,
        }
    }

    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow | Self::Negate => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Factorial => {
                Associativity::Left
            },
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Negate | Self::Factorial => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow => 2,
        }
    }

    /// Whether an incoming operator `self` forces `top`, already on the
    /// operator stack, to be emitted first.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::environment::operator::Operator;
    ///
    /// // `2 - 3 + 4` reduces the subtraction before pushing the addition.
    /// assert!(Operator::Add.yields_to(Operator::Sub));
    /// // `2 ^ 3 ^ 2` keeps the first `^` waiting.
    /// assert!(!Operator::Pow.yields_to(Operator::Pow));
    /// ```
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }

    /// Applies the operator to its operands, given left to right.
    ///
    /// # Errors
    /// - `DomainError` when `Factorial` receives an argument outside `0..=170`.
    /// - `EvalError::MissingOperands` when the operand count does not match
    ///   the arity.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::environment::operator::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(&[7.0, 2.0]).unwrap(), 5.0);
    /// assert_eq!(Operator::Factorial.apply(&[4.0]).unwrap(), 24.0);
    /// assert!(Operator::Factorial.apply(&[-1.0]).is_err());
    /// ```
    pub fn apply(self, operands: &[f64]) -> EvalResult<f64> {
        let value = match (self, operands) {
            (Self::Add, &[l, r]) => l + r,
            (Self::Sub, &[l, r]) => l - r,
            (Self::Mul, &[l, r]) => l * r,
            (Self::Div, &[l, r]) => l / r,
            (Self::Mod, &[l, r]) => l % r,
            (Self::Pow, &[l, r]) => l.powf(r),
            (Self::Negate, &[x]) => -x,
            (Self::Factorial, &[x]) => factorial(x)?,
            _ => {
                return Err(EvalError::MissingOperands { what: self.to_string() }.into());
            },
        };
        Ok(value)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
