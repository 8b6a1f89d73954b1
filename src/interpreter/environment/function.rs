use crate::{
    error::EvalError,
    interpreter::{environment::angle::AngleMode, evaluator::core::EvalResult},
};

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::environment::function::Arity;
    ///
    /// assert!(Arity::Exact(2).check(2));
    /// assert!(!Arity::Exact(2).check(3));
    /// assert!(Arity::AtLeast(1).check(5));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (prefix, n) = match self {
            Self::Exact(n) => ("", *n),
            Self::AtLeast(n) => ("at least ", *n),
        };
        let noun = if n == 1 { "argument" } else { "arguments" };
        write!(f, "{prefix}{n} {noun}")
    }
}

/// Defines the builtin functions by generating the enum, its name lookup and
/// its arity table from a single list.
///
/// Each entry provides:
/// - the variant,
/// - the lowercase name it is called by,
/// - an arity specification.
macro_rules! builtin_functions {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => { name: $name:literal, arity: $arity:expr $(,)? }
        ),* $(,)?
    ) => {
        /// Every builtin function the calculator understands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[$($name,)*];

        impl Function {
            /// Looks up a builtin by its lowercase name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The name the builtin is called by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The number of arguments the builtin accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }
        }
    };
}

builtin_functions! {
    /// Sine of an angle in the active mode.
    Sin     => { name: "sin",     arity: Arity::Exact(1) },
    /// Cosine of an angle in the active mode.
    Cos     => { name: "cos",     arity: Arity::Exact(1) },
    /// Tangent of an angle in the active mode.
    Tan     => { name: "tan",     arity: Arity::Exact(1) },
    /// Arcsine, returned in the active mode.
    Asin    => { name: "asin",    arity: Arity::Exact(1) },
    /// Arccosine, returned in the active mode.
    Acos    => { name: "acos",    arity: Arity::Exact(1) },
    /// Arctangent, returned in the active mode.
    Atan    => { name: "atan",    arity: Arity::Exact(1) },
    Sqrt    => { name: "sqrt",    arity: Arity::Exact(1) },
    Cbrt    => { name: "cbrt",    arity: Arity::Exact(1) },
    /// Natural logarithm.
    Ln      => { name: "ln",      arity: Arity::Exact(1) },
    /// Base 10 logarithm.
    Log     => { name: "log",     arity: Arity::Exact(1) },
    Exp     => { name: "exp",     arity: Arity::Exact(1) },
    Pow     => { name: "pow",     arity: Arity::Exact(2) },
    Abs     => { name: "abs",     arity: Arity::Exact(1) },
    Floor   => { name: "floor",   arity: Arity::Exact(1) },
    Ceil    => { name: "ceil",    arity: Arity::Exact(1) },
    /// Rounds half-way cases towards positive infinity.
    Round   => { name: "round",   arity: Arity::Exact(1) },
    /// Smallest of one or more values.
    Min     => { name: "min",     arity: Arity::AtLeast(1) },
    /// Largest of one or more values.
    Max     => { name: "max",     arity: Arity::AtLeast(1) },
    /// Uniform random value in `[0, 1)`.
    Rand    => { name: "rand",    arity: Arity::Exact(0) },
    /// `percent(x)` is `x / 100`.
    Percent => { name: "percent", arity: Arity::Exact(1) },
}

impl Function {
    /// Applies the builtin to its arguments, given left to right.
    ///
    /// Trigonometric functions convert through `angle_mode`; every other
    /// builtin ignores it.
    ///
    /// # Errors
    /// Returns `EvalError::ArgumentCountMismatch` if the number of arguments
    /// does not satisfy [`Function::arity`].
    ///
    /// # Example
    /// ```
    /// use scical::{AngleMode, interpreter::environment::function::Function};
    ///
    /// let r = Function::Sin.apply(&[90.0], AngleMode::Degrees).unwrap();
    /// assert!((r - 1.0).abs() < 1e-12);
    ///
    /// let r = Function::Max.apply(&[3.0, 9.0, 4.0], AngleMode::Radians).unwrap();
    /// assert_eq!(r, 9.0);
    ///
    /// assert!(Function::Pow.apply(&[2.0], AngleMode::Radians).is_err());
    /// assert!(Function::Min.apply(&[], AngleMode::Radians).is_err());
    /// ```
    pub fn apply(self, args: &[f64], angle_mode: AngleMode) -> EvalResult<f64> {
        let value = match (self, args) {
            (Self::Sin, &[x]) => angle_mode.to_radians(x).sin(),
            (Self::Cos, &[x]) => angle_mode.to_radians(x).cos(),
            (Self::Tan, &[x]) => angle_mode.to_radians(x).tan(),
            (Self::Asin, &[x]) => angle_mode.from_radians(x.asin()),
            (Self::Acos, &[x]) => angle_mode.from_radians(x.acos()),
            (Self::Atan, &[x]) => angle_mode.from_radians(x.atan()),
            (Self::Sqrt, &[x]) => x.sqrt(),
            (Self::Cbrt, &[x]) => x.cbrt(),
            (Self::Ln, &[x]) => x.ln(),
            (Self::Log, &[x]) => x.log10(),
            (Self::Exp, &[x]) => x.exp(),
            (Self::Pow, &[x, y]) => x.powf(y),
            (Self::Abs, &[x]) => x.abs(),
            (Self::Floor, &[x]) => x.floor(),
            (Self::Ceil, &[x]) => x.ceil(),
            (Self::Round, &[x]) => round_half_up(x),
            (Self::Min, [_, ..]) => args.iter().copied().fold(f64::INFINITY, f64::min),
            (Self::Max, [_, ..]) => args.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            (Self::Rand, &[]) => rand::random::<f64>(),
            (Self::Percent, &[x]) => x / 100.0,
            _ => {
                return Err(EvalError::ArgumentCountMismatch { name:     self.name().to_string(),
                                                              expected: self.arity(),
                                                              found:    args.len(), }.into());
            },
        };

        Ok(value)
    }
}

/// Rounds to the nearest integer, sending exact halves up.
///
/// # Example
/// ```
/// use scical::interpreter::environment::function::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}
