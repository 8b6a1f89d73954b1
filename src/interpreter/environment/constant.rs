/// Named constants, replaced by their value while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`
    Pi,
    /// `e`
    E,
}

impl Constant {
    /// Looks up a constant by its lowercase name.
    ///
    /// # Example
    /// ```
    /// use scical::interpreter::environment::constant::Constant;
    ///
    /// assert_eq!(Constant::from_name("pi"), Some(Constant::Pi));
    /// assert_eq!(Constant::from_name("ans"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// The numeric value of the constant.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}
