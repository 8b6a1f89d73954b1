use std::f64::consts::PI;

/// The unit trigonometric functions read and produce angles in.
///
/// `sin`, `cos` and `tan` interpret their argument in this unit; `asin`,
/// `acos` and `atan` return their result in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    /// Angles in radians.
    #[default]
    Radians,
    /// Angles in degrees.
    Degrees,
}

impl AngleMode {
    /// Converts an angle expressed in this mode to radians.
    ///
    /// # Example
    /// ```
    /// use scical::AngleMode;
    ///
    /// let half_turn = AngleMode::Degrees.to_radians(180.0);
    /// assert!((half_turn - std::f64::consts::PI).abs() < 1e-15);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle * PI / 180.0,
        }
    }

    /// Converts an angle in radians to this mode.
    #[must_use]
    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle * 180.0 / PI,
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Radians => f.write_str("RAD"),
            Self::Degrees => f.write_str("DEG"),
        }
    }
}

impl std::str::FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(Self::Radians),
            "deg" | "degrees" => Ok(Self::Degrees),
            other => Err(format!("unknown angle mode '{other}'")),
        }
    }
}
