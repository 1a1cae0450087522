//! Value patterns that parameter entries are checked against.

use std::fmt;

/// The set of strings an entry accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// A finite floating-point number within optional inclusive bounds.
    Double {
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
    },
    /// One of a fixed list of strings.
    Selection(Vec<String>),
    /// Any string.
    Anything,
}

impl Pattern {
    /// A finite double `>= 0`.
    pub fn non_negative_double() -> Self {
        Self::Double {
            min: Some(0.0),
            max: None,
        }
    }

    /// A selection from the given options.
    pub fn selection<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(options.into_iter().map(Into::into).collect())
    }

    /// Whether `value` (already trimmed) satisfies the pattern.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Double { min, max } => match value.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    min.is_none_or(|lo| v >= lo) && max.is_none_or(|hi| v <= hi)
                }
                _ => false,
            },
            Self::Selection(options) => options.iter().any(|o| o == value),
            Self::Anything => true,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double { min, max } => {
                write!(f, "[Double ")?;
                match min {
                    Some(lo) => write!(f, "{lo}")?,
                    None => write!(f, "-MAX_DOUBLE")?,
                }
                write!(f, "...")?;
                match max {
                    Some(hi) => write!(f, "{hi}")?,
                    None => write!(f, "MAX_DOUBLE")?,
                }
                write!(f, " (inclusive)]")
            }
            Self::Selection(options) => write!(f, "[Selection {} ]", options.join("|")),
            Self::Anything => write!(f, "[Anything]"),
        }
    }
}
