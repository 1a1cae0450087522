//! Error types for the Strata material-model framework.
//!
//! Organized by subsystem: the parameter tree, model configuration, the
//! model registry, and evaluation-input construction. Evaluation itself
//! has no error type.

use std::error::Error;
use std::fmt;

/// Errors from the hierarchical parameter tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// The entry was never declared in the current section.
    UndeclaredEntry {
        /// Full `Section/Subsection/Entry` path of the entry.
        path: String,
    },
    /// An entry with this name was already declared in the section.
    DuplicateEntry {
        /// Full path of the entry.
        path: String,
    },
    /// A default or assigned value does not satisfy the entry's pattern.
    PatternMismatch {
        /// Full path of the entry.
        path: String,
        /// The rejected value, verbatim.
        value: String,
        /// Human-readable description of the expected pattern.
        pattern: String,
    },
    /// A subsection was entered that has never been declared.
    UnknownSection {
        /// Full path of the missing section.
        path: String,
    },
    /// `leave_subsection` was called at the root, or a parameter file
    /// has an `end` without a matching `subsection` (or vice versa).
    UnbalancedSection,
    /// A parameter file line could not be parsed.
    Syntax {
        /// 1-based line number in the input.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndeclaredEntry { path } => write!(f, "entry '{path}' was not declared"),
            Self::DuplicateEntry { path } => write!(f, "entry '{path}' declared twice"),
            Self::PatternMismatch {
                path,
                value,
                pattern,
            } => write!(
                f,
                "value '{value}' for entry '{path}' does not match pattern {pattern}"
            ),
            Self::UnknownSection { path } => write!(f, "subsection '{path}' was not declared"),
            Self::UnbalancedSection => write!(f, "unbalanced subsection/end"),
            Self::Syntax { line, reason } => write!(f, "line {line}: {reason}"),
        }
    }
}

impl Error for ParameterError {}

/// Errors raised while configuring a material model from parameters.
///
/// Surfaced synchronously at setup time so the host can abort before
/// any time-stepping begins.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A required parameter was absent or could not be read.
    Parameter(ParameterError),
    /// A parameter is outside its physical domain (negative or non-finite
    /// where a non-negative real is required).
    OutOfDomain {
        /// Parameter name as declared.
        name: String,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(e) => write!(f, "parameter: {e}"),
            Self::OutOfDomain { name, value } => {
                write!(f, "'{name}' must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameter(e) => Some(e),
            Self::OutOfDomain { .. } => None,
        }
    }
}

impl From<ParameterError> for ConfigError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}

/// Errors from the material model registry.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistryError {
    /// No model is registered under this name.
    UnknownModel {
        /// The requested name.
        name: String,
    },
    /// A model is already registered under this name.
    DuplicateModel {
        /// The conflicting name.
        name: String,
    },
    /// The name is the selector's "no model chosen" value and cannot
    /// name a model.
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// Declaring or reading registry-level parameters failed.
    Parameter(ParameterError),
    /// The selected model rejected its configuration.
    Config {
        /// Name of the model being configured.
        model: String,
        /// The underlying configuration error.
        reason: ConfigError,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModel { name } => write!(f, "no material model named '{name}'"),
            Self::DuplicateModel { name } => {
                write!(f, "material model '{name}' is already registered")
            }
            Self::ReservedName { name } => {
                write!(f, "'{name}' is reserved and cannot name a material model")
            }
            Self::Parameter(e) => write!(f, "parameter: {e}"),
            Self::Config { model, reason } => {
                write!(f, "material model '{model}' configuration failed: {reason}")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameter(e) => Some(e),
            Self::Config { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<ParameterError> for RegistryError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}

/// Errors detected while assembling a [`MaterialInputs`](crate::MaterialInputs) batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// A point's position does not have one component per spatial dimension.
    PositionLength {
        /// Index of the offending point in the batch.
        index: usize,
        /// Number of components required by the batch dimension.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionLength {
                index,
                expected,
                actual,
            } => write!(
                f,
                "point {index}: position has {actual} components, expected {expected}"
            ),
        }
    }
}

impl Error for InputError {}
