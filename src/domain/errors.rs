//! Domain error types
//!
//! These errors are framework-agnostic. The api layer decides which HTTP
//! status and message each one turns into.

use std::fmt;

/// Rejection of a request body before it reaches the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Body has no `data` field (or it is null)
    MissingField,
    /// `data` is not an array of strings, or the body is not a JSON object
    WrongType,
    /// `data` is an empty array
    EmptyArray,
}

impl ValidationError {
    /// Client-facing message for this rejection
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingField | ValidationError::WrongType => "Invalid input format",
            ValidationError::EmptyArray => "Data array cannot be empty",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "Validation error: missing data field"),
            ValidationError::WrongType => {
                write!(f, "Validation error: data must be an array of strings")
            }
            ValidationError::EmptyArray => write!(f, "Validation error: data array is empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure inside the classifier itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Running total of numeric tokens left the representable range
    SumOverflow,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::SumOverflow => write!(f, "Internal error: numeric sum overflowed"),
        }
    }
}

impl std::error::Error for ClassifyError {}
