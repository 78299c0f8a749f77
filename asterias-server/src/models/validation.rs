//! Validation error types

use std::fmt;

/// Validation error for the typed form-coercion step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field did not parse as an integer
    InvalidInt { field: &'static str, value: String },

    /// Field did not parse as a number
    InvalidFloat { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInt { field, value } => {
                write!(f, "{}: '{}' is not a valid integer", field, value)
            }
            Self::InvalidFloat { field, value } => {
                write!(f, "{}: '{}' is not a valid number", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidInt {
            field: "limbs",
            value: "five".into(),
        };
        assert_eq!(err.to_string(), "limbs: 'five' is not a valid integer");

        let err = ValidationError::InvalidFloat {
            field: "depth",
            value: "deep".into(),
        };
        assert_eq!(err.to_string(), "depth: 'deep' is not a valid number");
    }
}
