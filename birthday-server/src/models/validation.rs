//! Validation error types

use std::fmt;

/// Validation error for request input.
///
/// The `Display` text is what the client sees in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Username contains something other than ASCII letters
    InvalidUsername,

    /// Request body is not a JSON object of the expected shape
    InvalidJson,

    /// Date is missing or not `YYYY-MM-DD`
    InvalidDate,

    /// Date of birth is today or later
    NotInPast,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername => write!(f, "username must contain only letters"),
            Self::InvalidJson => write!(f, "invalid JSON"),
            Self::InvalidDate => write!(f, "invalid date format, use YYYY-MM-DD"),
            Self::NotInPast => write!(f, "date of birth must be before today"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::InvalidDate.to_string(),
            "invalid date format, use YYYY-MM-DD"
        );
        assert_eq!(
            ValidationError::NotInPast.to_string(),
            "date of birth must be before today"
        );
    }
}
