//! Username validation
//!
//! Letters only, case-sensitive.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Matches the `users.username` primary key format
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("invalid username regex"));

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username, validating that it is non-empty ASCII letters.
    ///
    /// # Example
    /// ```
    /// use birthday_server::models::Username;
    ///
    /// assert!(Username::new("Alice").is_ok());
    /// assert!(Username::new("alice42").is_err());
    /// assert!(Username::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if !USERNAME_RE.is_match(s) {
            return Err(ValidationError::InvalidUsername);
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("Alice").is_ok());
        assert!(Username::new("ALICE").is_ok());
        assert!(Username::new("a").is_ok());
    }

    #[test]
    fn is_case_sensitive() {
        let lower = Username::new("alice").unwrap();
        let upper = Username::new("Alice").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn rejects_digits() {
        assert_eq!(
            Username::new("123").unwrap_err(),
            ValidationError::InvalidUsername
        );
        assert!(Username::new("alice1").is_err());
    }

    #[test]
    fn rejects_punctuation_and_spaces() {
        assert!(Username::new("al ice").is_err());
        assert!(Username::new("al-ice").is_err());
        assert!(Username::new("alice\n").is_err());
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(Username::new("Zoë").is_err());
        assert!(Username::new("Łukasz").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(Username::new("").is_err());
    }
}
