//! Password validation functions

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Composition requirements for a password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters
    pub min_length: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    /// Only ASCII letters and digits are accepted
    pub alphanumeric_only: bool,
}

/// First requirement a password failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    TooShort { min_length: usize },
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    DisallowedCharacter,
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordViolation::TooShort { min_length } => {
                write!(f, "must be at least {} characters", min_length)
            }
            PasswordViolation::MissingLowercase => f.write_str("must contain a lowercase letter"),
            PasswordViolation::MissingUppercase => f.write_str("must contain an uppercase letter"),
            PasswordViolation::MissingDigit => f.write_str("must contain a digit"),
            PasswordViolation::DisallowedCharacter => {
                f.write_str("may only contain letters and digits")
            }
        }
    }
}

impl PasswordPolicy {
    /// 8+ chars with lowercase, uppercase and digit; letters and digits only
    pub const ALPHANUMERIC_MIXED: Self = Self {
        min_length: 8,
        require_lowercase: true,
        require_uppercase: true,
        require_digit: true,
        alphanumeric_only: true,
    };

    /// Check a password, reporting the first unmet requirement
    pub fn check(&self, password: &str) -> Result<(), PasswordViolation> {
        let checks = [
            (
                password.chars().count() >= self.min_length,
                PasswordViolation::TooShort {
                    min_length: self.min_length,
                },
            ),
            (
                !self.require_lowercase || password.chars().any(|c| c.is_ascii_lowercase()),
                PasswordViolation::MissingLowercase,
            ),
            (
                !self.require_uppercase || password.chars().any(|c| c.is_ascii_uppercase()),
                PasswordViolation::MissingUppercase,
            ),
            (
                !self.require_digit || password.chars().any(|c| c.is_ascii_digit()),
                PasswordViolation::MissingDigit,
            ),
            (
                !self.alphanumeric_only || password.chars().all(|c| c.is_ascii_alphanumeric()),
                PasswordViolation::DisallowedCharacter,
            ),
        ];

        checks
            .iter()
            .find(|(valid, _)| !valid)
            .map(|(_, violation)| Err(*violation))
            .unwrap_or(Ok(()))
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }

    /// Equivalent ECMAScript pattern, for the HTML5 `pattern` attribute
    pub fn html_pattern(&self) -> String {
        let mut pattern = String::from("^");

        if self.require_lowercase {
            pattern.push_str("(?=.*[a-z])");
        }
        if self.require_uppercase {
            pattern.push_str("(?=.*[A-Z])");
        }
        if self.require_digit {
            pattern.push_str(r"(?=.*\d)");
        }

        let class = if self.alphanumeric_only { r"[a-zA-Z\d]" } else { "." };
        pattern.push_str(&format!("{}{{{},}}$", class, self.min_length));
        pattern
    }
}
