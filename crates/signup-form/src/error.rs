use thiserror::Error;

/// Errors raised by hosts driving the form with untyped input.
///
/// Validation failures are not errors; they are reported through
/// [`crate::ValidationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}
