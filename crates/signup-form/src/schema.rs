// File: src/schema.rs
// Purpose: Form schema (a rule chain per field) and the registration rules

use crate::record::{Field, FormRecord};
use crate::result::{FieldErrors, ValidationResult};
use crate::rules::FieldRule;
use signup_validation::{PasswordPolicy, Validate};
use std::collections::BTreeMap;
use tracing::debug;

pub const REQUIRED_MESSAGE: &str = "This must not be empty.";
pub const NAME_TOO_LONG_MESSAGE: &str = "Name must be under 30 characters.";
pub const INVALID_EMAIL_MESSAGE: &str = "email must be a valid email";
pub const PASSWORD_PATTERN_MESSAGE: &str = "Password must have minimum eight characters, at least one uppercase letter, one lowercase letter and one number.";
pub const CONFIRM_TOO_SHORT_MESSAGE: &str = "Password should be longer than 8 characters.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Confirm passwords must match password above.";

pub const NAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Rule chains for a form, one per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    chains: Vec<FieldRule>,
}

impl Schema {
    /// Empty schema: every record is valid
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Add a field's chain, replacing any existing chain for that field
    pub fn field(mut self, chain: FieldRule) -> Self {
        match self.chains.iter_mut().find(|c| c.field() == chain.field()) {
            Some(existing) => *existing = chain,
            None => self.chains.push(chain),
        }
        self
    }

    /// The registration form
    ///
    /// | field           | chain                                       |
    /// |-----------------|---------------------------------------------|
    /// | name            | required, at most 30 characters             |
    /// | email           | required, valid email                       |
    /// | password        | required, 8+ mixed-case letters and digits  |
    /// | confirmPassword | at least 8 characters, required, = password |
    pub fn registration() -> Self {
        Self::new()
            .field(
                FieldRule::new(Field::Name)
                    .label("Name")
                    .required(REQUIRED_MESSAGE)
                    .max_length(NAME_MAX_LENGTH, NAME_TOO_LONG_MESSAGE),
            )
            .field(
                FieldRule::new(Field::Email)
                    .label("Email")
                    .required(REQUIRED_MESSAGE)
                    .email(INVALID_EMAIL_MESSAGE),
            )
            .field(
                FieldRule::new(Field::Password)
                    .label("Password")
                    .required(REQUIRED_MESSAGE)
                    .password(PasswordPolicy::ALPHANUMERIC_MIXED, PASSWORD_PATTERN_MESSAGE),
            )
            .field(
                FieldRule::new(Field::ConfirmPassword)
                    .input_type("password")
                    .min_length(PASSWORD_MIN_LENGTH, CONFIRM_TOO_SHORT_MESSAGE)
                    .required(REQUIRED_MESSAGE)
                    .equals_field(Field::Password, PASSWORD_MISMATCH_MESSAGE),
            )
    }

    pub fn chain(&self, field: Field) -> Option<&FieldRule> {
        self.chains.iter().find(|c| c.field() == field)
    }

    pub fn chains(&self) -> &[FieldRule] {
        &self.chains
    }

    /// First failing message for one field; `None` if it passes or has no chain
    pub fn validate_field(&self, field: Field, record: &FormRecord) -> Option<&str> {
        self.chain(field)
            .and_then(|chain| chain.first_failure(record))
            .map(|rule| rule.message.as_str())
    }

    /// Validate every field against the current record
    ///
    /// Pure: the same record always yields the same result.
    pub fn validate(&self, record: &FormRecord) -> ValidationResult {
        let errors: FieldErrors = self
            .chains
            .iter()
            .filter_map(|chain| {
                chain
                    .first_failure(record)
                    .map(|rule| (chain.field(), rule.message.clone()))
            })
            .collect();

        let failed: Vec<Field> = errors.fields().collect();
        debug!(failed = ?failed, "Validated form record");

        ValidationResult::from_errors(record, errors)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration()
    }
}

impl Validate for FormRecord {
    fn validate(&self) -> Result<(), BTreeMap<String, String>> {
        match Schema::registration().validate(self) {
            ValidationResult::Valid(_) => Ok(()),
            ValidationResult::Invalid(errors) => Err(errors.to_string_map()),
        }
    }
}
