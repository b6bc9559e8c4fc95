// File: src/controller.rs
// Purpose: Form controller holding field values, displayed errors and submit state

use crate::config::FormConfig;
use crate::error::FormError;
use crate::record::{Field, FormRecord};
use crate::result::{FieldErrors, ValidationResult};
use crate::schema::Schema;
use crate::sink::SuccessSink;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// When field edits trigger validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Re-validate on every change
    #[default]
    OnChange,
    /// Validate a field when it loses focus
    OnBlur,
    /// Validate only on submit
    OnSubmit,
}

/// Submission bookkeeping, cleared by reset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub submit_count: u32,
    pub is_submitted: bool,
    pub is_submit_successful: bool,
    dirty: BTreeSet<Field>,
    touched: BTreeSet<Field>,
}

impl FormState {
    /// Any field differs from its default
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn is_field_dirty(&self, field: Field) -> bool {
        self.dirty.contains(&field)
    }

    pub fn dirty_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.dirty.iter().copied()
    }

    /// Field has been blurred at least once
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }
}

/// Drives a form: edits, blur events, submit and reset
///
/// The controller keeps the latest full [`ValidationResult`] of the current
/// values. The errors it displays are that result restricted to fields the
/// user has interacted with, and after a submit every field.
///
/// ```
/// use signup_form::{Field, FormController, RecordingSink};
///
/// let mut form = FormController::new(RecordingSink::new());
/// form.set_field(Field::Name, "Alice");
/// form.set_field(Field::Email, "a@b.com");
/// form.set_field(Field::Password, "Abcdef12");
/// form.set_field(Field::ConfirmPassword, "Abcdef12");
///
/// assert!(form.submit().is_valid());
/// assert_eq!(form.sink().records().len(), 1);
/// ```
#[derive(Debug)]
pub struct FormController<S: SuccessSink> {
    schema: Schema,
    mode: ValidationMode,
    defaults: FormRecord,
    values: FormRecord,
    validation: ValidationResult,
    errors: FieldErrors,
    revealed: BTreeSet<Field>,
    state: FormState,
    sink: S,
}

impl<S: SuccessSink> FormController<S> {
    /// Registration form, empty defaults, validating on change
    pub fn new(sink: S) -> Self {
        Self::with_options(
            Schema::registration(),
            FormRecord::default(),
            ValidationMode::default(),
            sink,
        )
    }

    pub fn with_options(schema: Schema, defaults: FormRecord, mode: ValidationMode, sink: S) -> Self {
        let validation = schema.validate(&defaults);
        Self {
            schema,
            mode,
            values: defaults.clone(),
            defaults,
            validation,
            errors: FieldErrors::new(),
            revealed: BTreeSet::new(),
            state: FormState::default(),
            sink,
        }
    }

    /// Registration form configured from a [`FormConfig`]
    pub fn from_config(config: &FormConfig, sink: S) -> Self {
        Self::with_options(
            Schema::registration(),
            config.defaults.to_record(),
            config.form.mode,
            sink,
        )
    }

    /// Update one field and re-validate according to the mode
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);

        if self.values.get(field) == self.defaults.get(field) {
            self.state.dirty.remove(&field);
        } else {
            self.state.dirty.insert(field);
        }

        self.validation = self.schema.validate(&self.values);

        if self.revalidates_on_change() {
            self.revealed.insert(field);
            self.refresh_errors();
        }
    }

    /// [`set_field`](Self::set_field) for hosts that only know the field name
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Field lost focus
    pub fn blur(&mut self, field: Field) {
        self.state.touched.insert(field);

        if self.mode == ValidationMode::OnBlur {
            self.validation = self.schema.validate(&self.values);
            self.revealed.insert(field);
            self.refresh_errors();
        }
    }

    /// Validate everything; on success hand the record to the sink
    ///
    /// Values are kept either way. On failure every error becomes visible and
    /// the sink is not called.
    pub fn submit(&mut self) -> ValidationResult {
        self.validation = self.schema.validate(&self.values);
        self.revealed.extend(Field::ALL);
        self.refresh_errors();

        self.state.submit_count += 1;
        self.state.is_submitted = true;
        self.state.is_submit_successful = self.validation.is_valid();

        match &self.validation {
            ValidationResult::Valid(record) => {
                info!(submit_count = self.state.submit_count, "Form submitted");
                self.sink.report(record);
            }
            ValidationResult::Invalid(errors) => {
                debug!(
                    submit_count = self.state.submit_count,
                    failed = errors.len(),
                    "Form submission rejected"
                );
            }
        }

        self.validation.clone()
    }

    /// Restore defaults and clear errors and submit state
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.validation = self.schema.validate(&self.values);
        self.errors = FieldErrors::new();
        self.revealed.clear();
        self.state = FormState::default();
        debug!("Form reset to defaults");
    }

    pub fn values(&self) -> &FormRecord {
        &self.values
    }

    pub fn defaults(&self) -> &FormRecord {
        &self.defaults
    }

    /// Errors currently shown to the user
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Latest full validation of the current values, shown or not
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // After the first submit every mode re-validates on change
    fn revalidates_on_change(&self) -> bool {
        self.mode == ValidationMode::OnChange || self.state.is_submitted
    }

    fn refresh_errors(&mut self) {
        let mut errors = self.validation.errors();
        errors.retain(|field| self.revealed.contains(&field));
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PASSWORD_MISMATCH_MESSAGE, REQUIRED_MESSAGE};
    use crate::sink::RecordingSink;

    fn controller(mode: ValidationMode) -> FormController<RecordingSink> {
        FormController::with_options(
            Schema::registration(),
            FormRecord::default(),
            mode,
            RecordingSink::new(),
        )
    }

    #[test]
    fn test_starts_without_displayed_errors() {
        let form = controller(ValidationMode::OnChange);
        assert!(form.errors().is_empty());
        // The defaults themselves are not valid
        assert!(form.validation().has_errors());
    }

    #[test]
    fn test_on_change_reveals_only_edited_field() {
        let mut form = controller(ValidationMode::OnChange);
        form.set_field(Field::Email, "nope");

        assert!(form.error(Field::Email).is_some());
        assert!(form.error(Field::Name).is_none());
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_on_submit_mode_waits_for_submit() {
        let mut form = controller(ValidationMode::OnSubmit);
        form.set_field(Field::Email, "nope");
        assert!(form.errors().is_empty());

        form.submit();
        assert_eq!(form.error(Field::Name), Some(REQUIRED_MESSAGE));

        // After a submit, edits re-validate
        form.set_field(Field::Name, "Bob");
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn test_on_blur_mode() {
        let mut form = controller(ValidationMode::OnBlur);
        form.set_field(Field::Name, "");
        assert!(form.errors().is_empty());

        form.blur(Field::Name);
        assert!(form.state().is_touched(Field::Name));
        assert_eq!(form.error(Field::Name), Some(REQUIRED_MESSAGE));

        // Still shown until the next blur
        form.set_field(Field::Name, "Bob");
        assert_eq!(form.error(Field::Name), Some(REQUIRED_MESSAGE));
        form.blur(Field::Name);
        assert!(form.error(Field::Name).is_none());
    }

    #[test]
    fn test_blur_in_on_change_mode_only_touches() {
        let mut form = controller(ValidationMode::OnChange);
        form.blur(Field::Email);
        assert!(form.state().is_touched(Field::Email));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_password_edit_refreshes_revealed_confirmation() {
        let mut form = controller(ValidationMode::OnChange);
        form.set_field(Field::Password, "Abcdef12");
        form.set_field(Field::ConfirmPassword, "Abcdef12");
        assert!(form.error(Field::ConfirmPassword).is_none());

        form.set_field(Field::Password, "Abcdef13");
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some(PASSWORD_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_dirty_tracking() {
        let mut form = controller(ValidationMode::OnChange);
        form.set_field(Field::Name, "Bob");
        assert!(form.state().is_field_dirty(Field::Name));

        form.set_field(Field::Name, "");
        assert!(!form.state().is_dirty());
    }

    #[test]
    fn test_set_field_by_name() {
        let mut form = controller(ValidationMode::OnChange);
        form.set_field_by_name("confirmPassword", "x").unwrap();
        assert_eq!(form.values().confirm_password, "x");

        assert_eq!(
            form.set_field_by_name("age", "42"),
            Err(FormError::UnknownField("age".to_string()))
        );
    }

    #[test]
    fn test_submit_state() {
        let mut form = controller(ValidationMode::OnChange);
        form.submit();
        assert_eq!(form.state().submit_count, 1);
        assert!(form.state().is_submitted);
        assert!(!form.state().is_submit_successful);
        assert!(form.sink().records().is_empty());
    }
}
