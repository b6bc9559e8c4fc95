// File: src/result.rs
// Purpose: Validation outcome and the field -> message map

use crate::record::{Field, FormRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// At most one error message per field, iterated in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Keep only the errors of fields matching `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(Field) -> bool) {
        self.0.retain(|field, _| keep(*field));
    }

    /// Errors keyed by external field name
    pub fn to_string_map(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(field, msg)| (field.as_str().to_string(), msg.clone()))
            .collect()
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

/// Result of validating a whole record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every field passed; carries the accepted record
    Valid(FormRecord),
    /// At least one field failed; never carries an empty map
    Invalid(FieldErrors),
}

impl ValidationResult {
    /// Build from a record and its collected errors
    pub fn from_errors(record: &FormRecord, errors: FieldErrors) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid(record.clone())
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// Error message for a specific field
    pub fn get_error(&self, field: Field) -> Option<&str> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => errors.get(field),
        }
    }

    /// All errors; empty when valid
    pub fn errors(&self) -> FieldErrors {
        match self {
            ValidationResult::Valid(_) => FieldErrors::new(),
            ValidationResult::Invalid(errors) => errors.clone(),
        }
    }

    pub fn into_result(self) -> Result<FormRecord, FieldErrors> {
        match self {
            ValidationResult::Valid(record) => Ok(record),
            ValidationResult::Invalid(errors) => Err(errors),
        }
    }
}
