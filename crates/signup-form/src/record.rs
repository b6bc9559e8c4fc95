// File: src/record.rs
// Purpose: The four-field registration record and its field names

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the registration form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in form order
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// External (wire / DOM) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Candidate registration data, exactly as typed by the user
///
/// Serializes with the external field names, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Field/value pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            "confirm_password".parse::<Field>(),
            Err(FormError::UnknownField("confirm_password".to_string()))
        );
    }

    #[test]
    fn test_get_and_set() {
        let mut record = FormRecord::default();
        record.set(Field::ConfirmPassword, "Abcdef12");
        assert_eq!(record.get(Field::ConfirmPassword), "Abcdef12");
        assert_eq!(record.confirm_password, "Abcdef12");
        assert_eq!(record.get(Field::Name), "");
    }

    #[test]
    fn test_serializes_with_external_names() {
        let record = FormRecord::new("Alice", "a@b.com", "Abcdef12", "Abcdef12");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Alice","email":"a@b.com","password":"Abcdef12","confirmPassword":"Abcdef12"}"#
        );
    }

    #[test]
    fn test_deserializes_partial_record() {
        let record: FormRecord = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.name, "");
    }
}
