//! Signup-Validation Core
//!
//! Pure validation predicates compatible with both std and no_std environments.
//! Shared by the form controller, the CLI host and the WASM bindings so every
//! host applies exactly the same checks.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub mod email;
pub mod password;
pub mod string;

pub use email::*;
pub use password::*;
pub use string::*;

/// Validation trait implemented by form records
///
/// Errors are keyed by external field name, one message per field.
pub trait Validate {
    fn validate(&self) -> Result<(), BTreeMap<String, String>>;
}

/// Form field metadata for HTML5 and client-side validation
pub trait FormField {
    /// Attributes for the field with this external name
    fn field_attrs(&self, field_name: &str) -> FieldAttrs;

    /// External field names in form order
    fn field_names(&self) -> Vec<&'static str>;
}

/// Rendering metadata for one signup input, derived from its rule chain
///
/// Hosts that render their own markup (the CLI `schema` command, the wasm
/// `fieldAttrs` export) read these instead of duplicating the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    /// Native input attributes, sorted by name; an empty value is a bare flag
    pub html5_attrs: BTreeMap<String, String>,
    /// Rule summary as a JSON object for client scripts
    pub data_validate: String,
    /// Text shown in the field's `<label>`
    pub label: String,
}

impl FieldAttrs {
    pub fn new() -> Self {
        Self {
            html5_attrs: BTreeMap::new(),
            data_validate: String::from("{}"),
            label: String::new(),
        }
    }

    /// `name="value"` pairs in key order, flags without a value
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render_data_validate(&self) -> String {
        format!("data-validate='{}'", self.data_validate)
    }

    /// Everything that goes inside the `<input ...>` tag
    pub fn render_all(&self) -> String {
        let html5 = self.render_html5_attrs();
        let validate = self.render_data_validate();

        if html5.is_empty() {
            validate
        } else {
            format!("{} {}", html5, validate)
        }
    }
}

impl Default for FieldAttrs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_render_flags_and_values() {
        let mut attrs = FieldAttrs::new();
        attrs.html5_attrs.insert("required".to_string(), String::new());
        attrs.html5_attrs.insert("maxlength".to_string(), "30".to_string());

        // BTreeMap keeps keys sorted
        assert_eq!(attrs.render_html5_attrs(), "maxlength=\"30\" required");
        assert_eq!(
            attrs.render_all(),
            "maxlength=\"30\" required data-validate='{}'"
        );
    }

    #[test]
    fn test_render_without_html5_attrs() {
        let attrs = FieldAttrs::default();
        assert_eq!(attrs.render_all(), "data-validate='{}'");
    }
}
