//! # signup-form
//!
//! The registration form's model: a four-field record, declarative rule
//! chains, a pure validator and a controller that tracks edits, displayed
//! errors and submission.
//!
//! ```rust
//! use signup_form::{FormRecord, Schema, Field};
//!
//! let schema = Schema::registration();
//! let record = FormRecord::new("Bob", "not-an-email", "Abcdef12", "Abcdef12");
//!
//! let result = schema.validate(&record);
//! assert_eq!(result.get_error(Field::Email), Some("email must be a valid email"));
//! ```
//!
//! ## Modules
//!
//! - [`record`] - `FormRecord` and `Field`
//! - [`rules`] - `RuleKind`, `Rule`, `FieldRule` chains
//! - [`schema`] - `Schema` and the registration rules
//! - [`result`] - `ValidationResult` and `FieldErrors`
//! - [`controller`] - `FormController`, validation modes, form state
//! - [`sink`] - success sinks and the alert formatter
//! - [`config`] - `signup.toml` loading
//! - [`form_field`] - HTML5 / data-validate metadata

pub mod config;
pub mod controller;
pub mod error;
pub mod form_field;
pub mod record;
pub mod result;
pub mod rules;
pub mod schema;
pub mod sink;

pub use config::{AlertConfig, DefaultsConfig, FormConfig, FormSection};
pub use controller::{FormController, FormState, ValidationMode};
pub use error::FormError;
pub use form_field::field_attrs_for;
pub use record::{Field, FormRecord};
pub use result::{FieldErrors, ValidationResult};
pub use rules::{FieldRule, Rule, RuleKind};
pub use schema::Schema;
pub use sink::{format_alert, AlertSink, RecordingSink, SuccessSink};

// Re-export the shared traits so hosts need a single dependency
pub use signup_validation::{FieldAttrs, FormField, PasswordPolicy, Validate};
