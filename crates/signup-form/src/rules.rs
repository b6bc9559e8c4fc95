// File: src/rules.rs
// Purpose: Declarative per-field rule chains

use crate::record::{Field, FormRecord};
use signup_validation::{self as validators, PasswordPolicy};

/// A single declarative check
///
/// Rules are data rather than closures so the same chain can drive
/// validation, HTML5 attributes and client-side `data-validate` JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must be non-empty
    Required,
    /// At least n characters
    MinLength(usize),
    /// At most n characters
    MaxLength(usize),
    /// Syntactically valid email address
    Email,
    /// Password composition policy
    Password(PasswordPolicy),
    /// Must equal the current value of another field
    EqualsField(Field),
}

impl RuleKind {
    /// Cross-field rules read siblings from `record` at call time.
    pub fn passes(&self, value: &str, record: &FormRecord) -> bool {
        match self {
            RuleKind::Required => validators::is_present(value),
            RuleKind::MinLength(min) => validators::has_min_length(value, *min),
            RuleKind::MaxLength(max) => validators::has_max_length(value, *max),
            RuleKind::Email => validators::is_valid_email(value),
            RuleKind::Password(policy) => policy.is_satisfied_by(value),
            RuleKind::EqualsField(other) => validators::equals(value, record.get(*other)),
        }
    }
}

/// A check paired with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: String,
}

/// Ordered rule chain for one field
///
/// Rules are evaluated top to bottom and evaluation stops at the first
/// failure, so a field reports at most one message.
///
/// ```
/// use signup_form::{Field, FieldRule, FormRecord};
///
/// let chain = FieldRule::new(Field::Name)
///     .required("This must not be empty.")
///     .max_length(30, "Name must be under 30 characters.");
///
/// let record = FormRecord::default();
/// assert_eq!(chain.first_failure(&record).map(|r| r.message.as_str()),
///            Some("This must not be empty."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    field: Field,
    label: String,
    input_type: Option<&'static str>,
    rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.as_str().to_string(),
            input_type: None,
            rules: Vec::new(),
        }
    }

    /// Append a rule to the end of the chain
    pub fn rule(mut self, kind: RuleKind, message: impl Into<String>) -> Self {
        self.rules.push(Rule {
            kind,
            message: message.into(),
        });
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, message)
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(RuleKind::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(RuleKind::MaxLength(max), message)
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Email, message)
    }

    pub fn password(self, policy: PasswordPolicy, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Password(policy), message)
    }

    pub fn equals_field(self, other: Field, message: impl Into<String>) -> Self {
        self.rule(RuleKind::EqualsField(other), message)
    }

    /// Display label (defaults to the field name)
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Force the rendered input type instead of deriving it from the rules
    pub fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Input type for rendering: explicit override, else derived from rules
    pub fn html_input_type(&self) -> &'static str {
        self.input_type.unwrap_or_else(|| {
            self.rules
                .iter()
                .find_map(|rule| match rule.kind {
                    RuleKind::Email => Some("email"),
                    RuleKind::Password(_) => Some("password"),
                    _ => None,
                })
                .unwrap_or("text")
        })
    }

    /// First rule the field's current value fails, if any
    pub fn first_failure(&self, record: &FormRecord) -> Option<&Rule> {
        let value = record.get(self.field);
        self.rules.iter().find(|rule| !rule.kind.passes(value, record))
    }
}
