// File: src/form_field.rs
// Purpose: HTML5 attributes and data-validate JSON derived from the rule chains

use crate::record::Field;
use crate::rules::{FieldRule, RuleKind};
use crate::schema::Schema;
use serde_json::{json, Map, Value};
use signup_validation::{FieldAttrs, FormField};

/// Attributes for one field's chain
pub fn field_attrs_for(chain: &FieldRule) -> FieldAttrs {
    let mut attrs = FieldAttrs::new();
    let mut validate = Map::new();

    attrs.label = chain.label_text().to_string();
    attrs
        .html5_attrs
        .insert("type".to_string(), chain.html_input_type().to_string());
    attrs
        .html5_attrs
        .insert("autocomplete".to_string(), "off".to_string());

    for rule in chain.rules() {
        match &rule.kind {
            RuleKind::Required => {
                attrs.html5_attrs.insert("required".to_string(), String::new());
                validate.insert("required".to_string(), Value::Bool(true));
            }
            RuleKind::MinLength(n) => {
                attrs.html5_attrs.insert("minlength".to_string(), n.to_string());
                validate.insert("minLength".to_string(), json!(n));
            }
            RuleKind::MaxLength(n) => {
                attrs.html5_attrs.insert("maxlength".to_string(), n.to_string());
                validate.insert("maxLength".to_string(), json!(n));
            }
            RuleKind::Email => {
                validate.insert("email".to_string(), Value::Bool(true));
            }
            RuleKind::Password(policy) => {
                let pattern = policy.html_pattern();
                attrs.html5_attrs.insert("pattern".to_string(), pattern.clone());
                validate.insert("password".to_string(), Value::String(pattern));
            }
            RuleKind::EqualsField(other) => {
                validate.insert(
                    "equalsField".to_string(),
                    Value::String(other.as_str().to_string()),
                );
            }
        }
    }

    attrs.data_validate = Value::Object(validate).to_string();
    attrs
}

impl FormField for Schema {
    fn field_attrs(&self, field_name: &str) -> FieldAttrs {
        field_name
            .parse::<Field>()
            .ok()
            .and_then(|field| self.chain(field))
            .map(field_attrs_for)
            .unwrap_or_default()
    }

    fn field_names(&self) -> Vec<&'static str> {
        self.chains().iter().map(|c| c.field().as_str()).collect()
    }
}
