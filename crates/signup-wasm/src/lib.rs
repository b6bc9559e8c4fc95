//! Signup Form WASM
//!
//! WebAssembly bindings for the registration form. The browser owns the
//! widgets; every decision (validation, displayed errors, submit outcome)
//! is made by the same controller the native hosts use.

use serde::de::{self, value::StrDeserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};
use signup_form::sink::{DEFAULT_ALERT_INDENT, DEFAULT_ALERT_TITLE};
use signup_form::{
    format_alert, Field, FieldErrors, FormController, FormField, FormRecord, RecordingSink,
    Schema, ValidationMode, ValidationResult,
};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Outcome of a submit, returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct SubmitOutcome {
    pub valid: bool,
    pub errors: FieldErrors,
    /// Alert text when the submit succeeded
    pub alert: Option<String>,
}

/// Field metadata returned to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldMeta {
    pub label: String,
    pub html5_attrs: std::collections::BTreeMap<String, String>,
    pub data_validate: String,
}

// Plain objects rather than JS Maps
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse::<Field>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// Mode names come from the serde names `ValidationMode` derives
fn parse_mode(mode: Option<&str>) -> Result<ValidationMode, String> {
    let Some(name) = mode else {
        return Ok(ValidationMode::default());
    };

    let deserializer: StrDeserializer<'_, de::value::Error> = name.into_deserializer();
    ValidationMode::deserialize(deserializer)
        .map_err(|e| format!("Unknown validation mode: {}", e))
}

/// Submit through the controller and collect the alert for a successful record
fn submit_outcome(controller: &mut FormController<RecordingSink>) -> Result<SubmitOutcome, String> {
    let result = controller.submit();
    let alert = controller
        .sink_mut()
        .take()
        .pop()
        .map(|record| format_alert(DEFAULT_ALERT_TITLE, &record, DEFAULT_ALERT_INDENT))
        .transpose()
        .map_err(|e| e.to_string())?;

    Ok(SubmitOutcome {
        valid: result.is_valid(),
        errors: result.errors(),
        alert,
    })
}

/// Registration form bound to a browser page
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new SignupForm("onChange", { name: "" });
/// input.addEventListener("input", e => {
///     form.setField(e.target.name, e.target.value);
///     render(form.errors());
/// });
/// submit.addEventListener("click", e => {
///     const outcome = form.submit();
///     if (outcome.valid) alert(outcome.alert); else e.preventDefault();
/// });
/// ```
#[wasm_bindgen]
pub struct SignupForm {
    inner: FormController<RecordingSink>,
}

#[wasm_bindgen]
impl SignupForm {
    /// `mode`: "onChange" (default), "onBlur" or "onSubmit".
    /// `defaults`: optional partial record used for initial values and reset.
    #[wasm_bindgen(constructor)]
    pub fn new(mode: Option<String>, defaults: JsValue) -> Result<SignupForm, JsValue> {
        let mode = parse_mode(mode.as_deref()).map_err(|e| JsValue::from_str(&e))?;
        let defaults: FormRecord = if defaults.is_undefined() || defaults.is_null() {
            FormRecord::default()
        } else {
            serde_wasm_bindgen::from_value(defaults)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse defaults: {}", e)))?
        };

        Ok(SignupForm {
            inner: FormController::with_options(
                Schema::registration(),
                defaults,
                mode,
                RecordingSink::new(),
            ),
        })
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), JsValue> {
        let field = parse_field(name)?;
        self.inner.set_field(field, value);
        Ok(())
    }

    pub fn blur(&mut self, name: &str) -> Result<(), JsValue> {
        let field = parse_field(name)?;
        self.inner.blur(field);
        Ok(())
    }

    /// Run the submit; the caller should cancel the native submit when invalid
    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        let outcome = submit_outcome(&mut self.inner).map_err(|e| JsValue::from_str(&e))?;
        to_js(&outcome)
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Errors currently displayed, keyed by field name
    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.errors())
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.values())
    }

    #[wasm_bindgen(js_name = isSubmitted)]
    pub fn is_submitted(&self) -> bool {
        self.inner.state().is_submitted
    }

    #[wasm_bindgen(js_name = fieldAttrs)]
    pub fn field_attrs(&self, name: &str) -> Result<JsValue, JsValue> {
        let attrs = self.inner.schema().field_attrs(name);
        to_js(&FieldMeta {
            label: attrs.label,
            html5_attrs: attrs.html5_attrs,
            data_validate: attrs.data_validate,
        })
    }
}

/// Validate a record object without a controller
///
/// Returns an object mapping field name to message (empty if valid).
#[wasm_bindgen(js_name = validateRecord)]
pub fn validate_record(record: JsValue) -> Result<JsValue, JsValue> {
    let record: FormRecord = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse record: {}", e)))?;

    match Schema::registration().validate(&record) {
        ValidationResult::Valid(_) => to_js(&FieldErrors::new()),
        ValidationResult::Invalid(errors) => to_js(&errors),
    }
}

/// Quick email syntax check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    signup_validation::is_valid_email(email)
}
