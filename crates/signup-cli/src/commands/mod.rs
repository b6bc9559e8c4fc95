pub mod check;
pub mod schema;
pub mod submit;

use colored::Colorize;
use signup_form::FieldErrors;

/// Print one line per failing field
pub(crate) fn print_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        println!("  {} {}: {}", "✗".red(), field.to_string().bold(), message);
    }
}
