use anyhow::Result;
use colored::Colorize;
use signup_form::{FormConfig, Schema, ValidationResult};

use crate::commands::print_errors;
use crate::RecordArgs;

pub fn execute(config: &FormConfig, args: &RecordArgs) -> Result<()> {
    let mut record = config.defaults.to_record();
    for (field, value) in args.edits() {
        record.set(field, value);
    }

    match Schema::registration().validate(&record) {
        ValidationResult::Valid(_) => {
            println!("{}", "Record is valid".green().bold());
            Ok(())
        }
        ValidationResult::Invalid(errors) => {
            println!("{}", "Record is invalid".red().bold());
            print_errors(&errors);
            anyhow::bail!("{} field(s) failed validation", errors.len());
        }
    }
}
