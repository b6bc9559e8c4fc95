use anyhow::Result;
use colored::Colorize;
use signup_form::{AlertSink, FormConfig, FormController};

use crate::commands::print_errors;
use crate::RecordArgs;

pub fn execute(config: &FormConfig, args: &RecordArgs) -> Result<()> {
    let sink = AlertSink::stdout()
        .with_title(config.alert.title.as_str())
        .with_indent(config.alert.indent);
    let mut form = FormController::from_config(config, sink);

    for (field, value) in args.edits() {
        form.set_field(field, value);
    }

    let result = form.submit();
    if result.is_valid() {
        return Ok(());
    }

    println!("{}", "Submission rejected".red().bold());
    print_errors(form.errors());
    anyhow::bail!("{} field(s) failed validation", form.errors().len());
}
