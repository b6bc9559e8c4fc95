use anyhow::Result;
use colored::Colorize;
use signup_form::{Field, FormField, Schema};

pub fn execute(field: Option<&str>) -> Result<()> {
    let schema = Schema::registration();

    let names = match field {
        Some(name) => {
            // Reject typos instead of printing empty attributes
            name.parse::<Field>()?;
            vec![name]
        }
        None => schema.field_names(),
    };

    for name in names {
        let attrs = schema.field_attrs(name);
        println!("{} ({})", name.cyan().bold(), attrs.label);
        println!("  <input name=\"{}\" {} />", name, attrs.render_all());
    }

    Ok(())
}
