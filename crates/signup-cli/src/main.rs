mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use signup_form::{Field, FormConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Signup form - validate and submit registration data", long_about = None)]
struct Cli {
    /// Path to the form configuration
    #[arg(short, long, global = true, default_value = "signup.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a record and print per-field errors
    Check {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Fill the form, submit it and print the alert on success
    Submit {
        #[command(flatten)]
        record: RecordArgs,
    },

    /// Print field metadata (HTML5 attributes and data-validate JSON)
    Schema {
        /// Only this field (e.g. "confirmPassword")
        #[arg(short, long)]
        field: Option<String>,
    },
}

/// Field values typed by the user; omitted fields keep their defaults
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    password: Option<String>,

    #[arg(long = "confirm-password")]
    confirm_password: Option<String>,
}

impl RecordArgs {
    /// Provided values, in form order
    pub fn edits(&self) -> Vec<(Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Password, &self.password),
            (Field::ConfirmPassword, &self.confirm_password),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so alert output stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = FormConfig::load(&cli.config)?;
    debug!("Loaded config from {:?}", cli.config);

    match cli.command {
        Commands::Check { record } => {
            commands::check::execute(&config, &record)?;
        }
        Commands::Submit { record } => {
            commands::submit::execute(&config, &record)?;
        }
        Commands::Schema { field } => {
            commands::schema::execute(field.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_skip_missing_fields() {
        let args = RecordArgs {
            name: Some("Bob".to_string()),
            confirm_password: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            args.edits(),
            vec![(Field::Name, "Bob"), (Field::ConfirmPassword, "")]
        );
    }

    #[test]
    fn test_cli_parses_submit() {
        let cli = Cli::try_parse_from([
            "signup",
            "submit",
            "--name",
            "Alice",
            "--confirm-password",
            "Abcdef12",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit { record } => {
                assert_eq!(record.name.as_deref(), Some("Alice"));
                assert_eq!(record.confirm_password.as_deref(), Some("Abcdef12"));
                assert!(record.email.is_none());
            }
            _ => panic!("expected submit"),
        }
        assert_eq!(cli.config, PathBuf::from("signup.toml"));
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
