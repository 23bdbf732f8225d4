//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

use rota_store::StoreError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No rounds have been generated yet")]
    NoRounds,

    #[error("No round found at {0}")]
    RoundNotFound(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::NoRounds => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `rota assign` to generate the first round.".yellow()
                );
            }
            CliError::RoundNotFound(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `rota rounds list` to see recorded rounds.".yellow()
                );
            }
        }
    }

    if let Some(store_err) = err.downcast_ref::<StoreError>() {
        match store_err {
            StoreError::Parse { path, .. } => {
                eprintln!(
                    "\n{}",
                    format!(
                        "Hint: {} is not valid state data; restore it from a backup or remove it.",
                        path.display()
                    )
                    .yellow()
                );
            }
            StoreError::UnsupportedVersion { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: This state file was written by a newer rota; upgrade the CLI.".yellow()
                );
            }
            _ => {}
        }
    }
}
