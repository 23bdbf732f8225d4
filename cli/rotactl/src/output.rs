//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use rota_model::Round;

/// Output format.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item as JSON regardless of format.
pub fn print_single<T: Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}

/// One displayed row of a round, grouped by area.
#[derive(Debug, Serialize, Tabled)]
pub struct RoundRow {
    #[tabled(rename = "Area")]
    pub area: String,

    #[tabled(rename = "Members")]
    pub members: String,
}

/// Rows for a round grouped by area, members comma-joined.
pub fn round_rows(round: &Round) -> Vec<RoundRow> {
    round
        .by_area()
        .into_iter()
        .map(|(area, members)| RoundRow {
            area: area.to_string(),
            members: members
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

/// Print a full round in the requested format.
pub fn print_round(round: &Round, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!(
                "Round stamped at {}",
                round.stamped_at.format("%Y-%m-%d %H:%M:%S")
            );
            print_output(&round_rows(round), format);
        }
        OutputFormat::Json => print_single(round),
    }
}
