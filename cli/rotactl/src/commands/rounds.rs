//! Round commands (assignment history).

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rota_model::{rounds, Round};

use crate::error::CliError;
use crate::output::{print_output, print_round};

use super::CommandContext;

/// Round commands.
#[derive(Debug, Args)]
pub struct RoundsCommand {
    #[command(subcommand)]
    command: RoundsSubcommand,
}

#[derive(Debug, Subcommand)]
enum RoundsSubcommand {
    /// List all recorded rounds.
    List,

    /// Show one round grouped by area (default: the latest).
    Show(ShowRoundArgs),
}

#[derive(Debug, Args)]
struct ShowRoundArgs {
    /// Round timestamp (RFC 3339). Defaults to the latest round.
    stamped_at: Option<DateTime<Utc>>,
}

impl RoundsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            RoundsSubcommand::List => list_rounds(ctx),
            RoundsSubcommand::Show(args) => show_round(ctx, args),
        }
    }
}

/// Round summary row for display.
#[derive(Debug, Serialize, Tabled)]
struct RoundSummaryRow {
    #[tabled(rename = "Stamped")]
    stamped_at: String,

    #[tabled(rename = "Assignments")]
    assignments: usize,
}

fn load_rounds(ctx: &CommandContext) -> Result<Vec<Round>> {
    let records = ctx.history_store().load()?;
    Ok(rounds(&records))
}

fn list_rounds(ctx: CommandContext) -> Result<()> {
    let rounds = load_rounds(&ctx)?;

    let rows: Vec<RoundSummaryRow> = rounds
        .iter()
        .map(|r| RoundSummaryRow {
            stamped_at: r.stamped_at.to_rfc3339(),
            assignments: r.len(),
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn show_round(ctx: CommandContext, args: ShowRoundArgs) -> Result<()> {
    let rounds = load_rounds(&ctx)?;

    let round = match args.stamped_at {
        Some(stamped_at) => rounds
            .iter()
            .find(|r| r.stamped_at == stamped_at)
            .ok_or_else(|| CliError::RoundNotFound(stamped_at.to_rfc3339()))?,
        None => rounds.last().ok_or(CliError::NoRounds)?,
    };

    print_round(round, ctx.format);
    Ok(())
}
