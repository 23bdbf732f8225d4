//! Assign command (generate a new round).

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use tracing::debug;

use rota_allocate::{generate_round, Balance, StaffingSummary};

use crate::output::{print_info, print_round, print_success, print_warning, OutputFormat};

use super::CommandContext;

/// Assign command - allocate active members to areas for a new round.
#[derive(Debug, Args)]
pub struct AssignCommand {}

impl AssignCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let roster = ctx.roster_store().load()?;
        let areas = ctx.area_store().load()?;
        let history = ctx.history_store();

        let active = roster.active_names();

        if active.is_empty() {
            print_info("No active members; nothing to assign.");
            return Ok(());
        }
        if areas.is_empty() {
            print_info("No areas defined; nothing to assign.");
            return Ok(());
        }

        // Mismatch is a warning, not an error; allocation proceeds.
        let summary = StaffingSummary::new(active.len(), areas.areas());
        match summary.balance() {
            Balance::Balanced => {}
            Balance::Overflow(extra) => print_warning(&format!(
                "{} active members for {} required slots; {extra} will be distributed round-robin.",
                summary.active, summary.required
            )),
            Balance::Shortfall(missing) => print_warning(&format!(
                "{} active members for {} required slots; {missing} slots will go unfilled.",
                summary.active, summary.required
            )),
        }

        let previous = history.latest_mapping()?;
        debug!(
            active = active.len(),
            areas = areas.len(),
            previous = previous.len(),
            "generating round"
        );

        // Fresh generator per invocation so repeated runs differ.
        let round = generate_round(
            Utc::now(),
            &active,
            areas.areas(),
            &previous,
            &mut rand::rng(),
        );

        history.append_round(&round)?;

        match ctx.format {
            OutputFormat::Table => {
                print_success(&format!(
                    "Generated round with {} assignments.",
                    round.len()
                ));
                print_round(&round, ctx.format);
            }
            OutputFormat::Json => print_round(&round, ctx.format),
        }
        Ok(())
    }
}
