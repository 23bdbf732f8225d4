//! Member commands (roster management).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rota_model::MemberName;

use crate::output::{print_output, print_success};

use super::CommandContext;

/// Member commands.
#[derive(Debug, Args)]
pub struct MembersCommand {
    #[command(subcommand)]
    command: MembersSubcommand,
}

#[derive(Debug, Subcommand)]
enum MembersSubcommand {
    /// List all roster members.
    List,

    /// Add a new active member.
    Add(MemberNameArg),

    /// Remove a member from the roster.
    Remove(MemberNameArg),

    /// Mark a member as active.
    Activate(MemberNameArg),

    /// Mark a member as inactive (kept on the roster, excluded from
    /// new rounds).
    Deactivate(MemberNameArg),
}

#[derive(Debug, Args)]
struct MemberNameArg {
    /// Member name.
    name: MemberName,
}

impl MembersCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            MembersSubcommand::List => list_members(ctx),
            MembersSubcommand::Add(args) => add_member(ctx, args.name),
            MembersSubcommand::Remove(args) => remove_member(ctx, args.name),
            MembersSubcommand::Activate(args) => set_active(ctx, args.name, true),
            MembersSubcommand::Deactivate(args) => set_active(ctx, args.name, false),
        }
    }
}

/// Member row for display.
#[derive(Debug, Serialize, Tabled)]
struct MemberRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Active")]
    active: bool,
}

fn list_members(ctx: CommandContext) -> Result<()> {
    let roster = ctx.roster_store().load()?;

    let rows: Vec<MemberRow> = roster
        .members()
        .iter()
        .map(|m| MemberRow {
            name: m.name.to_string(),
            active: m.active,
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn add_member(ctx: CommandContext, name: MemberName) -> Result<()> {
    let store = ctx.roster_store();
    let mut roster = store.load()?;
    roster.add(name.clone())?;
    store.save(&roster)?;

    print_success(&format!("Added member '{name}'."));
    Ok(())
}

fn remove_member(ctx: CommandContext, name: MemberName) -> Result<()> {
    let store = ctx.roster_store();
    let mut roster = store.load()?;
    roster.remove(&name)?;
    store.save(&roster)?;

    print_success(&format!("Removed member '{name}'."));
    Ok(())
}

fn set_active(ctx: CommandContext, name: MemberName, active: bool) -> Result<()> {
    let store = ctx.roster_store();
    let mut roster = store.load()?;
    roster.set_active(&name, active)?;
    store.save(&roster)?;

    let state = if active { "active" } else { "inactive" };
    print_success(&format!("Member '{name}' is now {state}."));
    Ok(())
}
