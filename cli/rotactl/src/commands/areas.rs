//! Area commands (cleaning area management).
//!
//! The list order matters: shortfall fills areas front to back and
//! overflow rotates over the list, so areas are shown and stored in
//! the order they were added.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use rota_model::AreaName;

use crate::output::{print_output, print_success};

use super::CommandContext;

/// Area commands.
#[derive(Debug, Args)]
pub struct AreasCommand {
    #[command(subcommand)]
    command: AreasSubcommand,
}

#[derive(Debug, Subcommand)]
enum AreasSubcommand {
    /// List all areas in priority order.
    List,

    /// Add a new area at the end of the list.
    Add(AddAreaArgs),

    /// Remove an area.
    Remove(AreaNameArg),

    /// Change an area's required headcount.
    SetHeadcount(SetHeadcountArgs),
}

#[derive(Debug, Args)]
struct AddAreaArgs {
    /// Area name.
    name: AreaName,

    /// Required headcount (at least 1).
    #[arg(long, default_value = "1")]
    headcount: u32,
}

#[derive(Debug, Args)]
struct AreaNameArg {
    /// Area name.
    name: AreaName,
}

#[derive(Debug, Args)]
struct SetHeadcountArgs {
    /// Area name.
    name: AreaName,

    /// New required headcount (at least 1).
    headcount: u32,
}

impl AreasCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            AreasSubcommand::List => list_areas(ctx),
            AreasSubcommand::Add(args) => add_area(ctx, args),
            AreasSubcommand::Remove(args) => remove_area(ctx, args.name),
            AreasSubcommand::SetHeadcount(args) => set_headcount(ctx, args),
        }
    }
}

/// Area row for display.
#[derive(Debug, Serialize, Tabled)]
struct AreaRow {
    #[tabled(rename = "Area")]
    name: String,

    #[tabled(rename = "Headcount")]
    headcount: u32,
}

fn list_areas(ctx: CommandContext) -> Result<()> {
    let areas = ctx.area_store().load()?;

    let rows: Vec<AreaRow> = areas
        .areas()
        .iter()
        .map(|a| AreaRow {
            name: a.name.to_string(),
            headcount: a.headcount,
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn add_area(ctx: CommandContext, args: AddAreaArgs) -> Result<()> {
    let store = ctx.area_store();
    let mut areas = store.load()?;
    areas.add(args.name.clone(), args.headcount)?;
    store.save(&areas)?;

    print_success(&format!(
        "Added area '{}' with headcount {}.",
        args.name, args.headcount
    ));
    Ok(())
}

fn remove_area(ctx: CommandContext, name: AreaName) -> Result<()> {
    let store = ctx.area_store();
    let mut areas = store.load()?;
    areas.remove(&name)?;
    store.save(&areas)?;

    print_success(&format!("Removed area '{name}'."));
    Ok(())
}

fn set_headcount(ctx: CommandContext, args: SetHeadcountArgs) -> Result<()> {
    let store = ctx.area_store();
    let mut areas = store.load()?;
    areas.set_headcount(&args.name, args.headcount)?;
    store.save(&areas)?;

    print_success(&format!(
        "Area '{}' now requires {} members.",
        args.name, args.headcount
    ));
    Ok(())
}
