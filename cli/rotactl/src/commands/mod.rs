//! CLI commands.

mod areas;
mod assign;
mod members;
mod rounds;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rota_store::{AreaStore, DataDir, HistoryStore, RosterStore};

use crate::output::OutputFormat;

/// dutyrota CLI - Assign members to recurring cleaning duties.
#[derive(Debug, Parser)]
#[command(name = "rota")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Directory holding the state files.
    #[arg(long, global = true, env = "ROTA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage roster members.
    Members(members::MembersCommand),

    /// Manage cleaning areas.
    Areas(areas::AreasCommand),

    /// Generate a new assignment round.
    Assign(assign::AssignCommand),

    /// Browse assignment history.
    Rounds(rounds::RoundsCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = match self.format.as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        };

        let ctx = CommandContext {
            data_dir: DataDir::resolve(self.data_dir)?,
            format,
        };

        match self.command {
            Commands::Members(cmd) => cmd.run(ctx),
            Commands::Areas(cmd) => cmd.run(ctx),
            Commands::Assign(cmd) => cmd.run(ctx),
            Commands::Rounds(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("rota {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub data_dir: DataDir,
    pub format: OutputFormat,
}

impl CommandContext {
    /// The roster store under the data directory.
    pub fn roster_store(&self) -> RosterStore {
        RosterStore::new(self.data_dir.members_file())
    }

    /// The area store under the data directory.
    pub fn area_store(&self) -> AreaStore {
        AreaStore::new(self.data_dir.areas_file())
    }

    /// The history store under the data directory.
    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(self.data_dir.history_file())
    }
}
