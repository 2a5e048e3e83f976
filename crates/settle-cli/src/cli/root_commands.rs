use clap::{Args, Subcommand};

use crate::cli::subcommands::RiskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Deadline risk checks.
    Risk {
        #[command(subcommand)]
        action: RiskCommands,
    },
    /// Milestone calendar of contract, settlement, loan, and task dates.
    Calendar(CalendarArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Request payload location shared by commands that read one.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Path to the JSON payload, or `-` for stdin.
    pub input: String,
}

/// Arguments for `settle calendar`.
#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Days ahead of today to include (defaults to calendar.window_days).
    #[arg(long, conflicts_with = "all")]
    pub days: Option<u32>,
    /// Include every event regardless of date.
    #[arg(long)]
    pub all: bool,
    /// Only include these event kinds: contract, settlement, deadline, task.
    #[arg(long = "kind")]
    pub kinds: Vec<String>,
}

/// Arguments for `settle schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
