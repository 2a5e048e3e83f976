use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `settle` binary.
#[derive(Debug, Parser)]
#[command(
    name = "settle",
    version,
    about = "settle - deadline risk checks for real-estate settlements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `default_format` is the configured fallback when `--format` is absent;
    /// an unrecognized value falls back to JSON.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(default_format, true).unwrap_or(OutputFormat::Json)
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
            today: self.today,
        }
    }
}
