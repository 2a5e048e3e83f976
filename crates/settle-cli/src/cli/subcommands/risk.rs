use clap::Subcommand;

use crate::cli::root_commands::InputArgs;

/// Risk commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RiskCommands {
    /// Rank projects by deadline risk.
    Check(InputArgs),
    /// Rank projects and attach alerts to the top entries.
    Alerts {
        #[command(flatten)]
        input: InputArgs,
        /// How many of the top risks get an alert (defaults to risk.max_alerts).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },
}
