mod alerts;
mod check;

use chrono::NaiveDate;
use serde::Serialize;
use settle_core::enums::Severity;
use settle_core::findings::ProjectRisk;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RiskCommands;
use crate::context::AppContext;

/// Handle `settle risk`.
pub fn handle(action: &RiskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RiskCommands::Check(input) => check::run(&input.input, ctx, flags),
        RiskCommands::Alerts { input, limit } => alerts::run(&input.input, *limit, ctx, flags),
    }
}

/// One table row per flagged project.
#[derive(Debug, Serialize)]
struct RiskRow {
    project_id: String,
    project_name: String,
    severity: Severity,
    settlement_date: Option<NaiveDate>,
    findings: String,
    contacts: usize,
}

impl From<&ProjectRisk> for RiskRow {
    fn from(risk: &ProjectRisk) -> Self {
        Self {
            project_id: risk.project.project_id.to_string(),
            project_name: risk.project.project_name.clone(),
            severity: risk.severity,
            settlement_date: risk.project.settlement_date,
            findings: risk
                .risks
                .iter()
                .map(|finding| finding.kind())
                .collect::<Vec<_>>()
                .join(", "),
            contacts: risk.contacts.len(),
        }
    }
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
