use chrono::{DateTime, Utc};
use settle_core::findings::ProjectRisk;
use settle_core::responses::{RiskCheckResponse, SeveritySummary, SkippedRecord};

use super::{RiskRow, count_noun};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::load_request;
use crate::context::AppContext;
use crate::output::output;

pub fn run(input: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = load_request(input)?;
    let risks = ctx.evaluator.evaluate(
        ctx.today,
        &request.projects,
        &request.tasks,
        &request.contacts,
    );
    let response = build_response(risks, request.skipped, Utc::now());

    if flags.format == OutputFormat::Table {
        let rows: Vec<RiskRow> = response.risks.iter().map(RiskRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&response, flags.format)
}

fn build_response(
    risks: Vec<ProjectRisk>,
    skipped: Vec<SkippedRecord>,
    checked_at: DateTime<Utc>,
) -> RiskCheckResponse {
    let message = if risks.is_empty() {
        String::from("No risks detected")
    } else {
        format!("{} detected", count_noun(risks.len(), "risk"))
    };

    RiskCheckResponse {
        success: true,
        message,
        summary: SeveritySummary::tally(risks.iter().map(|risk| risk.severity)),
        risks,
        checked_at,
        skipped,
    }
}
