use chrono::{DateTime, Utc};
use serde::Serialize;
use settle_core::enums::Severity;
use settle_core::findings::ProjectRisk;
use settle_core::responses::{AlertedRisk, RiskAlertResponse, SeveritySummary, SkippedRecord};
use settle_risk::{AlertGenerator, FallbackAlerts, attach_alerts};

use super::count_noun;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::load_request;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    input: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, ctx.config.risk.max_alerts)?;
    let request = load_request(input)?;
    let risks = ctx.evaluator.evaluate(
        ctx.today,
        &request.projects,
        &request.tasks,
        &request.contacts,
    );
    let response = build_response(&risks, &FallbackAlerts, limit, request.skipped, Utc::now());

    if flags.format == OutputFormat::Table {
        let rows: Vec<AlertRow> = response.alerts.iter().map(AlertRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&response, flags.format)
}

fn build_response(
    risks: &[ProjectRisk],
    generator: &dyn AlertGenerator,
    limit: usize,
    skipped: Vec<SkippedRecord>,
    checked_at: DateTime<Utc>,
) -> RiskAlertResponse {
    let alerts = attach_alerts(risks, generator, limit);
    let message = if alerts.is_empty() {
        String::from("No risks detected")
    } else {
        format!("{} generated", count_noun(alerts.len(), "risk alert"))
    };

    RiskAlertResponse {
        success: true,
        message,
        summary: SeveritySummary::tally(alerts.iter().map(|alerted| alerted.risk.severity)),
        alerts,
        checked_at,
        skipped,
    }
}

#[derive(Debug, Serialize)]
struct AlertRow {
    project_id: String,
    project_name: String,
    urgency: Severity,
    alert: String,
    next_actions: String,
}

impl From<&AlertedRisk> for AlertRow {
    fn from(alerted: &AlertedRisk) -> Self {
        Self {
            project_id: alerted.risk.project.project_id.to_string(),
            project_name: alerted.risk.project.project_name.clone(),
            urgency: alerted.ai_alert.urgency_level,
            alert: alerted.ai_alert.alert_message.clone(),
            next_actions: alerted.ai_alert.next_actions.join("; "),
        }
    }
}
