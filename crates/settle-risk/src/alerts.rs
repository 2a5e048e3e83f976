//! Alert attachment.
//!
//! The top risks are handed to an [`AlertGenerator`] that writes a short
//! warning, a description, and next actions for a sales rep. Generators
//! backed by a hosted model live outside this crate; [`FallbackAlerts`]
//! produces the canned alert that is also substituted whenever a generator
//! fails for a project.

use settle_core::findings::ProjectRisk;
use settle_core::ids::ProjectId;
use settle_core::responses::{AlertedRisk, RiskAlert};
use thiserror::Error;
use tracing::warn;

/// How many risks get an alert unless configured otherwise.
pub const DEFAULT_MAX_ALERTS: usize = 10;

#[derive(Debug, Error)]
pub enum AlertError {
    /// The generator could not produce an alert for a project.
    #[error("Alert generation failed for project {project_id}: {reason}")]
    Generation { project_id: ProjectId, reason: String },
}

/// Produces the human-readable alert for one project's risks.
pub trait AlertGenerator {
    fn generate(&self, risk: &ProjectRisk) -> Result<RiskAlert, AlertError>;
}

/// Generator that always returns the canned alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAlerts;

impl AlertGenerator for FallbackAlerts {
    fn generate(&self, risk: &ProjectRisk) -> Result<RiskAlert, AlertError> {
        Ok(fallback_alert(risk))
    }
}

/// Description carried by every fallback alert.
pub const FALLBACK_DESCRIPTION: &str = "詳細な分析に失敗しましたが、期限が迫っています。";
/// Single next action carried by every fallback alert.
pub const FALLBACK_NEXT_ACTION: &str = "案件の状況を確認してください";

/// Canned alert whose urgency mirrors the project's severity.
///
/// The wording is Japanese like the loan-task fallback label, matching the
/// dashboard the alerts are shown in.
#[must_use]
pub fn fallback_alert(risk: &ProjectRisk) -> RiskAlert {
    RiskAlert {
        alert_message: format!(
            "【警告】{}: リスクが検出されました",
            risk.project.project_name
        ),
        description: FALLBACK_DESCRIPTION.into(),
        next_actions: vec![FALLBACK_NEXT_ACTION.into()],
        urgency_level: risk.severity,
        generated_at: None,
    }
}

/// Attach alerts to the first `limit` risks, preserving order.
///
/// A generator failure never drops a risk: the fallback alert is used
/// instead.
pub fn attach_alerts<G>(risks: &[ProjectRisk], generator: &G, limit: usize) -> Vec<AlertedRisk>
where
    G: AlertGenerator + ?Sized,
{
    risks
        .iter()
        .take(limit)
        .map(|risk| {
            let ai_alert = generator.generate(risk).unwrap_or_else(|error| {
                warn!(
                    project_id = %risk.project.project_id,
                    %error,
                    "alert generation failed; using fallback alert"
                );
                fallback_alert(risk)
            });
            AlertedRisk {
                risk: risk.clone(),
                ai_alert,
            }
        })
        .collect()
}
