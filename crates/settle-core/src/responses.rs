//! Response types emitted at the request boundary.
//!
//! These define the JSON output of `settle risk check`, `settle risk alerts`,
//! and `settle calendar`.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CalendarEventKind, Severity, TaskPriority};
use crate::findings::ProjectRisk;
use crate::ids::{ProjectId, TaskId};

/// Count of entries per severity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeveritySummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeveritySummary {
    /// Tally a sequence of severities.
    #[must_use]
    pub fn tally(severities: impl IntoIterator<Item = Severity>) -> Self {
        severities
            .into_iter()
            .fold(Self::default(), |mut summary, severity| {
                summary.total += 1;
                match severity {
                    Severity::Critical => summary.critical += 1,
                    Severity::High => summary.high += 1,
                    Severity::Medium => summary.medium += 1,
                    Severity::Low => summary.low += 1,
                }
                summary
            })
    }
}

/// A record dropped from the request because it could not be read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedRecord {
    /// JSON path of the record, e.g. `projects[2]` or `tasksMap.7[0]`.
    pub field: String,
    pub reason: String,
}

/// Response from `settle risk check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskCheckResponse {
    pub success: bool,
    pub message: String,
    pub risks: Vec<ProjectRisk>,
    pub summary: SeveritySummary,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

/// Human-readable alert merged alongside a [`ProjectRisk`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlert {
    pub alert_message: String,
    pub description: String,
    pub next_actions: Vec<String>,
    pub urgency_level: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// A [`ProjectRisk`] with its alert attached.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertedRisk {
    #[serde(flatten)]
    pub risk: ProjectRisk,
    pub ai_alert: RiskAlert,
}

/// Response from `settle risk alerts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAlertResponse {
    pub success: bool,
    pub message: String,
    pub alerts: Vec<AlertedRisk>,
    pub summary: SeveritySummary,
    pub checked_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

/// A milestone on the transaction calendar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CalendarEventKind,
    pub title: String,
    pub date: NaiveDate,
    pub project_id: ProjectId,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub important: bool,
}
