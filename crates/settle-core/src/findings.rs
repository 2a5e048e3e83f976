//! Risk findings and the per-project aggregate.
//!
//! A [`Finding`] is one detected risk condition. Findings are grouped into a
//! [`ProjectRisk`] together with a summary of the owning project and its
//! contacts. Both are recomputed on every evaluation and never stored.
//!
//! Finding payloads use camelCase on the wire (`daysUntil`, `isOverdue`,
//! ...); the `type` tag and project summary fields stay snake_case.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Contact, Project};
use crate::enums::{ProjectStatus, Severity};
use crate::ids::ProjectId;

/// A single detected risk condition within one project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Finding {
    LoanDeadline(LoanDeadlineFinding),
    SettlementDeadline(SettlementDeadlineFinding),
    OverdueTasks(OverdueTasksFinding),
    UrgentTasks(UrgentTasksFinding),
}

impl Finding {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::LoanDeadline(finding) => finding.severity,
            Self::SettlementDeadline(finding) => finding.severity,
            Self::OverdueTasks(finding) => finding.severity,
            Self::UrgentTasks(finding) => finding.severity,
        }
    }

    /// The wire tag of this finding.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoanDeadline(_) => "loan_deadline",
            Self::SettlementDeadline(_) => "settlement_deadline",
            Self::OverdueTasks(_) => "overdue_tasks",
            Self::UrgentTasks(_) => "urgent_tasks",
        }
    }
}

/// The loan-contingency deadline is at most three days away (or passed).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoanDeadlineFinding {
    pub severity: Severity,
    pub deadline: NaiveDate,
    pub days_until: i64,
    /// First incomplete loan/approval task, or a fallback label.
    pub task_name: String,
    pub is_overdue: bool,
}

/// Settlement is at most a week away with high-priority work still open.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettlementDeadlineFinding {
    pub severity: Severity,
    pub deadline: NaiveDate,
    pub days_until: i64,
    pub incomplete_tasks: usize,
    pub task_names: Vec<String>,
    pub is_overdue: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverdueTasksFinding {
    pub severity: Severity,
    pub overdue_tasks: Vec<OverdueTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverdueTask {
    pub task_name: String,
    pub due_date: NaiveDate,
    pub days_overdue: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrgentTasksFinding {
    pub severity: Severity,
    pub urgent_tasks: Vec<UrgentTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrgentTask {
    pub task_name: String,
    pub due_date: NaiveDate,
    pub days_until: i64,
}

/// The owning project's fields echoed in a [`ProjectRisk`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub project_name: String,
    pub status: ProjectStatus,
    pub settlement_date: Option<NaiveDate>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.project_id.clone(),
            project_name: project.project_name.clone(),
            status: project.status,
            settlement_date: project.settlement_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContactSummary {
    pub role: String,
    pub name: String,
}

impl From<&Contact> for ContactSummary {
    fn from(contact: &Contact) -> Self {
        Self {
            role: contact.role.clone(),
            name: contact.name.clone(),
        }
    }
}

/// Aggregated risk record for one project.
///
/// `severity` is the highest severity among `risks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectRisk {
    pub project: ProjectSummary,
    pub risks: Vec<Finding>,
    pub severity: Severity,
    pub contacts: Vec<ContactSummary>,
}
