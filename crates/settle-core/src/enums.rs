//! Status, priority, severity, and calendar enums for settle.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Project statuses and task priorities also accept the Japanese labels used
//! by the dashboard that produces the request payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of a sale project on the kanban board.
///
/// ```text
/// pre_contract → contracted → awaiting_loan_approval → preparing_settlement → settlement_complete
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[serde(alias = "契約前")]
    PreContract,
    #[serde(alias = "契約済み")]
    Contracted,
    #[serde(alias = "融資承認待ち")]
    AwaitingLoanApproval,
    #[serde(alias = "決済準備中")]
    PreparingSettlement,
    #[serde(alias = "決済完了")]
    SettlementComplete,
}

impl ProjectStatus {
    /// Board columns in pipeline order.
    pub const PIPELINE: [Self; 5] = [
        Self::PreContract,
        Self::Contracted,
        Self::AwaitingLoanApproval,
        Self::PreparingSettlement,
        Self::SettlementComplete,
    ];

    /// Whether the project has left the pipeline. Terminal projects carry no risk.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::SettlementComplete)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreContract => "pre_contract",
            Self::Contracted => "contracted",
            Self::AwaitingLoanApproval => "awaiting_loan_approval",
            Self::PreparingSettlement => "preparing_settlement",
            Self::SettlementComplete => "settlement_complete",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

/// Priority of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    #[serde(alias = "高")]
    High,
    #[default]
    #[serde(alias = "中")]
    Normal,
    #[serde(alias = "低")]
    Low,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Ordinal risk level of a finding or a whole project.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `low < medium < high < critical`. Both the per-project maximum and the
/// final ranking use this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CalendarEventKind
// ---------------------------------------------------------------------------

/// Kind of a milestone on the transaction calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventKind {
    /// Contract signing date.
    Contract,
    /// Scheduled settlement (closing) date.
    Settlement,
    /// Loan-contingency deadline.
    Deadline,
    /// Due date of an incomplete task.
    Task,
}

impl CalendarEventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Settlement => "settlement",
            Self::Deadline => "deadline",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for CalendarEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
