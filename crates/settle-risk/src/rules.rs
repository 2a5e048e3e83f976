//! Thresholds and matching rules for the risk pass.

/// Loan deadlines this many days out (or fewer) are reported.
pub const LOAN_DEADLINE_WINDOW_DAYS: i64 = 3;
/// Loan deadlines this many days out (or fewer) are `high`; today or past is `critical`.
pub const LOAN_DEADLINE_HIGH_DAYS: i64 = 1;
/// Settlements this many days out (or fewer) are checked for open high-priority work.
pub const SETTLEMENT_WINDOW_DAYS: i64 = 7;
/// Settlements this many days out (or fewer) are `high`.
pub const SETTLEMENT_HIGH_DAYS: i64 = 3;
/// Open tasks due within this many days are urgent.
pub const URGENT_TASK_WINDOW_DAYS: i64 = 3;

/// Default task-name fragments that mark a loan approval task.
pub const DEFAULT_LOAN_TASK_KEYWORDS: &[&str] = &["融資", "承認", "loan", "approval"];
/// Label used when no open loan approval task exists.
pub const DEFAULT_LOAN_TASK_FALLBACK: &str = "融資承認確認";

/// Configurable parts of the risk pass.
///
/// The loan finding names the first incomplete task whose name contains any
/// keyword, compared after Unicode lowercasing. This is a naming-convention
/// heuristic and only as reliable as the task names fed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRules {
    loan_task_keywords: Vec<String>,
    loan_task_fallback: String,
}

impl RiskRules {
    /// Build rules from keywords and a fallback label. Blank keywords are dropped.
    #[must_use]
    pub fn new<I, S>(loan_task_keywords: I, loan_task_fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let loan_task_keywords = loan_task_keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Self {
            loan_task_keywords,
            loan_task_fallback: loan_task_fallback.into(),
        }
    }

    #[must_use]
    pub fn is_loan_task(&self, task_name: &str) -> bool {
        let name = task_name.to_lowercase();
        self.loan_task_keywords
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }

    #[must_use]
    pub fn loan_task_fallback(&self) -> &str {
        &self.loan_task_fallback
    }
}

impl Default for RiskRules {
    fn default() -> Self {
        Self::new(DEFAULT_LOAN_TASK_KEYWORDS, DEFAULT_LOAN_TASK_FALLBACK)
    }
}
