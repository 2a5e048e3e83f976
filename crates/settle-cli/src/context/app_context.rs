use chrono::{Local, NaiveDate};
use settle_config::SettleConfig;
use settle_risk::{RiskEvaluator, RiskRules};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SettleConfig,
    pub evaluator: RiskEvaluator,
    /// The date every command evaluates against.
    pub today: NaiveDate,
}

impl AppContext {
    /// Build the evaluator from configuration and pin the evaluation date.
    #[must_use]
    pub fn init(config: SettleConfig, flags: &GlobalFlags) -> Self {
        let rules = RiskRules::new(
            &config.risk.loan_task_keywords,
            config.risk.loan_task_fallback.as_str(),
        );
        let today = flags.today.unwrap_or_else(|| Local::now().date_naive());
        tracing::debug!(%today, "evaluation date resolved");

        Self {
            config,
            evaluator: RiskEvaluator::new(rules),
            today,
        }
    }
}
