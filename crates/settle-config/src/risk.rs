//! Risk evaluation configuration.

use serde::{Deserialize, Serialize};
use settle_risk::alerts::DEFAULT_MAX_ALERTS;
use settle_risk::rules::{DEFAULT_LOAN_TASK_FALLBACK, DEFAULT_LOAN_TASK_KEYWORDS};

use crate::error::ConfigError;

fn default_loan_task_keywords() -> Vec<String> {
    DEFAULT_LOAN_TASK_KEYWORDS
        .iter()
        .map(|keyword| (*keyword).to_owned())
        .collect()
}

fn default_loan_task_fallback() -> String {
    DEFAULT_LOAN_TASK_FALLBACK.to_owned()
}

fn default_max_alerts() -> u32 {
    u32::try_from(DEFAULT_MAX_ALERTS).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RiskConfig {
    /// Task-name fragments that identify the loan approval task.
    #[serde(default = "default_loan_task_keywords")]
    pub loan_task_keywords: Vec<String>,

    /// Label reported when no open loan approval task exists.
    #[serde(default = "default_loan_task_fallback")]
    pub loan_task_fallback: String,

    /// How many of the top risks receive an alert.
    #[serde(default = "default_max_alerts")]
    pub max_alerts: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            loan_task_keywords: default_loan_task_keywords(),
            loan_task_fallback: default_loan_task_fallback(),
            max_alerts: default_max_alerts(),
        }
    }
}

impl RiskConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_alerts == 0 {
            return Err(invalid("risk.max_alerts", "must be at least 1"));
        }
        if self
            .loan_task_keywords
            .iter()
            .all(|keyword| keyword.trim().is_empty())
        {
            return Err(invalid(
                "risk.loan_task_keywords",
                "must contain at least one non-empty keyword",
            ));
        }
        if self.loan_task_fallback.trim().is_empty() {
            return Err(invalid("risk.loan_task_fallback", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        reason: reason.into(),
    }
}
