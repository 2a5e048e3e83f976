use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::lenient_date;
use crate::enums::ProjectStatus;
use crate::ids::ProjectId;

/// A property sale tracked through the status pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub project_id: ProjectId,
    pub project_name: String,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub contract_date: Option<NaiveDate>,
    /// Scheduled closing/transfer date.
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub settlement_date: Option<NaiveDate>,
    /// Date by which financing approval must be confirmed.
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub loan_special_clause_deadline: Option<NaiveDate>,
}
