use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dates::{days_until, lenient_date};
use crate::enums::TaskPriority;
use crate::ids::{ProjectId, TaskId};

/// A checklist item belonging to exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<TaskId>,
    /// Owning project. Informational only; the map key a task is listed
    /// under decides which project it belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    pub task_name: String,
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_flag")]
    #[schemars(with = "Option<bool>")]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "lenient_priority")]
    #[schemars(with = "TaskPriority")]
    pub priority: TaskPriority,
}

impl Task {
    /// Due date and day count for an incomplete task with a due date.
    #[must_use]
    pub fn open_due(&self, today: NaiveDate) -> Option<(NaiveDate, i64)> {
        if self.is_completed {
            return None;
        }
        let due = self.due_date?;
        days_until(Some(due), today).map(|days| (due, days))
    }

    #[must_use]
    pub fn is_open_high_priority(&self) -> bool {
        !self.is_completed && self.priority == TaskPriority::High
    }
}

/// Unknown or missing priority labels read as `normal`.
fn lenient_priority<'de, D>(deserializer: D) -> Result<TaskPriority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => TaskPriority::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
            debug!(value = %value, "unknown task priority treated as normal");
            TaskPriority::default()
        }),
    })
}

/// Completion flag read by truthiness: `null` is incomplete, as are `0`,
/// `""`, and `false`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    })
}
