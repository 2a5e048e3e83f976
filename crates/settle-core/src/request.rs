//! Request payload parsing.
//!
//! The payload has the shape
//!
//! ```json
//! { "projects": [...], "tasksMap": { "<id>": [...] }, "contactsMap": { "<id>": [...] } }
//! ```
//!
//! `projects` must be present and an array; that is a hard failure.
//! `tasksMap` and `contactsMap` default to empty when absent or `null`, and
//! fail only when present with the wrong type. Individual records that do
//! not deserialize are skipped and reported in [`RiskCheckRequest::skipped`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::entities::{Contact, Project, Task};
use crate::errors::CoreError;
use crate::ids::ProjectId;
use crate::responses::SkippedRecord;

/// A fully materialized request, ready for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskCheckRequest {
    pub projects: Vec<Project>,
    pub tasks: HashMap<ProjectId, Vec<Task>>,
    pub contacts: HashMap<ProjectId, Vec<Contact>>,
    pub skipped: Vec<SkippedRecord>,
}

impl RiskCheckRequest {
    /// Parse a request from raw JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Parse a request from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut body) = value else {
            return Err(CoreError::malformed(
                "body",
                format!("must be an object, got {}", json_type(&value)),
            ));
        };

        let projects = match body.remove("projects") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(CoreError::malformed(
                    "projects",
                    format!("must be an array, got {}", json_type(&other)),
                ));
            }
            None => return Err(CoreError::malformed("projects", "is required")),
        };

        let mut skipped = Vec::new();
        let projects = parse_records::<Project>(projects, "projects", &mut skipped);
        let tasks = parse_map::<Task>(body.remove("tasksMap"), "tasksMap", &mut skipped)?;
        let contacts =
            parse_map::<Contact>(body.remove("contactsMap"), "contactsMap", &mut skipped)?;

        Ok(Self {
            projects,
            tasks,
            contacts,
            skipped,
        })
    }
}

fn parse_records<T: DeserializeOwned>(
    items: Vec<Value>,
    path: &str,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(error) => {
                let field = format!("{path}[{index}]");
                warn!(%field, %error, "skipping malformed record");
                skipped.push(SkippedRecord {
                    field,
                    reason: error.to_string(),
                });
                None
            }
        })
        .collect()
}

fn parse_map<T: DeserializeOwned>(
    raw: Option<Value>,
    path: &str,
    skipped: &mut Vec<SkippedRecord>,
) -> Result<HashMap<ProjectId, Vec<T>>, CoreError> {
    let entries: Map<String, Value> = match raw {
        None | Some(Value::Null) => return Ok(HashMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            return Err(CoreError::malformed(
                path,
                format!("must be an object keyed by project id, got {}", json_type(&other)),
            ));
        }
    };

    let mut map = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        let field = format!("{path}.{key}");
        let records = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => parse_records(items, &field, skipped),
            other => {
                let reason = format!("must be an array, got {}", json_type(&other));
                warn!(%field, %reason, "skipping malformed entry");
                skipped.push(SkippedRecord { field, reason });
                continue;
            }
        };
        map.entry(ProjectId::new(key.trim()))
            .or_insert_with(Vec::new)
            .extend(records);
    }
    Ok(map)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
