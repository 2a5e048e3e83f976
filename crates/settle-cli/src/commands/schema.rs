use anyhow::bail;
use schemars::{JsonSchema, Schema, schema_for};
use settle_core::entities::{Contact, Project, Task};
use settle_core::findings::{Finding, ProjectRisk};
use settle_core::responses::{CalendarEvent, RiskAlertResponse, RiskCheckResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `settle schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "project",
    "task",
    "contact",
    "finding",
    "project_risk",
    "risk_check_response",
    "risk_alert_response",
    "calendar_event",
];

/// Handle `settle schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_by_name(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> anyhow::Result<Schema> {
    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    let schema = match normalized.as_str() {
        "project" => schema::<Project>(),
        "task" => schema::<Task>(),
        "contact" => schema::<Contact>(),
        "finding" => schema::<Finding>(),
        "project_risk" => schema::<ProjectRisk>(),
        "risk_check_response" => schema::<RiskCheckResponse>(),
        "risk_alert_response" => schema::<RiskAlertResponse>(),
        "calendar_event" => schema::<CalendarEvent>(),
        _ => bail!(
            "unknown schema type '{name}' (expected one of: {})",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(schema)
}

fn schema<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

#[cfg(test)]
mod tests {
    use super::{SCHEMA_NAMES, schema_by_name};

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_by_name(name).expect("listed schema should resolve");
            assert!(schema.as_object().is_some(), "{name} should be an object schema");
        }
    }

    #[test]
    fn names_accept_hyphens_and_case() {
        let schema = schema_by_name("Risk-Check-Response").expect("schema should resolve");
        let properties = schema
            .get("properties")
            .and_then(|value| value.as_object())
            .expect("properties");
        assert!(properties.contains_key("checkedAt"));
    }

    #[test]
    fn unknown_name_lists_choices() {
        let error = schema_by_name("invoice").expect_err("should fail");
        assert!(error.to_string().contains("project_risk"));
    }
}
