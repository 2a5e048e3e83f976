use std::io::Read;

use anyhow::Context;
use settle_core::request::RiskCheckRequest;
use tracing::{info, warn};

/// Input argument that reads the payload from stdin.
pub const STDIN: &str = "-";

/// Read the raw payload from a file path or stdin.
pub fn read_payload(input: &str) -> anyhow::Result<String> {
    if input == STDIN {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read request from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(input).with_context(|| format!("failed to read request file {input}"))
}

/// Read and parse a request. Structural problems are errors; records that
/// could not be read are reported in `skipped`.
pub fn load_request(input: &str) -> anyhow::Result<RiskCheckRequest> {
    let raw = read_payload(input)?;
    let request = RiskCheckRequest::from_json_str(&raw)
        .with_context(|| format!("invalid request in {}", describe(input)))?;

    if !request.skipped.is_empty() {
        warn!(
            skipped = request.skipped.len(),
            "some records could not be read and were skipped"
        );
    }
    info!(
        projects = request.projects.len(),
        task_lists = request.tasks.len(),
        contact_lists = request.contacts.len(),
        "request loaded"
    );
    Ok(request)
}

fn describe(input: &str) -> &str {
    if input == STDIN { "stdin" } else { input }
}
