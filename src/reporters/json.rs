//! JSON reporter
//!
//! Outputs the full Report as pretty-printed JSON. Undefined scores and ages
//! are `null`.

use crate::models::Report;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
