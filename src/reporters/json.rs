//! JSON reporter
//!
//! Outputs the full result objects as pretty-printed JSON.

use super::Report;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: Report<'_>) -> Result<String> {
    let json = match report {
        Report::Check { results, .. } => serde_json::to_string_pretty(results)?,
        Report::Analysis(analysis) => serde_json::to_string_pretty(analysis)?,
        Report::Migration(result) => serde_json::to_string_pretty(result)?,
    };
    Ok(json)
}
