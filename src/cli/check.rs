//! Check commands - score files with a rule engine (ratio scheme)

use super::output;
use crate::reporters::{self, OutputFormat, Report};
use crate::rules::RuleEngine;
use crate::scanner::{self, ScanOptions};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Run `engine` over every file under `path` and print the results
pub fn run(
    engine: &RuleEngine,
    path: &Path,
    options: &ScanOptions,
    format: OutputFormat,
    verbose: bool,
    output_path: Option<&Path>,
) -> Result<()> {
    let units = scanner::load(path, options)
        .with_context(|| format!("Cannot check {}", path.display()))?;
    info!("Checking {} files with {} rules", units.len(), engine.rule_names().len());

    let results: Vec<_> = units.iter().map(|unit| engine.analyze(unit)).collect();
    let rendered = reporters::render(
        Report::Check {
            results: &results,
            verbose,
        },
        format,
    )?;
    output::emit(&rendered, output_path)
}
