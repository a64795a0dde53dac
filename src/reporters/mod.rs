//! Output reporters for Xala results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Full object dump
//! - `table` - Tab-separated rows, one per outcome or issue
//! - `markdown` - Detailed Markdown report

mod json;
mod markdown;
mod table;
mod text;

use crate::analyzer::MigrationAnalysis;
use crate::migration::MigrationResult;
use crate::models::AnalysisResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Table,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" | "tsv" => Ok(OutputFormat::Table),
            "markdown" | "md" | "detailed" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, table, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Something a command wants printed
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// Rule-engine results; `verbose` also lists passed rules
    Check {
        results: &'a [AnalysisResult],
        verbose: bool,
    },
    Analysis(&'a MigrationAnalysis),
    Migration(&'a MigrationResult),
}

/// Render a report in the specified format
pub fn render(report: Report<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Table => Ok(table::render(report)),
        OutputFormat::Markdown => Ok(markdown::render(report)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::analyzer::analyze_units;
    use crate::models::SourceUnit;
    use crate::rules::RuleEngine;
    use std::path::Path;

    pub(crate) const LEGACY: &str = r#"import { Button } from '@mui/material';
export const legacy = (props: any) => <Button style={{ color: '#fff' }} />;
"#;

    pub(crate) fn check_results() -> Vec<AnalysisResult> {
        let engine = RuleEngine::default();
        vec![engine.analyze(&SourceUnit::new("src/components/legacy.tsx", LEGACY))]
    }

    pub(crate) fn analysis() -> MigrationAnalysis {
        analyze_units(
            Path::new("src"),
            &[SourceUnit::new("src/components/legacy.tsx", LEGACY)],
        )
    }

    pub(crate) fn migration_result() -> MigrationResult {
        MigrationResult {
            success: false,
            completed_phases: vec!["setup".into()],
            failed_phases: vec!["styles".into()],
            modified_files: vec!["src/components/Button.tsx".into()],
            backup_location: Some(".migration-backup/backup-2024".into()),
            rollback_instructions: vec!["To restore, run: xala migrate rollback x".into()],
            warnings: vec!["Phase 'styles' has unmet dependencies: setup".into()],
            errors: vec!["Transformation 'x' failed".into()],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").expect("parse"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").expect("parse"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("tsv").expect("parse"), OutputFormat::Table);
        assert_eq!(
            OutputFormat::from_str("detailed").expect("parse"),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_every_format_renders_every_report() {
        let results = check_results();
        let analysis = analysis();
        let migration = migration_result();
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Table,
            OutputFormat::Markdown,
        ] {
            for report in [
                Report::Check {
                    results: &results,
                    verbose: true,
                },
                Report::Analysis(&analysis),
                Report::Migration(&migration),
            ] {
                let out = render(report, format).expect("render");
                assert!(!out.is_empty(), "{} produced nothing", format);
            }
        }
    }
}
