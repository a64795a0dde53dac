//! Markdown ("detailed") reporter
//!
//! Generates reports suitable for pull request comments and docs.

use super::Report;
use crate::analyzer::MigrationAnalysis;
use crate::migration::MigrationResult;
use crate::models::{AnalysisResult, Severity};
use chrono::Local;

/// Maximum issues listed per file
const MAX_ISSUES_PER_FILE: usize = 25;

/// Render report as GitHub-flavored Markdown
pub fn render(report: Report<'_>) -> String {
    let mut md = match report {
        Report::Check { results, verbose } => render_check(results, verbose),
        Report::Analysis(analysis) => render_analysis(analysis),
        Report::Migration(result) => render_migration(result),
    };
    md.push_str(&render_footer());
    md
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "🔴 error",
        Severity::Warning => "🟡 warning",
        Severity::Info => "🔵 info",
    }
}

fn render_check(results: &[AnalysisResult], verbose: bool) -> String {
    let mut md = String::from("# Xala Check Report\n\n");
    for result in results {
        md.push_str(&format!("## `{}`\n\n", result.file.display()));
        md.push_str("| Metric | Value |\n|--------|-------|\n");
        md.push_str(&format!("| Score | **{}/100** |\n", result.score));
        md.push_str(&format!("| Status | {} |\n", result.status));
        md.push_str(&format!("| Complexity | {} |\n", result.complexity));
        md.push_str(&format!("| Estimated effort | {} |\n", result.effort));
        md.push_str(&format!(
            "| Rules passed | {}/{} |\n\n",
            result.passed.len(),
            result.total_rules()
        ));

        if result.failed.is_empty() {
            md.push_str("All rules passed. 🎉\n\n");
        } else {
            md.push_str("### Failed rules\n\n");
            md.push_str("| Rule | Severity | Message | Suggestion |\n");
            md.push_str("|------|----------|---------|------------|\n");
            for outcome in &result.failed {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    escape(&outcome.rule),
                    severity_badge(outcome.severity),
                    escape(&outcome.message),
                    escape(outcome.suggestion.as_deref().unwrap_or("-"))
                ));
            }
            md.push('\n');
        }

        if verbose && !result.passed.is_empty() {
            md.push_str("### Passed rules\n\n");
            for outcome in &result.passed {
                md.push_str(&format!("- ✅ **{}**: {}\n", outcome.rule, outcome.message));
            }
            md.push('\n');
        }
    }
    md
}

fn render_analysis(analysis: &MigrationAnalysis) -> String {
    let mut md = String::from("# Migration Analysis\n\n");
    md.push_str(&format!("Analyzed `{}`\n\n", analysis.root.display()));

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n|--------|-------|\n");
    md.push_str(&format!("| Files scanned | {} |\n", analysis.files_scanned));
    md.push_str(&format!("| Compatibility score | **{}/100** |\n", analysis.score));
    md.push_str(&format!("| Compatibility | {} |\n", analysis.compatibility));
    md.push_str(&format!("| Complexity | {} |\n", analysis.complexity));
    md.push_str(&format!("| Estimated effort | {} |\n", analysis.effort));
    md.push_str(&format!(
        "| Issues | {} errors, {} warnings, {} info |\n\n",
        analysis.count(Severity::Error),
        analysis.count(Severity::Warning),
        analysis.count(Severity::Info)
    ));

    md.push_str("## Frameworks\n\n");
    if analysis.frameworks.is_empty() {
        md.push_str("No UI frameworks detected.\n\n");
    } else {
        md.push_str("| Framework | Files | Components |\n|-----------|-------|------------|\n");
        for usage in &analysis.frameworks {
            let components = if usage.components.is_empty() {
                "-".to_string()
            } else {
                usage.components.join(", ")
            };
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                usage.framework, usage.files, components
            ));
        }
        md.push('\n');
    }

    if !analysis.issues.is_empty() {
        md.push_str("## Issues\n\n");
        for file in analysis.files.iter().filter(|f| f.issues > 0) {
            md.push_str(&format!(
                "### `{}` (score {})\n\n",
                file.file.display(),
                file.score
            ));
            let issues: Vec<_> = analysis
                .issues
                .iter()
                .filter(|i| i.file == file.file)
                .collect();
            for issue in issues.iter().take(MAX_ISSUES_PER_FILE) {
                md.push_str(&format!(
                    "- **L{}** {} {}: {}\n",
                    issue.line,
                    severity_badge(issue.severity),
                    issue.kind.label(),
                    issue.message
                ));
            }
            if issues.len() > MAX_ISSUES_PER_FILE {
                md.push_str(&format!(
                    "- *...and {} more*\n",
                    issues.len() - MAX_ISSUES_PER_FILE
                ));
            }
            md.push('\n');
        }
    }

    if !analysis.recommendations.is_empty() {
        md.push_str("## Recommendations\n\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, rec));
        }
        md.push('\n');
    }
    md
}

fn render_migration(result: &MigrationResult) -> String {
    let mut md = String::from("# Migration Result\n\n");
    md.push_str(&format!(
        "**Status:** {}\n\n",
        if result.success { "✅ success" } else { "❌ failed" }
    ));
    md.push_str("| Phase | Status |\n|-------|--------|\n");
    for phase in &result.completed_phases {
        md.push_str(&format!("| {} | completed |\n", phase));
    }
    for phase in &result.failed_phases {
        md.push_str(&format!("| {} | failed |\n", phase));
    }
    md.push('\n');

    if !result.modified_files.is_empty() {
        md.push_str("## Modified files\n\n");
        for file in &result.modified_files {
            md.push_str(&format!("- `{}`\n", file.display()));
        }
        md.push('\n');
    }
    for (title, lines) in [
        ("Warnings", &result.warnings),
        ("Errors", &result.errors),
        ("Rollback", &result.rollback_instructions),
    ] {
        if !lines.is_empty() {
            md.push_str(&format!("## {}\n\n", title));
            for line in lines {
                md.push_str(&format!("- {}\n", line));
            }
            md.push('\n');
        }
    }
    md
}

fn render_footer() -> String {
    format!(
        "---\n\n*Generated by xala {} on {}*\n",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M")
    )
}
