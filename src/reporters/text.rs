//! Text (terminal) reporter with colors and formatting
//!
//! Styling goes through `console`, so `--no-color` and non-tty output
//! produce plain text.

use super::Report;
use crate::analyzer::MigrationAnalysis;
use crate::migration::MigrationResult;
use crate::models::{AnalysisResult, CompatibilityTier, QualityStatus, Severity};
use console::{style, StyledObject};

/// Maximum issues shown per file before truncating
const MAX_ISSUES_PER_FILE: usize = 10;

fn severity_tag(severity: Severity) -> StyledObject<&'static str> {
    match severity {
        Severity::Error => style("[E]").red().bold(),
        Severity::Warning => style("[W]").yellow(),
        Severity::Info => style("[I]").blue(),
    }
}

fn styled_status(status: QualityStatus) -> StyledObject<String> {
    let s = style(status.to_string());
    match status {
        QualityStatus::Excellent => s.green().bold(),
        QualityStatus::Good => s.green(),
        QualityStatus::NeedsWork => s.yellow(),
        QualityStatus::RequiresMigration => s.red().bold(),
    }
}

fn styled_tier(tier: CompatibilityTier) -> StyledObject<String> {
    let s = style(tier.to_string());
    match tier {
        CompatibilityTier::High => s.green().bold(),
        CompatibilityTier::Medium => s.yellow(),
        CompatibilityTier::Low => s.red().bold(),
    }
}

fn rule_line() -> String {
    format!("{}\n", style("──────────────────────────────────────").dim())
}

/// Render report as formatted terminal output
pub fn render(report: Report<'_>) -> String {
    match report {
        Report::Check { results, verbose } => render_check(results, verbose),
        Report::Analysis(analysis) => render_analysis(analysis),
        Report::Migration(result) => render_migration(result),
    }
}

fn render_check(results: &[AnalysisResult], verbose: bool) -> String {
    let mut out = String::new();
    if results.is_empty() {
        out.push_str("No matching files found.\n");
        return out;
    }

    for result in results {
        out.push_str(&format!("\n{}\n", style(result.file.display()).bold()));
        out.push_str(&rule_line());
        out.push_str(&format!(
            "Score: {}  Status: {}  Complexity: {}  Effort: {}\n",
            style(format!("{}/100", result.score)).bold(),
            styled_status(result.status),
            result.complexity,
            result.effort
        ));
        out.push_str(&format!(
            "Rules: {} passed, {} failed\n",
            result.passed.len(),
            result.failed.len()
        ));

        for outcome in &result.failed {
            out.push_str(&format!(
                "  {} {} {}: {}\n",
                style("✗").red(),
                severity_tag(outcome.severity),
                style(&outcome.rule).bold(),
                outcome.message
            ));
            if let Some(suggestion) = &outcome.suggestion {
                out.push_str(&format!("      {} {}\n", style("→").dim(), suggestion));
            }
        }
        if verbose {
            for outcome in &result.passed {
                out.push_str(&format!(
                    "  {} {}: {}\n",
                    style("✓").green(),
                    outcome.rule,
                    style(&outcome.message).dim()
                ));
            }
        }
    }

    if results.len() > 1 {
        let average =
            results.iter().map(|r| r.score as f64).sum::<f64>() / results.len() as f64;
        out.push_str(&format!(
            "\n{} files checked, average score {:.0}/100\n",
            results.len(),
            average
        ));
    }
    out
}

fn render_analysis(analysis: &MigrationAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style("Migration Analysis").bold()));
    out.push_str(&rule_line());
    out.push_str(&format!(
        "Score: {}  Compatibility: {}  Complexity: {}  Effort: {}\n",
        style(format!("{}/100", analysis.score)).bold(),
        styled_tier(analysis.compatibility),
        analysis.complexity,
        analysis.effort
    ));
    out.push_str(&format!(
        "Files: {}  Issues: {} errors, {} warnings, {} info\n\n",
        analysis.files_scanned,
        analysis.count(Severity::Error),
        analysis.count(Severity::Warning),
        analysis.count(Severity::Info)
    ));

    out.push_str(&format!("{}\n", style("FRAMEWORKS").bold()));
    if analysis.frameworks.is_empty() {
        out.push_str("  none detected\n");
    }
    for usage in &analysis.frameworks {
        out.push_str(&format!("  {} ({} files)", usage.framework, usage.files));
        if !usage.components.is_empty() {
            out.push_str(&format!(
                ": {}",
                style(usage.components.join(", ")).dim()
            ));
        }
        out.push('\n');
    }

    if !analysis.issues.is_empty() {
        out.push_str(&format!("\n{}\n", style("ISSUES").bold()));
        for file in analysis.files.iter().filter(|f| f.issues > 0) {
            out.push_str(&format!(
                "  {} {}\n",
                style(file.file.display()).bold(),
                style(format!("(score {})", file.score)).dim()
            ));
            let issues: Vec<_> = analysis
                .issues
                .iter()
                .filter(|i| i.file == file.file)
                .collect();
            for issue in issues.iter().take(MAX_ISSUES_PER_FILE) {
                out.push_str(&format!(
                    "    {} L{}: {}\n",
                    severity_tag(issue.severity),
                    issue.line,
                    issue.message
                ));
            }
            if issues.len() > MAX_ISSUES_PER_FILE {
                out.push_str(&format!(
                    "    {}\n",
                    style(format!("...and {} more", issues.len() - MAX_ISSUES_PER_FILE)).dim()
                ));
            }
        }
    }

    if !analysis.recommendations.is_empty() {
        out.push_str(&format!("\n{}\n", style("RECOMMENDATIONS").bold()));
        for rec in &analysis.recommendations {
            out.push_str(&format!("  • {}\n", rec));
        }
    }
    out
}

fn render_migration(result: &MigrationResult) -> String {
    let mut out = String::new();
    let headline = if result.success {
        style("✓ Migration completed").green().bold()
    } else {
        style("✗ Migration finished with failures").red().bold()
    };
    out.push_str(&format!("\n{}\n", headline));
    out.push_str(&rule_line());
    for phase in &result.completed_phases {
        out.push_str(&format!("  {} {}\n", style("✓").green(), phase));
    }
    for phase in &result.failed_phases {
        out.push_str(&format!("  {} {}\n", style("✗").red(), phase));
    }
    out.push_str(&format!("Modified files: {}\n", result.modified_files.len()));
    for file in &result.modified_files {
        out.push_str(&format!("  {}\n", style(file.display()).dim()));
    }
    for warning in &result.warnings {
        out.push_str(&format!("{} {}\n", style("warning:").yellow(), warning));
    }
    for error in &result.errors {
        out.push_str(&format!("{} {}\n", style("error:").red(), error));
    }
    if !result.rollback_instructions.is_empty() {
        out.push('\n');
        for line in &result.rollback_instructions {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{analysis, check_results, migration_result};

    #[test]
    fn test_check_text_shows_failures() {
        console::set_colors_enabled(false);
        let results = check_results();
        let out = render(Report::Check {
            results: &results,
            verbose: false,
        });
        assert!(out.contains("src/components/legacy.tsx"));
        assert!(out.contains("✗ [E] TypeScript Strictness"));
        assert!(!out.contains("✓"));
    }

    #[test]
    fn test_empty_check() {
        let out = render(Report::Check {
            results: &[],
            verbose: true,
        });
        assert_eq!(out, "No matching files found.\n");
    }

    #[test]
    fn test_analysis_text() {
        console::set_colors_enabled(false);
        let out = render(Report::Analysis(&analysis()));
        assert!(out.contains("Material-UI (1 files): Button"));
        assert!(out.contains("[E] L1:"));
    }

    #[test]
    fn test_migration_text() {
        console::set_colors_enabled(false);
        let out = render(Report::Migration(&migration_result()));
        assert!(out.contains("✗ Migration finished with failures"));
        assert!(out.contains("warning: Phase 'styles'"));
    }
}
