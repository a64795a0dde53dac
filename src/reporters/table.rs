//! Tab-separated table reporter
//!
//! One header row, then one row per rule outcome, issue or phase. Tabs and
//! newlines inside cells are flattened to spaces.

use super::Report;

fn cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

fn row(cells: &[String]) -> String {
    let mut line = cells.join("\t");
    line.push('\n');
    line
}

/// Render report as TSV
pub fn render(report: Report<'_>) -> String {
    let mut out = String::new();
    match report {
        Report::Check { results, verbose } => {
            out.push_str("file\tscore\tstatus\trule\tseverity\tresult\tmessage\n");
            for result in results {
                let file = result.file.display().to_string();
                let outcomes = result
                    .failed
                    .iter()
                    .chain(result.passed.iter().filter(|_| verbose));
                for outcome in outcomes {
                    out.push_str(&row(&[
                        cell(&file),
                        result.score.to_string(),
                        result.status.to_string(),
                        cell(&outcome.rule),
                        outcome.severity.to_string(),
                        if outcome.passed { "pass" } else { "fail" }.to_string(),
                        cell(&outcome.message),
                    ]));
                }
            }
        }
        Report::Analysis(analysis) => {
            out.push_str("file\tline\tseverity\tkind\tmessage\n");
            for issue in &analysis.issues {
                out.push_str(&row(&[
                    cell(&issue.file.display().to_string()),
                    issue.line.to_string(),
                    issue.severity.to_string(),
                    issue.kind.label().to_string(),
                    cell(&issue.message),
                ]));
            }
        }
        Report::Migration(result) => {
            out.push_str("phase\tstatus\n");
            for phase in &result.completed_phases {
                out.push_str(&row(&[cell(phase), "completed".to_string()]));
            }
            for phase in &result.failed_phases {
                out.push_str(&row(&[cell(phase), "failed".to_string()]));
            }
        }
    }
    out
}
