//! Scoring for rule outcomes and migration issues
//!
//! Two schemes exist and are deliberately kept apart, each with its own
//! threshold table:
//!
//! ```text
//! Ratio scheme (check, migrate check):
//!   weight:  error = 3, warning = 2, info = 1
//!   score  = round(100 × passed_weight / total_weight)      (no rules → 100)
//!   status = ≥90 excellent | ≥75 good | ≥50 needs-work | requires-migration
//!
//! Deduction scheme (migrate analyze):
//!   score  = max(0, 100 − Σ deduction)   error 15, warning 8, info 3
//!   tier   = ≥80 high | ≥60 medium | low
//! ```
//!
//! Complexity and effort are shared by both flows.

use crate::models::{CompatibilityTier, Complexity, QualityStatus, RuleOutcome, Severity};

/// Ratio-of-weights score over a set of rule outcomes
pub fn ratio_score(outcomes: &[RuleOutcome]) -> u32 {
    let total: u32 = outcomes.iter().map(|o| o.severity.weight()).sum();
    if total == 0 {
        return 100;
    }
    let passed: u32 = outcomes
        .iter()
        .filter(|o| o.passed)
        .map(|o| o.severity.weight())
        .sum();
    (100.0 * passed as f64 / total as f64).round() as u32
}

/// Status table for the ratio scheme
pub fn quick_check_status(score: u32) -> QualityStatus {
    match score {
        s if s >= 90 => QualityStatus::Excellent,
        s if s >= 75 => QualityStatus::Good,
        s if s >= 50 => QualityStatus::NeedsWork,
        _ => QualityStatus::RequiresMigration,
    }
}

/// Points-deducted-from-100 score over issue severities
pub fn deduction_score<I>(severities: I) -> u32
where
    I: IntoIterator<Item = Severity>,
{
    let deducted: u32 = severities.into_iter().map(|s| s.deduction()).sum();
    100u32.saturating_sub(deducted)
}

/// Tier table for the deduction scheme
pub fn compatibility_tier(score: u32) -> CompatibilityTier {
    match score {
        s if s >= 80 => CompatibilityTier::High,
        s if s >= 60 => CompatibilityTier::Medium,
        _ => CompatibilityTier::Low,
    }
}

/// Bucket issue counts into a complexity class
pub fn classify_complexity(errors: usize, warnings: usize) -> Complexity {
    if errors > 5 || warnings > 10 {
        Complexity::Complex
    } else if errors > 2 || warnings > 5 {
        Complexity::Moderate
    } else {
        Complexity::Simple
    }
}

/// Free-text effort label for a complexity bucket and raw issue count
pub fn estimate_effort(complexity: Complexity, issue_count: usize) -> &'static str {
    match complexity {
        Complexity::Simple if issue_count <= 3 => "< 1 hour",
        Complexity::Simple => "1-2 hours",
        Complexity::Moderate => "4-6 hours",
        Complexity::Complex if issue_count <= 30 => "1-2 days",
        Complexity::Complex => "3-5 days",
    }
}
