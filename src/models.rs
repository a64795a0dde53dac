//! Core data models for Xala
//!
//! These models are shared by the scanner, the rule engine, the analyzer
//! and the reporters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity of a rule outcome or migration issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Weight used by the ratio scoring scheme
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Error => 3,
            Severity::Warning => 2,
            Severity::Info => 1,
        }
    }

    /// Points removed from 100 by the deduction scoring scheme
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::Error => 15,
            Severity::Warning => 8,
            Severity::Info => 3,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single file's path and raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub content: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read a unit from disk
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(path, content))
    }

    /// File name without any extension (`Button.test.tsx` -> `Button`)
    pub fn base_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .unwrap_or("")
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }
}

/// Outcome of evaluating one rule against one source unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleOutcome {
    pub rule: String,
    pub category: String,
    pub severity: Severity,
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Coarse complexity bucket for the effort estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Moderate => write!(f, "moderate"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// Quick-check status derived from the ratio score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityStatus {
    Excellent,
    Good,
    NeedsWork,
    RequiresMigration,
}

impl std::fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityStatus::Excellent => write!(f, "excellent"),
            QualityStatus::Good => write!(f, "good"),
            QualityStatus::NeedsWork => write!(f, "needs-work"),
            QualityStatus::RequiresMigration => write!(f, "requires-migration"),
        }
    }
}

/// Compatibility tier derived from the deduction score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityTier::High => write!(f, "high"),
            CompatibilityTier::Medium => write!(f, "medium"),
            CompatibilityTier::Low => write!(f, "low"),
        }
    }
}

/// Aggregated rule outcomes for one source unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file: PathBuf,
    pub passed: Vec<RuleOutcome>,
    pub failed: Vec<RuleOutcome>,
    pub score: u32,
    pub status: QualityStatus,
    pub complexity: Complexity,
    pub effort: String,
}

impl AnalysisResult {
    /// Number of failed outcomes at the given severity
    pub fn failed_count(&self, severity: Severity) -> usize {
        self.failed.iter().filter(|o| o.severity == severity).count()
    }

    pub fn total_rules(&self) -> usize {
        self.passed.len() + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_all_extensions() {
        let unit = SourceUnit::new("src/components/Button.stories.tsx", "");
        assert_eq!(unit.base_name(), "Button");
        assert_eq!(unit.extension(), Some("tsx"));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).expect("serialize");
        assert_eq!(json, "\"warning\"");
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&QualityStatus::RequiresMigration).expect("serialize");
        assert_eq!(json, "\"requires-migration\"");
    }
}
