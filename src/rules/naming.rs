//! Naming rules

use super::{exported_names, Rule};
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static PASCAL_CASE: OnceLock<Regex> = OnceLock::new();

fn pascal_case() -> &'static Regex {
    PASCAL_CASE.get_or_init(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid regex"))
}

/// Base file name is PascalCase.
pub struct FileNamingRule;

impl Rule for FileNamingRule {
    fn name(&self) -> &'static str {
        "File Naming"
    }
    fn category(&self) -> &'static str {
        "naming"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "File name is PascalCase"
    }
    fn message(&self) -> &'static str {
        "File name must match ^[A-Z][a-zA-Z0-9]*$"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Rename the file to PascalCase, e.g. ButtonGroup.tsx")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        Ok(pascal_case().is_match(unit.base_name()))
    }
}

/// One exported identifier equals the base file name (case-sensitive).
///
/// Files without recognised exports pass.
pub struct ComponentNamingRule;

impl Rule for ComponentNamingRule {
    fn name(&self) -> &'static str {
        "Component Naming"
    }
    fn category(&self) -> &'static str {
        "naming"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "Exported component matches the file name"
    }
    fn message(&self) -> &'static str {
        "No exported identifier matches the file name"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Export the component under the same name as its file")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        let exports = exported_names(&unit.content);
        if exports.is_empty() {
            return Ok(true);
        }
        let base = unit.base_name();
        Ok(exports.iter().any(|name| *name == base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_naming() {
        let ok = SourceUnit::new("src/ButtonGroup.tsx", "");
        let lower = SourceUnit::new("src/myButton.tsx", "");
        let kebab = SourceUnit::new("src/my-button.tsx", "");
        assert!(FileNamingRule.check(&ok).expect("check"));
        assert!(!FileNamingRule.check(&lower).expect("check"));
        assert!(!FileNamingRule.check(&kebab).expect("check"));
    }

    #[test]
    fn test_component_naming_matches_export() {
        let unit = SourceUnit::new("Card.tsx", "export function Card() { return null; }");
        assert!(ComponentNamingRule.check(&unit).expect("check"));
    }

    #[test]
    fn test_component_naming_is_case_sensitive() {
        let unit = SourceUnit::new("myButton.tsx", "export const MyButton = () => null;");
        assert!(!ComponentNamingRule.check(&unit).expect("check"));
    }

    #[test]
    fn test_component_naming_any_export_may_match() {
        let unit = SourceUnit::new(
            "Dialog.tsx",
            "export const dialogVariants = {};\nexport default function Dialog() {}",
        );
        assert!(ComponentNamingRule.check(&unit).expect("check"));
    }

    #[test]
    fn test_component_naming_without_exports_passes() {
        let unit = SourceUnit::new("helpers.ts", "const x = 1;");
        assert!(ComponentNamingRule.check(&unit).expect("check"));
    }
}
