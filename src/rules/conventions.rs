//! Component conventions: memoization, display names, test ids

use super::{exports_component, interactive_element, Rule};
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static MEMO_CALL: OnceLock<Regex> = OnceLock::new();
static WRAPPER_CALL: OnceLock<Regex> = OnceLock::new();
static DISPLAY_NAME: OnceLock<Regex> = OnceLock::new();

fn memo_call() -> &'static Regex {
    MEMO_CALL.get_or_init(|| Regex::new(r"\b(?:React\.)?memo\s*\(").expect("valid regex"))
}

fn wrapper_call() -> &'static Regex {
    WRAPPER_CALL
        .get_or_init(|| Regex::new(r"\b(?:memo|forwardRef)\s*\(").expect("valid regex"))
}

fn display_name() -> &'static Regex {
    DISPLAY_NAME.get_or_init(|| Regex::new(r"\.displayName\s*=").expect("valid regex"))
}

pub struct MemoizationRule;

impl Rule for MemoizationRule {
    fn name(&self) -> &'static str {
        "Memoization"
    }
    fn category(&self) -> &'static str {
        "performance"
    }
    fn severity(&self) -> Severity {
        Severity::Info
    }
    fn description(&self) -> &'static str {
        "Exported component is memoized"
    }
    fn message(&self) -> &'static str {
        "Exported component is not wrapped in memo()"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Wrap the export in React.memo to skip re-renders with equal props")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !exports_component(&unit.content) {
            return Ok(true);
        }
        Ok(memo_call().is_match(&unit.content))
    }
}

/// Components wrapped in `memo`/`forwardRef` set an explicit `displayName`.
pub struct DisplayNameRule;

impl Rule for DisplayNameRule {
    fn name(&self) -> &'static str {
        "Display Name"
    }
    fn category(&self) -> &'static str {
        "conventions"
    }
    fn severity(&self) -> Severity {
        Severity::Info
    }
    fn description(&self) -> &'static str {
        "Wrapped components declare a displayName"
    }
    fn message(&self) -> &'static str {
        "Wrapped component without displayName"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Add Component.displayName = 'Component' after the definition")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !wrapper_call().is_match(&unit.content) {
            return Ok(true);
        }
        Ok(display_name().is_match(&unit.content))
    }
}

pub struct TestIdRule;

impl Rule for TestIdRule {
    fn name(&self) -> &'static str {
        "Test ID"
    }
    fn category(&self) -> &'static str {
        "testing"
    }
    fn severity(&self) -> Severity {
        Severity::Info
    }
    fn description(&self) -> &'static str {
        "Interactive elements are addressable by data-testid"
    }
    fn message(&self) -> &'static str {
        "Interactive elements without data-testid"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Add data-testid to interactive elements")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !interactive_element().is_match(&unit.content) {
            return Ok(true);
        }
        Ok(unit.content.contains("data-testid"))
    }
}
