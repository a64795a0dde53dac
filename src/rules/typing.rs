//! Type-safety rules

use super::Rule;
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static ANY_TYPE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn any_type() -> &'static Regex {
    ANY_TYPE.get_or_init(|| {
        Regex::new(r":\s*any\b|\bas\s+any\b|<any>|\bany\[\]").expect("valid regex")
    })
}

/// No `any` escape hatch anywhere in the file.
pub struct TypeScriptStrictnessRule;

impl Rule for TypeScriptStrictnessRule {
    fn name(&self) -> &'static str {
        "TypeScript Strictness"
    }
    fn category(&self) -> &'static str {
        "typing"
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
    fn description(&self) -> &'static str {
        "No `any` types"
    }
    fn message(&self) -> &'static str {
        "`any` type found"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Replace `any` with a concrete type, a generic, or `unknown`")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        Ok(!any_type().is_match(&unit.content))
    }
}
