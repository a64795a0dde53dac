//! Styling rules: variant helpers and hardcoded values

use super::Rule;
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static VARIANT_CALL: OnceLock<Regex> = OnceLock::new();
static INLINE_STYLE: OnceLock<Regex> = OnceLock::new();
static COLOR_LITERAL: OnceLock<Regex> = OnceLock::new();
static CSS_VAR: OnceLock<Regex> = OnceLock::new();
static PX_LITERAL: OnceLock<Regex> = OnceLock::new();

fn variant_call() -> &'static Regex {
    VARIANT_CALL.get_or_init(|| Regex::new(r"\bcva\s*\(").expect("valid regex"))
}

pub(crate) fn inline_style() -> &'static Regex {
    INLINE_STYLE.get_or_init(|| Regex::new(r"style=\{\{").expect("valid regex"))
}

pub(crate) fn color_literal() -> &'static Regex {
    COLOR_LITERAL.get_or_init(|| {
        Regex::new(r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b|\b(?:rgba?|hsla?)\(")
            .expect("valid regex")
    })
}

fn css_var() -> &'static Regex {
    CSS_VAR.get_or_init(|| Regex::new(r"var\(--[^)]*\)").expect("valid regex"))
}

fn px_literal() -> &'static Regex {
    PX_LITERAL.get_or_init(|| Regex::new(r"\b\d+(?:\.\d+)?px\b").expect("valid regex"))
}

/// Styled components should derive class names from a `cva(...)` definition.
pub struct VariantHelperRule;

impl Rule for VariantHelperRule {
    fn name(&self) -> &'static str {
        "Variant Helper"
    }
    fn category(&self) -> &'static str {
        "styling"
    }
    fn severity(&self) -> Severity {
        Severity::Info
    }
    fn description(&self) -> &'static str {
        "Class names come from a class-variance-authority definition"
    }
    fn message(&self) -> &'static str {
        "className is set without a cva() variant definition"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Define variants with cva() and call it to build className")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !unit.content.contains("className=") {
            return Ok(true);
        }
        Ok(variant_call().is_match(&unit.content))
    }
}

/// No `style={{ ... }}` object literals.
pub struct InlineStylesRule;

impl Rule for InlineStylesRule {
    fn name(&self) -> &'static str {
        "Inline Styles"
    }
    fn category(&self) -> &'static str {
        "styling"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "No inline style objects"
    }
    fn message(&self) -> &'static str {
        "Inline style object found"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Replace style={{ ... }} with Tailwind utility classes")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        Ok(!inline_style().is_match(&unit.content))
    }
}

/// No hex, rgb(a) or hsl(a) color literals.
pub struct HardcodedColorsRule;

impl Rule for HardcodedColorsRule {
    fn name(&self) -> &'static str {
        "Hardcoded Colors"
    }
    fn category(&self) -> &'static str {
        "styling"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "Colors come from design tokens"
    }
    fn message(&self) -> &'static str {
        "Hardcoded color literal found"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Use token classes such as bg-primary or text-muted-foreground")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        Ok(!color_literal().is_match(&unit.content))
    }
}

/// No literal `px` sizes outside `var(--...)` references.
pub struct HardcodedSizesRule;

impl Rule for HardcodedSizesRule {
    fn name(&self) -> &'static str {
        "Hardcoded Sizes"
    }
    fn category(&self) -> &'static str {
        "styling"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "Sizes come from the spacing scale"
    }
    fn message(&self) -> &'static str {
        "Hardcoded px value found"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Use spacing utilities (p-4, h-12) or CSS custom properties")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        let without_vars = css_var().replace_all(&unit.content, "");
        Ok(!px_literal().is_match(&without_vars))
    }
}
