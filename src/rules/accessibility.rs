//! Accessibility rules

use super::{interactive_element, Rule};
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static ARIA_OR_ROLE: OnceLock<Regex> = OnceLock::new();
static IMAGE_TAG: OnceLock<Regex> = OnceLock::new();

fn aria_or_role() -> &'static Regex {
    ARIA_OR_ROLE.get_or_init(|| Regex::new(r"\baria-[a-z]+=|\brole=").expect("valid regex"))
}

fn image_tag() -> &'static Regex {
    IMAGE_TAG.get_or_init(|| Regex::new(r"<(?:img|Image)\b[^>]*>").expect("valid regex"))
}

/// Interactive markup carries at least one `aria-*` or `role=` attribute.
pub struct AriaAttributesRule;

impl Rule for AriaAttributesRule {
    fn name(&self) -> &'static str {
        "Accessibility Attributes"
    }
    fn category(&self) -> &'static str {
        "accessibility"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "Interactive elements expose ARIA attributes"
    }
    fn message(&self) -> &'static str {
        "Interactive elements without aria-* or role attributes"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Add aria-label, aria-describedby or an explicit role")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !interactive_element().is_match(&unit.content) {
            return Ok(true);
        }
        Ok(aria_or_role().is_match(&unit.content))
    }
}

/// Every image tag has an `alt` attribute.
pub struct ImageAltRule;

impl Rule for ImageAltRule {
    fn name(&self) -> &'static str {
        "Image Alt Text"
    }
    fn category(&self) -> &'static str {
        "accessibility"
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
    fn description(&self) -> &'static str {
        "Images have alternative text"
    }
    fn message(&self) -> &'static str {
        "Image without alt attribute"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Add alt=\"...\" (use alt=\"\" for decorative images)")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        Ok(image_tag()
            .find_iter(&unit.content)
            .all(|tag| tag.as_str().contains("alt=")))
    }
}
