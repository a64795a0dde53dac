//! Rule engine for design-system compliance checks
//!
//! A [`Rule`] is a stateless text predicate over a [`SourceUnit`]. The
//! [`RuleEngine`] evaluates every registered rule independently and turns the
//! outcomes into an [`AnalysisResult`] scored with the ratio scheme.
//!
//! ```text
//! SourceUnit ──► rule 1 ──┐
//!            ──► rule 2 ──┼──► Vec<RuleOutcome> ──► AnalysisResult
//!            ──► rule n ──┘      (error / panic → failed warning)
//! ```

mod accessibility;
mod architecture;
mod conventions;
mod naming;
mod styling;
mod typing;

pub use accessibility::{AriaAttributesRule, ImageAltRule};
pub use architecture::{ForwardRefRule, PureComponentRule};
pub use conventions::{DisplayNameRule, MemoizationRule, TestIdRule};
pub use naming::{ComponentNamingRule, FileNamingRule};
pub use styling::{HardcodedColorsRule, HardcodedSizesRule, InlineStylesRule, VariantHelperRule};
pub use typing::TypeScriptStrictnessRule;

pub(crate) use styling::{color_literal, inline_style};
pub(crate) use typing::any_type;

use crate::models::{AnalysisResult, RuleOutcome, Severity, SourceUnit};
use crate::scoring;
use anyhow::Result;
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, warn};

/// A named pass/fail predicate over source text.
///
/// Implementations must be pure: no I/O, no shared mutable state. Returning
/// `Err` (or panicking) is tolerated by the engine and recorded as a failed
/// warning so the remaining rules still run.
pub trait Rule: Send + Sync {
    /// Display name, also used to disable the rule in `xala.toml`
    fn name(&self) -> &'static str;

    /// Grouping used in reports
    fn category(&self) -> &'static str;

    fn severity(&self) -> Severity;

    /// What a passing file satisfies
    fn description(&self) -> &'static str;

    /// Why a failing file failed
    fn message(&self) -> &'static str;

    fn suggestion(&self) -> Option<&'static str> {
        None
    }

    /// `Ok(true)` when the unit satisfies the rule
    fn check(&self, unit: &SourceUnit) -> Result<bool>;
}

static INTERACTIVE_ELEMENT: OnceLock<Regex> = OnceLock::new();
static EXPORTED_IDENT: OnceLock<Regex> = OnceLock::new();

/// Native interactive tags or click handlers
pub(crate) fn interactive_element() -> &'static Regex {
    INTERACTIVE_ELEMENT.get_or_init(|| {
        Regex::new(r"<(?:button|input|select|textarea|a)\b|\bonClick=").expect("valid regex")
    })
}

/// `export [default] const|function|class Name`
pub(crate) fn exported_ident() -> &'static Regex {
    EXPORTED_IDENT.get_or_init(|| {
        Regex::new(r"export\s+(?:default\s+)?(?:const|let|function|class)\s+([A-Za-z_$][\w$]*)")
            .expect("valid regex")
    })
}

/// Identifiers exported by the unit, in source order
pub(crate) fn exported_names(content: &str) -> Vec<&str> {
    exported_ident()
        .captures_iter(content)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Whether the unit exports something that looks like a component
pub(crate) fn exports_component(content: &str) -> bool {
    exported_names(content)
        .iter()
        .any(|name| name.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

/// Ordered collection of rules plus the scoring glue
pub struct RuleEngine {
    rules: Vec<Arc<dyn Rule>>,
    disabled: HashSet<String>,
}

impl RuleEngine {
    /// Engine with no rules
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled: HashSet::new(),
        }
    }

    /// Engine with every built-in rule, pure-component checks scoped to `pure_dirs`
    pub fn with_builtin_rules(pure_dirs: Vec<String>) -> Self {
        let mut engine = Self::new();
        engine.register(Arc::new(PureComponentRule::new(pure_dirs)));
        engine.register(Arc::new(VariantHelperRule));
        engine.register(Arc::new(InlineStylesRule));
        engine.register(Arc::new(HardcodedColorsRule));
        engine.register(Arc::new(HardcodedSizesRule));
        engine.register(Arc::new(ForwardRefRule));
        engine.register(Arc::new(TypeScriptStrictnessRule));
        engine.register(Arc::new(AriaAttributesRule));
        engine.register(Arc::new(ImageAltRule));
        engine.register(Arc::new(FileNamingRule));
        engine.register(Arc::new(ComponentNamingRule));
        engine.register(Arc::new(MemoizationRule));
        engine.register(Arc::new(DisplayNameRule));
        engine.register(Arc::new(TestIdRule));
        engine
    }

    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Skip rules by name (case-insensitive)
    pub fn disable<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disabled
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
    }

    /// Names of active rules in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.active_rules().map(|r| r.name()).collect()
    }

    fn active_rules(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules
            .iter()
            .filter(|r| !self.disabled.contains(&r.name().to_lowercase()))
    }

    /// Evaluate every active rule against the unit, in registration order
    pub fn evaluate(&self, unit: &SourceUnit) -> Vec<RuleOutcome> {
        self.active_rules()
            .map(|rule| Self::evaluate_rule(rule.as_ref(), unit))
            .collect()
    }

    fn evaluate_rule(rule: &dyn Rule, unit: &SourceUnit) -> RuleOutcome {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| rule.check(unit)));

        let failure = |reason: String| RuleOutcome {
            rule: rule.name().to_string(),
            category: rule.category().to_string(),
            severity: Severity::Warning,
            passed: false,
            message: format!("Rule evaluation failed: {}", reason),
            suggestion: None,
        };

        match result {
            Ok(Ok(passed)) => {
                debug!(
                    "Rule {} on {}: {}",
                    rule.name(),
                    unit.path.display(),
                    if passed { "pass" } else { "fail" }
                );
                RuleOutcome {
                    rule: rule.name().to_string(),
                    category: rule.category().to_string(),
                    severity: rule.severity(),
                    passed,
                    message: if passed {
                        rule.description().to_string()
                    } else {
                        rule.message().to_string()
                    },
                    suggestion: if passed {
                        None
                    } else {
                        rule.suggestion().map(str::to_string)
                    },
                }
            }
            Ok(Err(e)) => {
                warn!("Rule {} failed on {}: {}", rule.name(), unit.path.display(), e);
                failure(e.to_string())
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                error!("Rule {} panicked on {}: {}", rule.name(), unit.path.display(), panic_msg);
                failure(format!("panic: {}", panic_msg))
            }
        }
    }

    /// Evaluate and aggregate into an [`AnalysisResult`] (ratio scheme)
    pub fn analyze(&self, unit: &SourceUnit) -> AnalysisResult {
        let outcomes = self.evaluate(unit);
        let score = scoring::ratio_score(&outcomes);
        let (passed, failed): (Vec<_>, Vec<_>) = outcomes.into_iter().partition(|o| o.passed);

        let errors = failed.iter().filter(|o| o.severity == Severity::Error).count();
        let warnings = failed.iter().filter(|o| o.severity == Severity::Warning).count();
        let complexity = scoring::classify_complexity(errors, warnings);

        AnalysisResult {
            file: unit.path.clone(),
            score,
            status: scoring::quick_check_status(score),
            complexity,
            effort: scoring::estimate_effort(complexity, failed.len()).to_string(),
            passed,
            failed,
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_builtin_rules(vec!["components".to_string()])
    }
}
