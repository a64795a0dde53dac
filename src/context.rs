//! Process-wide context handed to every command handler

use crate::analyzer;
use crate::config::{load_project_config, ProjectConfig};
use crate::reporters::OutputFormat;
use crate::rules::RuleEngine;
use anyhow::Result;
use std::path::Path;
use std::str::FromStr;

/// Loaded configuration plus the rule engines built from it
pub struct AppContext {
    pub config: ProjectConfig,
    /// Design-system rules used by `check`
    pub rules: RuleEngine,
    /// Migration-issue rules used by `migrate check`
    pub readiness: RuleEngine,
}

impl AppContext {
    /// Load `xala.toml` for `target` and build the engines
    pub fn load(target: &Path) -> Self {
        Self::with_config(load_project_config(target))
    }

    pub fn with_config(config: ProjectConfig) -> Self {
        let mut rules = RuleEngine::with_builtin_rules(config.rules.pure_component_dirs.clone());
        rules.disable(&config.rules.disabled);
        let mut readiness = analyzer::readiness_engine();
        readiness.disable(&config.rules.disabled);
        Self {
            config,
            rules,
            readiness,
        }
    }

    /// `--json` wins, then `--format`, then `[defaults] format`, then text
    pub fn output_format(&self, format: Option<&str>, json: bool) -> Result<OutputFormat> {
        if json {
            return Ok(OutputFormat::Json);
        }
        match format.or(self.config.defaults.format.as_deref()) {
            Some(f) => OutputFormat::from_str(f),
            None => Ok(OutputFormat::Text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliDefaults, RulesConfig};

    #[test]
    fn test_disabled_rules_apply_to_both_engines() {
        let config = ProjectConfig {
            rules: RulesConfig {
                disabled: vec!["test id".into(), "Any Type".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = AppContext::with_config(config);
        assert!(!ctx.rules.rule_names().contains(&"Test ID"));
        assert!(!ctx.readiness.rule_names().contains(&"Any Type"));
        assert!(ctx.readiness.rule_names().contains(&"Inline Styles"));
    }

    #[test]
    fn test_format_precedence() {
        let config = ProjectConfig {
            defaults: CliDefaults {
                format: Some("markdown".into()),
            },
            ..Default::default()
        };
        let ctx = AppContext::with_config(config);
        assert_eq!(ctx.output_format(None, false).expect("fmt"), OutputFormat::Markdown);
        assert_eq!(ctx.output_format(Some("table"), false).expect("fmt"), OutputFormat::Table);
        assert_eq!(ctx.output_format(Some("table"), true).expect("fmt"), OutputFormat::Json);
        assert!(ctx.output_format(Some("html"), false).is_err());
    }
}
