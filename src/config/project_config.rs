//! Project-level configuration support
//!
//! Loads per-project configuration from `xala.toml` in the analyzed
//! directory (or the parent directory of a single analyzed file).
//!
//! # Configuration Format
//!
//! ```toml
//! # xala.toml
//!
//! [scan]
//! extensions = ["tsx", "ts", "jsx", "js"]
//! recursive = true
//!
//! [rules]
//! disabled = ["Test ID"]
//! pure_component_dirs = ["components"]
//!
//! [migration]
//! source_dir = "src"
//! components_dir = "components"
//! component_extension = "tsx"
//! backup = true
//! dependency_policy = "warn"
//!
//! [defaults]
//! format = "text"
//! ```

use crate::error::{XalaError, XalaResult};
use crate::migration::{DependencyPolicy, MigrationOptions};
use crate::scanner::{ScanOptions, DEFAULT_EXTENSIONS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the project root
pub const CONFIG_FILE: &str = "xala.toml";

/// Complete project configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub scan: ScanConfig,
    pub rules: RulesConfig,
    pub migration: MigrationConfig,
    pub defaults: CliDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub extensions: Vec<String>,
    pub recursive: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            recursive: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule names to skip (case-insensitive)
    pub disabled: Vec<String>,
    /// Directories whose components must not hold state
    pub pure_component_dirs: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            pure_component_dirs: vec!["components".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    pub source_dir: String,
    pub components_dir: String,
    pub component_extension: String,
    pub backup: bool,
    pub dependency_policy: DependencyPolicy,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        let defaults = MigrationOptions::default();
        Self {
            source_dir: defaults.source_dir,
            components_dir: defaults.components_dir,
            component_extension: defaults.component_extension,
            backup: defaults.backup,
            dependency_policy: defaults.dependency_policy,
        }
    }
}

/// CLI defaults (overridden by command-line flags)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliDefaults {
    pub format: Option<String>,
}

impl ProjectConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_recursive(self.scan.recursive)
            .with_extensions(self.scan.extensions.clone())
    }

    pub fn migration_options(&self) -> MigrationOptions {
        MigrationOptions {
            source_dir: self.migration.source_dir.clone(),
            components_dir: self.migration.components_dir.clone(),
            component_extension: self.migration.component_extension.clone(),
            dry_run: false,
            backup: self.migration.backup,
            dependency_policy: self.migration.dependency_policy,
        }
    }
}

/// Directory a config file is looked up in for a given target path
pub fn config_root(path: &Path) -> PathBuf {
    if path.is_file() {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        path.to_path_buf()
    }
}

/// Load `xala.toml` for `path`, falling back to defaults.
///
/// A missing file is silent; an unreadable or invalid one is logged and
/// ignored.
pub fn load_project_config(path: &Path) -> ProjectConfig {
    let toml_path = config_root(path).join(CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> XalaResult<ProjectConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| XalaError::io(path, e))?;
    toml::from_str(&content).map_err(|e| XalaError::Config(e.to_string()))
}

/// Commented default config written by `xala init`
pub fn default_config_toml() -> String {
    let scan = ScanConfig::default();
    let migration = MigrationConfig::default();
    let extensions: Vec<String> = scan.extensions.iter().map(|e| format!("\"{}\"", e)).collect();
    format!(
        r#"# Xala project configuration

[scan]
# File extensions to analyze
extensions = [{extensions}]
recursive = {recursive}

[rules]
# Rule names to skip, e.g. ["Test ID", "Memoization"]
disabled = []
# Directories whose components must stay stateless
pure_component_dirs = ["components"]

[migration]
source_dir = "{source_dir}"
components_dir = "{components_dir}"
component_extension = "{component_extension}"
backup = {backup}
# "warn" runs phases with unmet dependencies anyway, "fail" fails them
dependency_policy = "warn"

[defaults]
# text, json, table or markdown
format = "text"
"#,
        extensions = extensions.join(", "),
        recursive = scan.recursive,
        source_dir = migration.source_dir,
        components_dir = migration.components_dir,
        component_extension = migration.component_extension,
        backup = migration.backup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_project_config(dir.path());
        assert!(config.scan.recursive);
        assert_eq!(config.scan.extensions, vec!["tsx", "ts", "jsx", "js"]);
        assert_eq!(config.migration.source_dir, "src");
        assert_eq!(config.migration.dependency_policy, DependencyPolicy::WarnAndContinue);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[rules]\ndisabled = [\"Test ID\"]\n\n[migration]\ndependency_policy = \"fail\"\n",
        )
        .expect("write");
        let config = load_project_config(dir.path());
        assert_eq!(config.rules.disabled, vec!["Test ID"]);
        assert_eq!(config.rules.pure_component_dirs, vec!["components"]);
        assert_eq!(config.migration.dependency_policy, DependencyPolicy::FailPhase);
        assert!(config.migration.backup);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "[scan\nrecursive = maybe").expect("write");
        let config = load_project_config(dir.path());
        assert!(config.scan.recursive);
    }

    #[test]
    fn test_file_target_uses_parent_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "[scan]\nrecursive = false\n").expect("write");
        let file = dir.path().join("Button.tsx");
        fs::write(&file, "").expect("write");
        assert!(!load_project_config(&file).scan.recursive);
    }

    #[test]
    fn test_default_template_parses() {
        let config: ProjectConfig =
            toml::from_str(&default_config_toml()).expect("template is valid toml");
        assert_eq!(config.defaults.format.as_deref(), Some("text"));
        assert_eq!(config.migration.component_extension, "tsx");
    }
}
