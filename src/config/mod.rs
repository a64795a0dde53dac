//! Configuration module for Xala
//!
//! Project-level configuration (`xala.toml`): scan settings, rule
//! toggles, migration layout and CLI defaults.

mod project_config;

pub use project_config::{
    config_root, default_config_toml, load_project_config, CliDefaults, MigrationConfig,
    ProjectConfig, RulesConfig, ScanConfig, CONFIG_FILE,
};
