//! Init command - write a default xala.toml

use crate::config::{default_config_toml, CONFIG_FILE};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let project = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !project.is_dir() {
        anyhow::bail!("Path is not a directory: {}", project.display());
    }

    let config_path = project.join(CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nNext: {}",
        style(format!("xala migrate analyze {}", path.display())).bold()
    );
    Ok(())
}
