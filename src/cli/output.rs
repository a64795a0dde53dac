//! Shared output helpers for command handlers

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Print `rendered` to stdout, or write it to `output_path`
pub(super) fn emit(rendered: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            // stderr keeps stdout clean for piping
            eprintln!(
                "{} Report written to: {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
