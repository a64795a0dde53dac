//! Migrate subcommands: analyze, convert, run, rollback, codemods

use super::output;
use crate::analyzer;
use crate::context::AppContext;
use crate::error::XalaError;
use crate::mappings::{create_codemods, generate_component_mapping, SourceFramework};
use crate::migration::{DependencyPolicy, MigrationEngine};
use crate::reporters::{self, OutputFormat, Report};
use crate::scanner;
use crate::transform::apply_all;
use crate::transform::convert::{conversion_set, Platform};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .expect("valid template")
}

/// `migrate analyze`
pub fn analyze(
    ctx: &AppContext,
    path: &Path,
    format: OutputFormat,
    output_path: Option<&Path>,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Scanning files...");

    let paths = scanner::scan(path, &ctx.config.scan_options())
        .with_context(|| format!("Cannot analyze {}", path.display()))?;
    spinner.set_message(format!("Analyzing {} files...", paths.len()));
    let units = scanner::read_sources(&paths);
    let analysis = analyzer::analyze_units(path, &units);
    spinner.finish_and_clear();

    info!(
        "Analyzed {} files: score {}, {} issues",
        analysis.files_scanned,
        analysis.score,
        analysis.issues.len()
    );
    let rendered = reporters::render(Report::Analysis(&analysis), format)?;
    output::emit(&rendered, output_path)
}

/// Flags for `migrate convert`
pub struct ConvertOptions {
    pub platform: String,
    pub dry_run: bool,
    pub backup: bool,
    pub interactive: bool,
    pub output: Option<PathBuf>,
}

/// `<file>.backup`
fn backup_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".backup");
    PathBuf::from(name)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `migrate convert`
pub fn convert(file: &Path, options: &ConvertOptions) -> Result<()> {
    let platform: Platform = options.platform.parse()?;
    let set = conversion_set(platform)?;
    if !file.is_file() {
        return Err(XalaError::PathNotFound(file.to_path_buf()).into());
    }

    let original = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let (converted, applied) = apply_all(&original, &set);

    if applied.is_empty() {
        println!(
            "{} No conversions apply to {}",
            style("✓").green(),
            style(file.display()).cyan()
        );
        return Ok(());
    }

    println!(
        "{} {} conversion(s) for {}:",
        style("→").cyan(),
        applied.len(),
        style(file.display()).bold()
    );
    for name in &applied {
        println!("  {} {}", style("•").dim(), name);
    }

    if options.dry_run {
        println!("\n{}\n", style("Dry run, nothing written. Result:").yellow());
        print!("{}", converted);
        return Ok(());
    }

    let target = options.output.as_deref().unwrap_or(file);
    if options.interactive && !confirm(&format!("Write changes to {}?", target.display()))? {
        println!("{} Aborted, nothing written", style("✗").yellow());
        return Ok(());
    }

    if options.backup && target == file {
        let backup = backup_path(file);
        std::fs::copy(file, &backup)
            .with_context(|| format!("Failed to back up {}", file.display()))?;
        println!(
            "{} Backup saved to {}",
            style("✓").green(),
            style(backup.display()).cyan()
        );
    }

    std::fs::write(target, &converted)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!(
        "{} Wrote {}",
        style("✓").green(),
        style(target.display()).cyan()
    );
    Ok(())
}

/// Flags for `migrate run`
pub struct RunOptions {
    pub dry_run: bool,
    pub no_backup: bool,
    pub fail_on_missing_deps: bool,
}

/// `migrate run`: analyze, propose a strategy, execute it
pub fn run(ctx: &AppContext, path: &Path, options: &RunOptions, format: OutputFormat) -> Result<()> {
    let analysis = analyzer::analyze_project(path, &ctx.config.scan_options())
        .with_context(|| format!("Cannot analyze {}", path.display()))?;

    let mut migration_options = ctx.config.migration_options();
    migration_options.dry_run = options.dry_run;
    if options.no_backup {
        migration_options.backup = false;
    }
    if options.fail_on_missing_deps {
        migration_options.dependency_policy = DependencyPolicy::FailPhase;
    }

    let mut engine = MigrationEngine::new(path, migration_options);
    let components = engine.discover_components();
    if components.is_empty() {
        warn!(
            "No component files found under {}",
            engine.component_path("*").display()
        );
    }
    let strategy = analyzer::propose_strategy(&analysis, &components)?;
    info!(
        "Executing strategy '{}' ({} phases, {} components)",
        strategy.name,
        strategy.phases.len(),
        components.len()
    );

    let result = engine.execute_migration(&strategy);
    let rendered = reporters::render(Report::Migration(&result), format)?;
    output::emit(&rendered, None)
}

/// `migrate rollback`
pub fn rollback(ctx: &AppContext, backup: &Path, path: &Path) -> Result<()> {
    let engine = MigrationEngine::new(path, ctx.config.migration_options());
    let result = engine.rollback(backup);

    for file in &result.restored_files {
        println!("  {} {}", style("✓").green(), style(file.display()).dim());
    }
    if !result.success {
        anyhow::bail!("Rollback failed:\n  {}", result.errors.join("\n  "));
    }
    println!(
        "{} Restored {} files from {}",
        style("✓").green(),
        result.restored_files.len(),
        style(backup.display()).cyan()
    );
    Ok(())
}

/// `migrate codemods`
pub fn codemods(from: &str, to: &str, output_dir: Option<&Path>) -> Result<()> {
    let framework: SourceFramework = from.parse().map_err(anyhow::Error::msg)?;
    let mappings = generate_component_mapping(from, to);
    if mappings.is_empty() {
        anyhow::bail!("No component mappings from {} to '{}'", framework, to);
    }
    let codemods = create_codemods(&mappings);

    match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            for codemod in &codemods {
                let path = dir.join(&codemod.file_name);
                std::fs::write(&path, &codemod.source)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("{} {}", style("✓").green(), style(path.display()).cyan());
            }
            println!(
                "\n{} codemods for {} written to {}",
                codemods.len(),
                framework,
                dir.display()
            );
        }
        None => {
            for codemod in &codemods {
                println!("// ---- {} ----", codemod.file_name);
                println!("{}", codemod.source);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("src/Card.tsx")),
            PathBuf::from("src/Card.tsx.backup")
        );
    }

    #[test]
    fn test_convert_rejects_other_platforms_before_reading() {
        let options = ConvertOptions {
            platform: "vue".into(),
            dry_run: true,
            backup: false,
            interactive: false,
            output: None,
        };
        let err = convert(Path::new("/does/not/matter.tsx"), &options).expect_err("unsupported");
        assert!(err.to_string().contains("Unsupported platform"));
    }

    #[test]
    fn test_codemods_unknown_framework() {
        assert!(codemods("bootstrap", "xala", None).is_err());
        assert!(codemods("material-ui", "vuetify", None).is_err());
    }
}
