//! CLI command definitions and handlers

mod check;
mod init;
mod migrate;
mod output;

use crate::context::AppContext;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const FORMATS: [&str; 7] = ["text", "json", "table", "tsv", "markdown", "md", "detailed"];

/// Xala - design-system compliance and migration tooling
#[derive(Parser, Debug)]
#[command(name = "xala")]
#[command(
    version,
    about = "Check React sources against Xala UI System conventions and migrate them",
    after_help = "\
Examples:
  xala check src/components/Button.tsx        Score one file
  xala check src --format table               Tab-separated results for a tree
  xala migrate analyze . --format markdown    Detailed migration report
  xala migrate convert Card.tsx --dry-run     Preview style/color/type conversions
  xala migrate run . --dry-run                Plan a phased migration
  xala migrate codemods --from material-ui    Print jscodeshift codemods"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default xala.toml
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Check a file or directory against the design-system rules
    #[command(after_help = "\
Examples:
  xala check src/components/Button.tsx
  xala check src --verbose                 Also list passed rules
  xala check src --json -o report.json")]
    Check {
        /// File or directory to check
        file: PathBuf,

        /// Output format: text, json, table (tsv), markdown (md, detailed)
        #[arg(long, short = 'f', value_parser = FORMATS)]
        format: Option<String>,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// List passed rules as well
        #[arg(long, short = 'v')]
        verbose: bool,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Only check the immediate entries of a directory
        #[arg(long)]
        no_recursive: bool,
    },

    /// Analyze and migrate a codebase toward the Xala UI System
    Migrate {
        #[command(subcommand)]
        action: MigrateCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum MigrateCommand {
    /// Detect frameworks and migration issues in a project
    Analyze {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: text, json, table (tsv), markdown (md, detailed)
        #[arg(long, short = 'f', value_parser = FORMATS)]
        format: Option<String>,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Apply the conversion table to one file
    #[command(after_help = "\
Examples:
  xala migrate convert src/Card.tsx --dry-run
  xala migrate convert src/Card.tsx --backup
  xala migrate convert src/Card.tsx -o src/Card.converted.tsx")]
    Convert {
        /// File to convert
        file: PathBuf,

        /// Target platform (only react can be converted)
        #[arg(long, short = 'p', default_value = "react")]
        platform: String,

        /// Show the result without writing
        #[arg(long)]
        dry_run: bool,

        /// Copy the original to <file>.backup before overwriting it in place
        #[arg(long)]
        backup: bool,

        /// Ask before writing
        #[arg(long, short = 'i')]
        interactive: bool,

        /// Write the converted text here instead of in place
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Score one file's migration readiness
    Check {
        /// File or directory to check
        file: PathBuf,

        /// Output format: text, json, table (tsv), markdown (md, detailed)
        #[arg(long, short = 'f', value_parser = FORMATS)]
        format: Option<String>,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// List passed rules as well
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Run the proposed phased migration on a project
    #[command(after_help = "\
Examples:
  xala migrate run . --dry-run
  xala migrate run . --fail-on-missing-deps
  xala migrate run . --no-backup --json")]
    Run {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Mark phases completed without touching files
        #[arg(long)]
        dry_run: bool,

        /// Skip the .migration-backup snapshot
        #[arg(long)]
        no_backup: bool,

        /// Fail phases whose dependencies did not complete
        #[arg(long)]
        fail_on_missing_deps: bool,

        /// Output format: text, json, table (tsv), markdown (md, detailed)
        #[arg(long, short = 'f', value_parser = FORMATS)]
        format: Option<String>,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,
    },

    /// Restore files from a migration backup
    Rollback {
        /// Backup directory (.migration-backup/backup-<timestamp>)
        backup: PathBuf,

        /// Project root to restore into
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Generate jscodeshift codemods for a source framework
    Codemods {
        /// Source framework: material-ui, ant-design, chakra-ui
        #[arg(long)]
        from: String,

        /// Target component set
        #[arg(long, default_value = "xala")]
        to: String,

        /// Directory to write codemod files into (default: print)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Path whose xala.toml configures this command
    fn target(&self) -> PathBuf {
        match self {
            Commands::Init { path } => path.clone(),
            Commands::Check { file, .. } => file.clone(),
            Commands::Migrate { action } => match action {
                MigrateCommand::Analyze { path, .. }
                | MigrateCommand::Run { path, .. }
                | MigrateCommand::Rollback { path, .. } => path.clone(),
                MigrateCommand::Convert { file, .. } | MigrateCommand::Check { file, .. } => {
                    file.clone()
                }
                MigrateCommand::Codemods { .. } => PathBuf::from("."),
            },
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let ctx = AppContext::load(&cli.command.target());

    match cli.command {
        Commands::Init { path } => init::run(&path),

        Commands::Check {
            file,
            format,
            json,
            verbose,
            output,
            no_recursive,
        } => {
            let format = ctx.output_format(format.as_deref(), json)?;
            let options = ctx.config.scan_options();
            let options = if no_recursive {
                options.with_recursive(false)
            } else {
                options
            };
            check::run(&ctx.rules, &file, &options, format, verbose, output.as_deref())
        }

        Commands::Migrate { action } => match action {
            MigrateCommand::Analyze {
                path,
                format,
                json,
                output,
            } => {
                let format = ctx.output_format(format.as_deref(), json)?;
                migrate::analyze(&ctx, &path, format, output.as_deref())
            }
            MigrateCommand::Convert {
                file,
                platform,
                dry_run,
                backup,
                interactive,
                output,
            } => migrate::convert(
                &file,
                &migrate::ConvertOptions {
                    platform,
                    dry_run,
                    backup,
                    interactive,
                    output,
                },
            ),
            MigrateCommand::Check {
                file,
                format,
                json,
                verbose,
            } => {
                let format = ctx.output_format(format.as_deref(), json)?;
                check::run(
                    &ctx.readiness,
                    &file,
                    &ctx.config.scan_options(),
                    format,
                    verbose,
                    None,
                )
            }
            MigrateCommand::Run {
                path,
                dry_run,
                no_backup,
                fail_on_missing_deps,
                format,
                json,
            } => {
                let format = ctx.output_format(format.as_deref(), json)?;
                migrate::run(
                    &ctx,
                    &path,
                    &migrate::RunOptions {
                        dry_run,
                        no_backup,
                        fail_on_missing_deps,
                    },
                    format,
                )
            }
            MigrateCommand::Rollback { backup, path } => migrate::rollback(&ctx, &backup, &path),
            MigrateCommand::Codemods { from, to, output } => {
                migrate::codemods(&from, &to, output.as_deref())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_migrate_run_flags() {
        let cli = Cli::try_parse_from([
            "xala",
            "migrate",
            "run",
            "proj",
            "--dry-run",
            "--fail-on-missing-deps",
            "--log-level",
            "debug",
        ])
        .expect("parse");
        assert_eq!(cli.log_level, "debug");
        match cli.command {
            Commands::Migrate {
                action:
                    MigrateCommand::Run {
                        path,
                        dry_run,
                        fail_on_missing_deps,
                        no_backup,
                        ..
                    },
            } => {
                assert_eq!(path, PathBuf::from("proj"));
                assert!(dry_run && fail_on_missing_deps && !no_backup);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_format_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["xala", "check", "a.tsx", "--format", "sarif"]).is_err());
    }

    #[test]
    fn test_codemods_target_is_cwd() {
        let cli = Cli::try_parse_from(["xala", "migrate", "codemods", "--from", "mui"])
            .expect("parse");
        assert_eq!(cli.command.target(), PathBuf::from("."));
    }
}
