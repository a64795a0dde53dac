//! Phase-based migration engine
//!
//! A [`MigrationStrategy`] is an ordered list of [`MigrationPhase`]s. The
//! [`MigrationEngine`] runs them sequentially in the given order (callers
//! order by dependency), applying each phase's transformations to the
//! component files it targets:
//!
//! ```text
//! execute_migration
//!   ├─ dry run? ── mark every phase completed, warn, return
//!   ├─ backup <root>/.migration-backup/backup-<timestamp>/<src>/…
//!   └─ for phase in strategy.phases
//!        execute_phase ── dependency gate (policy) ── transformations × components
//!        failed && risk == high ──► stop
//! ```
//!
//! Per-file failures never fail a phase. A phase fails only when its
//! dependency gate rejects it (with [`DependencyPolicy::FailPhase`]) or when
//! a transformation cannot run at all (e.g. the components directory is
//! missing).

use crate::error::{XalaError, XalaResult};
use crate::scanner;
use crate::transform::{transform_file, Transformation, TransformationError};
use chrono::{SecondsFormat, Utc};
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory (under the project root) holding timestamped backups
pub const BACKUP_DIR: &str = ".migration-backup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// What to do when a phase runs before its dependencies completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DependencyPolicy {
    /// Record a warning and run the phase anyway
    #[default]
    #[serde(rename = "warn")]
    WarnAndContinue,
    /// Fail the phase without running it
    #[serde(rename = "fail")]
    FailPhase,
}

/// An ordered, dependency-gated group of transformations
#[derive(Debug, Clone)]
pub struct MigrationPhase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub transformations: Vec<Transformation>,
    pub components: Vec<String>,
    pub dependencies: Vec<String>,
    pub risk_level: RiskLevel,
}

impl MigrationPhase {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            transformations: Vec::new(),
            components: Vec::new(),
            dependencies: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_transformation(mut self, transformation: Transformation) -> Self {
        self.transformations.push(transformation);
        self
    }

    pub fn with_transformations(mut self, transformations: Vec<Transformation>) -> Self {
        self.transformations.extend(transformations);
        self
    }

    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components.extend(components.into_iter().map(Into::into));
        self
    }

    pub fn depends_on(mut self, phase_id: impl Into<String>) -> Self {
        self.dependencies.push(phase_id.into());
        self
    }

    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk_level = risk;
        self
    }
}

/// Phases in execution order
#[derive(Debug, Clone, Default)]
pub struct MigrationStrategy {
    pub name: String,
    pub phases: Vec<MigrationPhase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Files touched by one transformation across a component list
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransformationReport {
    /// Files whose text changed
    pub transformed: Vec<PathBuf>,
    /// Files missing or left unchanged
    pub skipped: Vec<PathBuf>,
    pub errors: Vec<TransformationError>,
}

/// Result of running one phase
#[derive(Debug, Clone, Serialize)]
pub struct PhaseOutcome {
    pub phase_id: String,
    pub success: bool,
    pub modified_files: Vec<PathBuf>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl PhaseOutcome {
    fn new(phase_id: &str) -> Self {
        Self {
            phase_id: phase_id.to_string(),
            success: false,
            modified_files: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Result of one [`MigrationEngine::execute_migration`] call
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationResult {
    pub success: bool,
    pub completed_phases: Vec<String>,
    pub failed_phases: Vec<String>,
    pub modified_files: Vec<PathBuf>,
    pub backup_location: Option<PathBuf>,
    pub rollback_instructions: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RollbackResult {
    pub success: bool,
    pub restored_files: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Engine settings
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Source tree under the project root; this is what gets backed up
    pub source_dir: String,
    /// Component directory under `source_dir`
    pub components_dir: String,
    /// Extension of component files (`<Component>.<ext>`)
    pub component_extension: String,
    pub dry_run: bool,
    pub backup: bool,
    pub dependency_policy: DependencyPolicy,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            source_dir: "src".to_string(),
            components_dir: "components".to_string(),
            component_extension: "tsx".to_string(),
            dry_run: false,
            backup: true,
            dependency_policy: DependencyPolicy::default(),
        }
    }
}

pub struct MigrationEngine {
    project_root: PathBuf,
    options: MigrationOptions,
    completed_phases: HashSet<String>,
    phase_states: HashMap<String, PhaseState>,
}

impl MigrationEngine {
    pub fn new(project_root: impl Into<PathBuf>, options: MigrationOptions) -> Self {
        Self {
            project_root: project_root.into(),
            options,
            completed_phases: HashSet::new(),
            phase_states: HashMap::new(),
        }
    }

    fn source_root(&self) -> PathBuf {
        self.project_root.join(&self.options.source_dir)
    }

    fn components_root(&self) -> PathBuf {
        self.source_root().join(&self.options.components_dir)
    }

    /// `<root>/<src>/<components>/<Component>.<ext>`
    pub fn component_path(&self, component: &str) -> PathBuf {
        self.components_root()
            .join(format!("{}.{}", component, self.options.component_extension))
    }

    /// Component names found directly in the components directory
    pub fn discover_components(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.components_root()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension().and_then(|e| e.to_str())
                        == Some(self.options.component_extension.as_str())
            })
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .filter(|stem| !stem.contains('.'))
            .collect();
        names.sort();
        names
    }

    pub fn phase_state(&self, phase_id: &str) -> PhaseState {
        self.phase_states
            .get(phase_id)
            .copied()
            .unwrap_or(PhaseState::Pending)
    }

    pub fn is_completed(&self, phase_id: &str) -> bool {
        self.completed_phases.contains(phase_id)
    }

    /// Apply one transformation to every named component's file
    pub fn execute_transformation(
        &self,
        transformation: &Transformation,
        components: &[String],
    ) -> XalaResult<TransformationReport> {
        let components_root = self.components_root();
        if !components_root.is_dir() {
            return Err(XalaError::PathNotFound(components_root));
        }

        let mut report = TransformationReport::default();
        for component in components {
            let path = self.component_path(component);
            if !path.is_file() {
                debug!("Skipping {}: no file at {}", component, path.display());
                report.skipped.push(path);
                continue;
            }
            let outcome = transform_file(&path, transformation, self.options.dry_run);
            match outcome.error {
                Some(error) => report.errors.push(error),
                None if outcome.changed => report.transformed.push(path),
                None => report.skipped.push(path),
            }
        }
        Ok(report)
    }

    /// Run one phase: dependency gate, then every transformation in order
    pub fn execute_phase(&mut self, phase: &MigrationPhase) -> PhaseOutcome {
        let mut outcome = PhaseOutcome::new(&phase.id);
        self.phase_states
            .insert(phase.id.clone(), PhaseState::Running);
        info!("Running phase {} ({})", phase.id, phase.name);

        let missing: Vec<&str> = phase
            .dependencies
            .iter()
            .filter(|d| !self.completed_phases.contains(d.as_str()))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            let message = format!(
                "Phase '{}' has unmet dependencies: {}",
                phase.id,
                missing.join(", ")
            );
            match self.options.dependency_policy {
                DependencyPolicy::WarnAndContinue => {
                    warn!("{}; continuing", message);
                    outcome.warnings.push(message);
                }
                DependencyPolicy::FailPhase => {
                    warn!("{}; failing phase", message);
                    outcome.errors.push(message);
                    self.phase_states.insert(phase.id.clone(), PhaseState::Failed);
                    return outcome;
                }
            }
        }

        for transformation in &phase.transformations {
            match self.execute_transformation(transformation, &phase.components) {
                Ok(report) => {
                    if !self.options.dry_run {
                        for path in report.transformed {
                            if !outcome.modified_files.contains(&path) {
                                outcome.modified_files.push(path);
                            }
                        }
                    }
                    outcome
                        .errors
                        .extend(report.errors.iter().map(|e| e.to_string()));
                }
                Err(e) => {
                    warn!("Phase {} aborted: {}", phase.id, e);
                    outcome
                        .errors
                        .push(format!("Transformation '{}' failed: {}", transformation.name, e));
                    self.phase_states.insert(phase.id.clone(), PhaseState::Failed);
                    return outcome;
                }
            }
        }

        self.completed_phases.insert(phase.id.clone());
        self.phase_states
            .insert(phase.id.clone(), PhaseState::Completed);
        outcome.success = true;
        debug!(
            "Phase {} completed: {} files modified, {} file errors",
            phase.id,
            outcome.modified_files.len(),
            outcome.errors.len()
        );
        outcome
    }

    /// Run every phase of `strategy` in order
    pub fn execute_migration(&mut self, strategy: &MigrationStrategy) -> MigrationResult {
        let mut result = MigrationResult::default();

        if self.options.dry_run {
            for phase in &strategy.phases {
                self.completed_phases.insert(phase.id.clone());
                self.phase_states
                    .insert(phase.id.clone(), PhaseState::Completed);
                result.completed_phases.push(phase.id.clone());
            }
            result
                .warnings
                .push("Dry run: no files were modified".to_string());
            result.success = true;
            return result;
        }

        if self.options.backup {
            match self.create_backup() {
                Ok(location) => {
                    result.rollback_instructions = self.rollback_instructions(&location);
                    result.backup_location = Some(location);
                }
                Err(e) => {
                    warn!("Backup failed, migration not started: {}", e);
                    result.errors.push(format!("Backup failed: {}", e));
                    return result;
                }
            }
        }

        for phase in &strategy.phases {
            let outcome = self.execute_phase(phase);
            for path in outcome.modified_files {
                if !result.modified_files.contains(&path) {
                    result.modified_files.push(path);
                }
            }
            result.warnings.extend(outcome.warnings);
            result.errors.extend(outcome.errors);

            if outcome.success {
                result.completed_phases.push(phase.id.clone());
            } else {
                result.failed_phases.push(phase.id.clone());
                if phase.risk_level == RiskLevel::High {
                    let message = format!(
                        "High-risk phase '{}' failed; remaining phases were not run",
                        phase.id
                    );
                    warn!("{}", message);
                    result.warnings.push(message);
                    break;
                }
            }
        }

        result.success = result.failed_phases.is_empty();
        info!(
            "Migration finished: {} completed, {} failed, {} files modified",
            result.completed_phases.len(),
            result.failed_phases.len(),
            result.modified_files.len()
        );
        result
    }

    /// Copy the source tree to `<root>/.migration-backup/backup-<timestamp>/<src>`
    pub fn create_backup(&self) -> XalaResult<PathBuf> {
        let source = self.source_root();
        if !source.is_dir() {
            return Err(XalaError::PathNotFound(source));
        }

        let stamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-");
        let location = self
            .project_root
            .join(BACKUP_DIR)
            .join(format!("backup-{}", stamp));
        let copied = copy_tree(&source, &location.join(&self.options.source_dir))?;
        info!("Backed up {} files to {}", copied, location.display());
        Ok(location)
    }

    /// Human-readable restore steps for a backup
    pub fn rollback_instructions(&self, backup_location: &Path) -> Vec<String> {
        let backup_src = backup_location.join(&self.options.source_dir);
        let target_src = self.source_root();
        vec![
            format!("Backup created at: {}", backup_location.display()),
            format!(
                "To restore, run: xala migrate rollback \"{}\" \"{}\"",
                backup_location.display(),
                self.project_root.display()
            ),
            format!(
                "Or manually: cp -R \"{}/.\" \"{}/\"",
                backup_src.display(),
                target_src.display()
            ),
        ]
    }

    /// Copy every file under `backup_location` back to the same relative
    /// path under the project root. Per-file failures are collected.
    pub fn rollback(&self, backup_location: &Path) -> RollbackResult {
        let mut result = RollbackResult::default();
        if !backup_location.is_dir() {
            result.errors.push(format!(
                "Backup directory not found: {}",
                backup_location.display()
            ));
            return result;
        }

        for file in walk_files(backup_location) {
            let Ok(relative) = file.strip_prefix(backup_location) else {
                continue;
            };
            let destination = self.project_root.join(relative);
            let copied = destination
                .parent()
                .map_or(Ok(()), std::fs::create_dir_all)
                .and_then(|_| std::fs::copy(&file, &destination));
            match copied {
                Ok(_) => result.restored_files.push(destination),
                Err(e) => {
                    warn!("Failed to restore {}: {}", destination.display(), e);
                    result
                        .errors
                        .push(format!("Failed to restore {}: {}", destination.display(), e));
                }
            }
        }

        result.success = result.errors.is_empty();
        info!(
            "Rollback restored {} files ({} errors)",
            result.restored_files.len(),
            result.errors.len()
        );
        result
    }
}

/// All regular files under `root`, hidden ones included. Skip-listed
/// directories (earlier backups, `node_modules`, `.git`) are not entered.
fn walk_files(root: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| !scanner::is_skipped_dir(entry))
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.into_path())
        .collect()
}

/// Recursive copy; returns the number of files copied
fn copy_tree(from: &Path, to: &Path) -> XalaResult<usize> {
    let mut copied = 0;
    for file in walk_files(from) {
        let Ok(relative) = file.strip_prefix(from) else {
            continue;
        };
        let destination = to.join(relative);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| XalaError::io(parent, e))?;
        }
        std::fs::copy(&file, &destination).map_err(|e| XalaError::io(&file, e))?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let components = dir.path().join("src/components");
        fs::create_dir_all(&components).expect("mkdir");
        fs::write(
            components.join("Button.tsx"),
            "import { Button as MuiButton } from '@mui/material';\nexport const Button = () => <MuiButton />;\n",
        )
        .expect("write");
        fs::write(components.join("Card.tsx"), "export const Card = () => <div />;\n")
            .expect("write");
        dir
    }

    fn engine(root: &Path, options: MigrationOptions) -> MigrationEngine {
        MigrationEngine::new(root, options)
    }

    fn mui_phase(id: &str) -> MigrationPhase {
        MigrationPhase::new(id, "Swap imports")
            .with_transformation(Transformation::replace(
                "mui import",
                "'@mui/material'",
                "'@xala-technologies/ui-system'",
            ))
            .with_components(["Button", "Card", "Ghost"])
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).expect("read")
    }

    #[test]
    fn test_execute_transformation_partitions_files() {
        let dir = project();
        let engine = engine(dir.path(), MigrationOptions::default());
        let report = engine
            .execute_transformation(
                &Transformation::replace("r", "'@mui/material'", "'x'"),
                &["Button".to_string(), "Card".to_string(), "Ghost".to_string()],
            )
            .expect("components dir exists");
        assert_eq!(report.transformed, vec![dir.path().join("src/components/Button.tsx")]);
        assert_eq!(report.skipped.len(), 2);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_validator_failure_is_collected_not_fatal() {
        let dir = project();
        let mut engine = engine(dir.path(), MigrationOptions::default());
        let phase = MigrationPhase::new("strict", "Strict")
            .with_transformation(
                Transformation::replace("r", "MuiButton", "XButton")
                    .with_validator(|text| !text.contains("XButton")),
            )
            .with_components(["Button"]);
        let outcome = engine.execute_phase(&phase);
        assert!(outcome.success);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.modified_files.is_empty());
        assert!(read(dir.path(), "src/components/Button.tsx").contains("MuiButton"));
        assert_eq!(engine.phase_state("strict"), PhaseState::Completed);
    }

    #[test]
    fn test_dry_run_marks_all_completed_and_changes_nothing() {
        let dir = project();
        let before = read(dir.path(), "src/components/Button.tsx");
        let options = MigrationOptions {
            dry_run: true,
            ..Default::default()
        };
        let mut engine = engine(dir.path(), options);
        let strategy = MigrationStrategy {
            name: "test".into(),
            phases: vec![mui_phase("imports"), mui_phase("styles"), mui_phase("cleanup")],
        };
        let result = engine.execute_migration(&strategy);

        assert!(result.success);
        assert_eq!(result.completed_phases, vec!["imports", "styles", "cleanup"]);
        assert!(result.modified_files.is_empty());
        assert!(result.backup_location.is_none());
        assert!(!result.warnings.is_empty());
        assert_eq!(read(dir.path(), "src/components/Button.tsx"), before);
        assert!(!dir.path().join(BACKUP_DIR).exists());
    }

    #[test]
    fn test_migration_backs_up_and_modifies() {
        let dir = project();
        let mut engine = engine(dir.path(), MigrationOptions::default());
        let strategy = MigrationStrategy {
            name: "mui".into(),
            phases: vec![mui_phase("imports")],
        };
        let result = engine.execute_migration(&strategy);

        assert!(result.success);
        assert_eq!(
            result.modified_files,
            vec![dir.path().join("src/components/Button.tsx")]
        );
        let backup = result.backup_location.expect("backup created");
        assert!(backup.starts_with(dir.path().join(BACKUP_DIR)));
        let name = backup.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(name.starts_with("backup-") && !name.contains(':'));
        assert!(read(&backup, "src/components/Button.tsx").contains("@mui/material"));
        assert!(read(dir.path(), "src/components/Button.tsx").contains("@xala-technologies"));
        assert_eq!(result.rollback_instructions.len(), 3);
        assert_eq!(
            result.rollback_instructions[1],
            format!(
                "To restore, run: xala migrate rollback \"{}\" \"{}\"",
                backup.display(),
                dir.path().display()
            )
        );
        assert!(result.rollback_instructions[2].contains("cp -R"));
    }

    #[test]
    fn test_failed_high_risk_phase_aborts_run() {
        let dir = project();
        let options = MigrationOptions {
            backup: false,
            dependency_policy: DependencyPolicy::FailPhase,
            ..Default::default()
        };
        let mut engine = engine(dir.path(), options);
        let strategy = MigrationStrategy {
            name: "abort".into(),
            phases: vec![
                mui_phase("first"),
                mui_phase("risky")
                    .depends_on("never-ran")
                    .with_risk(RiskLevel::High),
                mui_phase("after"),
            ],
        };
        let result = engine.execute_migration(&strategy);

        assert!(!result.success);
        assert_eq!(result.completed_phases, vec!["first"]);
        assert_eq!(result.failed_phases, vec!["risky"]);
        assert!(!engine.is_completed("after"));
        assert_eq!(engine.phase_state("after"), PhaseState::Pending);
        assert_eq!(engine.phase_state("risky"), PhaseState::Failed);
    }

    #[test]
    fn test_failed_low_risk_phase_does_not_abort() {
        let dir = project();
        let options = MigrationOptions {
            backup: false,
            dependency_policy: DependencyPolicy::FailPhase,
            ..Default::default()
        };
        let mut engine = engine(dir.path(), options);
        let strategy = MigrationStrategy {
            name: "continue".into(),
            phases: vec![
                mui_phase("flaky")
                    .depends_on("never-ran")
                    .with_risk(RiskLevel::Medium),
                mui_phase("after"),
            ],
        };
        let result = engine.execute_migration(&strategy);

        assert!(!result.success);
        assert_eq!(result.failed_phases, vec!["flaky"]);
        assert_eq!(result.completed_phases, vec!["after"]);
    }

    #[test]
    fn test_unmet_dependencies_warn_by_default() {
        let dir = project();
        let mut engine = engine(dir.path(), MigrationOptions::default());
        let outcome = engine.execute_phase(&mui_phase("late").depends_on("setup"));
        assert!(outcome.success);
        assert!(outcome.warnings[0].contains("setup"));
        assert!(engine.is_completed("late"));
    }

    #[test]
    fn test_missing_components_dir_fails_phase() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("src")).expect("mkdir");
        let mut engine = engine(dir.path(), MigrationOptions::default());
        let outcome = engine.execute_phase(&mui_phase("imports"));
        assert!(!outcome.success);
        assert_eq!(engine.phase_state("imports"), PhaseState::Failed);
    }

    #[test]
    fn test_rollback_missing_backup_reports_failure() {
        let dir = project();
        let engine = engine(dir.path(), MigrationOptions::default());
        let result = engine.rollback(&dir.path().join(BACKUP_DIR).join("nope"));
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_rollback_restores_backup() {
        let dir = project();
        let before = read(dir.path(), "src/components/Button.tsx");
        let mut engine = engine(dir.path(), MigrationOptions::default());
        let result = engine.execute_migration(&MigrationStrategy {
            name: "mui".into(),
            phases: vec![mui_phase("imports")],
        });
        assert_ne!(read(dir.path(), "src/components/Button.tsx"), before);

        let rollback = engine.rollback(&result.backup_location.expect("backup"));
        assert!(rollback.success);
        assert_eq!(rollback.restored_files.len(), 2);
        assert_eq!(read(dir.path(), "src/components/Button.tsx"), before);
    }

    #[test]
    fn test_root_backup_skips_earlier_backups_and_node_modules() {
        let dir = project();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("mkdir");
        fs::write(dir.path().join("node_modules/pkg/index.js"), "x").expect("write");
        let options = MigrationOptions {
            source_dir: ".".to_string(),
            ..MigrationOptions::default()
        };
        let engine = engine(dir.path(), options);

        engine.create_backup().expect("first backup");
        let second = engine.create_backup().expect("second backup");

        assert!(second.join("src/components/Button.tsx").exists());
        assert!(!second.join(BACKUP_DIR).exists());
        assert!(!second.join("node_modules").exists());
    }

    #[test]
    fn test_discover_components() {
        let dir = project();
        fs::write(dir.path().join("src/components/Card.test.tsx"), "").expect("write");
        let engine = engine(dir.path(), MigrationOptions::default());
        assert_eq!(engine.discover_components(), vec!["Button", "Card"]);
    }
}
