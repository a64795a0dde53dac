//! File discovery for the check and migrate commands.
//!
//! Walks a file or directory, keeps files whose extension is on the
//! allowlist and reads them into [`SourceUnit`]s. Unreadable files are
//! skipped with a warning so one bad file never stops a run.

use crate::error::{XalaError, XalaResult};
use crate::models::SourceUnit;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Script extensions scanned when no config overrides them
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Directories never descended into
const SKIP_DIRS: &[&str] = &[".git", "node_modules", ".migration-backup", "dist", "build"];

/// True for a directory below the walk root that is on the skip list
pub(crate) fn is_skipped_dir(entry: &DirEntry) -> bool {
    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
    is_dir && entry.depth() > 0 && SKIP_DIRS.iter().any(|skip| entry.file_name() == *skip)
}

/// Scanner options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub recursive: bool,
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }
}

/// Enumerate candidate files under `root`.
///
/// A file root yields itself if its extension is allowed, otherwise nothing.
/// A directory root yields its immediate files, plus nested files when
/// `recursive` is set. Output is sorted by path.
pub fn scan(root: &Path, options: &ScanOptions) -> XalaResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(XalaError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(if options.accepts(root) {
            vec![root.to_path_buf()]
        } else {
            debug!("Skipping {} (extension not allowed)", root.display());
            Vec::new()
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| !is_skipped_dir(entry));
    if !options.recursive {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && options.accepts(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    debug!("Scanned {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Read every path into a [`SourceUnit`], skipping (and logging) failures.
pub fn read_sources(paths: &[PathBuf]) -> Vec<SourceUnit> {
    paths
        .iter()
        .filter_map(|path| match SourceUnit::read(path) {
            Ok(unit) => Some(unit),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        })
        .collect()
}

/// Scan and read in one step.
pub fn load(root: &Path, options: &ScanOptions) -> XalaResult<Vec<SourceUnit>> {
    let paths = scan(root, options)?;
    Ok(read_sources(&paths))
}
