//! Error types for the failures that are raised instead of reported
//!
//! Per-file problems (unreadable files, failed rules, failed rewrites,
//! failed phases) are recorded in result objects. Only setup-time problems
//! surface as `XalaError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XalaError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Unsupported platform '{platform}'. Supported: {supported}")]
    UnsupportedPlatform { platform: String, supported: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl XalaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        XalaError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type XalaResult<T> = Result<T, XalaError>;
