//! Textual rewrites over source files
//!
//! A [`Transformation`] is a named [`TransformKind`] plus an optional
//! validator run against the rewritten text. [`transform_file`] applies one
//! transformation to one file and reports the result instead of returning
//! an error: read/write failures and validator rejections become a
//! [`TransformationError`] inside the [`TransformOutcome`].

pub mod convert;

use crate::error::{XalaError, XalaResult};
use crate::models::Severity;
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Predicate over the rewritten text; `false` rejects the rewrite
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// The rewrite itself. Each variant carries only the fields it uses.
#[derive(Debug, Clone)]
pub enum TransformKind {
    /// Global literal find-and-replace
    ReplaceLiteral { source: String, target: String },
    /// Global regex replace; `replacement` may reference groups (`$1`)
    ReplacePattern { pattern: Regex, replacement: String },
    /// Append text to the end of the content
    Add { text: String },
    /// Delete every literal occurrence
    RemoveLiteral { source: String },
    /// Delete every regex match
    RemovePattern { pattern: Regex },
    /// Whole-word rename
    Rename {
        from: String,
        to: String,
        word: Regex,
    },
    /// Reserved for structural edits; passes content through unchanged
    Modify,
}

impl TransformKind {
    /// Short tag used in reports
    pub fn tag(&self) -> &'static str {
        match self {
            TransformKind::ReplaceLiteral { .. } | TransformKind::ReplacePattern { .. } => "replace",
            TransformKind::Add { .. } => "add",
            TransformKind::RemoveLiteral { .. } | TransformKind::RemovePattern { .. } => "remove",
            TransformKind::Rename { .. } => "rename",
            TransformKind::Modify => "modify",
        }
    }
}

/// A named rewrite with an optional post-condition
#[derive(Clone)]
pub struct Transformation {
    pub name: String,
    pub kind: TransformKind,
    validator: Option<Validator>,
}

impl std::fmt::Debug for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformation")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

fn compile(pattern: &str) -> XalaResult<Regex> {
    Regex::new(pattern).map_err(|source| XalaError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl Transformation {
    pub fn new(name: impl Into<String>, kind: TransformKind) -> Self {
        Self {
            name: name.into(),
            kind,
            validator: None,
        }
    }

    pub fn replace(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            TransformKind::ReplaceLiteral {
                source: source.into(),
                target: target.into(),
            },
        )
    }

    pub fn replace_pattern(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> XalaResult<Self> {
        Ok(Self::new(
            name,
            TransformKind::ReplacePattern {
                pattern: compile(pattern)?,
                replacement: replacement.into(),
            },
        ))
    }

    pub fn add(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, TransformKind::Add { text: text.into() })
    }

    pub fn remove(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(
            name,
            TransformKind::RemoveLiteral {
                source: source.into(),
            },
        )
    }

    pub fn remove_pattern(name: impl Into<String>, pattern: &str) -> XalaResult<Self> {
        Ok(Self::new(
            name,
            TransformKind::RemovePattern {
                pattern: compile(pattern)?,
            },
        ))
    }

    pub fn rename(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> XalaResult<Self> {
        let from = from.into();
        let word = compile(&format!(r"\b{}\b", regex::escape(&from)))?;
        Ok(Self::new(
            name,
            TransformKind::Rename {
                from,
                to: to.into(),
                word,
            },
        ))
    }

    pub fn modify(name: impl Into<String>) -> Self {
        Self::new(name, TransformKind::Modify)
    }

    /// Attach a post-condition checked against the rewritten text
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Pure rewrite of `content`
    pub fn apply(&self, content: &str) -> String {
        match &self.kind {
            TransformKind::ReplaceLiteral { source, target } => {
                perform_replacement(content, source, target)
            }
            TransformKind::ReplacePattern {
                pattern,
                replacement,
            } => pattern
                .replace_all(content, replacement.as_str())
                .into_owned(),
            TransformKind::Add { text } => format!("{}{}", content, text),
            TransformKind::RemoveLiteral { source } => perform_replacement(content, source, ""),
            TransformKind::RemovePattern { pattern } => {
                pattern.replace_all(content, "").into_owned()
            }
            TransformKind::Rename { to, word, .. } => {
                word.replace_all(content, NoExpand(to.as_str())).into_owned()
            }
            TransformKind::Modify => content.to_string(),
        }
    }

    /// Run the validator, if any, against rewritten text
    pub fn validate(&self, content: &str) -> bool {
        self.validator.as_ref().map_or(true, |v| v(content))
    }
}

/// Global literal find-and-replace. An empty `source` leaves text untouched.
pub fn perform_replacement(content: &str, source: &str, target: &str) -> String {
    if source.is_empty() {
        return content.to_string();
    }
    content.replace(source, target)
}

/// Apply transformations in order, returning the final text and the names
/// of the transformations that changed something
pub fn apply_all<'a>(
    content: &str,
    transformations: &'a [Transformation],
) -> (String, Vec<&'a str>) {
    let mut current = content.to_string();
    let mut applied = Vec::new();
    for t in transformations {
        let next = t.apply(&current);
        if next != current {
            applied.push(t.name.as_str());
            current = next;
        }
    }
    (current, applied)
}

/// A per-file failure recorded instead of raised
#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[error("{}: {message}", file.display())]
pub struct TransformationError {
    pub file: PathBuf,
    pub message: String,
    pub severity: Severity,
}

/// Result of applying one transformation to one file
#[derive(Debug, Clone, Serialize)]
pub struct TransformOutcome {
    pub file: PathBuf,
    pub transformation: String,
    /// The rewrite produced different text
    pub changed: bool,
    /// The new text was written to disk
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TransformationError>,
}

/// Apply `transformation` to the file at `path`.
///
/// The file is rewritten in place only when not `dry_run`, the validator (if
/// any) accepts the new text, and the text actually changed.
pub fn transform_file(path: &Path, transformation: &Transformation, dry_run: bool) -> TransformOutcome {
    let mut outcome = TransformOutcome {
        file: path.to_path_buf(),
        transformation: transformation.name.clone(),
        changed: false,
        written: false,
        error: None,
    };
    let fail = |message: String| TransformationError {
        file: path.to_path_buf(),
        message,
        severity: Severity::Error,
    };

    let original = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            outcome.error = Some(fail(format!("Failed to read file: {}", e)));
            return outcome;
        }
    };

    let updated = transformation.apply(&original);
    if !transformation.validate(&updated) {
        debug!(
            "Validator rejected {} on {}",
            transformation.name,
            path.display()
        );
        outcome.error = Some(fail(format!(
            "Validation failed after '{}' ({})",
            transformation.name,
            transformation.kind.tag()
        )));
        return outcome;
    }

    outcome.changed = updated != original;
    if dry_run || !outcome.changed {
        return outcome;
    }

    match std::fs::write(path, &updated) {
        Ok(()) => {
            debug!("Wrote {} ({})", path.display(), transformation.name);
            outcome.written = true;
        }
        Err(e) => {
            warn!("Cannot write {}: {}", path.display(), e);
            outcome.error = Some(fail(format!("Failed to write file: {}", e)));
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_replace_literal_is_global() {
        let t = Transformation::replace("swap", "Box", "Stack");
        assert_eq!(t.apply("<Box><Box/></Box>"), "<Stack><Stack/></Stack>");
    }

    #[test]
    fn test_replace_round_trip_restores_text() {
        let text = "import { Grid } from 'lib';\n<Grid item><Grid /></Grid>\n";
        let forward = perform_replacement(text, "Grid", "Layout");
        assert!(!forward.contains("Grid"));
        assert_eq!(perform_replacement(&forward, "Layout", "Grid"), text);
    }

    #[test]
    fn test_replace_pattern_uses_groups() {
        let t = Transformation::replace_pattern("px", r"(\d+)px", "${1}rem").expect("valid");
        assert_eq!(t.apply("a: 4px; b: 8px"), "a: 4rem; b: 8rem");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Transformation::replace_pattern("bad", "(unclosed", "").expect_err("invalid");
        assert!(matches!(err, XalaError::InvalidPattern { .. }));
    }

    #[test]
    fn test_add_appends() {
        let t = Transformation::add("export", "\nexport default Button;\n");
        assert_eq!(t.apply("const Button = 1;"), "const Button = 1;\nexport default Button;\n");
    }

    #[test]
    fn test_remove_literal_and_pattern() {
        let literal = Transformation::remove("drop", "console.log(x);\n");
        assert_eq!(literal.apply("a\nconsole.log(x);\nb\nconsole.log(x);\n"), "a\nb\n");

        let pattern = Transformation::remove_pattern("drop", r"(?m)^\s*debugger;\n").expect("valid");
        assert_eq!(pattern.apply("a\n  debugger;\nb\n"), "a\nb\n");
    }

    #[test]
    fn test_rename_respects_word_boundaries() {
        let t = Transformation::rename("rename", "Button", "XalaButton").expect("valid");
        assert_eq!(
            t.apply("<Button /> <ButtonGroup /> Button.displayName"),
            "<XalaButton /> <ButtonGroup /> XalaButton.displayName"
        );
    }

    #[test]
    fn test_rename_target_is_literal() {
        let t = Transformation::rename("rename", "price", "$amount").expect("valid");
        assert_eq!(t.apply("price + price"), "$amount + $amount");
    }

    #[test]
    fn test_modify_is_passthrough() {
        assert_eq!(Transformation::modify("noop").apply("abc"), "abc");
        assert_eq!(Transformation::modify("noop").kind.tag(), "modify");
    }

    #[test]
    fn test_apply_all_reports_effective_steps() {
        let steps = vec![
            Transformation::replace("a", "red", "blue"),
            Transformation::replace("b", "green", "yellow"),
        ];
        let (out, applied) = apply_all("red", &steps);
        assert_eq!(out, "blue");
        assert_eq!(applied, vec!["a"]);
    }

    #[test]
    fn test_transform_file_writes_when_changed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Card.tsx");
        fs::write(&path, "<Paper />").expect("write");

        let outcome = transform_file(&path, &Transformation::replace("p", "Paper", "Card"), false);
        assert!(outcome.error.is_none());
        assert!(outcome.changed && outcome.written);
        assert_eq!(fs::read_to_string(&path).expect("read"), "<Card />");
    }

    #[test]
    fn test_dry_run_never_touches_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Card.tsx");
        let original = "<Paper style={{ color: '#fff' }} />";
        fs::write(&path, original).expect("write");

        let transformations = vec![
            Transformation::replace("r", "Paper", "Card"),
            Transformation::replace_pattern("p", r"#fff", "white").expect("valid"),
            Transformation::add("a", "\n// migrated"),
            Transformation::remove("d", "Paper"),
            Transformation::rename("n", "Paper", "Surface").expect("valid"),
            Transformation::modify("m"),
        ];
        for t in &transformations {
            let outcome = transform_file(&path, t, true);
            assert!(!outcome.written, "{} wrote in dry-run", t.name);
            assert_eq!(fs::read_to_string(&path).expect("read"), original);
        }
    }

    #[test]
    fn test_validator_rejection_leaves_file_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Card.tsx");
        fs::write(&path, "import Paper from 'mui';").expect("write");

        let t = Transformation::remove("strip import", "import Paper from 'mui';")
            .with_validator(|text| text.contains("import"));
        let outcome = transform_file(&path, &t, false);
        let error = outcome.error.expect("validator should fail");
        assert_eq!(error.severity, Severity::Error);
        assert!(error.message.contains("Validation failed"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "import Paper from 'mui';");
    }

    #[test]
    fn test_missing_file_is_reported_not_raised() {
        let outcome = transform_file(
            Path::new("/nope/Missing.tsx"),
            &Transformation::replace("r", "a", "b"),
            false,
        );
        let error = outcome.error.expect("should fail");
        assert_eq!(error.file, PathBuf::from("/nope/Missing.tsx"));
        assert!(error.message.contains("Failed to read"));
    }
}
