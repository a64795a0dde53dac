//! Project-level migration analysis
//!
//! Detects which UI frameworks a codebase uses, locates migration issues
//! line by line, scores the project with the deduction scheme and proposes
//! a phased [`MigrationStrategy`].

use crate::error::XalaResult;
use crate::mappings::{mappings_for, SourceFramework, TARGET_IMPORT};
use crate::migration::{MigrationPhase, MigrationStrategy, RiskLevel};
use crate::models::{CompatibilityTier, Complexity, SourceUnit, Severity};
use crate::rules::{any_type, color_literal, inline_style, Rule, RuleEngine};
use crate::scanner::{self, ScanOptions};
use crate::scoring;
use crate::transform::convert;
use crate::transform::Transformation;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// UI libraries recognised by import or class usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    MaterialUi,
    AntDesign,
    ChakraUi,
    StyledComponents,
    Bootstrap,
    Tailwind,
    XalaUi,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::MaterialUi => "Material-UI",
            Framework::AntDesign => "Ant Design",
            Framework::ChakraUi => "Chakra UI",
            Framework::StyledComponents => "styled-components",
            Framework::Bootstrap => "Bootstrap",
            Framework::Tailwind => "Tailwind CSS",
            Framework::XalaUi => "Xala UI System",
        }
    }

    /// Mapping table backing this framework, if any
    pub fn source_framework(&self) -> Option<SourceFramework> {
        match self {
            Framework::MaterialUi => Some(SourceFramework::MaterialUi),
            Framework::AntDesign => Some(SourceFramework::AntDesign),
            Framework::ChakraUi => Some(SourceFramework::ChakraUi),
            _ => None,
        }
    }

    /// Imports from this framework should be replaced
    pub fn is_third_party_ui(&self) -> bool {
        matches!(
            self,
            Framework::MaterialUi
                | Framework::AntDesign
                | Framework::ChakraUi
                | Framework::StyledComponents
                | Framework::Bootstrap
        )
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

static PACKAGE_PATTERNS: OnceLock<Vec<(Framework, Regex)>> = OnceLock::new();
static MODULE_SPECIFIER: OnceLock<Regex> = OnceLock::new();
static NAMED_IMPORT: OnceLock<Regex> = OnceLock::new();
static TAILWIND_CLASS: OnceLock<Regex> = OnceLock::new();
static CLASS_NAME_CONCAT: OnceLock<Regex> = OnceLock::new();
static CLASS_COMPONENT: OnceLock<Regex> = OnceLock::new();

/// Module specifier → framework
fn package_patterns() -> &'static [(Framework, Regex)] {
    PACKAGE_PATTERNS.get_or_init(|| {
        [
            (Framework::MaterialUi, r"^@(?:mui|material-ui)/"),
            (Framework::AntDesign, r"^antd(?:/|$)"),
            (Framework::ChakraUi, r"^@chakra-ui/"),
            (Framework::StyledComponents, r"^(?:styled-components|@emotion/styled)$"),
            (Framework::Bootstrap, r"^(?:react-)?bootstrap(?:/|$)"),
            (Framework::Tailwind, r"^tailwindcss(?:/|$)"),
            (Framework::XalaUi, r"^@xala-technologies/"),
        ]
        .into_iter()
        .map(|(fw, pattern)| (fw, Regex::new(pattern).expect("valid regex")))
        .collect()
    })
}

/// `from 'pkg'`, `import 'pkg'` and `require('pkg')`
fn module_specifier() -> &'static Regex {
    MODULE_SPECIFIER.get_or_init(|| {
        Regex::new(r#"(?:\bfrom\s*|\bimport\s*|\brequire\(\s*)['"]([^'"]+)['"]"#)
            .expect("valid regex")
    })
}

/// `import [Default,] { A, B as C } from 'pkg'`
fn named_import() -> &'static Regex {
    NAMED_IMPORT.get_or_init(|| {
        Regex::new(r#"import\s+(?:[\w$]+\s*,\s*)?\{([^}]*)\}\s*from\s*['"]([^'"]+)['"]"#)
            .expect("valid regex")
    })
}

fn tailwind_class() -> &'static Regex {
    TAILWIND_CLASS.get_or_init(|| {
        Regex::new(
            r#"className=["'][^"']*\b(?:flex|grid|items-center|justify-(?:center|between)|p[xy]?-\d+|m[xy]?-\d+|text-(?:xs|sm|base|lg|xl)|bg-[a-z]+-\d{2,3})\b"#,
        )
        .expect("valid regex")
    })
}

fn class_name_concat() -> &'static Regex {
    CLASS_NAME_CONCAT.get_or_init(|| {
        Regex::new(r#"className=\{\s*`[^`]*\$\{|className=\{[^}]*['"]\s*\+|className=\{[^}]*\+\s*['"]"#)
            .expect("valid regex")
    })
}

fn class_component() -> &'static Regex {
    CLASS_COMPONENT.get_or_init(|| {
        Regex::new(r"class\s+[A-Z][\w$]*\s+extends\s+(?:React\.)?(?:Component|PureComponent)\b")
            .expect("valid regex")
    })
}

/// Kinds of migration issue located by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    ThirdPartyImport,
    InlineStyles,
    HardcodedColor,
    ClassNameConcatenation,
    ClassComponent,
    AnyType,
}

impl IssueKind {
    pub fn all() -> &'static [IssueKind] {
        &[
            IssueKind::ThirdPartyImport,
            IssueKind::InlineStyles,
            IssueKind::HardcodedColor,
            IssueKind::ClassNameConcatenation,
            IssueKind::ClassComponent,
            IssueKind::AnyType,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::ThirdPartyImport => "Third-Party UI Import",
            IssueKind::InlineStyles => "Inline Styles",
            IssueKind::HardcodedColor => "Hardcoded Color",
            IssueKind::ClassNameConcatenation => "ClassName Concatenation",
            IssueKind::ClassComponent => "Class Component",
            IssueKind::AnyType => "Any Type",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::ThirdPartyImport => Severity::Error,
            IssueKind::InlineStyles | IssueKind::HardcodedColor | IssueKind::ClassComponent => {
                Severity::Warning
            }
            IssueKind::ClassNameConcatenation | IssueKind::AnyType => Severity::Info,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            IssueKind::ThirdPartyImport => {
                "Import the equivalent component from @xala-technologies/ui-system"
            }
            IssueKind::InlineStyles => "Replace the style object with utility classes",
            IssueKind::HardcodedColor => "Use a design token class such as bg-primary",
            IssueKind::ClassNameConcatenation => "Compose classes with cn() or a cva() variant",
            IssueKind::ClassComponent => "Rewrite as a function component with hooks",
            IssueKind::AnyType => "Replace any with a concrete type or unknown",
        }
    }

    /// Byte offsets and messages of every occurrence in `content`
    fn locate(&self, content: &str) -> Vec<(usize, String)> {
        let simple = |re: &Regex, message: &str| -> Vec<(usize, String)> {
            re.find_iter(content)
                .map(|m| (m.start(), message.to_string()))
                .collect()
        };
        match self {
            IssueKind::ThirdPartyImport => module_specifier()
                .captures_iter(content)
                .filter_map(|caps| {
                    let specifier = caps.get(1)?;
                    let framework = framework_for_package(specifier.as_str())?;
                    framework.is_third_party_ui().then(|| {
                        (
                            caps.get(0).map_or(specifier.start(), |m| m.start()),
                            format!("Import from '{}' ({})", specifier.as_str(), framework),
                        )
                    })
                })
                .collect(),
            IssueKind::InlineStyles => simple(inline_style(), "Inline style object"),
            IssueKind::HardcodedColor => color_literal()
                .find_iter(content)
                .map(|m| (m.start(), format!("Hardcoded color {}", m.as_str())))
                .collect(),
            IssueKind::ClassNameConcatenation => {
                simple(class_name_concat(), "className built by string concatenation")
            }
            IssueKind::ClassComponent => simple(class_component(), "Class component"),
            IssueKind::AnyType => simple(any_type(), "Use of the any type"),
        }
    }
}

fn framework_for_package(specifier: &str) -> Option<Framework> {
    package_patterns()
        .iter()
        .find(|(_, re)| re.is_match(specifier))
        .map(|(fw, _)| *fw)
}

fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

/// One located migration issue
#[derive(Debug, Clone, Serialize)]
pub struct FileIssue {
    pub file: PathBuf,
    pub line: usize,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub suggestion: String,
}

/// Where and how a framework is used
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkUsage {
    pub framework: Framework,
    pub files: usize,
    /// Named imports pulled from the framework's packages
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub file: PathBuf,
    pub score: u32,
    pub issues: usize,
}

/// Result of `migrate analyze`
#[derive(Debug, Clone, Serialize)]
pub struct MigrationAnalysis {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub frameworks: Vec<FrameworkUsage>,
    pub issues: Vec<FileIssue>,
    pub files: Vec<FileSummary>,
    /// Mean of per-file deduction scores
    pub score: u32,
    pub compatibility: CompatibilityTier,
    pub complexity: Complexity,
    pub effort: String,
    pub recommendations: Vec<String>,
}

impl MigrationAnalysis {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn uses(&self, framework: Framework) -> bool {
        self.frameworks.iter().any(|u| u.framework == framework)
    }

    /// Frameworks with a component mapping table
    pub fn mappable_frameworks(&self) -> Vec<SourceFramework> {
        self.frameworks
            .iter()
            .filter_map(|u| u.framework.source_framework())
            .collect()
    }
}

/// Frameworks referenced by a single file
pub fn detect_frameworks(content: &str) -> BTreeSet<Framework> {
    let mut found: BTreeSet<Framework> = module_specifier()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).and_then(|m| framework_for_package(m.as_str())))
        .collect();
    if tailwind_class().is_match(content) {
        found.insert(Framework::Tailwind);
    }
    found
}

/// Every migration issue in a unit, ordered by line
pub fn find_issues(unit: &SourceUnit) -> Vec<FileIssue> {
    let mut issues: Vec<FileIssue> = IssueKind::all()
        .iter()
        .flat_map(|kind| {
            kind.locate(&unit.content)
                .into_iter()
                .map(move |(offset, message)| FileIssue {
                    file: unit.path.clone(),
                    line: line_of(&unit.content, offset),
                    kind: *kind,
                    severity: kind.severity(),
                    message,
                    suggestion: kind.suggestion().to_string(),
                })
        })
        .collect();
    issues.sort_by_key(|i| i.line);
    issues
}

/// Scan `root` and analyze everything found
pub fn analyze_project(root: &Path, options: &ScanOptions) -> XalaResult<MigrationAnalysis> {
    let units = scanner::load(root, options)?;
    Ok(analyze_units(root, &units))
}

/// Aggregate already-read units into a [`MigrationAnalysis`]
pub fn analyze_units(root: &Path, units: &[SourceUnit]) -> MigrationAnalysis {
    let mut usage: BTreeMap<Framework, (usize, BTreeSet<String>)> = BTreeMap::new();
    let mut issues = Vec::new();
    let mut files = Vec::new();

    for unit in units {
        for framework in detect_frameworks(&unit.content) {
            usage.entry(framework).or_default().0 += 1;
        }
        for caps in named_import().captures_iter(&unit.content) {
            let (Some(names), Some(specifier)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(framework) = framework_for_package(specifier.as_str()) else {
                continue;
            };
            let entry = usage.entry(framework).or_default();
            entry.1.extend(
                names
                    .as_str()
                    .split(',')
                    .filter_map(|n| n.split_whitespace().next())
                    .filter(|n| !n.is_empty() && *n != "type")
                    .map(str::to_string),
            );
        }

        let file_issues = find_issues(unit);
        let score = scoring::deduction_score(file_issues.iter().map(|i| i.severity));
        debug!(
            "{}: {} issues, score {}",
            unit.path.display(),
            file_issues.len(),
            score
        );
        files.push(FileSummary {
            file: unit.path.clone(),
            score,
            issues: file_issues.len(),
        });
        issues.extend(file_issues);
    }

    let score = if files.is_empty() {
        100
    } else {
        let total: u32 = files.iter().map(|f| f.score).sum();
        (total as f64 / files.len() as f64).round() as u32
    };
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues.iter().filter(|i| i.severity == Severity::Warning).count();
    let complexity = scoring::classify_complexity(errors, warnings);

    let frameworks: Vec<FrameworkUsage> = usage
        .into_iter()
        .map(|(framework, (files, components))| FrameworkUsage {
            framework,
            files,
            components: components.into_iter().collect(),
        })
        .collect();

    let mut analysis = MigrationAnalysis {
        root: root.to_path_buf(),
        files_scanned: units.len(),
        frameworks,
        score,
        compatibility: scoring::compatibility_tier(score),
        complexity,
        effort: scoring::estimate_effort(complexity, issues.len()).to_string(),
        issues,
        files,
        recommendations: Vec::new(),
    };
    analysis.recommendations = recommendations(&analysis);
    analysis
}

fn recommendations(analysis: &MigrationAnalysis) -> Vec<String> {
    let mut out = Vec::new();
    for usage in &analysis.frameworks {
        if usage.framework.is_third_party_ui() {
            out.push(format!(
                "Replace {} components ({} files) with {} equivalents",
                usage.framework, usage.files, TARGET_IMPORT
            ));
        }
    }
    let has = |kind: IssueKind| analysis.issues.iter().any(|i| i.kind == kind);
    if has(IssueKind::InlineStyles) || has(IssueKind::HardcodedColor) {
        out.push("Move inline styles and color literals to design tokens".to_string());
    }
    if has(IssueKind::ClassComponent) {
        out.push("Convert class components to function components".to_string());
    }
    if has(IssueKind::AnyType) {
        out.push("Tighten types: remove any".to_string());
    }
    if !analysis.uses(Framework::XalaUi) {
        out.push(format!("Add {} as a dependency", TARGET_IMPORT));
    }
    out
}

/// Phased strategy for the frameworks an analysis found.
///
/// Phases are `setup` → `styles` → `components` → `cleanup`, each depending
/// on the previous one, and all of them target `components`.
pub fn propose_strategy(
    analysis: &MigrationAnalysis,
    components: &[String],
) -> XalaResult<MigrationStrategy> {
    let sources = analysis.mappable_frameworks();

    let mut setup = MigrationPhase::new("setup", "Switch imports")
        .with_description("Point third-party UI imports at the target library")
        .with_risk(RiskLevel::Medium);
    let mut renames = MigrationPhase::new("components", "Rename components")
        .with_description("Rename mapped components to their target names")
        .depends_on("styles")
        .with_risk(RiskLevel::High);

    for source in &sources {
        let package = regex::escape(source.package());
        setup = setup.with_transformation(Transformation::replace_pattern(
            format!("{} imports", source.label()),
            &format!(r#"from\s*['"]{}(?:/[^'"]*)?['"]"#, package),
            format!("from '{}'", TARGET_IMPORT),
        )?);
        for mapping in mappings_for(*source) {
            if mapping.source != mapping.target {
                renames = renames.with_transformation(Transformation::rename(
                    format!("{} -> {}", mapping.source, mapping.target),
                    mapping.source,
                    mapping.target,
                )?);
            }
        }
    }

    let mut style_set = convert::style_replacements()?;
    style_set.extend(convert::color_replacements());
    let styles = MigrationPhase::new("styles", "Replace inline styles")
        .with_description("Rewrite single-property style objects and color literals")
        .with_transformations(style_set)
        .depends_on("setup")
        .with_risk(RiskLevel::Medium);

    let cleanup = MigrationPhase::new("cleanup", "Type cleanup")
        .with_description("Replace any with unknown")
        .with_transformations(convert::typing_replacements()?)
        .depends_on("components")
        .with_risk(RiskLevel::Low);

    let name = if sources.is_empty() {
        "Xala conventions".to_string()
    } else {
        let labels: Vec<&str> = sources.iter().map(|s| s.label()).collect();
        format!("{} to Xala", labels.join(" + "))
    };

    Ok(MigrationStrategy {
        name,
        phases: vec![setup, styles, renames, cleanup]
            .into_iter()
            .map(|phase| phase.with_components(components.iter().cloned()))
            .collect(),
    })
}

/// Rule adapter so `migrate check` can score migration issues with the
/// ratio scheme
struct MigrationIssueRule(IssueKind);

impl Rule for MigrationIssueRule {
    fn name(&self) -> &'static str {
        self.0.label()
    }

    fn category(&self) -> &'static str {
        "migration"
    }

    fn severity(&self) -> Severity {
        self.0.severity()
    }

    fn description(&self) -> &'static str {
        match self.0 {
            IssueKind::ThirdPartyImport => "No third-party UI imports",
            IssueKind::InlineStyles => "No inline style objects",
            IssueKind::HardcodedColor => "No hardcoded colors",
            IssueKind::ClassNameConcatenation => "No className concatenation",
            IssueKind::ClassComponent => "No class components",
            IssueKind::AnyType => "No any types",
        }
    }

    fn message(&self) -> &'static str {
        match self.0 {
            IssueKind::ThirdPartyImport => "Imports components from a third-party UI library",
            IssueKind::InlineStyles => "Uses inline style objects",
            IssueKind::HardcodedColor => "Contains hardcoded color literals",
            IssueKind::ClassNameConcatenation => "Builds className by string concatenation",
            IssueKind::ClassComponent => "Defines class components",
            IssueKind::AnyType => "Uses the any type",
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        Some(self.0.suggestion())
    }

    fn check(&self, unit: &SourceUnit) -> anyhow::Result<bool> {
        Ok(self.0.locate(&unit.content).is_empty())
    }
}

/// Rule engine used by `migrate check`
pub fn readiness_engine() -> RuleEngine {
    let mut engine = RuleEngine::new();
    for kind in IssueKind::all() {
        engine.register(Arc::new(MigrationIssueRule(*kind)));
    }
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QualityStatus;

    const MUI_FILE: &str = r#"import React from 'react';
import { Button, TextField as Field } from '@mui/material';

export class Legacy extends React.Component {
  render() {
    return <div style={{ color: '#ff0000' }}>
      <Button className={'btn ' + size}>Go</Button>
    </div>;
  }
}
"#;

    #[test]
    fn test_detects_frameworks_from_imports() {
        let found = detect_frameworks(MUI_FILE);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![Framework::MaterialUi]);

        let mixed = "import styled from 'styled-components';\nimport { Row } from 'antd/es/grid';\n<div className=\"flex items-center\" />";
        let found = detect_frameworks(mixed);
        assert!(found.contains(&Framework::StyledComponents));
        assert!(found.contains(&Framework::AntDesign));
        assert!(found.contains(&Framework::Tailwind));
    }

    #[test]
    fn test_issues_carry_line_numbers_and_severity() {
        let unit = SourceUnit::new("src/Legacy.tsx", MUI_FILE);
        let issues = find_issues(&unit);
        let kinds: Vec<(IssueKind, usize)> = issues.iter().map(|i| (i.kind, i.line)).collect();
        assert!(kinds.contains(&(IssueKind::ThirdPartyImport, 2)));
        assert!(kinds.contains(&(IssueKind::ClassComponent, 4)));
        assert!(kinds.contains(&(IssueKind::InlineStyles, 6)));
        assert!(kinds.contains(&(IssueKind::HardcodedColor, 6)));
        assert!(kinds.contains(&(IssueKind::ClassNameConcatenation, 7)));
        let import = issues
            .iter()
            .find(|i| i.kind == IssueKind::ThirdPartyImport)
            .expect("import issue");
        assert_eq!(import.severity, Severity::Error);
        assert!(import.message.contains("@mui/material"));
    }

    #[test]
    fn test_clean_project_scores_100_high_simple() {
        let units = vec![SourceUnit::new(
            "src/Card.tsx",
            "import { Card } from '@xala-technologies/ui-system';\nexport const Box = () => <Card />;\n",
        )];
        let analysis = analyze_units(Path::new("src"), &units);
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.score, 100);
        assert_eq!(analysis.compatibility, CompatibilityTier::High);
        assert_eq!(analysis.complexity, Complexity::Simple);
        assert!(analysis.uses(Framework::XalaUi));
    }

    #[test]
    fn test_deduction_scoring_and_component_inventory() {
        let units = vec![SourceUnit::new("src/Legacy.tsx", MUI_FILE)];
        let analysis = analyze_units(Path::new("src"), &units);
        // 1 error, 3 warnings, 1 info
        assert_eq!(analysis.score, 100 - 15 - 3 * 8 - 3);
        assert_eq!(analysis.compatibility, CompatibilityTier::Low);
        let mui = analysis
            .frameworks
            .iter()
            .find(|u| u.framework == Framework::MaterialUi)
            .expect("mui detected");
        assert_eq!(mui.components, vec!["Button", "TextField"]);
        assert!(analysis.recommendations[0].contains("Material-UI"));
    }

    #[test]
    fn test_empty_project() {
        let analysis = analyze_units(Path::new("."), &[]);
        assert_eq!(analysis.files_scanned, 0);
        assert_eq!(analysis.score, 100);
        assert_eq!(analysis.effort, "< 1 hour");
    }

    #[test]
    fn test_strategy_is_ordered_and_chained() {
        let units = vec![SourceUnit::new("src/Legacy.tsx", MUI_FILE)];
        let analysis = analyze_units(Path::new("src"), &units);
        let strategy =
            propose_strategy(&analysis, &["Legacy".to_string()]).expect("strategy builds");
        let ids: Vec<&str> = strategy.phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "styles", "components", "cleanup"]);
        assert!(strategy.phases[0].dependencies.is_empty());
        assert_eq!(strategy.phases[1].dependencies, vec!["setup"]);
        assert_eq!(strategy.phases[2].risk_level, RiskLevel::High);
        assert!(strategy.phases.iter().all(|p| p.components == vec!["Legacy"]));
        assert_eq!(strategy.phases[0].transformations.len(), 1);
        assert!(strategy.phases[2]
            .transformations
            .iter()
            .any(|t| t.name == "TextField -> Input"));
        assert_eq!(strategy.name, "Material-UI to Xala");
    }

    #[test]
    fn test_readiness_engine_uses_ratio_scheme() {
        let engine = readiness_engine();
        let clean = engine.analyze(&SourceUnit::new("A.tsx", "export const A = () => null;"));
        assert_eq!(clean.score, 100);
        assert_eq!(clean.status, QualityStatus::Excellent);

        let dirty = engine.analyze(&SourceUnit::new("Legacy.tsx", MUI_FILE));
        // weights: import 3, inline 2, color 2, concat 1, class 2, any 1 = 11; only `any` passes
        assert_eq!(dirty.score, 9);
        assert_eq!(dirty.status, QualityStatus::RequiresMigration);
    }
}
