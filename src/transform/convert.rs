//! Conversion tables used by `migrate convert`
//!
//! Each table is a list of [`Transformation`]s applied in order to a whole
//! file. Style objects are only rewritten when the object holds a single
//! known property; anything else is left for manual review.

use super::Transformation;
use crate::error::{XalaError, XalaResult};
use std::str::FromStr;

/// Single-property inline style → utility class
const STYLE_CLASSES: &[(&str, &str, &str)] = &[
    ("display", "flex", "flex"),
    ("display", "inline-flex", "inline-flex"),
    ("display", "block", "block"),
    ("display", "inline-block", "inline-block"),
    ("display", "grid", "grid"),
    ("display", "none", "hidden"),
    ("flexDirection", "column", "flex-col"),
    ("flexDirection", "row", "flex-row"),
    ("alignItems", "center", "items-center"),
    ("justifyContent", "center", "justify-center"),
    ("justifyContent", "space-between", "justify-between"),
    ("textAlign", "center", "text-center"),
    ("position", "relative", "relative"),
    ("position", "absolute", "absolute"),
    ("cursor", "pointer", "cursor-pointer"),
    ("overflow", "hidden", "overflow-hidden"),
    ("fontWeight", "bold", "font-bold"),
    ("width", "100%", "w-full"),
    ("height", "100%", "h-full"),
];

/// Arbitrary-value color classes → token classes
const COLOR_TOKENS: &[(&str, &str)] = &[
    ("bg-[#ffffff]", "bg-background"),
    ("bg-[#fff]", "bg-background"),
    ("text-[#000000]", "text-foreground"),
    ("text-[#000]", "text-foreground"),
    ("text-[#6b7280]", "text-muted-foreground"),
    ("bg-[#f3f4f6]", "bg-muted"),
    ("border-[#e5e7eb]", "border-border"),
    ("bg-[#3b82f6]", "bg-primary"),
    ("text-[#3b82f6]", "text-primary"),
    ("bg-[#ef4444]", "bg-destructive"),
    ("text-[#ef4444]", "text-destructive"),
];

/// Rewrites `style={{ prop: 'value' }}` to `className="class"` for known pairs
pub fn style_replacements() -> XalaResult<Vec<Transformation>> {
    STYLE_CLASSES
        .iter()
        .map(|(prop, value, class)| {
            let pattern = format!(
                r#"style=\{{\{{\s*{}:\s*['"]{}['"]\s*,?\s*\}}\}}"#,
                regex::escape(prop),
                regex::escape(value)
            );
            Transformation::replace_pattern(
                format!("style {}: {}", prop, value),
                &pattern,
                format!(r#"className="{}""#, class),
            )
        })
        .collect()
}

/// Literal swaps of arbitrary hex classes for design tokens
pub fn color_replacements() -> Vec<Transformation> {
    COLOR_TOKENS
        .iter()
        .map(|(from, to)| Transformation::replace(format!("color {}", from), *from, *to))
        .collect()
}

/// Typing cleanups: `any` annotations become `unknown`
pub fn typing_replacements() -> XalaResult<Vec<Transformation>> {
    Ok(vec![
        Transformation::replace_pattern("any annotation", r":\s*any\b", ": unknown")?,
        Transformation::replace_pattern("any assertion", r"\bas\s+any\b", "as unknown")?,
    ])
}

/// Target platforms known to the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    React,
    ReactNative,
    Vue,
    Angular,
    Svelte,
    Electron,
}

impl FromStr for Platform {
    type Err = XalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "react" => Ok(Platform::React),
            "react-native" | "native" => Ok(Platform::ReactNative),
            "vue" => Ok(Platform::Vue),
            "angular" => Ok(Platform::Angular),
            "svelte" => Ok(Platform::Svelte),
            "electron" => Ok(Platform::Electron),
            _ => Err(XalaError::UnsupportedPlatform {
                platform: s.to_string(),
                supported: "react".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::React => write!(f, "react"),
            Platform::ReactNative => write!(f, "react-native"),
            Platform::Vue => write!(f, "vue"),
            Platform::Angular => write!(f, "angular"),
            Platform::Svelte => write!(f, "svelte"),
            Platform::Electron => write!(f, "electron"),
        }
    }
}

/// Full conversion set for a platform. Only React markup can be converted.
pub fn conversion_set(platform: Platform) -> XalaResult<Vec<Transformation>> {
    match platform {
        Platform::React => {
            let mut set = style_replacements()?;
            set.extend(color_replacements());
            set.extend(typing_replacements()?);
            Ok(set)
        }
        other => Err(XalaError::UnsupportedPlatform {
            platform: other.to_string(),
            supported: "react".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::apply_all;

    #[test]
    fn test_display_flex_becomes_class_name() {
        let set = style_replacements().expect("tables compile");
        let (out, applied) = apply_all("<div style={{ display: 'flex' }}>x</div>", &set);
        assert_eq!(out, r#"<div className="flex">x</div>"#);
        assert_eq!(applied, vec!["style display: flex"]);
    }

    #[test]
    fn test_double_quotes_and_trailing_comma() {
        let set = style_replacements().expect("tables compile");
        let (out, _) = apply_all(r#"<span style={{width: "100%",}} />"#, &set);
        assert_eq!(out, r#"<span className="w-full" />"#);
    }

    #[test]
    fn test_multi_property_styles_are_left_alone() {
        let set = style_replacements().expect("tables compile");
        let input = "<div style={{ display: 'flex', gap: 8 }} />";
        let (out, applied) = apply_all(input, &set);
        assert_eq!(out, input);
        assert!(applied.is_empty());
    }

    #[test]
    fn test_color_tokens() {
        let (out, _) = apply_all(
            r#"<p className="text-[#6b7280] bg-[#fff]" />"#,
            &color_replacements(),
        );
        assert_eq!(out, r#"<p className="text-muted-foreground bg-background" />"#);
    }

    #[test]
    fn test_only_react_is_convertible() {
        assert!(conversion_set(Platform::React).is_ok());
        let err = conversion_set(Platform::Vue).expect_err("vue unsupported");
        assert!(matches!(err, XalaError::UnsupportedPlatform { .. }));
        assert!("cobol".parse::<Platform>().is_err());
        assert_eq!("React".parse::<Platform>().expect("parse"), Platform::React);
    }
}
