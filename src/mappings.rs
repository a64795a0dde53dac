//! Third-party component mappings and codemod text generation
//!
//! The mapping tables are static. Codemods are emitted as jscodeshift-style
//! source text for the user to review and run; nothing here executes them.

use serde::Serialize;
use std::str::FromStr;

/// Import path of the target component set
pub const TARGET_IMPORT: &str = "@xala-technologies/ui-system";

/// UI libraries with known mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFramework {
    MaterialUi,
    AntDesign,
    ChakraUi,
}

impl SourceFramework {
    pub fn all() -> &'static [SourceFramework] {
        &[
            SourceFramework::MaterialUi,
            SourceFramework::AntDesign,
            SourceFramework::ChakraUi,
        ]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SourceFramework::MaterialUi => "Material-UI",
            SourceFramework::AntDesign => "Ant Design",
            SourceFramework::ChakraUi => "Chakra UI",
        }
    }

    /// Package the source components are imported from
    pub fn package(&self) -> &'static str {
        match self {
            SourceFramework::MaterialUi => "@mui/material",
            SourceFramework::AntDesign => "antd",
            SourceFramework::ChakraUi => "@chakra-ui/react",
        }
    }
}

impl FromStr for SourceFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "material-ui" | "mui" | "materialui" => Ok(SourceFramework::MaterialUi),
            "ant-design" | "antd" => Ok(SourceFramework::AntDesign),
            "chakra-ui" | "chakra" => Ok(SourceFramework::ChakraUi),
            other => Err(format!(
                "Unknown framework '{}'. Known: material-ui, ant-design, chakra-ui",
                other
            )),
        }
    }
}

impl std::fmt::Display for SourceFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Source component name → target component name and import path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentMapping {
    pub source: String,
    pub target: String,
    pub import_path: String,
}

impl ComponentMapping {
    fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            import_path: TARGET_IMPORT.to_string(),
        }
    }
}

const MATERIAL_UI: &[(&str, &str)] = &[
    ("Button", "Button"),
    ("TextField", "Input"),
    ("Card", "Card"),
    ("Dialog", "Modal"),
    ("Grid", "Grid"),
    ("Box", "Box"),
    ("Typography", "Text"),
    ("Select", "Select"),
    ("Checkbox", "Checkbox"),
    ("Chip", "Badge"),
];

const ANT_DESIGN: &[(&str, &str)] = &[
    ("Button", "Button"),
    ("Input", "Input"),
    ("Card", "Card"),
    ("Modal", "Modal"),
    ("Row", "Stack"),
    ("Col", "Box"),
    ("Select", "Select"),
    ("Tag", "Badge"),
    ("Table", "DataTable"),
];

const CHAKRA_UI: &[(&str, &str)] = &[
    ("Button", "Button"),
    ("Input", "Input"),
    ("Box", "Box"),
    ("Flex", "Stack"),
    ("Heading", "Heading"),
    ("Text", "Text"),
    ("Modal", "Modal"),
    ("Badge", "Badge"),
];

/// Mappings for a framework pair. Unknown pairs yield an empty list.
pub fn generate_component_mapping(source: &str, target: &str) -> Vec<ComponentMapping> {
    let target_known = matches!(
        target.to_lowercase().as_str(),
        "xala" | "xala-ui" | "ui-system" | "xala-ui-system"
    );
    if !target_known {
        return Vec::new();
    }
    match source.parse::<SourceFramework>() {
        Ok(framework) => mappings_for(framework),
        Err(_) => Vec::new(),
    }
}

/// Full table for a known source framework
pub fn mappings_for(framework: SourceFramework) -> Vec<ComponentMapping> {
    let table = match framework {
        SourceFramework::MaterialUi => MATERIAL_UI,
        SourceFramework::AntDesign => ANT_DESIGN,
        SourceFramework::ChakraUi => CHAKRA_UI,
    };
    table
        .iter()
        .map(|(source, target)| ComponentMapping::new(source, target))
        .collect()
}

/// A generated, unexecuted rewrite script
#[derive(Debug, Clone, Serialize)]
pub struct Codemod {
    pub name: String,
    pub file_name: String,
    pub source: String,
}

/// Synthesize one codemod script per mapping
pub fn create_codemods(mappings: &[ComponentMapping]) -> Vec<Codemod> {
    mappings
        .iter()
        .map(|m| {
            let name = format!("{}To{}", m.source, m.target);
            let source = format!(
                r#"// Codemod: {source} -> {target}
// Run with: npx jscodeshift -t {file} <path>
module.exports = function transformer(file, api) {{
  const j = api.jscodeshift;
  const root = j(file.source);

  root
    .find(j.ImportSpecifier, {{ imported: {{ name: '{source}' }} }})
    .forEach((path) => {{
      path.node.imported.name = '{target}';
      if (path.node.local && path.node.local.name === '{source}') {{
        path.node.local.name = '{target}';
      }}
      const declaration = path.parent.node;
      declaration.source.value = '{import_path}';
    }});

  root
    .find(j.JSXIdentifier, {{ name: '{source}' }})
    .forEach((path) => {{
      path.node.name = '{target}';
    }});

  return root.toSource({{ quote: 'single' }});
}};
"#,
                source = m.source,
                target = m.target,
                import_path = m.import_path,
                file = format!("{}.codemod.js", name),
            );
            Codemod {
                file_name: format!("{}.codemod.js", name),
                name,
                source,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_ui_mapping() {
        let mappings = generate_component_mapping("material-ui", "xala");
        let text_field = mappings
            .iter()
            .find(|m| m.source == "TextField")
            .expect("TextField mapped");
        assert_eq!(text_field.target, "Input");
        assert_eq!(text_field.import_path, TARGET_IMPORT);
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(
            generate_component_mapping("antd", "xala"),
            mappings_for(SourceFramework::AntDesign)
        );
        assert_eq!(
            generate_component_mapping("Chakra UI", "xala-ui"),
            mappings_for(SourceFramework::ChakraUi)
        );
    }

    #[test]
    fn test_unknown_pairs_are_empty() {
        assert!(generate_component_mapping("bootstrap", "xala").is_empty());
        assert!(generate_component_mapping("material-ui", "vuetify").is_empty());
    }

    #[test]
    fn test_codemod_text_mentions_both_names() {
        let codemods = create_codemods(&mappings_for(SourceFramework::MaterialUi)[..2]);
        assert_eq!(codemods.len(), 2);
        assert_eq!(codemods[1].name, "TextFieldToInput");
        assert_eq!(codemods[1].file_name, "TextFieldToInput.codemod.js");
        assert!(codemods[1].source.contains("name: 'TextField'"));
        assert!(codemods[1].source.contains("path.node.name = 'Input';"));
        assert!(codemods[1].source.contains(TARGET_IMPORT));
    }
}
