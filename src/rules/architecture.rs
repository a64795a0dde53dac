//! Architecture rules: pure components and ref forwarding

use super::{interactive_element, Rule};
use crate::models::{Severity, SourceUnit};
use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

static STATEFUL_HOOK: OnceLock<Regex> = OnceLock::new();

fn stateful_hook() -> &'static Regex {
    STATEFUL_HOOK.get_or_init(|| {
        Regex::new(r"\b(?:useState|useEffect|useReducer|useLayoutEffect)\s*\(").expect("valid regex")
    })
}

/// Components under the configured directories must not own state or effects.
pub struct PureComponentRule {
    dirs: Vec<String>,
}

impl PureComponentRule {
    pub fn new(dirs: Vec<String>) -> Self {
        Self { dirs }
    }

    fn is_pure_component(&self, unit: &SourceUnit) -> bool {
        let in_pure_dir = unit.path.components().any(|c| {
            let part = c.as_os_str().to_string_lossy();
            self.dirs.iter().any(|d| *d == part)
        });
        let name = unit.base_name();
        in_pure_dir && !name.ends_with("Provider") && !name.ends_with("Container")
    }
}

impl Rule for PureComponentRule {
    fn name(&self) -> &'static str {
        "Pure Component"
    }
    fn category(&self) -> &'static str {
        "architecture"
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
    fn description(&self) -> &'static str {
        "Presentational component has no local state or effects"
    }
    fn message(&self) -> &'static str {
        "State or effect hooks found in a pure presentational component"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Lift state into a container or provider and pass values through props")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !self.is_pure_component(unit) {
            return Ok(true);
        }
        Ok(!stateful_hook().is_match(&unit.content))
    }
}

/// Components that render native interactive elements should forward refs.
pub struct ForwardRefRule;

impl Rule for ForwardRefRule {
    fn name(&self) -> &'static str {
        "Forward Ref"
    }
    fn category(&self) -> &'static str {
        "architecture"
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
    fn description(&self) -> &'static str {
        "Interactive elements are reachable through a forwarded ref"
    }
    fn message(&self) -> &'static str {
        "Component renders interactive elements without forwardRef"
    }
    fn suggestion(&self) -> Option<&'static str> {
        Some("Wrap the component in React.forwardRef and attach the ref to the native element")
    }

    fn check(&self, unit: &SourceUnit) -> Result<bool> {
        if !interactive_element().is_match(&unit.content) {
            return Ok(true);
        }
        Ok(unit.content.contains("forwardRef"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pure_rule() -> PureComponentRule {
        PureComponentRule::new(vec!["components".to_string()])
    }

    #[test]
    fn test_state_hook_in_component_dir_fails() {
        let unit = SourceUnit::new(
            "src/components/Toggle.tsx",
            "export const Toggle = () => { const [on, setOn] = useState(false); };",
        );
        assert!(!pure_rule().check(&unit).expect("check"));
    }

    #[test]
    fn test_state_hook_outside_component_dir_passes() {
        let unit = SourceUnit::new(
            "src/pages/Settings.tsx",
            "const [on, setOn] = useState(false);",
        );
        assert!(pure_rule().check(&unit).expect("check"));
    }

    #[test]
    fn test_providers_may_hold_state() {
        let unit = SourceUnit::new(
            "src/components/ThemeProvider.tsx",
            "useEffect(() => {}, []);",
        );
        assert!(pure_rule().check(&unit).expect("check"));
    }

    #[test]
    fn test_use_memo_is_not_state() {
        let unit = SourceUnit::new("src/components/List.tsx", "const x = useMemo(() => 1, []);");
        assert!(pure_rule().check(&unit).expect("check"));
    }

    #[test]
    fn test_button_without_forward_ref_fails() {
        let unit = SourceUnit::new("Button.tsx", "export const Button = () => <button />;");
        assert!(!ForwardRefRule.check(&unit).expect("check"));
    }

    #[test]
    fn test_button_with_forward_ref_passes() {
        let unit = SourceUnit::new(
            "Button.tsx",
            "export const Button = forwardRef((p, ref) => <button ref={ref} />);",
        );
        assert!(ForwardRefRule.check(&unit).expect("check"));
    }
}
