//! Built-in naming rule patterns.
//!
//! This module provides the pre-defined regex patterns behind the style
//! guide's naming conventions. Each rule applies to exactly one path role.

use regex::Regex;

use super::PathRole;

/// Source file extensions the component and helper rules apply to.
pub const CODE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// A compiled naming rule.
#[derive(Debug)]
pub struct NamingRule {
    /// Name of the rule for identification.
    pub name: &'static str,

    /// Description of what this rule enforces.
    pub description: &'static str,

    /// The role this rule applies to.
    pub role: PathRole,

    /// The raw pattern source, kept for display.
    pub pattern: &'static str,

    /// The compiled regex.
    regex: Regex,
}

impl NamingRule {
    /// Create a new naming rule.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid. Built-in patterns are static,
    /// so a failure here is a programming error.
    #[must_use]
    pub fn new(
        name: &'static str,
        description: &'static str,
        role: PathRole,
        pattern: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            role,
            pattern,
            regex: Regex::new(pattern).expect("Invalid naming rule pattern"),
        }
    }

    /// Check if a name satisfies this rule.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Get all built-in naming rules, one per path role.
#[must_use]
pub fn builtin_rules() -> Vec<NamingRule> {
    vec![
        NamingRule::new(
            "folder_dash_case",
            "Folder names are dash-case (lowercase words separated by hyphens)",
            PathRole::Folder,
            r"^[a-z0-9]+(-[a-z0-9]+)*$",
        ),
        NamingRule::new(
            "component_upper_camel",
            "Component file names are UpperCamelCase (index files exempt)",
            PathRole::Component,
            r"^[A-Z][A-Za-z0-9]*$",
        ),
        NamingRule::new(
            "helper_lower_camel",
            "Helper file names are plural lowerCamelCase (plural is advisory)",
            PathRole::Helper,
            r"^[a-z][a-zA-Z0-9]*$",
        ),
        NamingRule::new(
            "asset_lower_camel",
            "Asset file names are lowerCamelCase, density suffixes allowed",
            PathRole::Asset,
            r"^[a-z][a-zA-Z0-9]*(@[0-9]+x)?$",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> NamingRule {
        builtin_rules()
            .into_iter()
            .find(|r| r.name == name)
            .unwrap()
    }

    #[test]
    fn test_folder_rule_accepts_dash_case() {
        let folder = rule("folder_dash_case");

        assert!(folder.matches("components"));
        assert!(folder.matches("common"));
        assert!(folder.matches("user-profile"));
        assert!(folder.matches("v2-screens"));
        assert!(folder.matches("a"));
    }

    #[test]
    fn test_folder_rule_rejects_uppercase_and_underscores() {
        let folder = rule("folder_dash_case");

        assert!(!folder.matches("Components"));
        assert!(!folder.matches("userProfile"));
        assert!(!folder.matches("user_profile"));
        assert!(!folder.matches("user--profile"));
        assert!(!folder.matches("-leading"));
        assert!(!folder.matches("trailing-"));
        assert!(!folder.matches(""));
    }

    #[test]
    fn test_component_rule_accepts_upper_camel() {
        let component = rule("component_upper_camel");

        assert!(component.matches("Home"));
        assert!(component.matches("UserProfile"));
        assert!(component.matches("Nav2Bar"));
        assert!(component.matches("A"));
    }

    #[test]
    fn test_component_rule_rejects_other_casings() {
        let component = rule("component_upper_camel");

        assert!(!component.matches("home"));
        assert!(!component.matches("userProfile"));
        assert!(!component.matches("User_Profile"));
        assert!(!component.matches("user-profile"));
        assert!(!component.matches(""));
    }

    #[test]
    fn test_helper_rule_accepts_lower_camel() {
        let helper = rule("helper_lower_camel");

        assert!(helper.matches("constants"));
        assert!(helper.matches("dateUtils"));
        assert!(helper.matches("util"));
    }

    #[test]
    fn test_helper_rule_rejects_other_casings() {
        let helper = rule("helper_lower_camel");

        assert!(!helper.matches("Constants"));
        assert!(!helper.matches("date_utils"));
        assert!(!helper.matches("date-utils"));
    }

    #[test]
    fn test_asset_rule_accepts_lower_camel_and_density_suffixes() {
        let asset = rule("asset_lower_camel");

        assert!(asset.matches("logo"));
        assert!(asset.matches("splashScreen"));
        assert!(asset.matches("icon@2x"));
        assert!(asset.matches("icon@3x"));
    }

    #[test]
    fn test_asset_rule_rejects_other_casings() {
        let asset = rule("asset_lower_camel");

        assert!(!asset.matches("Logo"));
        assert!(!asset.matches("splash_screen"));
        assert!(!asset.matches("splash-screen"));
        assert!(!asset.matches("@2x"));
    }

    #[test]
    fn test_builtin_rules_cover_each_role_once() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 4);

        for role in [
            PathRole::Folder,
            PathRole::Component,
            PathRole::Helper,
            PathRole::Asset,
        ] {
            assert_eq!(rules.iter().filter(|r| r.role == role).count(), 1);
        }
    }

    #[test]
    fn test_builtin_rules_have_names_and_descriptions() {
        for rule in builtin_rules() {
            assert!(!rule.name.is_empty());
            assert!(!rule.description.is_empty());
            assert!(!rule.pattern.is_empty());
        }
    }

    #[test]
    fn test_code_extensions() {
        assert!(CODE_EXTENSIONS.contains(&"js"));
        assert!(CODE_EXTENSIONS.contains(&"tsx"));
        assert!(!CODE_EXTENSIONS.contains(&"py"));
    }
}
