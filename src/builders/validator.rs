use anyhow::Result;
use std::collections::HashSet;

use crate::builders::patterns::ContentPattern;
use crate::core::config;

/// The `ConfigValidator` trait defines the public interface for validating
/// the scan configuration descriptor.
///
/// This trait allows different validation strategies, such as a strict
/// validator or a more permissive one, to adhere to a common set of
/// methods.
pub trait ConfigValidator {
    /// Performs a full validation of the `ScanConfig` and returns a list
    /// of issues found.
    ///
    /// # Arguments
    /// * `config`: The `ScanConfig` to be validated.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` containing a vector of strings, where each
    /// string describes a specific validation issue.
    fn validate_config(&self, config: &config::ScanConfig) -> Result<Vec<String>>;

    /// Validates a single content pattern string and returns a list of
    /// issues.
    fn validate_pattern(&self, pattern: &str) -> Result<Vec<String>>;
}

/// The `StandardValidator` is a concrete implementation of `ConfigValidator`.
///
/// It performs the structural checks a descriptor must pass to be useful
/// to the downstream style tool: a non-empty content list, well-formed
/// glob syntax, and sane theme/plugin entries.
pub struct StandardValidator;

impl StandardValidator {
    /// Creates a new instance of `StandardValidator`.
    pub fn new() -> Self {
        Self
    }

    /// Checks for exact duplicate patterns in the content list.
    ///
    /// Duplicates are harmless to matching (set semantics in practice)
    /// but usually indicate a copy-paste mistake, so they are reported
    /// as warnings rather than silently deduplicated.
    fn check_duplicate_patterns(&self, content: &[String]) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for pattern in content {
            if !seen.insert(pattern.as_str()) {
                warnings.push(format!("Duplicate content pattern: {pattern}"));
            }
        }
        warnings
    }

    fn check_theme(&self, config: &config::ScanConfig) -> Vec<String> {
        let mut issues = Vec::new();

        for (category, tokens) in &config.theme.extend {
            if category.trim().is_empty() {
                issues.push("Theme category name cannot be empty".to_string());
            }
            if tokens.is_empty() {
                issues.push(format!("Theme category '{category}' has no overrides"));
            }
            for (token, value) in tokens {
                if token.trim().is_empty() {
                    issues.push(format!("Empty token name in theme category '{category}'"));
                }
                if value.trim().is_empty() {
                    issues.push(format!(
                        "Theme override {category}.{token} has an empty value"
                    ));
                }
            }
        }
        issues
    }

    fn check_plugins(&self, config: &config::ScanConfig) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for plugin in &config.plugins {
            if plugin.name.trim().is_empty() {
                issues.push("Plugin name cannot be empty".to_string());
            }
            if !seen.insert(plugin.name.as_str()) {
                issues.push(format!("Duplicate plugin: {}", plugin.name));
            }
        }
        issues
    }
}

impl ConfigValidator for StandardValidator {
    /// The main public method for validating the entire descriptor.
    ///
    /// It orchestrates multiple checks, including:
    /// - Version compatibility.
    /// - The non-empty content invariant: an empty list would make the
    ///   downstream tool find no class usages and strip every style.
    /// - Duplicate patterns.
    /// - The glob syntax of each individual pattern.
    /// - Theme override and plugin entry sanity.
    fn validate_config(&self, config: &config::ScanConfig) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if config.version != config::CONFIG_VERSION {
            issues.push(format!("Unsupported config version: {}", config.version));
        }

        if config.content.is_empty() {
            issues.push(
                "Content list is empty: the downstream tool will match no files \
                 and emit an empty stylesheet"
                    .to_string(),
            );
        }

        issues.extend(self.check_duplicate_patterns(&config.content));

        for pattern in &config.content {
            let pattern_issues = self.validate_pattern(pattern)?;
            issues.extend(pattern_issues);
        }

        issues.extend(self.check_theme(config));
        issues.extend(self.check_plugins(config));

        Ok(issues)
    }

    /// Validates a single pattern's glob syntax and checks for entries
    /// that are well-formed but almost certainly a mistake.
    fn validate_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if let Err(e) = ContentPattern::check(pattern) {
            issues.push(format!("Invalid pattern '{pattern}': {e:#}"));
            return Ok(issues);
        }

        if pattern.starts_with("../") {
            issues.push(format!(
                "Pattern '{pattern}' reaches outside the project root; \
                 patterns are relative to the descriptor's directory"
            ));
        }
        if pattern == "**" || pattern == "**/*" {
            issues.push(format!(
                "Pattern '{pattern}' matches every file; scanning will be slow"
            ));
        }

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ScanConfig;
    use std::collections::BTreeMap;

    #[test]
    fn test_default_config_is_valid() {
        let validator = StandardValidator::new();
        let issues = validator.validate_config(&ScanConfig::default()).unwrap();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_empty_content_reported() {
        let mut config = ScanConfig::default();
        config.content.clear();

        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("Content list is empty")));
    }

    #[test]
    fn test_duplicate_patterns_reported() {
        let mut config = ScanConfig::default();
        config.content.push("**/*.js".to_string());

        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("Duplicate content pattern")));
    }

    #[test]
    fn test_invalid_glob_reported() {
        let mut config = ScanConfig::default();
        config.content.push("templates/[".to_string());

        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("Invalid pattern")));
    }

    #[test]
    fn test_empty_theme_value_reported() {
        let mut config = ScanConfig::default();
        let mut colors = BTreeMap::new();
        colors.insert("primary".to_string(), "".to_string());
        config.theme.extend.insert("colors".to_string(), colors);

        let validator = StandardValidator::new();
        let issues = validator.validate_config(&config).unwrap();
        assert!(issues.iter().any(|i| i.contains("colors.primary")));
    }
}
