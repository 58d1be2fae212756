//! Parser for quickfix.toml configuration files.
//!
//! Controls how diagnostics are converted and which fixes are offered.
//! Example:
//!
//! ```toml
//! [linter]
//! severity = "warning"
//! disable-rule-actions = "always"
//! docs-url = "https://docs.deno.com/lint/rules/"
//!
//! [rules]
//! no-var = "disable-only"
//! eqeqeq = "off"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use quickfix_diagnostics::Severity;
use quickfix_diagnostics::report::DEFAULT_DOCS_URL;
use serde::Deserialize;
use thiserror::Error;

/// File names looked up by [`QuickfixConfig::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["quickfix.toml", ".quickfix.toml"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which fixes are offered for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleMode {
    /// Rule-specific fixes and disable-rule actions.
    #[default]
    Fix,
    /// Only the disable-rule actions.
    DisableOnly,
    /// Nothing.
    Off,
}

impl<'de> Deserialize<'de> for RuleMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "fix" => Ok(RuleMode::Fix),
            "disable-only" | "disable_only" => Ok(RuleMode::DisableOnly),
            "off" | "disabled" | "disable" => Ok(RuleMode::Off),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid rule mode: {s}. Expected fix, disable-only, or off"
            ))),
        }
    }
}

/// When "disable this rule" actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisableRuleActions {
    /// Only for diagnostics reported as errors.
    #[default]
    ErrorsOnly,
    Always,
    Never,
}

impl<'de> Deserialize<'de> for DisableRuleActions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "errors-only" | "errors_only" | "error" => Ok(DisableRuleActions::ErrorsOnly),
            "always" => Ok(DisableRuleActions::Always),
            "never" => Ok(DisableRuleActions::Never),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid disable-rule-actions value: {s}. Expected errors-only, always, or never"
            ))),
        }
    }
}

fn default_docs_url() -> String {
    DEFAULT_DOCS_URL.to_string()
}

/// Settings applied to every diagnostic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinterConfig {
    /// Severity given to every converted diagnostic.
    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub disable_rule_actions: DisableRuleActions,

    /// Base URL that rule codes are appended to for documentation links.
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            severity: Severity::default(),
            disable_rule_actions: DisableRuleActions::default(),
            docs_url: default_docs_url(),
        }
    }
}

/// Root quickfix.toml configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuickfixConfig {
    #[serde(default)]
    pub linter: LinterConfig,

    /// Per-rule overrides keyed by rule code.
    #[serde(default)]
    pub rules: HashMap<String, RuleMode>,
}

impl QuickfixConfig {
    /// Parse a quickfix.toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse quickfix.toml content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Find the config file in `dir`, if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.as_ref().join(name))
            .find(|path| path.is_file())
    }

    /// Get the mode for a rule code.
    /// Returns the configured mode or the default (Fix).
    pub fn rule_mode(&self, code: &str) -> RuleMode {
        self.rules.get(code).copied().unwrap_or_default()
    }

    /// Whether disable-rule actions are offered for a diagnostic of this severity.
    pub fn offers_disable_actions(&self, severity: Severity) -> bool {
        match self.linter.disable_rule_actions {
            DisableRuleActions::ErrorsOnly => severity.is_error(),
            DisableRuleActions::Always => true,
            DisableRuleActions::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = QuickfixConfig::parse("").unwrap();
        assert_eq!(config.linter.severity, Severity::Error);
        assert_eq!(
            config.linter.disable_rule_actions,
            DisableRuleActions::ErrorsOnly
        );
        assert_eq!(config.linter.docs_url, DEFAULT_DOCS_URL);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[linter]
severity = "warning"
disable-rule-actions = "always"
docs-url = "https://lint.deno.land/rules/"

[rules]
no-var = "fix"
prefer-const = "disable-only"
eqeqeq = "off"
"#;

        let config = QuickfixConfig::parse(toml).unwrap();

        assert_eq!(config.linter.severity, Severity::Warning);
        assert_eq!(config.linter.disable_rule_actions, DisableRuleActions::Always);
        assert_eq!(config.linter.docs_url, "https://lint.deno.land/rules/");
        assert_eq!(config.rule_mode("no-var"), RuleMode::Fix);
        assert_eq!(config.rule_mode("prefer-const"), RuleMode::DisableOnly);
        assert_eq!(config.rule_mode("eqeqeq"), RuleMode::Off);
        assert_eq!(config.rule_mode("no-debugger"), RuleMode::Fix); // Default
    }

    #[test]
    fn test_values_case_insensitive() {
        let toml = r#"
[linter]
severity = "INFO"

[rules]
rule1 = "FIX"
rule2 = "Disable-Only"
rule3 = "DISABLED"
"#;
        let config = QuickfixConfig::parse(toml).unwrap();
        assert_eq!(config.linter.severity, Severity::Info);
        assert_eq!(config.rule_mode("rule1"), RuleMode::Fix);
        assert_eq!(config.rule_mode("rule2"), RuleMode::DisableOnly);
        assert_eq!(config.rule_mode("rule3"), RuleMode::Off);
    }

    #[test]
    fn test_invalid_values() {
        assert!(QuickfixConfig::parse("[rules]\nno-var = \"maybe\"").is_err());
        assert!(QuickfixConfig::parse("[linter]\nseverity = \"fatal\"").is_err());
    }

    #[test]
    fn test_disable_action_gating() {
        let mut config = QuickfixConfig::default();
        assert!(config.offers_disable_actions(Severity::Error));
        assert!(!config.offers_disable_actions(Severity::Warning));

        config.linter.disable_rule_actions = DisableRuleActions::Always;
        assert!(config.offers_disable_actions(Severity::Info));

        config.linter.disable_rule_actions = DisableRuleActions::Never;
        assert!(!config.offers_disable_actions(Severity::Error));
    }

    #[test]
    fn test_from_file_and_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(QuickfixConfig::discover(dir.path()).is_none());

        let path = dir.path().join(".quickfix.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[linter]\nseverity = \"warning\"").unwrap();

        let found = QuickfixConfig::discover(dir.path()).unwrap();
        assert_eq!(found, path);
        let config = QuickfixConfig::from_file(found).unwrap();
        assert_eq!(config.linter.severity, Severity::Warning);
    }

    #[test]
    fn test_missing_file() {
        let err = QuickfixConfig::from_file("/nonexistent/quickfix.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
