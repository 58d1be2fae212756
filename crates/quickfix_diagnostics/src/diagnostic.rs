//! Normalized diagnostics.

use std::fmt;
use std::str::FromStr;

use quickfix_source_file::Range;
use serde::{Deserialize, Serialize};

/// Source tag carried by diagnostics converted from `deno lint` output.
pub const DIAGNOSTIC_SOURCE: &str = "deno-lint";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, is_macro::Is)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" | "information" => Ok(Severity::Info),
            _ => Err(format!(
                "Invalid severity: {s}. Expected error, warning, or info"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule code, e.g. `no-var`.
    pub code: String,
    pub message: String,
    pub range: Range,
    pub severity: Severity,
    /// Suggested remedy reported alongside the message.
    pub hint: Option<String>,
    pub docs_url: Option<String>,
    /// Producer of the diagnostic.
    pub source: String,
}

impl Diagnostic {
    pub fn new(code: impl Into<String>, message: impl Into<String>, range: Range) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            range,
            severity: Severity::default(),
            hint: None,
            docs_url: None,
            source: DIAGNOSTIC_SOURCE.to_string(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_case_insensitive() {
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_builder() {
        let diagnostic = Diagnostic::new("no-var", "`var` keyword is not allowed.", Range::default())
            .with_hint("Use `let` instead")
            .with_severity(Severity::Warning);
        assert_eq!(diagnostic.hint(), Some("Use `let` instead"));
        assert!(diagnostic.severity.is_warning());
        assert_eq!(diagnostic.source, DIAGNOSTIC_SOURCE);
    }
}
