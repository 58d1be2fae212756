//! Diagnostic, edit and fix types shared by the fix providers and hosts.

mod diagnostic;
mod edit;
mod fix;
pub mod report;

pub use diagnostic::{DIAGNOSTIC_SOURCE, Diagnostic, Severity};
pub use edit::Edit;
pub use fix::{Command, Fix, FixKind, apply_edits};
pub use report::{LintError, LintMessage, LintReport, ReportError, rule_docs_url};
