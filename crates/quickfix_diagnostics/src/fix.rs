//! Candidate fixes offered for a diagnostic.

use quickfix_source_file::SourceDocument;
use serde::{Deserialize, Serialize};

use crate::{Diagnostic, Edit};

/// What selecting a fix does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, is_macro::Is)]
#[serde(rename_all = "kebab-case")]
pub enum FixKind {
    /// Applies text edits to the document.
    QuickFix,
    /// Carries no edits; the host runs the attached command.
    Empty,
}

/// A host-side action attached to a fix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "kebab-case")]
pub enum Command {
    OpenUrl(String),
}

/// A titled set of edits resolving one diagnostic.
///
/// Edits never overlap and always refer to the document snapshot the fix
/// was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    title: String,
    kind: FixKind,
    edits: Vec<Edit>,
    diagnostic: Diagnostic,
    is_preferred: bool,
    command: Option<Command>,
}

impl Fix {
    /// A preferred fix made of `edits`.
    pub fn new(title: impl Into<String>, diagnostic: &Diagnostic, edits: Vec<Edit>) -> Self {
        Self {
            title: title.into(),
            kind: FixKind::QuickFix,
            edits,
            diagnostic: diagnostic.clone(),
            is_preferred: true,
            command: None,
        }
    }

    /// A preferred fix made of a single edit.
    pub fn single(title: impl Into<String>, diagnostic: &Diagnostic, edit: Edit) -> Self {
        Self::new(title, diagnostic, vec![edit])
    }

    /// An edit-free action that runs `command`.
    pub fn command(title: impl Into<String>, diagnostic: &Diagnostic, command: Command) -> Self {
        Self {
            title: title.into(),
            kind: FixKind::Empty,
            edits: Vec::new(),
            diagnostic: diagnostic.clone(),
            is_preferred: false,
            command: Some(command),
        }
    }

    #[must_use]
    pub fn not_preferred(mut self) -> Self {
        self.is_preferred = false;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> FixKind {
        self.kind
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn is_preferred(&self) -> bool {
        self.is_preferred
    }

    pub fn action(&self) -> Option<&Command> {
        self.command.as_ref()
    }

    /// Whether any two edits of this fix overlap.
    pub fn has_overlapping_edits(&self) -> bool {
        self.edits
            .iter()
            .enumerate()
            .any(|(i, edit)| self.edits[i + 1..].iter().any(|other| edit.overlaps(other)))
    }

    /// Apply the fix to `document`, returning the new text.
    pub fn apply(&self, document: &SourceDocument) -> Option<String> {
        apply_edits(document, &self.edits)
    }
}

/// Apply non-overlapping edits to a document snapshot.
///
/// Returns `None` if an edit falls outside the document or two edits overlap.
pub fn apply_edits(document: &SourceDocument, edits: &[Edit]) -> Option<String> {
    let mut resolved = edits
        .iter()
        .map(|edit| {
            let start = document.offset(edit.range().start)?;
            let end = document.offset(edit.range().end)?;
            Some((start, end, edit.content()))
        })
        .collect::<Option<Vec<_>>>()?;
    resolved.sort_by_key(|(start, end, _)| (*start, *end));

    let source = document.text();
    let mut output = String::with_capacity(source.len());
    let mut last_end = 0;
    for (index, (start, end, content)) in resolved.iter().enumerate() {
        if *start < last_end || (index > 0 && start == end && resolved[index - 1].0 == *start) {
            return None;
        }
        output.push_str(&source[last_end..*start]);
        output.push_str(content);
        last_end = *end;
    }
    output.push_str(&source[last_end..]);
    Some(output)
}
