//! Recoverable merge findings. Duplicates never stop the merge; the later
//! record takes the index slot and the conflict is recorded here.

use std::fmt;

use serde::Serialize;

/// Position and aliases of an input record, enough to identify it in a
/// diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRef {
    pub index: usize,
    pub aliases: Vec<String>,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}]", self.index, self.aliases.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MergeDiagnostic {
    DuplicateAlias {
        alias: String,
        previous: RecordRef,
        current: RecordRef,
    },
    DuplicateCodepoint {
        codepoint: String,
        previous: RecordRef,
        current: RecordRef,
    },
}

impl MergeDiagnostic {
    pub fn key(&self) -> &str {
        match self {
            Self::DuplicateAlias { alias, .. } => alias,
            Self::DuplicateCodepoint { codepoint, .. } => codepoint,
        }
    }

    /// The record already holding the key when the conflict was found.
    pub fn previous(&self) -> &RecordRef {
        match self {
            Self::DuplicateAlias { previous, .. } | Self::DuplicateCodepoint { previous, .. } => {
                previous
            }
        }
    }

    /// The record that took over the key.
    pub fn current(&self) -> &RecordRef {
        match self {
            Self::DuplicateAlias { current, .. } | Self::DuplicateCodepoint { current, .. } => {
                current
            }
        }
    }
}

impl fmt::Display for MergeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAlias {
                alias,
                previous,
                current,
            } => write!(f, "duplicate emojis {current} and {previous} for alias '{alias}'"),
            Self::DuplicateCodepoint {
                codepoint,
                previous,
                current,
            } => write!(
                f,
                "duplicate emojis {current} and {previous} for codepoint '{codepoint}'"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub diagnostics: Vec<MergeDiagnostic>,
}

impl MergeReport {
    pub fn push(&mut self, diagnostic: MergeDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn duplicate_aliases(&self) -> impl Iterator<Item = &MergeDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| matches!(diag, MergeDiagnostic::DuplicateAlias { .. }))
    }

    pub fn duplicate_codepoints(&self) -> impl Iterator<Item = &MergeDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| matches!(diag, MergeDiagnostic::DuplicateCodepoint { .. }))
    }
}
