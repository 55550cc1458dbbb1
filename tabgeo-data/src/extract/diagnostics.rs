//! Row diagnostics collected during a pass.

use std::fmt;

use super::RowError;

/// Messages surfaced to callers.
pub const SURFACED_LIMIT: usize = 10;
/// Character budget of [`Diagnostics::warning_text`].
pub const WARNING_TEXT_LIMIT: usize = 500;

/// One row-local failure, tagged with the row's geometry id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// Zero-based input row.
    pub row: usize,
    /// Geometry id of the row.
    pub geometry_id: String,
    /// What went wrong.
    pub error: RowError,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Geometry {}: {}", self.geometry_id, self.error)
    }
}

/// Every diagnostic of one pass, in the order rows were visited.
///
/// The full list stays available; [`Diagnostics::surfaced`] and
/// [`Diagnostics::warning_text`] apply the caps used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<RowDiagnostic>,
}

impl Diagnostics {
    /// An empty set of diagnostics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, row: usize, geometry_id: &str, error: RowError) {
        self.entries.push(RowDiagnostic {
            row,
            geometry_id: geometry_id.to_owned(),
            error,
        });
    }

    /// All diagnostics.
    #[must_use]
    pub fn entries(&self) -> &[RowDiagnostic] {
        &self.entries
    }

    /// Number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the pass produced no diagnostics.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows dropped because of an error.
    #[must_use]
    pub fn rejected_rows(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.error.rejects_row())
            .count()
    }

    /// The first [`SURFACED_LIMIT`] messages.
    #[must_use]
    pub fn surfaced(&self) -> Vec<String> {
        self.entries
            .iter()
            .take(SURFACED_LIMIT)
            .map(ToString::to_string)
            .collect()
    }

    /// Surfaced messages joined by newlines and cut to
    /// [`WARNING_TEXT_LIMIT`] characters. Empty when there are no
    /// diagnostics.
    #[must_use]
    pub fn warning_text(&self) -> String {
        let mut text = self.surfaced().join("\n");
        if let Some((cut, _)) = text.char_indices().nth(WARNING_TEXT_LIMIT) {
            text.truncate(cut);
        }
        text
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a RowDiagnostic;
    type IntoIter = std::slice::Iter<'a, RowDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
