//! Diagnostics — the error-reporting channel of a semantic context.

use super::errors::{ErrorCode, SemanticError};

/// Collects the errors reported while analyzing statements.
///
/// Analysis aborts on the first error of a statement, so a collector holds at
/// most one entry per analyzed statement.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<SemanticError>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: SemanticError) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[SemanticError] {
        &self.diagnostics
    }

    /// Get diagnostics carrying a specific code.
    pub fn diagnostics_with_code(&self, code: ErrorCode) -> Vec<&SemanticError> {
        self.diagnostics.iter().filter(|d| d.code == code).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<SemanticError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}
