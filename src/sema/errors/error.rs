//! Semantic error types
//!
//! A [`SemanticError`] always carries the span of the statement being
//! analyzed, never the span of the sub-expression that failed.

use smol_str::SmolStr;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::Span;
use crate::sema::ObjectKind;

/// A located semantic error, surfaced to the client unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct SemanticError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Location of the statement the error was raised for
    pub span: Span,
}

impl SemanticError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }

    /// Format the error for display, including its location
    pub fn format(&self) -> String {
        format!("{} at {}: {}", self.code, self.span, self.message)
    }
}

/// Failures of qualified-name resolution.
///
/// These have no location of their own; the statement attaches its span when
/// converting them with [`NameError::at`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Missing {kind} name")]
    Empty { kind: ObjectKind },

    #[error("Empty identifier in {kind} name '{name}'")]
    EmptyPart { kind: ObjectKind, name: String },

    #[error("Invalid {kind} name '{name}': expected at most {max} part(s), found {found}")]
    TooManyParts {
        kind: ObjectKind,
        name: String,
        max: usize,
        found: usize,
    },

    #[error("No keyspace specified for table '{table}' and no current keyspace is set")]
    NoKeyspace { table: SmolStr },

    #[error("Role '{0}' does not exist")]
    UndeclaredRole(SmolStr),
}

impl NameError {
    /// Attach the statement location, producing the client-facing error.
    pub fn at(self, span: Span) -> SemanticError {
        SemanticError::new(ErrorCode::NameResolutionError, self.to_string(), span)
    }
}
