//! Error code definitions for semantic diagnostics
//!
//! The set is closed: every failure of permission-statement analysis maps to
//! exactly one of these codes, and the code is what the client sees.

use std::fmt;

/// Error codes for semantic diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unrecognized keyword, e.g. an unknown permission name
    SyntaxError,
    /// A reference forbidden by a hard rule (reserved keyspace)
    InvalidArguments,
    /// Malformed qualified name, missing default keyspace or undeclared role
    NameResolutionError,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "SYNTAX_ERROR")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SyntaxError => "SYNTAX_ERROR",
            Self::InvalidArguments => "INVALID_ARGUMENTS",
            Self::NameResolutionError => "NAME_RESOLUTION_ERROR",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax error",
            Self::InvalidArguments => "invalid arguments",
            Self::NameResolutionError => "name resolution error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
