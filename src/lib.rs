//! # cql-sema
//!
//! Semantic analysis of CQL permission statements
//! (`GRANT <permission> ON <resource> TO <role>` and its `REVOKE` twin).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! sema      → Permission vocabulary, name resolution, resource validation,
//!   ↓         GRANT/REVOKE analysis, semantic context, diagnostics
//! core      → Identifier text utilities
//!   ↓
//! base      → Primitives (Position, Span, constants)
//! ```
//!
//! Parsing the statement text and executing the analyzed statement are the
//! concern of the surrounding query engine.

// ============================================================================
// MODULES (dependency order: base → core → sema)
// ============================================================================

/// Foundation types: Position, Span, domain constants
pub mod base;

/// Identifier text utilities
pub mod core;

/// Semantic analysis of permission statements
pub mod sema;

// Re-export foundation types
pub use base::{Position, Span};

// Re-export the analysis entry points
pub use sema::{
    AnalyzedGrant, Catalog, ErrorCode, GrantStatement, MemoryCatalog, PermissionKind, RawName,
    ResourceKind, SemContext, SemanticError, analyze_all,
};
