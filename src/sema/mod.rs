//! # Semantic Analysis
//!
//! Turns parsed GRANT/REVOKE statements into checked facts: a permission
//! keyword becomes a [`PermissionKind`], dotted names become resolved
//! keyspace/table/role references, and reserved resources are refused.
//!
//! ```text
//! GrantStatement::analyze
//!     │
//!     ├─ PermissionKind::lookup      ← SYNTAX_ERROR
//!     ├─ resolve_name(role)          ← NAME_RESOLUTION_ERROR
//!     └─ ResourceKind::validate      ← INVALID_ARGUMENTS / NAME_RESOLUTION_ERROR
//! ```

mod context;
mod diagnostics;
pub mod errors;
mod grant;
mod name;
mod permission;
mod resource;

pub use context::{Catalog, MemoryCatalog, SemContext};
pub use diagnostics::DiagnosticCollector;
pub use errors::{ErrorCode, NameError, SemanticError};
pub use grant::{AnalyzedGrant, GrantStatement, PermissionAction, analyze_all};
pub use name::{ObjectKind, RawName, ResolvedName, resolve_name};
pub use permission::PermissionKind;
pub use resource::{ResolvedResource, ResourceKind};
