//! Helpers for building statements and contexts in analysis tests.

use std::sync::Arc;

use cql_sema::{GrantStatement, MemoryCatalog, RawName, ResourceKind, SemContext, Span};

/// Roles declared by [`catalog`].
pub const DECLARED_ROLES: [&str; 4] = ["alice", "bob", "carol", "dave"];

/// A catalog declaring [`DECLARED_ROLES`].
pub fn catalog() -> Arc<MemoryCatalog> {
    Arc::new(MemoryCatalog::with_roles(DECLARED_ROLES))
}

/// A context over [`catalog`] with no current keyspace.
pub fn context() -> SemContext {
    SemContext::new(catalog())
}

/// Span of a single-line statement of `len` characters.
pub fn line_span(line: usize, len: usize) -> Span {
    Span::from_coords(line, 0, line, len)
}

/// Build `GRANT <permission> ON <kind> <resource> TO <role>` as the parser would.
///
/// `resource` and `role` are dotted names; pass `""` for whole-category kinds.
pub fn grant(permission: &str, kind: ResourceKind, resource: &str, role: &str) -> GrantStatement {
    GrantStatement::grant(
        permission,
        kind,
        RawName::from_dotted(resource),
        RawName::from_dotted(role),
        line_span(0, 48),
    )
}

/// Build `REVOKE <permission> ON <kind> <resource> FROM <role>`.
pub fn revoke(permission: &str, kind: ResourceKind, resource: &str, role: &str) -> GrantStatement {
    GrantStatement::revoke(
        permission,
        kind,
        RawName::from_dotted(resource),
        RawName::from_dotted(role),
        line_span(0, 48),
    )
}

/// Assert the statement is either fully analyzed or rejected with a message.
pub fn assert_terminal(statement: &GrantStatement) {
    assert!(statement.is_analyzed(), "statement was never analyzed");
    match (statement.analyzed(), statement.rejection()) {
        (Some(_), None) => {}
        (None, Some(err)) => assert!(!err.message.is_empty(), "rejection without message"),
        other => panic!("statement in mixed state: {:?}", other),
    }
}
