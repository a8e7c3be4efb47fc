//! Invariants of statement analysis.

use cql_sema::{ErrorCode, PermissionKind, ResourceKind};
use rstest::rstest;

use crate::helpers::grant_helpers::{assert_terminal, context, grant};

#[rstest]
fn test_reserved_keyspace_rejected_for_every_permission(
    #[values("all", "alter", "create", "drop", "select", "modify", "authorize", "describe")]
    permission: &str,
    #[values("alice", "bob", "carol", "dave")] role: &str,
) {
    let mut ctx = context();
    let mut statement = grant(permission, ResourceKind::Keyspace, "system_redis", role);

    let err = statement.analyze(&mut ctx).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidArguments);
}

#[rstest]
#[case("SELECT")]
#[case("Select")]
#[case("read")]
#[case("")]
fn test_permission_lookup_is_case_sensitive(#[case] token: &str) {
    assert_eq!(PermissionKind::lookup(token), None);

    let mut ctx = context();
    let mut statement = grant(token, ResourceKind::AllKeyspaces, "", "alice");
    let err = statement.analyze(&mut ctx).unwrap_err();
    assert_eq!(err.code, ErrorCode::SyntaxError);
}

#[rstest]
#[case("select", ResourceKind::Table, "ks1.t1", "alice")]
#[case("fly", ResourceKind::Table, "ks1.t1", "alice")]
#[case("select", ResourceKind::Table, "ks1.t1", "a.b")]
#[case("select", ResourceKind::Table, "a.b.c", "alice")]
#[case("all", ResourceKind::Keyspace, "system_redis", "bob")]
#[case("all", ResourceKind::Role, "ghost", "bob")]
#[case("describe", ResourceKind::AllTables, "", "carol")]
fn test_analysis_is_all_or_nothing(
    #[case] permission: &str,
    #[case] kind: ResourceKind,
    #[case] resource: &str,
    #[case] role: &str,
) {
    let mut ctx = context();
    let mut statement = grant(permission, kind, resource, role);

    let succeeded = statement.analyze(&mut ctx).is_ok();

    assert_terminal(&statement);
    assert_eq!(succeeded, statement.analyzed().is_some());
    assert_eq!(!succeeded, ctx.diagnostics().has_errors());
}

#[test]
fn test_reanalysis_returns_same_values() {
    let mut ctx = context();
    let mut statement = grant("select", ResourceKind::Table, "ks1.t1", "alice");

    let first = statement.analyze(&mut ctx).unwrap().clone();

    // A different session view must not leak into an analyzed statement.
    let mut other = context().with_current_keyspace("elsewhere");
    let second = statement.analyze(&mut other).unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(statement.analyzed(), Some(&first));
}

#[test]
fn test_reanalysis_of_rejected_statement_reports_once() {
    let mut ctx = context();
    let mut statement = grant("fly", ResourceKind::Role, "carol", "dave");

    let first = statement.analyze(&mut ctx).unwrap_err();
    let second = statement.analyze(&mut ctx).unwrap_err();

    assert_eq!(first, second);
    assert_eq!(ctx.diagnostics().error_count(), 1);
}

#[test]
fn test_first_failure_wins() {
    // Unknown permission, malformed role and reserved keyspace all at once:
    // only the permission error surfaces.
    let mut ctx = context();
    let mut statement = grant("fly", ResourceKind::Keyspace, "system_redis", "x.y");

    let err = statement.analyze(&mut ctx).unwrap_err();

    assert_eq!(err.code, ErrorCode::SyntaxError);
    assert_eq!(ctx.diagnostics().error_count(), 1);
}
