//! Parallel analysis over a shared catalog.

use std::sync::Arc;

use cql_sema::{ErrorCode, ResourceKind, SemContext, analyze_all};

use crate::helpers::grant_helpers::{catalog, grant};

#[test]
fn test_analyze_all_preserves_order_and_isolates_failures() {
    let catalog = catalog();
    let mut statements = vec![
        grant("select", ResourceKind::Table, "ks1.t1", "alice"),
        grant("fly", ResourceKind::Role, "carol", "dave"),
        grant("all", ResourceKind::Keyspace, "system_redis", "bob"),
        grant("modify", ResourceKind::Table, "orders", "carol"),
    ];

    let results = analyze_all(&mut statements, || {
        SemContext::new(catalog.clone()).with_current_keyspace("shop")
    });

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().canonical_resource(), "data/ks1/t1");
    assert_eq!(results[1].as_ref().unwrap_err().code, ErrorCode::SyntaxError);
    assert_eq!(
        results[2].as_ref().unwrap_err().code,
        ErrorCode::InvalidArguments
    );
    assert_eq!(
        results[3].as_ref().unwrap().resource().display_name(),
        "shop.orders"
    );

    for (statement, result) in statements.iter().zip(&results) {
        assert_eq!(statement.analyzed(), result.as_ref().ok());
    }
}

#[test]
fn test_analyze_many_statements_concurrently() {
    let catalog = catalog();
    let roles = ["alice", "bob", "carol", "dave", "nobody"];
    let mut statements: Vec<_> = (0..200)
        .map(|i| {
            let table = format!("ks{}.t{}", i % 7, i);
            grant("select", ResourceKind::Table, &table, roles[i % roles.len()])
        })
        .collect();

    let results = analyze_all(&mut statements, || SemContext::new(catalog.clone()));

    for (i, result) in results.iter().enumerate() {
        if roles[i % roles.len()] == "nobody" {
            assert_eq!(result.as_ref().unwrap_err().code, ErrorCode::NameResolutionError);
        } else {
            let analyzed = result.as_ref().unwrap();
            assert_eq!(
                analyzed.resource().display_name(),
                format!("ks{}.t{}", i % 7, i)
            );
        }
    }
}

#[test]
fn test_catalog_changes_are_seen_by_later_analyses() {
    let catalog = catalog();
    let shared: Arc<dyn cql_sema::Catalog> = catalog.clone();

    let mut before = grant("select", ResourceKind::AllTables, "", "erin");
    assert!(before.analyze(&mut SemContext::new(shared.clone())).is_err());

    catalog.create_role("erin");
    let mut after = grant("select", ResourceKind::AllTables, "", "erin");
    assert!(after.analyze(&mut SemContext::new(shared)).is_ok());
}
