//! Contract tests for the identity registry: first-seen sequential ids,
//! idempotent redefinition, and pure lookup.

use irviz::ir::{ExprId, NodeRef, StmtId};
use irviz::viz::{Definition, IdentityRegistry};

#[test]
fn first_definition_assigns_sequential_ids_from_zero() {
    let mut registry = IdentityRegistry::new();

    let a = registry.define(NodeRef::Expr(ExprId::new(7)));
    let b = registry.define(NodeRef::Expr(ExprId::new(3)));
    let c = registry.define(NodeRef::Stmt(StmtId::new(0)));

    assert!(a.is_fresh());
    assert!(b.is_fresh());
    assert!(c.is_fresh());
    assert_eq!(a.id().value(), 0);
    assert_eq!(b.id().value(), 1);
    assert_eq!(c.id().value(), 2);
    assert_eq!(registry.len(), 3);
}

#[test]
fn redefinition_returns_existing_id_without_reregistering() {
    let mut registry = IdentityRegistry::new();
    let node = NodeRef::Expr(ExprId::new(5));

    let first = registry.define(node);
    let second = registry.define(node);

    assert!(first.is_fresh());
    assert!(matches!(second, Definition::Existing(id) if id == first.id()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn expr_and_stmt_handles_with_equal_indices_are_distinct_identities() {
    let mut registry = IdentityRegistry::new();

    let expr = registry.define(NodeRef::Expr(ExprId::new(4)));
    let stmt = registry.define(NodeRef::Stmt(StmtId::new(4)));

    assert!(stmt.is_fresh());
    assert_ne!(expr.id(), stmt.id());
}

#[test]
fn lookup_never_mutates_state() {
    let mut registry = IdentityRegistry::new();
    let known = NodeRef::Expr(ExprId::new(0));
    let unknown = NodeRef::Expr(ExprId::new(1));
    registry.define(known);

    assert_eq!(registry.lookup(known), Some(registry.define(known).id()));
    assert_eq!(registry.lookup(unknown), None);
    assert_eq!(registry.len(), 1);

    // A later define of the missed identity still gets the next id.
    let late = registry.define(unknown);
    assert!(late.is_fresh());
    assert_eq!(late.id().value(), 1);
}

#[test]
fn empty_registry_reports_empty() {
    let registry = IdentityRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
