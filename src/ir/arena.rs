//! Append-only arena storage for IR nodes.
//!
//! Handles returned by the push methods stay valid for the arena's lifetime;
//! a child handle must exist before any parent referencing it can be pushed,
//! so arenas built through this interface cannot contain reference cycles.

use crate::ir::ids::{CalleeId, ExprId, StmtId};
use crate::ir::node::{Callee, ExprNode, StmtNode};

/// Arena owning every IR node of one program fragment.
///
/// Nodes are immutable once pushed. Structural sharing is expressed by
/// storing the same handle in more than one parent slot.
#[derive(Debug, Clone, Default)]
pub struct IrArena {
    exprs: Vec<ExprNode>,
    stmts: Vec<StmtNode>,
    callees: Vec<Callee>,
}

impl IrArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an expression and returns its handle.
    pub fn push_expr(&mut self, node: ExprNode) -> ExprId {
        let id = ExprId::new(self.exprs.len() as u32);
        self.exprs.push(node);
        id
    }

    /// Stores a statement and returns its handle.
    pub fn push_stmt(&mut self, node: StmtNode) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(node);
        id
    }

    /// Stores a resolved callee and returns its handle.
    pub fn push_callee(&mut self, callee: Callee) -> CalleeId {
        let id = CalleeId::new(self.callees.len() as u32);
        self.callees.push(callee);
        id
    }

    /// Resolves an expression handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this arena.
    pub fn expr(&self, id: ExprId) -> &ExprNode {
        &self.exprs[id.value() as usize]
    }

    /// Resolves a statement handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this arena.
    pub fn stmt(&self, id: StmtId) -> &StmtNode {
        &self.stmts[id.value() as usize]
    }

    /// Resolves a callee handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was not produced by this arena.
    pub fn callee(&self, id: CalleeId) -> &Callee {
        &self.callees[id.value() as usize]
    }

    /// Returns the number of stored expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Returns the number of stored statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    /// Returns `true` when no nodes are stored.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty() && self.stmts.is_empty() && self.callees.is_empty()
    }

    /// Pushes a signed integer immediate.
    pub fn int(&mut self, value: i64) -> ExprId {
        self.push_expr(ExprNode::IntImm { value })
    }

    /// Pushes a named variable reference.
    pub fn var(&mut self, name: impl Into<String>) -> ExprId {
        self.push_expr(ExprNode::Variable { name: name.into() })
    }

    /// Pushes a sum of two operands.
    pub fn add(&mut self, a: ExprId, b: ExprId) -> ExprId {
        self.push_expr(ExprNode::Add { a, b })
    }
}
