//! DOT export pass — identity-aware, children-first traversal of arena IR.
//!
//! Every distinct node identity is defined exactly once; every realized
//! parent→child slot yields one edge. Children are always exported before
//! the parent's definition, so an edge never references an unknown id.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ir::arena::IrArena;
use crate::ir::ids::{ExprId, GraphNodeId, NodeRef, StmtId};
use crate::ir::node::{Bound, ExprNode, StmtNode};
use crate::viz::error::ExportError;
use crate::viz::label::{render_edge, FieldValue, NodeLabel, PortName};
use crate::viz::registry::IdentityRegistry;

// ===========================================================================
// Public API
// ===========================================================================

/// One-shot export of a root node into a DOT file at `path`.
///
/// The file handle is scoped to this call: it is flushed on success and
/// dropped (closed) on every error path.
pub fn write_to_path(
    path: impl AsRef<Path>,
    arena: &IrArena,
    root: NodeRef,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut exporter = DotExporter::new(BufWriter::new(file))?;
    exporter.export_root(arena, root)?;
    exporter.finish()?;
    Ok(())
}

/// Single-use DOT export session over one output sink.
///
/// Construction writes the graph header; [`DotExporter::finish`] writes the
/// trailer and returns the sink. One exporter serves one root-to-completion
/// traversal; concurrent exports need independent sessions.
#[derive(Debug)]
pub struct DotExporter<W: Write> {
    out: W,
    registry: IdentityRegistry,
}

impl<W: Write> DotExporter<W> {
    /// Opens a session, writing the graph header.
    pub fn new(mut out: W) -> Result<Self, ExportError> {
        writeln!(out, "digraph G {{")?;
        Ok(Self {
            out,
            registry: IdentityRegistry::new(),
        })
    }

    /// Exports the subgraph reachable from an expression root.
    pub fn export_expr(
        &mut self,
        arena: &IrArena,
        root: ExprId,
    ) -> Result<GraphNodeId, ExportError> {
        self.visit_expr(arena, root)?;
        Ok(self.resolved(root.into()))
    }

    /// Exports the subgraph reachable from a statement root.
    pub fn export_stmt(
        &mut self,
        arena: &IrArena,
        root: StmtId,
    ) -> Result<GraphNodeId, ExportError> {
        self.visit_stmt(arena, root)?;
        Ok(self.resolved(root.into()))
    }

    /// Exports the subgraph reachable from either kind of root.
    pub fn export_root(
        &mut self,
        arena: &IrArena,
        root: NodeRef,
    ) -> Result<GraphNodeId, ExportError> {
        match root {
            NodeRef::Expr(id) => self.export_expr(arena, id),
            NodeRef::Stmt(id) => self.export_stmt(arena, id),
        }
    }

    /// Returns the session's identity registry.
    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    /// Writes the graph trailer, flushes, and returns the sink.
    pub fn finish(mut self) -> Result<W, ExportError> {
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(self.out)
    }

    // -----------------------------------------------------------------------
    // Expression handlers
    // -----------------------------------------------------------------------

    fn visit_expr(&mut self, arena: &IrArena, id: ExprId) -> Result<(), ExportError> {
        let node = id.into();
        // A registered node was fully exported through another parent;
        // re-descending would redo a subtree that already has its
        // definition and outgoing edges.
        if self.registry.lookup(node).is_some() {
            return Ok(());
        }
        match arena.expr(id) {
            ExprNode::IntImm { value } => {
                self.leaf(node, NodeLabel::new("IntImm").field("value", FieldValue::Int(*value)))
            }
            ExprNode::UIntImm { value } => self.leaf(
                node,
                NodeLabel::new("UIntImm").field("value", FieldValue::UInt(*value)),
            ),
            ExprNode::FloatImm { value } => self.leaf(
                node,
                NodeLabel::new("FloatImm").field("value", FieldValue::Float(*value)),
            ),
            ExprNode::StringImm { value } => self.leaf(
                node,
                NodeLabel::new("StringImm").field("value", FieldValue::Str(value.clone())),
            ),
            ExprNode::Variable { name } => self.leaf(
                node,
                NodeLabel::new("Variable").field("name", FieldValue::Str(name.clone())),
            ),
            ExprNode::Cast { value } => self.unary(arena, node, "Cast", "value", *value),
            ExprNode::Add { a, b } => self.binary(arena, node, "Add", *a, *b),
            ExprNode::Sub { a, b } => self.binary(arena, node, "Sub", *a, *b),
            ExprNode::Mul { a, b } => self.binary(arena, node, "Mul", *a, *b),
            ExprNode::Div { a, b } => self.binary(arena, node, "Div", *a, *b),
            ExprNode::Mod { a, b } => self.binary(arena, node, "Mod", *a, *b),
            ExprNode::Min { a, b } => self.binary(arena, node, "Min", *a, *b),
            ExprNode::Max { a, b } => self.binary(arena, node, "Max", *a, *b),
            ExprNode::Eq { a, b } => self.binary(arena, node, "EQ", *a, *b),
            ExprNode::Ne { a, b } => self.binary(arena, node, "NE", *a, *b),
            ExprNode::Lt { a, b } => self.binary(arena, node, "LT", *a, *b),
            ExprNode::Le { a, b } => self.binary(arena, node, "LE", *a, *b),
            ExprNode::Gt { a, b } => self.binary(arena, node, "GT", *a, *b),
            ExprNode::Ge { a, b } => self.binary(arena, node, "GE", *a, *b),
            ExprNode::And { a, b } => self.binary(arena, node, "And", *a, *b),
            ExprNode::Or { a, b } => self.binary(arena, node, "Or", *a, *b),
            ExprNode::Not { a } => self.unary(arena, node, "Not", "a", *a),
            ExprNode::Select {
                condition,
                true_value,
                false_value,
            } => {
                self.visit_expr(arena, *condition)?;
                self.visit_expr(arena, *true_value)?;
                self.visit_expr(arena, *false_value)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Select")
                        .port("condition")
                        .port("true_value")
                        .port("false_value"),
                )?;
                self.edge(id, PortName::Static("condition"), (*condition).into())?;
                self.edge(id, PortName::Static("true_value"), (*true_value).into())?;
                self.edge(id, PortName::Static("false_value"), (*false_value).into())
            }
            ExprNode::Load {
                name,
                predicate,
                index,
            } => {
                self.visit_expr(arena, *predicate)?;
                self.visit_expr(arena, *index)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Load")
                        .field("name", FieldValue::Str(name.clone()))
                        .port("predicate")
                        .port("index"),
                )?;
                self.edge(id, PortName::Static("predicate"), (*predicate).into())?;
                self.edge(id, PortName::Static("index"), (*index).into())
            }
            ExprNode::Ramp { base, stride } => {
                self.visit_expr(arena, *base)?;
                self.visit_expr(arena, *stride)?;
                let id = self.register(node);
                self.define_node(id, &NodeLabel::new("Ramp").port("base").port("stride"))?;
                self.edge(id, PortName::Static("base"), (*base).into())?;
                self.edge(id, PortName::Static("stride"), (*stride).into())
            }
            ExprNode::Broadcast { lanes, value } => {
                self.visit_expr(arena, *value)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Broadcast")
                        .field("lanes", FieldValue::Int(i64::from(*lanes)))
                        .port("value"),
                )?;
                self.edge(id, PortName::Static("value"), (*value).into())
            }
            ExprNode::Call { name, args, callee } => {
                for &arg in args {
                    self.visit_expr(arena, arg)?;
                }
                // Extern arguments of a resolved callee participate in
                // registration only; they never receive an edge from the
                // call node.
                if let Some(callee) = *callee {
                    for &arg in &arena.callee(callee).extern_args {
                        self.visit_expr(arena, arg)?;
                    }
                }
                let id = self.register(node);
                let mut label =
                    NodeLabel::new("Call").field("name", FieldValue::Str(name.clone()));
                for i in 0..args.len() {
                    label = label.indexed_port("arg", i);
                }
                self.define_node(id, &label)?;
                for (i, &arg) in args.iter().enumerate() {
                    self.edge(id, PortName::Indexed("arg", i), arg.into())?;
                }
                Ok(())
            }
            ExprNode::Let { name, value, body } => {
                self.visit_expr(arena, *value)?;
                self.visit_expr(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Let")
                        .field("name", FieldValue::Str(name.clone()))
                        .port("value")
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("value"), (*value).into())?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            ExprNode::Shuffle { vectors } => {
                for &vector in vectors {
                    self.visit_expr(arena, vector)?;
                }
                let id = self.register(node);
                let mut label = NodeLabel::new("Shuffle");
                for i in 0..vectors.len() {
                    label = label.indexed_port("vector", i);
                }
                self.define_node(id, &label)?;
                for (i, &vector) in vectors.iter().enumerate() {
                    self.edge(id, PortName::Indexed("vector", i), vector.into())?;
                }
                Ok(())
            }
            ExprNode::VectorReduce { op, value } => {
                self.visit_expr(arena, *value)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("VectorReduce")
                        .field("op", FieldValue::Str(op.name().to_string()))
                        .port("value"),
                )?;
                self.edge(id, PortName::Static("value"), (*value).into())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Statement handlers
    // -----------------------------------------------------------------------

    fn visit_stmt(&mut self, arena: &IrArena, id: StmtId) -> Result<(), ExportError> {
        let node = id.into();
        if self.registry.lookup(node).is_some() {
            return Ok(());
        }
        match arena.stmt(id) {
            StmtNode::LetStmt { name, value, body } => {
                self.visit_expr(arena, *value)?;
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("LetStmt")
                        .field("name", FieldValue::Str(name.clone()))
                        .port("value")
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("value"), (*value).into())?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            StmtNode::AssertStmt { condition, message } => {
                self.visit_expr(arena, *condition)?;
                self.visit_expr(arena, *message)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("AssertStmt").port("condition").port("message"),
                )?;
                self.edge(id, PortName::Static("condition"), (*condition).into())?;
                self.edge(id, PortName::Static("message"), (*message).into())
            }
            StmtNode::ProducerConsumer {
                name,
                is_producer,
                body,
            } => {
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("ProducerConsumer")
                        .field("name", FieldValue::Str(name.clone()))
                        .field("is_producer", FieldValue::Bool(*is_producer))
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            StmtNode::For {
                name,
                min,
                extent,
                body,
            } => {
                self.visit_expr(arena, *min)?;
                self.visit_expr(arena, *extent)?;
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("For")
                        .field("name", FieldValue::Str(name.clone()))
                        .port("min")
                        .port("extent")
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("min"), (*min).into())?;
                self.edge(id, PortName::Static("extent"), (*extent).into())?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            StmtNode::Acquire {
                semaphore,
                count,
                body,
            } => {
                self.visit_expr(arena, *semaphore)?;
                self.visit_expr(arena, *count)?;
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Acquire")
                        .port("semaphore")
                        .port("count")
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("semaphore"), (*semaphore).into())?;
                self.edge(id, PortName::Static("count"), (*count).into())?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            StmtNode::Store {
                name,
                predicate,
                value,
                index,
            } => {
                self.visit_expr(arena, *predicate)?;
                self.visit_expr(arena, *value)?;
                self.visit_expr(arena, *index)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Store")
                        .field("name", FieldValue::Str(name.clone()))
                        .port("predicate")
                        .port("value")
                        .port("index"),
                )?;
                self.edge(id, PortName::Static("predicate"), (*predicate).into())?;
                self.edge(id, PortName::Static("value"), (*value).into())?;
                self.edge(id, PortName::Static("index"), (*index).into())
            }
            StmtNode::Provide { name, values, args } => {
                for &value in values {
                    self.visit_expr(arena, value)?;
                }
                for &arg in args {
                    self.visit_expr(arena, arg)?;
                }
                let id = self.register(node);
                let mut label =
                    NodeLabel::new("Provide").field("name", FieldValue::Str(name.clone()));
                for i in 0..values.len() {
                    label = label.indexed_port("value", i);
                }
                for i in 0..args.len() {
                    label = label.indexed_port("arg", i);
                }
                self.define_node(id, &label)?;
                for (i, &value) in values.iter().enumerate() {
                    self.edge(id, PortName::Indexed("value", i), value.into())?;
                }
                for (i, &arg) in args.iter().enumerate() {
                    self.edge(id, PortName::Indexed("arg", i), arg.into())?;
                }
                Ok(())
            }
            StmtNode::Allocate {
                name,
                extents,
                condition,
                new_expr,
                body,
            } => {
                for &extent in extents {
                    self.visit_expr(arena, extent)?;
                }
                self.visit_expr(arena, *condition)?;
                if let Some(new_expr) = *new_expr {
                    self.visit_expr(arena, new_expr)?;
                }
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                let mut label =
                    NodeLabel::new("Allocate").field("name", FieldValue::Str(name.clone()));
                for i in 0..extents.len() {
                    label = label.indexed_port("extent", i);
                }
                label = label.port("condition");
                if new_expr.is_some() {
                    label = label.port("new_expr");
                }
                label = label.port("body");
                self.define_node(id, &label)?;
                for (i, &extent) in extents.iter().enumerate() {
                    self.edge(id, PortName::Indexed("extent", i), extent.into())?;
                }
                self.edge(id, PortName::Static("condition"), (*condition).into())?;
                if let Some(new_expr) = *new_expr {
                    self.edge(id, PortName::Static("new_expr"), new_expr.into())?;
                }
                self.edge(id, PortName::Static("body"), (*body).into())
            }
            StmtNode::Free { name } => self.leaf(
                node,
                NodeLabel::new("Free").field("name", FieldValue::Str(name.clone())),
            ),
            StmtNode::Realize {
                name,
                bounds,
                condition,
                body,
            } => self.bounded_region(arena, node, "Realize", name, bounds, *condition, *body),
            StmtNode::Prefetch {
                name,
                bounds,
                condition,
                body,
            } => self.bounded_region(arena, node, "Prefetch", name, bounds, *condition, *body),
            StmtNode::Block { first, rest } => {
                self.sequence(arena, node, "Block", *first, *rest)
            }
            StmtNode::Fork { first, rest } => self.sequence(arena, node, "Fork", *first, *rest),
            StmtNode::IfThenElse {
                condition,
                then_case,
                else_case,
            } => {
                self.visit_expr(arena, *condition)?;
                self.visit_stmt(arena, *then_case)?;
                if let Some(else_case) = *else_case {
                    self.visit_stmt(arena, else_case)?;
                }
                let id = self.register(node);
                let mut label = NodeLabel::new("IfThenElse")
                    .port("condition")
                    .port("then_case");
                if else_case.is_some() {
                    label = label.port("else_case");
                }
                self.define_node(id, &label)?;
                self.edge(id, PortName::Static("condition"), (*condition).into())?;
                self.edge(id, PortName::Static("then_case"), (*then_case).into())?;
                if let Some(else_case) = *else_case {
                    self.edge(id, PortName::Static("else_case"), else_case.into())?;
                }
                Ok(())
            }
            StmtNode::Evaluate { value } => {
                self.visit_expr(arena, *value)?;
                let id = self.register(node);
                self.define_node(id, &NodeLabel::new("Evaluate").port("value"))?;
                self.edge(id, PortName::Static("value"), (*value).into())
            }
            StmtNode::Atomic {
                producer_name,
                mutex_name,
                body,
            } => {
                self.visit_stmt(arena, *body)?;
                let id = self.register(node);
                self.define_node(
                    id,
                    &NodeLabel::new("Atomic")
                        .field("producer_name", FieldValue::Str(producer_name.clone()))
                        .field("mutex_name", FieldValue::Str(mutex_name.clone()))
                        .port("body"),
                )?;
                self.edge(id, PortName::Static("body"), (*body).into())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Shared handler shapes
    // -----------------------------------------------------------------------

    /// Childless node: register and define, nothing to link.
    fn leaf(&mut self, node: NodeRef, label: NodeLabel) -> Result<(), ExportError> {
        let id = self.register(node);
        self.define_node(id, &label)
    }

    /// Single-child node with one fixed port.
    fn unary(
        &mut self,
        arena: &IrArena,
        node: NodeRef,
        kind: &'static str,
        port: &'static str,
        child: ExprId,
    ) -> Result<(), ExportError> {
        self.visit_expr(arena, child)?;
        let id = self.register(node);
        self.define_node(id, &NodeLabel::new(kind).port(port))?;
        self.edge(id, PortName::Static(port), child.into())
    }

    /// Two-operand node; edges always emit left then right.
    fn binary(
        &mut self,
        arena: &IrArena,
        node: NodeRef,
        kind: &'static str,
        a: ExprId,
        b: ExprId,
    ) -> Result<(), ExportError> {
        self.visit_expr(arena, a)?;
        self.visit_expr(arena, b)?;
        let id = self.register(node);
        self.define_node(id, &NodeLabel::new(kind).port("a").port("b"))?;
        self.edge(id, PortName::Static("a"), a.into())?;
        self.edge(id, PortName::Static("b"), b.into())
    }

    /// Sequential composition (`Block`/`Fork`) with an optional continuation.
    fn sequence(
        &mut self,
        arena: &IrArena,
        node: NodeRef,
        kind: &'static str,
        first: StmtId,
        rest: Option<StmtId>,
    ) -> Result<(), ExportError> {
        self.visit_stmt(arena, first)?;
        if let Some(rest) = rest {
            self.visit_stmt(arena, rest)?;
        }
        let id = self.register(node);
        let mut label = NodeLabel::new(kind).port("first");
        if rest.is_some() {
            label = label.port("rest");
        }
        self.define_node(id, &label)?;
        self.edge(id, PortName::Static("first"), first.into())?;
        if let Some(rest) = rest {
            self.edge(id, PortName::Static("rest"), rest.into())?;
        }
        Ok(())
    }

    /// Region statement over per-dimension bounds (`Realize`/`Prefetch`).
    #[allow(clippy::too_many_arguments)]
    fn bounded_region(
        &mut self,
        arena: &IrArena,
        node: NodeRef,
        kind: &'static str,
        name: &str,
        bounds: &[Bound],
        condition: ExprId,
        body: StmtId,
    ) -> Result<(), ExportError> {
        for bound in bounds {
            self.visit_expr(arena, bound.min)?;
            self.visit_expr(arena, bound.extent)?;
        }
        self.visit_expr(arena, condition)?;
        self.visit_stmt(arena, body)?;
        let id = self.register(node);
        let mut label = NodeLabel::new(kind).field("name", FieldValue::Str(name.to_string()));
        for i in 0..bounds.len() {
            label = label.indexed_port("min", i);
            label = label.indexed_port("extent", i);
        }
        label = label.port("condition").port("body");
        self.define_node(id, &label)?;
        for (i, bound) in bounds.iter().enumerate() {
            self.edge(id, PortName::Indexed("min", i), bound.min.into())?;
            self.edge(id, PortName::Indexed("extent", i), bound.extent.into())?;
        }
        self.edge(id, PortName::Static("condition"), condition.into())?;
        self.edge(id, PortName::Static("body"), body.into())
    }

    // -----------------------------------------------------------------------
    // Emission
    // -----------------------------------------------------------------------

    /// Registers a node the visit-entry guard proved unseen.
    fn register(&mut self, node: NodeRef) -> GraphNodeId {
        let def = self.registry.define(node);
        debug_assert!(def.is_fresh(), "visit-entry guard admits each identity once");
        def.id()
    }

    fn define_node(&mut self, id: GraphNodeId, label: &NodeLabel) -> Result<(), ExportError> {
        writeln!(self.out, "{}", label.render_definition(id))?;
        Ok(())
    }

    fn edge(
        &mut self,
        from: GraphNodeId,
        port: PortName,
        to: NodeRef,
    ) -> Result<(), ExportError> {
        let child = self.resolved(to);
        writeln!(self.out, "{}", render_edge(from, &port, child))?;
        Ok(())
    }

    /// Resolves a child id that the children-first order guarantees exists.
    ///
    /// # Panics
    ///
    /// Panics when the child was never registered; that is a broken
    /// children-before-parent invariant in a handler, not a runtime
    /// condition.
    fn resolved(&self, node: NodeRef) -> GraphNodeId {
        self.registry
            .lookup(node)
            .expect("child node must be registered before its edge is emitted")
    }
}
