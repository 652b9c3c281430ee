//! Arena-allocated IR contracts consumed by the graph exporter.
//!
//! Nodes live in an [`IrArena`] and are referenced by stable integer handles;
//! handle equality is node identity, which is what the exporter deduplicates
//! on.

pub mod arena;
pub mod ids;
pub mod node;

pub use arena::IrArena;
pub use ids::{CalleeId, ExprId, GraphNodeId, NodeRef, StmtId};
pub use node::{Bound, Callee, ExprNode, ReduceOp, StmtNode};
