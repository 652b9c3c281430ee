//! Identity registry — first-seen sequential id assignment for IR nodes.

use rustc_hash::FxHashMap;

use crate::ir::ids::{GraphNodeId, NodeRef};

/// Outcome of a [`IdentityRegistry::define`] call.
///
/// The fresh/existing split is what gates node-definition emission: a node's
/// definition record is written exactly once, on first registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    /// The identity was registered by this call.
    Fresh(GraphNodeId),
    /// The identity was already registered; the original id is returned.
    Existing(GraphNodeId),
}

impl Definition {
    /// Returns the assigned id regardless of freshness.
    pub const fn id(self) -> GraphNodeId {
        match self {
            Self::Fresh(id) | Self::Existing(id) => id,
        }
    }

    /// Returns `true` when this call performed the registration.
    pub const fn is_fresh(self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// Maps IR node identities to sequential graph node ids.
///
/// Ids start at 0 and increase monotonically in first-registration order;
/// nothing is ever removed. One registry serves exactly one export session.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    ids: FxHashMap<NodeRef, GraphNodeId>,
    next: u32,
}

impl IdentityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an identity, assigning the next sequential id on first
    /// sight; idempotent on repeats.
    pub fn define(&mut self, node: NodeRef) -> Definition {
        if let Some(&id) = self.ids.get(&node) {
            return Definition::Existing(id);
        }
        let id = GraphNodeId::new(self.next);
        self.next += 1;
        self.ids.insert(node, id);
        Definition::Fresh(id)
    }

    /// Looks up a previously registered identity without mutating state.
    pub fn lookup(&self, node: NodeRef) -> Option<GraphNodeId> {
        self.ids.get(&node).copied()
    }

    /// Returns the number of registered identities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
