//! Stable identifier wrappers for arena handles and graph output ids.

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(u32);

        impl $name {
            /// Creates an identifier from a raw value.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            pub const fn value(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(ExprId);
define_id!(StmtId);
define_id!(CalleeId);
define_id!(GraphNodeId);

/// Uniform identity key covering both IR node families.
///
/// Two handles are the same identity exactly when they index the same arena
/// slot; structurally equal nodes in different slots are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// An expression slot.
    Expr(ExprId),
    /// A statement slot.
    Stmt(StmtId),
}

impl From<ExprId> for NodeRef {
    fn from(id: ExprId) -> Self {
        Self::Expr(id)
    }
}

impl From<StmtId> for NodeRef {
    fn from(id: StmtId) -> Self {
        Self::Stmt(id)
    }
}
