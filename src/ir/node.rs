//! Closed variant sets for arena-allocated IR expressions and statements.
//!
//! Child references are arena handles; sharing a subtree means reusing the
//! same handle from more than one parent. Optional children are explicit
//! `Option` slots rather than sentinel handles.

use crate::ir::ids::{CalleeId, ExprId, StmtId};

/// Reduction operator carried by [`ExprNode::VectorReduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Sum across lanes.
    Add,
    /// Product across lanes.
    Mul,
    /// Minimum across lanes.
    Min,
    /// Maximum across lanes.
    Max,
    /// Logical-and across lanes.
    And,
    /// Logical-or across lanes.
    Or,
    /// Saturating sum across lanes.
    SaturatingAdd,
}

impl ReduceOp {
    /// Returns the operator name used in graph labels.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Min => "min",
            Self::Max => "max",
            Self::And => "and",
            Self::Or => "or",
            Self::SaturatingAdd => "saturating_add",
        }
    }
}

/// Half-open extent pair used by `Realize` and `Prefetch` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    /// Lower bound expression.
    pub min: ExprId,
    /// Extent expression.
    pub extent: ExprId,
}

/// A call target resolved to a definition with auxiliary extern arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callee {
    /// Definition name.
    pub name: String,
    /// Externally supplied auxiliary expression arguments.
    pub extern_args: Vec<ExprId>,
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    /// Signed integer immediate.
    IntImm {
        /// Immediate value.
        value: i64,
    },
    /// Unsigned integer immediate.
    UIntImm {
        /// Immediate value.
        value: u64,
    },
    /// Floating-point immediate.
    FloatImm {
        /// Immediate value.
        value: f64,
    },
    /// String immediate.
    StringImm {
        /// Immediate value.
        value: String,
    },
    /// Type conversion of one value.
    Cast {
        /// Converted operand.
        value: ExprId,
    },
    /// Named variable reference.
    Variable {
        /// Variable name.
        name: String,
    },
    /// Sum of two operands.
    Add {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Difference of two operands.
    Sub {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Product of two operands.
    Mul {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Quotient of two operands.
    Div {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Remainder of two operands.
    Mod {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Lane-wise minimum.
    Min {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Lane-wise maximum.
    Max {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Equality comparison.
    Eq {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Inequality comparison.
    Ne {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Less-than comparison.
    Lt {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Less-or-equal comparison.
    Le {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Greater-than comparison.
    Gt {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Greater-or-equal comparison.
    Ge {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Logical conjunction.
    And {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Logical disjunction.
    Or {
        /// Left operand.
        a: ExprId,
        /// Right operand.
        b: ExprId,
    },
    /// Logical negation.
    Not {
        /// Negated operand.
        a: ExprId,
    },
    /// Ternary select between two values.
    Select {
        /// Selection predicate.
        condition: ExprId,
        /// Value when the predicate holds.
        true_value: ExprId,
        /// Value when the predicate fails.
        false_value: ExprId,
    },
    /// Memory read from a named buffer.
    Load {
        /// Buffer name.
        name: String,
        /// Per-lane load predicate.
        predicate: ExprId,
        /// Element index.
        index: ExprId,
    },
    /// Affine lane sequence `base + i * stride`.
    Ramp {
        /// First-lane value.
        base: ExprId,
        /// Per-lane increment.
        stride: ExprId,
    },
    /// Scalar replicated across vector lanes.
    Broadcast {
        /// Lane count.
        lanes: i32,
        /// Replicated scalar.
        value: ExprId,
    },
    /// Call with positional arguments and an optionally resolved callee.
    Call {
        /// Called symbol name.
        name: String,
        /// Positional argument expressions.
        args: Vec<ExprId>,
        /// Resolved definition carrying extern arguments, when known.
        callee: Option<CalleeId>,
    },
    /// Scoped name binding within an expression.
    Let {
        /// Bound name.
        name: String,
        /// Bound value.
        value: ExprId,
        /// Expression the binding scopes over.
        body: ExprId,
    },
    /// Lane permutation over one or more input vectors.
    Shuffle {
        /// Input vectors in index order.
        vectors: Vec<ExprId>,
    },
    /// Horizontal reduction of a vector value.
    VectorReduce {
        /// Reduction operator.
        op: ReduceOp,
        /// Reduced vector value.
        value: ExprId,
    },
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtNode {
    /// Scoped name binding within a statement.
    LetStmt {
        /// Bound name.
        name: String,
        /// Bound value.
        value: ExprId,
        /// Statement the binding scopes over.
        body: StmtId,
    },
    /// Runtime assertion with a failure message value.
    AssertStmt {
        /// Asserted predicate.
        condition: ExprId,
        /// Message expression evaluated on failure.
        message: ExprId,
    },
    /// Producer or consumer phase marker around a body.
    ProducerConsumer {
        /// Producing or consuming function name.
        name: String,
        /// `true` for the producer phase.
        is_producer: bool,
        /// Wrapped body.
        body: StmtId,
    },
    /// Serial loop over a half-open range.
    For {
        /// Loop variable name.
        name: String,
        /// Loop start.
        min: ExprId,
        /// Iteration count.
        extent: ExprId,
        /// Loop body.
        body: StmtId,
    },
    /// Semaphore acquisition guarding a body.
    Acquire {
        /// Semaphore object expression.
        semaphore: ExprId,
        /// Acquired count.
        count: ExprId,
        /// Guarded body.
        body: StmtId,
    },
    /// Memory write to a named buffer.
    Store {
        /// Buffer name.
        name: String,
        /// Per-lane store predicate.
        predicate: ExprId,
        /// Stored value.
        value: ExprId,
        /// Element index.
        index: ExprId,
    },
    /// Multi-value write at a symbolic site.
    Provide {
        /// Destination function name.
        name: String,
        /// Stored values in tuple order.
        values: Vec<ExprId>,
        /// Site coordinates.
        args: Vec<ExprId>,
    },
    /// Scoped buffer allocation.
    Allocate {
        /// Buffer name.
        name: String,
        /// Per-dimension extents.
        extents: Vec<ExprId>,
        /// Allocation condition.
        condition: ExprId,
        /// Custom allocation expression, when supplied.
        new_expr: Option<ExprId>,
        /// Statement the allocation scopes over.
        body: StmtId,
    },
    /// Explicit release of an allocated buffer.
    Free {
        /// Buffer name.
        name: String,
    },
    /// Scoped realization of a function over bounds.
    Realize {
        /// Realized function name.
        name: String,
        /// Per-dimension bounds.
        bounds: Vec<Bound>,
        /// Realization condition.
        condition: ExprId,
        /// Statement the realization scopes over.
        body: StmtId,
    },
    /// Prefetch hint over bounds.
    Prefetch {
        /// Prefetched function name.
        name: String,
        /// Per-dimension bounds.
        bounds: Vec<Bound>,
        /// Prefetch condition.
        condition: ExprId,
        /// Statement the hint scopes over.
        body: StmtId,
    },
    /// Sequential composition; the continuation may be absent.
    Block {
        /// First statement.
        first: StmtId,
        /// Remaining statements, when any.
        rest: Option<StmtId>,
    },
    /// Parallel composition; the continuation may be absent.
    Fork {
        /// First task.
        first: StmtId,
        /// Remaining tasks, when any.
        rest: Option<StmtId>,
    },
    /// Conditional branch; the else branch may be absent.
    IfThenElse {
        /// Branch predicate.
        condition: ExprId,
        /// Taken branch.
        then_case: StmtId,
        /// Fallback branch, when present.
        else_case: Option<StmtId>,
    },
    /// Expression evaluated for effect.
    Evaluate {
        /// Evaluated value.
        value: ExprId,
    },
    /// Atomic execution marker around a body.
    Atomic {
        /// Producer name.
        producer_name: String,
        /// Mutex name.
        mutex_name: String,
        /// Guarded body.
        body: StmtId,
    },
}
