//! Tree nodes stored in the [`Arena`](crate::arena::Arena).

use derive_more::{From, Into};

/// Which reduction produced an internal node's value from its children.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Operation {
    /// `value == left.value + right.value`
    Add,
    /// `value == left.value - right.value`
    Sub,
}

impl Operation {
    /// Whether this is [`Operation::Add`].
    #[inline(always)]
    pub(crate) fn is_add(self) -> bool {
        matches!(self, Self::Add)
    }
}

/// Stable index of a [`Node`] inside an [`Arena`](crate::arena::Arena).
///
/// Indices, not references, are used so the arena can be a plain fixed-size array: a `NodeRef`
/// stays valid for as long as the arena it was produced from hasn't been reset.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, From, Into)]
#[repr(transparent)]
pub(crate) struct NodeRef(u16);

impl NodeRef {
    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u16)
    }

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a [`Node`] carries beyond its `value`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum NodeKind {
    /// A leaf carries the index of the original number it came from.
    Leaf {
        /// Index into the numbers table, in `[0, N)`.
        index: u16,
    },
    /// An internal node carries its two children and the operation that combined them.
    Internal {
        /// Larger-or-equal operand (the minuend when `op == Sub`).
        left: NodeRef,
        /// Smaller-or-equal operand (the subtrahend when `op == Sub`).
        right: NodeRef,
        /// How `left` and `right` were combined.
        op: Operation,
    },
}

/// A single node of the differencing tree: either an original leaf number or the result of
/// combining two earlier nodes with [`Operation::Add`] or [`Operation::Sub`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) value: u64,
    pub(crate) kind: NodeKind,
}

impl Node {
    #[inline(always)]
    pub(crate) fn leaf(value: u64, index: u16) -> Self {
        Self {
            value,
            kind: NodeKind::Leaf { index },
        }
    }

    /// Build an internal node from two children already in the arena.
    ///
    /// `left` must carry a value greater than or equal to `right`'s so that `Sub` never
    /// underflows; this is an invariant the caller (the differencing engine) is responsible for
    /// upholding, since nodes are always constructed from the two largest working-set entries.
    #[inline(always)]
    pub(crate) fn internal(left: NodeRef, left_value: u64, right: NodeRef, right_value: u64, op: Operation) -> Self {
        debug_assert!(left_value >= right_value);
        let value = match op {
            Operation::Add => left_value + right_value,
            Operation::Sub => left_value - right_value,
        };
        Self {
            value,
            kind: NodeKind::Internal { left, right, op },
        }
    }

    /// The node's combined (or original) value.
    #[inline(always)]
    pub(crate) fn value(&self) -> u64 {
        self.value
    }

    /// Whether this node is a leaf.
    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// This node's kind: a leaf index, or an internal node's children and operation.
    #[inline(always)]
    pub(crate) fn kind(&self) -> NodeKind {
        self.kind
    }
}
