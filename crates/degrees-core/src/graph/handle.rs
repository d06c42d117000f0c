//! Opaque handles for graph elements.
//!
//! A handle pairs the owning graph's instance id with a slot index into that
//! graph's arena. Handles are cheap to copy and hash, but only the graph that
//! minted one can resolve it: presenting a handle to another graph instance
//! fails validation instead of aliasing an unrelated slot.

/// Handle to a vertex owned by a specific graph instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId {
    pub(super) graph: u64,
    pub(super) index: usize,
}

impl VertexId {
    pub(super) fn new(graph: u64, index: usize) -> Self {
        Self { graph, index }
    }
}

/// Handle to an edge owned by a specific graph instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId {
    pub(super) graph: u64,
    pub(super) index: usize,
}

impl EdgeId {
    pub(super) fn new(graph: u64, index: usize) -> Self {
        Self { graph, index }
    }
}
