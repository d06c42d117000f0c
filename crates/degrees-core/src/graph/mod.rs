//! Directed-graph engine optimized for sparse graphs.
//!
//! [`SparseGraph`] owns every vertex and edge it creates. Callers hold
//! opaque, copyable handles ([`VertexId`] / [`EdgeId`]) tagged with the
//! owning graph's instance id; validation is an O(1) check that the tag
//! matches and the slot is still live, so a foreign or stale handle is
//! always rejected with [`GraphError::InvalidHandle`] rather than resolving
//! to the wrong element. Removed slots are tombstoned and never reused.
//!
//! Besides its payload, every element carries an opaque label slot of a
//! caller-chosen type `L`, defaulting to unset. Algorithms use labels as
//! transient scratch state without touching the payload type; see [`bfs`]
//! for the search that drives its entire visited bookkeeping through them.

pub mod bfs;
mod handle;

pub use handle::{EdgeId, VertexId};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{GraphError, Result};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

struct VertexData<V, L> {
    payload: V,
    label: Option<L>,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

struct EdgeData<E, L> {
    from: VertexId,
    to: VertexId,
    payload: E,
    label: Option<L>,
}

/// A directed graph with generic vertex payloads `V`, edge payloads `E`,
/// and label type `L`.
///
/// Structural rules: no self-loops, no duplicate ordered (source,
/// destination) pairs, and a vertex may only be removed once it has no
/// incident edges. Insert and remove operations validate before mutating,
/// so a rejected call leaves the graph untouched.
pub struct SparseGraph<V, E, L> {
    id: u64,
    vertices: Vec<Option<VertexData<V, L>>>,
    edges: Vec<Option<EdgeData<E, L>>>,
    live_vertices: usize,
    live_edges: usize,
}

impl<V, E, L> SparseGraph<V, E, L> {
    /// Creates a new empty graph with a fresh instance id.
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            vertices: Vec::new(),
            edges: Vec::new(),
            live_vertices: 0,
            live_edges: 0,
        }
    }

    fn vertex_data(&self, v: VertexId) -> Result<&VertexData<V, L>> {
        if v.graph != self.id {
            return Err(GraphError::invalid_vertex());
        }
        self.vertices
            .get(v.index)
            .and_then(Option::as_ref)
            .ok_or_else(GraphError::invalid_vertex)
    }

    fn vertex_data_mut(&mut self, v: VertexId) -> Result<&mut VertexData<V, L>> {
        if v.graph != self.id {
            return Err(GraphError::invalid_vertex());
        }
        self.vertices
            .get_mut(v.index)
            .and_then(Option::as_mut)
            .ok_or_else(GraphError::invalid_vertex)
    }

    fn edge_data(&self, e: EdgeId) -> Result<&EdgeData<E, L>> {
        if e.graph != self.id {
            return Err(GraphError::invalid_edge());
        }
        self.edges
            .get(e.index)
            .and_then(Option::as_ref)
            .ok_or_else(GraphError::invalid_edge)
    }

    fn edge_data_mut(&mut self, e: EdgeId) -> Result<&mut EdgeData<E, L>> {
        if e.graph != self.id {
            return Err(GraphError::invalid_edge());
        }
        self.edges
            .get_mut(e.index)
            .and_then(Option::as_mut)
            .ok_or_else(GraphError::invalid_edge)
    }

    /// Inserts a vertex holding `payload`. Never fails; the label starts
    /// unset.
    pub fn insert_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId::new(self.id, self.vertices.len());
        self.vertices.push(Some(VertexData {
            payload,
            label: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        self.live_vertices += 1;
        id
    }

    /// Inserts a directed edge from `from` to `to` holding `payload`.
    ///
    /// Fails with `InvalidHandle` on a foreign or removed endpoint,
    /// `SelfLoop` when `from == to`, and `DuplicateEdge` when an edge with
    /// the same ordered endpoints already exists.
    pub fn insert_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> Result<EdgeId> {
        self.vertex_data(from)?;
        self.vertex_data(to)?;
        if from == to {
            return Err(GraphError::SelfLoop);
        }
        if self.duplicate_exists(from, to)? {
            return Err(GraphError::DuplicateEdge);
        }

        let edge = EdgeId::new(self.id, self.edges.len());
        self.edges.push(Some(EdgeData {
            from,
            to,
            payload,
            label: None,
        }));
        self.live_edges += 1;
        if let Some(data) = self.vertices.get_mut(from.index).and_then(Option::as_mut) {
            data.outgoing.push(edge);
        }
        if let Some(data) = self.vertices.get_mut(to.index).and_then(Option::as_mut) {
            data.incoming.push(edge);
        }
        Ok(edge)
    }

    fn duplicate_exists(&self, from: VertexId, to: VertexId) -> Result<bool> {
        let out = &self.vertex_data(from)?.outgoing;
        let inc = &self.vertex_data(to)?.incoming;
        // Scan whichever incidence list is shorter; detection then costs
        // O(min degree) rather than O(edges).
        let found = if out.len() <= inc.len() {
            out.iter()
                .any(|&e| self.edge_data(e).is_ok_and(|d| d.to == to))
        } else {
            inc.iter()
                .any(|&e| self.edge_data(e).is_ok_and(|d| d.from == from))
        };
        Ok(found)
    }

    /// Removes a vertex and returns its payload.
    ///
    /// Fails with `VertexHasEdges` while any incident edge remains; the
    /// handle is permanently invalid afterwards.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V> {
        let incident = {
            let data = self.vertex_data(v)?;
            data.outgoing.len() + data.incoming.len()
        };
        if incident > 0 {
            return Err(GraphError::VertexHasEdges { incident });
        }
        let data = self
            .vertices
            .get_mut(v.index)
            .and_then(Option::take)
            .ok_or_else(GraphError::invalid_vertex)?;
        self.live_vertices -= 1;
        Ok(data.payload)
    }

    /// Removes an edge, unlinking it from both endpoints, and returns its
    /// payload. The handle is permanently invalid afterwards.
    pub fn remove_edge(&mut self, e: EdgeId) -> Result<E> {
        let (from, to) = {
            let data = self.edge_data(e)?;
            (data.from, data.to)
        };
        if let Some(data) = self.vertices.get_mut(from.index).and_then(Option::as_mut) {
            data.outgoing.retain(|&out| out != e);
        }
        if let Some(data) = self.vertices.get_mut(to.index).and_then(Option::as_mut) {
            data.incoming.retain(|&inc| inc != e);
        }
        let data = self
            .edges
            .get_mut(e.index)
            .and_then(Option::take)
            .ok_or_else(GraphError::invalid_edge)?;
        self.live_edges -= 1;
        Ok(data.payload)
    }

    /// Snapshot of all live vertices in insertion order. Safe to hold
    /// across later mutation; it will not reflect it.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId::new(self.id, i)))
            .collect()
    }

    /// Snapshot of all live edges in insertion order.
    pub fn edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| EdgeId::new(self.id, i)))
            .collect()
    }

    /// Snapshot of `v`'s outgoing edges in insertion order.
    pub fn outgoing(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        Ok(self.vertex_data(v)?.outgoing.clone())
    }

    /// Snapshot of `v`'s incoming edges in insertion order.
    pub fn incoming(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        Ok(self.vertex_data(v)?.incoming.clone())
    }

    /// Returns `e`'s (source, destination) pair.
    pub fn endpoints(&self, e: EdgeId) -> Result<(VertexId, VertexId)> {
        let data = self.edge_data(e)?;
        Ok((data.from, data.to))
    }

    pub fn vertex(&self, v: VertexId) -> Result<&V> {
        Ok(&self.vertex_data(v)?.payload)
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V> {
        Ok(&mut self.vertex_data_mut(v)?.payload)
    }

    pub fn edge(&self, e: EdgeId) -> Result<&E> {
        Ok(&self.edge_data(e)?.payload)
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Result<&mut E> {
        Ok(&mut self.edge_data_mut(e)?.payload)
    }

    /// Sets `v`'s label. Taking `L` by value means an unset state can only
    /// be restored via [`SparseGraph::clear_labels`].
    pub fn set_vertex_label(&mut self, v: VertexId, label: L) -> Result<()> {
        self.vertex_data_mut(v)?.label = Some(label);
        Ok(())
    }

    /// Returns `v`'s label, or `None` if it was never set (or cleared).
    pub fn vertex_label(&self, v: VertexId) -> Result<Option<&L>> {
        Ok(self.vertex_data(v)?.label.as_ref())
    }

    pub fn set_edge_label(&mut self, e: EdgeId, label: L) -> Result<()> {
        self.edge_data_mut(e)?.label = Some(label);
        Ok(())
    }

    pub fn edge_label(&self, e: EdgeId) -> Result<Option<&L>> {
        Ok(self.edge_data(e)?.label.as_ref())
    }

    /// Resets every live element's label to unset.
    pub fn clear_labels(&mut self) {
        for data in self.vertices.iter_mut().flatten() {
            data.label = None;
        }
        for data in self.edges.iter_mut().flatten() {
            data.label = None;
        }
    }

    /// Number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }
}

impl<V, E, L> Default for SparseGraph<V, E, L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn graph() -> SparseGraph<&'static str, &'static str, u32> {
        SparseGraph::new()
    }

    #[test]
    fn test_insert_and_query() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "ab").unwrap();

        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(*g.vertex(a).unwrap(), "a");
        assert_eq!(*g.edge(e).unwrap(), "ab");
        assert_eq!(g.endpoints(e).unwrap(), (a, b));
        assert_eq!(g.outgoing(a).unwrap(), vec![e]);
        assert_eq!(g.incoming(b).unwrap(), vec![e]);
        assert!(g.outgoing(b).unwrap().is_empty());
        assert!(g.incoming(a).unwrap().is_empty());
    }

    #[test]
    fn test_equal_payloads_distinct_vertices() {
        let mut g = graph();
        let a1 = g.insert_vertex("same");
        let a2 = g.insert_vertex("same");
        assert_ne!(a1, a2);
        // Distinct identity means an edge between them is not a self-loop.
        assert!(g.insert_edge(a1, a2, "e").is_ok());
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        assert_eq!(g.insert_edge(a, a, "loop"), Err(GraphError::SelfLoop));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_rejected_opposite_direction_allowed() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        g.insert_edge(a, b, "first").unwrap();
        assert_eq!(
            g.insert_edge(a, b, "second"),
            Err(GraphError::DuplicateEdge)
        );
        // Payload plays no part in duplicate detection, direction does.
        assert!(g.insert_edge(b, a, "reverse").is_ok());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex_requires_no_incident_edges() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "ab").unwrap();

        assert_eq!(
            g.remove_vertex(a),
            Err(GraphError::VertexHasEdges { incident: 1 })
        );
        assert_eq!(
            g.remove_vertex(b),
            Err(GraphError::VertexHasEdges { incident: 1 })
        );

        assert_eq!(g.remove_edge(e).unwrap(), "ab");
        assert_eq!(g.remove_vertex(a).unwrap(), "a");
        assert_eq!(g.remove_vertex(b).unwrap(), "b");
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_removed_handles_stay_invalid() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "ab").unwrap();

        g.remove_edge(e).unwrap();
        assert_eq!(g.remove_edge(e), Err(GraphError::invalid_edge()));
        assert_eq!(g.endpoints(e), Err(GraphError::invalid_edge()));
        assert_eq!(g.edge(e), Err(GraphError::invalid_edge()));

        g.remove_vertex(a).unwrap();
        assert_eq!(g.vertex(a), Err(GraphError::invalid_vertex()));
        assert_eq!(g.outgoing(a), Err(GraphError::invalid_vertex()));
        assert_eq!(
            g.insert_edge(a, b, "again"),
            Err(GraphError::invalid_vertex())
        );
        assert_eq!(g.remove_vertex(a), Err(GraphError::invalid_vertex()));
    }

    #[test]
    fn test_cross_instance_handles_rejected() {
        let mut g1 = graph();
        let mut g2 = graph();
        let a1 = g1.insert_vertex("a");
        let b2 = g2.insert_vertex("b");

        assert_eq!(g2.vertex(a1), Err(GraphError::invalid_vertex()));
        assert_eq!(g2.outgoing(a1), Err(GraphError::invalid_vertex()));
        assert_eq!(
            g2.insert_edge(a1, b2, "cross"),
            Err(GraphError::invalid_vertex())
        );
        assert_eq!(g1.remove_vertex(b2), Err(GraphError::invalid_vertex()));
    }

    #[test]
    fn test_rejected_insert_leaves_graph_unchanged() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        g.insert_edge(a, b, "ab").unwrap();

        let before_edges = g.edges();
        assert!(g.insert_edge(a, b, "dup").is_err());
        assert!(g.insert_edge(a, a, "loop").is_err());
        assert_eq!(g.edges(), before_edges);
        assert_eq!(g.outgoing(a).unwrap().len(), 1);
        assert_eq!(g.incoming(b).unwrap().len(), 1);
    }

    #[test]
    fn test_payload_replacement() {
        let mut g = graph();
        let a = g.insert_vertex("old");
        *g.vertex_mut(a).unwrap() = "new";
        assert_eq!(*g.vertex(a).unwrap(), "new");

        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "old").unwrap();
        *g.edge_mut(e).unwrap() = "new";
        assert_eq!(*g.edge(e).unwrap(), "new");
    }

    #[test]
    fn test_labels_default_unset_set_get_clear() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let e = g.insert_edge(a, b, "ab").unwrap();

        assert_eq!(g.vertex_label(a).unwrap(), None);
        assert_eq!(g.edge_label(e).unwrap(), None);

        g.set_vertex_label(a, 7).unwrap();
        g.set_edge_label(e, 9).unwrap();
        assert_eq!(g.vertex_label(a).unwrap(), Some(&7));
        assert_eq!(g.edge_label(e).unwrap(), Some(&9));

        // Overwrite is allowed at the engine level.
        g.set_vertex_label(a, 8).unwrap();
        assert_eq!(g.vertex_label(a).unwrap(), Some(&8));

        g.clear_labels();
        assert_eq!(g.vertex_label(a).unwrap(), None);
        assert_eq!(g.vertex_label(b).unwrap(), None);
        assert_eq!(g.edge_label(e).unwrap(), None);
    }

    #[test]
    fn test_snapshots_are_insertion_ordered_and_stable() {
        let mut g = graph();
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let c = g.insert_vertex("c");
        let ab = g.insert_edge(a, b, "ab").unwrap();
        let ac = g.insert_edge(a, c, "ac").unwrap();

        assert_eq!(g.vertices(), vec![a, b, c]);
        assert_eq!(g.edges(), vec![ab, ac]);
        assert_eq!(g.outgoing(a).unwrap(), vec![ab, ac]);

        // A snapshot taken before a mutation does not reflect it.
        let snapshot = g.vertices();
        let d = g.insert_vertex("d");
        assert!(!snapshot.contains(&d));
        assert!(g.vertices().contains(&d));

        g.remove_edge(ab).unwrap();
        assert_eq!(g.edges(), vec![ac]);
        assert_eq!(g.outgoing(a).unwrap(), vec![ac]);
        assert!(g.incoming(b).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_check_scans_smaller_incidence_list() {
        // High out-degree source, empty in-degree target: detection goes
        // through the target's incoming list and still finds nothing.
        let mut g = graph();
        let hub = g.insert_vertex("hub");
        for i in 0..32 {
            let v = g.insert_vertex(if i % 2 == 0 { "even" } else { "odd" });
            g.insert_edge(hub, v, "spoke").unwrap();
        }
        let fresh = g.insert_vertex("fresh");
        assert!(g.insert_edge(hub, fresh, "spoke").is_ok());
        assert_eq!(
            g.insert_edge(hub, fresh, "spoke"),
            Err(GraphError::DuplicateEdge)
        );
    }
}
