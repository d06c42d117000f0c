//! Unweighted shortest-path search driven entirely through the graph
//! contract.
//!
//! There is no auxiliary visited set: a vertex counts as visited exactly
//! when its label is set, and the label records the vertex it was first
//! discovered from. Labels are set once and never overwritten, so each one
//! is the minimum-hop predecessor (ties broken by `outgoing` iteration
//! order). The target is checked on dequeue, not on discovery.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};

use super::{SparseGraph, VertexId};

/// Label type instantiated by the path finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predecessor {
    /// Marks the search source.
    Start,
    /// Back-pointer to the vertex this one was discovered from.
    Via(VertexId),
}

/// Finds a shortest directed path from `source` to `target`, inclusive of
/// both endpoints.
///
/// Returns `Unreachable` when no directed path exists, and `InvalidHandle`
/// when either endpoint is foreign to `graph` or already removed. All
/// labels are cleared before returning, on every outcome, so back-to-back
/// searches on the same graph are idempotent.
#[tracing::instrument(skip(graph))]
pub fn shortest_path<V, E>(
    graph: &mut SparseGraph<V, E, Predecessor>,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<VertexId>> {
    graph.vertex(source)?;
    graph.vertex(target)?;

    graph.set_vertex_label(source, Predecessor::Start)?;
    let mut queue = VecDeque::new();
    queue.push_back(source);
    let mut discovered = 1usize;

    while let Some(current) = queue.pop_front() {
        if current == target {
            let path = reconstruct(graph, target)?;
            graph.clear_labels();
            tracing::debug!(discovered, hops = path.len() - 1, "path_found");
            return Ok(path);
        }
        for edge in graph.outgoing(current)? {
            let (_, next) = graph.endpoints(edge)?;
            if graph.vertex_label(next)?.is_none() {
                graph.set_vertex_label(next, Predecessor::Via(current))?;
                queue.push_back(next);
                discovered += 1;
            }
        }
    }

    graph.clear_labels();
    tracing::debug!(discovered, "queue_exhausted");
    Err(GraphError::Unreachable)
}

fn reconstruct<V, E>(
    graph: &SparseGraph<V, E, Predecessor>,
    target: VertexId,
) -> Result<Vec<VertexId>> {
    let mut path = vec![target];
    let mut current = target;
    loop {
        match graph.vertex_label(current)? {
            Some(Predecessor::Start) => break,
            Some(Predecessor::Via(prev)) => {
                path.push(*prev);
                current = *prev;
            }
            // Labels are assigned before enqueue, so a dequeued vertex's
            // back-chain is always complete.
            None => return Err(GraphError::Unreachable),
        }
    }
    path.reverse();
    Ok(path)
}
