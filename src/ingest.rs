//! Credits database ingestion.
//!
//! One line per movie, fields separated by "/": the first field is the
//! movie title, the remaining fields are actor names. Movies and actors
//! both become vertices of a bipartite graph, and every (movie, actor)
//! relation becomes a pair of opposite-direction edges. Deduplicating
//! names is this layer's job, via a name-to-handle map kept outside the
//! graph.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use degrees_core::error::{DegreesError, GraphError};
use degrees_core::graph::bfs::Predecessor;
use degrees_core::graph::{SparseGraph, VertexId};

/// Graph instantiation used by the CLI: names as payloads, relation kinds
/// as edge payloads, search predecessors as labels.
pub type CreditsGraph = SparseGraph<String, String, Predecessor>;

/// A credits database loaded into graph form.
pub struct Database {
    pub graph: CreditsGraph,
    vertices: HashMap<String, VertexId>,
}

impl Database {
    /// Load a database file from disk.
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, DegreesError> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read a database from any buffered source.
    pub fn read(reader: impl BufRead) -> Result<Self, DegreesError> {
        let mut graph = CreditsGraph::new();
        let mut vertices: HashMap<String, VertexId> = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split('/').filter(|f| !f.is_empty());
            let Some(movie) = fields.next() else { continue };
            let m = intern(&mut graph, &mut vertices, movie);
            for actor in fields {
                let a = intern(&mut graph, &mut vertices, actor);
                link(&mut graph, m, a)?;
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "database_loaded"
        );
        Ok(Self { graph, vertices })
    }

    /// Resolve a person (or movie) by exact name.
    pub fn resolve(&self, name: &str) -> Result<VertexId, DegreesError> {
        self.vertices
            .get(name)
            .copied()
            .ok_or_else(|| DegreesError::PersonNotFound {
                name: name.to_string(),
            })
    }
}

fn intern(
    graph: &mut CreditsGraph,
    vertices: &mut HashMap<String, VertexId>,
    name: &str,
) -> VertexId {
    if let Some(&v) = vertices.get(name) {
        return v;
    }
    let v = graph.insert_vertex(name.to_string());
    vertices.insert(name.to_string(), v);
    v
}

fn link(graph: &mut CreditsGraph, movie: VertexId, actor: VertexId) -> Result<(), DegreesError> {
    for (from, to, relation) in [(movie, actor, "features"), (actor, movie, "acts in")] {
        match graph.insert_edge(from, to, relation.to_string()) {
            Ok(_) => {}
            // The same (movie, actor) pair listed twice is already linked.
            Err(GraphError::DuplicateEdge) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
