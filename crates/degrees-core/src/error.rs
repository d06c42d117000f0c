//! Error types and exit codes for degrees
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, logging)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown person, no connection)

use std::fmt;

use thiserror::Error;

/// Convenience Result type for graph engine operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Process exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown person, no connection (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Which kind of graph element a rejected handle referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => write!(f, "vertex"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

/// Errors raised by the graph engine and path finder.
///
/// Every violation is reported to the immediate caller as a value; the
/// engine never recovers internally, and a rejected insert or remove leaves
/// the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The handle is foreign to this graph instance or refers to a removed
    /// element. Always a caller bug.
    #[error("invalid {kind} handle: not owned by this graph or already removed")]
    InvalidHandle { kind: ElementKind },

    #[error("self-loop edges are not allowed")]
    SelfLoop,

    #[error("an edge already exists between these vertices in this direction")]
    DuplicateEdge,

    #[error("vertex has {incident} incident edge(s); remove them before removing the vertex")]
    VertexHasEdges { incident: usize },

    /// Not a bug: a valid search outcome the caller must handle.
    #[error("no directed path exists from source to target")]
    Unreachable,
}

impl GraphError {
    pub(crate) fn invalid_vertex() -> Self {
        GraphError::InvalidHandle {
            kind: ElementKind::Vertex,
        }
    }

    pub(crate) fn invalid_edge() -> Self {
        GraphError::InvalidHandle {
            kind: ElementKind::Edge,
        }
    }
}

/// Errors surfaced by the degrees CLI.
#[derive(Debug, Error)]
pub enum DegreesError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("can't find {name} in database")]
    PersonNotFound { name: String },

    #[error("no connection between {from} and {to}")]
    NoConnection { from: String, to: String },

    #[error("{0}")]
    UsageError(String),
}

impl DegreesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DegreesError::UsageError(_) => ExitCode::Usage,
            DegreesError::PersonNotFound { .. } | DegreesError::NoConnection { .. } => {
                ExitCode::Data
            }
            DegreesError::Graph(GraphError::Unreachable) => ExitCode::Data,
            DegreesError::Graph(_) | DegreesError::Io(_) | DegreesError::Json(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get a stable machine-readable error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            DegreesError::Graph(GraphError::InvalidHandle { .. }) => "invalid_handle",
            DegreesError::Graph(GraphError::SelfLoop) => "self_loop",
            DegreesError::Graph(GraphError::DuplicateEdge) => "duplicate_edge",
            DegreesError::Graph(GraphError::VertexHasEdges { .. }) => "vertex_has_edges",
            DegreesError::Graph(GraphError::Unreachable) => "unreachable",
            DegreesError::Io(_) => "io_error",
            DegreesError::Json(_) => "json_error",
            DegreesError::PersonNotFound { .. } => "person_not_found",
            DegreesError::NoConnection { .. } => "no_connection",
            DegreesError::UsageError(_) => "usage_error",
        }
    }

    /// Convert error to a JSON envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        })
    }
}
