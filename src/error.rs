//! Rejection reasons for graph mutations.
//!
//! Every mutation on [`Graph`](crate::Graph) has a boolean form and a `try_*`
//! form. The boolean form is the `try_*` result collapsed with `is_ok()`, so
//! both report exactly the same outcomes. Queries never produce a
//! `GraphError`; they answer with sentinels instead (`false`, `+inf`).

use thiserror::Error;

use crate::VertexId;

/// Why a mutation was rejected.
///
/// A rejected mutation leaves the graph exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `add_vertex` was called with an id that is already present.
    #[error("vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// An operation named a vertex id that is not present.
    #[error("vertex {0} does not exist")]
    UnknownVertex(VertexId),

    /// `add_edge` would overwrite an existing edge.
    #[error("edge {src} -> {dest} already exists")]
    DuplicateEdge {
        /// Source vertex id.
        src: VertexId,
        /// Destination vertex id.
        dest: VertexId,
    },

    /// `remove_edge` named an edge that is not present.
    #[error("edge {src} -> {dest} does not exist")]
    MissingEdge {
        /// Source vertex id.
        src: VertexId,
        /// Destination vertex id.
        dest: VertexId,
    },

    /// The weight is zero, negative, or not finite.
    ///
    /// A zero cell encodes "no edge", so only strictly positive finite
    /// weights can be stored.
    #[error("edge {src} -> {dest} needs a positive finite weight")]
    InvalidWeight {
        /// Source vertex id.
        src: VertexId,
        /// Destination vertex id.
        dest: VertexId,
    },
}

/// Result alias for graph mutations.
pub type Result<T> = core::result::Result<T, GraphError>;
