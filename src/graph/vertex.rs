//! Vertex records and their traversal-scoped state.

use num_traits::Float;

/// Caller-chosen, externally visible vertex identifier.
pub type VertexId = usize;

/// A vertex in the backing store.
///
/// `index` is the vertex's position in the store and its row/column in the
/// weight matrix. The remaining fields belong to the most recent traversal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Vertex<W> {
    pub(crate) id: VertexId,
    pub(crate) index: usize,
    pub(crate) visited: bool,
    pub(crate) distance: W,
    /// Predecessor by id, not by index, so it never dangles when indices shift.
    pub(crate) previous: Option<VertexId>,
}

impl<W: Float> Vertex<W> {
    pub(crate) fn new(id: VertexId, index: usize) -> Self {
        Self {
            id,
            index,
            visited: false,
            distance: W::infinity(),
            previous: None,
        }
    }

    /// Clears the traversal-scoped fields.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.visited = false;
        self.distance = W::infinity();
        self.previous = None;
    }
}

/// The algorithm that produced the current traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Minimum spanning tree; `distance` is the cheapest connecting edge.
    Prim,
    /// Shortest paths; `distance` is the cumulative path cost.
    Dijkstra,
}

/// Identifies the most recent traversal run on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    /// Which algorithm ran.
    pub algorithm: Algorithm,
    /// The source vertex id it ran from.
    pub source: VertexId,
}
