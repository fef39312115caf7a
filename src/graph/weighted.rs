//! A weighted directed graph over a dense adjacency matrix.
//!
//! Vertices carry caller-chosen ids and a dense index. The index addresses
//! the weight matrix and always equals the vertex's position in the backing
//! store: removing a vertex renumbers every later vertex down by one.
//!
//! Edges live only in the matrix. A zero cell means "no edge", which is why
//! [`Graph::add_edge`] only accepts strictly positive, finite weights.

use std::collections::HashMap;

use num_traits::Float;
use tracing::debug;

use super::matrix::WeightMatrix;
use super::vertex::{Traversal, Vertex, VertexId};
use crate::error::{GraphError, Result};

/// A weighted directed graph with per-vertex traversal state.
///
/// The graph owns the state written by [`prim`](Graph::prim) and
/// [`dijkstra`](Graph::dijkstra); each run resets it first, so queries always
/// describe the most recent run. `Clone` produces a fully independent deep
/// copy.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `contains_vertex` | \(O(1)\) | Hash lookup in the id map |
/// | `contains_edge` / `cost` | \(O(1)\) | Two hash lookups and one cell read |
/// | `add_vertex` | \(O(V^2)\) | Re-lays the matrix with one more row and column |
/// | `remove_vertex` | \(O(V^2)\) | Compacts the matrix and renumbers later vertices |
/// | `add_edge` / `remove_edge` | \(O(1)\) | Single cell write |
/// | `prim` / `dijkstra` | \(O(V^2)\) | Linear-scan minimum selection |
#[derive(Debug, Clone)]
pub struct Graph<W = f64> {
    pub(crate) vertices: Vec<Vertex<W>>,
    pub(crate) index: HashMap<VertexId, usize>,
    pub(crate) weights: WeightMatrix<W>,
    pub(crate) edge_count: usize,
    pub(crate) last_traversal: Option<Traversal>,
}

impl<W: Float> Default for Graph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Float> Graph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            weights: WeightMatrix::with_capacity(capacity),
            edge_count: 0,
            last_traversal: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if a vertex with `id` is present. \(O(1)\).
    #[inline]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns `true` if the edge `src -> dest` is present.
    ///
    /// Unknown ids simply answer `false`.
    pub fn contains_edge(&self, src: VertexId, dest: VertexId) -> bool {
        self.cell(src, dest).is_some_and(|w| !w.is_zero())
    }

    /// Returns the weight of `src -> dest`, or `+inf` when the edge is
    /// absent or either id is unknown.
    ///
    /// This deliberately does not distinguish "unknown vertex" from "no
    /// edge"; check [`contains_vertex`](Self::contains_vertex) first if the
    /// difference matters.
    pub fn cost(&self, src: VertexId, dest: VertexId) -> W {
        match self.cell(src, dest) {
            Some(w) if !w.is_zero() => w,
            _ => W::infinity(),
        }
    }

    /// Returns the dense index currently assigned to `id`.
    #[inline]
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Iterates vertex ids in dense-index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    /// Iterates the outgoing edges of `id` as `(dest, weight)` in
    /// dense-index order. Empty for an unknown id.
    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, W)> + '_ {
        let row = self.index_of(id).map_or(&[][..], |idx| self.weights.row(idx));
        row.iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(move |(col, &w)| (self.vertices[col].id, w))
    }

    /// Returns the number of edges leaving `id` (zero for an unknown id).
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.out_edges(id).count()
    }

    /// Returns the number of edges entering `id` (zero for an unknown id).
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.index_of(id).map_or(0, |idx| {
            self.weights.column(idx).filter(|w| !w.is_zero()).count()
        })
    }

    /// Adds a vertex with `id`. Returns `false` if the id is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        self.try_add_vertex(id).is_ok()
    }

    /// Adds a vertex with `id` and returns its dense index.
    ///
    /// The new vertex gets index `vertex_count()`, and the matrix grows by
    /// one row and one column of empty cells.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if `id` is already present.
    pub fn try_add_vertex(&mut self, id: VertexId) -> Result<usize> {
        if self.contains_vertex(id) {
            debug!(id, "add_vertex rejected: duplicate id");
            return Err(GraphError::DuplicateVertex(id));
        }
        let idx = self.weights.grow();
        self.vertices.push(Vertex::new(id, idx));
        self.index.insert(id, idx);
        debug!(id, index = idx, vertices = self.vertex_count(), "vertex added");
        self.debug_assert_invariants();
        Ok(idx)
    }

    /// Adds the edge `src -> dest` with `weight`.
    ///
    /// Returns `false` if either id is unknown, the edge already exists, or
    /// the weight is not strictly positive and finite.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: W) -> bool {
        self.try_add_edge(src, dest, weight).is_ok()
    }

    /// Adds the edge `src -> dest` with weight one.
    pub fn add_unit_edge(&mut self, src: VertexId, dest: VertexId) -> bool {
        self.add_edge(src, dest, W::one())
    }

    /// Adds the edge `src -> dest` with `weight`.
    ///
    /// An existing edge is never overwritten; remove it first to change its
    /// weight.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `src` or `dest` is absent
    /// - [`GraphError::DuplicateEdge`] if the edge already exists
    /// - [`GraphError::InvalidWeight`] if `weight` is zero, negative, or not
    ///   finite
    pub fn try_add_edge(&mut self, src: VertexId, dest: VertexId, weight: W) -> Result<()> {
        let (s, d) = self.endpoints(src, dest).inspect_err(|e| {
            debug!(src, dest, error = %e, "add_edge rejected");
        })?;
        if !self.weights.get(s, d).is_some_and(|w| w.is_zero()) {
            debug!(src, dest, "add_edge rejected: edge exists");
            return Err(GraphError::DuplicateEdge { src, dest });
        }
        if !(weight.is_finite() && weight > W::zero()) {
            debug!(src, dest, "add_edge rejected: invalid weight");
            return Err(GraphError::InvalidWeight { src, dest });
        }
        self.weights.set(s, d, weight);
        self.edge_count += 1;
        debug!(src, dest, edges = self.edge_count, "edge added");
        self.debug_assert_invariants();
        Ok(())
    }

    /// Removes the vertex `id` and every edge touching it.
    /// Returns `false` if the id is unknown.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        self.try_remove_vertex(id).is_ok()
    }

    /// Removes the vertex `id` and every incoming and outgoing edge.
    ///
    /// Every vertex after it in the backing store moves down one index.
    /// Returns the number of edges destroyed.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `id` is absent.
    pub fn try_remove_vertex(&mut self, id: VertexId) -> Result<usize> {
        let Some(idx) = self.index_of(id) else {
            debug!(id, "remove_vertex rejected: unknown id");
            return Err(GraphError::UnknownVertex(id));
        };
        let incident = self.weights.incident(idx);
        self.weights.shrink(idx);
        self.vertices.remove(idx);
        self.index.remove(&id);
        for vertex in &mut self.vertices[idx..] {
            vertex.index -= 1;
            self.index.insert(vertex.id, vertex.index);
        }
        self.edge_count -= incident;
        // Chains are rooted at the source id; a later vertex reusing it must not revive them.
        if self.last_traversal.is_some_and(|t| t.source == id) {
            self.last_traversal = None;
        }
        debug!(
            id,
            index = idx,
            edges_removed = incident,
            vertices = self.vertex_count(),
            edges = self.edge_count,
            "vertex removed"
        );
        self.debug_assert_invariants();
        Ok(incident)
    }

    /// Removes the edge `src -> dest`. Returns `false` if it does not exist.
    pub fn remove_edge(&mut self, src: VertexId, dest: VertexId) -> bool {
        self.try_remove_edge(src, dest).is_ok()
    }

    /// Removes the edge `src -> dest` and returns its weight.
    ///
    /// # Errors
    /// - [`GraphError::UnknownVertex`] if `src` or `dest` is absent
    /// - [`GraphError::MissingEdge`] if there is no such edge
    pub fn try_remove_edge(&mut self, src: VertexId, dest: VertexId) -> Result<W> {
        let (s, d) = self.endpoints(src, dest).inspect_err(|e| {
            debug!(src, dest, error = %e, "remove_edge rejected");
        })?;
        if self.weights.get(s, d).is_none_or(|w| w.is_zero()) {
            debug!(src, dest, "remove_edge rejected: no such edge");
            return Err(GraphError::MissingEdge { src, dest });
        }
        let weight = self.weights.set(s, d, W::zero());
        self.edge_count -= 1;
        debug!(src, dest, edges = self.edge_count, "edge removed");
        self.debug_assert_invariants();
        Ok(weight)
    }

    /// Resolves both endpoints to dense indices, source first.
    fn endpoints(&self, src: VertexId, dest: VertexId) -> Result<(usize, usize)> {
        let s = self.index_of(src).ok_or(GraphError::UnknownVertex(src))?;
        let d = self.index_of(dest).ok_or(GraphError::UnknownVertex(dest))?;
        Ok((s, d))
    }

    /// Reads the raw matrix cell for `src -> dest`, if both ids exist.
    fn cell(&self, src: VertexId, dest: VertexId) -> Option<W> {
        let (s, d) = self.endpoints(src, dest).ok()?;
        self.weights.get(s, d)
    }
}
