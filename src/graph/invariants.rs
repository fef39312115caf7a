//! Debug-only structural assertions.
//!
//! Mutations call [`Graph::debug_assert_invariants`] before returning so that
//! a broken renumbering or a drifting edge counter fails loudly in tests,
//! while release builds pay nothing.

use num_traits::Float;

use super::weighted::Graph;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

impl<W: Float> Graph<W> {
    /// Checks every invariant that mutations must preserve:
    /// - the id map and the backing store agree in size
    /// - each vertex's `index` equals its position, with no gaps
    /// - the id map points every id at that position
    /// - the matrix dimension equals the vertex count
    /// - the edge counter equals the number of non-zero cells
    pub(crate) fn debug_assert_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        invariant_assert_msg(
            self.index.len() == self.vertices.len(),
            "id map size differs from vertex count",
        );
        for (pos, vertex) in self.vertices.iter().enumerate() {
            invariant_assert_msg(vertex.index == pos, "dense index differs from position");
            invariant_assert_msg(
                self.index.get(&vertex.id) == Some(&pos),
                "id map points at the wrong position",
            );
        }
        invariant_assert_msg(
            self.weights.dim() == self.vertices.len(),
            "matrix dimension differs from vertex count",
        );
        invariant_assert_msg(
            self.weights.non_zero() == self.edge_count,
            "edge counter differs from non-zero cells",
        );
    }
}
