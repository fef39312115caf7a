//! Dijkstra's single-source shortest paths.

use num_traits::Float;
use tracing::{debug, trace};

use crate::graph::vertex::{Algorithm, VertexId};
use crate::graph::weighted::Graph;

impl<W: Float> Graph<W> {
    /// Computes shortest paths from `source_id` along outgoing edges.
    ///
    /// After the run, a vertex's `distance` is the minimum total weight of
    /// any directed path from the source, and its predecessor is the
    /// previous vertex on one such path. Unreachable vertices keep `+inf`.
    ///
    /// Every vertex is selected exactly once, including those still at
    /// `+inf`, so the run always terminates after `vertex_count()` rounds.
    ///
    /// An unknown `source_id` leaves all traversal state untouched.
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&mut self, source_id: VertexId) {
        if self.begin(Algorithm::Dijkstra, source_id).is_none() {
            debug!("dijkstra skipped: unknown source");
            return;
        }

        while let Some(u) = self.select_unvisited(true) {
            self.vertices[u].visited = true;
            let (from, base) = (self.vertices[u].id, self.vertices[u].distance);
            trace!(vertex = from, "closest vertex selected");
            if base.is_infinite() {
                // Nothing left is reachable; selecting it only marks it visited.
                continue;
            }

            let row = self.weights.row(u);
            for (v, &weight) in row.iter().enumerate() {
                let neighbor = &mut self.vertices[v];
                if weight <= W::zero() || neighbor.visited {
                    continue;
                }
                let candidate = base + weight;
                if candidate < neighbor.distance {
                    neighbor.distance = candidate;
                    neighbor.previous = Some(from);
                    trace!(vertex = neighbor.id, via = from, "distance relaxed");
                }
            }
        }

        debug!(
            reached = self.vertices.iter().filter(|v| v.distance.is_finite()).count(),
            visited = self.visited_count(),
            "dijkstra finished"
        );
    }
}
