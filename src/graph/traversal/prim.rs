//! Prim's minimum spanning tree.

use num_traits::Float;
use tracing::{debug, trace};

use crate::graph::vertex::{Algorithm, VertexId};
use crate::graph::weighted::Graph;

impl<W: Float> Graph<W> {
    /// Grows a minimum spanning tree from `source_id` along outgoing edges.
    ///
    /// After the run, a vertex's `distance` is the weight of the cheapest
    /// edge connecting it to the tree (not a cumulative cost), and its
    /// predecessor is the tree vertex at the other end of that edge.
    /// Vertices not reachable from the source keep `+inf` and no
    /// predecessor.
    ///
    /// An unknown `source_id` leaves all traversal state untouched.
    #[tracing::instrument(level = "debug", skip(self), fields(vertices = self.vertex_count()))]
    pub fn prim(&mut self, source_id: VertexId) {
        if self.begin(Algorithm::Prim, source_id).is_none() {
            debug!("prim skipped: unknown source");
            return;
        }
        let n = self.vertex_count();

        for _ in 1..n {
            // Everything still unvisited is at +inf: the tree is complete.
            let Some(u) = self.select_unvisited(false) else {
                break;
            };
            self.vertices[u].visited = true;
            let from = self.vertices[u].id;
            trace!(vertex = from, "tree vertex selected");

            let row = self.weights.row(u);
            for (v, &weight) in row.iter().enumerate() {
                let neighbor = &mut self.vertices[v];
                if weight > W::zero() && !neighbor.visited && weight < neighbor.distance {
                    neighbor.distance = weight;
                    neighbor.previous = Some(from);
                    trace!(vertex = neighbor.id, via = from, "connecting edge improved");
                }
            }
        }

        debug!(
            tree_vertices = self.vertices.iter().filter(|v| v.distance.is_finite()).count(),
            "prim finished"
        );
    }
}
