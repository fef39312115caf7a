//! Single-source traversals over [`Graph`] and the queries on their results.
//!
//! Both algorithms write into the per-vertex `visited`/`distance`/`previous`
//! fields owned by the graph, after resetting them. Only the most recent run
//! is ever observable.
//!
//! Minimum selection is a linear scan in dense-index order with strict `<`,
//! so equal distances resolve to the lowest index and output is
//! deterministic.

mod dijkstra;
mod path;
mod prim;

pub use path::{ARROW, NO_PATH};

use num_traits::Float;

use super::vertex::{Algorithm, Traversal, VertexId};
use super::weighted::Graph;

impl<W: Float> Graph<W> {
    /// Returns the algorithm and source of the most recent traversal, if any.
    pub fn last_traversal(&self) -> Option<Traversal> {
        self.last_traversal
    }

    /// Resets every vertex, seeds `source` at distance zero, and records the
    /// run. Returns the source index, or `None` without touching any state
    /// when `source` is unknown.
    fn begin(&mut self, algorithm: Algorithm, source: VertexId) -> Option<usize> {
        let src = self.index_of(source)?;
        for vertex in &mut self.vertices {
            vertex.reset();
        }
        self.vertices[src].distance = W::zero();
        self.last_traversal = Some(Traversal { algorithm, source });
        Some(src)
    }

    /// Picks the unvisited vertex with the smallest distance, lowest index
    /// first on ties.
    ///
    /// With `admit_infinite == false`, vertices still at `+inf` are never
    /// picked, so `None` also means "nothing reachable is left". Prim scans
    /// this way and stops there. Dijkstra passes `true` on purpose: it keeps
    /// selecting `+inf` vertices until every vertex is visited. Both scans
    /// break equal finite distances toward the lowest index.
    fn select_unvisited(&self, admit_infinite: bool) -> Option<usize> {
        let mut best: Option<(usize, W)> = None;
        for vertex in &self.vertices {
            if vertex.visited || (!admit_infinite && vertex.distance.is_infinite()) {
                continue;
            }
            if best.is_none_or(|(_, d)| vertex.distance < d) {
                best = Some((vertex.index, vertex.distance));
            }
        }
        best.map(|(idx, _)| idx)
    }

    fn visited_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.visited).count()
    }
}
