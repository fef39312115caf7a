//! Predecessor-chain reconstruction and rendering.
//!
//! A vertex is on a path only if following `previous` links from it reaches
//! the source of the last traversal. Predecessors are stored by id, so a
//! chain that runs into a removed vertex (or whose source was removed) is
//! simply reported as "no path".

use core::fmt::Display;
use std::io;

use num_traits::Float;

use crate::graph::vertex::VertexId;
use crate::graph::weighted::Graph;

/// Marker rendered in place of a path that does not exist.
pub const NO_PATH: &str = "<no path>";

/// Separator between consecutive vertex ids in a rendered path.
pub const ARROW: &str = " --> ";

impl<W: Float> Graph<W> {
    /// Returns the chain of vertex ids from the last traversal's source to
    /// `dest`, source first, or `None` if the predecessor chain from `dest`
    /// does not lead back to that source.
    pub fn path(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        let root = self.last_traversal?.source;
        let mut idx = self.index_of(dest)?;
        let mut chain = vec![dest];
        // A valid chain never repeats a vertex.
        for _ in 0..self.vertex_count() {
            let vertex = &self.vertices[idx];
            if vertex.id == root {
                chain.reverse();
                return Some(chain);
            }
            let prev = vertex.previous?;
            idx = self.index_of(prev)?;
            chain.push(prev);
        }
        None
    }

    /// Returns `true` if `id` is connected to the last traversal's source
    /// through its predecessor chain.
    ///
    /// This walks the chain rather than trusting a finite distance. Unknown
    /// ids and runs that never happened answer `false`.
    pub fn is_path(&self, id: VertexId) -> bool {
        self.path(id).is_some()
    }

    /// Returns the `distance` recorded for `id` by the last traversal.
    ///
    /// After [`dijkstra`](Graph::dijkstra) this is the shortest-path cost.
    /// Unknown ids and unreached vertices answer `+inf`.
    pub fn distance(&self, id: VertexId) -> W {
        self.index_of(id)
            .map_or_else(W::infinity, |idx| self.vertices[idx].distance)
    }

    /// Lists `(previous, vertex, weight)` for every vertex on a valid chain
    /// from the last source, in dense-index order.
    ///
    /// After [`prim`](Graph::prim) these are the spanning tree's edges.
    pub fn tree_edges(&self) -> Vec<(VertexId, VertexId, W)> {
        self.vertices
            .iter()
            .filter(|v| self.is_path(v.id))
            .filter_map(|v| v.previous.map(|prev| (prev, v.id, self.cost(prev, v.id))))
            .collect()
    }

    /// Renders the chain to `dest` as `a --> b --> c`, or `<no path>`.
    pub fn render_path(&self, dest: VertexId) -> String {
        match self.path(dest) {
            Some(chain) => join(&chain),
            None => NO_PATH.to_string(),
        }
    }

    /// Writes [`render_path`](Self::render_path) followed by a newline.
    ///
    /// # Errors
    /// Propagates any write error from `out`.
    pub fn print_path(&self, dest: VertexId, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{}", self.render_path(dest))
    }
}

impl<W: Float + Display> Graph<W> {
    /// Renders the chain to `dest` with its total cost, as
    /// `a --> b --> c distance: 7`, or `<no path>` when `dest` is at `+inf`
    /// or its chain is broken.
    pub fn render_shortest_path(&self, dest: VertexId) -> String {
        let total = self.distance(dest);
        match self.path(dest) {
            Some(chain) if total.is_finite() => format!("{} distance: {total}", join(&chain)),
            _ => NO_PATH.to_string(),
        }
    }

    /// Writes [`render_shortest_path`](Self::render_shortest_path) followed
    /// by a newline.
    ///
    /// # Errors
    /// Propagates any write error from `out`.
    pub fn print_shortest_path(&self, dest: VertexId, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{}", self.render_shortest_path(dest))
    }
}

fn join(chain: &[VertexId]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(ARROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> Graph {
        let mut g = Graph::new();
        for id in [1, 2, 3] {
            g.add_vertex(id);
        }
        g.add_edge(1, 2, 2.0);
        g.add_edge(2, 3, 0.5);
        g
    }

    #[test]
    fn path_before_any_traversal_is_absent() {
        let g = chain_graph();
        assert!(!g.is_path(1));
        assert_eq!(g.render_path(3), NO_PATH);
    }

    #[test]
    fn render_shortest_path_formats_total() {
        let mut g = chain_graph();
        g.dijkstra(1);
        assert_eq!(g.render_shortest_path(3), "1 --> 2 --> 3 distance: 2.5");
        assert_eq!(g.render_shortest_path(1), "1 distance: 0");
        assert_eq!(g.render_shortest_path(42), NO_PATH);
    }

    #[test]
    fn print_path_writes_a_line() {
        let mut g = chain_graph();
        g.prim(1);
        let mut out = Vec::new();
        g.print_path(3, &mut out).unwrap();
        g.print_path(1, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 --> 2 --> 3\n1\n");
    }

    #[test]
    fn removed_intermediate_breaks_the_chain() {
        let mut g = chain_graph();
        g.dijkstra(1);
        assert!(g.remove_vertex(2));
        assert!(!g.is_path(3));
        assert_eq!(g.render_shortest_path(3), NO_PATH);
        assert!(g.is_path(1));
    }

    #[test]
    fn removed_source_invalidates_every_chain() {
        let mut g = chain_graph();
        g.prim(1);
        assert!(g.remove_vertex(1));
        assert!(!g.is_path(2));
        assert!(!g.is_path(3));
    }

    #[test]
    fn re_added_source_does_not_revive_chains() {
        let mut g = chain_graph();
        g.dijkstra(1);
        assert!(g.remove_vertex(1));
        assert!(g.add_vertex(1));

        assert!(g.last_traversal().is_none());
        assert!(!g.is_path(1));
        assert!(!g.is_path(2));
        assert_eq!(g.render_shortest_path(2), NO_PATH);
        assert_eq!(g.render_path(3), NO_PATH);
    }

    #[test]
    fn removing_another_vertex_keeps_the_run() {
        let mut g = chain_graph();
        g.add_vertex(4);
        g.prim(1);
        assert!(g.remove_vertex(4));
        assert_eq!(g.last_traversal().map(|t| t.source), Some(1));
        assert!(g.is_path(3));
    }

    #[test]
    fn tree_edges_follow_predecessors() {
        let mut g = chain_graph();
        g.add_vertex(4);
        g.prim(1);
        assert_eq!(g.tree_edges(), vec![(1, 2, 2.0), (2, 3, 0.5)]);
    }
}
