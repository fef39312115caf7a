//! # `densegraph` - Weighted Directed Graphs on a Dense Matrix
//!
//! A small, self-contained weighted digraph with dynamic vertex and edge
//! mutation and two classic single-source traversals: Prim's minimum
//! spanning tree and Dijkstra's shortest paths.
//!
//! ## Model
//!
//! - **Vertices** carry a caller-chosen id ([`VertexId`]) and a dense index.
//!   The index is the vertex's position in the backing store and its
//!   row/column in the weight matrix; removing a vertex renumbers every
//!   later vertex, so indices stay contiguous.
//! - **Edges** are cells of a `V x V` weight matrix. A zero cell means "no
//!   edge", so only strictly positive, finite weights are accepted.
//! - **Traversal state** (`visited`, `distance`, `previous`) lives in the
//!   graph and is reset at the start of every [`Graph::prim`] or
//!   [`Graph::dijkstra`] call. Queries describe the most recent run only.
//!
//! ## Errors
//!
//! Mutations report rejection with `bool` (or a [`GraphError`] from the
//! `try_*` forms) and never partially apply. Queries on unknown ids answer
//! with sentinels: `false` for containment and paths, `+inf` for costs and
//! distances.
//!
//! ## Concurrency
//!
//! `Graph` has no internal locking. Share it across threads by wrapping the
//! whole instance in a mutex.
//!
//! ## Example
//!
//! ```rust
//! use densegraph::Graph;
//!
//! let mut g = Graph::new();
//! for id in 1..=3 {
//!     g.add_vertex(id);
//! }
//! g.add_edge(1, 2, 4.0);
//! g.add_edge(1, 3, 1.0);
//! g.add_edge(3, 2, 2.0);
//!
//! g.dijkstra(1);
//! assert_eq!(g.distance(2), 3.0);
//! assert_eq!(g.render_shortest_path(2), "1 --> 3 --> 2 distance: 3");
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::GraphError;
pub use graph::{Algorithm, Graph, Traversal, VertexId, ARROW, NO_PATH};
