//! The weighted directed graph and its traversals.
//!
//! - `matrix`: dense, resizable weight storage
//! - `vertex`: vertex records and traversal-scoped state
//! - `weighted`: the [`Graph`] container (mutation and query surface)
//! - `traversal`: Prim, Dijkstra, and path reconstruction

mod invariants;
mod matrix;
mod traversal;
mod vertex;
mod weighted;

pub use traversal::{ARROW, NO_PATH};
pub use vertex::{Algorithm, Traversal, VertexId};
pub use weighted::Graph;
