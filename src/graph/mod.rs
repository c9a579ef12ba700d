// src/graph/mod.rs
//! The graph model: interchange schema, adjacency construction, and
//! deterministic sample generators.

mod adjacency;
mod generators;
mod model;

pub use adjacency::{adjacency_to_graph, graph_to_adjacency, NodeMapping};
pub use generators::{cycle_graph, grid_graph, path_graph, star_graph};
pub use model::{Edge, Graph, Node, NodeId};
