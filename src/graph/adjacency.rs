// src/graph/adjacency.rs
//! Conversion between the interchange graph and a dense adjacency matrix.

use super::model::{Edge, Graph, Node, NodeId};
use crate::matrix::Matrix;
use std::collections::{BTreeSet, HashMap};

/// Bijection between external node identifiers and dense indices in
/// `[0, n)`.
///
/// Built by sorting the de-duplicated identifier set ascending, so the
/// same graph always produces the same index assignment regardless of
/// node order in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMapping {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl NodeMapping {
    fn from_ids(sorted: Vec<NodeId>) -> Self {
        let index = sorted
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self { ids: sorted, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Dense index of an external identifier, if it is in the graph.
    #[must_use]
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// External identifier at a dense index.
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&NodeId> {
        self.ids.get(index)
    }

    /// Identifiers in index order.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }
}

/// Builds the 0/1 adjacency matrix and the identifier mapping for a graph.
///
/// A graph with no nodes yields an empty matrix and an empty mapping;
/// callers treat that as a valid degenerate case. Edges whose endpoints
/// are not in the node list are silently ignored (a deliberate leniency
/// toward hand-edited graph files). Duplicate edges and self-loops are
/// idempotent: entries never exceed 1.
#[must_use]
pub fn graph_to_adjacency(graph: &Graph) -> (Matrix, NodeMapping) {
    let unique: BTreeSet<NodeId> = graph.nodes.iter().map(|n| n.id.clone()).collect();
    let mapping = NodeMapping::from_ids(unique.into_iter().collect());
    let n = mapping.len();

    let mut adjacency = Matrix::zeros(n, n);
    for edge in &graph.edges {
        let (Some(from), Some(to)) = (mapping.index_of(&edge.from), mapping.index_of(&edge.to))
        else {
            continue;
        };
        adjacency.set(from, to, 1);
        adjacency.set(to, from, 1);
    }

    (adjacency, mapping)
}

/// Inverse of [`graph_to_adjacency`], for export.
///
/// One node per row, placed on a row-major 10-wide grid so editors have
/// something sensible to draw; one edge per positive entry above the
/// diagonal. This direction is lossy by design: multiplicities and any
/// asymmetric residue collapse into a canonical undirected simple graph.
/// Without a mapping, identifiers default to the matrix indices.
#[must_use]
pub fn adjacency_to_graph(matrix: &Matrix, mapping: Option<&NodeMapping>) -> Graph {
    let n = matrix.row_count();
    let id_for = |i: usize| -> NodeId {
        mapping
            .and_then(|m| m.id_at(i).cloned())
            .unwrap_or(NodeId::Int(i as i64))
    };

    let nodes = (0..n)
        .map(|i| {
            Node::at(
                id_for(i),
                (100 + (i % 10) * 80) as f64,
                (100 + (i / 10) * 80) as f64,
            )
        })
        .collect();

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.get(i, j) > 0 {
                edges.push(Edge {
                    from: id_for(i),
                    to: id_for(j),
                });
            }
        }
    }

    Graph::new(nodes, edges)
}
