// src/graph/model.rs
//! The JSON interchange schema for graphs.
//!
//! Collaborators (editors, benchmark scripts, HTTP front ends) exchange
//! graphs in this shape; the engine only ever borrows a `Graph` to turn
//! it into an adjacency matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node identifier: either an integer or a string key.
///
/// The interchange format allows both, and reachability only needs a
/// total order to map identifiers onto dense indices deterministically.
/// Derived `Ord` compares integers numerically and sorts every integer
/// before every string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

/// A node with optional display coordinates.
///
/// Coordinates are carried for round-tripping with visual editors and
/// are irrelevant to every algorithm here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            x: None,
            y: None,
        }
    }

    #[must_use]
    pub fn at(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x: Some(x),
            y: Some(y),
        }
    }
}

/// An undirected edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// An undirected, unweighted graph plus optional metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// An unnamed graph from parts.
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            name: None,
            description: None,
            nodes,
            edges,
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
