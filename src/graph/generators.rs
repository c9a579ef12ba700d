// src/graph/generators.rs
//! Deterministic sample-graph builders.
//!
//! These are the primary test fixtures for the engine: each family has a
//! known reachability structure, so expected results can be stated in
//! closed form.

use super::model::{Edge, Graph, Node};
use std::f64::consts::PI;

const CENTER_X: f64 = 400.0;
const CENTER_Y: f64 = 300.0;
const RING_RADIUS: f64 = 150.0;

fn named(name: Option<String>, default: String, description: String) -> (String, String) {
    (name.unwrap_or(default), description)
}

/// Path graph: nodes 0..n-1 in a line, edges (i, i+1).
#[must_use]
pub fn path_graph(n: usize, name: Option<String>) -> Graph {
    let (name, description) = named(
        name,
        format!("path{n}"),
        format!("Path graph with {n} nodes"),
    );

    let nodes = (0..n)
        .map(|i| Node::at(i as i64, 50.0 + i as f64 * 100.0, 300.0))
        .collect();
    let edges = (0..n.saturating_sub(1))
        .map(|i| Edge::new(i as i64, i as i64 + 1))
        .collect();

    Graph {
        name: Some(name),
        description: Some(description),
        nodes,
        edges,
    }
}

/// Cycle graph: a path with the ends joined, drawn on a circle.
#[must_use]
pub fn cycle_graph(n: usize, name: Option<String>) -> Graph {
    let (name, description) = named(
        name,
        format!("cycle{n}"),
        format!("Cycle graph with {n} nodes"),
    );

    let nodes = (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            Node::at(
                i as i64,
                CENTER_X + RING_RADIUS * angle.cos(),
                CENTER_Y + RING_RADIUS * angle.sin(),
            )
        })
        .collect();
    let edges = (0..n)
        .map(|i| Edge::new(i as i64, ((i + 1) % n) as i64))
        .collect();

    Graph {
        name: Some(name),
        description: Some(description),
        nodes,
        edges,
    }
}

/// Star graph: center node 0 connected to n-1 leaves on a ring.
#[must_use]
pub fn star_graph(n: usize, name: Option<String>) -> Graph {
    let (name, description) = named(
        name,
        format!("star{n}"),
        format!("Star graph with {n} nodes (1 center + {} leaves)", n.saturating_sub(1)),
    );

    let mut nodes = vec![Node::at(0, CENTER_X, CENTER_Y)];
    let mut edges = Vec::new();
    for i in 1..n {
        let angle = 2.0 * PI * (i - 1) as f64 / (n - 1) as f64;
        nodes.push(Node::at(
            i as i64,
            CENTER_X + RING_RADIUS * angle.cos(),
            CENTER_Y + RING_RADIUS * angle.sin(),
        ));
        edges.push(Edge::new(0, i as i64));
    }

    Graph {
        name: Some(name),
        description: Some(description),
        nodes,
        edges,
    }
}

/// Grid graph: rows x cols lattice, id = row * cols + col, edges to the
/// right and downward neighbors.
#[must_use]
pub fn grid_graph(rows: usize, cols: usize, name: Option<String>) -> Graph {
    let (name, description) = named(
        name,
        format!("grid{rows}x{cols}"),
        format!("{rows}x{cols} grid graph with {} nodes", rows * cols),
    );

    const SPACING: f64 = 60.0;
    const START: f64 = 50.0;

    let mut nodes = Vec::with_capacity(rows * cols);
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let id = (r * cols + c) as i64;
            nodes.push(Node::at(
                id,
                START + c as f64 * SPACING,
                START + r as f64 * SPACING,
            ));
            if c + 1 < cols {
                edges.push(Edge::new(id, (r * cols + c + 1) as i64));
            }
            if r + 1 < rows {
                edges.push(Edge::new(id, ((r + 1) * cols + c) as i64));
            }
        }
    }

    Graph {
        name: Some(name),
        description: Some(description),
        nodes,
        edges,
    }
}
