//! Interchange schema and adjacency round-trip behavior.

use reachlab_core::graph::{
    adjacency_to_graph, graph_to_adjacency, path_graph, Edge, Graph, Node, NodeId,
};
use reachlab_core::reach::reachability_via_powers;

#[test]
fn string_identifiers_map_deterministically() {
    // Node order in the file must not matter; only the sorted id order.
    let forward = Graph::new(
        vec![Node::new("alpha"), Node::new("beta"), Node::new("gamma")],
        vec![Edge::new("alpha", "beta"), Edge::new("beta", "gamma")],
    );
    let shuffled = Graph::new(
        vec![Node::new("gamma"), Node::new("alpha"), Node::new("beta")],
        vec![Edge::new("beta", "gamma"), Edge::new("alpha", "beta")],
    );

    let (a1, m1) = graph_to_adjacency(&forward);
    let (a2, m2) = graph_to_adjacency(&shuffled);
    assert_eq!(a1, a2);
    assert_eq!(m1.ids(), m2.ids());
    assert_eq!(m1.index_of(&NodeId::from("alpha")), Some(0));
    assert_eq!(m1.index_of(&NodeId::from("gamma")), Some(2));
}

#[test]
fn round_trip_preserves_reachability_structure() {
    let original = path_graph(6, None);
    let (adjacency, mapping) = graph_to_adjacency(&original);

    let exported = adjacency_to_graph(&adjacency, Some(&mapping));
    let (reimported, _) = graph_to_adjacency(&exported);

    assert_eq!(reimported, adjacency, "adjacency survives the round trip");
    assert_eq!(
        reachability_via_powers(&reimported).expect("square"),
        reachability_via_powers(&adjacency).expect("square")
    );
}

#[test]
fn round_trip_canonicalizes_duplicate_edges() {
    let messy = Graph::new(
        vec![Node::new(0), Node::new(1), Node::new(2)],
        vec![
            Edge::new(0, 1),
            Edge::new(1, 0),
            Edge::new(0, 1),
            Edge::new(1, 2),
        ],
    );
    let (adjacency, mapping) = graph_to_adjacency(&messy);
    let canonical = adjacency_to_graph(&adjacency, Some(&mapping));
    // One edge per unordered adjacent pair, duplicates collapsed.
    assert_eq!(canonical.edge_count(), 2);
}

#[test]
fn interchange_document_parses_end_to_end() {
    let body = r#"{
        "name": "triangle",
        "description": "three nodes in a loop",
        "nodes": [
            {"id": 0, "x": 0, "y": 0},
            {"id": 1, "x": 100, "y": 0},
            {"id": 2, "x": 50, "y": 80}
        ],
        "edges": [
            {"from": 0, "to": 1},
            {"from": 1, "to": 2},
            {"from": 2, "to": 0}
        ]
    }"#;
    let graph: Graph = serde_json::from_str(body).expect("document parses");
    let (adjacency, mapping) = graph_to_adjacency(&graph);
    assert_eq!(mapping.len(), 3);
    let reach = reachability_via_powers(&adjacency).expect("square");
    // A triangle connects everything, including each node back to itself.
    assert!(reach.iter_rows().flatten().all(|&x| x == 1));
}

#[test]
fn edges_to_missing_nodes_are_tolerated_in_documents() {
    let body = r#"{"nodes":[{"id":"a"},{"id":"b"}],"edges":[{"from":"a","to":"b"},{"from":"a","to":"z"}]}"#;
    let graph: Graph = serde_json::from_str(body).expect("document parses");
    let (adjacency, mapping) = graph_to_adjacency(&graph);
    assert_eq!(mapping.len(), 2);
    assert_eq!(adjacency.get(0, 1), 1);
}
