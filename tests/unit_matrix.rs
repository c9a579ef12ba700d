//! Algebraic laws of the matrix operations, checked on real adjacency
//! matrices rather than synthetic data.

use reachlab_core::graph::{cycle_graph, graph_to_adjacency, star_graph};
use reachlab_core::matrix::{add, boolean_or, multiply, power, to_boolean, Matrix};

fn cycle_adjacency(n: usize) -> Matrix {
    graph_to_adjacency(&cycle_graph(n, None)).0
}

#[test]
fn power_respects_exponent_addition() {
    let a = cycle_adjacency(6);
    for (i, j) in [(0, 0), (0, 1), (1, 2), (2, 3)] {
        let combined = power(&a, i + j).expect("square");
        let split = multiply(&power(&a, i).expect("square"), &power(&a, j).expect("square"))
            .expect("compatible");
        assert_eq!(combined, split, "A^{} != A^{i} * A^{j}", i + j);
    }
}

#[test]
fn power_zero_and_one_are_identity_and_copy() {
    let a = graph_to_adjacency(&star_graph(5, None)).0;
    assert_eq!(power(&a, 0).expect("square"), Matrix::identity(5));
    assert_eq!(power(&a, 1).expect("square"), a);
}

#[test]
fn boolean_or_then_threshold_matches_positivity() {
    let a = Matrix::from_rows(vec![vec![3, 0, 1], vec![0, 0, 0], vec![9, 2, 0]]);
    let b = Matrix::from_rows(vec![vec![0, 0, 4], vec![1, 0, 0], vec![0, 0, 0]]);
    let or = boolean_or(&a, &b).expect("same shape");
    let thresholded = to_boolean(&or);
    for i in 0..3 {
        for j in 0..3 {
            let expected = u64::from(a.get(i, j) > 0 || b.get(i, j) > 0);
            assert_eq!(thresholded.get(i, j), expected, "entry ({i},{j})");
        }
    }
}

#[test]
fn add_and_or_reject_shape_mismatch() {
    let a = Matrix::zeros(2, 2);
    let b = Matrix::zeros(3, 3);
    assert!(add(&a, &b).is_err());
    assert!(boolean_or(&a, &b).is_err());
}

#[test]
fn walk_counts_grow_but_boolean_stays_binary() {
    let a = cycle_adjacency(4);
    let a4 = power(&a, 4).expect("square");
    // Plenty of closed 4-walks on a 4-cycle; counts exceed 1.
    assert!(a4.get(0, 0) > 1);
    let b = to_boolean(&a4);
    assert!(b.iter_rows().flatten().all(|&x| x <= 1));
}
