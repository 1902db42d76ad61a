/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use frontier_visits::graph::{random::RandomGraph, GraphError, RandomAccessGraph, VecGraph};

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = VecGraph::new(3);
    graph.add_edge(0, 2);
    graph.add_edge(2, 1);
    graph.add_edge(0, 2);
    assert_eq!(graph.successors(0), &[2, 2]);
    assert_eq!(graph.successors(1), &[2]);
    assert_eq!(graph.successors(2), &[0, 1, 0]);
    assert_eq!(graph.num_arcs(), 6);
    assert_eq!(graph.outdegree(2), 3);
}

#[test]
fn test_try_add_edge() {
    let mut graph = VecGraph::new(2);
    assert_eq!(
        graph.try_add_edge(0, 2),
        Err(GraphError::NodeOutOfBounds {
            node: 2,
            num_nodes: 2
        })
    );
    assert_eq!(graph.num_arcs(), 0);
    assert!(graph.successors(0).is_empty());
    assert_eq!(graph.add_nodes(1), 2);
    assert_eq!(graph.try_add_edge(0, 2), Ok(()));
}

#[test]
#[should_panic]
fn test_add_edge_out_of_bounds() {
    VecGraph::new(1).add_edge(0, 1);
}

#[test]
fn test_random_graph() {
    let graph = RandomGraph::new(50, 500).seed(9).build();
    assert_eq!(graph.num_nodes(), 50);
    for node in 0..graph.num_nodes() {
        for &succ in graph.successors(node) {
            assert_ne!(succ, node);
            assert!(graph.successors(succ).contains(&node));
        }
    }
    assert_eq!(graph, RandomGraph::new(50, 500).seed(9).build());
    assert_eq!(RandomGraph::new(0, 10).build().num_nodes(), 0);
    assert_eq!(RandomGraph::new(1, 10).build().num_arcs(), 0);
}
