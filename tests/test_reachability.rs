/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use frontier_visits::algo::reachability::{par_bfs, par_dfs, seq_bfs, seq_dfs};
use frontier_visits::graph::{random::RandomGraph, RandomAccessGraph, VecGraph};
use frontier_visits::prelude::*;
use frontier_visits::threads;

/// Computes reachability with a union-find, independently of any visit.
fn reachable_by_union_find(graph: &VecGraph, start: usize) -> Vec<usize> {
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    let n = graph.num_nodes();
    let mut parent: Vec<usize> = (0..n).collect();
    for a in 0..n {
        for &b in graph.successors(a) {
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            parent[ra] = rb;
        }
    }
    let root = find(&mut parent, start);
    (0..n).filter(|&x| find(&mut parent, x) == root).collect()
}

fn all_engines(graph: &VecGraph, start: usize, num_threads: usize) -> Result<[Vec<usize>; 4]> {
    Ok([
        seq_bfs(graph, start, no_logging![])?,
        par_bfs(graph, start, threads![num_threads], no_logging![])?,
        seq_dfs(graph, start, no_logging![])?,
        par_dfs(graph, start, threads![num_threads], no_logging![])?,
    ])
}

#[test]
fn test_diamond() -> Result<()> {
    let graph = VecGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
    for num_threads in 1..=8 {
        for result in all_engines(&graph, 0, num_threads)? {
            assert_eq!(result, vec![0, 1, 2, 3], "{} threads", num_threads);
        }
    }
    Ok(())
}

#[test]
fn test_single_node() -> Result<()> {
    let graph = VecGraph::new(1);
    for result in all_engines(&graph, 0, 4)? {
        assert_eq!(result, vec![0]);
    }
    Ok(())
}

#[test]
fn test_empty_graph() -> Result<()> {
    let graph = VecGraph::new(0);
    for start in [0, 1, 100] {
        for result in all_engines(&graph, start, 4)? {
            assert!(result.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_invalid_start() {
    let graph = VecGraph::from_edges(3, [(0, 1)]);
    let expected = Err(VisitError::InvalidStartNode {
        node: 3,
        num_nodes: 3,
    });
    assert_eq!(seq_bfs(&graph, 3, no_logging![]), expected);
    assert_eq!(par_bfs(&graph, 3, threads![2], no_logging![]), expected);
    assert_eq!(seq_dfs(&graph, 3, no_logging![]), expected);
    assert_eq!(par_dfs(&graph, 3, threads![2], no_logging![]), expected);
}

#[test]
fn test_self_loops() -> Result<()> {
    let graph = VecGraph::from_edges(3, [(0, 0), (0, 1), (1, 1)]);
    for result in all_engines(&graph, 1, 3)? {
        assert_eq!(result, vec![0, 1]);
    }
    Ok(())
}

#[test]
fn test_isolated_components() -> Result<()> {
    // Component A is a cycle on 0..5, component B a path on 5..10
    let mut graph = VecGraph::new(10);
    for node in 0..5 {
        graph.add_edge(node, (node + 1) % 5);
    }
    for node in 5..9 {
        graph.add_edge(node, node + 1);
    }
    for num_threads in [1, 2, 8] {
        for result in all_engines(&graph, 3, num_threads)? {
            assert_eq!(result, vec![0, 1, 2, 3, 4]);
        }
        for result in all_engines(&graph, 9, num_threads)? {
            assert_eq!(result, vec![5, 6, 7, 8, 9]);
        }
    }
    Ok(())
}

#[test]
fn test_random_graphs() -> Result<()> {
    for seed in 0..10 {
        // Sparse graphs have many components; dense ones have a giant one
        for num_edges in [300, 1000, 5000] {
            let graph = RandomGraph::new(1000, num_edges).seed(seed).build();
            let start = seed as usize * 97 % 1000;
            let expected = reachable_by_union_find(&graph, start);
            for num_threads in [1, 3, 8] {
                for result in all_engines(&graph, start, num_threads)? {
                    assert_eq!(result, expected, "seed {} edges {}", seed, num_edges);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_idempotent_start() -> Result<()> {
    let graph = RandomGraph::new(2000, 2500).seed(42).build();
    let thread_pool = threads![6];

    let mut bfs = breadth_first::ParLevel::new(&graph, 4);
    let mut dfs = depth_first::ParStack::new(&graph, 4);
    bfs.par_visit(7, |_| {}, thread_pool, no_logging![])?;
    dfs.par_visit(7, |_| {}, thread_pool, no_logging![])?;
    let expected_bfs = bfs.visited_nodes();
    let expected_dfs = dfs.visited_nodes();
    assert_eq!(expected_bfs, expected_dfs);

    for _ in 0..20 {
        bfs.reset();
        dfs.reset();
        assert!(bfs.visited_nodes().is_empty());
        bfs.par_visit(7, |_| {}, thread_pool, no_logging![])?;
        dfs.par_visit(7, |_| {}, thread_pool, no_logging![])?;
        assert_eq!(bfs.visited_nodes(), expected_bfs);
        assert_eq!(dfs.visited_nodes(), expected_dfs);
    }
    Ok(())
}

#[test]
fn test_visit_without_reset_is_noop() -> Result<()> {
    let graph = VecGraph::from_edges(4, [(0, 1), (2, 3)]);
    let mut visit = breadth_first::Seq::new(&graph);
    let mut events = 0;
    visit.visit(0, |_| events += 1, no_logging![])?;
    assert!(events > 0);
    let mut events = 0;
    visit.visit(1, |_| events += 1, no_logging![])?;
    assert_eq!(events, 0);
    visit.visit(2, |_| {}, no_logging![])?;
    assert_eq!(visit.visited_nodes(), vec![0, 1, 2, 3]);
    Ok(())
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large_random_graph() -> Result<()> {
    let graph = RandomGraph::new(1_000_000, 2_000_000).seed(0).build();
    let expected = reachable_by_union_find(&graph, 0);
    for result in all_engines(&graph, 0, 16)? {
        assert_eq!(result, expected);
    }
    Ok(())
}
