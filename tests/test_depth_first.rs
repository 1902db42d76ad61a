/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use frontier_visits::graph::{random::RandomGraph, RandomAccessGraph, VecGraph};
use frontier_visits::prelude::*;
use frontier_visits::threads;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_seq_preorder_postorder() -> Result<()> {
    let graph = VecGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
    let mut preorder = Vec::new();
    let mut postorder = Vec::new();
    let mut visit = depth_first::Seq::new(&graph);
    visit.visit(
        0,
        |event| match event {
            depth_first::Event::Previsit { curr, depth, .. } => preorder.push((curr, depth)),
            depth_first::Event::Postvisit { curr, .. } => postorder.push(curr),
            _ => (),
        },
        no_logging![],
    )?;
    assert_eq!(preorder, vec![(0, 0), (1, 1), (3, 2), (2, 3), (4, 3)]);
    assert_eq!(postorder, vec![2, 4, 3, 1, 0]);
    Ok(())
}

#[test]
fn test_seq_deep_path() -> Result<()> {
    // Deep enough to overflow a recursive implementation
    let num_nodes = 200_000;
    let graph = VecGraph::from_edges(num_nodes, (0..num_nodes - 1).map(|x| (x, x + 1)));
    let mut max_depth = 0;
    let mut visit = depth_first::Seq::new(&graph);
    visit.visit(
        0,
        |event| {
            if let depth_first::Event::Previsit { depth, .. } = event {
                max_depth = max_depth.max(depth);
            }
        },
        no_logging![],
    )?;
    assert_eq!(max_depth, num_nodes - 1);
    assert_eq!(visit.visited_nodes().len(), num_nodes);
    Ok(())
}

#[test]
fn test_seq_events_are_balanced() -> Result<()> {
    let graph = RandomGraph::new(500, 1500).seed(3).build();
    let (mut inits, mut previsits, mut postvisits, mut revisits) = (0, 0, 0, 0);
    let mut visit = depth_first::Seq::new(&graph);
    visit.visit_all(
        |event| match event {
            depth_first::Event::Init { .. } => inits += 1,
            depth_first::Event::Previsit { .. } => previsits += 1,
            depth_first::Event::Postvisit { .. } => postvisits += 1,
            depth_first::Event::Revisit { .. } => revisits += 1,
        },
        no_logging![],
    );
    assert_eq!(previsits, graph.num_nodes());
    assert_eq!(postvisits, graph.num_nodes());
    // Every arc is scanned once: tree arcs lead to previsits of non-roots
    assert_eq!(revisits + previsits - inits, graph.num_arcs());
    Ok(())
}

#[test]
fn test_par_claim_once() -> Result<()> {
    let graph = RandomGraph::new(5000, 20000).seed(11).build();
    let reachable = reachability::seq_dfs(&graph, 0, no_logging![])?;
    for num_threads in 1..=8 {
        for granularity in [1, 8] {
            let claims: Vec<_> = (0..graph.num_nodes()).map(|_| AtomicUsize::new(0)).collect();
            let mut visit = depth_first::ParStack::new(&graph, granularity);
            visit.par_visit(
                0,
                |event| {
                    if let depth_first::Event::Previsit { curr, .. } = event {
                        claims[curr].fetch_add(1, Ordering::Relaxed);
                    }
                },
                threads![num_threads],
                no_logging![],
            )?;
            for (node, count) in claims.iter().enumerate() {
                let expected = usize::from(reachable.binary_search(&node).is_ok());
                assert_eq!(count.load(Ordering::Relaxed), expected, "node {}", node);
            }
            assert_eq!(visit.visited_nodes(), reachable);
        }
    }
    Ok(())
}

#[test]
fn test_par_no_postvisit() -> Result<()> {
    let graph = RandomGraph::new(300, 900).seed(5).build();
    let mut visit = depth_first::ParStack::new(&graph, 1);
    visit.par_visit(
        0,
        |event| assert!(!matches!(event, depth_first::Event::Postvisit { .. })),
        threads![4],
        no_logging![],
    )?;
    Ok(())
}

#[test]
fn test_par_star_and_path() -> Result<()> {
    // A hub with many leaves exercises the nested expansion; a long path
    // keeps the stack almost empty, so workers keep running out of work.
    let num_leaves = 10_000;
    let star = VecGraph::from_edges(num_leaves + 1, (1..=num_leaves).map(|x| (0, x)));
    let path = VecGraph::from_edges(5_000, (0..4_999).map(|x| (x, x + 1)));
    for num_threads in [1, 2, 8] {
        let mut visit = depth_first::ParStack::new(&star, 16);
        visit.par_visit(0, |_| {}, threads![num_threads], no_logging![])?;
        assert_eq!(visit.visited_nodes().len(), num_leaves + 1);

        let mut visit = depth_first::ParStack::new(&path, 1);
        visit.par_visit(2_500, |_| {}, threads![num_threads], no_logging![])?;
        assert_eq!(visit.visited_nodes().len(), 5_000);
    }
    Ok(())
}

#[test]
fn test_par_discovery_tree() -> Result<()> {
    let graph = RandomGraph::new(2000, 6000).seed(13).build();
    let depths: Vec<_> = (0..graph.num_nodes())
        .map(|_| AtomicUsize::new(usize::MAX))
        .collect();
    let preds: Vec<_> = (0..graph.num_nodes())
        .map(|_| AtomicUsize::new(usize::MAX))
        .collect();
    let mut visit = depth_first::ParStack::new(&graph, 2);
    visit.par_visit(
        0,
        |event| {
            if let depth_first::Event::Previsit {
                curr, pred, depth, ..
            } = event
            {
                depths[curr].store(depth, Ordering::Relaxed);
                preds[curr].store(pred, Ordering::Relaxed);
            }
        },
        threads![8],
        no_logging![],
    )?;
    // Following predecessors always leads to the root, one level at a time
    for node in visit.visited_nodes() {
        let depth = depths[node].load(Ordering::Relaxed);
        let pred = preds[node].load(Ordering::Relaxed);
        if node == 0 {
            assert_eq!((depth, pred), (0, 0));
        } else {
            assert!(graph.successors(pred).contains(&node));
            assert_eq!(depths[pred].load(Ordering::Relaxed) + 1, depth);
        }
    }
    Ok(())
}
