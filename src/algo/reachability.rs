/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sets of nodes reachable from a start node.
//!
//! The four functions of this module run a visit from `start` on a fresh
//! visited set and return the visited nodes in increasing order, so results
//! of different engines can be compared directly. On the empty graph they
//! return an empty vector for any start node.

use crate::algo::visits::{breadth_first, depth_first, Parallel, Sequential, VisitError};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// The default granularity of the parallel visits of this module.
pub const DEFAULT_GRANULARITY: usize = 64;

fn start_logging(pl: &mut impl ProgressLog, num_nodes: usize, msg: &str) {
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start(msg);
}

/// Returns the nodes reachable from `start` using a
/// [sequential breadth-first visit](breadth_first::Seq).
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::reachability::seq_bfs;
/// use frontier_visits::graph::VecGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// assert_eq!(seq_bfs(&graph, 0, no_logging![])?, vec![0, 1, 2, 3]);
/// assert_eq!(seq_bfs(&graph, 4, no_logging![])?, vec![4]);
/// assert!(seq_bfs(&graph, 5, no_logging![]).is_err());
/// # Ok::<(), frontier_visits::algo::visits::VisitError>(())
/// ```
pub fn seq_bfs(
    graph: impl RandomAccessGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> Result<Vec<usize>, VisitError> {
    start_logging(pl, graph.num_nodes(), "Visiting graph breadth-first...");
    let mut visit = breadth_first::Seq::new(graph);
    visit.visit(start, |_| {}, pl)?;
    pl.done();
    Ok(visit.visited_nodes())
}

/// Returns the nodes reachable from `start` using a [level-synchronized
/// parallel breadth-first visit](breadth_first::ParLevel).
pub fn par_bfs(
    graph: impl RandomAccessGraph + Sync,
    start: usize,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<Vec<usize>, VisitError> {
    start_logging(
        pl,
        graph.num_nodes(),
        "Visiting graph breadth-first in parallel...",
    );
    let mut visit = breadth_first::ParLevel::new(graph, DEFAULT_GRANULARITY);
    visit.par_visit(start, |_| {}, thread_pool, pl)?;
    pl.done();
    Ok(visit.visited_nodes())
}

/// Returns the nodes reachable from `start` using a [sequential depth-first
/// visit](depth_first::Seq).
pub fn seq_dfs(
    graph: impl RandomAccessGraph,
    start: usize,
    pl: &mut impl ProgressLog,
) -> Result<Vec<usize>, VisitError> {
    start_logging(pl, graph.num_nodes(), "Visiting graph depth-first...");
    let mut visit = depth_first::Seq::new(&graph);
    visit.visit(start, |_| {}, pl)?;
    pl.done();
    Ok(visit.visited_nodes())
}

/// Returns the nodes reachable from `start` using a [shared-stack parallel
/// depth-first visit](depth_first::ParStack).
pub fn par_dfs(
    graph: impl RandomAccessGraph + Sync,
    start: usize,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<Vec<usize>, VisitError> {
    start_logging(
        pl,
        graph.num_nodes(),
        "Visiting graph depth-first in parallel...",
    );
    let mut visit = depth_first::ParStack::new(graph, DEFAULT_GRANULARITY);
    visit.par_visit(start, |_| {}, thread_pool, pl)?;
    pl.done();
    Ok(visit.visited_nodes())
}
