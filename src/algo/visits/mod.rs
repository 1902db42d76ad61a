/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Implementation of [sequential](Sequential) and [parallel][Parallel] visits
//! depend on a type parameter `A` that represents the events generated by the
//! visit, passed to a user-provided callback.
//!
//! Sequential visits keep a private visited set. Parallel visits share a
//! [`VisitedNodes`] set and a [`Frontier`] among the threads of a
//! [`rayon::ThreadPool`]: a node is expanded only by the thread that
//! [claimed](VisitedNodes::try_claim) it, and discovered nodes travel through
//! the frontier, whose [`push`](Frontier::push) and
//! [`try_pop`](Frontier::try_pop) are serialized by a mutex.
//!
//! Visiting from a node that has already been visited does nothing, so
//! successive visits from different roots enumerate the connected
//! components of the graph. Use `reset` to start afresh.

pub mod breadth_first;
pub mod depth_first;

mod frontier;
pub use frontier::*;

mod visited;
pub use visited::*;

use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// Errors raised by visits.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitError {
    /// The root of the visit is not a node of the graph.
    #[error("invalid start node {node} for a graph with {num_nodes} nodes")]
    InvalidStartNode { node: usize, num_nodes: usize },
}

/// Checks that `root` can start a visit on a graph with `num_nodes` nodes.
///
/// Returns `Ok(false)` on the empty graph, where every visit is trivially
/// empty.
pub(crate) fn check_root(root: usize, num_nodes: usize) -> Result<bool, VisitError> {
    if num_nodes == 0 {
        return Ok(false);
    }
    if root >= num_nodes {
        return Err(VisitError::InvalidStartNode {
            node: root,
            num_nodes,
        });
    }
    Ok(true)
}

/// A sequential visit.
///
/// Implementation of this trait must provide the
/// [`visit`](Sequential::visit) method, which should perform a visit of a
/// graph starting from a given node, and the
/// [`visit_all`](Sequential::visit_all) method, which should perform a visit
/// of the whole graph.
///
/// For each node, the visit should invoke a callback with argument of type
/// `A`.
pub trait Sequential<A> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `pl`: A progress logger; pass `no_logging![]` to optimize logging
    ///   away.
    ///
    /// # Errors
    ///
    /// [`VisitError::InvalidStartNode`] if `root` is not a node of a
    /// nonempty graph.
    fn visit<C: FnMut(A)>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), VisitError>;

    /// Visits the whole graph.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<C: FnMut(A)>(&mut self, callback: C, pl: &mut impl ProgressLog);

    /// Returns the nodes visited so far, in increasing order.
    fn visited_nodes(&self) -> Vec<usize>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}

/// A parallel visit.
///
/// Implementation of this trait must provide the
/// [`par_visit`](Parallel::par_visit) method, which should perform a parallel
/// visit of a graph starting from a given node, and the
/// [`par_visit_all`](Parallel::par_visit_all) method, which should perform a
/// parallel visit of the whole graph.
///
/// For each node, the visit should invoke a callback with argument of type
/// `A`. The callback is invoked concurrently by the threads of the pool, so
/// no ordering among events of different threads should be assumed.
pub trait Parallel<A> {
    /// Visits the graph from the specified node using the given thread pool.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `thread_pool`: The thread pool to use; its size is the number of
    ///   workers of the visit.
    ///
    /// * `pl`: A progress logger; pass `no_logging![]` to optimize logging
    ///   away.
    ///
    /// # Errors
    ///
    /// [`VisitError::InvalidStartNode`] if `root` is not a node of a
    /// nonempty graph.
    fn par_visit<C: Fn(A) + Sync>(
        &mut self,
        root: usize,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<(), VisitError>;

    /// Visits the whole graph.
    ///
    /// See [`par_visit`](Parallel::par_visit) for more details.
    fn par_visit_all<C: Fn(A) + Sync>(
        &mut self,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    );

    /// Returns the nodes visited so far, in increasing order.
    fn visited_nodes(&self) -> Vec<usize>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
