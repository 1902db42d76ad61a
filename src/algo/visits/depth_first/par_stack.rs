/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    check_root, depth_first::Event, Parallel, VisitError, VisitedNodes, WorkStack,
};
use crate::graph::RandomAccessGraph;
use crossbeam_utils::Backoff;
use dsi_progress_logger::ProgressLog;
use rayon::{prelude::*, ThreadPool};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared-stack parallel depth-first visits.
///
/// Every thread of the pool runs a worker that repeatedly pops a node from a
/// shared [`WorkStack`] and expands it: the successors of the node are
/// scanned by a nested parallel iterator (in chunks of at least `granularity`
/// successors) that joins before the worker pops again, and every successor
/// that is [claimed](VisitedNodes::try_claim) is pushed on the stack. Since
/// the stack is shared, the visit order is only biased towards depth: there
/// is no guarantee of a depth-first preorder, and no
/// [postvisit](Event::Postvisit) event.
///
/// Termination is detected by counting: a shared counter holds the number of
/// claimed nodes that are on the stack or being expanded. It is incremented
/// before a claimed node is pushed and decremented after the expansion of a
/// node has joined. A worker finding the stack empty backs off, and exits only
/// when the counter is zero. Once zero, the counter cannot change anymore, as
/// new nodes are claimed only during expansions, so no worker can exit while
/// another worker still has nodes to push.
///
/// The depth in [`Previsit`](Event::Previsit) events is the depth in the
/// discovery tree, which is not the depth of a sequential visit.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::visits::{depth_first, Parallel};
/// use frontier_visits::graph::VecGraph;
/// use frontier_visits::threads;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let mut visit = depth_first::ParStack::new(&graph, 1);
/// visit.par_visit(0, |_| {}, threads![4], no_logging![])?;
/// assert_eq!(visit.visited_nodes(), vec![0, 1, 2, 3]);
/// # Ok::<(), frontier_visits::algo::visits::VisitError>(())
/// ```
pub struct ParStack<G: RandomAccessGraph> {
    graph: G,
    granularity: usize,
    visited: VisitedNodes,
    /// Claimed nodes waiting for expansion, with their depth.
    stack: WorkStack<(usize, usize)>,
}

impl<G: RandomAccessGraph> ParStack<G> {
    /// Creates a shared-stack parallel depth-first visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `granularity`: the minimum number of successors of a node scanned by
    ///   a single task. High granularity reduces overhead, but nodes with
    ///   fewer successors are then scanned by a single thread.
    pub fn new(graph: G, granularity: usize) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            granularity: granularity.max(1),
            visited: VisitedNodes::new(num_nodes),
            stack: WorkStack::new(),
        }
    }
}

impl<G: RandomAccessGraph + Sync> ParStack<G> {
    /// Pops and expands nodes until the visit is over, returning the number
    /// of expanded nodes.
    fn work<C: Fn(Event) + Sync>(&self, root: usize, pending: &AtomicUsize, callback: &C) -> usize {
        let backoff = Backoff::new();
        let mut expanded = 0;

        loop {
            let Some((node, depth)) = self.stack.try_pop() else {
                if pending.load(Ordering::Acquire) == 0 {
                    return expanded;
                }
                backoff.snooze();
                continue;
            };
            backoff.reset();

            self.graph
                .successors(node)
                .par_iter()
                .with_min_len(self.granularity)
                .for_each(|&succ| {
                    if self.visited.try_claim(succ) {
                        callback(Event::Previsit {
                            curr: succ,
                            pred: node,
                            root,
                            depth: depth + 1,
                        });
                        // The counter must never underestimate the nodes on the stack
                        pending.fetch_add(1, Ordering::AcqRel);
                        self.stack.push((succ, depth + 1));
                    } else {
                        callback(Event::Revisit {
                            curr: succ,
                            pred: node,
                            root,
                            depth: depth + 1,
                        });
                    }
                });

            pending.fetch_sub(1, Ordering::AcqRel);
            expanded += 1;
        }
    }

    fn par_visit_from<C: Fn(Event) + Sync>(
        &mut self,
        root: usize,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) {
        if !self.visited.try_claim(root) {
            return;
        }

        callback(Event::Init { root });
        callback(Event::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        });
        self.stack.push((root, 0));

        let pending = AtomicUsize::new(1);
        let expanded = AtomicUsize::new(0);
        let num_workers = thread_pool.current_num_threads();
        let (this, pending, expanded, callback) = (&*self, &pending, &expanded, &callback);

        thread_pool.scope(|scope| {
            for worker in 0..num_workers {
                scope.spawn(move |_| {
                    let count = this.work(root, pending, callback);
                    log::trace!("Worker {} expanded {} nodes from {}", worker, count, root);
                    expanded.fetch_add(count, Ordering::Relaxed);
                });
            }
        });

        let expanded = expanded.load(Ordering::Relaxed);
        log::debug!(
            "Visit from {} expanded {} nodes with {} workers",
            root,
            expanded,
            num_workers
        );
        pl.update_with_count(expanded);
    }
}

impl<G: RandomAccessGraph + Sync> Parallel<Event> for ParStack<G> {
    fn par_visit<C: Fn(Event) + Sync>(
        &mut self,
        root: usize,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<(), VisitError> {
        if check_root(root, self.graph.num_nodes())? {
            self.par_visit_from(root, callback, thread_pool, pl);
        }
        Ok(())
    }

    fn par_visit_all<C: Fn(Event) + Sync>(
        &mut self,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) {
        for node in 0..self.graph.num_nodes() {
            self.par_visit_from(node, &callback, thread_pool, pl);
        }
    }

    fn visited_nodes(&self) -> Vec<usize> {
        self.visited.to_vec()
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset();
    }
}
