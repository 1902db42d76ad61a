/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    breadth_first::Event, check_root, Parallel, VisitError, VisitedNodes, WorkQueue,
};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use rayon::{prelude::*, ThreadPool};

/// Level-synchronized parallel breadth-first visits.
///
/// The visit proceeds one level at a time. At the start of a level the shared
/// [`WorkQueue`] contains exactly the nodes at the current distance: they are
/// drained into a batch, and the batch is expanded in parallel by the threads
/// of the pool, in chunks of at least `granularity` nodes. Every successor
/// that a thread manages to [claim](VisitedNodes::try_claim) is pushed to the
/// queue, and thus belongs to the next level.
///
/// The end of the parallel expansion is a barrier: the next drain starts only
/// after every thread has finished pushing, so no node discovered at distance
/// *d* + 1 can be lost or mistaken for a node at distance *d*. The visit ends
/// when a drain yields an empty batch.
///
/// Nodes are reported with [`Unknown`](Event::Unknown) when they are claimed,
/// by the claiming thread; the distance is always exact.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::visits::{breadth_first, Parallel};
/// use frontier_visits::graph::VecGraph;
/// use frontier_visits::threads;
/// use dsi_progress_logger::no_logging;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let graph = VecGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::ParLevel::new(&graph, 1);
/// let d = [(); 4].map(|_| AtomicUsize::new(0));
/// visit.par_visit(
///     0,
///     |event| {
///         if let breadth_first::Event::Unknown { curr, distance, .. } = event {
///             d[curr].store(distance, Ordering::Relaxed);
///         }
///     },
///     threads![],
///     no_logging![],
/// )?;
/// assert_eq!(d.map(AtomicUsize::into_inner), [0, 1, 1, 2]);
/// # Ok::<(), frontier_visits::algo::visits::VisitError>(())
/// ```
pub struct ParLevel<G: RandomAccessGraph> {
    graph: G,
    granularity: usize,
    visited: VisitedNodes,
    queue: WorkQueue,
}

impl<G: RandomAccessGraph> ParLevel<G> {
    /// Creates a level-synchronized parallel breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `granularity`: the minimum number of nodes of a level expanded by a
    ///   single task. High granularity reduces overhead, but may lead to
    ///   decreased performance on graphs with a skewed degree distribution.
    pub fn new(graph: G, granularity: usize) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            granularity: granularity.max(1),
            visited: VisitedNodes::new(num_nodes),
            queue: WorkQueue::new(),
        }
    }
}

impl<G: RandomAccessGraph + Sync> ParLevel<G> {
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
        callback(Event::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        });
        self.queue.push(root);

        let (graph, visited, queue) = (&self.graph, &self.visited, &self.queue);
        let mut distance = 0;

        loop {
            // No thread is running, so the queue holds exactly the current level
            let level: Vec<usize> = std::iter::from_fn(|| queue.try_pop()).collect();
            if level.is_empty() {
                break;
            }
            let next_distance = distance + 1;

            thread_pool.install(|| {
                level
                    .par_iter()
                    .with_min_len(self.granularity)
                    .for_each(|&node| {
                        for &succ in graph.successors(node) {
                            if visited.try_claim(succ) {
                                callback(Event::Unknown {
                                    curr: succ,
                                    pred: node,
                                    root,
                                    distance: next_distance,
                                });
                                queue.push(succ);
                            } else {
                                callback(Event::Known {
                                    curr: succ,
                                    pred: node,
                                    root,
                                });
                            }
                        }
                    })
            });

            // Level barrier: all pushes for the next level have completed
            log::trace!("Level {} of visit from {}: {} nodes", distance, root, level.len());
            callback(Event::LevelDone {
                root,
                distance,
                size: level.len(),
            });
            pl.update_with_count(level.len());
            distance = next_distance;
        }
    }
}

impl<G: RandomAccessGraph + Sync> Parallel<Event> for ParLevel<G> {
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
        self.queue.clear();
        self.visited.reset();
    }
}
