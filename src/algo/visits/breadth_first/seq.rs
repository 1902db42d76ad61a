/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first::Event, check_root, Sequential, VisitError};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store distances of the nodes
/// from the root: distances are computed on the fly and passed to the callback
/// function by visiting nodes when they are discovered, rather than when they
/// are extracted from the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::visits::{breadth_first, Sequential};
/// use frontier_visits::graph::VecGraph;
/// use dsi_progress_logger::no_logging;
///
/// // Let's compute the distances from 0
///
/// let graph = VecGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |event| {
///         if let breadth_first::Event::Unknown { curr, distance, .. } = event {
///             d[curr] = distance;
///         }
///     },
///     no_logging![],
/// )?;
/// assert_eq!(d, [0, 1, 1, 2]);
/// # Ok::<(), frontier_visits::algo::visits::VisitError>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    fn visit_from<C: FnMut(Event)>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) {
        if self.visited[root] {
            return;
        }

        callback(Event::Init { root });
        callback(Event::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        });

        self.visited.set(root, true);
        self.queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;
        let mut level_size = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for &succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            callback(Event::Unknown {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            });
                            self.visited.set(succ, true);
                            self.queue.push_back(Some(
                                NonMaxUsize::new(succ)
                                    .expect("node index should never be usize::MAX"),
                            ))
                        } else {
                            callback(Event::Known {
                                curr: succ,
                                pred: node,
                                root,
                            });
                        }
                    }
                    pl.light_update();
                }
                None => {
                    callback(Event::LevelDone {
                        root,
                        distance: distance - 1,
                        size: level_size,
                    });
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    level_size = self.queue.len();
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }
    }
}

impl<G: RandomAccessGraph> Sequential<Event> for Seq<G> {
    fn visit<C: FnMut(Event)>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), VisitError> {
        if check_root(root, self.graph.num_nodes())? {
            self.visit_from(root, callback, pl);
        }
        Ok(())
    }

    fn visit_all<C: FnMut(Event)>(&mut self, mut callback: C, pl: &mut impl ProgressLog) {
        for node in 0..self.graph.num_nodes() {
            self.visit_from(node, &mut callback, pl);
        }
    }

    fn visited_nodes(&self) -> Vec<usize> {
        (0..self.graph.num_nodes())
            .filter(|&node| self.visited[node])
            .collect()
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
