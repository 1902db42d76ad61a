/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{check_root, depth_first::Event, Sequential, VisitError};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// A sequential depth-first visit.
///
/// This is an iterative implementation that does not need a large stack size:
/// entries of the visit stack are iterators on the successors of the nodes on
/// the visit path, so nodes are visited in true depth-first preorder and a
/// [postvisit event](Event::Postvisit) is generated when the enumeration of
/// the successors of a node is completed.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// completion of each postvisit.
///
/// # Examples
///
/// Let's compute the postorder of the nodes:
///
/// ```
/// use frontier_visits::algo::visits::{depth_first, Sequential};
/// use frontier_visits::graph::VecGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
/// let mut visit = depth_first::Seq::new(&graph);
/// let mut postorder = Vec::new();
///
/// visit.visit(
///     0,
///     |event| {
///         if let depth_first::Event::Postvisit { curr, .. } = event {
///             postorder.push(curr);
///         }
///     },
///     no_logging![],
/// )?;
/// assert_eq!(postorder, vec![2, 3, 1, 0]);
/// # Ok::<(), frontier_visits::algo::visits::VisitError>(())
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a node
    /// and the parent of the node. This approach makes it possible to avoid
    /// storing both the current and the parent node in the stack.
    stack: Vec<(std::slice::Iter<'a, usize>, usize)>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(num_nodes),
        }
    }

    fn visit_from<C: FnMut(Event)>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) {
        if self.known[root] {
            return;
        }

        callback(Event::Init { root });

        self.known.set(root, true);

        callback(Event::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        });

        let graph = self.graph;
        self.stack.push((graph.successors(root).iter(), root));

        // This variable keeps track of the current node being visited; the
        // parent node is derived at each iteration of the 'recurse loop.
        let mut current_node = root;

        'recurse: loop {
            let depth = self.stack.len().saturating_sub(1);
            let Some((iter, parent)) = self.stack.last_mut() else {
                return;
            };
            let parent = *parent;

            for &succ in iter {
                if self.known[succ] {
                    callback(Event::Revisit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth: depth + 1,
                    });
                } else {
                    self.known.set(succ, true);

                    callback(Event::Previsit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth: depth + 1,
                    });
                    // current_node is the parent of succ
                    self.stack.push((graph.successors(succ).iter(), current_node));

                    // At the next iteration, succ will be the current node
                    current_node = succ;

                    continue 'recurse;
                }
            }

            callback(Event::Postvisit {
                curr: current_node,
                pred: parent,
                root,
                depth,
            });

            pl.light_update();

            // We're going up one stack level, so the next current_node
            // is the current parent.
            current_node = parent;
            self.stack.pop();
        }
    }
}

impl<G: RandomAccessGraph> Sequential<Event> for Seq<'_, G> {
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
            .filter(|&node| self.known[node])
            .collect()
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.fill(false);
    }
}
