/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Connected components of undirected graphs.

use crate::algo::visits::{breadth_first, Parallel, Sequential};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The connected components of a graph.
///
/// Components are numbered from zero in order of their smallest node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    num_components: usize,
    component: Box<[usize]>,
}

impl Components {
    /// The number of connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// The component index of each node.
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// Returns the size of each component.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.num_components];
        for &node_component in self.component.iter() {
            sizes[node_component] += 1;
        }
        sizes
    }
}

/// Connected components by sequential breadth-first visits.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::components::seq_components;
/// use frontier_visits::graph::VecGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_edges(5, [(0, 1), (2, 3), (3, 4)]);
/// let components = seq_components(&graph, no_logging![]);
/// assert_eq!(components.num_components(), 2);
/// assert_eq!(components.component(), &[0, 0, 1, 1, 1]);
/// ```
pub fn seq_components(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Components {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components...");

    let mut visit = breadth_first::Seq::new(&graph);
    let mut component = vec![0; num_nodes].into_boxed_slice();
    let mut number_of_components = 0;

    visit.visit_all(
        |event| match event {
            breadth_first::Event::Init { .. } => number_of_components += 1,
            breadth_first::Event::Unknown { curr, .. } => {
                component[curr] = number_of_components - 1;
            }
            _ => (),
        },
        pl,
    );

    pl.done();
    Components {
        num_components: number_of_components,
        component,
    }
}

/// Connected components by [parallel breadth-first
/// visits](breadth_first::ParLevel).
pub fn par_components(
    graph: impl RandomAccessGraph + Sync,
    granularity: usize,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Components {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components in parallel...");

    let mut visit = breadth_first::ParLevel::new(&graph, granularity);
    let component: Box<[AtomicUsize]> = (0..num_nodes).map(|_| AtomicUsize::new(0)).collect();
    // Roots are visited one at a time, so the counter changes only between
    // visits; inside a visit all threads read the same value.
    let number_of_components = AtomicUsize::new(0);

    visit.par_visit_all(
        |event| match event {
            breadth_first::Event::Init { .. } => {
                number_of_components.fetch_add(1, Ordering::Relaxed);
            }
            breadth_first::Event::Unknown { curr, .. } => {
                component[curr].store(
                    number_of_components.load(Ordering::Relaxed) - 1,
                    Ordering::Relaxed,
                );
            }
            _ => (),
        },
        thread_pool,
        pl,
    );

    pl.done();
    Components {
        num_components: number_of_components.into_inner(),
        component: component
            .into_vec()
            .into_iter()
            .map(AtomicUsize::into_inner)
            .collect(),
    }
}
