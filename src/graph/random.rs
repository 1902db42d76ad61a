/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Uniform random graphs.

use super::{RandomAccessGraph, VecGraph};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builder for uniform random undirected graphs.
///
/// The generator draws `num_edges` pairs of endpoints uniformly in
/// `0..num_nodes`; pairs with equal endpoints are silently dropped, so the
/// resulting graph may have fewer edges than requested. Repeated pairs are
/// kept, so parallel edges are possible.
///
/// # Examples
///
/// ```
/// use frontier_visits::graph::{random::RandomGraph, RandomAccessGraph};
///
/// let graph = RandomGraph::new(100, 300).seed(0).build();
/// assert_eq!(graph.num_nodes(), 100);
/// assert!(graph.num_arcs() <= 600);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomGraph {
    num_nodes: usize,
    num_edges: usize,
    seed: Option<u64>,
}

impl RandomGraph {
    /// Creates a builder for a graph with `num_nodes` nodes and at most
    /// `num_edges` edges.
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            num_edges,
            seed: None,
        }
    }

    /// Sets the seed of the generator, making the graph reproducible.
    ///
    /// Without a seed, the generator is seeded from the operating system.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates the graph.
    pub fn build(self) -> VecGraph {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.build_with(&mut rng)
    }

    /// Generates the graph using the given source of randomness.
    pub fn build_with(self, rng: &mut impl Rng) -> VecGraph {
        let mut graph = VecGraph::new(self.num_nodes);
        if self.num_nodes == 0 {
            return graph;
        }
        for _ in 0..self.num_edges {
            let a = rng.random_range(0..self.num_nodes);
            let b = rng.random_range(0..self.num_nodes);
            if a != b {
                graph.add_edge(a, b);
            }
        }
        log::debug!(
            "Generated random graph with {} nodes and {} arcs",
            self.num_nodes,
            graph.num_arcs()
        );
        graph
    }
}

