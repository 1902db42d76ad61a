/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, RandomAccessGraph};

/// An undirected graph backed by a vector of adjacency lists.
///
/// Every edge `{a, b}` added with [`add_edge`](VecGraph::add_edge) is stored
/// twice, as `b` in the list of `a` and as `a` in the list of `b`. There is no
/// removal: once the graph is handed to a visit it is only read.
///
/// Self-loops are accepted; visits treat them as arcs towards an already
/// known node.
///
/// # Examples
///
/// ```
/// use frontier_visits::graph::{RandomAccessGraph, VecGraph};
///
/// let graph = VecGraph::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
/// assert_eq!(graph.successors(0), &[1, 2]);
/// assert_eq!(graph.successors(3), &[1, 2]);
/// assert_eq!(graph.num_arcs(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecGraph {
    succ: Vec<Vec<usize>>,
    num_arcs: usize,
}

impl VecGraph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            succ: vec![Vec::new(); num_nodes],
            num_arcs: 0,
        }
    }

    /// Creates a graph with `num_nodes` nodes from a list of edges.
    ///
    /// # Panics
    ///
    /// If an endpoint is not smaller than `num_nodes`.
    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(num_nodes);
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is not smaller than the number of nodes. Use
    /// [`try_add_edge`](VecGraph::try_add_edge) to get an error instead.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if let Err(err) = self.try_add_edge(a, b) {
            panic!("{}", err);
        }
    }

    /// Adds the undirected edge `{a, b}`, checking its endpoints.
    pub fn try_add_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        let num_nodes = self.succ.len();
        for node in [a, b] {
            if node >= num_nodes {
                return Err(GraphError::NodeOutOfBounds { node, num_nodes });
            }
        }
        self.succ[a].push(b);
        self.succ[b].push(a);
        self.num_arcs += 2;
        Ok(())
    }

    /// Adds `n` isolated nodes, returning the identifier of the first one.
    pub fn add_nodes(&mut self, n: usize) -> usize {
        let first = self.succ.len();
        self.succ.resize_with(first + n, Vec::new);
        first
    }
}

impl RandomAccessGraph for VecGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }
}
