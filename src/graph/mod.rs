/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Undirected graphs stored as adjacency lists.

mod vec_graph;
pub use vec_graph::*;

pub mod random;

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are the integers in `0..num_nodes()`. Visits in this crate are
/// generic over this trait, so they can run on borrowed graphs as well.
pub trait RandomAccessGraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph.
    ///
    /// In an undirected graph every edge contributes two arcs.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`num_nodes`](Self::num_nodes).
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of `node`.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }
}

/// Errors raised while building a graph.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} is out of bounds for a graph with {num_nodes} nodes")]
    NodeOutOfBounds { node: usize, num_nodes: usize },
}
