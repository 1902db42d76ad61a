/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first and depth-first visits of undirected graphs, sequential and
//! parallel.
//!
//! Parallel visits run on a [`rayon::ThreadPool`] and share a
//! [frontier](algo::visits::Frontier) and a [visited
//! set](algo::visits::VisitedNodes) among their threads. Their set of visited
//! nodes is always the same as that of the sequential visits.

pub mod algo;
pub mod graph;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graph::RandomAccessGraph;
}

/// Use `use frontier_visits::prelude::*;` to import common utilities, modules
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::components;
    pub use algo::reachability;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::visits::VisitError;
    pub use graph::VecGraph;
    pub use traits::*;
    pub use utils::Threads;
}
