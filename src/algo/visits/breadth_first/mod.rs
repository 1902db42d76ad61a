/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`].
//! The callback is called exactly once with [`Event::Unknown`] for every node
//! reached by the visit, including the root.

mod seq;
pub use seq::*;

mod par_level;
pub use par_level::*;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization: a visit is starting from `root`, which has not been
    /// visited before. This event should be used to set up state at the start
    /// of the visit.
    Init {
        /// The root of the visit.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Unknown {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`Event::Unknown::curr`) in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The distance of the current node from the root.
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    ///
    /// Note how in parallel contexts this does not guarantee that the callback
    /// with [`Unknown`](`Event::Unknown`) has already been called.
    Known {
        /// The current node.
        curr: usize,
        /// The node from which the arc is traversed.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
    },
    /// All nodes at distance `distance` have been expanded, and all nodes at
    /// distance `distance + 1` have been discovered.
    LevelDone {
        /// The root of the current visit tree.
        root: usize,
        /// The distance of the level.
        distance: usize,
        /// The number of nodes at that distance.
        size: usize,
    },
}
