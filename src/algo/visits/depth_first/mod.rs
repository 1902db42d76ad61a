/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument [`Event`].
//! The callback must be called at the [start of a visit](Event::Init), [every
//! time a new node is discovered](Event::Previsit), [every time a node is
//! revisited](Event::Revisit), and, if supported, [every time the enumeration
//! of the successors of a node is completed](Event::Postvisit).
//!
//! Note that since events contain the predecessor of the visited node, all
//! post-start visit events can be interpreted as arc events. The only
//! exception are the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

mod par_stack;
pub use par_stack::*;

/// Types of callback events generated during a depth-first visit.
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
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`Event::Previsit::curr`) in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to the current node.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node from which the arc is traversed.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth the current node would have along this arc.
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    ///
    /// Parallel visits do not generate this event.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of [curr](`Event::Postvisit::curr`) in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the current node.
        depth: usize,
    },
}
