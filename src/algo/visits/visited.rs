/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::{AtomicUsize, Ordering};

const BITS: usize = usize::BITS as usize;

macro_rules! panic_if_out_of_bounds {
    ($index: expr, $len: expr) => {
        if $index >= $len {
            panic!("Node index out of bounds: {} >= {}", $index, $len)
        }
    };
}

/// The set of visited nodes shared by the threads of a parallel visit.
///
/// The set uses one bit per node, packed in atomic words. The only way to
/// mark a node during a visit is [`try_claim`](VisitedNodes::try_claim), which
/// tests and sets the bit with a single atomic read-modify-write: for each
/// node, at most one call returns `true` between two calls to
/// [`reset`](VisitedNodes::reset), no matter how many threads race on it.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::visits::VisitedNodes;
///
/// let visited = VisitedNodes::new(4);
/// assert!(visited.try_claim(2));
/// assert!(!visited.try_claim(2));
/// assert_eq!(visited.to_vec(), vec![2]);
/// ```
pub struct VisitedNodes {
    data: Box<[AtomicUsize]>,
    len: usize,
}

impl VisitedNodes {
    /// Creates a set for `len` nodes, none of which is visited.
    pub fn new(len: usize) -> Self {
        let n_of_words = len.div_ceil(BITS);
        Self {
            data: (0..n_of_words).map(|_| AtomicUsize::new(0)).collect(),
            len,
        }
    }

    /// Returns the number of nodes this set can hold.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is sized for no nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks `node` as visited, returning true if this call changed its
    /// state, that is, if the caller now owns the expansion of `node`.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    #[inline]
    pub fn try_claim(&self, node: usize) -> bool {
        panic_if_out_of_bounds!(node, self.len);
        let mask = 1 << (node % BITS);
        let old_word = self.data[node / BITS].fetch_or(mask, Ordering::Relaxed);
        old_word & mask == 0
    }

    /// Returns whether `node` has been claimed.
    ///
    /// In a running parallel visit the answer may be stale by the time it
    /// is returned; only [`try_claim`](VisitedNodes::try_claim) can decide
    /// ownership.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        panic_if_out_of_bounds!(node, self.len);
        let word = self.data[node / BITS].load(Ordering::Relaxed);
        (word >> (node % BITS)) & 1 != 0
    }

    /// Returns the number of visited nodes.
    pub fn count(&self) -> usize {
        self.data
            .iter()
            .map(|word| word.load(Ordering::Relaxed).count_ones() as usize)
            .sum()
    }

    /// Returns the visited nodes in increasing order.
    pub fn to_vec(&self) -> Vec<usize> {
        (0..self.len).filter(|&node| self.is_visited(node)).collect()
    }

    /// Marks all nodes as not visited.
    ///
    /// Requiring a mutable reference guarantees that no visit is running.
    pub fn reset(&mut self) {
        for word in self.data.iter_mut() {
            *word.get_mut() = 0;
        }
    }
}

impl std::fmt::Debug for VisitedNodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitedNodes")
            .field("len", &self.len)
            .field("count", &self.count())
            .finish()
    }
}
