/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The extraction discipline of a [`Frontier`].
///
/// This trait is implemented by [`VecDeque`] (first in, first out) and by
/// [`Vec`] (last in, first out).
pub trait Discipline<T>: Default {
    /// Inserts an item.
    fn put(&mut self, item: T);
    /// Extracts an item, if any.
    fn take(&mut self) -> Option<T>;
}

impl<T> Discipline<T> for VecDeque<T> {
    #[inline(always)]
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline(always)]
    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T> Discipline<T> for Vec<T> {
    #[inline(always)]
    fn put(&mut self, item: T) {
        self.push(item);
    }

    #[inline(always)]
    fn take(&mut self) -> Option<T> {
        self.pop()
    }
}

/// A container of discovered nodes awaiting expansion, shared by the threads
/// of a parallel visit.
///
/// The container is guarded by its own mutex, and [`push`](Frontier::push) and
/// [`try_pop`](Frontier::try_pop) are its only entry points: there is no way to
/// look at the content without removing it.
///
/// # Examples
///
/// ```
/// use frontier_visits::algo::visits::{WorkQueue, WorkStack};
///
/// let queue = WorkQueue::default();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.try_pop(), Some(1));
///
/// let stack = WorkStack::default();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.try_pop(), Some(2));
/// ```
pub struct Frontier<T, D: Discipline<T>> {
    items: Mutex<D>,
    _marker: PhantomData<fn() -> T>,
}

/// A first-in first-out [`Frontier`], used by breadth-first visits.
pub type WorkQueue<T = usize> = Frontier<T, VecDeque<T>>;

/// A last-in first-out [`Frontier`], used by depth-first visits.
pub type WorkStack<T = usize> = Frontier<T, Vec<T>>;

impl<T, D: Discipline<T>> Default for Frontier<T, D> {
    fn default() -> Self {
        Self {
            items: Mutex::new(D::default()),
            _marker: PhantomData,
        }
    }
}

impl<T, D: Discipline<T>> Frontier<T, D> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    // The guarded container holds plain items, so a panic in another thread
    // cannot leave it in an inconsistent state.
    #[inline(always)]
    fn lock(&self) -> MutexGuard<'_, D> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds an item to the frontier.
    #[inline]
    pub fn push(&self, item: T) {
        self.lock().put(item);
    }

    /// Removes an item from the frontier, returning `None` if it is empty.
    #[inline]
    pub fn try_pop(&self) -> Option<T> {
        self.lock().take()
    }

    /// Discards all items.
    ///
    /// Requiring a mutable reference guarantees that no visit is running.
    pub fn clear(&mut self) {
        *self.items.get_mut().unwrap_or_else(PoisonError::into_inner) = D::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let queue = WorkQueue::new();
        for node in 0..10 {
            queue.push(node);
        }
        let popped: Vec<_> = std::iter::from_fn(|| queue.try_pop()).collect();
        assert_eq!(popped, (0..10).collect::<Vec<_>>());
        assert_eq!(queue.try_pop(), None);
    }

    #[test]
    fn test_lifo() {
        let stack = WorkStack::new();
        for node in 0..10 {
            stack.push(node);
        }
        let popped: Vec<_> = std::iter::from_fn(|| stack.try_pop()).collect();
        assert_eq!(popped, (0..10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_concurrent_push_pop() {
        let stack = WorkStack::new();
        std::thread::scope(|s| {
            for t in 0..4 {
                let stack = &stack;
                s.spawn(move || {
                    for node in 0..1000 {
                        stack.push(t * 1000 + node);
                    }
                });
            }
        });
        let mut popped: Vec<_> = std::iter::from_fn(|| stack.try_pop()).collect();
        popped.sort_unstable();
        assert_eq!(popped, (0..4000).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear() {
        let mut queue = WorkQueue::<(usize, usize)>::new();
        queue.push((0, 1));
        queue.clear();
        assert_eq!(queue.try_pop(), None);
    }
}
