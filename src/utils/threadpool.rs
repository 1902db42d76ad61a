/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;

/// The number of workers of a parallel visit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as the available hardware parallelism.
    #[default]
    Default,
    /// A specific number of threads.
    NumThreads(usize),
}

impl From<Option<usize>> for Threads {
    fn from(num_threads: Option<usize>) -> Self {
        match num_threads {
            Some(0) | None => Self::Default,
            Some(num_threads) => Self::NumThreads(num_threads),
        }
    }
}

impl Threads {
    /// Returns the number of threads of the pool [built](Threads::build) from
    /// this configuration.
    pub fn num_threads(self) -> usize {
        match self {
            Self::Default => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            Self::NumThreads(num_threads) => num_threads.max(1),
        }
    }

    /// Builds a thread pool.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        let num_threads = self.num_threads();
        log::debug!("Building thread pool with {} threads", num_threads);
        ThreadPoolBuilder::new().num_threads(num_threads).build()
    }
}

/// Builds a [`rayon::ThreadPool`] and returns a reference to it.
///
/// `threads![]` uses as many threads as the available hardware parallelism,
/// `threads![n]` uses `n` threads. The pool lives until the end of the
/// enclosing statement, so the macro is meant to be used in argument
/// position.
///
/// # Panics
///
/// If the thread pool cannot be built.
#[macro_export]
macro_rules! threads {
    () => {
        &$crate::utils::Threads::Default
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        &$crate::utils::Threads::NumThreads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with {} threads",
                    $num_threads
                )
            })
    };
}
