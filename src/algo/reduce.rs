/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential and parallel reductions on slices.
//!
//! Parallel versions split the slice among the threads of a
//! [`rayon::ThreadPool`] and combine the partial results; they always return
//! the same value as the sequential versions. Empty slices have no minimum,
//! maximum or average, and `None` is returned.

use rayon::{prelude::*, ThreadPool};

/// Returns the minimum of `values`.
pub fn seq_min(values: &[i64]) -> Option<i64> {
    values.iter().copied().min()
}

/// Returns the minimum of `values`, computed in parallel.
pub fn par_min(values: &[i64], thread_pool: &ThreadPool) -> Option<i64> {
    thread_pool.install(|| values.par_iter().copied().min())
}

/// Returns the maximum of `values`.
pub fn seq_max(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

/// Returns the maximum of `values`, computed in parallel.
pub fn par_max(values: &[i64], thread_pool: &ThreadPool) -> Option<i64> {
    thread_pool.install(|| values.par_iter().copied().max())
}

/// Returns the sum of `values`.
///
/// The sum is accumulated in an [`i128`], so it cannot overflow.
pub fn seq_sum(values: &[i64]) -> i128 {
    values.iter().map(|&x| x as i128).sum()
}

/// Returns the sum of `values`, computed in parallel.
pub fn par_sum(values: &[i64], thread_pool: &ThreadPool) -> i128 {
    thread_pool.install(|| values.par_iter().map(|&x| x as i128).sum())
}

/// Returns the average of `values`.
pub fn seq_avg(values: &[i64]) -> Option<f64> {
    (!values.is_empty()).then(|| seq_sum(values) as f64 / values.len() as f64)
}

/// Returns the average of `values`, computed in parallel.
pub fn par_avg(values: &[i64], thread_pool: &ThreadPool) -> Option<f64> {
    (!values.is_empty()).then(|| par_sum(values, thread_pool) as f64 / values.len() as f64)
}
