/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential and parallel bubble sort and merge sort.

use rayon::{prelude::*, ThreadPool};

/// Below this length, [`par_merge_sort`] sorts sequentially.
pub const MERGE_SORT_CUTOFF: usize = 1 << 12;

/// Sorts `values` with bubble sort.
///
/// The sort is stable and stops as soon as a pass makes no swap.
pub fn seq_bubble_sort<T: Ord>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `values` with odd-even transposition sort, the parallel variant of
/// bubble sort.
///
/// Each phase compares the disjoint pairs starting at even (or odd) indices,
/// so all comparisons of a phase run in parallel; `values.len()` phases
/// suffice.
pub fn par_bubble_sort<T: Ord + Send>(values: &mut [T], thread_pool: &ThreadPool) {
    let n = values.len();
    thread_pool.install(|| {
        for phase in 0..n {
            let offset = phase % 2;
            if n <= offset {
                continue;
            }
            values[offset..].par_chunks_mut(2).for_each(|pair| {
                if pair.len() == 2 && pair[0] > pair[1] {
                    pair.swap(0, 1);
                }
            });
        }
    });
}

/// Merges the sorted halves `values[..mid]` and `values[mid..]` using
/// `buffer`, which must have the same length as `values`.
fn merge<T: Ord + Copy>(values: &mut [T], mid: usize, buffer: &mut [T]) {
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < values.len() {
        // `<=` keeps the sort stable
        if values[i] <= values[j] {
            buffer[k] = values[i];
            i += 1;
        } else {
            buffer[k] = values[j];
            j += 1;
        }
        k += 1;
    }
    buffer[k..k + mid - i].copy_from_slice(&values[i..mid]);
    k += mid - i;
    buffer[k..].copy_from_slice(&values[j..]);
    values.copy_from_slice(buffer);
}

fn merge_sort_with<T: Ord + Copy>(values: &mut [T], buffer: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let mid = values.len() / 2;
    {
        let (left, right) = values.split_at_mut(mid);
        let (left_buf, right_buf) = buffer.split_at_mut(mid);
        merge_sort_with(left, left_buf);
        merge_sort_with(right, right_buf);
    }
    merge(values, mid, buffer);
}

/// Sorts `values` with top-down merge sort.
pub fn seq_merge_sort<T: Ord + Copy>(values: &mut [T]) {
    let mut buffer = values.to_vec();
    merge_sort_with(values, &mut buffer);
}

fn par_merge_sort_with<T: Ord + Copy + Send>(values: &mut [T], buffer: &mut [T]) {
    if values.len() <= MERGE_SORT_CUTOFF {
        merge_sort_with(values, buffer);
        return;
    }
    let mid = values.len() / 2;
    {
        let (left, right) = values.split_at_mut(mid);
        let (left_buf, right_buf) = buffer.split_at_mut(mid);
        rayon::join(
            || par_merge_sort_with(left, left_buf),
            || par_merge_sort_with(right, right_buf),
        );
    }
    merge(values, mid, buffer);
}

/// Sorts `values` with merge sort, sorting the two halves in parallel.
///
/// The recursion forks with [`rayon::join`] and falls back to
/// [`seq_merge_sort`] below [`MERGE_SORT_CUTOFF`] elements; both halves are
/// sorted before they are merged.
pub fn par_merge_sort<T: Ord + Copy + Send>(values: &mut [T], thread_pool: &ThreadPool) {
    let mut buffer = values.to_vec();
    thread_pool.install(|| par_merge_sort_with(values, &mut buffer));
}
