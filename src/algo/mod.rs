/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms.

pub mod visits;

pub mod reachability;

pub mod components;

pub mod reduce;
pub mod sort;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use visits::{Parallel, Sequential};
}
