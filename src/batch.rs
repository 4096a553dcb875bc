// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One query against many candidates.
//!
//! Scanning a candidate list is embarrassingly parallel: every call owns its
//! own DP rows, so there is nothing to share or lock. With the `parallel`
//! feature, Rayon spreads the scan over its thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::metric::Distance;

/// Distances from `query` to each candidate, in candidate order.
///
/// # Example
///
/// ```
/// use levdist::{distances_to, EditDistance};
///
/// let words = ["kitten", "sitting", "mitten"];
/// assert_eq!(distances_to(&EditDistance, "kitten", &words), vec![0, 3, 1]);
/// ```
pub fn distances_to<S, C, D>(metric: &D, query: &S, candidates: &[C]) -> Vec<usize>
where
    S: ?Sized,
    C: AsRef<S>,
    D: Distance<S>,
{
    candidates
        .iter()
        .map(|candidate| metric.distance(query, candidate.as_ref()))
        .collect()
}

/// Parallel version of [`distances_to`]. Same result, same order.
#[cfg(feature = "parallel")]
pub fn par_distances_to<S, C, D>(metric: &D, query: &S, candidates: &[C]) -> Vec<usize>
where
    S: ?Sized + Sync,
    C: AsRef<S> + Sync,
    D: Distance<S>,
{
    candidates
        .par_iter()
        .map(|candidate| metric.distance(query, candidate.as_ref()))
        .collect()
}
