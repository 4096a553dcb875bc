// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The distance-function contract a search index plugs into.
//!
//! Index structures (VP-trees, BK-trees, graph indexes) only need a number back
//! and a few facts about the metric: does it obey the triangle inequality, is
//! it symmetric. [`Metric`] carries the facts, [`Distance`] the number;
//! [`EditDistance`] is the Levenshtein implementation over bytes, code points,
//! any `PartialEq` slice, and `str`.
//!
//! # Example
//!
//! ```
//! use levdist::{Distance, EditDistance, Metric};
//!
//! let metric = EditDistance;
//! assert_eq!(metric.distance("flaw", "lawn"), 2);
//! assert_eq!(metric.distance(&b"abc"[..], &b"abd"[..]), 1);
//! assert!(metric.obeys_triangle_inequality());
//! ```

use crate::distance::{levenshtein, levenshtein_str};

/// Facts about a distance function that do not depend on its input type.
///
/// Implementations must be pure, so one instance can be shared across threads.
pub trait Metric: Sync {
    /// Short stable name, e.g. for index metadata.
    fn name(&self) -> &'static str;

    /// `distance(x, x) == 0` for every `x`.
    fn has_identity(&self) -> bool {
        true
    }

    /// `distance(a, b) == distance(b, a)` for every pair.
    fn has_symmetry(&self) -> bool {
        true
    }

    /// `distance(a, c) <= distance(a, b) + distance(b, c)` for every triple.
    fn obeys_triangle_inequality(&self) -> bool {
        true
    }
}

/// A distance function over values of type `S`.
///
/// The result depends only on the two inputs.
pub trait Distance<S: ?Sized>: Metric {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &S, b: &S) -> usize;
}

/// Unit-cost Levenshtein distance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditDistance;

impl Metric for EditDistance {
    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

impl<T: PartialEq> Distance<[T]> for EditDistance {
    #[inline]
    fn distance(&self, a: &[T], b: &[T]) -> usize {
        levenshtein(a, b)
    }
}

impl Distance<str> for EditDistance {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_str(a, b)
    }
}
