// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact edit distance over two rolling DP rows.
//!
//! Classic Wagner-Fischer, with two twists that matter for search workloads:
//! the shorter sequence always runs along the row, so memory is
//! O(min(len1, len2)), and rows narrow enough to fit `INLINE_ROW_CAPACITY`
//! never allocate.

use super::rows::Rows;
use crate::contracts::{check_distance_bounds, check_row_prefix};
use crate::types::DistanceError;

/// Edit distance between `a` and `b`.
///
/// Counts the minimum number of single-element insertions, deletions and
/// substitutions turning `a` into `b`. Elements compare with `==`, nothing is
/// normalized.
///
/// If the inputs need heap rows and the allocator cannot provide them, the
/// process aborts. Use [`try_levenshtein`] to get an error instead.
///
/// # Example
///
/// ```
/// use levdist::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (short, long) = by_length(a, b);
    if short.is_empty() {
        return long.len();
    }

    let mut rows = Rows::new(short.len() + 1);
    let distance = sweep(short, long, &mut rows);

    check_distance_bounds(distance, a.len(), b.len());
    distance
}

/// Edit distance between `a` and `b`, surfacing allocation failure.
///
/// Identical to [`levenshtein`] except that a failed heap reservation for wide
/// rows comes back as [`DistanceError::ResourceExhausted`]. Nothing is leaked on
/// that path. Inputs that fit the inline rows never fail.
pub fn try_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, DistanceError> {
    let (short, long) = by_length(a, b);
    if short.is_empty() {
        return Ok(long.len());
    }

    let mut rows = Rows::try_new(short.len() + 1)?;
    let distance = sweep(short, long, &mut rows);

    check_distance_bounds(distance, a.len(), b.len());
    Ok(distance)
}

/// Edit distance between two byte strings.
#[inline]
pub fn levenshtein_bytes(a: &[u8], b: &[u8]) -> usize {
    levenshtein(a, b)
}

/// Edit distance between two sequences of Unicode code points.
#[inline]
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    levenshtein(a, b)
}

/// Edit distance between two strings, counted in code points.
///
/// ASCII on both sides means bytes and code points coincide, so the byte
/// instantiation runs directly with no decoding.
pub fn levenshtein_str(a: &str, b: &str) -> usize {
    if a.is_ascii() && b.is_ascii() {
        return levenshtein_bytes(a.as_bytes(), b.as_bytes());
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// Order the inputs as `(short, long)`. On a tie `a` is short.
#[inline]
fn by_length<'s, T>(a: &'s [T], b: &'s [T]) -> (&'s [T], &'s [T]) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Run the DP sweep. `short` must be non-empty and `rows` exactly
/// `short.len() + 1` wide.
fn sweep<T: PartialEq>(short: &[T], long: &[T], rows: &mut Rows) -> usize {
    let width = short.len() + 1;
    debug_assert_eq!(rows.width(), width);

    // Row 0: turning the empty prefix of `long` into each prefix of `short`
    let mut current = 1;
    {
        let (prev, _) = rows.pair(current);
        for (k, slot) in prev.iter_mut().enumerate() {
            *slot = k;
        }
        check_row_prefix(prev, width);
    }

    for (i, long_elem) in long.iter().enumerate() {
        let (prev, curr) = rows.pair(current);
        curr[0] = i + 1;

        for (j, short_elem) in short.iter().enumerate() {
            let k = j + 1;
            let substitution = prev[j] + usize::from(short_elem != long_elem);
            curr[k] = (1 + prev[k].min(curr[j])).min(substitution);
        }

        current = 1 - current;
    }

    // After the final flip the last written row is back in the "previous" role
    let (last, _) = rows.pair(current);
    last[short.len()]
}
