// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the edit-distance kernel.
//!
//! Debug-mode assertions of properties every edit distance must satisfy. They
//! are **zero-cost in release builds** (`debug_assert!`) and catch a broken DP
//! recurrence at the call that produced it, long before a search index starts
//! returning odd neighbors.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function       | Property                                        |
//! |-------------------------|-------------------------------------------------|
//! | `check_distance_bounds` | `len1.abs_diff(len2) <= d <= max(len1, len2)`   |
//! | `check_row_prefix`      | Row 0 is `[0, 1, ..., width - 1]`               |

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a distance lies within the bounds set by the input lengths.
///
/// The length difference is a lower bound (that many insertions or deletions
/// are unavoidable). The longer length is an upper bound (substitute the
/// overlap, insert or delete the rest).
///
/// # Panics (debug builds only)
/// Panics if `distance` falls outside `[|len1 - len2|, max(len1, len2)]`.
#[inline]
pub fn check_distance_bounds(distance: usize, len1: usize, len2: usize) {
    debug_assert!(
        distance >= len1.abs_diff(len2),
        "Contract violation: distance {} < length difference |{} - {}|",
        distance,
        len1,
        len2
    );
    debug_assert!(
        distance <= len1.max(len2),
        "Contract violation: distance {} > max({}, {})",
        distance,
        len1,
        len2
    );
}

// ============================================================================
// ROW CONTRACTS
// ============================================================================

/// Check that the initial DP row is the identity sequence.
///
/// # Panics (debug builds only)
/// Panics if `row.len() != width` or `row[k] != k` for some `k`.
#[inline]
pub fn check_row_prefix(row: &[usize], width: usize) {
    debug_assert_eq!(
        row.len(),
        width,
        "Contract violation: row has {} slots, expected {}",
        row.len(),
        width
    );
    debug_assert!(
        row.iter().enumerate().all(|(k, &v)| v == k),
        "Contract violation: initial row is not [0, 1, ..., {}]",
        width.saturating_sub(1)
    );
}
