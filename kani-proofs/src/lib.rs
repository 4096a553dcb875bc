// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the levdist DP kernel.
//!
//! This standalone crate extracts the rolling two-row Levenshtein kernel and
//! proves properties of it for every input up to a small length bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds row access, no overflow
//! 2. **Bounds**: `|len1 - len2| <= d <= max(len1, len2)`
//! 3. **Identity**: `d(a, a) == 0`
//! 4. **Symmetry**: `d(a, b) == d(b, a)`, including equal lengths
//! 5. **Agreement**: rolling rows equal the full matrix

/// Row width that fits the stack buffer in these proofs
pub const MAX_WIDTH: usize = 8;

// ============================================================================
// DP KERNEL (mirrors src/distance/levenshtein.rs, fixed-size rows)
// ============================================================================
//
// Hand-copied from `sweep` and `Rows::pair`: the proofs cover this copy, not the
// shipped code. Any change to the recurrence, the row flip or the tie rule in
// src/distance/levenshtein.rs must be repeated here.

/// Two-row Levenshtein on a fixed stack buffer. Inputs must satisfy
/// `min(a.len(), b.len()) < MAX_WIDTH`.
pub fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut rows = [[0usize; MAX_WIDTH]; 2];
    for k in 0..=short.len() {
        rows[0][k] = k;
    }

    let mut current = 1;
    for (i, long_elem) in long.iter().enumerate() {
        let prev = 1 - current;
        rows[current][0] = i + 1;
        for k in 1..=short.len() {
            let substitution = rows[prev][k - 1] + usize::from(short[k - 1] != *long_elem);
            rows[current][k] = (1 + rows[prev][k].min(rows[current][k - 1])).min(substitution);
        }
        current = prev;
    }

    rows[1 - current][short.len()]
}

/// Full-matrix Levenshtein for inputs shorter than `MAX_WIDTH`.
pub fn levenshtein_full(a: &[u8], b: &[u8]) -> usize {
    let mut dp = [[0usize; MAX_WIDTH]; MAX_WIDTH];
    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const BOUND: usize = 4;

    fn any_bytes() -> ([u8; BOUND], usize) {
        let bytes: [u8; BOUND] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= BOUND);
        (bytes, len)
    }

    /// Proof: distance stays within the length bounds.
    #[kani::proof]
    #[kani::unwind(6)]
    fn proof_length_bounds() {
        let (a, a_len) = any_bytes();
        let (b, b_len) = any_bytes();
        let d = levenshtein(&a[..a_len], &b[..b_len]);

        assert!(d >= a_len.abs_diff(b_len));
        assert!(d <= a_len.max(b_len));
    }

    /// Proof: d(a, a) == 0.
    #[kani::proof]
    #[kani::unwind(6)]
    fn proof_identity() {
        let (a, a_len) = any_bytes();
        assert_eq!(levenshtein(&a[..a_len], &a[..a_len]), 0);
    }

    /// Proof: argument order never matters.
    #[kani::proof]
    #[kani::unwind(6)]
    fn proof_symmetry() {
        let (a, a_len) = any_bytes();
        let (b, b_len) = any_bytes();
        assert_eq!(
            levenshtein(&a[..a_len], &b[..b_len]),
            levenshtein(&b[..b_len], &a[..a_len])
        );
    }

    /// Proof: rolling rows compute the same value as the full matrix.
    #[kani::proof]
    #[kani::unwind(6)]
    fn proof_matches_full_matrix() {
        let (a, a_len) = any_bytes();
        let (b, b_len) = any_bytes();
        assert_eq!(
            levenshtein(&a[..a_len], &b[..b_len]),
            levenshtein_full(&a[..a_len], &b[..b_len])
        );
    }
}

// ============================================================================
// STANDARD TESTS (run with cargo test)
// ============================================================================
