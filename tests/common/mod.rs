//! Shared test helpers: a full-matrix oracle and input generators.

#![allow(dead_code)]

/// Full O(nm) matrix Levenshtein.
///
/// Slow and allocation-heavy, but it is the textbook recurrence with nothing
/// clever about row roles or buffers, which makes it a good ground truth.
pub fn oracle_levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 0..=m {
        dp[i][0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1) // deletion
                .min(dp[i][j - 1] + 1) // insertion
                .min(dp[i - 1][j - 1] + cost); // substitution
        }
    }

    dp[m][n]
}

/// Widen bytes to code points one-to-one (Latin-1 view of the same content).
pub fn widen(bytes: &[u8]) -> Vec<char> {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// `pattern` repeated `reps` times.
pub fn repeated(pattern: &[u8], reps: usize) -> Vec<u8> {
    pattern.repeat(reps)
}
