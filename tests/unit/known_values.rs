//! Hand-checked distances.

use levdist::{levenshtein, levenshtein_bytes, levenshtein_str, try_levenshtein};

// ============================================================================
// CLASSIC PAIRS
// ============================================================================

#[test]
fn test_kitten_sitting() {
    assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
}

#[test]
fn test_flaw_lawn() {
    assert_eq!(levenshtein(b"flaw", b"lawn"), 2);
}

#[test]
fn test_both_empty() {
    assert_eq!(levenshtein_bytes(b"", b""), 0);
    assert_eq!(levenshtein_str("", ""), 0);
}

#[test]
fn test_identical() {
    assert_eq!(levenshtein(b"abc", b"abc"), 0);
}

#[test]
fn test_single_substitution() {
    assert_eq!(levenshtein(b"abc", b"abd"), 1);
}

#[test]
fn test_single_insertion() {
    assert_eq!(levenshtein(b"ab", b"abc"), 1);
}

#[test]
fn test_single_deletion() {
    assert_eq!(levenshtein(b"abc", b"ac"), 1);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_one_side_empty() {
    assert_eq!(levenshtein(b"", b"search"), 6);
    assert_eq!(levenshtein(b"search", b""), 6);
}

#[test]
fn test_completely_different() {
    assert_eq!(levenshtein(b"abc", b"xyz"), 3);
    assert_eq!(levenshtein(b"ab", b"wxyz"), 4);
}

#[test]
fn test_repeated_characters() {
    assert_eq!(levenshtein(b"aaaa", b"aa"), 2);
    assert_eq!(levenshtein(b"aaaa", b"bbbb"), 4);
}

#[test]
fn test_case_sensitive() {
    assert_eq!(levenshtein_str("Search", "search"), 1);
    assert_eq!(levenshtein_str("ABC", "abc"), 3);
}

#[test]
fn test_transposition_costs_two() {
    // No transposition operation: a swap is two substitutions
    assert_eq!(levenshtein(b"ab", b"ba"), 2);
}

#[test]
fn test_swapped_arguments() {
    let pairs: &[(&[u8], &[u8])] = &[
        (b"kitten", b"sitting"),
        (b"flaw", b"lawn"),
        (b"", b"abc"),
        (b"gumbo", b"gambol"),
        (b"abcd", b"badc"),
    ];

    for &(a, b) in pairs {
        assert_eq!(
            levenshtein(a, b),
            levenshtein(b, a),
            "asymmetric result for {:?} / {:?}",
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b)
        );
    }
}

#[test]
fn test_try_levenshtein_known_values() {
    assert_eq!(try_levenshtein(b"kitten", b"sitting"), Ok(3));
    assert_eq!(try_levenshtein(b"", b""), Ok(0));
    assert_eq!(try_levenshtein(b"gumbo", b"gambol"), Ok(2));
}
