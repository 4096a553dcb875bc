//! The `Distance` contract and batch helpers as a search index sees them.

use levdist::{distances_to, levenshtein_str, Distance, EditDistance, Metric};

/// Nearest candidate by linear scan, the way a brute-force index would do it.
fn nearest<'a, D: Distance<str>>(metric: &D, query: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .min_by_key(|candidate| metric.distance(query, candidate))
}

#[test]
fn test_nearest_neighbor_scan() {
    let vocabulary = ["kernel", "colonel", "kennel", "tensor", "ternary"];
    assert_eq!(nearest(&EditDistance, "kernl", &vocabulary), Some("kernel"));
    assert_eq!(nearest(&EditDistance, "tensr", &vocabulary), Some("tensor"));
}

#[test]
fn test_distances_to_preserves_order() {
    let vocabulary = vec!["kernel".to_string(), "kennel".to_string(), "k".to_string()];
    let distances = distances_to(&EditDistance, "kernel", &vocabulary);
    assert_eq!(distances, vec![0, 1, 5]);

    for (candidate, distance) in vocabulary.iter().zip(&distances) {
        assert_eq!(levenshtein_str("kernel", candidate), *distance);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_distances_to_matches_sequential() {
    use levdist::par_distances_to;

    let candidates: Vec<Vec<u8>> = (0..500u32)
        .map(|i| format!("{:x}", i.wrapping_mul(2_654_435_761)).into_bytes())
        .collect();
    let query: &[u8] = b"deadbeef";

    assert_eq!(
        par_distances_to(&EditDistance, query, &candidates),
        distances_to(&EditDistance, query, &candidates)
    );
}

#[test]
fn test_metric_flags() {
    let metric: &dyn Distance<str> = &EditDistance;
    assert_eq!(metric.name(), "levenshtein");
    assert!(metric.has_identity());
    assert!(metric.has_symmetry());
    assert!(metric.obeys_triangle_inequality());
}

#[test]
fn test_metric_flags_on_concrete_value() {
    // EditDistance serves both str and slices; the flags still resolve by method
    let metric = EditDistance;
    assert_eq!(metric.name(), "levenshtein");
    assert!(metric.has_identity());
    assert!(metric.has_symmetry());
    assert!(metric.obeys_triangle_inequality());
    assert_eq!(metric.distance("flaw", "lawn"), 2);
    assert_eq!(metric.distance(&b"abc"[..], &b"abd"[..]), 1);
}
