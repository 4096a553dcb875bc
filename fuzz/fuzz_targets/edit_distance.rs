// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance engine.
//!
//! Checks the metric laws on arbitrary byte strings and code-point strings.
//! A search index built on a distance that lies about symmetry or the triangle
//! inequality prunes real neighbors away, so these are worth hammering.

#![no_main]

use arbitrary::Arbitrary;
use levdist::{levenshtein, levenshtein_chars, levenshtein_str, try_levenshtein};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: three sequences for the triangle check
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    c: Vec<u8>,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts; still long enough to reach heap rows
    let a = &input.a[..input.a.len().min(700)];
    let b = &input.b[..input.b.len().min(700)];
    let c = &input.c[..input.c.len().min(64)];

    let ab = levenshtein(a, b);

    // INVARIANT 1: Symmetry
    assert_eq!(ab, levenshtein(b, a), "asymmetric for a={:?}, b={:?}", a, b);

    // INVARIANT 2: Length bounds
    assert!(ab >= a.len().abs_diff(b.len()), "below length difference");
    assert!(ab <= a.len().max(b.len()), "above max length");

    // INVARIANT 3: Identity
    assert_eq!(levenshtein(a, a), 0);
    assert_eq!(ab == 0, a == b);

    // INVARIANT 4: Fallible entry point agrees
    assert_eq!(try_levenshtein(a, b), Ok(ab));

    // INVARIANT 5: Triangle inequality (short third leg keeps it cheap)
    let a_short = &a[..a.len().min(64)];
    let b_short = &b[..b.len().min(64)];
    assert!(
        levenshtein(a_short, b_short) <= levenshtein(a_short, c) + levenshtein(c, b_short),
        "triangle inequality violated"
    );

    // INVARIANT 6: Narrow and wide agree on equivalent content
    let a_wide: Vec<char> = a.iter().map(|&x| char::from(x)).collect();
    let b_wide: Vec<char> = b.iter().map(|&x| char::from(x)).collect();
    assert_eq!(levenshtein_chars(&a_wide, &b_wide), ab);

    // INVARIANT 7: str entry point counts code points
    let a_str = String::from_utf8_lossy(a);
    let b_str = String::from_utf8_lossy(b);
    let a_chars: Vec<char> = a_str.chars().collect();
    let b_chars: Vec<char> = b_str.chars().collect();
    assert_eq!(
        levenshtein_str(&a_str, &b_str),
        levenshtein_chars(&a_chars, &b_chars)
    );
});
