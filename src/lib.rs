// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact Levenshtein edit distance for nearest-neighbor search.
//!
//! The search side (index structures, query dispatch) treats this crate as a
//! black-box metric: two sequences in, one count out. Everything here is pure,
//! so any number of threads can call it at once.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │  metric.rs   │────▶│ distance/        │────▶│ distance/   │
//! │ (Distance,   │     │  levenshtein.rs  │     │  rows.rs    │
//! │ EditDistance)│     │ (two-row DP)     │     │ (inline or  │
//! └──────────────┘     └──────────────────┘     │  heap rows) │
//!        ▲                      │               └─────────────┘
//!        │                      ▼
//! ┌──────────────┐     ┌──────────────────┐
//! │  batch.rs    │     │  contracts.rs    │
//! │ (one query,  │     │ (debug bounds    │
//! │  many cands) │     │  assertions)     │
//! └──────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use levdist::{levenshtein, levenshtein_str, try_levenshtein};
//!
//! assert_eq!(levenshtein(b"kitten", b"sitting"), 3);
//! assert_eq!(levenshtein_str("café", "cafe"), 1);
//! assert_eq!(try_levenshtein(b"flaw", b"lawn"), Ok(2));
//! ```

// Module declarations
mod batch;
pub mod contracts;
mod distance;
mod metric;
mod types;

// Re-exports for public API
#[cfg(feature = "parallel")]
pub use batch::par_distances_to;
pub use batch::distances_to;
pub use distance::{
    levenshtein, levenshtein_bytes, levenshtein_chars, levenshtein_str, try_levenshtein,
    INLINE_ROW_CAPACITY,
};
pub use metric::{Distance, EditDistance, Metric};
pub use types::DistanceError;
