// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the edit-distance engine.

use std::fmt;

/// Error type for edit-distance computation.
///
/// The kernel is total over well-formed inputs, so the only thing that can go
/// wrong is running out of memory for the heap-backed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The two heap rows of `row_width` slots each could not be allocated.
    ResourceExhausted { row_width: usize },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::ResourceExhausted { row_width } => {
                write!(
                    f,
                    "cannot allocate two DP rows of {} slots each",
                    row_width
                )
            }
        }
    }
}

impl std::error::Error for DistanceError {}
