// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: the DP kernel and the rows it runs on.

mod levenshtein;
mod rows;

pub use levenshtein::*;
pub use rows::INLINE_ROW_CAPACITY;
