// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two rolling DP rows.
//!
//! Short strings dominate search workloads, so rows up to `INLINE_ROW_CAPACITY`
//! wide sit in inline storage on the stack and never touch the allocator. Only
//! the `2 * width` slots in use are initialized, so a word-sized pair writes a
//! few dozen slots, not the whole inline capacity. Anything wider spills to one
//! exact-size heap block. The DP loop only ever sees `pair()`, so it is written
//! once for both storage paths.

use smallvec::SmallVec;

use crate::types::DistanceError;

/// Widest row (shorter sequence length + 1) kept in inline storage.
pub const INLINE_ROW_CAPACITY: usize = 512;

type Slots = SmallVec<[usize; 2 * INLINE_ROW_CAPACITY]>;

/// Two DP rows of equal width, backed by inline or heap storage.
pub(crate) struct Rows {
    slots: Slots,
    width: usize,
}

impl Rows {
    /// Acquire rows of `width` slots each.
    ///
    /// The heap path goes through the global allocator, which aborts the
    /// process if the block cannot be allocated.
    #[inline]
    pub(crate) fn new(width: usize) -> Self {
        let len = 2 * width;
        let mut slots = Slots::new();
        slots.reserve_exact(len);
        slots.resize(len, 0);
        Self { slots, width }
    }

    /// Acquire rows of `width` slots each, reporting allocation failure.
    #[inline]
    pub(crate) fn try_new(width: usize) -> Result<Self, DistanceError> {
        let exhausted = DistanceError::ResourceExhausted { row_width: width };
        let len = width.checked_mul(2).ok_or_else(|| exhausted.clone())?;

        let mut slots = Slots::new();
        slots.try_reserve_exact(len).map_err(|_| exhausted)?;
        slots.resize(len, 0);

        Ok(Self { slots, width })
    }

    /// Did these rows avoid the heap?
    #[cfg(test)]
    pub(crate) fn is_inline(&self) -> bool {
        !self.slots.spilled()
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Split into `(previous, current)` rows.
    ///
    /// `current` selects which half plays the current row (0 or 1); the other
    /// half is the previous row. Flipping `current` swaps the roles without
    /// moving any data.
    #[inline]
    pub(crate) fn pair(&mut self, current: usize) -> (&mut [usize], &mut [usize]) {
        debug_assert!(current < 2, "row index must be 0 or 1, got {}", current);

        let (first, second) = self.slots.split_at_mut(self.width);

        if current == 1 {
            (first, second)
        } else {
            (second, first)
        }
    }
}
