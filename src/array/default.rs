// This file is part of copy-fixed-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::FixedArray;

impl<T: Copy + Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self {
            slots: [T::default(); N],
        }
    }
}
