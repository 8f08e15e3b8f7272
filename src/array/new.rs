// This file is part of copy-fixed-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::FixedArray;

impl<T: Copy + Default, const N: usize> FixedArray<T, N> {
    /// Constructs an array with every slot set to `Default::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Copy, const N: usize> FixedArray<T, N> {
    /// Constructs an array with every slot set to `value`.
    ///
    /// Equivalent to [`new`](FixedArray::new) followed by
    /// [`fill`](FixedArray::fill), without requiring `T: Default`.
    #[inline]
    pub const fn filled(value: T) -> Self {
        Self { slots: [value; N] }
    }
}
