// This file is part of copy-fixed-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Textual rendering for [`FixedArray`](crate::FixedArray).
//!
//! `Display` renders `"[e0, e1, ..., eN-1]"` with elements in `T`'s own
//! textual form, separated by `", "`. A zero-size array renders as `"[]"`
//! without touching any slot.

// Crate imports
use crate::array::FixedArray;

// Core imports
use core::fmt;

impl<T: Copy + fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}
