// This file is part of copy-fixed-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedArray`.
//!
//! These errors represent bounds and zero-size access conditions.
//! They are `Copy` and implement `core::error::Error` (on recent toolchains).

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`FixedArray`](crate::FixedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access used an index outside `0..N`.
    OutOfRange {
        /// The index the caller supplied.
        index: usize,
        /// The fixed size `N` of the array.
        size: usize,
    },
    /// [`front`](crate::FixedArray::front) or [`back`](crate::FixedArray::back)
    /// was called on an array with `N == 0`.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::Empty => f.write_str("array is empty"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::Empty);
        assert!(s.contains("empty"));
    }

    #[test]
    fn test_out_of_range_carries_index_and_size() {
        let e = Error::OutOfRange { index: 5, size: 3 };
        assert_eq!(e.to_string(), "index 5 out of range for size 3");
    }
}
