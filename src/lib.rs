// This file is part of copy-fixed-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `copy-fixed-array`
//!
//! A `no_std`, fixed-size, stack-allocated array type for `Copy` elements,
//! **with no `unsafe`**.
//!
//! The core type, [`FixedArray<T, N>`], holds exactly `N` elements inline on
//! the stack. Unlike a vector there is no length to track: the size is the
//! const parameter `N`, every slot is live from construction to drop, and a
//! value never grows or shrinks.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want a plain `[T; N]` with construction safety: building from data
//!   of unknown length can neither overrun the storage nor leave slots unset.
//! - You want checked element access that reports the offending index
//!   instead of panicking.
//! - You are in a `no_std` or embedded environment and elements are small
//!   and `Copy`.
//!
//! If you need a *variable* number of elements within a fixed capacity,
//! use a stack vector instead; this type is always full.
//!
//! ## Construction policy
//!
//! Constructing from a source sequence of arbitrary length never fails:
//!
//! - a source longer than `N` is **truncated**: elements past index `N` are
//!   discarded and never read;
//! - a source shorter than `N` is **padded**: the remaining slots are set to
//!   `T::default()`, never left unset.
//!
//! See [`FixedArray::from_slice_lossy`] and the `FromIterator` impl.
//!
//! ## Checked and raw access
//!
//! - [`at`](FixedArray::at) / [`at_mut`](FixedArray::at_mut) /
//!   [`set`](FixedArray::set) validate the index against `0..N` and return
//!   [`Error::OutOfRange`] carrying the offending index and the size.
//! - [`front`](FixedArray::front) / [`back`](FixedArray::back) return
//!   [`Error::Empty`] only when `N == 0`.
//! - [`get`](FixedArray::get) / [`get_mut`](FixedArray::get_mut) are the
//!   `Option`-returning slice-style lookups.
//! - The raw view ([`as_slice`](FixedArray::as_slice),
//!   [`as_mut_slice`](FixedArray::as_mut_slice), `Deref` to `[T]`) leaves
//!   bounds handling to the caller; indexing through it panics like any
//!   built-in slice.
//!
//! ## The zero-size case
//!
//! `FixedArray<T, 0>` is a valid, fully constructed value: `size() == 0`,
//! iteration yields nothing, rendering gives `"[]"`, and `front`/`back`
//! report [`Error::Empty`]. No operation ever touches a nonexistent slot.
//!
//! ## Example
//!
//! ```rust
//! use copy_fixed_array::FixedArray;
//!
//! let mut a: FixedArray<i32, 3> = FixedArray::from_slice_lossy(&[1, 2, 3, 4, 5]);
//! assert_eq!(a.as_slice(), &[1, 2, 3]);
//!
//! a.set(2, 30).unwrap();
//! assert_eq!(a.to_string(), "[1, 2, 30]");
//! assert!(a.at(5).is_err());
//! ```
//!
//! See [`FixedArray`] for detailed semantics and complexity notes.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod array;
mod error;
mod fmt;
mod index;
mod iter;

// Public exports (crate API surface)
pub use array::FixedArray;
pub use error::Error;
pub use iter::IntoIter;
