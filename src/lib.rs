// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dynamic-array`
//!
//! A `no_std` (`alloc`-only), heap-backed growable array with explicit
//! capacity control, **with no `unsafe`**.
//!
//! The core type, [`DynamicArray<T>`], owns one contiguous buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. It
//! provides amortized O(1) append, insertion and removal at any position,
//! deep copies that preserve capacity, and O(1) ownership transfer.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want capacity growth to be exactly predictable (`0, 1, 2, 4, 8, ...`).
//! - You want allocation failure reported as a value instead of an abort.
//! - You want checked (`Result`) and unchecked (panicking) access side by side.
//!
//! It may not be the best fit if:
//!
//! - Your element type has no sensible [`Default`]: every slot of the buffer,
//!   including spare capacity, holds a real `T`.
//! - You need custom allocators or small-buffer optimization.
//!
//! ## Storage and safety
//!
//! - The buffer is a boxed slice in which every slot is an initialized `T`.
//!   Fresh slots are filled with `T::default()`.
//! - Elements are moved between buffers with slice swaps and rotations, so the
//!   crate is `#![forbid(unsafe_code)]`.
//! - Operations that can allocate require `T: Default`; read-only and
//!   shrinking operations have no bounds.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `DynamicArray<T>`.
//!   - Deserializing requires `T: Deserialize<'de> + Default`.
//!
//! ## High-level semantics
//!
//! - Appending to a full array doubles the capacity (one slot when empty).
//! - [`DynamicArray::reserve`] grows to exactly the requested capacity.
//! - A growing [`DynamicArray::resize`] allocates exactly `new_len` slots.
//! - Shrinking operations ([`DynamicArray::pop_back`],
//!   [`DynamicArray::truncate`], [`DynamicArray::clear`],
//!   [`DynamicArray::erase`]) never release memory.
//! - Cloning keeps the source's capacity.
//! - Equality and ordering look only at the live elements.
//!
//! ## Errors and panics
//!
//! - Allocating operations return [`Error::AllocFailed`] and leave the array
//!   unchanged.
//! - [`DynamicArray::at`], [`DynamicArray::at_mut`], [`DynamicArray::insert`]
//!   and [`DynamicArray::erase`] return [`Error::OutOfBounds`] for invalid
//!   positions.
//! - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, exactly like
//!   slices.
//! - The infallible trait paths (`Clone`, `Extend`, `FromIterator`) handle
//!   allocation failure the way `alloc::vec::Vec` does.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_array::{reserve, DynamicArray};
//!
//! let mut v: DynamicArray<u8> = DynamicArray::try_from(reserve(2)).unwrap();
//! v.push(1).unwrap();
//! v.push(2).unwrap();
//! assert_eq!(v.capacity(), 2);
//!
//! v.push(3).unwrap();
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! ```
//!
//! See [`DynamicArray`] for detailed behavior.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod index;
mod iter;
mod reservation;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use reservation::{reserve, CapacityReservation};
pub use vec::DynamicArray;
