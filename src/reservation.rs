// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity reservation tag.
//!
//! [`reserve`] wraps an integer so that "allocate this much room but create no
//! elements" is a distinct conversion from "create this many elements":
//!
//! ```rust
//! use dynamic_array::{reserve, DynamicArray};
//!
//! let v: DynamicArray<u32> = DynamicArray::try_from(reserve(16)).unwrap();
//! assert_eq!(v.len(), 0);
//! assert_eq!(v.capacity(), 16);
//! ```

/// A request for `capacity` slots with no live elements.
///
/// Built by [`reserve`] and consumed by
/// [`DynamicArray::from_reservation`](crate::DynamicArray::from_reservation) or
/// `TryFrom<CapacityReservation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct CapacityReservation {
    capacity: usize,
}

impl CapacityReservation {
    /// Returns the requested capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Tags `capacity` as a capacity request.
#[inline]
pub const fn reserve(capacity: usize) -> CapacityReservation {
    CapacityReservation { capacity }
}
