// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::OwnedBuffer, error::Error, reservation::CapacityReservation, vec::DynamicArray,
};

impl<T> DynamicArray<T> {
    /// Constructs an empty array. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default> DynamicArray<T> {
    /// Constructs an array of `len` elements, each `T::default()`.
    ///
    /// Allocates exactly `len` slots, so `capacity() == len`. No allocation
    /// happens when `len == 0`.
    pub fn with_len(len: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: OwnedBuffer::allocate(len)?,
            len,
        })
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: OwnedBuffer::allocate(capacity)?,
            len: 0,
        })
    }

    /// Constructs an empty array from a [`reserve`](crate::reserve) tag.
    ///
    /// Same as [`with_capacity`](Self::with_capacity); the tag keeps a
    /// capacity request from being mistaken for a length.
    #[inline]
    pub fn from_reservation(reservation: CapacityReservation) -> Result<Self, Error> {
        Self::with_capacity(reservation.capacity())
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Constructs an array of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Result<Self, Error> {
        let mut v = Self::with_len(len)?;
        v.as_mut_slice().fill(value);
        Ok(v)
    }
}
