// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::OwnedBuffer, error::Error, vec::DynamicArray};

impl<T: Default> DynamicArray<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// No-op if the array already has that much room. Otherwise allocates
    /// exactly `new_capacity` slots and moves the live elements over; `len` is
    /// unchanged. On error the array is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(new_capacity)
    }

    /// Resizes to `new_len`.
    ///
    /// - `new_len <= len`: truncates; capacity is unchanged.
    /// - `new_len > len`: allocates a buffer of **exactly** `new_len` slots
    ///   filled with `T::default()` and moves the live elements to its front,
    ///   so `len() == capacity() == new_len` afterwards. Any previously
    ///   reserved spare capacity is dropped.
    ///
    /// Values cut off by a shrinking resize are not remembered: growing again
    /// yields `T::default()` in those positions.
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return Ok(());
        }
        let mut fresh = OwnedBuffer::allocate(new_len)?;
        fresh.get_mut()[..len].swap_with_slice(&mut self.buf.get_mut()[..len]);
        self.buf.swap(&mut fresh);
        self.len = new_len;
        Ok(())
    }
}
