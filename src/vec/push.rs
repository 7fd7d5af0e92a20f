// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T: Default> DynamicArray<T> {
    /// Appends `value` at index `len`.
    ///
    /// If the buffer is full, first grows it to `2 * capacity` slots (one slot
    /// when empty) and moves the live elements over. Amortized O(1).
    ///
    /// Returns [`Error::AllocFailed`] if growing fails; the array is then
    /// unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            self.relocate(self.grown_capacity()?)?;
        }
        self.buf.get_mut()[self.len] = value;
        self.len += 1;
        Ok(())
    }
}
