// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Removes the last element if any; silently does nothing when empty.
    ///
    /// Capacity is unchanged and the vacated slot keeps its value.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Removes the element at `index`, shifting `[index+1..len)` one slot left.
    ///
    /// Returns the index of the element that now occupies `index`. When the
    /// last element was erased that is the new `len`, i.e. the end position.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`. Never allocates.
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::OutOfBounds);
        }
        if index + 1 < len {
            // Shift left: [index+1..len) -> [index..len-1)
            self.buf.get_mut()[index..len].rotate_left(1);
        }
        self.len = len - 1;
        Ok(index)
    }
}

impl<T: Default> DynamicArray<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot is left holding `T::default()`.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(core::mem::take(&mut self.buf.get_mut()[self.len]))
        }
    }
}
