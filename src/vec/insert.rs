// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::OwnedBuffer, error::Error, vec::DynamicArray};

impl<T: Default> DynamicArray<T> {
    /// Inserts `value` before the element at `index`, shifting the tail right.
    /// Returns the index of the inserted element (always `index`).
    ///
    /// - `index == len` behaves exactly like [`push`](Self::push).
    /// - With spare capacity the tail `[index..len)` moves one slot right in
    ///   place, O(len - index).
    /// - On a full array the capacity grows by the same rule as `push`, and
    ///   the new buffer receives `[0..index)`, then `value`, then the rest.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len` and
    /// [`Error::AllocFailed`] if growing fails. The array is unchanged on error.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Error> {
        let len = self.len;
        if index > len {
            return Err(Error::OutOfBounds);
        }
        if index == len {
            self.push(value)?;
            return Ok(index);
        }

        if len < self.capacity() {
            // Shift right: [index..len) -> [index+1..len+1)
            let slots = self.buf.get_mut();
            slots[len] = value;
            slots[index..=len].rotate_right(1);
        } else {
            let mut fresh = OwnedBuffer::allocate(self.grown_capacity()?)?;
            let (dst, src) = (fresh.get_mut(), self.buf.get_mut());
            dst[..index].swap_with_slice(&mut src[..index]);
            dst[index] = value;
            dst[index + 1..=len].swap_with_slice(&mut src[index..len]);
            self.buf.swap(&mut fresh);
        }

        self.len = len + 1;
        Ok(index)
    }
}
