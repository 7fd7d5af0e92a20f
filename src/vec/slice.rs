// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynamicArray;

impl<T> DynamicArray<T> {
    /// Returns the live prefix as a shared slice (`&buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.get()[..self.len]
    }

    /// Returns the live prefix as a mutable slice (`&mut buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.get_mut()[..len]
    }
}
