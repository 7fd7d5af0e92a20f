// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynamicArray};

impl<T> DynamicArray<T> {
    /// Checked access: returns the element at `index`, or
    /// [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// Use indexing (`v[i]`) for the unchecked form, which panics instead.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable variant of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.get_mut(index).ok_or(Error::OutOfBounds)
    }
}
