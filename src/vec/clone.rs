// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::{alloc_failure, OwnedBuffer},
    error::Error,
    vec::DynamicArray,
};

impl<T: Clone + Default> DynamicArray<T> {
    /// Deep-copies the array.
    ///
    /// The copy has the **same capacity** as `self`; its first `len` slots are
    /// clones of the live elements and the rest are `T::default()`.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut buf = OwnedBuffer::allocate(self.capacity())?;
        buf.get_mut()[..self.len].clone_from_slice(self.as_slice());
        Ok(Self { buf, len: self.len })
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built completely before `self` is touched and then adopted
    /// with a single buffer swap, so on error `self` is unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(v) => v,
            Err(_) => alloc_failure::<T>(self.capacity()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.try_clone_from(source).is_err() {
            alloc_failure::<T>(source.capacity())
        }
    }
}
