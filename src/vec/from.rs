// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, reservation::CapacityReservation, vec::DynamicArray};

impl<T: Clone + Default> TryFrom<&[T]> for DynamicArray<T> {
    type Error = Error;

    /// Clones `src` into a new array with `capacity() == src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::with_len(src.len())?;
        v.as_mut_slice().clone_from_slice(src);
        Ok(v)
    }
}

impl<T: Default, const M: usize> TryFrom<[T; M]> for DynamicArray<T> {
    type Error = Error;

    /// Moves the elements of `src` into a new array with `capacity() == M`.
    fn try_from(src: [T; M]) -> Result<Self, Self::Error> {
        let mut v = Self::with_capacity(M)?;
        for (slot, item) in v.buf.get_mut().iter_mut().zip(src) {
            *slot = item;
        }
        v.len = M;
        Ok(v)
    }
}

impl<T: Default> TryFrom<CapacityReservation> for DynamicArray<T> {
    type Error = Error;

    fn try_from(reservation: CapacityReservation) -> Result<Self, Self::Error> {
        Self::from_reservation(reservation)
    }
}
