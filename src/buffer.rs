// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owned-buffer primitive behind [`DynamicArray`](crate::DynamicArray).
//!
//! `OwnedBuffer<T>` is an exclusive-ownership wrapper around a fixed-size,
//! contiguous block of `T`. It is allocated once with every slot holding a
//! valid `T::default()` and never grows; the container replaces it wholesale
//! when it needs more room.

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{
    alloc::{handle_alloc_error, Layout},
    boxed::Box,
    vec::Vec,
};

/// A fixed-size block of `T` slots, owned by exactly one container.
pub(crate) struct OwnedBuffer<T> {
    slots: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// An empty buffer. Never allocates.
    #[inline]
    pub(crate) fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of slots (the container's capacity).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// All slots, live or not.
    #[inline]
    pub(crate) fn get(&self) -> &[T] {
        &self.slots
    }

    /// All slots, live or not, mutably.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchanges ownership with `other` without touching any element.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    #[inline]
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocates exactly `n` slots, each initialized with `T::default()`.
    ///
    /// Returns [`Error::AllocFailed`] if the allocator refuses the request or
    /// `n` elements of `T` do not fit in an allocation. `n == 0` never
    /// allocates.
    pub(crate) fn allocate(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Ok(Self::empty());
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(n).map_err(|_| Error::AllocFailed)?;
        slots.resize_with(n, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

/// Reports a failed allocation of `capacity` slots from an infallible path
/// (`Clone`, `Extend`, `FromIterator`), the same way `alloc` collections do.
#[cold]
pub(crate) fn alloc_failure<T>(capacity: usize) -> ! {
    match Layout::array::<T>(capacity) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow"),
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::OwnedBuffer;
    use crate::Error;

    #[test]
    fn test_allocate_default_fills_every_slot() {
        let buf: OwnedBuffer<i32> = OwnedBuffer::allocate(4).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.get(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_allocate_zero_is_empty() {
        let buf: OwnedBuffer<u8> = OwnedBuffer::allocate(0).unwrap();
        assert_eq!(buf.len(), 0);
        assert!(buf.get().is_empty());
    }

    #[test]
    fn test_allocate_too_large_fails() {
        let res = OwnedBuffer::<u64>::allocate(usize::MAX);
        assert_eq!(res.err(), Some(Error::AllocFailed));
    }

    #[test]
    fn test_swap_exchanges_ownership() {
        let mut a: OwnedBuffer<u8> = OwnedBuffer::allocate(2).unwrap();
        a.get_mut()[0] = 7;
        let mut b: OwnedBuffer<u8> = OwnedBuffer::empty();
        let before = a.get().as_ptr();

        a.swap(&mut b);

        assert_eq!(a.len(), 0);
        assert_eq!(b.len(), 2);
        assert_eq!(b.get()[0], 7);
        assert_eq!(b.get().as_ptr(), before);
    }

    #[test]
    fn test_zero_sized_slots() {
        let buf: OwnedBuffer<()> = OwnedBuffer::allocate(8).unwrap();
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.into_vec().len(), 8);
    }
}
