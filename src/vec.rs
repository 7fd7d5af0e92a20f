// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable array over one owned, contiguous heap
//! buffer. It tracks a logical length separately from the buffer's capacity
//! and doubles the capacity whenever an append finds the buffer full.
//! Methods mirror slice/`Vec` semantics where they make sense, with fallible
//! variants wherever an allocation can happen.

mod at;
mod clone;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod resize;
mod slice;

// Crate imports
use crate::{buffer::OwnedBuffer, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// Multiplier applied to a non-zero capacity when an append finds no room.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// A heap-backed, growable array with explicit capacity control.
///
/// `DynamicArray<T>` owns a buffer of `capacity` slots and tracks a logical
/// length `len ∈ 0..=capacity`. Only the prefix `[0..len)` is visible through
/// slices, indexing and iteration.
///
/// # Layout and invariants
///
/// - Every slot of the buffer holds a valid `T`. Slots past `len` are filler:
///   either `T::default()` from the allocation, or whatever a truncating
///   operation ([`pop_back`], [`truncate`], [`clear`], [`erase`]) left there.
///   Their values are unspecified.
/// - `len <= capacity` after every operation.
/// - Capacity only changes through operations that allocate ([`reserve`],
///   [`push`] / [`insert`] on a full array, a growing [`resize`], copy
///   assignment) or that exchange buffers ([`swap`], [`take`]).
///
/// Because every slot is a real `T`, any operation that allocates requires
/// `T: Default`.
///
/// # Growth policy
///
/// Appending to a full array allocates a new buffer of `2 * capacity` slots
/// (or one slot when the capacity is zero), moves the live elements over and
/// releases the old buffer. Pushing into an empty array therefore walks the
/// capacities `0, 1, 2, 4, 8, ...`.
///
/// [`resize`] is the exception: growing past the current length allocates
/// **exactly** `new_len` slots and drops any spare capacity.
///
/// # Failure behavior
///
/// - Allocating operations return [`Error::AllocFailed`] and leave the array
///   exactly as it was. The new buffer is fully built before the old one is
///   replaced.
/// - [`at`], [`at_mut`], [`insert`] and [`erase`] return
///   [`Error::OutOfBounds`] for invalid positions.
/// - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, like slices.
///
/// # Examples
///
/// ```rust
/// use dynamic_array::{DynamicArray, Error};
///
/// let mut v = DynamicArray::new();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// v.push(3).unwrap();
/// assert_eq!((v.len(), v.capacity()), (3, 4));
///
/// v.insert(1, 99).unwrap();
/// assert_eq!(v.as_slice(), &[1, 99, 2, 3]);
///
/// v.erase(2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 99, 3]);
/// assert_eq!(v.at(5), Err(Error::OutOfBounds));
/// ```
///
/// [`pop_back`]: DynamicArray::pop_back
/// [`truncate`]: DynamicArray::truncate
/// [`clear`]: DynamicArray::clear
/// [`erase`]: DynamicArray::erase
/// [`reserve`]: DynamicArray::reserve
/// [`push`]: DynamicArray::push
/// [`insert`]: DynamicArray::insert
/// [`resize`]: DynamicArray::resize
/// [`swap`]: DynamicArray::swap
/// [`take`]: DynamicArray::take
/// [`at`]: DynamicArray::at
/// [`at_mut`]: DynamicArray::at_mut
pub struct DynamicArray<T> {
    pub(crate) buf: OwnedBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of pushes that will not allocate.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the array contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T> DynamicArray<T> {
    /// Sets `len = 0`. Capacity, buffer and slot contents are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Never allocates and never changes the capacity.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Exchanges length, capacity and buffer ownership with `other` in O(1).
    ///
    /// No element is moved or cloned.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// This is a pure ownership transfer and never allocates.
    ///
    /// ```rust
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut a = DynamicArray::try_from(&[1, 2, 3][..]).unwrap();
    /// let b = a.take();
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// assert_eq!(b.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T: Default> DynamicArray<T> {
    /// Capacity to grow to when an append finds the buffer full.
    pub(crate) fn grown_capacity(&self) -> Result<usize, Error> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(GROWTH_FACTOR).ok_or(Error::AllocFailed),
        }
    }

    /// Replaces the buffer with a fresh one of `new_capacity` slots, moving the
    /// live prefix over.
    ///
    /// `new_capacity` must be at least `len`. On failure nothing changes.
    pub(crate) fn relocate(&mut self, new_capacity: usize) -> Result<(), Error> {
        debug_assert!(new_capacity >= self.len);
        let mut fresh = OwnedBuffer::allocate(new_capacity)?;
        let len = self.len;
        fresh.get_mut()[..len].swap_with_slice(&mut self.buf.get_mut()[..len]);
        self.buf.swap(&mut fresh);
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}
impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self {
            buf: OwnedBuffer::empty(),
            len: 0,
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}


#[cfg(test)]
mod proptests {
    // Imports
    use super::DynamicArray;
    use crate::Error;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Insert(usize, i32),
        Erase(usize),
        PopBack,
        Resize(usize),
        Reserve(usize),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<i32>().prop_map(Op::Push),
            2 => (0usize..40, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
            2 => (0usize..40).prop_map(Op::Erase),
            1 => Just(Op::PopBack),
            1 => (0usize..40).prop_map(Op::Resize),
            1 => (0usize..40).prop_map(Op::Reserve),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn pushes_are_readable_in_order(values in proptest::collection::vec(any::<i64>(), 0..64)) {
            let mut v = DynamicArray::new();
            for &x in &values {
                v.push(x).unwrap();
            }
            prop_assert_eq!(v.len(), values.len());
            for (i, x) in values.iter().enumerate() {
                prop_assert_eq!(&v[i], x);
                prop_assert_eq!(v.at(i), Ok(x));
            }
            prop_assert_eq!(v.at(values.len()), Err(Error::OutOfBounds));
        }

        #[test]
        fn push_capacity_is_power_of_two(n in 1usize..200) {
            let mut v = DynamicArray::new();
            let mut last_cap = 0;
            for i in 0..n {
                v.push(i).unwrap();
                prop_assert!(v.capacity().is_power_of_two());
                prop_assert!(v.capacity() >= v.len());
                prop_assert!(v.capacity() >= last_cap);
                last_cap = v.capacity();
            }
        }

        #[test]
        fn insert_at_end_matches_push(values in proptest::collection::vec(any::<u8>(), 0..32), x in any::<u8>()) {
            let mut a = DynamicArray::try_from(&values[..]).unwrap();
            let mut b = a.clone();
            let end = a.len();
            prop_assert_eq!(a.insert(end, x), Ok(end));
            b.push(x).unwrap();
            prop_assert_eq!(a.len(), b.len());
            prop_assert_eq!(a.last(), b.last());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn erase_then_insert_restores(values in proptest::collection::vec(any::<i32>(), 1..32), pick in any::<prop::sample::Index>()) {
            let mut v = DynamicArray::try_from(&values[..]).unwrap();
            let i = pick.index(values.len());
            let removed = v[i];
            prop_assert_eq!(v.erase(i), Ok(i));
            prop_assert_eq!(v.insert(i, removed), Ok(i));
            prop_assert_eq!(v.as_slice(), &values[..]);
        }

        #[test]
        fn clone_is_deep_and_keeps_capacity(values in proptest::collection::vec(any::<i32>(), 0..32), extra in 0usize..16) {
            let mut a = DynamicArray::try_from(&values[..]).unwrap();
            a.reserve(values.len() + extra).unwrap();
            let mut b = a.clone();
            prop_assert_eq!(b.capacity(), a.capacity());
            prop_assert_eq!(&b, &a);
            b.push(1).unwrap();
            if let Some(x) = b.get_mut(0) {
                *x = x.wrapping_add(1);
            }
            prop_assert_eq!(a.as_slice(), &values[..]);
        }

        #[test]
        fn different_lengths_never_equal(a in proptest::collection::vec(any::<u8>(), 0..16), b in proptest::collection::vec(any::<u8>(), 0..16)) {
            prop_assume!(a.len() != b.len());
            let x = DynamicArray::try_from(&a[..]).unwrap();
            let y = DynamicArray::try_from(&b[..]).unwrap();
            prop_assert_ne!(x, y);
        }

        #[test]
        fn operations_match_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut v: DynamicArray<i32> = DynamicArray::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                let cap_before = v.capacity();
                match op {
                    Op::Push(x) => {
                        v.push(x).unwrap();
                        model.push(x);
                    }
                    Op::Insert(i, x) => {
                        if i <= model.len() {
                            prop_assert_eq!(v.insert(i, x), Ok(i));
                            model.insert(i, x);
                        } else {
                            prop_assert_eq!(v.insert(i, x), Err(Error::OutOfBounds));
                        }
                    }
                    Op::Erase(i) => {
                        if i < model.len() {
                            prop_assert_eq!(v.erase(i), Ok(i));
                            model.remove(i);
                        } else {
                            prop_assert_eq!(v.erase(i), Err(Error::OutOfBounds));
                        }
                    }
                    Op::PopBack => {
                        v.pop_back();
                        model.pop();
                        prop_assert_eq!(v.capacity(), cap_before);
                    }
                    Op::Resize(n) => {
                        let grows = n > model.len();
                        v.resize(n).unwrap();
                        model.resize(n, 0);
                        if grows {
                            prop_assert_eq!(v.capacity(), n);
                        } else {
                            prop_assert_eq!(v.capacity(), cap_before);
                        }
                    }
                    Op::Reserve(n) => {
                        v.reserve(n).unwrap();
                        prop_assert_eq!(v.capacity(), cap_before.max(n));
                    }
                    Op::Clear => {
                        v.clear();
                        model.clear();
                        prop_assert_eq!(v.capacity(), cap_before);
                    }
                }
                prop_assert!(v.len() <= v.capacity());
                prop_assert_eq!(v.as_slice(), &model[..]);
            }
        }
    }
}
