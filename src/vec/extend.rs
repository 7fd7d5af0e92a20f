// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::alloc_failure,
    error::Error,
    vec::{DynamicArray, GROWTH_FACTOR},
};

impl<T: Default> Extend<T> for DynamicArray<T> {
    /// Pushes every item in order, growing by the usual doubling rule.
    ///
    /// Allocation failure is reported like `alloc::vec::Vec` does.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if self.push(item).is_err() {
                alloc_failure::<T>(self.capacity().saturating_mul(2))
            }
        }
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Appends clones of every element of `src`, all or nothing.
    ///
    /// If `src` does not fit, the capacity is doubled (starting from one) as
    /// many times as needed and the buffer is replaced once before anything
    /// is cloned. Returns [`Error::AllocFailed`] and leaves the array
    /// unchanged if that allocation fails.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        let len = self.len;
        let needed = len.checked_add(src.len()).ok_or(Error::AllocFailed)?;
        if needed > self.capacity() {
            let mut cap = self.grown_capacity()?;
            while cap < needed {
                cap = cap.checked_mul(GROWTH_FACTOR).ok_or(Error::AllocFailed)?;
            }
            self.relocate(cap)?;
        }
        self.buf.get_mut()[len..needed].clone_from_slice(src);
        self.len = needed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynamicArray;

    #[test]
    fn test_extend_from_slice_within_capacity() {
        let mut v: DynamicArray<u8> = DynamicArray::with_capacity(5).unwrap();
        assert_eq!(v.extend_from_slice(&[1, 2, 3]), Ok(()));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_extend_from_slice_doubles_until_fit() {
        let mut v = DynamicArray::try_from(&[1, 2][..]).unwrap();
        v.extend_from_slice(&[3, 4, 5, 6, 7]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(v.capacity(), 8);

        let mut e: DynamicArray<u8> = DynamicArray::new();
        e.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(e.capacity(), 4);
    }

    #[test]
    fn test_extend_from_empty_slice_is_noop() {
        let mut v: DynamicArray<u8> = DynamicArray::new();
        v.extend_from_slice(&[]).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_extend_from_slice_large_batch() {
        let mut v: DynamicArray<u64> = DynamicArray::new();
        v.push(1).unwrap();
        let res = v.extend_from_slice(&[2; 16]);
        assert_eq!(res, Ok(()));
        assert_eq!(v.len(), 17);
        assert_eq!(v.capacity(), 32);
    }

    #[test]
    fn test_extend_trait_follows_push_growth() {
        let mut v: DynamicArray<i32> = DynamicArray::new();
        v.extend([1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 4);
        v.extend(core::iter::empty());
        assert_eq!(v.len(), 3);
    }
}
