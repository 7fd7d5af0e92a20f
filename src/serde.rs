// This file is part of dynamic-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynamicArray`](crate::DynamicArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//!   Capacity is not part of the serialized form.
//! - **Deserialize**: from any sequence, pushing each element in order.
//!
//! ### Trait bounds
//!
//! Deserializing allocates, so it needs `T: Deserialize<'de> + Default` like
//! every other allocating operation. The sequence's size hint, when present,
//! is used to reserve up front (capped, so a hostile hint cannot force a huge
//! allocation). Allocation failure surfaces as a custom deserializer error.

// Crate imports
use crate::vec::DynamicArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on how many slots a size hint may reserve before any element
/// has been read.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = DynamicArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = DynamicArray::<T>::new();
        if let Some(hint) = a.size_hint() {
            out.reserve(hint.min(MAX_PREALLOC))
                .map_err(<A::Error as de::Error>::custom)?;
        }
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for DynamicArray<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
