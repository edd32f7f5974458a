#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::slice;

use alloc::vec::Vec;

use thiserror::Error;

/// Error returned by [`AssocArray::set`] when handed an absent (`None`) key.
///
/// Keys must always be present for insertion; there is nothing the structure
/// can do to recover, so the caller gets the failure back directly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("associative array keys must be present")]
pub struct NullKeyError;

/// Error returned by the strict lookups ([`AssocArray::get`],
/// [`AssocArray::get_mut`], [`AssocArray::find`]) when the key is absent
/// (`None`) or has no live entry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key not found in associative array")]
pub struct KeyNotFoundError;

/// A key/value entry in an `AssocArray`.
///
/// Owned exclusively by the array that created it.
#[derive(Debug, Clone)]
struct KvPair<K, V> {
    key: K,
    value: V,
}

/// An associative array backed by a flat vector of key/value pairs.
///
/// Entries live contiguously in insertion order and every operation is a
/// linear scan; keys are compared with `PartialEq` only. The backing store
/// starts at [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots and doubles
/// whenever an insertion finds it full.
///
/// The absent key is spelled `None`. `set`/`get`/`find` are strict and fail
/// on it; `has_key`/`remove` fold it into an ordinary miss and never fail.
pub struct AssocArray<K, V> {
    pairs: Vec<KvPair<K, V>>,
}

impl<K, V> AssocArray<K, V> {
    /// The backing capacity of a freshly constructed array.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty `AssocArray` with the default backing capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let arr: AssocArray<u32, &str> = AssocArray::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), AssocArray::<u32, &str>::DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            pairs: Vec::with_capacity(Self::DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty `AssocArray` able to hold at least `n` entries
    /// before growing.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(n),
        }
    }

    /// Returns the number of live entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the array holds no live entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the capacity of the backing store.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Returns an iterator over the live entries in insertion order.
    ///
    /// The iterator implements `ExactSizeIterator`, `DoubleEndedIterator`
    /// and `FusedIterator`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// Doubles the capacity of the backing store.
    ///
    /// All live entries keep their indices; only the allocation moves.
    fn expand(&mut self) {
        let additional = match self.pairs.capacity() {
            0 => Self::DEFAULT_CAPACITY,
            cap => cap,
        };
        self.pairs.reserve_exact(additional);
    }
}

impl<K: PartialEq, V> AssocArray<K, V> {
    /// Sets the value associated with `key`. Future calls to `get(key)`
    /// return `value`.
    ///
    /// If an entry with an equal key already exists, its value is
    /// overwritten in place and the entry keeps its position. Otherwise the
    /// pair is appended, growing the backing store first when it is full.
    ///
    /// Fails with [`NullKeyError`] when `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut arr = AssocArray::new();
    /// arr.set(Some(1), "a").unwrap();
    /// arr.set(Some(1), "b").unwrap(); // overwrite, not duplicate
    /// assert_eq!(arr.len(), 1);
    /// assert_eq!(arr.get(Some(&1)), Ok(&"b"));
    ///
    /// assert!(arr.set(None, "c").is_err());
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn set(&mut self, key: Option<K>, value: V) -> Result<(), NullKeyError> {
        let key = key.ok_or(NullKeyError)?;
        self.insert_pair(key, value);
        Ok(())
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// Fails with [`KeyNotFoundError`] when `key` is `None` or no live entry
    /// has an equal key.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get(&self, key: Option<&K>) -> Result<&V, KeyNotFoundError> {
        let i = self.find(key)?;
        Ok(&self.pairs[i].value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// Same contract as [`get`](Self::get).
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut(&mut self, key: Option<&K>) -> Result<&mut V, KeyNotFoundError> {
        let i = self.find(key)?;
        Ok(&mut self.pairs[i].value)
    }

    /// Determines whether `key` appears in the array.
    ///
    /// Returns `false` for the absent (`None`) key; never fails.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn has_key(&self, key: Option<&K>) -> bool {
        match key {
            Some(key) => self.pairs.iter().any(|pair| pair.key == *key),
            None => false,
        }
    }

    /// Removes the entry associated with `key`, returning its value.
    ///
    /// Every subsequent entry shifts one slot earlier, so the relative order
    /// of the survivors is preserved. A `None` or missing key is a no-op
    /// returning `None`; removal never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_array::AssocArray;
    ///
    /// let mut arr = AssocArray::new();
    /// arr.set(Some(1), "a").unwrap();
    /// assert_eq!(arr.remove(Some(&1)), Some("a"));
    /// assert_eq!(arr.remove(Some(&1)), None);
    /// assert_eq!(arr.remove(None), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove(&mut self, key: Option<&K>) -> Option<V> {
        let key = key?;
        let i = self.pairs.iter().position(|pair| pair.key == *key)?;
        Some(self.pairs.remove(i).value)
    }

    /// Returns the index of the live entry whose key equals `key`.
    ///
    /// Keys are unique, so the index is unambiguous. Fails with
    /// [`KeyNotFoundError`] when `key` is `None` or not present.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn find(&self, key: Option<&K>) -> Result<usize, KeyNotFoundError> {
        let key = key.ok_or(KeyNotFoundError)?;
        self.pairs
            .iter()
            .position(|pair| pair.key == *key)
            .ok_or(KeyNotFoundError)
    }

    /// Overwrite-or-append for a key that is known to be present. Shared by
    /// `set`, `FromIterator` and `Extend`.
    #[cfg_attr(feature = "inline-more", inline)]
    fn insert_pair(&mut self, key: K, value: V) {
        if let Some(pair) = self.pairs.iter_mut().find(|pair| pair.key == key) {
            pair.value = value;
            return;
        }

        // append to the end, growing first if full
        if self.pairs.len() == self.pairs.capacity() {
            self.expand();
        }
        self.pairs.push(KvPair { key, value });
    }
}

/// Borrowing iterator over live entries in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, KvPair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|pair| (&pair.key, &pair.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|pair| (&pair.key, &pair.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssocArray<K, V> {
    #[cfg_attr(feature = "inline-more", inline)]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut arr = AssocArray::new();
        iter.into_iter().for_each(|(k, v)| arr.insert_pair(k, v));
        arr
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssocArray<K, V> {
    #[cfg_attr(feature = "inline-more", inline)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        iter.into_iter().for_each(|(k, v)| self.insert_pair(k, v));
    }
}

impl<K, V> Default for AssocArray<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AssocArray<K, V> {
    /// Deep-copies every live pair into a fresh array.
    ///
    /// The clone is rebuilt from the default initial capacity rather than
    /// inheriting the original's grown capacity; callers cannot observe the
    /// difference through the operation set.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for pair in &self.pairs {
            if copy.pairs.len() == copy.pairs.capacity() {
                copy.expand();
            }
            copy.pairs.push(pair.clone());
        }
        copy
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssocArray<K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AssocArray<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocArray<K, V> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssocArray<K, V> {
    /// Renders as `{ k1: v1, k2: v2 }` in insertion order (`{  }` when
    /// empty). Display only, not meant for parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", pair.key, pair.value)?;
        }
        f.write_str(" }")
    }
}
