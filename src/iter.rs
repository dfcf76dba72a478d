//! Iterator implementations for `SparseBitSet`.

use alloc::vec::{self, Vec};
use core::iter::FusedIterator;

use crate::{
    SparseBitSet, codec,
    storage::{IterableWordStore, WordStore},
};

/// An iterator over the keys of a [`SparseBitSet`].
///
/// Created by [`SparseBitSet::iter`]. The iterator works on a snapshot of the
/// store's words taken when it was created, and decodes keys lazily from it.
/// Words come out in the store's enumeration order (unspecified); keys within
/// one word come out in ascending bit-position order. Cloning the iterator
/// restarts from the clone's current position.
///
/// # Examples
///
/// ```
/// use sparse_bitset::SparseBitSet;
///
/// let set: SparseBitSet = [5, 10, 15].into_iter().collect();
///
/// // All three keys share word 0, so they come out in bit order.
/// let keys: Vec<_> = set.iter().collect();
/// assert_eq!(keys, vec![5, 10, 15]);
/// ```
#[derive(Clone, Debug)]
pub struct Iter {
    words: vec::IntoIter<(i64, u64)>,
    index: i64,
    word: u64,
    remaining: usize,
}

impl Iter {
    fn new(words: Vec<(i64, u64)>) -> Self {
        let remaining = words.iter().map(|&(_, w)| w.count_ones() as usize).sum();
        Self {
            words: words.into_iter(),
            index: 0,
            word: 0,
            remaining,
        }
    }
}

impl Iterator for Iter {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word == 0 {
            (self.index, self.word) = self.words.next()?;
        }

        let bit = self.word.trailing_zeros();
        self.word &= self.word - 1;
        self.remaining -= 1;
        Some(codec::decode(self.index, bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter {}

impl<S: IterableWordStore> SparseBitSet<S> {
    /// Returns an iterator over the keys of the set.
    ///
    /// No ordering is guaranteed across words.
    pub fn iter(&self) -> Iter {
        Iter::new(self.store.snapshot())
    }

    /// Calls `visit` with every key until it returns `false`.
    ///
    /// Unlike [`iter`](Self::iter) this walks the store directly without
    /// copying it. Returning `false` stops both the scan of the current word
    /// and the walk over the remaining words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let set: SparseBitSet = (0..100).collect();
    /// let mut seen = 0;
    /// set.for_each_key(|_| {
    ///     seen += 1;
    ///     seen < 10
    /// });
    /// assert_eq!(seen, 10);
    /// ```
    pub fn for_each_key<F>(&self, mut visit: F)
    where
        F: FnMut(i64) -> bool,
    {
        self.store.for_each(|index, mut word| {
            while word != 0 {
                let bit = word.trailing_zeros();
                if !visit(codec::decode(index, bit)) {
                    return false;
                }
                word &= word - 1;
            }
            true
        });
    }
}

impl<S: IterableWordStore> IntoIterator for &SparseBitSet<S> {
    type IntoIter = Iter;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: IterableWordStore> IntoIterator for SparseBitSet<S> {
    type IntoIter = Iter;
    type Item = i64;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: WordStore + Default> FromIterator<i64> for SparseBitSet<S> {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::with_store(S::default());
        set.extend(iter);
        set
    }
}

impl<S: WordStore> Extend<i64> for SparseBitSet<S> {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.set(key);
        }
    }
}
