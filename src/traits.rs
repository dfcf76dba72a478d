//! Trait implementations for `SparseBitSet`.

use core::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::{
    SparseBitSet,
    storage::{IterableWordStore, WordStore},
};

/// Errors returned when a caller-supplied store fails validation.
///
/// See [`SparseBitSet::try_with_store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStoreError {
    /// The store holds an all-zero word.
    ZeroWord {
        /// Index of the zero word
        index: i64,
    },

    /// A word has a bit set that no key encodes to.
    UnreachableBit {
        /// Index of the offending word
        index: i64,
        /// Lowest offending bit position
        bit: u32,
    },
}

impl fmt::Display for InvalidStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWord { index } => {
                write!(f, "word store holds an empty word at index {index}")
            }
            Self::UnreachableBit { index, bit } => {
                write!(
                    f,
                    "bit {bit} of word {index} does not correspond to any key"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidStoreError {}

impl<S: WordStore + Default> Default for SparseBitSet<S> {
    fn default() -> Self {
        Self::with_store(S::default())
    }
}

impl<S: IterableWordStore> Clone for SparseBitSet<S> {
    /// Deep-copies the backing store.
    fn clone(&self) -> Self {
        Self::with_store(self.store.deep_clone())
    }
}

impl<S: WordStore> From<S> for SparseBitSet<S> {
    /// Wraps an existing store. Equivalent to [`SparseBitSet::with_store`].
    fn from(store: S) -> Self {
        Self::with_store(store)
    }
}

struct Keys<'a, S>(&'a SparseBitSet<S>);

impl<S: IterableWordStore> fmt::Debug for Keys<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = f.debug_set();
        self.0.for_each_key(|key| {
            w.entry(&key);
            true
        });
        w.finish()
    }
}

impl<S: IterableWordStore + fmt::Debug> fmt::Debug for SparseBitSet<S> {
    /// Shows the raw store contents next to the decoded keys.
    ///
    /// The format is for debugging only and may change.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseBitSet")
            .field("words", &self.store)
            .field("keys", &Keys(self))
            .finish()
    }
}

impl<S: IterableWordStore, T: WordStore> PartialEq<SparseBitSet<T>> for SparseBitSet<S> {
    /// Two sets are equal when they hold the same keys.
    ///
    /// Compares word by word, relying on neither store holding zero words.
    fn eq(&self, other: &SparseBitSet<T>) -> bool {
        if self.store.len() != other.store.len() {
            return false;
        }
        let mut equal = true;
        self.store.for_each(|index, word| {
            equal = other.store.get(index) == Some(word);
            equal
        });
        equal
    }
}

impl<S: IterableWordStore> Eq for SparseBitSet<S> {}

// ============================================================================
// Operator Implementations
// ============================================================================

impl<S: IterableWordStore, T: WordStore> BitAnd<&SparseBitSet<T>> for &SparseBitSet<S> {
    type Output = SparseBitSet<S>;

    /// Returns the intersection of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [0, 1].into_iter().collect();
    /// let b: SparseBitSet = [1, 2].into_iter().collect();
    /// let c = &a & &b;
    /// assert!(c.test(1));
    /// assert_eq!(c.count(), 1);
    /// ```
    fn bitand(self, rhs: &SparseBitSet<T>) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<S: IterableWordStore, T: WordStore> BitAndAssign<&SparseBitSet<T>> for SparseBitSet<S> {
    fn bitand_assign(&mut self, rhs: &SparseBitSet<T>) {
        self.intersection_with(rhs);
    }
}

impl<S: IterableWordStore, T: IterableWordStore> BitOr<&SparseBitSet<T>> for &SparseBitSet<S> {
    type Output = SparseBitSet<S>;

    /// Returns the union of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [0].into_iter().collect();
    /// let b: SparseBitSet = [-1].into_iter().collect();
    /// let c = &a | &b;
    /// assert!(c.test(0) && c.test(-1));
    /// ```
    fn bitor(self, rhs: &SparseBitSet<T>) -> Self::Output {
        self.union(rhs)
    }
}

impl<S: IterableWordStore, T: IterableWordStore> BitOrAssign<&SparseBitSet<T>>
    for SparseBitSet<S>
{
    fn bitor_assign(&mut self, rhs: &SparseBitSet<T>) {
        self.union_with(rhs);
    }
}

impl<S: IterableWordStore, T: WordStore> Sub<&SparseBitSet<T>> for &SparseBitSet<S> {
    type Output = SparseBitSet<S>;

    /// Returns the keys of `self` that are not in `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [0, 1].into_iter().collect();
    /// let b: SparseBitSet = [1].into_iter().collect();
    /// let c = &a - &b;
    /// assert!(c.test(0) && !c.test(1));
    /// ```
    fn sub(self, rhs: &SparseBitSet<T>) -> Self::Output {
        self.remove_intersection(rhs)
    }
}

impl<S: IterableWordStore, T: WordStore> SubAssign<&SparseBitSet<T>> for SparseBitSet<S> {
    fn sub_assign(&mut self, rhs: &SparseBitSet<T>) {
        self.remove_intersection_with(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HashWordStore, SharedWordStore};
    use alloc::format;

    #[test]
    fn test_clone_is_deep() {
        let mut a: SparseBitSet = [1, 2].into_iter().collect();
        let b = a.clone();
        a.set(3);
        assert!(!b.test(3));
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn test_clone_of_shared_store_detaches() {
        let store: SharedWordStore = SharedWordStore::default();
        let mut a = SparseBitSet::with_store(store.clone());
        a.set(1);
        let b = a.clone();
        assert!(!b.storage().ptr_eq(&store));
        a.set(2);
        assert!(!b.test(2));
    }

    #[test]
    fn test_equality_across_store_types() {
        let a: SparseBitSet = [-9, 9].into_iter().collect();
        let mut b: SparseBitSet<SharedWordStore> = SparseBitSet::default();
        b.set(9);
        assert_ne!(a, b);
        b.set(-9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_operators() {
        let a: SparseBitSet = [1, 2, 3].into_iter().collect();
        let b: SparseBitSet = [3, 4].into_iter().collect();

        assert_eq!(&a & &b, [3].into_iter().collect::<SparseBitSet>());
        assert_eq!(&a | &b, (1..=4).collect::<SparseBitSet>());
        assert_eq!(&a - &b, [1, 2].into_iter().collect::<SparseBitSet>());

        let mut c = a.clone();
        c &= &b;
        assert_eq!(c, &a & &b);
        let mut c = a.clone();
        c |= &b;
        assert_eq!(c, &a | &b);
        let mut c = a.clone();
        c -= &b;
        assert_eq!(c, &a - &b);
    }

    #[test]
    fn test_debug_shows_words_and_keys() {
        let set: SparseBitSet = [-1].into_iter().collect();
        assert_eq!(
            format!("{set:?}"),
            "SparseBitSet { words: {-1: 2}, keys: {-1} }"
        );
    }

    #[test]
    fn test_from_store() {
        let store: HashWordStore = [(1, 1)].into_iter().collect();
        let set: SparseBitSet = SparseBitSet::from(store);
        assert!(set.test(64));
    }

    #[test]
    fn test_error_display() {
        let err = InvalidStoreError::UnreachableBit { index: -1, bit: 0 };
        assert_eq!(
            format!("{err}"),
            "bit 0 of word -1 does not correspond to any key"
        );
    }
}
