//! Implementations of set operations for `SparseBitSet`.
//!
//! Every operation works word by word and never decodes individual keys, so
//! it runs in O(words). Each comes in two forms: a copy form taking `&self`
//! that returns a new set in a fresh store of the receiver's kind, and an
//! in-place `_with` form that rewrites the receiver's own store.
//!
//! The argument may use a different store type from the receiver.

use alloc::vec::Vec;

use crate::{
    SparseBitSet,
    macros::op_span,
    storage::{IterableWordStore, WordStore},
};

impl<S: IterableWordStore> SparseBitSet<S> {
    /// Creates a new set holding the keys present in both sets.
    ///
    /// Time complexity: O(n) where n is the number of words in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [-64, 0, 1].into_iter().collect();
    /// let b: SparseBitSet = [-64, 1, 2].into_iter().collect();
    ///
    /// let both = a.intersection(&b);
    /// assert!(both.test(-64));
    /// assert!(both.test(1));
    /// assert_eq!(both.count(), 2);
    /// ```
    #[must_use]
    pub fn intersection<T: WordStore>(&self, other: &SparseBitSet<T>) -> Self {
        let _span = op_span!(
            "intersection",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut result = self.store.create_empty();
        self.store.for_each(|index, word| {
            if let Some(rhs) = other.store.get(index) {
                let word = word & rhs;
                if word != 0 {
                    result.set(index, word);
                }
            }
            true
        });
        Self::with_store(result)
    }

    /// Keeps only the keys also present in `other`.
    ///
    /// Words of `self` with no counterpart in `other`, or whose intersection
    /// is empty, are deleted. Words only in `other` are never added.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut a: SparseBitSet = [10, 20, 500].into_iter().collect();
    /// let b: SparseBitSet = [10, 30].into_iter().collect();
    ///
    /// a.intersection_with(&b);
    /// assert!(a.test(10));
    /// assert!(!a.test(20));
    /// assert_eq!(a.word_count(), 1);
    /// ```
    pub fn intersection_with<T: WordStore>(&mut self, other: &SparseBitSet<T>) -> &mut Self {
        let _span = op_span!(
            "intersection_with",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut updates = Vec::new();
        self.store.for_each(|index, word| {
            let kept = other.store.get(index).map_or(0, |rhs| word & rhs);
            if kept != word {
                updates.push((index, kept));
            }
            true
        });
        self.apply_words(updates);
        self
    }

    /// Creates a new set holding the keys of `self` that are not in `other`.
    ///
    /// Time complexity: O(n) where n is the number of words in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [-1, 0, 1, 2].into_iter().collect();
    /// let b: SparseBitSet = [0, 2, 3].into_iter().collect();
    ///
    /// let rest = a.remove_intersection(&b);
    /// let mut keys: Vec<_> = rest.iter().collect();
    /// keys.sort_unstable();
    /// assert_eq!(keys, [-1, 1]);
    /// ```
    #[doc(alias = "difference")]
    #[must_use]
    pub fn remove_intersection<T: WordStore>(&self, other: &SparseBitSet<T>) -> Self {
        let _span = op_span!(
            "remove_intersection",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut result = self.store.create_empty();
        self.store.for_each(|index, word| {
            let word = match other.store.get(index) {
                Some(rhs) => word & !rhs,
                None => word,
            };
            if word != 0 {
                result.set(index, word);
            }
            true
        });
        Self::with_store(result)
    }

    /// Removes every key that is also present in `other`.
    ///
    /// Words that end up empty are deleted.
    #[doc(alias = "difference_with")]
    pub fn remove_intersection_with<T: WordStore>(
        &mut self,
        other: &SparseBitSet<T>,
    ) -> &mut Self {
        let _span = op_span!(
            "remove_intersection_with",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut updates = Vec::new();
        self.store.for_each(|index, word| {
            if let Some(rhs) = other.store.get(index)
                && word & rhs != 0
            {
                updates.push((index, word & !rhs));
            }
            true
        });
        self.apply_words(updates);
        self
    }

    /// Creates a new set holding the keys present in either set.
    ///
    /// Time complexity: O(n + m) where n and m are the word counts of the
    /// two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [-127, 1].into_iter().collect();
    /// let b: SparseBitSet = [1, 65].into_iter().collect();
    ///
    /// let either = a.union(&b);
    /// assert_eq!(either.count(), 3);
    /// assert!(either.test(-127) && either.test(1) && either.test(65));
    /// ```
    #[must_use]
    pub fn union<T: IterableWordStore>(&self, other: &SparseBitSet<T>) -> Self {
        let _span = op_span!(
            "union",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut result = self.store.create_empty();
        self.store.for_each(|index, word| {
            result.set(index, word | other.store.get(index).unwrap_or(0));
            true
        });
        other.store.for_each(|index, word| {
            if word != 0 && self.store.get(index).is_none() {
                result.set(index, word);
            }
            true
        });
        Self::with_store(result)
    }

    /// Adds every key of `other` to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut a: SparseBitSet = [1].into_iter().collect();
    /// let b: SparseBitSet = [-1, 1, 1000].into_iter().collect();
    ///
    /// a.union_with(&b);
    /// assert_eq!(a.count(), 3);
    /// ```
    pub fn union_with<T: IterableWordStore>(&mut self, other: &SparseBitSet<T>) -> &mut Self {
        let _span = op_span!(
            "union_with",
            lhs_words = self.store.len(),
            rhs_words = other.store.len()
        );
        let mut updates = Vec::new();
        other.store.for_each(|index, word| {
            let current = self.store.get(index).unwrap_or(0);
            let merged = current | word;
            if merged != current {
                updates.push((index, merged));
            }
            true
        });
        self.apply_words(updates);
        self
    }

    /// Returns `true` if every key of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let a: SparseBitSet = [-3, 70].into_iter().collect();
    /// let b: SparseBitSet = [-3, 5, 70].into_iter().collect();
    /// assert!(a.is_subset(&b));
    /// assert!(!b.is_subset(&a));
    /// ```
    #[must_use]
    pub fn is_subset<T: WordStore>(&self, other: &SparseBitSet<T>) -> bool {
        let mut subset = true;
        self.store.for_each(|index, word| {
            subset = other.store.get(index).is_some_and(|rhs| word & !rhs == 0);
            subset
        });
        subset
    }

    /// Returns `true` if the two sets share no keys.
    #[must_use]
    pub fn is_disjoint<T: WordStore>(&self, other: &SparseBitSet<T>) -> bool {
        let mut disjoint = true;
        self.store.for_each(|index, word| {
            disjoint = other.store.get(index).is_none_or(|rhs| word & rhs == 0);
            disjoint
        });
        disjoint
    }
}
