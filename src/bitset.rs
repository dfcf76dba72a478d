//! `SparseBitSet` struct and point operations.

use core::mem;

use crate::{
    codec::{self, encode},
    macros::debug_event,
    storage::{HashWordStore, IterableWordStore, WordStore},
    traits::InvalidStoreError,
};

/// A set of `i64` keys stored as sparse 64-bit words.
///
/// # Overview
///
/// Keys are grouped into 64-key words (see [`codec`]) and only non-empty
/// words are stored. The words live in a pluggable store `S`:
///
/// - [`HashWordStore`] (the default): an in-memory hash map
/// - [`SharedWordStore`](crate::SharedWordStore): a single-threaded handle
///   that several owners can alias
/// - [`SyncWordStore`](crate::SyncWordStore) (`std` only): a thread-safe
///   handle
/// - any user type implementing [`WordStore`]
///
/// Point operations (`test`, `set`, `clear`, `flip`) only need [`WordStore`].
/// Counting, cloning, set algebra and iteration need [`IterableWordStore`].
///
/// # Invariant
///
/// The store never holds a zero word. A word is deleted as soon as its last
/// bit is cleared, so an empty store is exactly an empty set and
/// [`word_count`](Self::word_count) counts non-empty words.
///
/// # Examples
///
/// ```
/// use sparse_bitset::SparseBitSet;
///
/// let mut set = SparseBitSet::new();
/// set.set(-1);
/// set.set(0);
/// set.set(1_000_000);
///
/// assert!(set.test(-1));
/// assert!(!set.test(2));
/// assert_eq!(set.count(), 3);
/// assert_eq!(set.word_count(), 3);
///
/// set.clear(1_000_000);
/// assert_eq!(set.word_count(), 2);
/// ```
pub struct SparseBitSet<S = HashWordStore> {
    pub(crate) store: S,
}

impl SparseBitSet {
    /// Creates an empty set backed by a [`HashWordStore`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: HashWordStore::new(),
        }
    }
}

impl<S: WordStore> SparseBitSet<S> {
    /// Creates a set over a caller-supplied store.
    ///
    /// The store is taken as-is. A store holding zero words breaks the
    /// emptiness and word-count guarantees; use
    /// [`try_with_store`](Self::try_with_store) to check one first.
    #[must_use]
    pub const fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the backing store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.store
    }

    /// Returns a mutable reference to the backing store.
    ///
    /// Writing a zero word through this reference breaks the set's invariant.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the set, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Points the set at a different store, returning the previous one.
    ///
    /// With a shared-handle store the caller keeps aliasing whatever it
    /// passed in: later writes through either handle are visible to both.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::{SharedWordStore, SparseBitSet};
    ///
    /// let mut set: SparseBitSet<SharedWordStore> =
    ///     SparseBitSet::with_store(SharedWordStore::default());
    /// set.set(1);
    ///
    /// let shared: SharedWordStore = SharedWordStore::default();
    /// let old = set.replace_store(shared.clone());
    /// assert!(!set.test(1));
    ///
    /// let mut other = SparseBitSet::with_store(shared);
    /// other.set(5);
    /// assert!(set.test(5));
    /// # drop(old);
    /// ```
    pub fn replace_store(&mut self, store: S) -> S {
        mem::replace(&mut self.store, store)
    }

    /// Returns `true` if `key` is in the set.
    #[must_use]
    #[inline]
    pub fn test(&self, key: i64) -> bool {
        let (index, bit) = encode(key);
        self.store
            .get(index)
            .is_some_and(|word| word & codec::mask(bit) != 0)
    }

    /// Adds `key` to the set.
    ///
    /// Returns the word index and the word's new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut set = SparseBitSet::new();
    /// assert_eq!(set.set(65), (1, 0b10));
    /// assert_eq!(set.set(64), (1, 0b11));
    /// assert_eq!(set.set(-1), (-1, 0b10));
    /// ```
    pub fn set(&mut self, key: i64) -> (i64, u64) {
        let (index, bit) = encode(key);
        let word = self.store.get(index).unwrap_or(0) | codec::mask(bit);
        self.store.set(index, word);
        (index, word)
    }

    /// Removes `key` from the set.
    ///
    /// Returns the word index and the word's new value. If the word was
    /// absent nothing is written and the value is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut set = SparseBitSet::new();
    /// set.set(3);
    /// set.set(4);
    /// assert_eq!(set.clear(3), (0, 0b10000));
    /// assert_eq!(set.clear(4), (0, 0));
    /// assert_eq!(set.clear(200), (3, 0));
    /// assert!(set.none());
    /// ```
    pub fn clear(&mut self, key: i64) -> (i64, u64) {
        let (index, bit) = encode(key);
        let Some(word) = self.store.get(index) else {
            return (index, 0);
        };
        let word = word & !codec::mask(bit);
        self.put_word(index, word);
        (index, word)
    }

    /// Toggles `key`.
    ///
    /// Returns the word index and the word's new value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut set = SparseBitSet::new();
    /// assert_eq!(set.flip(-64), (-2, 1));
    /// assert_eq!(set.flip(-64), (-2, 0));
    /// assert!(set.is_empty());
    /// ```
    pub fn flip(&mut self, key: i64) -> (i64, u64) {
        let (index, bit) = encode(key);
        let word = self.store.get(index).unwrap_or(0) ^ codec::mask(bit);
        self.put_word(index, word);
        (index, word)
    }

    /// Sets or clears `key`, returning whether it was previously a member.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::SparseBitSet;
    ///
    /// let mut set = SparseBitSet::new();
    /// assert_eq!(set.replace(10, true), false);
    /// assert_eq!(set.replace(10, false), true);
    /// assert_eq!(set.replace(10, false), false);
    /// ```
    pub fn replace(&mut self, key: i64, value: bool) -> bool {
        let (index, bit) = encode(key);
        let mask = codec::mask(bit);
        let prev = self.store.get(index).unwrap_or(0);
        let word = if value { prev | mask } else { prev & !mask };
        if word != prev {
            self.put_word(index, word);
        }
        prev & mask != 0
    }

    /// Adds `key`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, key: i64) -> bool {
        !self.replace(key, true)
    }

    /// Removes `key`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, key: i64) -> bool {
        self.replace(key, false)
    }

    /// Returns the number of stored (non-empty) words.
    ///
    /// This is a storage diagnostic, not the number of keys; see
    /// [`count`](Self::count).
    #[must_use]
    #[inline]
    pub fn word_count(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the set has no keys.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` if the set has at least one key.
    #[must_use]
    #[inline]
    pub fn any(&self) -> bool {
        !self.none()
    }

    /// Returns `true` if the set has no keys.
    ///
    /// This is equivalent to [`is_empty`](Self::is_empty).
    #[must_use]
    #[inline]
    pub fn none(&self) -> bool {
        self.store.is_empty()
    }

    /// Writes `word` at `index`, deleting the entry instead when it is zero.
    #[inline]
    pub(crate) fn put_word(&mut self, index: i64, word: u64) {
        if word == 0 {
            self.store.delete(index);
        } else {
            self.store.set(index, word);
        }
    }

    pub(crate) fn apply_words(&mut self, updates: impl IntoIterator<Item = (i64, u64)>) {
        for (index, word) in updates {
            self.put_word(index, word);
        }
    }
}

impl<S: IterableWordStore> SparseBitSet<S> {
    /// Creates a set over a caller-supplied store after checking it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStoreError::ZeroWord`] if the store holds an
    /// all-zero word and [`InvalidStoreError::UnreachableBit`] if a word has
    /// a bit set that no key encodes to.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bitset::{HashWordStore, InvalidStoreError, SparseBitSet, WordStore};
    ///
    /// let mut store = HashWordStore::new();
    /// store.set(-1, 0b1);
    /// assert_eq!(
    ///     SparseBitSet::try_with_store(store).err(),
    ///     Some(InvalidStoreError::UnreachableBit { index: -1, bit: 0 }),
    /// );
    /// ```
    pub fn try_with_store(store: S) -> Result<Self, InvalidStoreError> {
        let mut error = None;
        store.for_each(|index, word| {
            if word == 0 {
                error = Some(InvalidStoreError::ZeroWord { index });
                return false;
            }
            let stray = word & !codec::valid_bits(index);
            if stray != 0 {
                let bit = stray.trailing_zeros();
                error = Some(InvalidStoreError::UnreachableBit { index, bit });
                return false;
            }
            true
        });

        match error {
            Some(err) => {
                debug_event!(error = %err, "rejected word store");
                Err(err)
            }
            None => Ok(Self::with_store(store)),
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// Runs in O(words).
    #[must_use]
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.store.for_each(|_, word| {
            count += word.count_ones() as usize;
            true
        });
        count
    }

    /// Removes every key from the set.
    ///
    /// Entries are deleted one by one rather than swapping the store, so
    /// other handles to a shared store see the set become empty.
    pub fn clear_all(&mut self) {
        for (index, _) in self.store.snapshot() {
            self.store.delete(index);
        }
    }
}
