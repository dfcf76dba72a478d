//! Word storage contracts and the bundled stores.
//!
//! A [`SparseBitSet`](crate::SparseBitSet) never touches memory directly. It
//! reads and writes whole words through a store implementing [`WordStore`].
//! Operations that walk every word (counting, cloning, set algebra,
//! iteration) additionally need [`IterableWordStore`]. The split is enforced
//! by trait bounds, so asking a point-only store for an enumeration is a
//! compile error:
//!
//! ```compile_fail
//! use sparse_bitset::{SparseBitSet, WordStore};
//!
//! struct PointOnly;
//!
//! impl WordStore for PointOnly {
//!     fn get(&self, _index: i64) -> Option<u64> { None }
//!     fn set(&mut self, _index: i64, _word: u64) {}
//!     fn delete(&mut self, _index: i64) {}
//!     fn len(&self) -> usize { 0 }
//! }
//!
//! let set = SparseBitSet::with_store(PointOnly);
//! let _ = set.count(); // requires `IterableWordStore`
//! ```

use alloc::{rc::Rc, vec::Vec};
use core::{cell::RefCell, fmt};

use hashbrown::HashMap;

/// Minimal word storage contract: point reads and writes.
///
/// Keys are word indices, values are 64-bit words. Stores impose no ordering
/// on their entries. A store used by a [`SparseBitSet`](crate::SparseBitSet)
/// never sees a zero word written through the set; entries are deleted
/// instead.
pub trait WordStore {
    /// Returns the word stored at `index`, if any.
    fn get(&self, index: i64) -> Option<u64>;

    /// Inserts or overwrites the word at `index`.
    fn set(&mut self, index: i64, word: u64);

    /// Removes the word at `index`. Does nothing if it is absent.
    fn delete(&mut self, index: i64);

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extended word storage contract: enumeration and copying.
pub trait IterableWordStore: WordStore + Sized {
    /// Creates a new, empty store of the same kind.
    #[must_use]
    fn create_empty(&self) -> Self;

    /// Creates an independent copy holding the same entries.
    ///
    /// For shared-handle stores this copies the contents into a fresh store;
    /// it never returns another handle to the same one.
    #[must_use]
    fn deep_clone(&self) -> Self;

    /// Visits every entry in unspecified order.
    ///
    /// Enumeration stops as soon as `visit` returns `false`.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(i64, u64) -> bool;

    /// Copies every entry into a vector, in enumeration order.
    fn snapshot(&self) -> Vec<(i64, u64)> {
        let mut words = Vec::with_capacity(self.len());
        self.for_each(|index, word| {
            words.push((index, word));
            true
        });
        words
    }
}

/// The default in-memory store, backed by a hash map.
///
/// Entries are unordered and unsynchronized.
///
/// # Examples
///
/// ```
/// use sparse_bitset::{HashWordStore, WordStore};
///
/// let mut store = HashWordStore::new();
/// store.set(-2, 0b101);
/// assert_eq!(store.get(-2), Some(0b101));
/// assert_eq!(store.get(3), None);
/// store.delete(-2);
/// assert!(store.is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HashWordStore {
    words: HashMap<i64, u64>,
}

impl HashWordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for at least `words` entries.
    #[must_use]
    pub fn with_capacity(words: usize) -> Self {
        Self {
            words: HashMap::with_capacity(words),
        }
    }

    /// Iterates over the stored `(index, word)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.words.iter().map(|(&index, &word)| (index, word))
    }

    /// Consumes the store, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> HashMap<i64, u64> {
        self.words
    }
}

impl WordStore for HashWordStore {
    #[inline]
    fn get(&self, index: i64) -> Option<u64> {
        self.words.get(&index).copied()
    }

    #[inline]
    fn set(&mut self, index: i64, word: u64) {
        self.words.insert(index, word);
    }

    #[inline]
    fn delete(&mut self, index: i64) {
        self.words.remove(&index);
    }

    #[inline]
    fn len(&self) -> usize {
        self.words.len()
    }
}

impl IterableWordStore for HashWordStore {
    fn create_empty(&self) -> Self {
        Self::new()
    }

    fn deep_clone(&self) -> Self {
        self.clone()
    }

    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(i64, u64) -> bool,
    {
        for (&index, &word) in &self.words {
            if !visit(index, word) {
                break;
            }
        }
    }
}

impl From<HashMap<i64, u64>> for HashWordStore {
    /// Wraps an existing map, dropping any zero words.
    fn from(mut words: HashMap<i64, u64>) -> Self {
        words.retain(|_, word| *word != 0);
        Self { words }
    }
}

impl FromIterator<(i64, u64)> for HashWordStore {
    /// Collects `(index, word)` pairs. Later pairs overwrite earlier ones and
    /// zero words are dropped.
    fn from_iter<I: IntoIterator<Item = (i64, u64)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}

impl fmt::Debug for HashWordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.words.iter()).finish()
    }
}

/// A single-threaded shared handle to a store.
///
/// Cloning the handle (via [`Clone`]) aliases the same store: a write through
/// one handle is visible through every other. This is how a caller keeps
/// access to a store it has handed to a [`SparseBitSet`](crate::SparseBitSet).
/// [`IterableWordStore::deep_clone`] is the copying path.
///
/// Mutating the store from inside a [`for_each`](IterableWordStore::for_each)
/// visitor panics, as the enumeration holds a shared borrow.
///
/// # Examples
///
/// ```
/// use sparse_bitset::{SharedWordStore, SparseBitSet, WordStore};
///
/// let store: SharedWordStore = SharedWordStore::default();
/// let mut set = SparseBitSet::with_store(store.clone());
/// set.set(70);
///
/// // The caller's handle sees the set's write.
/// assert_eq!(store.get(1), Some(1 << 6));
/// ```
pub struct SharedWordStore<S = HashWordStore> {
    inner: Rc<RefCell<S>>,
}

impl<S> SharedWordStore<S> {
    /// Wraps `store` in a new shared handle.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Returns `true` if both handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Runs `f` with a shared borrow of the underlying store.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&*self.inner.borrow())
    }
}

impl<S> Clone for SharedWordStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Default> Default for SharedWordStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: WordStore> WordStore for SharedWordStore<S> {
    #[inline]
    fn get(&self, index: i64) -> Option<u64> {
        self.inner.borrow().get(index)
    }

    #[inline]
    fn set(&mut self, index: i64, word: u64) {
        self.inner.borrow_mut().set(index, word);
    }

    #[inline]
    fn delete(&mut self, index: i64) {
        self.inner.borrow_mut().delete(index);
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

impl<S: IterableWordStore> IterableWordStore for SharedWordStore<S> {
    fn create_empty(&self) -> Self {
        Self::new(self.inner.borrow().create_empty())
    }

    fn deep_clone(&self) -> Self {
        Self::new(self.inner.borrow().deep_clone())
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(i64, u64) -> bool,
    {
        self.inner.borrow().for_each(visit);
    }
}

impl<S: fmt::Debug> fmt::Debug for SharedWordStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(store) => fmt::Debug::fmt(&*store, f),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}
