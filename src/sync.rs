//! A thread-safe shared word store.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::storage::{IterableWordStore, WordStore};

/// A word store that can be shared across threads.
///
/// Each `get`, `set` and `delete` is atomic. Cloning the handle aliases the
/// same store, so several [`SparseBitSet`](crate::SparseBitSet)s on different
/// threads can work on one set of words. A bitset's `set`, `clear` and `flip`
/// are still separate read and write calls: two threads updating keys in the
/// same word at the same time can lose one of the updates. Serialize such
/// writers externally.
///
/// Enumeration works on a snapshot taken under the read lock, so visitors may
/// write to the store without deadlocking.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use sparse_bitset::{SparseBitSet, SyncWordStore};
///
/// let store = SyncWordStore::new();
/// let handles: Vec<_> = (0..4i64)
///     .map(|t| {
///         let store = store.clone();
///         // One word per thread: no two threads touch the same word.
///         thread::spawn(move || {
///             let mut set = SparseBitSet::with_store(store);
///             for bit in 0..64 {
///                 set.set(t * 64 + bit);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// let set = SparseBitSet::with_store(store);
/// assert_eq!(set.count(), 256);
/// ```
#[derive(Clone, Default)]
pub struct SyncWordStore {
    words: Arc<RwLock<HashMap<i64, u64>>>,
}

impl SyncWordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }
}

impl WordStore for SyncWordStore {
    fn get(&self, index: i64) -> Option<u64> {
        self.words.read().get(&index).copied()
    }

    fn set(&mut self, index: i64, word: u64) {
        self.words.write().insert(index, word);
    }

    fn delete(&mut self, index: i64) {
        self.words.write().remove(&index);
    }

    fn len(&self) -> usize {
        self.words.read().len()
    }
}

impl IterableWordStore for SyncWordStore {
    fn create_empty(&self) -> Self {
        Self::new()
    }

    fn deep_clone(&self) -> Self {
        let words = self.words.read().clone();
        Self {
            words: Arc::new(RwLock::new(words)),
        }
    }

    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(i64, u64) -> bool,
    {
        for (index, word) in self.snapshot() {
            if !visit(index, word) {
                break;
            }
        }
    }

    fn snapshot(&self) -> Vec<(i64, u64)> {
        self.words
            .read()
            .iter()
            .map(|(&index, &word)| (index, word))
            .collect()
    }
}

impl From<HashMap<i64, u64>> for SyncWordStore {
    /// Wraps an existing map, dropping any zero words.
    fn from(mut words: HashMap<i64, u64>) -> Self {
        words.retain(|_, word| *word != 0);
        Self {
            words: Arc::new(RwLock::new(words)),
        }
    }
}

impl std::fmt::Debug for SyncWordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.words.read().iter()).finish()
    }
}
