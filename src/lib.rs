//! A sparse bitset over the full `i64` key domain.
//!
//! This crate provides [`SparseBitSet`], a set of signed 64-bit keys packed
//! 64 to a word where only non-empty words are stored. Words live in a
//! pluggable store, so the same set operations run over an in-memory hash
//! map, a shared handle, a thread-safe map, or any backend implementing
//! [`WordStore`].
//!
//! # Features
//!
//! - **Full `i64` domain**, negative keys included (see [`codec`])
//! - **Sparse storage**: empty words are never stored
//! - **Set algebra** at word granularity (union, intersection, difference),
//!   each in copy and in-place form
//! - **Pluggable storage** with a two-tier contract: [`WordStore`] for point
//!   operations, [`IterableWordStore`] for enumeration
//! - **`no_std` support** with `alloc`
//! - **Optional `tracing`** spans around set operations
//!
//! # Examples
//!
//! ```
//! use sparse_bitset::SparseBitSet;
//!
//! let mut a = SparseBitSet::new();
//! a.set(-100);
//! a.set(0);
//! a.set(1 << 40);
//!
//! assert!(a.test(-100));
//! assert!(!a.test(-99));
//!
//! let mut b = SparseBitSet::new();
//! b.set(0);
//! b.set(7);
//!
//! let union = a.union(&b);
//! let intersection = a.intersection(&b);
//! let difference = a.remove_intersection(&b);
//! assert_eq!(union.count(), 4);
//! assert_eq!(intersection.count(), 1);
//! assert_eq!(difference.count(), 2);
//!
//! // Iteration order across words is unspecified.
//! let mut keys: Vec<i64> = union.iter().collect();
//! keys.sort_unstable();
//! assert_eq!(keys, [-100, 0, 7, 1 << 40]);
//! ```
//!
//! # Storage
//!
//! A set owns exactly one store. Cloning a set deep-copies its store. To
//! share a store between several owners, use a shared-handle store such as
//! [`SharedWordStore`] or [`SyncWordStore`]: every handle sees every write.
//!
//! The core takes no locks. `set`, `clear` and `flip` each read a word, then
//! write it back; a store shared between threads makes every single read and
//! write atomic but not the pair.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
pub mod codec;
mod iter;
mod macros;
mod set_ops;
pub mod storage;
#[cfg(feature = "std")]
mod sync;
mod traits;

// Re-exports
pub use bitset::SparseBitSet;
pub use iter::Iter;
pub use storage::{HashWordStore, IterableWordStore, SharedWordStore, WordStore};
#[cfg(feature = "std")]
pub use sync::SyncWordStore;
pub use traits::InvalidStoreError;
