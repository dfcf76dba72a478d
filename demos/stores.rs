//! Examples of the store types behind `SparseBitSet`

use std::thread;

use sparse_bitset::{HashWordStore, SharedWordStore, SparseBitSet, SyncWordStore, WordStore};

fn main() {
    println!("=== Shared store ===\n");

    // Two sets over one store see each other's writes
    let store: SharedWordStore = SharedWordStore::default();
    let mut writer = SparseBitSet::with_store(store.clone());
    let reader = SparseBitSet::with_store(store.clone());
    writer.set(42);
    println!("Reader sees 42: {}", reader.test(42));

    // Cloning a set copies its words into a fresh store
    let copy = writer.clone();
    writer.clear(42);
    println!("After clear, reader sees 42: {}", reader.test(42));
    println!("Clone still has 42: {}\n", copy.test(42));

    println!("=== Replacing a store ===\n");

    let mut set = SparseBitSet::new();
    set.set(1);
    let old = set.replace_store(HashWordStore::new());
    println!("Old store held {} word(s)", old.len());
    println!("Set is now empty: {}\n", set.is_empty());

    println!("=== Thread-safe store ===\n");

    let store = SyncWordStore::new();
    let handles: Vec<_> = (0..4i64)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                let mut set = SparseBitSet::with_store(store);
                // Each thread writes its own word
                for bit in 0..64 {
                    set.set(t * 64 + bit);
                }
            })
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            eprintln!("writer thread panicked");
        }
    }

    let set = SparseBitSet::with_store(store);
    println!("Keys written by 4 threads: {}", set.count());
    println!("Stored words: {}", set.word_count());
}
