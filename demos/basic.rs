//! Basic usage examples for `SparseBitSet`

use sparse_bitset::SparseBitSet;

fn main() {
    println!("=== SparseBitSet Basic Usage ===\n");

    let mut set = SparseBitSet::new();
    println!("Created new set");
    println!("Stored words: {}\n", set.word_count());

    // Keys anywhere in the i64 range, negative ones included
    for key in [-100, -1, 0, 5, 63, 64, 1 << 40] {
        set.set(key);
    }

    println!("Set keys: -100, -1, 0, 5, 63, 64, 2^40");
    println!("Number of keys: {}", set.count());
    println!("Stored words: {}\n", set.word_count());

    println!("Checking individual keys:");
    for key in [-101, -100, -1, 0, 6, 64, 1 << 40] {
        println!(
            "  Key {}: {}",
            key,
            if set.test(key) { "set" } else { "unset" }
        );
    }

    // Order across words depends on the store, so sort for display
    let mut keys: Vec<i64> = set.iter().collect();
    keys.sort_unstable();
    println!("\nKeys in order: {keys:?}\n");

    println!("Flipping keys 5 and 6");
    let (index, word) = set.flip(5);
    println!("  word {index} is now {word:#b}");
    let (index, word) = set.flip(6);
    println!("  word {index} is now {word:#b}\n");

    println!("Clearing 2^40 drops its word");
    set.clear(1 << 40);
    println!("Stored words: {}\n", set.word_count());

    println!("Clearing all keys");
    set.clear_all();
    println!("Number of keys after clear: {}", set.count());
    println!("Is empty? {}", set.is_empty());
}
