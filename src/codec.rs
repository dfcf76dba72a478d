//! Conversion between keys and `(word index, bit position)` pairs.
//!
//! Keys are packed [`WORD_BITS`] to a word. Non-negative keys use plain
//! division: key `K` lives in word `K / 64` at bit `K % 64`. Negative keys use
//! truncated division with the word index shifted down by one and the
//! remainder negated:
//!
//! ```text
//! q, r = K / 64, K % 64        // truncated, r in (-64, 0]
//! word = q - 1
//! bit  = -r
//! ```
//!
//! This is not floor division with a positive remainder. Word `-1` holds keys
//! `-1..=-63` at bits `1..=63`, word `-2` holds `-64..=-127` at bits
//! `0..=63`, and so on. The layout is part of the storage contract: any word
//! store shared with other users of this encoding depends on it, so it must
//! not be "simplified".
//!
//! # Examples
//!
//! ```
//! use sparse_bitset::codec::{decode, encode};
//!
//! assert_eq!(encode(65), (1, 1));
//! assert_eq!(encode(-1), (-1, 1));
//! assert_eq!(encode(-64), (-2, 0));
//! assert_eq!(decode(-2, 0), -64);
//! ```

/// Number of keys packed into a single word.
pub const WORD_BITS: u32 = u64::BITS;

const WORD_BITS_I64: i64 = WORD_BITS as i64;

/// Smallest word index produced by [`encode`] (the word holding `i64::MIN`).
pub const MIN_WORD: i64 = encode(i64::MIN).0;

/// Largest word index produced by [`encode`] (the word holding `i64::MAX`).
pub const MAX_WORD: i64 = encode(i64::MAX).0;

/// Splits a key into its word index and bit position.
///
/// The bit position is always in `0..64`.
#[inline]
#[must_use]
pub const fn encode(key: i64) -> (i64, u32) {
    let word = key / WORD_BITS_I64;
    let rem = key % WORD_BITS_I64;
    if key < 0 {
        (word - 1, (-rem) as u32)
    } else {
        (word, rem as u32)
    }
}

/// Rebuilds the key addressed by a word index and bit position.
///
/// This is the inverse of [`encode`]. Pairs that [`encode`] never produces
/// (see [`valid_bits`]) decode with wrapping arithmetic instead of panicking.
#[inline]
#[must_use]
pub const fn decode(word: i64, bit: u32) -> i64 {
    debug_assert!(bit < WORD_BITS);
    if word >= 0 {
        word.wrapping_mul(WORD_BITS_I64).wrapping_add(bit as i64)
    } else {
        (word + 1).wrapping_mul(WORD_BITS_I64).wrapping_sub(bit as i64)
    }
}

/// Returns the single-bit mask for a bit position.
#[inline(always)]
#[must_use]
pub const fn mask(bit: u32) -> u64 {
    1 << bit
}

/// Returns the mask of bit positions that some key encodes to in `word`.
///
/// Every bit is reachable except bit 0 of word `-1` (that slot would be key
/// `0`, which lives in word `0`), the bits above 0 of [`MIN_WORD`], and any
/// word outside `MIN_WORD..=MAX_WORD`.
#[must_use]
pub const fn valid_bits(word: i64) -> u64 {
    match word {
        -1 => !1,
        MIN_WORD => 1,
        w if w > MIN_WORD && w <= MAX_WORD => !0,
        _ => 0,
    }
}
