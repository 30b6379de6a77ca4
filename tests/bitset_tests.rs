#![cfg(feature = "bitset")]
//! Integration tests for BitSet.
//!
//! The sieve scenarios start from a flipped (all ones) set and clear the
//! composites, so they exercise `with_len`, `flip`, `get` and `clear`.

use corral::bitset::{BitSet, BitSetConfig};
use corral::CollectionError;
use rstest::rstest;

fn sieve(limit: usize) -> Vec<usize> {
    let mut candidates = BitSet::with_len(limit);
    candidates.flip();
    for bit in 0..limit.min(2) {
        candidates.clear(bit).unwrap();
    }
    let mut factor = 2;
    while factor * factor < limit {
        if candidates.get(factor).unwrap() {
            for multiple in (factor * factor..limit).step_by(factor) {
                candidates.clear(multiple).unwrap();
            }
        }
        factor += 1;
    }
    candidates.set_bits().collect()
}

// =============================================================================
// Sieve scenarios
// =============================================================================

#[rstest]
fn test_primes_below_one_hundred() {
    assert_eq!(
        sieve(100),
        vec![
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97
        ]
    );
}

#[rstest]
fn test_first_one_hundred_primes() {
    let primes = sieve(542);
    assert_eq!(primes.len(), 100);
    assert_eq!(primes[..10], [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    assert_eq!(primes[99], 541);
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 0)]
#[case(3, 1)]
#[case(64, 18)]
#[case(65, 18)]
fn test_sieve_word_boundaries(#[case] limit: usize, #[case] count: usize) {
    assert_eq!(sieve(limit).len(), count);
}

// =============================================================================
// Range checks
// =============================================================================

#[rstest]
fn test_range_is_exact_not_word_rounded() {
    let mut bits = BitSet::with_config(BitSetConfig { num_bits: 70 });
    assert!(bits.set(69).is_ok());
    assert_eq!(
        bits.set(70),
        Err(CollectionError::IndexOutOfBounds {
            index: 70,
            length: 70
        })
    );
    assert!(bits.get(127).is_err());
}

#[rstest]
fn test_double_flip_is_identity() {
    let mut bits = BitSet::with_len(130);
    bits.set(5).unwrap();
    bits.set(129).unwrap();
    let before = bits.clone();

    bits.flip();
    assert_eq!(bits.count_ones(), 128);
    bits.flip();
    assert_eq!(bits, before);
}

#[rstest]
fn test_display_default_with_low_bits() {
    let mut bits = BitSet::default();
    bits.set(0).unwrap();
    bits.set(4).unwrap();
    assert_eq!(bits.to_string(), "0000000000000011");
}
