//! Property-based tests for the Hamming code.
//!
//! # Test Properties
//!
//! 1. **Roundtrip**: decode(encode(word)) = word
//! 2. **Validity**: every encoded word has a zero syndrome
//! 3. **Single-error correction**: any one flipped bit is located and undone
//! 4. **Syndrome lookup**: the syndrome of a flip equals the check matrix column at the flipped index

#![cfg(test)]

use proptest::prelude::*;

use super::codeword::to_bit_string;
use super::hamming::{Correction, HammingCode};
use crate::cs::error::Error;

// =============================================================================
// Property Strategies
// =============================================================================

fn data_bits(m: usize) -> usize {
    (1 << m) - 1 - m
}

/// Strategy for a parity bit count together with a random data word.
fn word_strategy() -> impl Strategy<Value = (usize, String)> {
    (2usize..=6).prop_flat_map(|m| {
        let word = prop::collection::vec(any::<bool>(), data_bits(m))
            .prop_map(|bits| {
                bits.iter()
                    .map(|&b| if b { '1' } else { '0' })
                    .collect::<String>()
            });
        (Just(m), word)
    })
}

/// Strategy adding a 1-indexed flip position.
fn flip_strategy() -> impl Strategy<Value = (usize, String, i64)> {
    word_strategy().prop_flat_map(|(m, word)| {
        let n = (1i64 << m) - 1;
        (Just(m), Just(word), 1..=n)
    })
}

/// Strategy adding two distinct 1-indexed flip positions.
fn double_flip_strategy() -> impl Strategy<Value = (usize, String, i64, i64)> {
    word_strategy().prop_flat_map(|(m, word)| {
        let n = (1i64 << m) - 1;
        (Just(m), Just(word), 1..=n, 1..=n)
            .prop_filter("positions must differ", |(_, _, a, b)| a != b)
    })
}

// =============================================================================
// Encoding Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every encoded word passes the check.
    #[test]
    fn prop_encoded_words_are_valid((m, word) in word_strategy()) {
        let code = HammingCode::new(m)?;
        let codeword = code.encode(&word)?;

        prop_assert_eq!(codeword.len(), code.n());
        prop_assert!(code.check_codeword(&codeword)?);
    }

    /// Property: the data bits lead the systematic codeword.
    #[test]
    fn prop_roundtrip_no_errors((m, word) in word_strategy()) {
        let code = HammingCode::new(m)?;
        let codeword = code.encode(&word)?;

        prop_assert_eq!(to_bit_string(&codeword[..code.k()]), word.clone());
        prop_assert_eq!(to_bit_string(&code.decode(&codeword)?), word);
    }
}

// =============================================================================
// Correction Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a single flipped bit is always recovered.
    #[test]
    fn prop_single_flip_recovered((m, word, position) in flip_strategy()) {
        let code = HammingCode::new(m)?;
        let codeword = code.encode(&word)?;
        let damaged = code.bit_flip(&codeword, position)?;

        prop_assert!(!code.check_codeword(&damaged)?);
        prop_assert_eq!(code.correct(&damaged)?, codeword);
        prop_assert_eq!(to_bit_string(&code.decode(&damaged)?), word);
    }

    /// Property: the syndrome names the flipped index.
    #[test]
    fn prop_syndrome_matches_flipped_column((m, word, position) in flip_strategy()) {
        let code = HammingCode::new(m)?;
        let codeword = code.encode(&word)?;
        let damaged = code.bit_flip(&codeword, position)?;

        let syndrome = code.syndrome(&damaged)?;
        let index = (position - 1) as usize;
        let column: Vec<bool> = code
            .check_matrix()
            .column(index)
            .iter()
            .map(|&x| x == 1)
            .collect();
        let syndrome: Vec<bool> = syndrome.iter().by_vals().collect();
        prop_assert_eq!(syndrome, column);

        match code.correction(&damaged)? {
            Correction::Corrected { index: found, .. } => prop_assert_eq!(found, index),
            other => prop_assert!(false, "expected a correction, got {:?}", other),
        }
    }

    /// Property: two flips are never silently reported as the original codeword.
    #[test]
    fn prop_double_flip_not_silent((m, word, first, second) in double_flip_strategy()) {
        let code = HammingCode::new(m)?;
        let codeword = code.encode(&word)?;
        let damaged = code.bit_flip(&codeword, first)?;
        let damaged = code.bit_flip(&damaged, second)?;

        prop_assert!(!code.check_codeword(&damaged)?);
        match code.correct(&damaged) {
            Err(Error::Uncorrectable { .. }) => {}
            Ok(miscorrected) => prop_assert_ne!(miscorrected, codeword),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }
}
