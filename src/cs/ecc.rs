//! Error correction code implementations.
//!
//! This module provides a matrix-based systematic Hamming code:
//! - GF(2) matrix helpers
//! - Normalization of codeword inputs into bit vectors
//! - Construction of generator and check matrices from the number of parity bits
//! - Encoding, validity checking and single-bit error correction
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use hamming::cs::ecc::HammingCode;
//!
//! let code = HammingCode::new(3).unwrap();
//! let codeword = code.encode("1011").unwrap();
//! let damaged = code.bit_flip(&codeword, 2).unwrap();
//! assert_eq!(code.decode(&damaged).unwrap(), code.decode(&codeword).unwrap());
//! ```

use crate::cs::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bit vector normalization for codeword inputs
pub mod codeword;
pub use codeword::{to_bit_string, IntoCodeword};

/// GF(2) matrix arithmetic
pub mod gf2;

/// Hamming codes
pub mod hamming;
pub use hamming::{
    create_hamming, create_hamming_7_4, hamming_decode, hamming_encode, Codeword, Correction,
    DataWord, HammingCode, Syndrome, MAX_PARITY_BITS,
};

mod proptest;
