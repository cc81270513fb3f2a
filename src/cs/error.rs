//! Error types shared by the coding algorithms.

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by code construction, encoding and decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Code parameter is zero or too large for a dense matrix representation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Data word does not have exactly `k` bits
    #[error("Word has to be {expected} bits long but was {actual}")]
    InvalidWordLength { expected: usize, actual: usize },

    /// Codeword does not have exactly `n` bits
    #[error("Codeword has to be {expected} bits long but was {actual}")]
    InvalidCodewordLength { expected: usize, actual: usize },

    /// A symbol other than `0` or `1` was found
    #[error("{symbol:?} detected at index {index}. Only 0 and 1 are allowed")]
    InvalidWordAlphabet { symbol: char, index: usize },

    /// A two-dimensional input held more (or fewer) than one vector
    #[error("Codeword can only have one vector, got {rows} rows")]
    MultiRowInput { rows: usize },

    /// Bit position past the end of the codeword
    #[error("Can't flip bit {position} of a {len}-bit codeword")]
    PositionOutOfRange { position: i64, len: usize },

    /// Bit position below zero
    #[error("Bit position can't be negative: {0}")]
    NegativePosition(i64),

    /// Syndrome matches no single-bit error pattern
    #[error("Syndrome {syndrome} does not match any single-bit error")]
    Uncorrectable { syndrome: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::InvalidWordLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "Word has to be 4 bits long but was 3");

        let e = Error::InvalidWordAlphabet {
            symbol: '2',
            index: 1,
        };
        assert_eq!(
            e.to_string(),
            "'2' detected at index 1. Only 0 and 1 are allowed"
        );

        let e = Error::Uncorrectable {
            syndrome: "101".to_string(),
        };
        assert!(e.to_string().contains("101"));
    }
}
