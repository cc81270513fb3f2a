//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! With `m` parity bits they protect `k = 2^m - m - 1` data bits in a codeword of `n = 2^m - 1`
//! bits and can correct any single-bit error. The most common variant is the (7,4) code with
//! 3 parity bits.
//!
//! This implementation is matrix based and systematic:
//! - Positions `1..=n` are classified into parity positions (powers of two) and data positions
//! - Each parity bit is responsible for the data positions sharing its set bit
//! - The generator matrix `G = [E | Aᵀ]` and check matrix `P = [A | E]` are derived from that
//! - Codewords are laid out as `[data(k) | parity(m)]`, not interleaved at the power-of-two
//!   positions
//!
//! Decoding computes the syndrome `P · cᵀ`, looks it up among the columns of `P` and flips the
//! matching bit.
//!
//! # Example
//!
//! ```rust
//! use hamming::cs::ecc::hamming::HammingCode;
//!
//! let code = HammingCode::new(3).unwrap();
//! let codeword = code.encode("1011").unwrap();
//! assert!(code.check_codeword(&codeword).unwrap());
//!
//! let damaged = code.bit_flip(&codeword, 4).unwrap();
//! assert!(!code.check_codeword(&damaged).unwrap());
//! assert_eq!(code.correct(&damaged).unwrap(), codeword);
//! ```

use crate::cs::ecc::codeword::{to_bit_string, IntoCodeword};
use crate::cs::ecc::gf2;
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use bitvec::prelude::*;
use log::{debug, warn};
use ndarray::{s, Array2};
use rayon::prelude::*;
use std::fmt;

/// Largest supported number of parity bits. Matrices are stored densely, so the
/// generator matrix for `m` parity bits takes roughly `4^m` bytes.
pub const MAX_PARITY_BITS: usize = 12;

/// A codeword in systematic `[data | parity]` order
pub type Codeword = BitVec<u8, Msb0>;

/// Data bits recovered from a codeword
pub type DataWord = BitVec<u8, Msb0>;

/// Result of multiplying the check matrix with a codeword
pub type Syndrome = BitVec<u8, Msb0>;

/// Outcome of a correction attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correction {
    /// Zero syndrome, the codeword is returned unchanged
    Valid(Codeword),
    /// A single bit at `index` (0-based, systematic order) was flipped
    Corrected { codeword: Codeword, index: usize },
    /// The syndrome matches no column of the check matrix
    Uncorrectable { syndrome: Syndrome },
}

impl Correction {
    /// Returns the (possibly corrected) codeword, or an error if it could not be localized
    pub fn into_codeword(self) -> Result<Codeword> {
        match self {
            Correction::Valid(codeword) | Correction::Corrected { codeword, .. } => Ok(codeword),
            Correction::Uncorrectable { syndrome } => Err(Error::Uncorrectable {
                syndrome: to_bit_string(&syndrome),
            }),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Correction::Valid(_))
    }
}

/// A Hamming code with `m` parity bits.
///
/// All matrices are computed once in [`HammingCode::new`] and never change afterwards,
/// so a single instance can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCode {
    /// Number of parity bits
    m: usize,
    /// Codeword length, `2^m - 1`
    n: usize,
    /// Number of data bits, `n - m`
    k: usize,
    /// `k x k` identity
    identity: Array2<u8>,
    /// 1-indexed positions of the data bits, increasing
    data_positions: Vec<usize>,
    /// 1-indexed positions of the parity bits (powers of two), increasing
    parity_positions: Vec<usize>,
    /// For each parity bit, the data bit indices it covers
    responsibility: Vec<Vec<usize>>,
    /// `m x k` parity matrix `A`
    parity: Array2<u8>,
    /// `k x n` generator matrix `G`
    generator: Array2<u8>,
    /// `m x n` check matrix `P`
    check: Array2<u8>,
}

/// Splits positions `1..=n` into data positions and parity positions
fn classify_positions(n: usize) -> (Vec<usize>, Vec<usize>) {
    (1..=n).partition(|&p| p & (p - 1) != 0)
}

/// Parity bit at position 001 covers all data positions xx1, parity bit at 010 covers x1x, etc.
fn parity_responsibility(
    data_positions: &[usize],
    parity_positions: &[usize],
) -> Vec<Vec<usize>> {
    parity_positions
        .iter()
        .map(|&p| {
            data_positions
                .iter()
                .enumerate()
                .filter(|&(_, &d)| d & p != 0)
                .map(|(i, _)| i)
                .collect()
        })
        .collect()
}

/// Row `i` of `A` is the XOR of the identity rows named by responsibility set `i`
fn parity_matrix(identity: &Array2<u8>, responsibility: &[Vec<usize>]) -> Array2<u8> {
    let mut parity = Array2::zeros((responsibility.len(), identity.ncols()));
    for (mut row, covered) in parity.rows_mut().into_iter().zip(responsibility) {
        row.assign(&gf2::xor_rows(identity, covered));
    }
    parity
}

/// `G` is the transpose of the vertical stack `[E; A]`
fn generator_matrix(identity: &Array2<u8>, parity: &Array2<u8>) -> Array2<u8> {
    let k = identity.nrows();
    let mut stacked = Array2::zeros((k + parity.nrows(), k));
    stacked.slice_mut(s![..k, ..]).assign(identity);
    stacked.slice_mut(s![k.., ..]).assign(parity);
    stacked.reversed_axes()
}

/// `P` is the transpose of the vertical stack `[Aᵀ; E]`
fn check_matrix(parity: &Array2<u8>) -> Array2<u8> {
    let (m, k) = parity.dim();
    let mut stacked = Array2::zeros((k + m, m));
    stacked.slice_mut(s![..k, ..]).assign(&parity.t());
    stacked.slice_mut(s![k.., ..]).assign(&gf2::identity(m));
    stacked.reversed_axes()
}

impl HammingCode {
    /// Creates a new Hamming code.
    ///
    /// # Arguments
    ///
    /// * `m` - Number of parity bits, between 1 and [`MAX_PARITY_BITS`]
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance or an error if invalid parameters
    pub fn new(m: usize) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidParameter(
                "Parity bits must be positive".to_string(),
            ));
        }

        if m > MAX_PARITY_BITS {
            return Err(Error::InvalidParameter(format!(
                "At most {} parity bits are supported, got {}",
                MAX_PARITY_BITS, m
            )));
        }

        Ok(Self::build(m))
    }

    /// Creates a standard (7,4) Hamming code
    pub fn standard_7_4() -> Self {
        Self::build(3)
    }

    fn build(m: usize) -> Self {
        let n = (1 << m) - 1;
        let k = n - m;

        let identity = gf2::identity(k);
        let (data_positions, parity_positions) = classify_positions(n);
        let responsibility = parity_responsibility(&data_positions, &parity_positions);
        let parity = parity_matrix(&identity, &responsibility);
        let generator = generator_matrix(&identity, &parity);
        let check = check_matrix(&parity);

        debug!("Built Hamming({}, {}) code with {} parity bits", n, k, m);

        HammingCode {
            m,
            n,
            k,
            identity,
            data_positions,
            parity_positions,
            responsibility,
            parity,
            generator,
            check,
        }
    }

    /// Number of parity bits
    pub fn m(&self) -> usize {
        self.m
    }

    /// Codeword length
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of data bits
    pub fn k(&self) -> usize {
        self.k
    }

    /// Ratio of data bits to codeword bits
    pub fn code_rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    pub fn identity_matrix(&self) -> &Array2<u8> {
        &self.identity
    }

    /// The `m x k` parity matrix `A`
    pub fn parity_matrix(&self) -> &Array2<u8> {
        &self.parity
    }

    /// The `k x n` generator matrix `G`
    pub fn generator_matrix(&self) -> &Array2<u8> {
        &self.generator
    }

    /// The `m x n` check matrix `P`
    pub fn check_matrix(&self) -> &Array2<u8> {
        &self.check
    }

    pub fn data_positions(&self) -> &[usize] {
        &self.data_positions
    }

    pub fn parity_positions(&self) -> &[usize] {
        &self.parity_positions
    }

    /// Data bit indices covered by each parity bit, in parity order
    pub fn responsibility(&self) -> &[Vec<usize>] {
        &self.responsibility
    }

    /// Maps a 0-based systematic index to its classic 1-indexed Hamming position.
    ///
    /// For a single-bit error at `index`, the syndrome read as a binary number
    /// (row `i` being bit `i`) equals this position.
    pub fn physical_position(&self, index: usize) -> Option<usize> {
        if index < self.k {
            Some(self.data_positions[index])
        } else {
            self.parity_positions.get(index - self.k).copied()
        }
    }

    /// Encodes a word of exactly `k` `'0'`/`'1'` characters
    pub fn encode(&self, word: &str) -> Result<Codeword> {
        let len = word.chars().count();
        if len != self.k {
            return Err(Error::InvalidWordLength {
                expected: self.k,
                actual: len,
            });
        }
        self.encode_bits(word)
    }

    /// Encodes a data word given in any supported bit representation
    pub fn encode_bits<C: IntoCodeword + ?Sized>(&self, word: &C) -> Result<Codeword> {
        let bits = word.to_bits()?;
        if bits.len() != self.k {
            return Err(Error::InvalidWordLength {
                expected: self.k,
                actual: bits.len(),
            });
        }
        Ok(gf2::vec_mat_mul(&bits, &self.generator))
    }

    /// Normalizes a codeword input and checks its length
    fn format<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<Codeword> {
        let bits = codeword.to_bits()?;
        if bits.len() != self.n {
            return Err(Error::InvalidCodewordLength {
                expected: self.n,
                actual: bits.len(),
            });
        }
        Ok(bits)
    }

    /// Computes `P · cᵀ (mod 2)`
    pub fn syndrome<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<Syndrome> {
        let bits = self.format(codeword)?;
        Ok(gf2::mat_vec_mul(&self.check, &bits))
    }

    /// Returns true if the syndrome of the codeword is zero
    pub fn check_codeword<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<bool> {
        Ok(self.syndrome(codeword)?.not_any())
    }

    /// Attempts to correct a single-bit error and reports what happened
    pub fn correction<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<Correction> {
        let codeword = self.format(codeword)?;
        let syndrome = gf2::mat_vec_mul(&self.check, &codeword);

        if syndrome.not_any() {
            return Ok(Correction::Valid(codeword));
        }

        match gf2::find_column(&self.check, &syndrome) {
            Some(index) => {
                let mut corrected = codeword;
                let bit = !corrected[index];
                corrected.set(index, bit);
                debug!(
                    "Corrected bit {} (syndrome {})",
                    index,
                    to_bit_string(&syndrome)
                );
                Ok(Correction::Corrected {
                    codeword: corrected,
                    index,
                })
            }
            None => {
                warn!(
                    "Syndrome {} matches no column of the check matrix",
                    to_bit_string(&syndrome)
                );
                Ok(Correction::Uncorrectable { syndrome })
            }
        }
    }

    /// Returns the corrected codeword.
    ///
    /// A valid codeword is returned unchanged. Fails with [`Error::Uncorrectable`]
    /// if the syndrome does not identify a single bit.
    pub fn correct<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<Codeword> {
        self.correction(codeword)?.into_codeword()
    }

    /// Corrects the codeword if needed and returns its leading `k` data bits
    pub fn decode<C: IntoCodeword + ?Sized>(&self, codeword: &C) -> Result<DataWord> {
        let codeword = self.correct(codeword)?;
        Ok(codeword[..self.k].to_bitvec())
    }

    /// Flips the bit at a 1-indexed `position`.
    ///
    /// Position 0 is taken as position 1.
    pub fn bit_flip<C: IntoCodeword + ?Sized>(
        &self,
        codeword: &C,
        position: i64,
    ) -> Result<Codeword> {
        let mut codeword = self.format(codeword)?;

        let pos = usize::try_from(position).map_err(|_| Error::NegativePosition(position))?;
        if pos > self.n {
            return Err(Error::PositionOutOfRange {
                position,
                len: self.n,
            });
        }

        let index = if pos == 0 {
            warn!("Bit positions start at 1, flipping position 1 instead of 0");
            0
        } else {
            pos - 1
        };

        let bit = !codeword[index];
        codeword.set(index, bit);
        Ok(codeword)
    }

    /// Encodes many words in parallel. The first failure is returned.
    pub fn encode_batch(&self, words: &[&str]) -> Result<Vec<Codeword>> {
        words.par_iter().map(|word| self.encode(word)).collect()
    }

    /// Decodes many codewords in parallel. The first failure is returned.
    pub fn decode_batch(&self, codewords: &[Codeword]) -> Result<Vec<DataWord>> {
        codewords
            .par_iter()
            .map(|codeword| self.decode(codeword))
            .collect()
    }
}

impl fmt::Display for HammingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hamming({}, {})", self.n, self.k)
    }
}

/// Creates a standard (7,4) Hamming code
pub fn create_hamming_7_4() -> HammingCode {
    HammingCode::standard_7_4()
}

/// Creates a Hamming code with `m` parity bits
pub fn create_hamming(m: usize) -> Result<HammingCode> {
    HammingCode::new(m)
}

/// Encodes a 4-bit word using the standard (7,4) Hamming code
pub fn hamming_encode(word: &str) -> Result<Codeword> {
    create_hamming_7_4().encode(word)
}

/// Decodes a 7-bit codeword using the standard (7,4) Hamming code
pub fn hamming_decode<C: IntoCodeword + ?Sized>(codeword: &C) -> Result<DataWord> {
    create_hamming_7_4().decode(codeword)
}
