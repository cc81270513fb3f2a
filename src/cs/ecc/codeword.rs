//! Normalization of codeword and data word inputs into bit vectors.
//!
//! Inputs may arrive as `0`/`1` strings, slices of `0`/`1` values, booleans,
//! bit slices or one-row `ndarray` matrices. Bare integers are deliberately
//! not accepted: splitting `1011` into decimal digits is indistinguishable
//! from a bit string and silently wrong for anything else.

use crate::cs::ecc::Result;
use crate::cs::error::Error;
use bitvec::prelude::*;
use ndarray::{Array1, Array2};

/// Types that can be turned into a vector of individual bits
pub trait IntoCodeword {
    /// Returns the input as a bit vector, validating the alphabet and shape
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>>;
}

fn from_values<I>(values: I) -> Result<BitVec<u8, Msb0>>
where
    I: IntoIterator<Item = u8>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::InvalidWordAlphabet {
                symbol: char::from_digit(u32::from(value), 10)
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                index,
            }),
        })
        .collect()
}

/// Renders bits as a string of `0` and `1` characters
pub fn to_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

impl IntoCodeword for str {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        self.chars()
            .enumerate()
            .map(|(index, symbol)| match symbol {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidWordAlphabet { symbol, index }),
            })
            .collect()
    }
}

impl IntoCodeword for String {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        self.as_str().to_bits()
    }
}

impl IntoCodeword for [u8] {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        from_values(self.iter().copied())
    }
}

impl<const N: usize> IntoCodeword for [u8; N] {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        self.as_slice().to_bits()
    }
}

impl IntoCodeword for Vec<u8> {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        self.as_slice().to_bits()
    }
}

impl IntoCodeword for [bool] {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        Ok(self.iter().copied().collect())
    }
}

impl<const N: usize> IntoCodeword for [bool; N] {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        self.as_slice().to_bits()
    }
}

impl IntoCodeword for BitSlice<u8, Msb0> {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        Ok(self.to_bitvec())
    }
}

impl IntoCodeword for BitVec<u8, Msb0> {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        Ok(self.clone())
    }
}

impl IntoCodeword for Array1<u8> {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        from_values(self.iter().copied())
    }
}

/// A matrix is accepted only when it holds exactly one row vector
impl IntoCodeword for Array2<u8> {
    fn to_bits(&self) -> Result<BitVec<u8, Msb0>> {
        if self.nrows() != 1 {
            return Err(Error::MultiRowInput { rows: self.nrows() });
        }
        from_values(self.row(0).iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_string_input() {
        assert_eq!("1011".to_bits().unwrap(), bitvec![u8, Msb0; 1, 0, 1, 1]);
        assert_eq!(
            String::from("0001").to_bits().unwrap(),
            bitvec![u8, Msb0; 0, 0, 0, 1]
        );
        assert!("".to_bits().unwrap().is_empty());

        let err = "10a1".to_bits().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWordAlphabet {
                symbol: 'a',
                index: 2
            }
        );
    }

    #[test]
    fn test_value_input() {
        assert_eq!([1u8, 0, 1].to_bits().unwrap(), bitvec![u8, Msb0; 1, 0, 1]);
        assert_eq!(vec![0u8, 1].to_bits().unwrap(), bitvec![u8, Msb0; 0, 1]);
        assert_eq!(
            [true, false].to_bits().unwrap(),
            bitvec![u8, Msb0; 1, 0]
        );

        let err = [1u8, 2, 0].to_bits().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWordAlphabet {
                symbol: '2',
                index: 1
            }
        );
    }

    #[test]
    fn test_array_input() {
        let row: Array2<u8> = array![[1, 1, 0]];
        assert_eq!(row.to_bits().unwrap(), bitvec![u8, Msb0; 1, 1, 0]);

        let flat: Array1<u8> = array![0, 1];
        assert_eq!(flat.to_bits().unwrap(), bitvec![u8, Msb0; 0, 1]);

        let rows: Array2<u8> = array![[1, 0], [0, 1]];
        assert_eq!(
            rows.to_bits().unwrap_err(),
            Error::MultiRowInput { rows: 2 }
        );
    }

    #[test]
    fn test_to_bit_string() {
        assert_eq!(to_bit_string(bits![u8, Msb0; 1, 0, 1, 1, 0]), "10110");
        assert_eq!(to_bit_string(BitSlice::<u8, Msb0>::empty()), "");
    }
}
