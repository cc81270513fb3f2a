//! Dense matrix arithmetic over GF(2).
//!
//! Matrices are `ndarray::Array2<u8>` holding only `0` and `1`; vectors are
//! `BitVec<u8, Msb0>`. Addition is XOR and multiplication is AND, so no
//! intermediate sum ever leaves the field.

use bitvec::prelude::*;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Returns the `size x size` identity matrix
pub fn identity(size: usize) -> Array2<u8> {
    Array2::eye(size)
}

/// XOR of the selected rows of `matrix`.
///
/// An empty selection yields the zero row.
pub fn xor_rows(matrix: &Array2<u8>, rows: &[usize]) -> Array1<u8> {
    let mut acc = Array1::zeros(matrix.ncols());
    for &r in rows {
        acc.zip_mut_with(&matrix.row(r), |a, &b| *a ^= b);
    }
    acc
}

/// Inner product of a bit vector with a matrix lane (mod 2)
fn dot(bits: &BitSlice<u8, Msb0>, lane: ArrayView1<'_, u8>) -> bool {
    bits.iter()
        .by_vals()
        .zip(lane.iter())
        .fold(false, |acc, (bit, &x)| acc ^ (bit && x == 1))
}

/// Row vector times matrix: `bits · matrix (mod 2)`.
///
/// `bits.len()` must equal `matrix.nrows()`; the result has `matrix.ncols()` bits.
pub fn vec_mat_mul(bits: &BitSlice<u8, Msb0>, matrix: &Array2<u8>) -> BitVec<u8, Msb0> {
    debug_assert_eq!(bits.len(), matrix.nrows());
    matrix.columns().into_iter().map(|col| dot(bits, col)).collect()
}

/// Matrix times column vector: `matrix · bitsᵀ (mod 2)`.
///
/// `bits.len()` must equal `matrix.ncols()`; the result has `matrix.nrows()` bits.
pub fn mat_vec_mul(matrix: &Array2<u8>, bits: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    debug_assert_eq!(bits.len(), matrix.ncols());
    matrix.rows().into_iter().map(|row| dot(bits, row)).collect()
}

/// Matrix product `lhs · rhs (mod 2)`
pub fn mat_mul(lhs: ArrayView2<'_, u8>, rhs: ArrayView2<'_, u8>) -> Array2<u8> {
    debug_assert_eq!(lhs.ncols(), rhs.nrows());
    Array2::from_shape_fn((lhs.nrows(), rhs.ncols()), |(i, j)| {
        lhs.row(i)
            .iter()
            .zip(rhs.column(j).iter())
            .fold(0, |acc, (&a, &b)| acc ^ (a & b))
    })
}

/// Index of the first column of `matrix` equal to `bits`, if any
pub fn find_column(matrix: &Array2<u8>, bits: &BitSlice<u8, Msb0>) -> Option<usize> {
    if bits.len() != matrix.nrows() {
        return None;
    }
    matrix.columns().into_iter().position(|col| {
        col.iter()
            .zip(bits.iter().by_vals())
            .all(|(&x, bit)| (x == 1) == bit)
    })
}
