//! Small-matrix helpers: determinants, inverse, transpose, multiply.
//!
//! Determinants delegate to the engine's closed-form cofactor expansions
//! so the singularity threshold stays consistent with the linear-system
//! solvers. Only 2x2 and 3x3 matrices are supported, by design.

use crate::error::MatrixError;
use calc_core::math::linear_system::{det2, det3, SINGULAR_EPS};

/// A 2x2 matrix in row-major order.
pub type Matrix2 = [[f64; 2]; 2];

/// A 3x3 matrix in row-major order.
pub type Matrix3 = [[f64; 3]; 3];

/// Determinant of a 2x2 matrix.
#[inline]
pub fn determinant2(m: Matrix2) -> f64 {
    det2(m)
}

/// Determinant of a 3x3 matrix.
#[inline]
pub fn determinant3(m: Matrix3) -> f64 {
    det3(m)
}

/// Inverse of a 2x2 matrix.
///
/// # Errors
///
/// `MatrixError::Singular` when the determinant is within the engine's
/// singularity threshold of zero.
///
/// # Example
///
/// ```
/// use calc_functions::matrix::inverse2;
///
/// let inv = inverse2([[4.0, 7.0], [2.0, 6.0]]).unwrap();
/// assert_eq!(inv, [[0.6, -0.7], [-0.2, 0.4]]);
/// ```
pub fn inverse2(m: Matrix2) -> Result<Matrix2, MatrixError> {
    let det = det2(m);
    if det.abs() < SINGULAR_EPS {
        return Err(MatrixError::Singular);
    }
    Ok([
        [m[1][1] / det, -m[0][1] / det],
        [-m[1][0] / det, m[0][0] / det],
    ])
}

/// Transpose of a 2x2 matrix.
#[inline]
pub fn transpose2(m: Matrix2) -> Matrix2 {
    [[m[0][0], m[1][0]], [m[0][1], m[1][1]]]
}

/// Transpose of a 3x3 matrix.
#[inline]
pub fn transpose3(m: Matrix3) -> Matrix3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Product of two 2x2 matrices.
pub fn multiply2(a: Matrix2, b: Matrix2) -> Matrix2 {
    let mut result = [[0.0; 2]; 2];
    for (i, row) in result.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
        }
    }
    result
}
