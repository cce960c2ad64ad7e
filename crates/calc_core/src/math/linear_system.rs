//! Determinants and direct solvers for 2x2 and 3x3 linear systems.
//!
//! Both solvers are deliberately limited to their fixed dimension: the
//! determinants are written out as closed-form cofactor expansions rather
//! than general elimination, and Cramer's rule substitutes the constants
//! column directly. Larger systems are out of scope for the engine.

use crate::types::error::EquationError;
use crate::types::solution::{System2Solution, System3Solution};

/// Determinant magnitude below which a coefficient matrix is treated as
/// singular.
pub const SINGULAR_EPS: f64 = 1e-10;

/// Determinant of a 2x2 matrix.
///
/// # Example
///
/// ```
/// use calc_core::math::linear_system::det2;
///
/// assert_eq!(det2([[1.0, 2.0], [3.0, 4.0]]), -2.0);
/// ```
#[inline]
pub fn det2(m: [[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Determinant of a 3x3 matrix by cofactor expansion along the first row.
///
/// # Example
///
/// ```
/// use calc_core::math::linear_system::det3;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// assert_eq!(det3(identity), 1.0);
/// ```
#[inline]
pub fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Solve the 2x2 system `a1*x + b1*y = c1`, `a2*x + b2*y = c2`.
///
/// A determinant within [`SINGULAR_EPS`] of zero means the lines are
/// parallel or coincident; the two cases are folded into
/// [`System2Solution::NoUniqueSolution`] without distinction. Otherwise
/// Cramer's rule gives `x = (c1*b2 - c2*b1)/det` and
/// `y = (a1*c2 - a2*c1)/det`.
///
/// # Example
///
/// ```
/// use calc_core::math::linear_system::solve_2x2;
/// use calc_core::types::System2Solution;
///
/// // x + y = 3, x - y = 1
/// let solution = solve_2x2(1.0, 1.0, 3.0, 1.0, -1.0, 1.0).unwrap();
/// assert_eq!(solution, System2Solution::Unique { x: 2.0, y: 1.0 });
/// ```
pub fn solve_2x2(
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
) -> Result<System2Solution, EquationError> {
    for (name, value) in [
        ("a1", a1),
        ("b1", b1),
        ("c1", c1),
        ("a2", a2),
        ("b2", b2),
        ("c2", c2),
    ] {
        if !value.is_finite() {
            return Err(EquationError::non_finite(name, value));
        }
    }

    let det = det2([[a1, b1], [a2, b2]]);
    if det.abs() < SINGULAR_EPS {
        return Ok(System2Solution::NoUniqueSolution);
    }

    Ok(System2Solution::Unique {
        x: (c1 * b2 - c2 * b1) / det,
        y: (a1 * c2 - a2 * c1) / det,
    })
}

/// Solve the 3x3 system `matrix * [x, y, z] = constants` by Cramer's rule.
///
/// Computes the coefficient determinant once; if it is within
/// [`SINGULAR_EPS`] of zero the system has no unique solution. Otherwise
/// each unknown is the determinant of the matrix with the constants vector
/// substituted into the corresponding column, divided by the coefficient
/// determinant.
///
/// # Example
///
/// ```
/// use calc_core::math::linear_system::solve_3x3;
/// use calc_core::types::System3Solution;
///
/// // x + y + z = 6, y + z = 5, z = 3
/// let matrix = [[1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 0.0, 1.0]];
/// let solution = solve_3x3(matrix, [6.0, 5.0, 3.0]).unwrap();
/// assert_eq!(solution, System3Solution::Unique { x: 1.0, y: 2.0, z: 3.0 });
/// ```
pub fn solve_3x3(
    matrix: [[f64; 3]; 3],
    constants: [f64; 3],
) -> Result<System3Solution, EquationError> {
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, &value) in row.iter().enumerate() {
            if !value.is_finite() {
                return Err(EquationError::non_finite(
                    &format!("m{}{}", row_idx + 1, col_idx + 1),
                    value,
                ));
            }
        }
    }
    for (idx, &value) in constants.iter().enumerate() {
        if !value.is_finite() {
            return Err(EquationError::non_finite(&format!("c{}", idx + 1), value));
        }
    }

    let det = det3(matrix);
    if det.abs() < SINGULAR_EPS {
        return Ok(System3Solution::NoUniqueSolution);
    }

    // Substitute the constants into one column at a time
    let mut numerators = [0.0; 3];
    for (col, numerator) in numerators.iter_mut().enumerate() {
        let mut substituted = matrix;
        for row in 0..3 {
            substituted[row][col] = constants[row];
        }
        *numerator = det3(substituted);
    }

    Ok(System3Solution::Unique {
        x: numerators[0] / det,
        y: numerators[1] / det,
        z: numerators[2] / det,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_det2() {
        assert_eq!(det2([[2.0, 0.0], [0.0, 3.0]]), 6.0);
        assert_eq!(det2([[1.0, 2.0], [2.0, 4.0]]), 0.0);
    }

    #[test]
    fn test_det3_identity_and_permutation() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(det3(identity), 1.0);

        // Swapping two rows negates the determinant
        let swapped = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(det3(swapped), -1.0);
    }

    #[test]
    fn test_det3_known_value() {
        let m = [[2.0, -1.0, 3.0], [0.0, 4.0, -2.0], [1.0, 5.0, 1.0]];
        // 2*(4*1 - (-2)*5) + 1*(0*1 - (-2)*1) + 3*(0*5 - 4*1)
        assert_eq!(det3(m), 2.0 * 14.0 + 1.0 * 2.0 + 3.0 * (-4.0));
    }

    #[test]
    fn test_solve_2x2_unique() {
        // x + y = 3, x - y = 1 -> x = 2, y = 1
        let solution = solve_2x2(1.0, 1.0, 3.0, 1.0, -1.0, 1.0).unwrap();
        assert_eq!(solution, System2Solution::Unique { x: 2.0, y: 1.0 });
    }

    #[test]
    fn test_solve_2x2_coincident_lines() {
        // Second equation is twice the first
        let solution = solve_2x2(1.0, 1.0, 3.0, 2.0, 2.0, 6.0).unwrap();
        assert_eq!(solution, System2Solution::NoUniqueSolution);
    }

    #[test]
    fn test_solve_2x2_parallel_lines() {
        let solution = solve_2x2(1.0, 1.0, 3.0, 1.0, 1.0, 5.0).unwrap();
        assert_eq!(solution, System2Solution::NoUniqueSolution);
    }

    #[test]
    fn test_solve_2x2_non_finite_input() {
        assert!(solve_2x2(f64::NAN, 1.0, 3.0, 1.0, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_solve_3x3_unique() {
        // 2x + y - z = 3, x - y + 2z = 0, 3x + 2y + z = 10
        let matrix = [[2.0, 1.0, -1.0], [1.0, -1.0, 2.0], [3.0, 2.0, 1.0]];
        match solve_3x3(matrix, [3.0, 0.0, 10.0]).unwrap() {
            System3Solution::Unique { x, y, z } => {
                assert_relative_eq!(2.0 * x + y - z, 3.0, epsilon = 1e-9);
                assert_relative_eq!(x - y + 2.0 * z, 0.0, epsilon = 1e-9);
                assert_relative_eq!(3.0 * x + 2.0 * y + z, 10.0, epsilon = 1e-9);
            }
            other => panic!("expected unique solution, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_3x3_singular() {
        // Third row is the sum of the first two
        let matrix = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]];
        let solution = solve_3x3(matrix, [1.0, 2.0, 3.0]).unwrap();
        assert_eq!(solution, System3Solution::NoUniqueSolution);
    }

    #[test]
    fn test_solve_3x3_diagonal() {
        let matrix = [[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]];
        let solution = solve_3x3(matrix, [2.0, 8.0, 16.0]).unwrap();
        assert_eq!(solution, System3Solution::Unique { x: 1.0, y: 2.0, z: 2.0 });
    }

    #[test]
    fn test_solve_3x3_non_finite_input() {
        let matrix = [[1.0, 0.0, 0.0], [0.0, f64::INFINITY, 0.0], [0.0, 0.0, 1.0]];
        assert!(solve_3x3(matrix, [1.0, 1.0, 1.0]).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_2x2_solution_satisfies_both_equations(
                a1 in -10.0..10.0_f64,
                b1 in -10.0..10.0_f64,
                c1 in -10.0..10.0_f64,
                a2 in -10.0..10.0_f64,
                b2 in -10.0..10.0_f64,
                c2 in -10.0..10.0_f64,
            ) {
                if let System2Solution::Unique { x, y } =
                    solve_2x2(a1, b1, c1, a2, b2, c2).unwrap()
                {
                    let det = det2([[a1, b1], [a2, b2]]);
                    // Residual scales inversely with the determinant
                    let tol = 1e-6 * (1.0 + (x.abs() + y.abs())) / det.abs().min(1.0);
                    prop_assert!((a1 * x + b1 * y - c1).abs() < tol);
                    prop_assert!((a2 * x + b2 * y - c2).abs() < tol);
                }
            }
        }
    }
}
