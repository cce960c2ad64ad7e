//! Tagged solution types describing the root structure of an equation.
//!
//! Every closed-form solver returns one of these enums; each branch of the
//! discriminant logic maps to exactly one variant, so callers can match on
//! the root structure instead of inspecting loosely-typed values.

use num_complex::Complex64;

/// Solution of the linear equation `a*x + b = 0`.
///
/// # Examples
/// ```
/// use calc_core::math::solvers::closed_form::solve_linear;
/// use calc_core::types::LinearSolution;
///
/// assert_eq!(solve_linear(2.0, -4.0).unwrap(), LinearSolution::Root(2.0));
/// assert_eq!(solve_linear(0.0, 0.0).unwrap(), LinearSolution::Infinite);
/// assert_eq!(solve_linear(0.0, 1.0).unwrap(), LinearSolution::NoSolution);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinearSolution {
    /// The single real root `-b/a`.
    Root(f64),

    /// Every real number is a solution (`0*x + 0 = 0`).
    Infinite,

    /// No real number is a solution (`0*x + b = 0` with `b != 0`).
    NoSolution,
}

/// Solution of the quadratic equation `a*x^2 + b*x + c = 0`.
///
/// The discriminant `b^2 - 4ac` is computed exactly once and its sign is
/// the sole branch selector; the computed value is carried in each variant
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadraticSolution {
    /// Two distinct real roots (discriminant > 0).
    RealDistinct {
        /// Root `(-b + sqrt(disc)) / (2a)`
        root1: f64,
        /// Root `(-b - sqrt(disc)) / (2a)`
        root2: f64,
        /// The discriminant `b^2 - 4ac`
        discriminant: f64,
    },

    /// One repeated real root (discriminant == 0).
    RealRepeated {
        /// The repeated root `-b / (2a)`
        root: f64,
        /// The discriminant, exactly zero on this branch
        discriminant: f64,
    },

    /// A complex conjugate pair (discriminant < 0).
    Complex {
        /// Root `(-b + i*sqrt(-disc)) / (2a)`
        root1: Complex64,
        /// The conjugate of `root1`
        root2: Complex64,
        /// The discriminant `b^2 - 4ac`
        discriminant: f64,
    },

    /// Leading coefficient was zero; the equation degraded to the linear
    /// solver applied to `(b, c)`.
    Degenerate(LinearSolution),
}

/// Solution of the cubic equation `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Cardano's formula always yields three roots over the complex field;
/// real coefficients guarantee either three real roots or one real root
/// plus a conjugate complex pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CubicSolution {
    /// The three (possibly complex) roots.
    Roots {
        /// Roots in Cardano combination order; `roots[0]` is the
        /// reference-branch root `c1 + c2 - b/(3a)`
        roots: [Complex64; 3],
        /// Discriminant of the depressed cubic, `-(4p^3 + 27q^2)`.
        /// Reported for diagnostics only; it does not drive branching.
        discriminant: f64,
    },

    /// Leading coefficient was zero; the equation degraded to the
    /// quadratic solver applied to `(b, c, d)`.
    Degenerate(QuadraticSolution),
}

/// Solution of a 2x2 linear system.
///
/// `NoUniqueSolution` covers both parallel and coincident lines; the two
/// cases are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum System2Solution {
    /// The unique solution of the system.
    Unique {
        /// Value of the first unknown
        x: f64,
        /// Value of the second unknown
        y: f64,
    },

    /// The coefficient determinant vanished.
    NoUniqueSolution,
}

/// Solution of a 3x3 linear system solved by Cramer's rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum System3Solution {
    /// The unique solution of the system.
    Unique {
        /// Value of the first unknown
        x: f64,
        /// Value of the second unknown
        y: f64,
        /// Value of the third unknown
        z: f64,
    },

    /// The coefficient determinant vanished.
    NoUniqueSolution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_solution_equality() {
        assert_eq!(LinearSolution::Root(1.5), LinearSolution::Root(1.5));
        assert_ne!(LinearSolution::Infinite, LinearSolution::NoSolution);
    }

    #[test]
    fn test_quadratic_solution_debug_contains_variant() {
        let sol = QuadraticSolution::RealRepeated {
            root: 2.0,
            discriminant: 0.0,
        };
        let debug = format!("{:?}", sol);
        assert!(debug.contains("RealRepeated"));
    }

    #[test]
    fn test_cubic_solution_copy_semantics() {
        let sol = CubicSolution::Roots {
            roots: [
                Complex64::new(2.0, 0.0),
                Complex64::new(-1.0, 1.0),
                Complex64::new(-1.0, -1.0),
            ],
            discriminant: -1.0,
        };
        let copied = sol;
        assert_eq!(sol, copied);
    }

    #[test]
    fn test_system_solutions_equality() {
        assert_eq!(
            System2Solution::Unique { x: 2.0, y: 1.0 },
            System2Solution::Unique { x: 2.0, y: 1.0 }
        );
        assert_eq!(
            System3Solution::NoUniqueSolution,
            System3Solution::NoUniqueSolution
        );
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_quadratic_solution_serde_roundtrip() {
            let sol = QuadraticSolution::Complex {
                root1: Complex64::new(1.0, 2.0),
                root2: Complex64::new(1.0, -2.0),
                discriminant: -16.0,
            };
            let json = serde_json::to_string(&sol).unwrap();
            let deserialized: QuadraticSolution = serde_json::from_str(&json).unwrap();
            assert_eq!(sol, deserialized);
        }
    }
}
