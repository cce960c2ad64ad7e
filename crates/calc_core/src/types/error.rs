//! Error types for structured error handling.
//!
//! This module provides:
//! - `PolynomialError`: Errors from polynomial construction
//! - `EquationError`: Errors from closed-form solvers and linear-system
//!   solvers
//!
//! There is no global last-error state anywhere in the engine; every
//! fallible operation returns one of these types directly.

use thiserror::Error;

/// Polynomial construction errors.
///
/// A polynomial is an ordered coefficient sequence `[a0, a1, ..., an]` and
/// must never be empty; a constant is represented as a single-element
/// sequence.
///
/// # Examples
/// ```
/// use calc_core::math::polynomial::Polynomial;
/// use calc_core::types::PolynomialError;
///
/// let err = Polynomial::<f64>::new(vec![]).unwrap_err();
/// assert_eq!(err, PolynomialError::EmptyCoefficients);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolynomialError {
    /// The coefficient sequence was empty.
    #[error("Coefficient sequence must not be empty")]
    EmptyCoefficients,
}

/// Equation and linear-system solver errors.
///
/// Provides structured error handling for the closed-form solvers and the
/// direct linear-system solvers with descriptive context for each failure
/// mode.
///
/// # Variants
/// - `NonFiniteCoefficient`: An input coefficient was NaN or infinite
/// - `RootVerificationFailed`: A cubic root failed the residual check
///
/// Degenerate-but-valid inputs (leading coefficient zero, singular system)
/// are not errors; they map to dedicated solution variants instead.
///
/// # Examples
/// ```
/// use calc_core::math::solvers::closed_form::solve_linear;
/// use calc_core::types::EquationError;
///
/// let err = solve_linear(f64::NAN, 1.0).unwrap_err();
/// assert!(matches!(err, EquationError::NonFiniteCoefficient { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquationError {
    /// An input coefficient was NaN or infinite.
    #[error("Coefficient {name} is not a finite number (got {value})")]
    NonFiniteCoefficient {
        /// Name of the offending coefficient (e.g. "a", "b2")
        name: String,
        /// The non-finite value that was supplied
        value: f64,
    },

    /// A computed cubic root did not satisfy the original equation within
    /// the scaled residual tolerance.
    ///
    /// Cardano's formula combines multi-valued complex cube roots; the
    /// residual check flags coefficient regimes where the selected branches
    /// do not reproduce the equation instead of silently returning bad
    /// roots.
    #[error("Root {root_re}{root_im:+}i failed verification (residual {residual:e})")]
    RootVerificationFailed {
        /// Real part of the rejected root
        root_re: f64,
        /// Imaginary part of the rejected root
        root_im: f64,
        /// Magnitude of the cubic evaluated at the rejected root
        residual: f64,
    },
}

impl EquationError {
    /// Create a `NonFiniteCoefficient` error for the named coefficient.
    pub(crate) fn non_finite(name: &str, value: f64) -> Self {
        EquationError::NonFiniteCoefficient {
            name: name.to_string(),
            value,
        }
    }
}
