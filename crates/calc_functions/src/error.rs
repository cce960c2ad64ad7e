//! Error types for the elementary operation layer.
//!
//! One enum per operation family. All derive `thiserror::Error` with
//! human-readable messages; none of them carries any state beyond what is
//! needed to describe the failure.

use thiserror::Error;

/// Errors from basic binary arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithmeticError {
    /// Division by zero is undefined.
    #[error("Division by zero is undefined")]
    DivisionByZero,

    /// Modulo by zero is undefined.
    #[error("Modulo by zero is undefined")]
    ModuloByZero,

    /// The result overflowed the double-precision range.
    #[error("Result is too large to compute")]
    Overflow,
}

/// Domain errors from trigonometric, logarithmic, and root functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Inverse sine/cosine argument outside [-1, 1].
    #[error("Inverse trigonometric argument {value} outside [-1, 1]")]
    InverseTrigOutOfRange {
        /// The offending argument
        value: f64,
    },

    /// Logarithm of a non-positive number.
    #[error("Logarithm of non-positive number is undefined (got {value})")]
    NonPositiveLog {
        /// The offending argument
        value: f64,
    },

    /// Logarithm base must be positive and not equal to 1.
    #[error("Base must be positive and not equal to 1 (got {base})")]
    InvalidLogBase {
        /// The offending base
        base: f64,
    },

    /// Square root of a negative number.
    #[error("Cannot take square root of negative number (got {value})")]
    NegativeSqrt {
        /// The offending argument
        value: f64,
    },
}

/// Errors from factorial, permutation, and combination.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinatoricsError {
    /// Selection size exceeds population size.
    #[error("Invalid values for selection: r = {r} exceeds n = {n}")]
    InvalidSelection {
        /// Population size
        n: u64,
        /// Selection size
        r: u64,
    },

    /// The exact integer result does not fit in u64.
    #[error("Result overflows 64-bit integer range")]
    Overflow,
}

/// Errors from descriptive statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Not enough data points for the requested statistic.
    #[error("Need at least {need} data points, got {got}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum required
        need: usize,
    },

    /// Standardised moments are undefined for constant data.
    #[error("Standard deviation is zero; statistic undefined for constant data")]
    ZeroVariance,
}

/// Errors from complex-number operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComplexError {
    /// Division by the complex zero.
    #[error("Division by zero")]
    DivisionByZero,
}

/// Errors from vector operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Operands have different dimensions.
    #[error("Vectors must have same dimension (got {left} and {right})")]
    DimensionMismatch {
        /// Dimension of the left operand
        left: usize,
        /// Dimension of the right operand
        right: usize,
    },

    /// Angle with a zero-magnitude vector is undefined.
    #[error("Cannot calculate angle with zero-magnitude vector")]
    ZeroMagnitude,
}

/// Errors from matrix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix is singular (determinant is zero).
    #[error("Matrix is singular (determinant = 0)")]
    Singular,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_match_contract() {
        assert_eq!(
            format!("{}", ArithmeticError::DivisionByZero),
            "Division by zero is undefined"
        );
        assert_eq!(
            format!("{}", DomainError::NegativeSqrt { value: -4.0 }),
            "Cannot take square root of negative number (got -4)"
        );
        assert_eq!(
            format!("{}", StatsError::InsufficientData { got: 1, need: 2 }),
            "Need at least 2 data points, got 1"
        );
        assert_eq!(
            format!("{}", MatrixError::Singular),
            "Matrix is singular (determinant = 0)"
        );
    }

    #[test]
    fn test_error_trait_implementations() {
        let _: &dyn std::error::Error = &ArithmeticError::Overflow;
        let _: &dyn std::error::Error = &CombinatoricsError::Overflow;
        let _: &dyn std::error::Error = &VectorError::ZeroMagnitude;
        let _: &dyn std::error::Error = &ComplexError::DivisionByZero;
    }
}
