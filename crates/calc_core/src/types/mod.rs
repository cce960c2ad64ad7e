//! Solution and error types for the equation analysis engine.
//!
//! This module provides:
//! - `solution`: Tagged solution types describing root structure
//!   (`LinearSolution`, `QuadraticSolution`, `CubicSolution`,
//!   `System2Solution`, `System3Solution`)
//! - `error`: Structured error types for polynomial construction and
//!   equation solving
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`LinearSolution`], [`QuadraticSolution`], [`CubicSolution`],
//!   [`System2Solution`], [`System3Solution`] from `solution`
//! - [`EquationError`], [`PolynomialError`] from `error`

pub mod error;
pub mod solution;

// Re-export commonly used types at module level
pub use error::{EquationError, PolynomialError};
pub use solution::{
    CubicSolution, LinearSolution, QuadraticSolution, System2Solution, System3Solution,
};
