//! # calc_functions: Elementary Calculator Operations
//!
//! The function layer of the Furthercalc architecture: stateless
//! single-call wrappers around elementary math primitives. Each module
//! covers one family of operations:
//!
//! - [`arithmetic`] - Basic binary operations with zero-divisor checks
//! - [`trigonometry`] - Trig, inverse-trig, and hyperbolic functions with
//!   degree/radian mode handling
//! - [`exponential`] - Logarithms, exponentials, powers, square roots
//! - [`combinatorics`] - Factorial, permutations, combinations over `u64`
//! - [`statistics`] - Descriptive statistics (mean through kurtosis)
//! - [`complex_ops`] - Complex arithmetic, polar conversion, integer powers
//! - [`vectors`] - Magnitude, dot/cross products, angles
//! - [`matrix`] - Small-matrix helpers reusing the engine's determinants
//!
//! Unlike the engine crate underneath, nothing here has an internal
//! algorithm worth the name; the value of this layer is uniform domain
//! checking and structured [`error`] types in front of `std` and
//! `num_complex` primitives.

pub mod arithmetic;
pub mod combinatorics;
pub mod complex_ops;
pub mod error;
pub mod exponential;
pub mod matrix;
pub mod statistics;
pub mod trigonometry;
pub mod vectors;
