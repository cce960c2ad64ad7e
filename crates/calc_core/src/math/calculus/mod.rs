//! Numerical differentiation and integration over polynomials.
//!
//! This module provides:
//! - `differentiate`: Central-difference derivative approximation
//! - `quadrature`: Composite trapezoid and Simpson integration rules
//!
//! All routines evaluate the polynomial through Horner's scheme; none of
//! them require the exact derivative transform, which makes them the
//! reference implementations for cross-checking it in tests.

pub mod differentiate;
pub mod quadrature;

// Re-export the full surface at module level
pub use differentiate::{derivative_at, derivative_at_with_step, DEFAULT_STEP};
pub use quadrature::{integrate_simpson, integrate_trapezoid, DEFAULT_SUBDIVISIONS};
