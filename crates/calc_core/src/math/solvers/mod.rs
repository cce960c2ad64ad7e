//! Equation solvers for the analysis engine.
//!
//! This module provides the two halves of the root-finding subsystem:
//!
//! ## Closed-Form Solvers
//!
//! - [`closed_form::solve_linear`]: `a*x + b = 0` with degenerate handling
//! - [`closed_form::solve_quadratic`]: discriminant-branched real/complex
//!   root structure
//! - [`closed_form::solve_cubic`]: Cardano's formula over the complex field
//!
//! ## Iterative Root Finding
//!
//! - [`PolynomialRootFinder`]: Newton-Raphson search with a degree-driven
//!   restart strategy
//!
//! ## Configuration
//!
//! The iterative finder uses [`SolverConfig`] for:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count per search (default: 100)
//!
//! ## Examples
//!
//! ```
//! use calc_core::math::polynomial::Polynomial;
//! use calc_core::math::solvers::{PolynomialRootFinder, SolverConfig};
//!
//! // Roots of x^3 - 8
//! let poly = Polynomial::<f64>::new(vec![-8.0, 0.0, 0.0, 1.0]).unwrap();
//! let finder = PolynomialRootFinder::new(SolverConfig::default());
//!
//! let estimates = finder.find_roots(&poly);
//! assert_eq!(estimates.len(), 3);
//! assert!(estimates.iter().any(|&x| (x - 2.0).abs() < 1e-6));
//! ```

pub mod closed_form;
mod config;
mod newton_raphson;

// Re-export public types at module level
pub use config::SolverConfig;
pub use newton_raphson::{Convergence, PolynomialRootFinder, RootEstimate, DERIVATIVE_FLOOR};
