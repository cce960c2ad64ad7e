//! # calc_core: Numerical Foundation for the Furthercalc Engine
//!
//! ## Foundation Layer Role
//!
//! calc_core is the bottom layer of the three-layer architecture, providing
//! the equation-and-polynomial analysis subsystem:
//! - Polynomial evaluation and exact differentiation (`math::polynomial`)
//! - Closed-form linear/quadratic/cubic solvers (`math::solvers::closed_form`)
//! - Iterative Newton-Raphson polynomial root finding (`math::solvers`)
//! - Numerical differentiation and composite quadrature (`math::calculus`)
//! - Direct 2x2 and 3x3 linear-system solvers (`math::linear_system`)
//! - Structured solution and error types (`types`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other calc_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-complex: Complex arithmetic for quadratic/cubic root structure
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Statelessness
//!
//! Every operation is a pure function of its inputs plus the numeric
//! constants published by each module. Nothing is cached and no mutable
//! state is shared across calls, so concurrent use needs no locking.
//!
//! ## Usage Examples
//!
//! ```rust
//! use calc_core::math::polynomial::Polynomial;
//! use calc_core::math::solvers::closed_form::solve_quadratic;
//! use calc_core::types::QuadraticSolution;
//!
//! // Evaluate 5 + 3x + 2x^2 at x = 2 via Horner's scheme
//! let poly = Polynomial::new(vec![5.0, 3.0, 2.0]).unwrap();
//! assert_eq!(poly.eval(2.0), 19.0);
//!
//! // Solve x^2 - 4 = 0
//! match solve_quadratic(1.0, 0.0, -4.0).unwrap() {
//!     QuadraticSolution::RealDistinct { root1, root2, .. } => {
//!         assert_eq!(root1, 2.0);
//!         assert_eq!(root2, -2.0);
//!     }
//!     other => panic!("expected two real roots, got {:?}", other),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for solution and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
