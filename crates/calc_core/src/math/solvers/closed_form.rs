//! Closed-form solvers for linear, quadratic, and cubic equations.
//!
//! Each solver returns a tagged solution describing the equation's root
//! structure. Degenerate leading coefficients are not errors: the solver
//! degrades to the next-lower-degree solver and wraps its result in a
//! `Degenerate` variant. The only error conditions are non-finite input
//! coefficients and a failed cubic residual check.

use crate::types::error::EquationError;
use crate::types::solution::{CubicSolution, LinearSolution, QuadraticSolution};
use num_complex::Complex64;

/// Magnitude below which a Cardano cube root is treated as collapsed and
/// the other branch is taken as the reference root.
const CBRT_COLLAPSE_EPS: f64 = 1e-10;

/// Relative residual tolerance for cubic root verification.
const RESIDUAL_TOL: f64 = 1e-6;

fn ensure_finite(name: &str, value: f64) -> Result<(), EquationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EquationError::non_finite(name, value))
    }
}

/// Solve the linear equation `a*x + b = 0`.
///
/// # Arguments
///
/// * `a` - Coefficient of `x`
/// * `b` - Constant term
///
/// # Returns
///
/// * `Ok(LinearSolution::Root(-b/a))` - `a` non-zero
/// * `Ok(LinearSolution::Infinite)` - `a == 0` and `b == 0`
/// * `Ok(LinearSolution::NoSolution)` - `a == 0` and `b != 0`
/// * `Err(EquationError::NonFiniteCoefficient)` - NaN or infinite input
///
/// # Example
///
/// ```
/// use calc_core::math::solvers::closed_form::solve_linear;
/// use calc_core::types::LinearSolution;
///
/// assert_eq!(solve_linear(2.0, -6.0).unwrap(), LinearSolution::Root(3.0));
/// ```
pub fn solve_linear(a: f64, b: f64) -> Result<LinearSolution, EquationError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;

    if a == 0.0 {
        if b == 0.0 {
            Ok(LinearSolution::Infinite)
        } else {
            Ok(LinearSolution::NoSolution)
        }
    } else {
        Ok(LinearSolution::Root(-b / a))
    }
}

/// Solve the quadratic equation `a*x^2 + b*x + c = 0`.
///
/// The discriminant `b^2 - 4ac` is computed exactly once and its sign
/// selects the variant. The sign test uses exact comparison against zero:
/// the discriminant is a single arithmetic expression, not an accumulated
/// approximation, so an epsilon band would only blur the repeated-root
/// case.
///
/// A zero leading coefficient degrades to [`solve_linear`] with `(b, c)`.
///
/// # Example
///
/// ```
/// use calc_core::math::solvers::closed_form::solve_quadratic;
/// use calc_core::types::QuadraticSolution;
///
/// // x^2 + 1 = 0 has a conjugate pair
/// match solve_quadratic(1.0, 0.0, 1.0).unwrap() {
///     QuadraticSolution::Complex { root1, root2, discriminant } => {
///         assert_eq!(discriminant, -4.0);
///         assert_eq!(root1.im, 1.0);
///         assert_eq!(root2, root1.conj());
///     }
///     other => panic!("expected complex pair, got {:?}", other),
/// }
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticSolution, EquationError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("c", c)?;

    if a == 0.0 {
        return Ok(QuadraticSolution::Degenerate(solve_linear(b, c)?));
    }

    let discriminant = b * b - 4.0 * a * c;

    if discriminant > 0.0 {
        let sqrt_disc = discriminant.sqrt();
        Ok(QuadraticSolution::RealDistinct {
            root1: (-b + sqrt_disc) / (2.0 * a),
            root2: (-b - sqrt_disc) / (2.0 * a),
            discriminant,
        })
    } else if discriminant == 0.0 {
        Ok(QuadraticSolution::RealRepeated {
            root: -b / (2.0 * a),
            discriminant,
        })
    } else {
        let real = -b / (2.0 * a);
        let imag = (-discriminant).sqrt() / (2.0 * a);
        let root1 = Complex64::new(real, imag);
        Ok(QuadraticSolution::Complex {
            root1,
            root2: root1.conj(),
            discriminant,
        })
    }
}

/// Solve the cubic equation `a*x^3 + b*x^2 + c*x + d = 0` by Cardano's
/// method.
///
/// The equation is normalised to the depressed form `t^3 + p*t + q = 0`
/// with `p = (3ac - b^2)/(3a^2)` and `q = (2b^3 - 9abc + 27a^2*d)/(27a^3)`.
/// The reference cube root is the principal complex cube root of whichever
/// of `-q/2 +- sqrt((q/2)^2 + (p/3)^3)` has the larger magnitude, guarding
/// against the loss of precision when one branch collapses to zero; its
/// partner is derived on the matching branch through `u*v = -p/3`. The
/// three roots follow from the primitive cube root of unity
/// `w = -1/2 + i*sqrt(3)/2`:
///
/// ```text
/// x1 = u + v - b/(3a)
/// x2 = w*u + w^2*v - b/(3a)
/// x3 = w^2*u + w*v - b/(3a)
/// ```
///
/// Every returned root is verified against the original cubic; a root
/// whose residual exceeds the scaled tolerance yields
/// `EquationError::RootVerificationFailed` instead of a silently wrong
/// result.
///
/// A zero leading coefficient degrades to [`solve_quadratic`] with
/// `(b, c, d)`.
///
/// # Example
///
/// ```
/// use calc_core::math::solvers::closed_form::solve_cubic;
/// use calc_core::types::CubicSolution;
///
/// // x^3 = 8: one real root 2 and a conjugate pair
/// match solve_cubic(1.0, 0.0, 0.0, -8.0).unwrap() {
///     CubicSolution::Roots { roots, .. } => {
///         assert!((roots[0].re - 2.0).abs() < 1e-9);
///         assert!(roots[0].im.abs() < 1e-9);
///         assert!((roots[1].im + roots[2].im).abs() < 1e-9);
///     }
///     other => panic!("expected three roots, got {:?}", other),
/// }
/// ```
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<CubicSolution, EquationError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("c", c)?;
    ensure_finite("d", d)?;

    if a == 0.0 {
        return Ok(CubicSolution::Degenerate(solve_quadratic(b, c, d)?));
    }

    // Depressed form t^3 + p*t + q = 0 via x = t - b/(3a)
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b.powi(3) - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a.powi(3));

    // Diagnostic discriminant of the depressed cubic; not used for branching
    let discriminant = -(4.0 * p.powi(3) + 27.0 * q * q);

    let inner = (q / 2.0) * (q / 2.0) + (p / 3.0).powi(3);
    let sqrt_inner = Complex64::new(inner, 0.0).sqrt();
    let s1 = Complex64::new(-q / 2.0, 0.0) + sqrt_inner;
    let s2 = Complex64::new(-q / 2.0, 0.0) - sqrt_inner;

    // Reference root from the larger branch; partner via u*v = -p/3
    let u = if s1.norm() >= s2.norm() {
        s1.cbrt()
    } else {
        s2.cbrt()
    };
    let (u, v) = if u.norm() < CBRT_COLLAPSE_EPS {
        // Both branches vanish only when p and q both vanish: triple root
        (Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0))
    } else {
        (u, Complex64::new(-p / 3.0, 0.0) / u)
    };

    let omega = Complex64::new(-0.5, 3.0_f64.sqrt() / 2.0);
    let omega_sq = omega * omega;
    let shift = b / (3.0 * a);

    let roots = [
        u + v - shift,
        omega * u + omega_sq * v - shift,
        omega_sq * u + omega * v - shift,
    ];

    // Flag branch-selection failures instead of silently accepting them
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
    for &root in &roots {
        let residual = (((a * root + b) * root + c) * root + d).norm();
        let bound = RESIDUAL_TOL * scale * (1.0 + root.norm()).powi(3);
        if residual > bound {
            return Err(EquationError::RootVerificationFailed {
                root_re: root.re,
                root_im: root.im,
                residual,
            });
        }
    }

    Ok(CubicSolution::Roots {
        roots,
        discriminant,
    })
}
