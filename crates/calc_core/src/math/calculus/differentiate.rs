//! Central-difference derivative approximation.

use crate::math::polynomial::Polynomial;
use num_traits::Float;

/// Default step width for the central difference.
///
/// The O(h^2) truncation error shrinks with the step while rounding error
/// grows as the two function values approach each other, so the default is
/// a fixed compromise rather than anything adaptive.
pub const DEFAULT_STEP: f64 = 1e-7;

/// Approximate `f'(x)` with the default step width.
///
/// See [`derivative_at_with_step`] for the formula.
///
/// # Example
///
/// ```
/// use calc_core::math::calculus::derivative_at;
/// use calc_core::math::polynomial::Polynomial;
///
/// // d/dx (x^2) at 3 is 6
/// let poly = Polynomial::<f64>::new(vec![0.0, 0.0, 1.0]).unwrap();
/// assert!((derivative_at(&poly, 3.0) - 6.0).abs() < 1e-5);
/// ```
#[inline]
pub fn derivative_at<T: Float>(poly: &Polynomial<T>, x: T) -> T {
    derivative_at_with_step(poly, x, T::from(DEFAULT_STEP).unwrap())
}

/// Approximate `f'(x)` by the central difference
/// `(f(x+h) - f(x-h)) / (2h)`.
///
/// Accuracy is O(h^2) for smooth functions. A step that is too small
/// triggers catastrophic cancellation between the two evaluations, one
/// that is too large inflates the truncation term.
///
/// # Panics
///
/// Panics if `h <= 0`.
#[inline]
pub fn derivative_at_with_step<T: Float>(poly: &Polynomial<T>, x: T, h: T) -> T {
    assert!(h > T::zero(), "step width must be positive");

    let two = T::from(2.0).unwrap();
    (poly.eval(x + h) - poly.eval(x - h)) / (two * h)
}
