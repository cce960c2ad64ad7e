//! Composite trapezoid and Simpson quadrature.

use crate::math::polynomial::Polynomial;
use num_traits::Float;

/// Default number of subintervals for both composite rules.
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

/// Integrate `poly` over `[a, b]` with the composite trapezoid rule.
///
/// Partitions the interval into `n` equal subintervals, sums the interior
/// nodes with both endpoints half-weighted, and scales by the step width
/// `h = (b - a) / n`. O(n) evaluations with O(h^2) error for smooth
/// integrands. A reversed interval (`b < a`) yields the negated integral,
/// as usual.
///
/// # Panics
///
/// Panics if `n == 0`.
///
/// # Example
///
/// ```
/// use calc_core::math::calculus::{integrate_trapezoid, DEFAULT_SUBDIVISIONS};
/// use calc_core::math::polynomial::Polynomial;
///
/// // Integral of x^2 over [0, 1] is 1/3
/// let poly = Polynomial::<f64>::new(vec![0.0, 0.0, 1.0]).unwrap();
/// let integral = integrate_trapezoid(&poly, 0.0, 1.0, DEFAULT_SUBDIVISIONS);
/// assert!((integral - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn integrate_trapezoid<T: Float>(poly: &Polynomial<T>, a: T, b: T, n: usize) -> T {
    assert!(n > 0, "subinterval count must be positive");

    let two = T::from(2.0).unwrap();
    let h = (b - a) / T::from(n).unwrap();

    let mut sum = (poly.eval(a) + poly.eval(b)) / two;
    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        sum = sum + poly.eval(x);
    }
    sum * h
}

/// Integrate `poly` over `[a, b]` with the composite Simpson rule.
///
/// Requires an even subinterval count; an odd `n` is incremented by one to
/// force parity. Endpoints are weighted 1, odd-indexed interior nodes 4,
/// even-indexed interior nodes 2, and the weighted sum is scaled by `h/3`.
/// O(h^4) error for smooth integrands and exact for polynomials of degree
/// at most 3.
///
/// # Panics
///
/// Panics if `n == 0`.
///
/// # Example
///
/// ```
/// use calc_core::math::calculus::integrate_simpson;
/// use calc_core::math::polynomial::Polynomial;
///
/// // Simpson is exact on cubics: integral of x^3 over [0, 2] is 4
/// let poly = Polynomial::<f64>::new(vec![0.0, 0.0, 0.0, 1.0]).unwrap();
/// let integral = integrate_simpson(&poly, 0.0, 2.0, 10);
/// assert!((integral - 4.0).abs() < 1e-9);
/// ```
pub fn integrate_simpson<T: Float>(poly: &Polynomial<T>, a: T, b: T, n: usize) -> T {
    assert!(n > 0, "subinterval count must be positive");

    // Simpson pairs subintervals; force an even count
    let n = if n % 2 == 1 { n + 1 } else { n };

    let three = T::from(3.0).unwrap();
    let four = T::from(4.0).unwrap();
    let two = T::from(2.0).unwrap();
    let h = (b - a) / T::from(n).unwrap();

    let mut sum = poly.eval(a) + poly.eval(b);
    for i in 1..n {
        let x = a + T::from(i).unwrap() * h;
        let weight = if i % 2 == 1 { four } else { two };
        sum = sum + weight * poly.eval(x);
    }
    sum * h / three
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Closed-form integral of `poly` over `[a, b]` via the antiderivative.
    fn exact_integral(poly: &Polynomial<f64>, a: f64, b: f64) -> f64 {
        let antiderivative = |x: f64| -> f64 {
            poly.coefficients()
                .iter()
                .enumerate()
                .map(|(k, &coef)| coef * x.powi(k as i32 + 1) / (k as f64 + 1.0))
                .sum()
        };
        antiderivative(b) - antiderivative(a)
    }

    #[test]
    fn test_trapezoid_x_squared() {
        let poly = Polynomial::new(vec![0.0, 0.0, 1.0]).unwrap();
        let integral = integrate_trapezoid(&poly, 0.0, 1.0, 1000);
        assert_abs_diff_eq!(integral, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_trapezoid_exact_for_linear() {
        // Trapezoid is exact on straight lines even with one subinterval
        let poly = Polynomial::new(vec![1.0, 2.0]).unwrap();
        let integral = integrate_trapezoid(&poly, -1.0, 3.0, 1);
        assert_relative_eq!(integral, exact_integral(&poly, -1.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_trapezoid_reversed_interval_negates() {
        let poly = Polynomial::new(vec![0.0, 0.0, 1.0]).unwrap();
        let forward = integrate_trapezoid(&poly, 0.0, 2.0, 500);
        let backward = integrate_trapezoid(&poly, 2.0, 0.0, 500);
        assert_abs_diff_eq!(forward, -backward, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_exact_for_cubic() {
        // x^3 - 2x^2 + x - 5 over [-1, 2]
        let poly = Polynomial::new(vec![-5.0, 1.0, -2.0, 1.0]).unwrap();
        let integral = integrate_simpson(&poly, -1.0, 2.0, 2);
        assert_relative_eq!(
            integral,
            exact_integral(&poly, -1.0, 2.0),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_simpson_odd_count_bumped_to_even() {
        // n = 3 is treated as n = 4; still exact for cubics
        let poly = Polynomial::new(vec![0.0, 0.0, 0.0, 1.0]).unwrap();
        let integral = integrate_simpson(&poly, 0.0, 2.0, 3);
        assert_relative_eq!(integral, 4.0, max_relative = 1e-9);
    }

    #[test]
    fn test_simpson_quartic_converges() {
        // Not exact on x^4, but tight at n = 1000
        let poly = Polynomial::new(vec![0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let integral = integrate_simpson(&poly, 0.0, 1.0, 1000);
        assert_abs_diff_eq!(integral, 0.2, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_width_interval() {
        let poly = Polynomial::new(vec![1.0, 1.0]).unwrap();
        assert_eq!(integrate_trapezoid(&poly, 2.0, 2.0, 10), 0.0);
        assert_eq!(integrate_simpson(&poly, 2.0, 2.0, 10), 0.0);
    }

    #[test]
    #[should_panic(expected = "subinterval count must be positive")]
    fn test_trapezoid_zero_subintervals_panics() {
        let poly = Polynomial::constant(1.0);
        integrate_trapezoid(&poly, 0.0, 1.0, 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn cubic_strategy() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-10.0..10.0_f64, 1..5)
        }

        proptest! {
            #[test]
            fn prop_simpson_exact_up_to_degree_three(
                coeffs in cubic_strategy(),
                a in -5.0..0.0_f64,
                b in 0.0..5.0_f64,
            ) {
                let poly = Polynomial::new(coeffs).unwrap();
                let numeric = integrate_simpson(&poly, a, b, 100);
                let exact = exact_integral(&poly, a, b);
                prop_assert!(
                    (numeric - exact).abs() <= 1e-9 * (1.0 + exact.abs()),
                    "simpson {} vs exact {}",
                    numeric,
                    exact
                );
            }

            #[test]
            fn prop_trapezoid_interval_additivity(
                coeffs in cubic_strategy(),
                mid in -1.0..1.0_f64,
            ) {
                let poly = Polynomial::new(coeffs).unwrap();
                let whole = integrate_trapezoid(&poly, -2.0, 2.0, 2000);
                let left = integrate_trapezoid(&poly, -2.0, mid, 1000);
                let right = integrate_trapezoid(&poly, mid, 2.0, 1000);
                prop_assert!(
                    (whole - (left + right)).abs() < 2e-3 * (1.0 + whole.abs()),
                    "whole {} vs split {}",
                    whole,
                    left + right
                );
            }
        }
    }
}
