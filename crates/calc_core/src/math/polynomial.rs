//! Polynomial evaluation and exact differentiation.

use crate::types::PolynomialError;
use num_traits::Float;

/// A polynomial stored as an ordered coefficient sequence.
///
/// The sequence `[a0, a1, ..., an]` represents `a0 + a1*x + ... + an*x^n`.
/// The sequence is never empty: a polynomial of degree 0 is the constant
/// `a0`. Instances are immutable once constructed; differentiation
/// produces a new polynomial.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use calc_core::math::polynomial::Polynomial;
///
/// // 5 + 3x + 2x^2
/// let poly = Polynomial::new(vec![5.0, 3.0, 2.0]).unwrap();
/// assert_eq!(poly.degree(), 2);
/// assert_eq!(poly.eval(2.0), 19.0);
/// assert_eq!(poly.derivative().coefficients(), &[3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Float> {
    /// Coefficients in ascending degree order, never empty
    coeffs: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Construct a polynomial from coefficients in ascending degree order.
    ///
    /// # Arguments
    ///
    /// * `coeffs` - Coefficient sequence `[a0, a1, ..., an]`
    ///
    /// # Returns
    ///
    /// * `Ok(Polynomial)` - Successfully constructed polynomial
    /// * `Err(PolynomialError::EmptyCoefficients)` - Empty sequence
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::math::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(vec![1.0, 0.0, -2.0]).unwrap();
    /// assert_eq!(poly.degree(), 2);
    ///
    /// assert!(Polynomial::<f64>::new(vec![]).is_err());
    /// ```
    pub fn new(coeffs: Vec<T>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// Construct the degree-0 polynomial with the given constant value.
    pub fn constant(value: T) -> Self {
        Self {
            coeffs: vec![value],
        }
    }

    /// Returns the coefficients in ascending degree order.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the nominal degree (coefficient count minus one).
    ///
    /// Trailing zero coefficients are not stripped, so `[1, 0]` reports
    /// degree 1 even though it is the constant 1.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    ///
    /// Folds the coefficients from the highest degree down to the constant
    /// term as `acc = acc*x + coef`: O(n) multiplications and numerically
    /// stable for well-scaled coefficients. No special handling is needed
    /// for zero or negative `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::math::polynomial::Polynomial;
    ///
    /// // x^3 - 8 at x = 2
    /// let poly = Polynomial::new(vec![-8.0, 0.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(poly.eval(2.0), 0.0);
    /// ```
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &coef| acc * x + coef)
    }

    /// Returns the first derivative as a new polynomial.
    ///
    /// For `[a0, a1, ..., an]` with `n >= 1` the result is
    /// `[1*a1, 2*a2, ..., n*an]` (length n). The derivative of a constant
    /// is the zero polynomial `[0]`. This is an exact closed-form
    /// transform, not an approximation.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::math::polynomial::Polynomial;
    ///
    /// let poly = Polynomial::new(vec![5.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(poly.derivative().coefficients(), &[3.0, 4.0]);
    ///
    /// let constant = Polynomial::constant(7.0);
    /// assert_eq!(constant.derivative().coefficients(), &[0.0]);
    /// ```
    pub fn derivative(&self) -> Polynomial<T> {
        if self.coeffs.len() <= 1 {
            return Polynomial::constant(T::zero());
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(power, &coef)| T::from(power).unwrap() * coef)
            .collect();
        Polynomial { coeffs }
    }
}
