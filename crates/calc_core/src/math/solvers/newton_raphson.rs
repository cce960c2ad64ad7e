//! Newton-Raphson polynomial root finding.

use super::SolverConfig;
use crate::math::polynomial::Polynomial;
use num_traits::Float;

/// Derivative magnitude below which a Newton step is abandoned.
///
/// Dividing by a derivative smaller than this floor would blow the iterate
/// out to meaningless magnitudes, so the search stops and reports its last
/// iterate instead.
pub const DERIVATIVE_FLOOR: f64 = 1e-15;

/// Offset added to the starting guess between consecutive root searches.
const GUESS_INCREMENT: f64 = 0.5;

/// How a single Newton-Raphson search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// `|f(x)| < tolerance` was reached.
    Converged,

    /// `|f'(x)|` dropped below [`DERIVATIVE_FLOOR`]; the last iterate is
    /// reported as-is.
    DerivativeVanished,

    /// The iteration budget ran out before convergence.
    BudgetExhausted,
}

/// A root estimate from one Newton-Raphson search.
///
/// Returned by [`PolynomialRootFinder::find_roots_detailed`]. The plain
/// [`PolynomialRootFinder::find_roots`] surface discards the diagnostics
/// and returns bare values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate<T: Float> {
    /// The final iterate of the search.
    pub value: T,

    /// How the search ended.
    pub outcome: Convergence,

    /// Number of Newton steps taken before the search ended.
    pub iterations: usize,
}

impl<T: Float> RootEstimate<T> {
    /// Whether the search satisfied the convergence tolerance.
    #[inline]
    pub fn converged(&self) -> bool {
        self.outcome == Convergence::Converged
    }
}

/// Newton-Raphson root finder for polynomials.
///
/// Uses Newton's iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` with the
/// polynomial's exact derivative. For a polynomial of nominal degree `n`
/// it performs exactly `n` independent searches, offsetting the starting
/// guess by 0.5 after each one as a deflation-free diversification
/// heuristic.
///
/// # Known limitations
///
/// The finder does not deflate the polynomial by dividing out found
/// roots, so duplicate estimates may be reported and distinct roots may
/// be missed for higher-degree polynomials. A search that exhausts its
/// iteration budget or hits a vanishing derivative still contributes its
/// last iterate, unflagged, to the result of [`find_roots`]; callers that
/// need to tell success from failure should use
/// [`find_roots_detailed`] or re-evaluate the polynomial at each
/// estimate.
///
/// [`find_roots`]: PolynomialRootFinder::find_roots
/// [`find_roots_detailed`]: PolynomialRootFinder::find_roots_detailed
///
/// # Example
///
/// ```
/// use calc_core::math::polynomial::Polynomial;
/// use calc_core::math::solvers::{PolynomialRootFinder, SolverConfig};
///
/// // x^2 - 2
/// let poly = Polynomial::new(vec![-2.0, 0.0, 1.0]).unwrap();
/// let finder = PolynomialRootFinder::new(SolverConfig::default());
///
/// let roots = finder.find_roots(&poly);
/// assert_eq!(roots.len(), 2);
/// assert!(roots.iter().any(|&x| (x - std::f64::consts::SQRT_2).abs() < 1e-9));
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialRootFinder<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
    /// Starting guess for the first search
    initial_guess: T,
}

impl<T: Float> PolynomialRootFinder<T> {
    /// Create a new root finder with the given configuration.
    ///
    /// The first search starts from 1.0; use [`with_initial_guess`] to
    /// override.
    ///
    /// [`with_initial_guess`]: PolynomialRootFinder::with_initial_guess
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            initial_guess: T::one(),
        }
    }

    /// Create a root finder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Override the starting guess for the first search.
    pub fn with_initial_guess(mut self, guess: T) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find approximate real roots of `poly`.
    ///
    /// Performs one search per nominal degree and returns the final
    /// iterate of every search, converged or not. A degree-0 polynomial
    /// yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::math::polynomial::Polynomial;
    /// use calc_core::math::solvers::PolynomialRootFinder;
    ///
    /// // x^3 - 8 has one real root at 2
    /// let poly = Polynomial::<f64>::new(vec![-8.0, 0.0, 0.0, 1.0]).unwrap();
    /// let roots = PolynomialRootFinder::with_defaults().find_roots(&poly);
    ///
    /// assert_eq!(roots.len(), 3);
    /// assert!(roots.iter().any(|&x| (x - 2.0).abs() < 1e-6));
    /// ```
    pub fn find_roots(&self, poly: &Polynomial<T>) -> Vec<T> {
        self.find_roots_detailed(poly)
            .into_iter()
            .map(|estimate| estimate.value)
            .collect()
    }

    /// Find approximate real roots with per-search diagnostics.
    ///
    /// Identical to [`find_roots`](PolynomialRootFinder::find_roots) but
    /// each estimate carries its convergence outcome and step count.
    pub fn find_roots_detailed(&self, poly: &Polynomial<T>) -> Vec<RootEstimate<T>> {
        let derivative = poly.derivative();
        let increment = T::from(GUESS_INCREMENT).unwrap();

        let mut guess = self.initial_guess;
        let mut estimates = Vec::with_capacity(poly.degree());
        for _search in 0..poly.degree() {
            estimates.push(self.search(poly, &derivative, guess));
            guess = guess + increment;
        }
        estimates
    }

    /// Run a single Newton-Raphson search from `x0`.
    fn search(&self, poly: &Polynomial<T>, derivative: &Polynomial<T>, x0: T) -> RootEstimate<T> {
        let floor = T::from(DERIVATIVE_FLOOR).unwrap();
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = poly.eval(x);
            if f_val.abs() < self.config.tolerance {
                return RootEstimate {
                    value: x,
                    outcome: Convergence::Converged,
                    iterations: iteration,
                };
            }

            let f_prime_val = derivative.eval(x);
            if f_prime_val.abs() < floor {
                return RootEstimate {
                    value: x,
                    outcome: Convergence::DerivativeVanished,
                    iterations: iteration,
                };
            }

            x = x - f_val / f_prime_val;
        }

        RootEstimate {
            value: x,
            outcome: Convergence::BudgetExhausted,
            iterations: self.config.max_iterations,
        }
    }
}
