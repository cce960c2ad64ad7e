//! Factorial, permutations, and combinations over exact 64-bit integers.
//!
//! Negative inputs are ruled out by the `u64` parameter types; the
//! remaining failure modes are `r > n` and overflow, both reported as
//! errors rather than wrapped or saturated.

use crate::error::CombinatoricsError;

/// Factorial `n!`.
///
/// Exact up to `20!`; larger inputs overflow `u64` and are rejected.
///
/// # Example
///
/// ```
/// use calc_functions::combinatorics::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u64) -> Result<u64, CombinatoricsError> {
    let mut result: u64 = 1;
    for k in 2..=n.max(1) {
        result = result
            .checked_mul(k)
            .ok_or(CombinatoricsError::Overflow)?;
    }
    Ok(result)
}

/// Permutations `P(n, r) = n! / (n - r)!`.
///
/// Computed as the falling product `n * (n-1) * ... * (n-r+1)` so that
/// values beyond `20!` remain reachable when the quotient fits.
///
/// # Errors
///
/// - `CombinatoricsError::InvalidSelection` when `r > n`
/// - `CombinatoricsError::Overflow` when the result exceeds `u64`
pub fn permutation(n: u64, r: u64) -> Result<u64, CombinatoricsError> {
    if r > n {
        return Err(CombinatoricsError::InvalidSelection { n, r });
    }
    let mut result: u64 = 1;
    for k in (n - r + 1)..=n {
        result = result
            .checked_mul(k)
            .ok_or(CombinatoricsError::Overflow)?;
    }
    Ok(result)
}

/// Combinations `C(n, r) = n! / (r! * (n - r)!)`.
///
/// Uses the multiplicative formula with stepwise exact division, so
/// intermediate values stay close to the final result instead of passing
/// through full factorials.
///
/// # Example
///
/// ```
/// use calc_functions::combinatorics::combination;
///
/// assert_eq!(combination(52, 5).unwrap(), 2_598_960);
/// ```
pub fn combination(n: u64, r: u64) -> Result<u64, CombinatoricsError> {
    if r > n {
        return Err(CombinatoricsError::InvalidSelection { n, r });
    }
    // C(n, r) == C(n, n - r); iterate over the smaller side
    let r = r.min(n - r);
    let mut result: u64 = 1;
    for k in 1..=r {
        // result * (n - r + k) is always divisible by k at this point
        result = result
            .checked_mul(n - r + k)
            .ok_or(CombinatoricsError::Overflow)?
            / k;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(10).unwrap(), 3_628_800);
    }

    #[test]
    fn test_factorial_largest_exact() {
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(factorial(21).unwrap_err(), CombinatoricsError::Overflow);
    }

    #[test]
    fn test_permutation() {
        assert_eq!(permutation(5, 2).unwrap(), 20);
        assert_eq!(permutation(10, 0).unwrap(), 1);
        assert_eq!(permutation(10, 10).unwrap(), factorial(10).unwrap());
    }

    #[test]
    fn test_permutation_invalid_selection() {
        assert_eq!(
            permutation(3, 4).unwrap_err(),
            CombinatoricsError::InvalidSelection { n: 3, r: 4 }
        );
    }

    #[test]
    fn test_combination() {
        assert_eq!(combination(5, 2).unwrap(), 10);
        assert_eq!(combination(10, 0).unwrap(), 1);
        assert_eq!(combination(10, 10).unwrap(), 1);
        assert_eq!(combination(52, 5).unwrap(), 2_598_960);
    }

    #[test]
    fn test_combination_symmetry() {
        assert_eq!(combination(20, 6).unwrap(), combination(20, 14).unwrap());
    }

    #[test]
    fn test_combination_beyond_factorial_range() {
        // 62! overflows, but C(62, 3) is tiny
        assert_eq!(combination(62, 3).unwrap(), 37_820);
    }

    #[test]
    fn test_zero_edge_cases() {
        assert_eq!(combination(0, 0).unwrap(), 1);
        assert_eq!(permutation(0, 0).unwrap(), 1);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_pascal_identity(n in 1u64..30, r in 1u64..30) {
                prop_assume!(r < n);
                // C(n, r) = C(n-1, r-1) + C(n-1, r)
                let lhs = combination(n, r).unwrap();
                let rhs = combination(n - 1, r - 1).unwrap() + combination(n - 1, r).unwrap();
                prop_assert_eq!(lhs, rhs);
            }

            #[test]
            fn prop_permutation_combination_relation(n in 0u64..15, r in 0u64..15) {
                prop_assume!(r <= n);
                // P(n, r) = C(n, r) * r!
                let perm = permutation(n, r).unwrap();
                let comb = combination(n, r).unwrap();
                prop_assert_eq!(perm, comb * factorial(r).unwrap());
            }
        }
    }
}
