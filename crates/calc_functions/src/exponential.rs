//! Logarithms, exponentials, powers, and square roots with domain checks.

use crate::error::{ArithmeticError, DomainError};

/// Logarithm of `value` in an arbitrary `base`.
///
/// # Errors
///
/// - `DomainError::NonPositiveLog` when `value <= 0`
/// - `DomainError::InvalidLogBase` when `base <= 0` or `base == 1`
///
/// # Example
///
/// ```
/// use calc_functions::exponential::log;
///
/// assert_eq!(log(8.0, 2.0).unwrap(), 3.0);
/// assert!(log(-1.0, 10.0).is_err());
/// ```
pub fn log(value: f64, base: f64) -> Result<f64, DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLog { value });
    }
    if base <= 0.0 || base == 1.0 {
        return Err(DomainError::InvalidLogBase { base });
    }
    Ok(value.log(base))
}

/// Natural logarithm.
pub fn ln(value: f64) -> Result<f64, DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLog { value });
    }
    Ok(value.ln())
}

/// Base-10 logarithm.
pub fn log10(value: f64) -> Result<f64, DomainError> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLog { value });
    }
    Ok(value.log10())
}

/// Natural exponential `e^value`.
///
/// # Errors
///
/// `ArithmeticError::Overflow` when the result leaves the finite range.
pub fn exp(value: f64) -> Result<f64, ArithmeticError> {
    let result = value.exp();
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ArithmeticError::Overflow)
    }
}

/// `base` raised to `exponent`.
///
/// # Errors
///
/// `ArithmeticError::Overflow` when the result is not finite.
pub fn power(base: f64, exponent: f64) -> Result<f64, ArithmeticError> {
    let result = base.powf(exponent);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ArithmeticError::Overflow)
    }
}

/// Square root.
///
/// # Errors
///
/// `DomainError::NegativeSqrt` when `value < 0`.
pub fn sqrt(value: f64) -> Result<f64, DomainError> {
    if value < 0.0 {
        return Err(DomainError::NegativeSqrt { value });
    }
    Ok(value.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_log_arbitrary_base() {
        assert_abs_diff_eq!(log(8.0, 2.0).unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(log(81.0, 3.0).unwrap(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_rejects_non_positive_value() {
        assert!(matches!(
            log(0.0, 10.0).unwrap_err(),
            DomainError::NonPositiveLog { .. }
        ));
        assert!(log(-5.0, 10.0).is_err());
    }

    #[test]
    fn test_log_rejects_bad_base() {
        assert!(matches!(
            log(10.0, 1.0).unwrap_err(),
            DomainError::InvalidLogBase { .. }
        ));
        assert!(log(10.0, 0.0).is_err());
        assert!(log(10.0, -2.0).is_err());
    }

    #[test]
    fn test_ln_and_log10() {
        assert_abs_diff_eq!(ln(std::f64::consts::E).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(log10(1000.0).unwrap(), 3.0, epsilon = 1e-12);
        assert!(ln(0.0).is_err());
    }

    #[test]
    fn test_exp_and_ln_inverse() {
        for &x in &[-3.0, 0.0, 1.0, 10.0] {
            assert_abs_diff_eq!(ln(exp(x).unwrap()).unwrap(), x, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_exp_overflow() {
        assert_eq!(exp(1000.0).unwrap_err(), ArithmeticError::Overflow);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0).unwrap(), 1024.0);
        assert!(power(10.0, 400.0).is_err());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(49.0).unwrap(), 7.0);
        assert_eq!(sqrt(0.0).unwrap(), 0.0);
        assert!(matches!(
            sqrt(-1.0).unwrap_err(),
            DomainError::NegativeSqrt { .. }
        ));
    }
}
