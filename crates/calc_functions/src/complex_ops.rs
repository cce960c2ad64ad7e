//! Complex-number arithmetic, polar conversion, and integer powers.
//!
//! Thin wrappers over `num_complex` that add the zero-divisor check and
//! keep the calculator surface uniform with the other operation families.

use crate::error::ComplexError;
use num_complex::Complex64;

/// Complex addition.
#[inline]
pub fn add(z1: Complex64, z2: Complex64) -> Complex64 {
    z1 + z2
}

/// Complex subtraction.
#[inline]
pub fn sub(z1: Complex64, z2: Complex64) -> Complex64 {
    z1 - z2
}

/// Complex multiplication.
#[inline]
pub fn mul(z1: Complex64, z2: Complex64) -> Complex64 {
    z1 * z2
}

/// Complex division.
///
/// # Errors
///
/// `ComplexError::DivisionByZero` when `z2 == 0`.
pub fn div(z1: Complex64, z2: Complex64) -> Result<Complex64, ComplexError> {
    if z2 == Complex64::new(0.0, 0.0) {
        return Err(ComplexError::DivisionByZero);
    }
    Ok(z1 / z2)
}

/// Convert to polar form `(magnitude, angle)` with the angle in radians.
#[inline]
pub fn to_polar(z: Complex64) -> (f64, f64) {
    z.to_polar()
}

/// Build a complex number from polar form.
#[inline]
pub fn from_polar(magnitude: f64, angle: f64) -> Complex64 {
    Complex64::from_polar(magnitude, angle)
}

/// Integer power by De Moivre's formula.
#[inline]
pub fn powi(z: Complex64, exponent: i32) -> Complex64 {
    z.powi(exponent)
}
