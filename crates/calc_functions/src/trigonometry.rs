//! Trigonometric, inverse-trigonometric, and hyperbolic functions with
//! degree/radian mode handling.
//!
//! Forward functions interpret their input according to the mode; inverse
//! functions compute in radians and convert the *output* according to the
//! mode, matching the calculator convention.

use crate::error::DomainError;
use std::str::FromStr;

/// Angle interpretation for trigonometric input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Angles in degrees (calculator default)
    #[default]
    Degrees,
    /// Angles in radians
    Radians,
}

impl AngleMode {
    /// Convert an angle in this mode to radians.
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }

    /// Convert an angle in radians to this mode.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => radians.to_degrees(),
            AngleMode::Radians => radians,
        }
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radians" => Ok(AngleMode::Radians),
            other => Err(format!("Unknown angle mode: {}", other)),
        }
    }
}

/// Sine of an angle in the given mode.
#[inline]
pub fn sin(angle: f64, mode: AngleMode) -> f64 {
    mode.to_radians(angle).sin()
}

/// Cosine of an angle in the given mode.
#[inline]
pub fn cos(angle: f64, mode: AngleMode) -> f64 {
    mode.to_radians(angle).cos()
}

/// Tangent of an angle in the given mode.
///
/// No pole detection: near 90 degrees the result is merely very large,
/// like on a hand calculator.
#[inline]
pub fn tan(angle: f64, mode: AngleMode) -> f64 {
    mode.to_radians(angle).tan()
}

/// Inverse sine; the result is an angle in the given mode.
///
/// # Errors
///
/// `DomainError::InverseTrigOutOfRange` when `value` is outside [-1, 1].
pub fn asin(value: f64, mode: AngleMode) -> Result<f64, DomainError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(DomainError::InverseTrigOutOfRange { value });
    }
    Ok(mode.from_radians(value.asin()))
}

/// Inverse cosine; the result is an angle in the given mode.
///
/// # Errors
///
/// `DomainError::InverseTrigOutOfRange` when `value` is outside [-1, 1].
pub fn acos(value: f64, mode: AngleMode) -> Result<f64, DomainError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(DomainError::InverseTrigOutOfRange { value });
    }
    Ok(mode.from_radians(value.acos()))
}

/// Inverse tangent; the result is an angle in the given mode.
#[inline]
pub fn atan(value: f64, mode: AngleMode) -> f64 {
    mode.from_radians(value.atan())
}

/// Hyperbolic sine.
#[inline]
pub fn sinh(value: f64) -> f64 {
    value.sinh()
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh(value: f64) -> f64 {
    value.cosh()
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh(value: f64) -> f64 {
    value.tanh()
}
