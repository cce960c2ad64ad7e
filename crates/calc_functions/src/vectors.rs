//! Vector magnitude, products, and angles.

use crate::error::VectorError;
use crate::trigonometry::AngleMode;

/// Euclidean magnitude of a vector of any dimension.
#[inline]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Dot product of two vectors.
///
/// # Errors
///
/// `VectorError::DimensionMismatch` when the operands differ in length.
pub fn dot(u: &[f64], v: &[f64]) -> Result<f64, VectorError> {
    if u.len() != v.len() {
        return Err(VectorError::DimensionMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    Ok(u.iter().zip(v).map(|(a, b)| a * b).sum())
}

/// Cross product of two 3-D vectors.
///
/// The dimension requirement is enforced by the parameter types.
#[inline]
pub fn cross(u: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Angle between two vectors, in the given mode.
///
/// The cosine is clamped into [-1, 1] before the inverse cosine so that
/// rounding on near-parallel vectors cannot leave the domain.
///
/// # Errors
///
/// - `VectorError::DimensionMismatch` when the operands differ in length
/// - `VectorError::ZeroMagnitude` when either operand has magnitude zero
pub fn angle_between(u: &[f64], v: &[f64], mode: AngleMode) -> Result<f64, VectorError> {
    let dot_product = dot(u, v)?;
    let mag_u = magnitude(u);
    let mag_v = magnitude(v);

    if mag_u == 0.0 || mag_v == 0.0 {
        return Err(VectorError::ZeroMagnitude);
    }

    let cos_angle = (dot_product / (mag_u * mag_v)).clamp(-1.0, 1.0);
    Ok(mode.from_radians(cos_angle.acos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&[0.0, 0.0, 0.0]), 0.0);
        assert_abs_diff_eq!(magnitude(&[1.0, 1.0, 1.0, 1.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]).unwrap(), 12.0);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        assert_eq!(
            dot(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err(),
            VectorError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_cross_basis_vectors() {
        // x cross y = z
        let result = cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(result, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cross_anticommutative() {
        let u = [2.0, -1.0, 3.0];
        let v = [0.5, 4.0, -2.0];
        let uv = cross(u, v);
        let vu = cross(v, u);
        for i in 0..3 {
            assert_eq!(uv[i], -vu[i]);
        }
    }

    #[test]
    fn test_cross_is_orthogonal_to_operands() {
        let u = [1.0, 2.0, 3.0];
        let v = [-2.0, 0.5, 1.0];
        let w = cross(u, v);
        assert_abs_diff_eq!(dot(&u, &w).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(&v, &w).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_between_orthogonal() {
        let angle = angle_between(&[1.0, 0.0], &[0.0, 1.0], AngleMode::Degrees).unwrap();
        assert_abs_diff_eq!(angle, 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_between_parallel_is_zero() {
        let angle = angle_between(&[2.0, 2.0], &[4.0, 4.0], AngleMode::Radians).unwrap();
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_angle_between_zero_vector_rejected() {
        assert_eq!(
            angle_between(&[0.0, 0.0], &[1.0, 1.0], AngleMode::Degrees).unwrap_err(),
            VectorError::ZeroMagnitude
        );
    }
}
