//! Optional TOML configuration for numeric defaults.
//!
//! Precedence is: command-line flag, then configuration file, then the
//! engine's built-in defaults. A missing configuration file is not an
//! error; the defaults simply apply.

use crate::Result;
use calc_core::math::calculus::{DEFAULT_STEP, DEFAULT_SUBDIVISIONS};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Root configuration structure (`calc.toml`).
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Iterative solver settings
    pub solver: SolverSection,
    /// Quadrature settings
    pub quadrature: QuadratureSection,
    /// Numerical differentiation settings
    pub calculus: CalculusSection,
}

/// `[solver]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSection {
    /// Convergence tolerance for Newton-Raphson searches
    pub tolerance: f64,
    /// Iteration budget per search
    pub max_iterations: usize,
    /// Starting guess for the first search
    pub initial_guess: f64,
}

impl Default for SolverSection {
    fn default() -> Self {
        let config: calc_core::math::solvers::SolverConfig<f64> = Default::default();
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            initial_guess: 1.0,
        }
    }
}

/// `[quadrature]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QuadratureSection {
    /// Number of subintervals for both composite rules
    pub subdivisions: usize,
}

impl Default for QuadratureSection {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
        }
    }
}

/// `[calculus]` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CalculusSection {
    /// Central-difference step width
    pub step: f64,
}

impl Default for CalculusSection {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

impl CalcConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("No configuration file at {}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        debug!("Loaded configuration from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_constants() {
        let config = CalcConfig::default();
        assert_eq!(config.solver.tolerance, 1e-10);
        assert_eq!(config.solver.max_iterations, 100);
        assert_eq!(config.solver.initial_guess, 1.0);
        assert_eq!(config.quadrature.subdivisions, 1000);
        assert_eq!(config.calculus.step, 1e-7);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: CalcConfig = toml::from_str(
            r#"
            [solver]
            max_iterations = 250
        "#,
        )
        .unwrap();
        assert_eq!(config.solver.max_iterations, 250);
        assert_eq!(config.solver.tolerance, 1e-10);
        assert_eq!(config.quadrature.subdivisions, 1000);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<CalcConfig, _> = toml::from_str(
            r#"
            [solver]
            tollerance = 1e-8
        "#,
        );
        assert!(result.is_err());
    }
}
