//! Roots command implementation
//!
//! Newton-Raphson polynomial root finding with config-driven defaults.

use super::parse_numbers;
use crate::config::CalcConfig;
use crate::{OutputFormat, Result};
use calc_core::math::polynomial::Polynomial;
use calc_core::math::solvers::{PolynomialRootFinder, SolverConfig};
use tracing::{info, warn};

/// Run the roots command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    coeffs: &str,
    guess: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<usize>,
    detailed: bool,
    config: &CalcConfig,
    format: OutputFormat,
) -> Result<()> {
    let coefficients = parse_numbers(coeffs, "coefficient")?;
    let poly = Polynomial::new(coefficients)?;

    let solver_config = SolverConfig {
        tolerance: tolerance.unwrap_or(config.solver.tolerance),
        max_iterations: max_iterations.unwrap_or(config.solver.max_iterations),
    };
    let finder = PolynomialRootFinder::new(solver_config)
        .with_initial_guess(guess.unwrap_or(config.solver.initial_guess));

    info!(
        "Searching {} roots with tolerance {:e}",
        poly.degree(),
        solver_config.tolerance
    );

    let estimates = finder.find_roots_detailed(&poly);
    let non_converged = estimates.iter().filter(|e| !e.converged()).count();
    if non_converged > 0 {
        warn!("{} of {} searches did not converge", non_converged, estimates.len());
    }

    match format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = estimates
                .iter()
                .map(|e| {
                    if detailed {
                        serde_json::json!({
                            "value": e.value,
                            "converged": e.converged(),
                            "iterations": e.iterations,
                        })
                    } else {
                        serde_json::json!(e.value)
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Table => {
            for (idx, estimate) in estimates.iter().enumerate() {
                if detailed {
                    println!(
                        "x{} = {} ({:?}, {} iterations)",
                        idx + 1,
                        estimate.value,
                        estimate.outcome,
                        estimate.iterations
                    );
                } else {
                    println!("x{} = {}", idx + 1, estimate.value);
                }
            }
        }
    }
    Ok(())
}
