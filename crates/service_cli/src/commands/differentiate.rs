//! Differentiate command implementation
//!
//! Central-difference derivative of a polynomial at a point, with the
//! exact derivative transform reported alongside for reference.

use super::parse_numbers;
use crate::config::CalcConfig;
use crate::{CliError, OutputFormat, Result};
use calc_core::math::calculus::derivative_at_with_step;
use calc_core::math::polynomial::Polynomial;
use tracing::info;

/// Run the differentiate command.
pub fn run(
    coeffs: &str,
    at: f64,
    step: Option<f64>,
    config: &CalcConfig,
    format: OutputFormat,
) -> Result<()> {
    let coefficients = parse_numbers(coeffs, "coefficient")?;
    let poly = Polynomial::new(coefficients)?;
    let h = step.unwrap_or(config.calculus.step);
    if h <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Step width must be positive, got {}",
            h
        )));
    }

    info!("Central difference at x = {} with step {:e}", at, h);
    let numeric = derivative_at_with_step(&poly, at, h);
    let exact = poly.derivative().eval(at);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "numeric": numeric,
                    "exact": exact,
                    "step": h,
                }))?
            );
        }
        OutputFormat::Table => {
            println!("p'({}) ~ {} (central difference, h = {:e})", at, numeric, h);
            println!("p'({}) = {} (exact transform)", at, exact);
        }
    }
    Ok(())
}
