//! Integrate command implementation
//!
//! Composite trapezoid and Simpson quadrature over a polynomial.

use super::parse_numbers;
use crate::config::CalcConfig;
use crate::{CliError, OutputFormat, Result};
use calc_core::math::calculus::{integrate_simpson, integrate_trapezoid};
use calc_core::math::polynomial::Polynomial;
use clap::ValueEnum;
use tracing::info;

/// Quadrature rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rule {
    /// Composite trapezoid rule (O(h^2))
    Trapezoid,
    /// Composite Simpson rule (O(h^4), exact on cubics)
    Simpson,
}

/// Run the integrate command.
pub fn run(
    coeffs: &str,
    a: f64,
    b: f64,
    rule: Rule,
    subdivisions: Option<usize>,
    config: &CalcConfig,
    format: OutputFormat,
) -> Result<()> {
    let coefficients = parse_numbers(coeffs, "coefficient")?;
    let poly = Polynomial::new(coefficients)?;
    let n = subdivisions.unwrap_or(config.quadrature.subdivisions);
    if n == 0 {
        return Err(CliError::InvalidArgument(
            "Subinterval count must be positive".to_string(),
        ));
    }

    info!("Integrating over [{}, {}] with {} subintervals", a, b, n);
    let integral = match rule {
        Rule::Trapezoid => integrate_trapezoid(&poly, a, b, n),
        Rule::Simpson => integrate_simpson(&poly, a, b, n),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "rule": format!("{:?}", rule),
                    "a": a,
                    "b": b,
                    "subdivisions": n,
                    "integral": integral,
                }))?
            );
        }
        OutputFormat::Table => println!("Integral = {}", integral),
    }
    Ok(())
}
