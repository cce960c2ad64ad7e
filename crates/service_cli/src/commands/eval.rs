//! Eval command implementation
//!
//! Horner evaluation of a polynomial at a point.

use super::parse_numbers;
use crate::{OutputFormat, Result};
use calc_core::math::polynomial::Polynomial;
use tracing::info;

/// Run the eval command.
pub fn run(coeffs: &str, at: f64, format: OutputFormat) -> Result<()> {
    let coefficients = parse_numbers(coeffs, "coefficient")?;
    let poly = Polynomial::new(coefficients)?;

    info!("Evaluating degree-{} polynomial at x = {}", poly.degree(), at);
    let value = poly.eval(at);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Table => println!("p({}) = {}", at, value),
    }
    Ok(())
}
