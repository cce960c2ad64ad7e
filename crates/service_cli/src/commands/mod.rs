//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod differentiate;
pub mod eval;
pub mod integrate;
pub mod roots;
pub mod solve;
pub mod stats;
pub mod system;

use crate::{CliError, Result};
use num_complex::Complex64;

/// Parse a comma-separated list of numbers.
pub fn parse_numbers(input: &str, what: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidArgument(format!("Invalid {}: {}", what, token)))
        })
        .collect()
}

/// Parse a comma-separated list with an exact length requirement.
pub fn parse_fixed<const N: usize>(input: &str, what: &str) -> Result<[f64; N]> {
    let values = parse_numbers(input, what)?;
    values.try_into().map_err(|values: Vec<f64>| {
        CliError::InvalidArgument(format!(
            "Expected {} {} values, got {}",
            N,
            what,
            values.len()
        ))
    })
}

/// Render a complex number for table output.
pub fn format_complex(z: Complex64) -> String {
    if z.im == 0.0 {
        format!("{}", z.re)
    } else if z.im > 0.0 {
        format!("{} + {}i", z.re, z.im)
    } else {
        format!("{} - {}i", z.re, -z.im)
    }
}
