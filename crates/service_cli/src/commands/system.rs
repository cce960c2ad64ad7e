//! System command implementations
//!
//! Direct 2x2 and 3x3 linear-system solvers.

use super::parse_fixed;
use crate::{OutputFormat, Result};
use calc_core::math::linear_system::{solve_2x2, solve_3x3};
use calc_core::types::{System2Solution, System3Solution};
use tracing::info;

/// Run the 2x2 system solver.
pub fn run_2x2(entries: &str, format: OutputFormat) -> Result<()> {
    let [a1, b1, c1, a2, b2, c2] = parse_fixed::<6>(entries, "coefficient")?;

    info!("Solving {}x + {}y = {}, {}x + {}y = {}", a1, b1, c1, a2, b2, c2);
    let solution = solve_2x2(a1, b1, c1, a2, b2, c2)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Table => match solution {
            System2Solution::Unique { x, y } => {
                println!("x = {}", x);
                println!("y = {}", y);
            }
            System2Solution::NoUniqueSolution => {
                println!("No unique solution (lines are parallel or identical)");
            }
        },
    }
    Ok(())
}

/// Run the 3x3 system solver.
pub fn run_3x3(matrix: &str, constants: &str, format: OutputFormat) -> Result<()> {
    let m = parse_fixed::<9>(matrix, "matrix entry")?;
    let k = parse_fixed::<3>(constants, "constant")?;

    let coefficient_matrix = [
        [m[0], m[1], m[2]],
        [m[3], m[4], m[5]],
        [m[6], m[7], m[8]],
    ];

    info!("Solving 3x3 system by Cramer's rule");
    let solution = solve_3x3(coefficient_matrix, k)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Table => match solution {
            System3Solution::Unique { x, y, z } => {
                println!("x = {}", x);
                println!("y = {}", y);
                println!("z = {}", z);
            }
            System3Solution::NoUniqueSolution => {
                println!("No unique solution (coefficient determinant is zero)");
            }
        },
    }
    Ok(())
}
