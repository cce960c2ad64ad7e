//! Solve command implementation
//!
//! Closed-form linear, quadratic, and cubic solvers from `calc_core`.

use super::format_complex;
use crate::{OutputFormat, Result};
use calc_core::math::solvers::closed_form;
use calc_core::types::{CubicSolution, LinearSolution, QuadraticSolution};
use tracing::info;

/// Run the linear solver.
pub fn linear(a: f64, b: f64, format: OutputFormat) -> Result<()> {
    info!("Solving {}x + {} = 0", a, b);
    let solution = closed_form::solve_linear(a, b)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Table => match solution {
            LinearSolution::Root(x) => println!("x = {}", x),
            LinearSolution::Infinite => println!("All numbers are solutions"),
            LinearSolution::NoSolution => println!("No solution exists"),
        },
    }
    Ok(())
}

/// Run the quadratic solver.
pub fn quadratic(a: f64, b: f64, c: f64, format: OutputFormat) -> Result<()> {
    info!("Solving {}x^2 + {}x + {} = 0", a, b, c);
    let solution = closed_form::solve_quadratic(a, b, c)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Table => print_quadratic(&solution),
    }
    Ok(())
}

fn print_quadratic(solution: &QuadraticSolution) {
    match solution {
        QuadraticSolution::RealDistinct {
            root1,
            root2,
            discriminant,
        } => {
            println!("Discriminant = {}", discriminant);
            println!("Two distinct real roots:");
            println!("x1 = {}", root1);
            println!("x2 = {}", root2);
        }
        QuadraticSolution::RealRepeated { root, discriminant } => {
            println!("Discriminant = {}", discriminant);
            println!("One repeated real root:");
            println!("x = {}", root);
        }
        QuadraticSolution::Complex {
            root1,
            root2,
            discriminant,
        } => {
            println!("Discriminant = {}", discriminant);
            println!("Two complex conjugate roots:");
            println!("x1 = {}", format_complex(*root1));
            println!("x2 = {}", format_complex(*root2));
        }
        QuadraticSolution::Degenerate(linear) => {
            println!("Leading coefficient is zero; degraded to linear:");
            match linear {
                LinearSolution::Root(x) => println!("x = {}", x),
                LinearSolution::Infinite => println!("All numbers are solutions"),
                LinearSolution::NoSolution => println!("No solution exists"),
            }
        }
    }
}

/// Run the cubic solver.
pub fn cubic(a: f64, b: f64, c: f64, d: f64, format: OutputFormat) -> Result<()> {
    info!("Solving {}x^3 + {}x^2 + {}x + {} = 0", a, b, c, d);
    let solution = closed_form::solve_cubic(a, b, c, d)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
        OutputFormat::Table => match &solution {
            CubicSolution::Roots {
                roots,
                discriminant,
            } => {
                println!("Discriminant = {}", discriminant);
                println!("Roots:");
                for (idx, root) in roots.iter().enumerate() {
                    println!("x{} = {}", idx + 1, format_complex(*root));
                }
            }
            CubicSolution::Degenerate(quadratic) => {
                println!("Leading coefficient is zero; degraded to quadratic:");
                print_quadratic(quadratic);
            }
        },
    }
    Ok(())
}
