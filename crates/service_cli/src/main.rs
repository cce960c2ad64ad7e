//! Furthercalc CLI - Command Line Operations for the Calculator Engine
//!
//! This is the operational entry point for the Furthercalc library.
//!
//! # Commands
//!
//! - `furthercalc solve` - Closed-form linear/quadratic/cubic solvers
//! - `furthercalc roots` - Newton-Raphson polynomial root finding
//! - `furthercalc eval` - Horner evaluation of a polynomial
//! - `furthercalc differentiate` - Central-difference derivative
//! - `furthercalc integrate` - Trapezoid/Simpson quadrature
//! - `furthercalc system2` / `system3` - Linear system solvers
//! - `furthercalc stats` - Descriptive statistics
//!
//! # Architecture
//!
//! As the service layer of the Furthercalc architecture, this crate
//! orchestrates the engine (`calc_core`) and function (`calc_functions`)
//! layers behind a unified command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Table,
    /// JSON (complex numbers as `[re, im]` pairs)
    Json,
}

/// Furthercalc Scientific Calculator CLI
#[derive(Parser)]
#[command(name = "furthercalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "calc.toml")]
    config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an equation in closed form
    Solve {
        #[command(subcommand)]
        equation: Equation,
    },

    /// Find polynomial roots by Newton-Raphson iteration
    Roots {
        /// Coefficients in ascending degree order, comma separated
        /// (e.g. "-8,0,0,1" for x^3 - 8)
        #[arg(short = 'p', long)]
        coeffs: String,

        /// Starting guess for the first search
        #[arg(short, long, allow_hyphen_values = true)]
        guess: Option<f64>,

        /// Convergence tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Iteration budget per search
        #[arg(short, long)]
        max_iterations: Option<usize>,

        /// Report per-search convergence diagnostics
        #[arg(short, long)]
        detailed: bool,
    },

    /// Evaluate a polynomial at a point
    Eval {
        /// Coefficients in ascending degree order, comma separated
        #[arg(short = 'p', long)]
        coeffs: String,

        /// Evaluation point
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        at: f64,
    },

    /// Approximate the derivative of a polynomial at a point
    Differentiate {
        /// Coefficients in ascending degree order, comma separated
        #[arg(short = 'p', long)]
        coeffs: String,

        /// Evaluation point
        #[arg(short = 'x', long, allow_hyphen_values = true)]
        at: f64,

        /// Central-difference step width
        #[arg(short, long)]
        step: Option<f64>,
    },

    /// Integrate a polynomial over an interval
    Integrate {
        /// Coefficients in ascending degree order, comma separated
        #[arg(short = 'p', long)]
        coeffs: String,

        /// Lower bound
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,

        /// Upper bound
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,

        /// Quadrature rule
        #[arg(short, long, value_enum, default_value = "simpson")]
        rule: commands::integrate::Rule,

        /// Number of subintervals
        #[arg(short = 'n', long)]
        subdivisions: Option<usize>,
    },

    /// Solve a 2x2 linear system a1*x + b1*y = c1, a2*x + b2*y = c2
    System2 {
        /// The six coefficients a1,b1,c1,a2,b2,c2, comma separated
        #[arg(short = 'e', long)]
        entries: String,
    },

    /// Solve a 3x3 linear system by Cramer's rule
    System3 {
        /// The nine matrix entries in row-major order, comma separated
        #[arg(short = 'm', long)]
        matrix: String,

        /// The three constants, comma separated
        #[arg(short = 'k', long)]
        constants: String,
    },

    /// Descriptive statistics over a data sample
    Stats {
        /// Data points, comma separated
        #[arg(short, long)]
        data: String,
    },
}

#[derive(Subcommand)]
enum Equation {
    /// Solve a*x + b = 0
    Linear {
        /// Coefficient of x
        #[arg(allow_hyphen_values = true)]
        a: f64,
        /// Constant term
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },

    /// Solve a*x^2 + b*x + c = 0
    Quadratic {
        /// Coefficient of x^2
        #[arg(allow_hyphen_values = true)]
        a: f64,
        /// Coefficient of x
        #[arg(allow_hyphen_values = true)]
        b: f64,
        /// Constant term
        #[arg(allow_hyphen_values = true)]
        c: f64,
    },

    /// Solve a*x^3 + b*x^2 + c*x + d = 0
    Cubic {
        /// Coefficient of x^3
        #[arg(allow_hyphen_values = true)]
        a: f64,
        /// Coefficient of x^2
        #[arg(allow_hyphen_values = true)]
        b: f64,
        /// Coefficient of x
        #[arg(allow_hyphen_values = true)]
        c: f64,
        /// Constant term
        #[arg(allow_hyphen_values = true)]
        d: f64,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = config::CalcConfig::load(&cli.config)?;

    match cli.command {
        Commands::Solve { equation } => match equation {
            Equation::Linear { a, b } => commands::solve::linear(a, b, cli.format),
            Equation::Quadratic { a, b, c } => commands::solve::quadratic(a, b, c, cli.format),
            Equation::Cubic { a, b, c, d } => commands::solve::cubic(a, b, c, d, cli.format),
        },
        Commands::Roots {
            coeffs,
            guess,
            tolerance,
            max_iterations,
            detailed,
        } => commands::roots::run(
            &coeffs,
            guess,
            tolerance,
            max_iterations,
            detailed,
            &config,
            cli.format,
        ),
        Commands::Eval { coeffs, at } => commands::eval::run(&coeffs, at, cli.format),
        Commands::Differentiate { coeffs, at, step } => {
            commands::differentiate::run(&coeffs, at, step, &config, cli.format)
        }
        Commands::Integrate {
            coeffs,
            a,
            b,
            rule,
            subdivisions,
        } => commands::integrate::run(&coeffs, a, b, rule, subdivisions, &config, cli.format),
        Commands::System2 { entries } => commands::system::run_2x2(&entries, cli.format),
        Commands::System3 { matrix, constants } => {
            commands::system::run_3x3(&matrix, &constants, cli.format)
        }
        Commands::Stats { data } => commands::stats::run(&data, cli.format),
    }
}
