//! CLI error type and result alias.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The engine rejected the request.
    #[error("Equation error: {0}")]
    Equation(#[from] calc_core::types::EquationError),

    /// Polynomial construction failed.
    #[error("Polynomial error: {0}")]
    Polynomial(#[from] calc_core::types::PolynomialError),

    /// A statistics operation failed.
    #[error("Statistics error: {0}")]
    Stats(#[from] calc_functions::error::StatsError),

    /// JSON output serialisation failed.
    #[error("Serialisation error: {0}")]
    Serialise(#[from] serde_json::Error),
}
