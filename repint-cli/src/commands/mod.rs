//! repint command implementations.
//!
//! Each subcommand is implemented in its own module and delegates
//! to repint-core for the actual vector logic.

pub mod elt;
pub mod inspect;
pub mod materialize;
pub mod region;
pub mod summary;

use repint_core::{Config, RepError, RepInt, RepSpec};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// repint core error.
    #[error("{0}")]
    Rep(#[from] RepError),

    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Stable error type string for JSON output.
    pub fn error_type(&self) -> &'static str {
        match self {
            CliError::Rep(e) => e.error_type(),
            CliError::Config(_) => "config_error",
            CliError::Io(_) => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Validate a JSON spec argument and build a lazy handle.
fn build(spec: &str, config: &Config) -> Result<RepInt> {
    let spec = RepSpec::parse(spec)?;
    log::debug!("Building repeat vector of {} x {}", spec.length, spec.value);
    Ok(spec.build_with(config))
}
