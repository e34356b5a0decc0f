//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `payoff` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected the request
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
