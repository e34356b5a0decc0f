//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the analytical pricing model

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised instead of flooring inputs that would divide by zero in d₁.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidExpiry`: Non-positive or non-finite time to expiry
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value in years
        expiry: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidVolatility { volatility } => {
                PricingError::invalid("volatility", volatility, "must be positive for pricing")
            }
            AnalyticalError::InvalidSpot { spot } => {
                PricingError::invalid("spot", spot, "must be positive")
            }
            AnalyticalError::InvalidStrike { strike } => {
                PricingError::invalid("strike", strike, "must be positive")
            }
            AnalyticalError::InvalidExpiry { expiry } => {
                PricingError::invalid("years_to_expiry", expiry, "must be positive")
            }
        }
    }
}
