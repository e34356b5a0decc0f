//! Core parameter and error types.
//!
//! This module provides:
//! - `params`: The validated `OptionParameters` value object
//! - `error`: The `PricingError` taxonomy
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionParameters`], [`DAYS_PER_YEAR`], [`MAX_STRIKE`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use params::{OptionParameters, DAYS_PER_YEAR, MAX_STRIKE};
