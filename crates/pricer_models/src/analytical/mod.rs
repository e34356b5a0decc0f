//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes model on the approximate normal CDF
//! - `price_option`: call and put fair values for an `OptionParameters`
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the model itself works for `f64` and `f32`
//! - **Fail, don't floor**: zero volatility or expiry is an `AnalyticalError`

pub mod black_scholes;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{price_option, BlackScholes, PricedOption};
pub use error::AnalyticalError;
