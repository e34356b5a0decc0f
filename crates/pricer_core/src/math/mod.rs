//! Mathematical building blocks.
//!
//! - `distributions`: Closed-form approximation of the standard normal CDF

pub mod distributions;

pub use distributions::norm_cdf_approx;
