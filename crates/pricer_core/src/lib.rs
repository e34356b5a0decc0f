//! # pricer_core: Foundation for the Options Payoff Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the engine, providing:
//! - The fast normal CDF approximation (`math::distributions`)
//! - The validated market parameter set: `OptionParameters` (`types::params`)
//! - The error taxonomy: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf_approx;
//! use pricer_core::types::OptionParameters;
//!
//! let params = OptionParameters::new(100.0, 100.0, 5.0, 30, 25.0, 5.0, 2.0).unwrap();
//! assert_eq!(params.moneyness(), 1.0);
//!
//! assert_eq!(norm_cdf_approx(0.0_f64), 0.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
