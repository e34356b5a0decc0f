//! # Pricer Models (L2: Business Logic)
//!
//! Option pricing, sensitivity estimates and strategy payoff curves.
//!
//! This crate provides:
//! - Black-Scholes style European pricing on the approximate normal CDF
//! - Heuristic Greeks for display (deliberately independent of the pricer)
//! - A static catalog of single- and multi-leg strategies
//! - A payoff evaluator sampling profit/loss curves and breakevens
//! - Named market presets
//! - The [`engine`] facade used by presentation layers
//!
//! ## Design Principles
//!
//! - **Enum-based catalog** for static dispatch: every strategy is a
//!   [`strategies::StrategyId`] variant dispatching to free functions
//! - **Pure computations**: no shared mutable state, safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionParameters;
//! use pricer_models::engine;
//!
//! let params = OptionParameters::new(100.0, 100.0, 5.0, 30, 25.0, 5.0, 2.0).unwrap();
//! let evaluation = engine::evaluate_strategy("long-straddle", &params).unwrap();
//! assert_eq!(evaluation.breakevens, vec![105.0, 95.0]);
//! assert_eq!(evaluation.profit_loss_at(100.0), Some(-10.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod evaluator;
pub mod greeks;
pub mod instruments;
pub mod presets;
pub mod strategies;
