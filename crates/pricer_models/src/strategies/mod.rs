//! Option strategies: catalog, payoff formulas, breakevens and sampling domain.
//!
//! Each strategy is a [`StrategyId`] variant whose [`StrategyDefinition`]
//! carries display metadata plus a payoff function and a breakeven function.
//! Curves are sampled over a [`PriceDomain`], by default
//! `[max(0, K - 30), K + 30]` in steps of 2.

mod breakeven;
mod catalog;
mod domain;
mod payoffs;

pub use breakeven::Breakeven;
pub use catalog::{catalog, find_strategy, Outlook, PayoffPoint, StrategyDefinition, StrategyId};
pub use domain::{PriceDomain, DOMAIN_HALF_WIDTH, DOMAIN_STEP, MAX_DOMAIN_SAMPLES};
pub use payoffs::WING_OFFSET;
