//! In-process facade consumed by presentation layers.
//!
//! Every function here is pure: no I/O, no shared mutable state. Calls may
//! run concurrently from any number of threads.

use pricer_core::types::{OptionParameters, PricingError};
use tracing::debug;

use crate::analytical::{self, PricedOption};
use crate::evaluator::{self, StrategyEvaluation};
use crate::greeks::{self, GreeksResult};
use crate::presets;
use crate::strategies::{catalog, Outlook, StrategyId};

/// Catalog metadata for one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategySummary {
    /// Stable id
    pub id: StrategyId,
    /// Display name
    pub name: &'static str,
    /// Ordered leg descriptions
    pub legs: &'static [&'static str],
    /// Market view
    pub outlook: Outlook,
}

/// Black-Scholes call and put fair values.
///
/// # Errors
/// `PricingError::InvalidParameter` when the implied volatility is zero.
pub fn price_option(params: &OptionParameters) -> Result<PricedOption, PricingError> {
    analytical::price_option(params)
}

/// Heuristic display Greeks.
pub fn estimate_greeks(params: &OptionParameters) -> GreeksResult {
    greeks::estimate_greeks(params)
}

/// Metadata for every catalog strategy, in catalog order.
pub fn list_strategies() -> Vec<StrategySummary> {
    catalog()
        .iter()
        .map(|definition| StrategySummary {
            id: definition.id,
            name: definition.name,
            legs: definition.legs,
            outlook: definition.outlook,
        })
        .collect()
}

/// Payoff curve and breakevens for `strategy_id`.
///
/// # Errors
/// `PricingError::UnknownStrategy` if the id is not in the catalog.
pub fn evaluate_strategy(
    strategy_id: &str,
    params: &OptionParameters,
) -> Result<StrategyEvaluation, PricingError> {
    evaluator::evaluate(strategy_id, params)
}

/// Validated parameters of the preset named `id`.
///
/// # Errors
/// `PricingError::UnknownPreset` if no preset has that id.
pub fn preset_parameters(id: &str) -> Result<OptionParameters, PricingError> {
    let preset =
        presets::find_preset(id).ok_or_else(|| PricingError::UnknownPreset(id.to_string()))?;
    debug!(preset = preset.id, "preset applied");
    preset.parameters()
}
