//! Payoff evaluation: curve plus breakeven markers for one strategy.
//!
//! Every call recomputes from scratch; a full default curve is at most a
//! few dozen points, so nothing is cached.

use pricer_core::types::{OptionParameters, PricingError};
use tracing::debug;

use crate::strategies::{PayoffPoint, StrategyId};

/// Sampled profit/loss curve and breakeven markers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyEvaluation {
    /// Strategy the curve belongs to
    pub strategy: StrategyId,
    /// Samples in strictly increasing price order
    pub curve: Vec<PayoffPoint>,
    /// Breakeven prices, in the strategy's own order
    pub breakevens: Vec<f64>,
}

impl StrategyEvaluation {
    /// Largest sampled profit/loss.
    pub fn max_profit(&self) -> Option<f64> {
        self.curve.iter().map(|p| p.profit_loss).reduce(f64::max)
    }

    /// Smallest sampled profit/loss.
    pub fn max_loss(&self) -> Option<f64> {
        self.curve.iter().map(|p| p.profit_loss).reduce(f64::min)
    }

    /// Profit/loss at a sampled price, `None` if `price` is not on the grid.
    pub fn profit_loss_at(&self, price: f64) -> Option<f64> {
        self.curve
            .iter()
            .find(|p| p.price == price)
            .map(|p| p.profit_loss)
    }
}

/// Evaluates the strategy with string id `strategy_id`.
///
/// # Errors
/// `PricingError::UnknownStrategy` if the id is not in the catalog. No
/// partial result is produced.
pub fn evaluate(
    strategy_id: &str,
    params: &OptionParameters,
) -> Result<StrategyEvaluation, PricingError> {
    let id = strategy_id.parse::<StrategyId>().inspect_err(|_| {
        debug!(strategy_id, "strategy lookup failed");
    })?;
    Ok(evaluate_id(id, params))
}

/// Evaluates a strategy known to be in the catalog.
pub fn evaluate_id(id: StrategyId, params: &OptionParameters) -> StrategyEvaluation {
    let definition = id.definition();
    let curve = definition.payoff(params);
    let breakevens = definition.breakeven(params).to_vec();

    debug!(
        strategy = %id,
        strike = params.strike(),
        premium = params.premium(),
        points = curve.len(),
        ?breakevens,
        "strategy evaluated"
    );

    StrategyEvaluation {
        strategy: id,
        curve,
        breakevens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(premium: f64) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, premium, 30, 25.0, 5.0, 2.0).unwrap()
    }

    #[test]
    fn test_long_straddle_scenario() {
        let eval = evaluate("long-straddle", &params(5.0)).unwrap();
        assert_eq!(eval.strategy, StrategyId::LongStraddle);
        assert_eq!(eval.breakevens, vec![105.0, 95.0]);
        assert_eq!(eval.profit_loss_at(100.0), Some(-10.0));
        assert_eq!(eval.max_loss(), Some(-10.0));
        assert_eq!(eval.max_profit(), Some(20.0));
    }

    #[test]
    fn test_unknown_strategy() {
        let err = evaluate("unknown-id", &params(5.0)).unwrap_err();
        assert_eq!(err, PricingError::UnknownStrategy("unknown-id".to_string()));
    }

    #[test]
    fn test_profit_loss_at_off_grid() {
        let eval = evaluate_id(StrategyId::LongCall, &params(5.0));
        assert_eq!(eval.profit_loss_at(101.0), None);
        assert_eq!(eval.profit_loss_at(130.0), Some(25.0));
    }

    #[test]
    fn test_butterfly_summary() {
        let eval = evaluate_id(StrategyId::Butterfly, &params(2.0));
        assert_eq!(eval.max_profit(), Some(8.0));
        assert_eq!(eval.max_loss(), Some(-2.0));
        assert_eq!(eval.breakevens, vec![98.0, 102.0]);
    }

    #[test]
    fn test_repeat_evaluation_is_identical() {
        let p = params(3.0);
        for id in StrategyId::ALL {
            assert_eq!(evaluate_id(id, &p), evaluate_id(id, &p));
        }
    }
}
