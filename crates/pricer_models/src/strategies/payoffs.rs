//! Expiration payoff and breakeven formulas for every catalog strategy.
//!
//! Notation: `price` is the sampled underlying price at expiry, K the strike,
//! S the spot at entry and P the single net premium shared by all legs.
//! Multi-strike strategies place their other strikes at fixed
//! [`WING_OFFSET`] multiples from K.
//!
//! The single premium is a deliberate simplification: real spreads carry
//! one premium per leg. Covered call and protective put include the stock
//! leg's P&L (`price - S`); the other strategies are option-only.

use pricer_core::types::OptionParameters;

use super::breakeven::Breakeven;
use crate::instruments::PayoffType;

/// Distance between adjacent strikes in multi-strike strategies.
pub const WING_OFFSET: f64 = 10.0;

#[inline]
fn call(price: f64, strike: f64) -> f64 {
    PayoffType::Call.evaluate(price, strike)
}

#[inline]
fn put(price: f64, strike: f64) -> f64 {
    PayoffType::Put.evaluate(price, strike)
}

// ---------------------------------------------------------------------
// Single leg
// ---------------------------------------------------------------------

pub(crate) fn long_call(p: &OptionParameters, price: f64) -> f64 {
    call(price, p.strike()) - p.premium()
}

pub(crate) fn long_call_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Single(p.strike() + p.premium())
}

pub(crate) fn long_put(p: &OptionParameters, price: f64) -> f64 {
    put(price, p.strike()) - p.premium()
}

pub(crate) fn long_put_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Single(p.strike() - p.premium())
}

// ---------------------------------------------------------------------
// Stock plus option
// ---------------------------------------------------------------------

pub(crate) fn covered_call(p: &OptionParameters, price: f64) -> f64 {
    (price - p.spot()) - call(price, p.strike()) + p.premium()
}

pub(crate) fn covered_call_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Single(p.spot() - p.premium())
}

pub(crate) fn protective_put(p: &OptionParameters, price: f64) -> f64 {
    (price - p.spot()) + put(price, p.strike()) - p.premium()
}

pub(crate) fn protective_put_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Single(p.spot() + p.premium())
}

// ---------------------------------------------------------------------
// Vertical spreads
// ---------------------------------------------------------------------

pub(crate) fn bull_call_spread(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    call(price, k) - call(price, k + WING_OFFSET) - p.premium()
}

pub(crate) fn bear_put_spread(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    put(price, k) - put(price, k - WING_OFFSET) - p.premium()
}

// ---------------------------------------------------------------------
// Volatility plays
// ---------------------------------------------------------------------

pub(crate) fn long_straddle(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    call(price, k) + put(price, k) - 2.0 * p.premium()
}

pub(crate) fn long_strangle(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    call(price, k + WING_OFFSET) + put(price, k - WING_OFFSET) - 2.0 * p.premium()
}

pub(crate) fn short_straddle(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    2.0 * p.premium() - call(price, k) - put(price, k)
}

pub(crate) fn short_strangle(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    2.0 * p.premium() - call(price, k + WING_OFFSET) - put(price, k - WING_OFFSET)
}

/// [K + P, K - P]: shared by straddles and the iron condor.
pub(crate) fn straddle_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Pair(p.strike() + p.premium(), p.strike() - p.premium())
}

/// [K + 10 + P, K - 10 - P]: shared by both strangles.
pub(crate) fn strangle_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Pair(
        p.strike() + WING_OFFSET + p.premium(),
        p.strike() - WING_OFFSET - p.premium(),
    )
}

// ---------------------------------------------------------------------
// Range-bound structures
// ---------------------------------------------------------------------

pub(crate) fn iron_condor(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    p.premium() - call(price, k + WING_OFFSET) + call(price, k + 2.0 * WING_OFFSET)
        - put(price, k - WING_OFFSET)
        + put(price, k - 2.0 * WING_OFFSET)
}

pub(crate) fn butterfly(p: &OptionParameters, price: f64) -> f64 {
    let k = p.strike();
    call(price, k - WING_OFFSET) - 2.0 * call(price, k) + call(price, k + WING_OFFSET)
        - p.premium()
}

pub(crate) fn butterfly_breakeven(p: &OptionParameters) -> Breakeven {
    Breakeven::Pair(p.strike() - p.premium(), p.strike() + p.premium())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(premium: f64) -> OptionParameters {
        OptionParameters::new(100.0, 100.0, premium, 30, 25.0, 5.0, 2.0).unwrap()
    }

    #[test]
    fn test_long_call_and_put() {
        let p = params(5.0);
        assert_eq!(long_call(&p, 90.0), -5.0);
        assert_eq!(long_call(&p, 120.0), 15.0);
        assert_eq!(long_put(&p, 80.0), 15.0);
        assert_eq!(long_put(&p, 110.0), -5.0);
        assert_eq!(long_call(&p, 105.0), 0.0);
        assert_eq!(long_put(&p, 95.0), 0.0);
    }

    #[test]
    fn test_covered_call_caps_upside() {
        let p = OptionParameters::new(98.0, 100.0, 2.0, 30, 25.0, 5.0, 2.0).unwrap();
        assert_eq!(covered_call(&p, 96.0), 0.0);
        assert_eq!(covered_call(&p, 100.0), 4.0);
        assert_eq!(covered_call(&p, 130.0), 4.0);
        assert_eq!(covered_call_breakeven(&p), Breakeven::Single(96.0));
    }

    #[test]
    fn test_protective_put_floors_downside() {
        let p = OptionParameters::new(100.0, 95.0, 2.0, 30, 25.0, 5.0, 2.0).unwrap();
        assert_eq!(protective_put(&p, 70.0), -7.0);
        assert_eq!(protective_put(&p, 90.0), -7.0);
        assert_eq!(protective_put(&p, 102.0), 0.0);
        assert_eq!(protective_put_breakeven(&p), Breakeven::Single(102.0));
    }

    #[test]
    fn test_vertical_spreads_are_capped() {
        let p = params(3.0);
        assert_eq!(bull_call_spread(&p, 90.0), -3.0);
        assert_eq!(bull_call_spread(&p, 130.0), 7.0);
        assert_eq!(bear_put_spread(&p, 110.0), -3.0);
        assert_eq!(bear_put_spread(&p, 70.0), 7.0);
    }

    #[test]
    fn test_straddles_mirror_each_other() {
        let p = params(5.0);
        for price in [70.0, 95.0, 100.0, 105.0, 130.0] {
            assert_eq!(long_straddle(&p, price), -short_straddle(&p, price));
            assert_eq!(long_strangle(&p, price), -short_strangle(&p, price));
        }
        assert_eq!(long_straddle(&p, 100.0), -10.0);
        assert_eq!(short_strangle(&p, 100.0), 10.0);
    }

    #[test]
    fn test_strangle_breakevens_use_single_premium() {
        // Markers sit one premium beyond the wings even though the
        // curve itself subtracts the premium twice.
        let p = params(4.0);
        assert_eq!(strangle_breakeven(&p), Breakeven::Pair(114.0, 86.0));
        assert_eq!(long_strangle(&p, 114.0), -4.0);
        assert_eq!(short_strangle(&p, 86.0), 4.0);
    }

    #[test]
    fn test_iron_condor_profile() {
        let p = params(3.0);
        assert_eq!(iron_condor(&p, 100.0), 3.0);
        assert_eq!(iron_condor(&p, 130.0), -7.0);
        assert_eq!(iron_condor(&p, 70.0), -7.0);
        assert_eq!(iron_condor(&p, 115.0), -2.0);
        assert_eq!(straddle_breakeven(&p), Breakeven::Pair(103.0, 97.0));
    }

    #[test]
    fn test_butterfly_profile() {
        let p = params(2.0);
        assert_eq!(butterfly(&p, 100.0), 8.0);
        assert_eq!(butterfly(&p, 80.0), -2.0);
        assert_eq!(butterfly(&p, 120.0), -2.0);
        assert_eq!(butterfly(&p, 95.0), 3.0);
        assert_eq!(butterfly_breakeven(&p), Breakeven::Pair(98.0, 102.0));
    }
}
