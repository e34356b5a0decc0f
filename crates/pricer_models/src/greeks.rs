//! Heuristic Greeks for display.
//!
//! These figures are simplified teaching heuristics, NOT partial derivatives
//! of [`BlackScholes`](crate::analytical::BlackScholes). The two computations
//! are independent and must stay that way: deriving these from the pricer
//! would change every displayed number.
//!
//! With moneyness m = S/K and t = days/365:
//!
//! | Greek | Rule |
//! |---|---|
//! | Δ call | 0.7 if m > 1, 0.5 if m > 0.95, else 0.3 |
//! | Δ put | -0.7 if m < 1, -0.5 if m < 1.05, else -0.3 |
//! | Γ | max(0.1, 0.3·e^(-5·\|m-1\|)) |
//! | Θ | -premium · 0.03 · (30 / days) |
//! | ν | premium · 0.2 · √t |
//! | ρ call / put | ±premium · 0.01 |
//!
//! Delta is a step function by construction and is never smoothed.

use pricer_core::types::OptionParameters;

/// Heuristic sensitivity figures for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Call delta bucket: 0.3, 0.5 or 0.7
    pub delta_call: f64,
    /// Put delta bucket: -0.7, -0.5 or -0.3
    pub delta_put: f64,
    /// Gamma, peaking at 0.3 at the money, floored at 0.1
    pub gamma: f64,
    /// Theta, growing in magnitude as expiry nears
    pub theta: f64,
    /// Vega
    pub vega: f64,
    /// Call rho
    pub rho_call: f64,
    /// Put rho
    pub rho_put: f64,
}

/// Call delta bucket for moneyness `m`.
#[inline]
pub fn delta_call(moneyness: f64) -> f64 {
    if moneyness > 1.0 {
        0.7
    } else if moneyness > 0.95 {
        0.5
    } else {
        0.3
    }
}

/// Put delta bucket for moneyness `m`.
#[inline]
pub fn delta_put(moneyness: f64) -> f64 {
    if moneyness < 1.0 {
        -0.7
    } else if moneyness < 1.05 {
        -0.5
    } else {
        -0.3
    }
}

/// Gamma: 0.3 at the money decaying with distance from 1, floored at 0.1.
#[inline]
pub fn gamma(moneyness: f64) -> f64 {
    (0.3 * (-5.0 * (moneyness - 1.0).abs()).exp()).max(0.1)
}

/// Estimates the heuristic Greeks for `params`.
///
/// Pure and total over every valid `OptionParameters`: identical inputs
/// always give bit-identical results.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::greeks::estimate_greeks;
///
/// let params = OptionParameters::new(110.0, 100.0, 4.0, 30, 25.0, 5.0, 2.0).unwrap();
/// let greeks = estimate_greeks(&params);
/// assert_eq!(greeks.delta_call, 0.7);
/// assert_eq!(greeks.delta_put, -0.3);
/// ```
pub fn estimate_greeks(params: &OptionParameters) -> GreeksResult {
    let m = params.moneyness();
    let premium = params.premium();
    let days = f64::from(params.days_to_expiry());

    GreeksResult {
        delta_call: delta_call(m),
        delta_put: delta_put(m),
        gamma: gamma(m),
        theta: -premium * 0.03 * (30.0 / days),
        vega: premium * 0.2 * params.years_to_expiry().sqrt(),
        rho_call: premium * 0.01,
        rho_put: -premium * 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(spot: f64, strike: f64, premium: f64, days: u32) -> OptionParameters {
        OptionParameters::new(spot, strike, premium, days, 25.0, 5.0, 2.0).unwrap()
    }

    #[test]
    fn test_at_the_money() {
        let g = estimate_greeks(&params(100.0, 100.0, 5.0, 30));
        assert_eq!(g.delta_call, 0.5);
        assert_eq!(g.delta_put, -0.5);
        assert_relative_eq!(g.gamma, 0.3);
        assert_relative_eq!(g.theta, -0.15);
        assert_relative_eq!(g.vega, 5.0 * 0.2 * (30.0_f64 / 365.0).sqrt());
        assert_relative_eq!(g.rho_call, 0.05);
        assert_relative_eq!(g.rho_put, -0.05);
    }

    #[test]
    fn test_delta_call_buckets() {
        assert_eq!(delta_call(1.2), 0.7);
        assert_eq!(delta_call(1.0), 0.5);
        assert_eq!(delta_call(0.96), 0.5);
        assert_eq!(delta_call(0.95), 0.3);
        assert_eq!(delta_call(0.5), 0.3);
    }

    #[test]
    fn test_delta_put_buckets() {
        assert_eq!(delta_put(0.9), -0.7);
        assert_eq!(delta_put(1.0), -0.5);
        assert_eq!(delta_put(1.04), -0.5);
        assert_eq!(delta_put(1.05), -0.3);
        assert_eq!(delta_put(2.0), -0.3);
    }

    #[test]
    fn test_gamma_floor() {
        assert_relative_eq!(gamma(1.0), 0.3);
        assert_relative_eq!(gamma(1.1), 0.3 * (-0.5_f64).exp());
        assert_eq!(gamma(2.0), 0.1);
        assert_eq!(gamma(0.2), 0.1);
    }

    #[test]
    fn test_theta_grows_near_expiry() {
        let far = estimate_greeks(&params(100.0, 100.0, 3.0, 60));
        let near = estimate_greeks(&params(100.0, 100.0, 3.0, 5));
        assert!(near.theta < far.theta);
        assert_relative_eq!(near.theta, -3.0 * 0.03 * 6.0);
    }

    #[test]
    fn test_zero_premium_zeroes_premium_scaled_greeks() {
        let g = estimate_greeks(&params(100.0, 100.0, 0.0, 30));
        assert_eq!(g.vega, 0.0);
        assert_eq!(g.rho_call, 0.0);
        assert_eq!(g.theta, 0.0);
        assert_eq!(g.gamma, 0.3);
    }

    #[test]
    fn test_independent_of_volatility_and_rate() {
        let a = params(100.0, 95.0, 2.0, 30);
        let b = a
            .with_implied_volatility(80.0)
            .unwrap()
            .with_risk_free_rate(0.0)
            .unwrap();
        assert_eq!(estimate_greeks(&a), estimate_greeks(&b));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_delta_is_bucketed(
                spot in 1.0_f64..300.0,
                strike in 1.0_f64..300.0,
                premium in 0.0_f64..50.0,
                days in 1_u32..400,
            ) {
                let g = estimate_greeks(&params(spot, strike, premium, days));
                prop_assert!([0.3, 0.5, 0.7].contains(&g.delta_call));
                prop_assert!([-0.7, -0.5, -0.3].contains(&g.delta_put));
                prop_assert!(g.gamma >= 0.1 && g.gamma <= 0.3);
            }

            #[test]
            fn test_estimate_is_deterministic(
                spot in 1.0_f64..300.0,
                strike in 1.0_f64..300.0,
                premium in 0.0_f64..50.0,
                days in 1_u32..400,
            ) {
                let p = params(spot, strike, premium, days);
                let a = estimate_greeks(&p);
                let b = estimate_greeks(&p);
                prop_assert_eq!(a.delta_call.to_bits(), b.delta_call.to_bits());
                prop_assert_eq!(a.gamma.to_bits(), b.gamma.to_bits());
                prop_assert_eq!(a.theta.to_bits(), b.theta.to_bits());
                prop_assert_eq!(a.vega.to_bits(), b.vega.to_bits());
                prop_assert_eq!(a.rho_put.to_bits(), b.rho_put.to_bits());
            }
        }
    }
}
