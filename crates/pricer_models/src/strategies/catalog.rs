//! The static strategy catalog.
//!
//! Entries are plain data: a [`StrategyId`] variant, display metadata and
//! two function pointers. The table is built at compile time and never
//! mutated, so lookups need no synchronisation.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionParameters, PricingError};

use super::breakeven::Breakeven;
use super::domain::PriceDomain;
use super::payoffs;

/// Stable identifier of a catalog strategy.
///
/// # Examples
/// ```
/// use pricer_models::strategies::StrategyId;
///
/// let id: StrategyId = "iron-condor".parse().unwrap();
/// assert_eq!(id, StrategyId::IronCondor);
/// assert_eq!(id.as_str(), "iron-condor");
/// assert!("wheel".parse::<StrategyId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StrategyId {
    /// Buy a call
    LongCall,
    /// Buy a put
    LongPut,
    /// Own stock, sell a call
    CoveredCall,
    /// Own stock, buy a put
    ProtectivePut,
    /// Buy call K, sell call K+10
    BullCallSpread,
    /// Buy put K, sell put K-10
    BearPutSpread,
    /// Buy call and put at K
    LongStraddle,
    /// Buy call K+10 and put K-10
    LongStrangle,
    /// Sell call and put at K
    ShortStraddle,
    /// Sell call K+10 and put K-10
    ShortStrangle,
    /// Short strangle K±10 with long wings K±20
    IronCondor,
    /// Long calls K±10, two short calls at K
    Butterfly,
}

impl StrategyId {
    /// Every id, in catalog order.
    pub const ALL: [StrategyId; 12] = [
        StrategyId::LongCall,
        StrategyId::LongPut,
        StrategyId::CoveredCall,
        StrategyId::ProtectivePut,
        StrategyId::BullCallSpread,
        StrategyId::BearPutSpread,
        StrategyId::LongStraddle,
        StrategyId::LongStrangle,
        StrategyId::ShortStraddle,
        StrategyId::ShortStrangle,
        StrategyId::IronCondor,
        StrategyId::Butterfly,
    ];

    /// Kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyId::LongCall => "long-call",
            StrategyId::LongPut => "long-put",
            StrategyId::CoveredCall => "covered-call",
            StrategyId::ProtectivePut => "protective-put",
            StrategyId::BullCallSpread => "bull-call-spread",
            StrategyId::BearPutSpread => "bear-put-spread",
            StrategyId::LongStraddle => "long-straddle",
            StrategyId::LongStrangle => "long-strangle",
            StrategyId::ShortStraddle => "short-straddle",
            StrategyId::ShortStrangle => "short-strangle",
            StrategyId::IronCondor => "iron-condor",
            StrategyId::Butterfly => "butterfly",
        }
    }

    /// The catalog entry for this id.
    #[inline]
    pub fn definition(&self) -> &'static StrategyDefinition {
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyId {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PricingError::UnknownStrategy(s.to_string()))
    }
}

/// Market view a strategy expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outlook {
    /// Expects the underlying to rise
    Bullish,
    /// Expects the underlying to fall
    Bearish,
    /// Expects the underlying to stay in a range
    Neutral,
    /// Expects a large move in either direction
    Volatile,
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outlook::Bullish => "bullish",
            Outlook::Bearish => "bearish",
            Outlook::Neutral => "neutral",
            Outlook::Volatile => "volatile",
        };
        f.write_str(label)
    }
}

/// One sample of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffPoint {
    /// Underlying price at expiration
    pub price: f64,
    /// Strategy profit/loss at that price
    pub profit_loss: f64,
}

type PayoffFn = fn(&OptionParameters, f64) -> f64;
type BreakevenFn = fn(&OptionParameters) -> Breakeven;

/// A named, immutable catalog entry.
///
/// `legs`, `when_to_use` and `key_greeks` are descriptive only; the numbers
/// come from the payoff and breakeven functions, both pure and total over
/// every valid `OptionParameters`.
#[derive(Debug)]
pub struct StrategyDefinition {
    /// Stable identifier
    pub id: StrategyId,
    /// Display name
    pub name: &'static str,
    /// Market view
    pub outlook: Outlook,
    /// Ordered leg descriptions
    pub legs: &'static [&'static str],
    /// Situations the strategy suits
    pub when_to_use: &'static [&'static str],
    /// Dominant Greek exposures, as short labels
    pub key_greeks: &'static [&'static str],
    payoff_fn: PayoffFn,
    breakeven_fn: BreakevenFn,
}

impl StrategyDefinition {
    /// Profit/loss at expiration for underlying price `price`.
    #[inline]
    pub fn profit_loss(&self, params: &OptionParameters, price: f64) -> f64 {
        (self.payoff_fn)(params, price)
    }

    /// Samples the payoff over `domain`.
    pub fn payoff_over(&self, params: &OptionParameters, domain: &PriceDomain) -> Vec<PayoffPoint> {
        domain
            .prices()
            .map(|price| PayoffPoint {
                price,
                profit_loss: self.profit_loss(params, price),
            })
            .collect()
    }

    /// Samples the payoff over the default domain around the strike.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionParameters;
    /// use pricer_models::strategies::StrategyId;
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 5.0, 30, 25.0, 5.0, 2.0).unwrap();
    /// let curve = StrategyId::LongCall.definition().payoff(&params);
    /// assert_eq!(curve.len(), 31);
    /// assert_eq!(curve[0].profit_loss, -5.0);
    /// ```
    pub fn payoff(&self, params: &OptionParameters) -> Vec<PayoffPoint> {
        self.payoff_over(params, &PriceDomain::around_strike(params.strike()))
    }

    /// Breakeven marker(s).
    #[inline]
    pub fn breakeven(&self, params: &OptionParameters) -> Breakeven {
        (self.breakeven_fn)(params)
    }
}

static CATALOG: [StrategyDefinition; 12] = [
    StrategyDefinition {
        id: StrategyId::LongCall,
        name: "Long Call",
        outlook: Outlook::Bullish,
        legs: &["Buy Call"],
        when_to_use: &["Strong bullish view", "Want defined risk"],
        key_greeks: &["+Δ", "+ν", "−Θ"],
        payoff_fn: payoffs::long_call,
        breakeven_fn: payoffs::long_call_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::LongPut,
        name: "Long Put",
        outlook: Outlook::Bearish,
        legs: &["Buy Put"],
        when_to_use: &["Strong bearish view", "Hedge an existing long position"],
        key_greeks: &["−Δ", "+ν", "−Θ"],
        payoff_fn: payoffs::long_put,
        breakeven_fn: payoffs::long_put_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::CoveredCall,
        name: "Covered Call",
        outlook: Outlook::Neutral,
        legs: &["Buy Stock", "Sell Call"],
        when_to_use: &["Already own the stock", "Expect flat to modest rise", "Generate income"],
        key_greeks: &["+Δ", "+Θ", "−ν"],
        payoff_fn: payoffs::covered_call,
        breakeven_fn: payoffs::covered_call_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::ProtectivePut,
        name: "Protective Put",
        outlook: Outlook::Bullish,
        legs: &["Buy Stock", "Buy Put"],
        when_to_use: &["Already own the stock", "Insure against a sharp drop"],
        key_greeks: &["+Δ", "+ν", "−Θ"],
        payoff_fn: payoffs::protective_put,
        breakeven_fn: payoffs::protective_put_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::BullCallSpread,
        name: "Bull Call Spread",
        outlook: Outlook::Bullish,
        legs: &["Buy Call K", "Sell Call K+10"],
        when_to_use: &["Moderate bullish view", "Reduce cost vs Long Call", "Accept capped upside"],
        key_greeks: &["+Δ", "−Θ (small)", "ν depends"],
        payoff_fn: payoffs::bull_call_spread,
        breakeven_fn: payoffs::long_call_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::BearPutSpread,
        name: "Bear Put Spread",
        outlook: Outlook::Bearish,
        legs: &["Buy Put K", "Sell Put K-10"],
        when_to_use: &["Moderate bearish view", "Cheaper than Long Put", "Capped payoff"],
        key_greeks: &["−Δ", "−Θ (small)", "ν mixed"],
        payoff_fn: payoffs::bear_put_spread,
        breakeven_fn: payoffs::long_put_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::LongStraddle,
        name: "Long Straddle",
        outlook: Outlook::Volatile,
        legs: &["Buy Call", "Buy Put"],
        when_to_use: &["Expect big move", "Pre-earnings/events"],
        key_greeks: &["±Δ≈0", "+ν", "−Θ"],
        payoff_fn: payoffs::long_straddle,
        breakeven_fn: payoffs::straddle_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::LongStrangle,
        name: "Long Strangle",
        outlook: Outlook::Volatile,
        legs: &["Buy Call K+10", "Buy Put K-10"],
        when_to_use: &["Expect very large move", "Cheaper than straddle"],
        key_greeks: &["+ν", "−Θ"],
        payoff_fn: payoffs::long_strangle,
        breakeven_fn: payoffs::strangle_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::ShortStraddle,
        name: "Short Straddle",
        outlook: Outlook::Neutral,
        legs: &["Sell Call", "Sell Put"],
        when_to_use: &["Expect flat/stable price", "Very high conviction/risk"],
        key_greeks: &["−ν", "+Θ", "short Γ"],
        payoff_fn: payoffs::short_straddle,
        breakeven_fn: payoffs::straddle_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::ShortStrangle,
        name: "Short Strangle",
        outlook: Outlook::Neutral,
        legs: &["Sell Call K+10", "Sell Put K-10"],
        when_to_use: &["Expect range-bound", "Lower credit for wider safety"],
        key_greeks: &["−ν", "+Θ", "short Γ"],
        payoff_fn: payoffs::short_strangle,
        breakeven_fn: payoffs::strangle_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::IronCondor,
        name: "Iron Condor",
        outlook: Outlook::Neutral,
        legs: &["Sell Call K+10", "Buy Call K+20", "Sell Put K-10", "Buy Put K-20"],
        when_to_use: &["Expect low volatility", "Mean-reversion"],
        key_greeks: &["−ν", "+Θ", "limited risk"],
        payoff_fn: payoffs::iron_condor,
        breakeven_fn: payoffs::straddle_breakeven,
    },
    StrategyDefinition {
        id: StrategyId::Butterfly,
        name: "Butterfly Spread",
        outlook: Outlook::Neutral,
        legs: &["Buy Call K-10", "Sell 2 Calls K", "Buy Call K+10"],
        when_to_use: &["Expect price near middle strike"],
        key_greeks: &["−ν", "+Θ near center"],
        payoff_fn: payoffs::butterfly,
        breakeven_fn: payoffs::butterfly_breakeven,
    },
];

/// The full catalog in a stable order.
#[inline]
pub fn catalog() -> &'static [StrategyDefinition] {
    &CATALOG
}

/// Looks up a catalog entry by its string id.
///
/// # Errors
/// `PricingError::UnknownStrategy` if no entry has that id.
pub fn find_strategy(id: &str) -> Result<&'static StrategyDefinition, PricingError> {
    id.parse::<StrategyId>().map(|id| id.definition())
}
