//! Named market scenarios.
//!
//! A fixed, read-only table used to seed parameter input. Values are stored
//! raw and validated into [`OptionParameters`] on request.

use pricer_core::types::{OptionParameters, PricingError};

/// Raw preset values, in the same units as [`OptionParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PresetValues {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Net premium
    pub premium: f64,
    /// Calendar days to expiry
    pub days_to_expiry: u32,
    /// Implied volatility, percent
    pub implied_volatility: f64,
    /// Risk-free rate, percent
    pub risk_free_rate: f64,
    /// Dividend yield, percent
    pub dividend_yield: f64,
}

/// A named scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preset {
    /// Case-sensitive id, e.g. `ATM`
    pub id: &'static str,
    /// Short display label
    pub label: &'static str,
    /// One-sentence explanation of the scenario
    pub description: &'static str,
    /// Parameter values
    pub values: PresetValues,
}

impl Preset {
    /// Validated parameters for this preset.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the stored values fail validation.
    pub fn parameters(&self) -> Result<OptionParameters, PricingError> {
        let v = &self.values;
        OptionParameters::new(
            v.spot,
            v.strike,
            v.premium,
            v.days_to_expiry,
            v.implied_volatility,
            v.risk_free_rate,
            v.dividend_yield,
        )
    }
}

const fn values(
    spot: f64,
    strike: f64,
    premium: f64,
    days_to_expiry: u32,
    implied_volatility: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
) -> PresetValues {
    PresetValues {
        spot,
        strike,
        premium,
        days_to_expiry,
        implied_volatility,
        risk_free_rate,
        dividend_yield,
    }
}

static PRESETS: [Preset; 7] = [
    Preset {
        id: "ATM",
        label: "ATM Option",
        description: "Strike equal to the stock price. At-the-money options are the most sensitive to changes in the other parameters.",
        values: values(100.0, 100.0, 3.0, 30, 20.0, 5.0, 2.0),
    },
    Preset {
        id: "OTMCall",
        label: "OTM Call",
        description: "Strike above the stock price. Out-of-the-money calls are cheaper but need a larger move up to pay off.",
        values: values(100.0, 105.0, 2.0, 30, 25.0, 5.0, 2.0),
    },
    Preset {
        id: "OTMPut",
        label: "OTM Put",
        description: "Strike below the stock price. Out-of-the-money puts are a cheap way to bet on a falling stock.",
        values: values(100.0, 95.0, 2.0, 30, 25.0, 5.0, 2.0),
    },
    Preset {
        id: "HighVol",
        label: "High Volatility",
        description: "Raised implied volatility makes options more expensive, as ahead of earnings or major news.",
        values: values(100.0, 100.0, 8.0, 7, 50.0, 5.0, 1.0),
    },
    Preset {
        id: "Earnings",
        label: "Earnings Week",
        description: "Conditions before an earnings report: very high implied volatility and little time to expiry.",
        values: values(100.0, 100.0, 10.0, 5, 70.0, 5.0, 1.0),
    },
    Preset {
        id: "Calm",
        label: "Calm Market",
        description: "A stable market with low implied volatility, suited to strategies that collect time decay.",
        values: values(100.0, 100.0, 2.0, 45, 12.0, 5.0, 2.0),
    },
    Preset {
        id: "Crash",
        label: "Crash Scenario",
        description: "A sharp drop in the stock price with a spike in implied volatility.",
        values: values(75.0, 95.0, 6.0, 14, 80.0, 4.0, 0.0),
    },
];

/// All presets in display order.
#[inline]
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Finds a preset by exact id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}
