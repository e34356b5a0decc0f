//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; logs go to stderr.

pub mod evaluate;
pub mod greeks;
pub mod presets;
pub mod price;
pub mod strategies;

use std::io::Write;

use clap::Args;
use pricer_core::types::OptionParameters;
use pricer_models::engine::preset_parameters;
use serde::Serialize;
use tracing::debug;

use crate::Result;

/// Option parameter flags shared by the pricing commands.
///
/// Values start from `--preset` (or the configured default preset) and each
/// explicit flag overrides one field.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Preset to start from (ATM, OTMCall, OTMPut, HighVol, Earnings, Calm, Crash)
    #[arg(long)]
    pub preset: Option<String>,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Net premium per strategy
    #[arg(long)]
    pub premium: Option<f64>,

    /// Calendar days to expiry
    #[arg(long)]
    pub days: Option<u32>,

    /// Implied volatility in percent
    #[arg(long)]
    pub iv: Option<f64>,

    /// Risk-free rate in percent
    #[arg(long)]
    pub rate: Option<f64>,

    /// Dividend yield in percent
    #[arg(long)]
    pub dividend: Option<f64>,
}

impl ParamArgs {
    /// Resolves the flags into validated parameters.
    pub fn resolve(&self, default_preset: &str) -> Result<OptionParameters> {
        let preset = self.preset.as_deref().unwrap_or(default_preset);
        let mut params = preset_parameters(preset)?;

        if let Some(spot) = self.spot {
            debug!(name = "spot", value = spot, "parameter changed");
            params = params.with_spot(spot)?;
        }
        if let Some(strike) = self.strike {
            debug!(name = "strike", value = strike, "parameter changed");
            params = params.with_strike(strike)?;
        }
        if let Some(premium) = self.premium {
            debug!(name = "premium", value = premium, "parameter changed");
            params = params.with_premium(premium)?;
        }
        if let Some(days) = self.days {
            debug!(name = "days_to_expiry", value = days, "parameter changed");
            params = params.with_days_to_expiry(days)?;
        }
        if let Some(iv) = self.iv {
            debug!(name = "implied_volatility", value = iv, "parameter changed");
            params = params.with_implied_volatility(iv)?;
        }
        if let Some(rate) = self.rate {
            debug!(name = "risk_free_rate", value = rate, "parameter changed");
            params = params.with_risk_free_rate(rate)?;
        }
        if let Some(dividend) = self.dividend {
            debug!(name = "dividend_yield", value = dividend, "parameter changed");
            params = params.with_dividend_yield(dividend)?;
        }

        Ok(params)
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes a one-line summary of the parameters in use.
pub(crate) fn write_params_header<W: Write>(out: &mut W, params: &OptionParameters) -> Result<()> {
    writeln!(
        out,
        "S={} K={} Premium={} T={}d IV={}% r={}% q={}%",
        params.spot(),
        params.strike(),
        params.premium(),
        params.days_to_expiry(),
        params.implied_volatility(),
        params.risk_free_rate(),
        params.dividend_yield()
    )?;
    Ok(())
}
