//! Price command implementation
//!
//! Black-Scholes call and put fair values for one parameter set.

use std::io::Write;

use pricer_models::engine::price_option;
use tracing::info;

use super::{write_json, write_params_header, ParamArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the price command
pub fn run<W: Write>(args: &ParamArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let params = args.resolve(&config.default_preset)?;
    info!(spot = params.spot(), strike = params.strike(), "Pricing option");

    let priced = price_option(&params)?;

    match config.format {
        OutputFormat::Json => write_json(out, &priced)?,
        OutputFormat::Table => {
            write_params_header(out, &params)?;
            writeln!(out, "┌────────────┬────────────┐")?;
            writeln!(out, "│ Call       │ Put        │")?;
            writeln!(out, "├────────────┼────────────┤")?;
            writeln!(out, "│ {:>10.4} │ {:>10.4} │", priced.call_price, priced.put_price)?;
            writeln!(out, "└────────────┴────────────┘")?;
        }
    }

    Ok(())
}
