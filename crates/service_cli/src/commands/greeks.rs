//! Greeks command implementation

use std::io::Write;

use pricer_models::engine::estimate_greeks;
use tracing::info;

use super::{write_json, write_params_header, ParamArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the greeks command
pub fn run<W: Write>(args: &ParamArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let params = args.resolve(&config.default_preset)?;
    info!(moneyness = params.moneyness(), "Estimating Greeks");

    let greeks = estimate_greeks(&params);

    match config.format {
        OutputFormat::Json => write_json(out, &greeks)?,
        OutputFormat::Table => {
            write_params_header(out, &params)?;
            let rows = [
                ("Delta (call)", greeks.delta_call),
                ("Delta (put)", greeks.delta_put),
                ("Gamma", greeks.gamma),
                ("Theta", greeks.theta),
                ("Vega", greeks.vega),
                ("Rho (call)", greeks.rho_call),
                ("Rho (put)", greeks.rho_put),
            ];
            writeln!(out, "┌──────────────┬────────────┐")?;
            for (label, value) in rows {
                writeln!(out, "│ {:<12} │ {:>10.4} │", label, value)?;
            }
            writeln!(out, "└──────────────┴────────────┘")?;
        }
    }

    Ok(())
}
