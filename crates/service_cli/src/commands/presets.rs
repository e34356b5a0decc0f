//! Presets command implementation

use std::io::Write;

use pricer_models::presets::presets;

use super::write_json;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the presets command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let presets = presets();

    match config.format {
        OutputFormat::Json => write_json(out, presets)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<9} {:<16} {:>6} {:>6} {:>7} {:>4} {:>5} {:>5} {:>5}",
                "Id", "Label", "S", "K", "Premium", "T", "IV", "r", "q"
            )?;
            for preset in presets {
                let v = &preset.values;
                writeln!(
                    out,
                    "{:<9} {:<16} {:>6} {:>6} {:>7} {:>4} {:>5} {:>5} {:>5}",
                    preset.id,
                    preset.label,
                    v.spot,
                    v.strike,
                    v.premium,
                    v.days_to_expiry,
                    v.implied_volatility,
                    v.risk_free_rate,
                    v.dividend_yield
                )?;
            }
        }
    }

    Ok(())
}
