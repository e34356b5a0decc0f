//! Strategies command implementation
//!
//! Lists catalog metadata; no parameters are needed.

use std::io::Write;

use pricer_models::engine::list_strategies;

use super::write_json;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the strategies command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let strategies = list_strategies();

    match config.format {
        OutputFormat::Json => write_json(out, &strategies)?,
        OutputFormat::Table => {
            writeln!(out, "{:<18} {:<18} {:<10} Legs", "Id", "Name", "Outlook")?;
            for summary in &strategies {
                writeln!(
                    out,
                    "{:<18} {:<18} {:<10} {}",
                    summary.id.as_str(),
                    summary.name,
                    summary.outlook.to_string(),
                    summary.legs.join(", ")
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_row_per_strategy() {
        let mut out = Vec::new();
        run(&CliConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.contains("iron-condor"));
        assert!(text.contains("Buy Call K-10, Sell 2 Calls K, Buy Call K+10"));
    }

    #[test]
    fn test_json_output() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0]["id"], "long-call");
        assert_eq!(entries[0]["outlook"], "bullish");
        assert_eq!(entries[6]["legs"][1], "Buy Put");
    }
}
