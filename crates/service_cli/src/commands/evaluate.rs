//! Evaluate command implementation
//!
//! Samples a strategy's profit/loss curve and reports its breakevens
//! alongside the sampled maximum profit and loss.

use std::io::Write;

use pricer_models::engine::evaluate_strategy;
use pricer_models::evaluator::StrategyEvaluation;
use serde::Serialize;
use tracing::info;

use super::{write_json, write_params_header, ParamArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

#[derive(Serialize)]
struct EvaluationReport<'a> {
    #[serde(flatten)]
    evaluation: &'a StrategyEvaluation,
    max_profit: Option<f64>,
    max_loss: Option<f64>,
}

/// Run the evaluate command
pub fn run<W: Write>(
    strategy_id: &str,
    args: &ParamArgs,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    let params = args.resolve(&config.default_preset)?;
    info!(strategy = strategy_id, "Strategy selected");

    let evaluation = evaluate_strategy(strategy_id, &params)?;

    match config.format {
        OutputFormat::Json => write_json(
            out,
            &EvaluationReport {
                evaluation: &evaluation,
                max_profit: evaluation.max_profit(),
                max_loss: evaluation.max_loss(),
            },
        )?,
        OutputFormat::Table => {
            let definition = evaluation.strategy.definition();
            writeln!(out, "{} ({})", definition.name, definition.legs.join(", "))?;
            write_params_header(out, &params)?;
            writeln!(out, "┌────────────┬────────────┐")?;
            writeln!(out, "│ Price      │ P/L        │")?;
            writeln!(out, "├────────────┼────────────┤")?;
            for point in &evaluation.curve {
                writeln!(out, "│ {:>10.2} │ {:>10.2} │", point.price, point.profit_loss)?;
            }
            writeln!(out, "└────────────┴────────────┘")?;

            let breakevens: Vec<String> = evaluation
                .breakevens
                .iter()
                .map(|b| format!("{:.2}", b))
                .collect();
            writeln!(out, "Breakeven: {}", breakevens.join(", "))?;
            if let (Some(max_profit), Some(max_loss)) =
                (evaluation.max_profit(), evaluation.max_loss())
            {
                writeln!(out, "Max profit: {:.2}", max_profit)?;
                writeln!(out, "Max loss: {:.2}", max_loss)?;
            }
        }
    }

    Ok(())
}
