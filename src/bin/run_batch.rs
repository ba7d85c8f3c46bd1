//! Run projections for a whole batch of named inputs
//!
//! Inputs come from the scenario store or from a CSV sheet; one summary row
//! per scenario is written to the output CSV.

use anyhow::{bail, Context, Result};
use clap::Parser;
use investment_calculator::{
    input::load_inputs,
    report::format_currency,
    scenario::{JsonFileScenarioRepository, ScenarioOutcome, ScenarioRepository},
    InvestmentInput,
};
use log::warn;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Project many saved or listed scenarios at once")]
struct Cli {
    /// Scenario store to read from
    #[arg(long, conflicts_with = "inputs")]
    store: Option<PathBuf>,

    /// CSV sheet of named inputs
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Summary CSV to write
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,
}

/// One labelled input waiting to be projected
struct BatchItem {
    scenario_id: Option<i64>,
    name: String,
    input: InvestmentInput,
}

/// Output row of the summary file
#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "ScenarioId")]
    scenario_id: Option<i64>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "Adjusted")]
    adjusted: bool,
    #[serde(rename = "FinalValue")]
    final_value: f64,
    #[serde(rename = "TotalReturn")]
    total_return: f64,
    #[serde(rename = "TotalReturnPct")]
    total_return_percentage: f64,
    #[serde(rename = "AverageGrowth")]
    average_growth: f64,
    #[serde(rename = "TotalInterest")]
    total_interest: f64,
}

impl From<&ScenarioOutcome> for SummaryRow {
    fn from(outcome: &ScenarioOutcome) -> Self {
        Self {
            scenario_id: outcome.scenario_id,
            name: outcome.name.clone(),
            years: outcome.input.duration,
            adjusted: outcome.input.adjust_for_inflation,
            final_value: outcome.final_value,
            total_return: outcome.summary.total_return,
            total_return_percentage: outcome.summary.total_return_percentage,
            average_growth: outcome.summary.average_growth,
            total_interest: outcome.summary.total_interest,
        }
    }
}

fn load_items(cli: &Cli) -> Result<Vec<BatchItem>> {
    if let Some(path) = &cli.inputs {
        let inputs = load_inputs(path).with_context(|| format!("loading {}", path.display()))?;
        return Ok(inputs
            .into_iter()
            .map(|named| BatchItem {
                scenario_id: None,
                name: named.name,
                input: named.input,
            })
            .collect());
    }

    let store = match &cli.store {
        Some(path) => JsonFileScenarioRepository::new(path),
        None => JsonFileScenarioRepository::default(),
    };
    let scenarios = store
        .list()
        .with_context(|| format!("reading {}", store.path().display()))?;
    Ok(scenarios
        .into_iter()
        .map(|scenario| BatchItem {
            scenario_id: Some(scenario.id),
            name: scenario.name,
            input: scenario.input,
        })
        .collect())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let items = load_items(&cli)?;
    if items.is_empty() {
        bail!("nothing to project");
    }
    println!("Loaded {} scenarios in {:?}", items.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Each projection is independent; results come back in input order
    let results: Vec<_> = items
        .par_iter()
        .map(|item| ScenarioOutcome::from_input(item.scenario_id, &item.name, &item.input))
        .collect();

    let mut outcomes = Vec::with_capacity(results.len());
    for (item, result) in items.iter().zip(results) {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => warn!("skipping {}: {}", item.name, err),
        }
    }
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for outcome in &outcomes {
        writer.serialize(SummaryRow::from(outcome))?;
    }
    writer.flush()?;
    println!("Output written to {}", cli.output.display());

    if let Some(best) = outcomes
        .iter()
        .max_by(|a, b| a.final_value.total_cmp(&b.final_value))
    {
        println!("\nBatch Summary:");
        println!("  Scenarios projected: {}", outcomes.len());
        println!(
            "  Highest final value: {} ({})",
            format_currency(best.final_value),
            best.name
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
