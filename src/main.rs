//! Investment Calculator CLI
//!
//! Command-line front end for running projections and managing saved scenarios

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use investment_calculator::{
    analytics::{export_csv, to_csv, Analysis, PeriodComparison, SortDirection, SortKey, SortState, TableRow, YearSelection},
    input::InputField,
    report::{render_comparison, render_scenario_list, render_summary, render_table},
    scenario::{JsonFileScenarioRepository, ScenarioRepository, DEFAULT_STORE_PATH},
    InvestmentInput, SummaryStatistics, YearRecord,
};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "investment_calculator", version)]
#[command(about = "Project the growth of a recurring investment year by year")]
struct Cli {
    /// JSON file holding saved scenarios
    #[arg(long, global = true, default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project an input given on the command line
    Project {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Manage saved scenarios
    #[command(subcommand)]
    Scenario(ScenarioCommand),
}

#[derive(Subcommand, Debug)]
enum ScenarioCommand {
    /// Save an input under a name
    Save {
        name: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// List saved scenarios
    List,
    /// Print a saved scenario as JSON
    Show { id: i64 },
    /// Delete a saved scenario
    Delete { id: i64 },
    /// Project a saved scenario
    Run {
        id: i64,
        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Input fields; anything left out keeps its default
#[derive(Args, Debug)]
struct InputArgs {
    /// Amount invested up front
    #[arg(long)]
    initial_investment: Option<f64>,
    /// Contribution added every year
    #[arg(long)]
    annual_investment: Option<f64>,
    /// Expected return, percent per year
    #[arg(long, allow_negative_numbers = true)]
    expected_return: Option<f64>,
    /// Years to project (1-50)
    #[arg(long)]
    duration: Option<u32>,
    /// Inflation, percent per year
    #[arg(long)]
    inflation_rate: Option<f64>,
    /// Show values in today's purchasing power
    #[arg(long)]
    adjust_for_inflation: bool,
}

impl InputArgs {
    fn to_input(&self) -> investment_calculator::Result<InvestmentInput> {
        let overrides = [
            (InputField::InitialInvestment, self.initial_investment),
            (InputField::AnnualInvestment, self.annual_investment),
            (InputField::ExpectedReturn, self.expected_return),
            (InputField::Duration, self.duration.map(f64::from)),
            (InputField::InflationRate, self.inflation_rate),
        ];

        let mut input = InvestmentInput::default().with_inflation_adjustment(self.adjust_for_inflation);
        for (field, value) in overrides {
            if let Some(value) = value {
                input = input.with_field(field, value)?;
            }
        }
        Ok(input)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Column to sort the table by
    #[arg(long, default_value = "year")]
    sort: SortKey,
    /// Sort descending instead of ascending
    #[arg(long)]
    descending: bool,
    /// Compare two projection years
    #[arg(long, num_args = 2, value_names = ["YEAR_A", "YEAR_B"])]
    compare: Option<Vec<u32>>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    fn sort_state(&self) -> SortState {
        SortState {
            key: self.sort,
            direction: if self.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        }
    }

    fn compared_years(&self) -> Option<(u32, u32)> {
        match self.compare.as_deref() {
            Some([a, b]) => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Everything a chart or table front end needs, as one JSON document
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionReport<'a> {
    input: &'a InvestmentInput,
    rows: Vec<TableRow>,
    summary: SummaryStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<PeriodComparison>,
}

fn render(input: &InvestmentInput, records: &[YearRecord], args: &RenderArgs) -> Result<()> {
    let analysis = Analysis::new(records)?;
    let summary = analysis.summary()?;
    let comparison = match args.compared_years() {
        Some((a, b)) => Some(analysis.compare(a, b)?),
        None => None,
    };

    let text = match args.format {
        OutputFormat::Csv => {
            if let Some(path) = &args.output {
                export_csv(records, input, path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("CSV written to: {}", path.display());
                return Ok(());
            }
            to_csv(records, input)?
        }
        OutputFormat::Json => {
            let report = ProjectionReport {
                input,
                rows: analysis.rows(args.sort_state()),
                summary,
                comparison,
            };
            serde_json::to_string_pretty(&report)?
        }
        OutputFormat::Table => {
            let mut selection = YearSelection::new();
            if let Some((a, b)) = args.compared_years() {
                selection.toggle(a);
                if b != a {
                    selection.toggle(b);
                }
            }

            let mut sections = vec![
                render_table(&analysis, args.sort_state(), input.adjust_for_inflation, &selection),
                render_summary(&summary),
            ];
            if let Some(comparison) = &comparison {
                sections.push(render_comparison(comparison));
            }
            sections.join("\n\n")
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Results written to: {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut store = JsonFileScenarioRepository::new(&cli.store);

    match cli.command {
        Command::Project { input, render: render_args } => {
            let input = input.to_input().context("invalid input")?;
            let records = investment_calculator::try_project(&input)?;
            info!("projected {} years", records.len());
            render(&input, &records, &render_args)?;
        }
        Command::Scenario(ScenarioCommand::Save { name, input }) => {
            let input = input.to_input().context("invalid input")?;
            let scenario = store.save(&name, &input)?;
            println!("Saved scenario {} ({})", scenario.id, scenario.name);
        }
        Command::Scenario(ScenarioCommand::List) => {
            println!("{}", render_scenario_list(&store.list()?));
        }
        Command::Scenario(ScenarioCommand::Show { id }) => {
            println!("{}", serde_json::to_string_pretty(&store.get(id)?)?);
        }
        Command::Scenario(ScenarioCommand::Delete { id }) => {
            let removed = store.delete(id)?;
            println!("Deleted scenario {} ({})", removed.id, removed.name);
        }
        Command::Scenario(ScenarioCommand::Run { id, render: render_args }) => {
            let scenario = store.get(id)?;
            println!("Scenario: {} (saved {})\n", scenario.name, scenario.date);
            let records = scenario.project()?;
            render(&scenario.input, &records, &render_args)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
