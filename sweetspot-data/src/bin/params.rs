use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sweetspot_data::load_parameters;
use tracing_subscriber::EnvFilter;

/// Validate tax parameter files and print the resulting parameter set.
///
/// The bracket CSV should have the following columns:
/// - tax_year: The tax year (e.g., 2026)
/// - schedule: `general` (IRPF) or `savings`
/// - upper_limit: Cumulative ceiling of the bracket (empty for unbounded)
/// - rate: The marginal tax rate as a decimal (e.g., 0.19)
#[derive(Parser, Debug)]
#[command(name = "sweetspot-params")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file with the IRPF and savings bracket schedules
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Path to a TOML file with rates, minimum salary and sweep defaults
    #[arg(short, long)]
    parameters: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();

    let args = Args::parse();

    let resolved = load_parameters(args.parameters.as_deref(), args.brackets.as_deref())
        .context("Failed to load tax parameters")?;
    let params = &resolved.params;

    println!("Tax year: {}", params.tax_year);
    println!("IRPF brackets:");
    for bracket in params.income_brackets.brackets() {
        match bracket.upper_limit {
            Some(limit) => println!("  up to {:>10}  {}", limit, bracket.rate),
            None => println!("  {:>16}  {}", "above", bracket.rate),
        }
    }

    let tiers = &params.savings_tiers;
    println!("Savings tiers:");
    println!("  up to {:>10}  {}", tiers.first_limit, tiers.first_rate);
    println!("  up to {:>10}  {}", tiers.second_limit, tiers.second_rate);
    println!("  {:>16}  {}", "above", tiers.third_rate);

    println!("Corporate tax rate: {}", params.corporate_tax_rate);
    println!("Minimum salary: {}", params.minimum_salary);
    println!(
        "Sweep: revenue {}, expenses {}, step {}",
        resolved.sweep.revenue, resolved.sweep.expenses, resolved.sweep.step
    );

    Ok(())
}
