use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use decision_engine::simulate_decision;
use models::{Decision, FinancialProfile};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "run-simulation",
    about = "Simulate a life decision against a financial profile, both read from JSON files."
)]
struct Args {
    /// Path to the financial profile JSON
    #[arg(short, long)]
    profile: PathBuf,

    /// Path to the decision JSON (tagged with "decisionType")
    #[arg(short, long)]
    decision: PathBuf,

    /// Reference date for projections (YYYY-MM-DD); defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.profile)
        .with_context(|| format!("reading {}", args.profile.display()))?;
    let profile: FinancialProfile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing profile JSON in {}", args.profile.display()))?;

    let raw = fs::read_to_string(&args.decision)
        .with_context(|| format!("reading {}", args.decision.display()))?;
    let decision: Decision = serde_json::from_str(&raw)
        .with_context(|| format!("parsing decision JSON in {}", args.decision.display()))?;

    let as_of = args.as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
    let result = simulate_decision(&profile, &decision, as_of);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
