use anyhow::{Context, Result};
use chrono::NaiveDate;
use metrics_engine::dashboard_metrics;
use models::FinancialProfile;
use std::env;
use std::fs;

fn main() -> Result<()> {
    let profile = env::args()
        .position(|a| a == "--profile")
        .and_then(|i| env::args().nth(i + 1))
        .unwrap_or("profile.json".to_string());
    let as_of = env::args()
        .position(|a| a == "--as-of")
        .and_then(|i| env::args().nth(i + 1));

    let as_of = match as_of {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("parsing --as-of date: {raw}"))?,
        None => chrono::Local::now().date_naive(),
    };

    let raw = fs::read_to_string(&profile).with_context(|| format!("reading {profile}"))?;
    let profile: FinancialProfile =
        serde_json::from_str(&raw).with_context(|| format!("parsing profile JSON in {profile}"))?;

    let metrics = dashboard_metrics(&profile, as_of);
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
