//! Compare a batch of loans loaded from CSV
//!
//! Computes every loan in parallel and writes one summary row per loan.
//! Supports JSON output via --json flag
//! Accepts config via environment variables:
//!   LOAN_SCENARIOS_PATH (default loan_scenarios.csv)
//!   LOAN_OUTPUT_PATH (default loan_comparison.csv)

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use std::env;
use std::time::Instant;

use loan_desk::loan::{compute_batch, load_scenarios, LoanParameters};

#[derive(Serialize)]
struct ComparisonRow {
    name: String,
    principal: Option<f64>,
    term_months: u32,
    annual_rate: Option<f64>,
    payment: Option<f64>,
    total_interest: Option<f64>,
    total_paid: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let input_path = env::var("LOAN_SCENARIOS_PATH").unwrap_or_else(|_| "loan_scenarios.csv".to_string());
    let output_path = env::var("LOAN_OUTPUT_PATH").unwrap_or_else(|_| "loan_comparison.csv".to_string());

    let start = Instant::now();
    let loans = load_scenarios(&input_path)
        .with_context(|| format!("loading loans from {}", input_path))?;
    info!("loaded {} loans from {} in {:?}", loans.len(), input_path, start.elapsed());

    let params: Vec<LoanParameters> = loans.iter().map(|l| l.params.clone()).collect();
    let results = compute_batch(&params);

    let rows: Vec<ComparisonRow> = loans
        .iter()
        .zip(&results)
        .map(|(loan, result)| {
            if result.is_empty() {
                warn!("loan '{}' has insufficient input", loan.name);
            }
            ComparisonRow {
                name: loan.name.clone(),
                principal: loan.params.principal,
                term_months: loan.params.term_in_periods(),
                annual_rate: loan.params.annual_rate,
                payment: result.payment,
                total_interest: result.total_interest,
                total_paid: result.summary().total_paid,
            }
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path))?;
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    println!("{:<20} {:>14} {:>6} {:>8} {:>12} {:>14}",
        "Loan", "Principal", "Months", "Rate", "Payment", "Interest");
    println!("{}", "-".repeat(79));
    for row in &rows {
        println!("{:<20} {:>14.2} {:>6} {:>8.3} {:>12} {:>14}",
            row.name,
            row.principal.unwrap_or(0.0),
            row.term_months,
            row.annual_rate.unwrap_or(0.0),
            row.payment.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "-".to_string()),
            row.total_interest.map(|t| format!("{:.2}", t)).unwrap_or_else(|| "-".to_string()),
        );
    }

    println!("\nOutput written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
