//! Loan Desk CLI
//!
//! Computes a single amortization schedule and prints it, optionally writing
//! the full schedule to CSV or emitting JSON.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;

use loan_desk::loan::{compute_params, write_schedule_file, LoanParameters};

/// Fixed-payment loan amortization
#[derive(Parser, Debug)]
#[command(name = "loan_desk", version, about = "Compute a loan amortization schedule")]
struct Cli {
    /// Amount borrowed
    #[arg(long)]
    principal: f64,

    /// Term in years (at most 100)
    #[arg(long, conflicts_with = "months", value_parser = clap::value_parser!(u32).range(1..=100))]
    years: Option<u32>,

    /// Term in months (at most 1200)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1200))]
    months: Option<u32>,

    /// Nominal annual rate in percent, e.g. 6.5
    #[arg(long)]
    rate: f64,

    /// Date of the first payment (YYYY-MM-DD), defaults to today
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Number of schedule rows to print
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.years.is_none() && cli.months.is_none() {
        bail!("one of --years or --months is required");
    }

    let params = LoanParameters {
        principal: Some(cli.principal),
        term_years: cli.years,
        term_months: cli.months,
        annual_rate: Some(cli.rate),
        start_date: cli.start.unwrap_or_else(|| Local::now().date_naive()),
    };

    let result = compute_params(&params);
    info!("computed {} periods", result.schedule.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let Some(payment) = result.payment else {
            println!("Insufficient input: principal, term and rate must all be non-zero");
            return Ok(());
        };

        println!("Loan Desk v{}", env!("CARGO_PKG_VERSION"));
        println!("==================\n");
        println!("  Principal: {:.2}", cli.principal);
        println!("  Term: {} months", params.term_in_periods());
        println!("  Rate: {}%", cli.rate);
        println!("  Payment: {:.2}", payment);
        println!();

        println!("{:>6} {:>9} {:>14} {:>14} {:>14} {:>14} {:>16}",
            "Period", "Date", "Payment", "Principal", "Interest", "Cum Interest", "Balance");
        println!("{}", "-".repeat(95));

        for entry in result.schedule.iter().take(cli.rows) {
            println!("{:>6} {:>9} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                entry.period,
                entry.label,
                entry.payment,
                entry.principal,
                entry.interest,
                entry.total_interest,
                entry.balance,
            );
        }

        if result.schedule.len() > cli.rows {
            println!("... ({} more periods)", result.schedule.len() - cli.rows);
        }

        let summary = result.summary();
        println!("\nSummary:");
        println!("  Total Periods: {}", summary.total_periods);
        println!("  Total Paid: {:.2}", summary.total_paid);
        println!("  Total Interest: {:.2}", summary.total_interest.unwrap_or(0.0));
        if let Some(last) = summary.final_due_date {
            println!("  Final Payment: {}", last);
        }
    }

    if let Some(path) = &cli.csv {
        write_schedule_file(path, &result)
            .with_context(|| format!("writing schedule to {}", path))?;
        println!("\nFull schedule written to: {}", path);
    }

    Ok(())
}
