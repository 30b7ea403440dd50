//! Loan input parameters

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inputs to one amortization computation
///
/// Term may be expressed either in years or in months. When both are present
/// a non-zero year count wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: Option<f64>,

    /// Term in whole years (12 periods each)
    pub term_years: Option<u32>,

    /// Term in months
    pub term_months: Option<u32>,

    /// Nominal annual interest rate in percent (12.0 = 12%)
    pub annual_rate: Option<f64>,

    /// Date of the first payment
    pub start_date: NaiveDate,
}

impl LoanParameters {
    /// Parameters with a month-denominated term
    pub fn new(principal: f64, term_months: u32, annual_rate: f64, start_date: NaiveDate) -> Self {
        Self {
            principal: Some(principal),
            term_years: None,
            term_months: Some(term_months),
            annual_rate: Some(annual_rate),
            start_date,
        }
    }

    /// Parameters with a year-denominated term
    pub fn with_years(principal: f64, term_years: u32, annual_rate: f64, start_date: NaiveDate) -> Self {
        Self {
            principal: Some(principal),
            term_years: Some(term_years),
            term_months: None,
            annual_rate: Some(annual_rate),
            start_date,
        }
    }

    /// Number of monthly periods (0 when no term is set)
    pub fn term_in_periods(&self) -> u32 {
        match self.term_years {
            Some(years) if years != 0 => years.saturating_mul(12),
            _ => self.term_months.unwrap_or(0),
        }
    }

    /// Whether the resolved term fits within [`MAX_TERM_MONTHS`]
    pub fn term_within_limit(&self) -> bool {
        self.term_years.unwrap_or(0) <= MAX_TERM_MONTHS / 12
            && self.term_in_periods() <= MAX_TERM_MONTHS
    }

    /// Monthly rate as a decimal, if an annual rate is set
    pub fn monthly_rate(&self) -> Option<f64> {
        self.annual_rate.map(monthly_rate)
    }
}

impl Default for LoanParameters {
    /// Empty parameter set starting today
    fn default() -> Self {
        Self {
            principal: None,
            term_years: None,
            term_months: None,
            annual_rate: None,
            start_date: Local::now().date_naive(),
        }
    }
}

/// Longest term accepted from files and the command line (100 years)
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    (annual_rate_pct / 100.0) / 12.0
}
