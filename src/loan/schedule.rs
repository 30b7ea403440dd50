//! Amortization output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Period number (1-indexed)
    pub period: u32,

    /// Due date of this period's payment
    pub due_date: NaiveDate,

    /// Month/year label for the due date
    pub label: String,

    // Split of the fixed payment
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,

    /// Interest paid from period 1 through this one
    pub total_interest: f64,

    /// Remaining balance after this payment, never below zero
    pub balance: f64,
}

/// Complete amortization result
///
/// `payment` and `total_interest` are `None` (with an empty schedule) when the
/// inputs were insufficient to compute anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Fixed periodic payment
    pub payment: Option<f64>,

    /// Interest paid over the full term
    pub total_interest: Option<f64>,

    /// Period-by-period breakdown
    pub schedule: Vec<ScheduleEntry>,
}

impl LoanResult {
    /// The insufficient-input result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.payment.is_none()
    }

    /// Add a schedule row
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.schedule.push(entry);
    }

    /// Get summary statistics
    pub fn summary(&self) -> LoanSummary {
        let total_principal: f64 = self.schedule.iter().map(|e| e.principal).sum();
        let total_paid: f64 = self.schedule.iter().map(|e| e.payment).sum();

        LoanSummary {
            total_periods: self.schedule.len() as u32,
            payment: self.payment,
            total_interest: self.total_interest,
            total_principal,
            total_paid,
            final_balance: self.schedule.last().map(|e| e.balance).unwrap_or(0.0),
            final_due_date: self.schedule.last().map(|e| e.due_date),
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub total_periods: u32,
    pub payment: Option<f64>,
    pub total_interest: Option<f64>,
    pub total_principal: f64,
    pub total_paid: f64,
    pub final_balance: f64,
    pub final_due_date: Option<NaiveDate>,
}
