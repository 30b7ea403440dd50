//! Running balance state while building a schedule

use chrono::NaiveDate;
use super::calendar::advance_month;

/// State of the loan at a point in time during amortization
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current period (0 before the first payment)
    pub period: u32,

    /// Due date of the current period
    pub due_date: NaiveDate,

    /// Outstanding balance, may go slightly negative from float error
    pub balance: f64,

    /// Cumulative interest paid
    pub total_interest: f64,
}

impl AmortizationState {
    /// Initialize state at loan origination
    pub fn new(principal: f64, start_date: NaiveDate) -> Self {
        Self {
            period: 0,
            due_date: start_date,
            balance: principal,
            total_interest: 0.0,
        }
    }

    /// Apply one payment, returning the (principal, interest) split
    pub fn apply_payment(&mut self, payment: f64, monthly_rate: f64) -> (f64, f64) {
        self.period += 1;

        let interest = self.balance * monthly_rate;
        let principal = payment - interest;
        self.balance -= principal;
        self.total_interest += interest;

        (principal, interest)
    }

    /// Balance as reported on the schedule
    pub fn reported_balance(&self) -> f64 {
        if self.balance > 0.0 {
            self.balance
        } else {
            0.0
        }
    }

    /// Move the due date to the next period
    pub fn advance_due_date(&mut self) {
        self.due_date = advance_month(self.due_date);
    }
}
