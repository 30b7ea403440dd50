//! Core amortization engine for fixed-payment monthly loans

use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;

use super::calendar::period_label;
use super::params::{monthly_rate, LoanParameters};
use super::schedule::{LoanResult, ScheduleEntry};
use super::state::AmortizationState;

/// Fixed periodic payment that retires `principal` over `periods` months.
///
/// Uses the annuity formula `P * r / (1 - (1 + r)^-n)`. When the rate is so
/// small that the denominator vanishes, the principal is spread evenly.
pub fn annuity_payment(principal: f64, monthly_rate: f64, periods: u32) -> f64 {
    let denominator = 1.0 - (1.0 + monthly_rate).powf(-f64::from(periods));
    if denominator == 0.0 {
        return principal / f64::from(periods);
    }
    principal * monthly_rate / denominator
}

/// Treats unset, zero and NaN alike as "no value"
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Compute the payment, total interest and full schedule for one loan.
///
/// Returns [`LoanResult::empty`] when principal, term or rate is missing or
/// zero. Negative inputs are not rejected.
pub fn compute(
    principal: Option<f64>,
    term_months: u32,
    annual_rate: Option<f64>,
    start_date: NaiveDate,
) -> LoanResult {
    let (principal, rate) = match (present(principal), present(annual_rate)) {
        (Some(p), Some(r)) if term_months != 0 => (p, r),
        _ => return LoanResult::empty(),
    };

    let r = monthly_rate(rate);
    let payment = annuity_payment(principal, r, term_months);

    let mut result = LoanResult {
        payment: Some(payment),
        total_interest: None,
        schedule: Vec::new(),
    };
    let mut state = AmortizationState::new(principal, start_date);

    for _ in 1..=term_months {
        let (principal_portion, interest) = state.apply_payment(payment, r);

        result.add_entry(ScheduleEntry {
            period: state.period,
            due_date: state.due_date,
            label: period_label(state.due_date),
            payment,
            principal: principal_portion,
            interest,
            total_interest: state.total_interest,
            balance: state.reported_balance(),
        });

        state.advance_due_date();
    }

    result.total_interest = Some(state.total_interest);

    debug!(
        "amortized {:.2} over {} months at {}%: payment {:.2}, interest {:.2}",
        principal, term_months, rate, payment, state.total_interest
    );

    result
}

/// Compute from a parameter set, resolving years/months into a period count
pub fn compute_params(params: &LoanParameters) -> LoanResult {
    compute(
        params.principal,
        params.term_in_periods(),
        params.annual_rate,
        params.start_date,
    )
}

/// Compute many independent loans in parallel, preserving input order
pub fn compute_batch(params: &[LoanParameters]) -> Vec<LoanResult> {
    params.par_iter().map(compute_params).collect()
}
