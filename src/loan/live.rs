//! Live calculator bound to a single mutable parameter set
//!
//! Every setter recomputes the full result before returning it, so the
//! stored result always reflects the current parameters.

use chrono::NaiveDate;
use log::debug;

use super::engine::compute_params;
use super::params::LoanParameters;
use super::schedule::LoanResult;

/// Single loan whose result is recomputed on every parameter change
#[derive(Debug, Clone)]
pub struct LiveCalculator {
    params: LoanParameters,
    result: LoanResult,
}

impl LiveCalculator {
    /// Start with empty parameters dated today
    pub fn new() -> Self {
        Self::with_params(LoanParameters::default())
    }

    /// Start from an existing parameter set, computing its result immediately
    pub fn with_params(mut params: LoanParameters) -> Self {
        // Zero terms count as unset; years wins as it would in compute
        params.term_years = params.term_years.filter(|&y| y != 0);
        params.term_months = params.term_months.filter(|&m| m != 0);
        if params.term_years.is_some() {
            params.term_months = None;
        } else {
            params.term_years = None;
        }
        let result = compute_params(&params);
        Self { params, result }
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    pub fn result(&self) -> &LoanResult {
        &self.result
    }

    pub fn set_principal(&mut self, principal: Option<f64>) -> &LoanResult {
        self.params.principal = principal;
        self.recompute()
    }

    pub fn set_annual_rate(&mut self, annual_rate: Option<f64>) -> &LoanResult {
        self.params.annual_rate = annual_rate;
        self.recompute()
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) -> &LoanResult {
        self.params.start_date = start_date;
        self.recompute()
    }

    /// Set the term in years; a non-zero value clears any month term
    pub fn set_term_years(&mut self, years: Option<u32>) -> &LoanResult {
        self.params.term_years = years.filter(|&y| y != 0);
        if self.params.term_years.is_some() {
            self.params.term_months = None;
        }
        self.recompute()
    }

    /// Set the term in months; a non-zero value clears any year term
    pub fn set_term_months(&mut self, months: Option<u32>) -> &LoanResult {
        self.params.term_months = months.filter(|&m| m != 0);
        if self.params.term_months.is_some() {
            self.params.term_years = None;
        }
        self.recompute()
    }

    /// Recompute the result from the current parameters
    pub fn recompute(&mut self) -> &LoanResult {
        self.result = compute_params(&self.params);
        debug!(
            "live recompute: {} periods, payment {:?}",
            self.result.schedule.len(),
            self.result.payment
        );
        &self.result
    }
}

impl Default for LiveCalculator {
    fn default() -> Self {
        Self::new()
    }
}
