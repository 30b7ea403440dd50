//! Bounded collection of saved loan scenarios for side-by-side comparison
//!
//! Each scenario keeps its own parameters plus the payment and total interest
//! computed when it was added. Full schedules are not retained.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::loan::{compute_params, LoanParameters};

/// Maximum number of scenarios held at once
pub const MAX_SCENARIOS: usize = 5;

/// One saved loan and its computed summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    /// Parameters as supplied, including the term representation used
    pub params: LoanParameters,

    /// Resolved number of monthly periods
    pub term_months: u32,

    /// Fixed monthly payment (None for insufficient input)
    pub payment: Option<f64>,

    /// Interest over the full term (None for insufficient input)
    pub total_interest: Option<f64>,
}

/// Ordered list of up to [`MAX_SCENARIOS`] scenarios
///
/// Deserializing from more than [`MAX_SCENARIOS`] entries fails.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use loan_desk::{LoanParameters, ScenarioBook};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut book = ScenarioBook::new();
/// assert!(book.add(&LoanParameters::with_years(200_000.0, 30, 6.5, start)));
/// assert!(book.add(&LoanParameters::new(200_000.0, 180, 5.9, start)));
/// assert_eq!(book.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<LoanScenario>", into = "Vec<LoanScenario>")]
pub struct ScenarioBook {
    scenarios: Vec<LoanScenario>,
}

impl ScenarioBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute and append a scenario.
    ///
    /// Returns `false` without changing anything when the book is full.
    pub fn add(&mut self, params: &LoanParameters) -> bool {
        if self.scenarios.len() >= MAX_SCENARIOS {
            warn!("scenario book full ({} entries), ignoring new scenario", MAX_SCENARIOS);
            return false;
        }

        let result = compute_params(params);
        self.scenarios.push(LoanScenario {
            params: params.clone(),
            term_months: params.term_in_periods(),
            payment: result.payment,
            total_interest: result.total_interest,
        });
        debug!("added scenario #{}", self.scenarios.len());
        true
    }

    /// Remove the scenario at `index`.
    ///
    /// Out-of-range indices (including negative ones) leave the book unchanged.
    pub fn remove(&mut self, index: isize) -> Option<LoanScenario> {
        let idx = usize::try_from(index).ok().filter(|&i| i < self.scenarios.len())?;
        Some(self.scenarios.remove(idx))
    }

    pub fn get(&self, index: usize) -> Option<&LoanScenario> {
        self.scenarios.get(index)
    }

    pub fn scenarios(&self) -> &[LoanScenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= MAX_SCENARIOS
    }

    /// Scenario with the lowest total interest, if any scenario was computable
    pub fn cheapest(&self) -> Option<&LoanScenario> {
        self.scenarios
            .iter()
            .filter(|s| s.total_interest.is_some())
            .min_by(|a, b| {
                let (a, b) = (a.total_interest.unwrap_or(0.0), b.total_interest.unwrap_or(0.0));
                a.total_cmp(&b)
            })
    }
}

impl TryFrom<Vec<LoanScenario>> for ScenarioBook {
    type Error = LoanError;

    fn try_from(scenarios: Vec<LoanScenario>) -> Result<Self, Self::Error> {
        if scenarios.len() > MAX_SCENARIOS {
            return Err(LoanError::TooManyScenarios {
                count: scenarios.len(),
                max: MAX_SCENARIOS,
            });
        }
        Ok(Self { scenarios })
    }
}

impl From<ScenarioBook> for Vec<LoanScenario> {
    fn from(book: ScenarioBook) -> Self {
        book.scenarios
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn loan(principal: f64, months: u32) -> LoanParameters {
        LoanParameters::new(principal, months, 6.0, start())
    }

    fn book_of(n: usize) -> ScenarioBook {
        let mut book = ScenarioBook::new();
        for i in 0..n {
            assert!(book.add(&loan(10_000.0 * (i + 1) as f64, 12)));
        }
        book
    }

    #[test]
    fn test_add_stores_summary() {
        let book = book_of(1);
        let s = book.get(0).unwrap();

        assert_eq!(s.params.principal, Some(10_000.0));
        assert_eq!(s.term_months, 12);
        assert!(s.payment.unwrap() > 0.0);
        assert!(s.total_interest.unwrap() > 0.0);
    }

    #[test]
    fn test_years_term_kept_on_scenario() {
        let mut book = ScenarioBook::new();
        assert!(book.add(&LoanParameters::with_years(50_000.0, 4, 5.0, start())));

        let s = book.get(0).unwrap();
        assert_eq!(s.params.term_years, Some(4));
        assert_eq!(s.params.term_months, None);
        assert_eq!(s.term_months, 48);
    }

    #[test]
    fn test_insufficient_scenario_still_stored() {
        let mut book = ScenarioBook::new();
        assert!(book.add(&loan(10_000.0, 0)));
        assert_eq!(book.get(0).unwrap().payment, None);
        assert_eq!(book.get(0).unwrap().total_interest, None);
    }

    #[test]
    fn test_sixth_scenario_rejected() {
        let mut book = book_of(5);
        let before = book.scenarios().to_vec();

        assert!(book.is_full());
        assert!(!book.add(&loan(1.0, 1)));
        assert_eq!(book.len(), 5);
        assert_eq!(book.scenarios(), before.as_slice());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut book = book_of(3);

        assert!(book.remove(-1).is_none());
        assert!(book.remove(99).is_none());
        assert!(book.remove(3).is_none());
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut book = book_of(3);

        let removed = book.remove(1).unwrap();
        assert_eq!(removed.params.principal, Some(20_000.0));
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(0).unwrap().params.principal, Some(10_000.0));
        assert_eq!(book.get(1).unwrap().params.principal, Some(30_000.0));

        // Room again after a removal
        let mut full = book_of(5);
        full.remove(0);
        assert!(full.add(&loan(1_000.0, 12)));
        assert_eq!(full.get(4).unwrap().params.principal, Some(1_000.0));
    }

    #[test]
    fn test_cheapest() {
        let mut book = ScenarioBook::new();
        assert!(book.cheapest().is_none());

        book.add(&loan(100_000.0, 360));
        book.add(&loan(100_000.0, 120));
        book.add(&loan(100_000.0, 0));

        assert_eq!(book.cheapest().unwrap().term_months, 120);
    }

    #[test]
    fn test_deserialize_within_cap() {
        let json = serde_json::to_string(&book_of(3)).unwrap();
        let book: ScenarioBook = serde_json::from_str(&json).unwrap();

        assert_eq!(book.len(), 3);
        assert_eq!(book.scenarios(), book_of(3).scenarios());
    }

    #[test]
    fn test_deserialize_over_cap_rejected() {
        let mut scenarios = book_of(5).scenarios().to_vec();
        scenarios.extend(book_of(2).scenarios().iter().cloned());
        let json = serde_json::to_string(&scenarios).unwrap();

        let err = serde_json::from_str::<ScenarioBook>(&json).unwrap_err();
        assert!(err.to_string().contains("at most 5 entries, got 7"));

        let err = ScenarioBook::try_from(scenarios).unwrap_err();
        assert!(matches!(err, LoanError::TooManyScenarios { count: 7, max: 5 }));
    }
}
