//! Calculator facade: one live loan plus a book of saved scenarios

use super::engine::compute_params;
use super::live::LiveCalculator;
use super::params::LoanParameters;
use super::schedule::LoanResult;
use crate::scenario::{LoanScenario, ScenarioBook};

/// Owns the live parameter set and the scenario collection
#[derive(Debug, Clone, Default)]
pub struct AmortizationCalculator {
    live: LiveCalculator,
    scenarios: ScenarioBook,
}

impl AmortizationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute a loan without touching the live state
    pub fn compute(&self, params: &LoanParameters) -> LoanResult {
        compute_params(params)
    }

    pub fn live(&self) -> &LiveCalculator {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut LiveCalculator {
        &mut self.live
    }

    /// Save a scenario; `false` when the book is already full
    pub fn add_scenario(&mut self, params: &LoanParameters) -> bool {
        self.scenarios.add(params)
    }

    /// Save the live parameters as a scenario
    pub fn save_live_as_scenario(&mut self) -> bool {
        self.scenarios.add(self.live.params())
    }

    pub fn remove_scenario(&mut self, index: isize) -> Option<LoanScenario> {
        self.scenarios.remove(index)
    }

    pub fn scenarios(&self) -> &ScenarioBook {
        &self.scenarios
    }
}
