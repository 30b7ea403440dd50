//! Loan Desk - Fixed-payment loan amortization and scenario comparison
//!
//! This library provides:
//! - Annuity payment and period-by-period amortization schedules
//! - A live calculator that recomputes on every parameter change
//! - A bounded book of saved loan scenarios
//! - CSV import of loan parameters and CSV export of schedules
//! - Article/category/tag store contracts for the content front-end

pub mod error;
pub mod loan;
pub mod scenario;
pub mod content;

// Re-export commonly used types
pub use error::{ContentError, LoanError};
pub use loan::{AmortizationCalculator, LiveCalculator, LoanParameters, LoanResult, ScheduleEntry, compute};
pub use scenario::{LoanScenario, ScenarioBook, MAX_SCENARIOS};
