//! Fixed-payment loan amortization

mod calendar;
mod calculator;
mod engine;
mod live;
mod params;
mod schedule;
mod state;
pub mod export;
pub mod loader;

pub use calendar::{advance_month, period_label};
pub use calculator::AmortizationCalculator;
pub use engine::{annuity_payment, compute, compute_batch, compute_params};
pub use live::LiveCalculator;
pub use params::{monthly_rate, LoanParameters, MAX_TERM_MONTHS};
pub use schedule::{LoanResult, LoanSummary, ScheduleEntry};
pub use state::AmortizationState;
pub use export::{write_schedule_csv, write_schedule_file};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedLoan};
