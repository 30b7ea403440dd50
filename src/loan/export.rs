//! Write amortization schedules as CSV

use std::io::Write;
use std::path::Path;

use super::schedule::LoanResult;
use crate::error::LoadResult;

const HEADER: [&str; 8] = [
    "Period", "Date", "Label", "Payment", "Principal", "Interest", "TotalInterest", "Balance",
];

/// Write every schedule row of `result` to `writer`
pub fn write_schedule_csv<W: Write>(writer: W, result: &LoanResult) -> LoadResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for entry in &result.schedule {
        wtr.write_record([
            entry.period.to_string(),
            entry.due_date.to_string(),
            entry.label.clone(),
            format!("{:.8}", entry.payment),
            format!("{:.8}", entry.principal),
            format!("{:.8}", entry.interest),
            format!("{:.8}", entry.total_interest),
            format!("{:.8}", entry.balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the schedule to a file, replacing it if present
pub fn write_schedule_file<P: AsRef<Path>>(path: P, result: &LoanResult) -> LoadResult<()> {
    let file = std::fs::File::create(path)?;
    write_schedule_csv(file, result)
}
