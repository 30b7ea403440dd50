//! Load loan scenarios from CSV

use chrono::NaiveDate;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::params::{LoanParameters, MAX_TERM_MONTHS};
use crate::error::{LoadResult, LoanError};

/// Raw CSV row: Name,Principal,TermYears,TermMonths,AnnualRate,StartDate
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: Option<f64>,
    #[serde(rename = "TermYears")]
    term_years: Option<u32>,
    #[serde(rename = "TermMonths")]
    term_months: Option<u32>,
    #[serde(rename = "AnnualRate")]
    annual_rate: Option<f64>,
    #[serde(rename = "StartDate")]
    start_date: String,
}

impl CsvRow {
    fn to_named_loan(self) -> LoadResult<NamedLoan> {
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| LoanError::InvalidDate {
                name: self.name.clone(),
                value: self.start_date.clone(),
            })?;

        let params = LoanParameters {
            principal: self.principal,
            term_years: self.term_years,
            term_months: self.term_months,
            annual_rate: self.annual_rate,
            start_date,
        };
        if !params.term_within_limit() {
            return Err(LoanError::TermTooLong {
                name: self.name,
                max_months: MAX_TERM_MONTHS,
            });
        }

        Ok(NamedLoan {
            name: self.name,
            params,
        })
    }
}

/// A loan parameter set with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLoan {
    pub name: String,
    pub params: LoanParameters,
}

/// Load all loans from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> LoadResult<Vec<NamedLoan>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load loans from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> LoadResult<Vec<NamedLoan>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> LoadResult<Vec<NamedLoan>> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.to_named_loan()?);
    }

    Ok(loans)
}
