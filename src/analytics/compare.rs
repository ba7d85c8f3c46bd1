//! Comparison of two projection years

use crate::error::{CalculatorError, Result};
use crate::projection::YearRecord;
use serde::{Deserialize, Serialize};

/// Change between an earlier and a later year of the same projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub from_year: u32,
    pub to_year: u32,
    pub year_diff: u32,
    /// Value growth between the two years, percent
    pub growth_percent: f64,
    pub interest_diff: f64,
    pub value_change: f64,
}

fn find_year(records: &[YearRecord], year: u32) -> Result<&YearRecord> {
    records
        .iter()
        .find(|r| r.year == year)
        .ok_or(CalculatorError::YearNotFound(year))
}

/// Compare two years; argument order does not matter
pub fn compare(records: &[YearRecord], year_a: u32, year_b: u32) -> Result<PeriodComparison> {
    let (from_year, to_year) = if year_a <= year_b {
        (year_a, year_b)
    } else {
        (year_b, year_a)
    };
    let earlier = find_year(records, from_year)?;
    let later = find_year(records, to_year)?;

    let value_change = later.value_end_of_year - earlier.value_end_of_year;
    Ok(PeriodComparison {
        from_year,
        to_year,
        year_diff: to_year - from_year,
        growth_percent: value_change / earlier.value_end_of_year * 100.0,
        interest_diff: later.interest - earlier.interest,
        value_change,
    })
}

/// Years picked in the table for comparison (at most two)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearSelection {
    years: Vec<u32>,
}

impl YearSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a year
    ///
    /// Clicking a selected year removes it. With two years already picked, a
    /// third click drops the older pick.
    pub fn toggle(&mut self, year: u32) {
        if let Some(position) = self.years.iter().position(|y| *y == year) {
            self.years.remove(position);
        } else if self.years.len() < 2 {
            self.years.push(year);
        } else {
            self.years = vec![self.years[1], year];
        }
    }

    pub fn contains(&self, year: u32) -> bool {
        self.years.contains(&year)
    }

    /// Selected years in click order
    pub fn years(&self) -> &[u32] {
        &self.years
    }

    /// The selected pair, earliest first, once two years are picked
    pub fn pair(&self) -> Option<(u32, u32)> {
        match self.years.as_slice() {
            [a, b] => Some(((*a).min(*b), (*a).max(*b))),
            _ => None,
        }
    }

    /// Comparison for the current selection, if complete
    pub fn comparison(&self, records: &[YearRecord]) -> Option<Result<PeriodComparison>> {
        self.pair().map(|(a, b)| compare(records, a, b))
    }
}
