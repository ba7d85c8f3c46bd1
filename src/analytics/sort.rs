//! Sortable views over a projection
//!
//! Each sort key is a named comparator strategy. Derived keys are recomputed
//! per record from the same formulas the table displays.

use super::metrics::{growth_ratio, implied_initial_investment, total_amount_invested, total_interest};
use crate::error::{CalculatorError, Result};
use crate::projection::YearRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Column a projection can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Year,
    ValueEndOfYear,
    Interest,
    TotalInterest,
    TotalAmountInvested,
    YearlyGrowth,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Year,
        SortKey::ValueEndOfYear,
        SortKey::Interest,
        SortKey::TotalInterest,
        SortKey::TotalAmountInvested,
        SortKey::YearlyGrowth,
    ];

    /// Value this key compares for one record
    pub fn value(&self, record: &YearRecord, initial_investment: f64) -> f64 {
        match self {
            SortKey::Year => record.year as f64,
            SortKey::ValueEndOfYear => record.value_end_of_year,
            SortKey::Interest => record.interest,
            SortKey::TotalInterest => total_interest(record, initial_investment),
            SortKey::TotalAmountInvested => total_amount_invested(record, initial_investment),
            SortKey::YearlyGrowth => growth_ratio(record),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Year => "year",
            SortKey::ValueEndOfYear => "valueEndOfYear",
            SortKey::Interest => "interest",
            SortKey::TotalInterest => "totalInterest",
            SortKey::TotalAmountInvested => "totalAmountInvested",
            SortKey::YearlyGrowth => "yearlyGrowth",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CalculatorError;

    /// Accepts the record key (`valueEndOfYear`) or its kebab form (`value-end-of-year`)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CalculatorError::UnknownOption(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CalculatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(CalculatorError::UnknownOption(s.to_string())),
        }
    }
}

/// Active sort of a table: key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Year,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// State after a click on `key`'s column header
    ///
    /// Clicking the active ascending column flips it to descending; every
    /// other click sorts ascending by the clicked key.
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Compare two key values, keeping NaN after every number in both directions
///
/// Plain `partial_cmp` is not a total order once NaN shows up, which a sort
/// needs. Equal values (including `-0.0` vs `0.0`) compare equal so ties keep
/// their original order.
fn compare_values(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

/// Copy of `records` in ascending year order
pub fn in_year_order(records: &[YearRecord]) -> Vec<YearRecord> {
    let mut rows = records.to_vec();
    rows.sort_by_key(|r| r.year);
    rows
}

/// Stable sort with an explicit initial investment for the derived keys
pub fn sort_records(
    records: &[YearRecord],
    key: SortKey,
    direction: SortDirection,
    initial_investment: f64,
) -> Vec<YearRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        compare_values(
            key.value(a, initial_investment),
            key.value(b, initial_investment),
            direction,
        )
    });
    sorted
}

/// Stable sort of a projection by one column
///
/// The initial investment behind the derived keys is recovered from the
/// first record (see [`implied_initial_investment`]).
pub fn sort_by(records: &[YearRecord], key: SortKey, direction: SortDirection) -> Result<Vec<YearRecord>> {
    let initial_investment = implied_initial_investment(records)?;
    Ok(sort_records(records, key, direction, initial_investment))
}
