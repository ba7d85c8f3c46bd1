//! Table view of a projection
//!
//! [`Analysis`] takes a projection in any order, keeps it in year order,
//! recovers the initial investment once and serves every table-level
//! operation from it.

use super::compare::{compare, PeriodComparison};
use super::export::write_csv;
use super::metrics::{growth_rate, implied_initial_investment, total_amount_invested, total_interest};
use super::sort::{in_year_order, sort_records, SortDirection, SortKey, SortState};
use super::summary::{summary_statistics, SummaryStatistics};
use crate::error::Result;
use crate::projection::YearRecord;
use serde::Serialize;
use std::io::Write;

/// One rendered table row: the record plus its derived columns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(flatten)]
    pub record: YearRecord,
    pub total_interest: f64,
    pub total_amount_invested: f64,
    pub growth_rate: f64,
    /// Values of years 1..=year, for the row's sparkline
    pub value_trail: Vec<f64>,
}

/// Analytics over one non-empty projection
#[derive(Debug, Clone)]
pub struct Analysis {
    records: Vec<YearRecord>,
    initial_investment: f64,
}

impl Analysis {
    /// Fails with `EmptyProjection` when there is nothing to analyse
    ///
    /// `records` may be a sorted view; the analysis always works on year order.
    pub fn new(records: &[YearRecord]) -> Result<Self> {
        let records = in_year_order(records);
        let initial_investment = implied_initial_investment(&records)?;
        Ok(Self {
            records,
            initial_investment,
        })
    }

    /// Records in year order
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    /// Initial investment implied by the first record (scaled under adjustment)
    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    pub fn total_interest(&self, record: &YearRecord) -> f64 {
        total_interest(record, self.initial_investment)
    }

    pub fn total_amount_invested(&self, record: &YearRecord) -> f64 {
        total_amount_invested(record, self.initial_investment)
    }

    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<YearRecord> {
        sort_records(&self.records, key, direction, self.initial_investment)
    }

    /// Values of years 1..=year in year order
    pub fn value_trail(&self, year: u32) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.year <= year)
            .map(|r| r.value_end_of_year)
            .collect()
    }

    pub fn row(&self, record: &YearRecord) -> TableRow {
        TableRow {
            record: *record,
            total_interest: self.total_interest(record),
            total_amount_invested: self.total_amount_invested(record),
            growth_rate: growth_rate(record),
            value_trail: self.value_trail(record.year),
        }
    }

    /// Table rows in the order of the given sort
    pub fn rows(&self, sort: SortState) -> Vec<TableRow> {
        self.sorted(sort.key, sort.direction)
            .iter()
            .map(|record| self.row(record))
            .collect()
    }

    pub fn summary(&self) -> Result<SummaryStatistics> {
        summary_statistics(&self.records)
    }

    pub fn compare(&self, year_a: u32, year_b: u32) -> Result<PeriodComparison> {
        compare(&self.records, year_a, year_b)
    }

    pub fn write_csv<W: Write>(&self, adjusted: bool, writer: W) -> Result<()> {
        write_csv(&self.records, adjusted, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::input::InvestmentInput;
    use crate::projection::project;

    #[test]
    fn test_analysis_requires_records() {
        assert!(matches!(Analysis::new(&[]), Err(CalculatorError::EmptyProjection)));
    }

    #[test]
    fn test_rows_follow_sort_state() {
        let records = project(&InvestmentInput::default());
        let analysis = Analysis::new(&records).unwrap();

        let rows = analysis.rows(SortState::default());
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].record.year, 1);

        let rows = analysis.rows(SortState::default().toggle(SortKey::Year));
        assert_eq!(rows[0].record.year, 10);
        assert_eq!(rows[0].value_trail.len(), 10);
    }

    #[test]
    fn test_row_derived_columns() {
        let records = project(&InvestmentInput::default());
        let analysis = Analysis::new(&records).unwrap();
        let row = analysis.row(&records[1]);

        assert_eq!(row.total_interest, 1_308.0);
        assert_eq!(row.total_amount_invested, 12_400.0);
        assert_eq!(row.value_trail, vec![11_800.0, 13_708.0]);
        assert!((row.growth_rate - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_view_keeps_derived_columns_and_trails() {
        let records = project(&InvestmentInput::default());
        let sorted = sort_records(&records, SortKey::ValueEndOfYear, SortDirection::Descending, 10_000.0);
        assert_eq!(sorted[0].year, 10);

        let analysis = Analysis::new(&sorted).unwrap();
        assert_eq!(analysis.initial_investment(), 10_000.0);
        assert_eq!(analysis.records(), records.as_slice());

        let rows = analysis.rows(SortState::default());
        assert_eq!(rows[1].record.year, 2);
        assert_eq!(rows[1].total_interest, 1_308.0);
        assert_eq!(rows[1].total_amount_invested, 12_400.0);
        assert_eq!(rows[1].value_trail, vec![11_800.0, 13_708.0]);
        assert_eq!(analysis.value_trail(1), vec![11_800.0]);
        assert_eq!(analysis.summary().unwrap(), summary_statistics(&records).unwrap());
    }

    #[test]
    fn test_row_serializes_flat() {
        let records = project(&InvestmentInput::default());
        let analysis = Analysis::new(&records).unwrap();
        let json = serde_json::to_value(analysis.row(&records[0])).unwrap();
        assert_eq!(json["year"], 1);
        assert_eq!(json["valueEndOfYear"], 11_800.0);
        assert_eq!(json["totalAmountInvested"], 11_200.0);
    }

    #[test]
    fn test_analysis_delegates_to_free_functions() {
        let records = project(&InvestmentInput::default());
        let analysis = Analysis::new(&records).unwrap();
        assert_eq!(analysis.initial_investment(), 10_000.0);
        assert_eq!(analysis.summary().unwrap(), summary_statistics(&records).unwrap());
        assert_eq!(analysis.compare(9, 4).unwrap(), compare(&records, 4, 9).unwrap());

        let mut buffer = Vec::new();
        analysis.write_csv(false, &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("Year,"));
    }
}
