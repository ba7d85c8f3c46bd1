//! Output records of a projection

use serde::{Deserialize, Serialize};

/// Snapshot of the investment at the end of one projection year
///
/// Amounts are already scaled to present value when the input asked for an
/// inflation adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Interest earned during this year
    pub interest: f64,

    /// Investment value at the end of the year
    pub value_end_of_year: f64,

    /// Contribution added this year
    pub annual_investment: f64,

    /// Expected return minus inflation, in percent (never adjusted)
    pub real_return_rate: f64,
}

/// Point consumed by a chart renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub year: u32,
    pub value_end_of_year: f64,
    pub interest: f64,
    pub annual_investment: f64,
}

impl From<&YearRecord> for ChartPoint {
    fn from(record: &YearRecord) -> Self {
        Self {
            year: record.year,
            value_end_of_year: record.value_end_of_year,
            interest: record.interest,
            annual_investment: record.annual_investment,
        }
    }
}

/// Chart series for a whole projection
pub fn chart_points(records: &[YearRecord]) -> Vec<ChartPoint> {
    records.iter().map(ChartPoint::from).collect()
}
