//! Summary statistics over a whole projection

use super::metrics::{growth_rate, implied_initial_investment};
use crate::error::{CalculatorError, Result};
use crate::projection::YearRecord;
use serde::{Deserialize, Serialize};

/// Aggregate figures shown under the projection table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    /// Final value minus the implied initial investment
    pub total_return: f64,
    pub total_return_percentage: f64,
    /// Mean of the yearly growth rates, percent
    pub average_growth: f64,
    pub max_growth: f64,
    pub min_growth: f64,
    /// Sum of the per-year interest column
    pub total_interest: f64,
    pub average_interest: f64,
}

/// NaN-propagating max; `f64::max` would silently drop NaN
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Summarize a projection
///
/// Undefined growth rates (NaN) propagate into the average and the extremes.
/// A zero initial investment makes the return percentage non-finite.
pub fn summary_statistics(records: &[YearRecord]) -> Result<SummaryStatistics> {
    let initial_investment = implied_initial_investment(records)?;
    let last = records.last().ok_or(CalculatorError::EmptyProjection)?;
    let count = records.len() as f64;

    let total_return = last.value_end_of_year - initial_investment;
    let total_return_percentage = total_return / initial_investment * 100.0;

    let growth_rates: Vec<f64> = records.iter().map(growth_rate).collect();
    let average_growth = growth_rates.iter().sum::<f64>() / count;
    let max_growth = growth_rates.iter().copied().fold(f64::NEG_INFINITY, nan_max);
    let min_growth = growth_rates.iter().copied().fold(f64::INFINITY, nan_min);

    let total_interest: f64 = records.iter().map(|r| r.interest).sum();
    let average_interest = total_interest / count;

    Ok(SummaryStatistics {
        total_return,
        total_return_percentage,
        average_growth,
        max_growth,
        min_growth,
        total_interest,
        average_interest,
    })
}
