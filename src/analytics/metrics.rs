//! Per-record derived metrics
//!
//! These are the table's column formulas, approximations included. They are
//! not textbook definitions.

use crate::error::{CalculatorError, Result};
use crate::projection::YearRecord;

/// Initial investment recovered from the earliest year's record
///
/// `value - interest - contribution` of year 1, wherever that record sits in
/// `records`, so a sorted view gives the same answer. Without inflation adjustment
/// this is the original amount. With adjustment it comes out scaled by the
/// year-1 factor `1 / (1 + inflation)`, so it approximates the original amount
/// rather than reproducing it. Downstream columns rely on this exact value.
pub fn implied_initial_investment(records: &[YearRecord]) -> Result<f64> {
    let first = records
        .iter()
        .min_by_key(|r| r.year)
        .ok_or(CalculatorError::EmptyProjection)?;
    Ok(first.value_end_of_year - first.interest - first.annual_investment)
}

/// Interest accumulated up to this record
///
/// Multiplies this year's (possibly adjusted) contribution by the year number,
/// so it drifts from the true cumulative interest once contributions are
/// inflation-adjusted.
pub fn total_interest(record: &YearRecord, initial_investment: f64) -> f64 {
    record.value_end_of_year - record.annual_investment * record.year as f64 - initial_investment
}

/// Capital paid in up to this record
pub fn total_amount_invested(record: &YearRecord, initial_investment: f64) -> f64 {
    record.value_end_of_year - total_interest(record, initial_investment)
}

/// Growth ratio minus one, without the percentage scaling
///
/// `(value - contribution) / (value - interest - contribution) - 1`. A zero
/// opening value gives NaN or infinity and is returned as is.
pub fn growth_ratio(record: &YearRecord) -> f64 {
    let opening_value = record.value_end_of_year - record.interest - record.annual_investment;
    (record.value_end_of_year - record.annual_investment) / opening_value - 1.0
}

/// Year-over-year growth in percent, net of the year's contribution
pub fn growth_rate(record: &YearRecord) -> f64 {
    growth_ratio(record) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InvestmentInput;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_implied_initial_investment_exact_without_adjustment() {
        let records = project(&InvestmentInput::default());
        assert_eq!(implied_initial_investment(&records).unwrap(), 10_000.0);
    }

    #[test]
    fn test_implied_initial_investment_is_scaled_under_adjustment() {
        let input = InvestmentInput::default().with_inflation_adjustment(true);
        let records = project(&input);
        let implied = implied_initial_investment(&records).unwrap();

        let expected = records[0].value_end_of_year - records[0].interest - records[0].annual_investment;
        assert_eq!(implied, expected);
        assert_relative_eq!(implied, 10_000.0 / 1.02, max_relative = 1e-12);
        assert!(implied < 10_000.0);
    }

    #[test]
    fn test_implied_initial_investment_ignores_record_order() {
        let mut records = project(&InvestmentInput::default());
        records.reverse();
        assert_eq!(records[0].year, 10);
        assert_eq!(implied_initial_investment(&records).unwrap(), 10_000.0);
    }

    #[test]
    fn test_implied_initial_investment_requires_records() {
        assert!(matches!(
            implied_initial_investment(&[]),
            Err(CalculatorError::EmptyProjection)
        ));
    }

    #[test]
    fn test_total_interest_and_invested_capital() {
        let records = project(&InvestmentInput::default());

        // Year 2: 13708 - 1200 * 2 - 10000
        assert_relative_eq!(total_interest(&records[1], 10_000.0), 1_308.0, max_relative = 1e-12);
        assert_relative_eq!(total_amount_invested(&records[1], 10_000.0), 12_400.0, max_relative = 1e-12);
    }

    #[test]
    fn test_total_interest_uses_adjusted_contribution_times_year() {
        let input = InvestmentInput::default().with_inflation_adjustment(true);
        let records = project(&input);
        let initial = implied_initial_investment(&records).unwrap();

        let record = &records[4];
        let expected = record.value_end_of_year - record.annual_investment * 5.0 - initial;
        assert_eq!(total_interest(record, initial), expected);
    }

    #[test]
    fn test_growth_rate_matches_expected_return_without_adjustment() {
        for record in project(&InvestmentInput::default()) {
            assert_relative_eq!(growth_rate(&record), 6.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_growth_rate_propagates_nan_on_zero_opening_value() {
        let input = InvestmentInput {
            initial_investment: 0.0,
            annual_investment: 0.0,
            ..Default::default()
        };
        let records = project(&input);
        assert!(growth_rate(&records[0]).is_nan());
    }

    #[test]
    fn test_growth_rate_is_infinite_when_opening_value_is_zero() {
        let record = YearRecord {
            year: 1,
            interest: 500.0,
            value_end_of_year: 1_500.0,
            annual_investment: 1_000.0,
            real_return_rate: 0.0,
        };
        assert!(growth_rate(&record).is_infinite());
    }
}
