//! CSV export of a projection
//!
//! Amounts are written as plain numbers (no separators, no currency symbol);
//! rates get one decimal place. Display formatting belongs to the renderer.

use super::metrics::{growth_rate, implied_initial_investment, total_amount_invested, total_interest};
use super::sort::in_year_order;
use crate::error::Result;
use crate::input::InvestmentInput;
use crate::projection::YearRecord;
use csv::{Terminator, WriterBuilder};
use log::debug;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub const CSV_HEADERS: [&str; 6] = [
    "Year",
    "Investment Value",
    "Interest (Year)",
    "Total Interest",
    "Invested Capital",
    "Growth Rate",
];

pub const REAL_RETURN_HEADER: &str = "Real Return Rate";

/// Header row; the real return column only appears for adjusted projections
pub fn csv_headers(adjusted: bool) -> Vec<&'static str> {
    let mut headers = CSV_HEADERS.to_vec();
    if adjusted {
        headers.push(REAL_RETURN_HEADER);
    }
    headers
}

fn format_non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Shortest round-trip form of an amount; `-0` is written as `0`
///
/// Always positional: `1e-7` comes out as `0.0000001` and `1e21` as
/// `1000000000000000000000`, never in exponent notation.
pub fn format_amount(value: f64) -> String {
    if let Some(text) = format_non_finite(value) {
        return text;
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// Rate with one decimal place
pub fn format_rate(value: f64) -> String {
    format_non_finite(value).unwrap_or_else(|| format!("{:.1}", value))
}

/// Write a projection as CSV, rows in year order whatever order `records` is in
pub fn write_csv<W: Write>(records: &[YearRecord], adjusted: bool, writer: W) -> Result<()> {
    let rows = in_year_order(records);
    let initial_investment = implied_initial_investment(&rows)?;

    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(csv_headers(adjusted))?;

    for record in &rows {
        let total = total_interest(record, initial_investment);
        let mut row = vec![
            record.year.to_string(),
            format_amount(record.value_end_of_year),
            format_amount(record.interest),
            format_amount(total),
            format_amount(total_amount_invested(record, initial_investment)),
            format_rate(growth_rate(record)),
        ];
        if adjusted {
            row.push(format_rate(record.real_return_rate));
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    debug!("exported {} rows (adjusted: {})", rows.len(), adjusted);
    Ok(())
}

/// CSV text for a projection of `input`
pub fn to_csv(records: &[YearRecord], input: &InvestmentInput) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, input.adjust_for_inflation, &mut buffer)?;
    let text = String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}

/// Write the CSV export to a file
pub fn export_csv<P: AsRef<Path>>(records: &[YearRecord], input: &InvestmentInput, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(records, input.adjust_for_inflation, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::sort::{sort_by, SortDirection, SortKey};
    use crate::error::CalculatorError;
    use crate::projection::project;

    #[test]
    fn test_unadjusted_export_omits_real_return() {
        let input = InvestmentInput::default();
        let csv = to_csv(&project(&input), &input).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Year,Investment Value,Interest (Year),Total Interest,Invested Capital,Growth Rate"
        );
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "1,11800,600,600,11200,6.0");
        assert_eq!(lines[2], "2,13708,708,1308,12400,6.0");
        assert!(lines[1..].iter().all(|line| line.split(',').count() == 6));
    }

    #[test]
    fn test_adjusted_export_has_seven_fields_per_row() {
        let input = InvestmentInput::default().with_inflation_adjustment(true);
        let csv = to_csv(&project(&input), &input).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[0].ends_with(",Growth Rate,Real Return Rate"));
        assert_eq!(lines.len(), 11);
        for line in &lines[1..] {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 7);
            assert_eq!(fields[6], "4.0");
        }
    }

    #[test]
    fn test_export_ignores_active_sort() {
        let input = InvestmentInput::default();
        let records = project(&input);
        let sorted = sort_by(&records, SortKey::ValueEndOfYear, SortDirection::Descending).unwrap();
        assert_eq!(to_csv(&sorted, &input).unwrap(), to_csv(&records, &input).unwrap());
    }

    #[test]
    fn test_sorted_view_exports_derived_columns_from_year_one() {
        let input = InvestmentInput::default();
        let records = project(&input);
        let sorted = sort_by(&records, SortKey::Interest, SortDirection::Descending).unwrap();
        assert_eq!(sorted[0].year, 10);

        let csv = to_csv(&sorted, &input).unwrap();
        let rows: Vec<Vec<&str>> = csv.lines().skip(1).map(|line| line.split(',').collect()).collect();
        assert_eq!(rows[0][0], "1");
        // Total Interest and Invested Capital of years 1 and 2
        assert_eq!((rows[0][3], rows[0][4]), ("600", "11200"));
        assert_eq!((rows[1][3], rows[1][4]), ("1308", "12400"));
    }

    #[test]
    fn test_zero_fields_are_still_written() {
        let input = InvestmentInput {
            expected_return: 0.0,
            annual_investment: 0.0,
            inflation_rate: 0.0,
            adjust_for_inflation: true,
            ..Default::default()
        };
        let csv = to_csv(&project(&input), &input).unwrap();
        let first_row = csv.lines().nth(1).unwrap();
        assert_eq!(first_row, "1,10000,0,0,10000,0.0,0.0");
    }

    #[test]
    fn test_non_finite_values_are_spelled_out() {
        assert_eq!(format_rate(f64::NAN), "NaN");
        assert_eq!(format_rate(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(1234.5), "1234.5");
        assert_eq!(format_amount(1e-7), "0.0000001");
        assert_eq!(format_amount(1e21), "1000000000000000000000");
        assert_eq!(format_rate(-3.96), "-4.0");
    }

    #[test]
    fn test_export_empty_projection_fails() {
        let input = InvestmentInput::default();
        assert!(matches!(to_csv(&[], &input), Err(CalculatorError::EmptyProjection)));
    }
}
