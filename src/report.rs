//! Plain-text rendering of projections for the console
//!
//! Whole-dollar currency, rates with one decimal and a `(Adj.)` marker on
//! inflation-adjusted columns.

use crate::analytics::{growth_rate, Analysis, PeriodComparison, SortState, SummaryStatistics, YearSelection};
use crate::scenario::Scenario;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// US-dollar amount without cents: `$1,234`, `-$1,234`
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}$∞", sign);
    }

    let digits = format!("{:.0}", value.abs().round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounding can leave "-$0"
    if grouped == "0" {
        return "$0".to_string();
    }
    format!("{}${}", sign, grouped)
}

/// Percentage with one decimal: `6.0%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// One-line sparkline scaled between the trail's min and max
pub fn sparkline(values: &[f64]) -> String {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let (min, max) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let span = max - min;

    values
        .iter()
        .map(|value| {
            if !value.is_finite() {
                ' '
            } else if span <= 0.0 {
                SPARK_LEVELS[0]
            } else {
                let level = ((value - min) / span * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            }
        })
        .collect()
}

/// Projection table in the requested order
pub fn render_table(analysis: &Analysis, sort: SortState, adjusted: bool, selection: &YearSelection) -> String {
    let adj = if adjusted { " (Adj.)" } else { "" };
    let mut headers = vec![
        "Year".to_string(),
        format!("Investment Value{}", adj),
        format!("Interest (Year){}", adj),
        format!("Total Interest{}", adj),
        format!("Invested Capital{}", adj),
        "Growth Rate".to_string(),
    ];
    if adjusted {
        headers.push("Real Return Rate".to_string());
    }
    headers.push("Trend".to_string());

    let rows: Vec<Vec<String>> = analysis
        .rows(sort)
        .into_iter()
        .map(|row| {
            let marker = if selection.contains(row.record.year) { "*" } else { "" };
            let mut cells = vec![
                format!("{}{}", row.record.year, marker),
                format_currency(row.record.value_end_of_year),
                format_currency(row.record.interest),
                format_currency(row.total_interest),
                format_currency(row.total_amount_invested),
                format_percent(growth_rate(&row.record)),
            ];
            if adjusted {
                cells.push(format_percent(row.record.real_return_rate));
            }
            cells.push(sparkline(&row.value_trail));
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|cells| cells[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", " ".repeat(pad), cell)
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let mut lines = vec![format_line(&headers)];
    let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    lines.push("-".repeat(rule_width));
    lines.extend(rows.iter().map(|cells| format_line(cells)));
    lines.join("\n")
}

pub fn render_summary(stats: &SummaryStatistics) -> String {
    [
        "Investment Summary".to_string(),
        format!(
            "  Total Return: {} ({})",
            format_currency(stats.total_return),
            format_percent(stats.total_return_percentage)
        ),
        format!("  Average Annual Growth: {}", format_percent(stats.average_growth)),
        format!("  Best Growth Year: {}", format_percent(stats.max_growth)),
        format!("  Worst Growth Year: {}", format_percent(stats.min_growth)),
        format!("  Total Interest Earned: {}", format_currency(stats.total_interest)),
        format!("  Average Annual Interest: {}", format_currency(stats.average_interest)),
    ]
    .join("\n")
}

pub fn render_comparison(comparison: &PeriodComparison) -> String {
    [
        format!(
            "Period Comparison (Year {} to {})",
            comparison.from_year, comparison.to_year
        ),
        format!("  Time Period: {} years", comparison.year_diff),
        format!("  Total Growth: {}", format_percent(comparison.growth_percent)),
        format!("  Value Change: {}", format_currency(comparison.value_change)),
        format!("  Interest Change: {}", format_currency(comparison.interest_diff)),
    ]
    .join("\n")
}

/// One line per saved scenario
pub fn render_scenario_list(scenarios: &[Scenario]) -> String {
    if scenarios.is_empty() {
        return "No saved scenarios".to_string();
    }
    scenarios
        .iter()
        .map(|s| {
            format!(
                "{:>14}  {}  {}  ({} yrs, {}% return{})",
                s.id,
                s.date,
                s.name,
                s.input.duration,
                s.input.expected_return,
                if s.input.adjust_for_inflation { ", inflation-adjusted" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
