//! Analytics derived from a projection: sorting, summary statistics,
//! period comparison and CSV export
//!
//! Everything here depends only on the shape of the record sequence, never on
//! how it was produced. The initial investment is recovered from the first
//! record rather than passed in (see [`implied_initial_investment`]).

mod compare;
pub mod export;
mod metrics;
mod sort;
mod summary;
mod table;

pub use compare::{compare, PeriodComparison, YearSelection};
pub use export::{csv_headers, export_csv, to_csv, write_csv};
pub use metrics::{growth_rate, growth_ratio, implied_initial_investment, total_amount_invested, total_interest};
pub use sort::{in_year_order, sort_by, sort_records, SortDirection, SortKey, SortState};
pub use summary::{summary_statistics, SummaryStatistics};
pub use table::{Analysis, TableRow};
