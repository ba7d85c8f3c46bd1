//! Investment Calculator - year-by-year projection of a recurring investment
//!
//! This library provides:
//! - A pure projection engine (initial amount, yearly contribution, expected
//!   return, duration, optional inflation adjustment)
//! - Analytics over a projection: sorting, summary statistics, period
//!   comparison and CSV export
//! - Input validation and batch loading of named inputs
//! - Named scenarios behind an injectable repository

pub mod analytics;
pub mod error;
pub mod input;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use analytics::{Analysis, PeriodComparison, SortDirection, SortKey, SortState, SummaryStatistics};
pub use error::{CalculatorError, Result};
pub use input::{InputField, InvestmentInput};
pub use projection::{project, try_project, YearRecord};
pub use scenario::{Scenario, ScenarioRepository};
