//! Errors raised by the calculator
//!
//! The projection engine itself never fails; errors come from the boundaries
//! around it (input validation, analytics lookups, scenario storage, export).

use crate::input::InputField;
use crate::scenario::ScenarioId;
use thiserror::Error;

/// Calculator errors
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid {field}: {value} (expected {})", .field.expected_range())]
    InvalidInput { field: InputField, value: f64 },
    #[error("year {0} is not part of the projection")]
    YearNotFound(u32),
    #[error("projection is empty")]
    EmptyProjection,
    #[error("scenario name must not be blank")]
    BlankScenarioName,
    #[error("scenario {0} not found")]
    ScenarioNotFound(ScenarioId),
    #[error("unknown option: \"{0}\"")]
    UnknownOption(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
