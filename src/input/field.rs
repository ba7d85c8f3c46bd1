//! Per-field validation rules for the numeric inputs

use crate::error::CalculatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest supported projection horizon in years
pub const MAX_DURATION_YEARS: u32 = 50;

/// Numeric fields of an [`InvestmentInput`](super::InvestmentInput)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    InitialInvestment,
    AnnualInvestment,
    /// Percent per year
    ExpectedReturn,
    /// Whole years
    Duration,
    /// Percent per year
    InflationRate,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::InitialInvestment,
        InputField::AnnualInvestment,
        InputField::ExpectedReturn,
        InputField::Duration,
        InputField::InflationRate,
    ];

    /// Whether `value` is acceptable for this field
    ///
    /// NaN is rejected everywhere since every comparison against it fails.
    pub fn is_valid(&self, value: f64) -> bool {
        match self {
            InputField::InitialInvestment | InputField::AnnualInvestment => {
                value >= 0.0 && value.is_finite()
            }
            InputField::ExpectedReturn => (-100.0..=100.0).contains(&value),
            InputField::Duration => {
                (1.0..=MAX_DURATION_YEARS as f64).contains(&value) && value.fract() == 0.0
            }
            InputField::InflationRate => (0.0..=100.0).contains(&value),
        }
    }

    /// Human readable description of the accepted range
    pub fn expected_range(&self) -> &'static str {
        match self {
            InputField::InitialInvestment | InputField::AnnualInvestment => {
                "a non-negative amount"
            }
            InputField::ExpectedReturn => "a percentage between -100 and 100",
            InputField::Duration => "an integer between 1 and 50",
            InputField::InflationRate => "a percentage between 0 and 100",
        }
    }

    /// Key used by the serialized input record
    pub fn key(&self) -> &'static str {
        match self {
            InputField::InitialInvestment => "initialInvestment",
            InputField::AnnualInvestment => "annualInvestment",
            InputField::ExpectedReturn => "expectedReturn",
            InputField::Duration => "duration",
            InputField::InflationRate => "inflationRate",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::InitialInvestment => "initial investment",
            InputField::AnnualInvestment => "annual investment",
            InputField::ExpectedReturn => "expected return",
            InputField::Duration => "duration",
            InputField::InflationRate => "inflation rate",
        };
        f.write_str(label)
    }
}

impl FromStr for InputField {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalculatorError::UnknownOption(s.to_string()))
    }
}
