//! The investment input record consumed by the projection engine

use super::field::InputField;
use crate::error::{CalculatorError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Inputs for one projection
///
/// Rates are percentages (6.0 means 6% a year). Field names serialize in
/// camelCase, the shape saved scenario files use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    /// Amount invested up front
    pub initial_investment: f64,

    /// Contribution added at the end of every year
    pub annual_investment: f64,

    /// Expected nominal return, percent per year
    pub expected_return: f64,

    /// Number of years to project
    pub duration: u32,

    /// Expected inflation, percent per year
    pub inflation_rate: f64,

    /// Express results in today's purchasing power
    pub adjust_for_inflation: bool,
}

impl Default for InvestmentInput {
    fn default() -> Self {
        Self {
            initial_investment: 10_000.0,
            annual_investment: 1_200.0,
            expected_return: 6.0,
            duration: 10,
            inflation_rate: 2.0,
            adjust_for_inflation: false,
        }
    }
}

impl InvestmentInput {
    pub fn new(
        initial_investment: f64,
        annual_investment: f64,
        expected_return: f64,
        duration: u32,
        inflation_rate: f64,
        adjust_for_inflation: bool,
    ) -> Self {
        Self {
            initial_investment,
            annual_investment,
            expected_return,
            duration,
            inflation_rate,
            adjust_for_inflation,
        }
    }

    /// Nominal return minus inflation, in percent
    pub fn real_return_rate(&self) -> f64 {
        self.expected_return - self.inflation_rate
    }

    /// Current value of a numeric field
    pub fn field_value(&self, field: InputField) -> f64 {
        match field {
            InputField::InitialInvestment => self.initial_investment,
            InputField::AnnualInvestment => self.annual_investment,
            InputField::ExpectedReturn => self.expected_return,
            InputField::Duration => self.duration as f64,
            InputField::InflationRate => self.inflation_rate,
        }
    }

    /// Check every field against its range, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            let value = self.field_value(field);
            if !field.is_valid(value) {
                warn!("rejected input: {} = {}", field, value);
                return Err(CalculatorError::InvalidInput { field, value });
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        InputField::ALL
            .iter()
            .all(|field| field.is_valid(self.field_value(*field)))
    }

    /// Copy of this input with one field replaced
    ///
    /// An out-of-range value is rejected and the current input stays as it
    /// was, the same way a form ignores an invalid keystroke.
    pub fn with_field(self, field: InputField, value: f64) -> Result<Self> {
        if !field.is_valid(value) {
            warn!("ignoring out-of-range {}: {}", field, value);
            return Err(CalculatorError::InvalidInput { field, value });
        }

        let mut updated = self;
        match field {
            InputField::InitialInvestment => updated.initial_investment = value,
            InputField::AnnualInvestment => updated.annual_investment = value,
            InputField::ExpectedReturn => updated.expected_return = value,
            InputField::Duration => updated.duration = value as u32,
            InputField::InflationRate => updated.inflation_rate = value,
        }
        Ok(updated)
    }

    pub fn with_inflation_adjustment(self, adjust_for_inflation: bool) -> Self {
        Self {
            adjust_for_inflation,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_matches_form_defaults() {
        let input = InvestmentInput::default();
        assert_eq!(input.initial_investment, 10_000.0);
        assert_eq!(input.annual_investment, 1_200.0);
        assert_eq!(input.expected_return, 6.0);
        assert_eq!(input.duration, 10);
        assert_eq!(input.inflation_rate, 2.0);
        assert!(!input.adjust_for_inflation);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let input = InvestmentInput {
            duration: 0,
            ..Default::default()
        };
        match input.validate() {
            Err(CalculatorError::InvalidInput { field, value }) => {
                assert_eq!(field, InputField::Duration);
                assert_eq!(value, 0.0);
            }
            other => panic!("expected invalid duration, got {:?}", other),
        }
        assert!(!input.is_valid());
    }

    #[test]
    fn test_with_field_keeps_previous_value_on_rejection() {
        let input = InvestmentInput::default();
        assert!(input.with_field(InputField::ExpectedReturn, 150.0).is_err());

        let updated = input.with_field(InputField::ExpectedReturn, 7.5).unwrap();
        assert_eq!(updated.expected_return, 7.5);
        assert_eq!(input.expected_return, 6.0);

        let longer = input.with_field(InputField::Duration, 30.0).unwrap();
        assert_eq!(longer.duration, 30);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(InvestmentInput::default()).unwrap();
        assert_eq!(json["initialInvestment"], 10_000.0);
        assert_eq!(json["adjustForInflation"], false);
        assert_eq!(json["duration"], 10);

        let back: InvestmentInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, InvestmentInput::default());
    }

    #[test]
    fn test_real_return_rate() {
        assert_eq!(InvestmentInput::default().real_return_rate(), 4.0);
    }
}
