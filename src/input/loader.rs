//! Load batches of named inputs from a CSV sheet
//!
//! Expected header:
//! `name,initialInvestment,annualInvestment,expectedReturn,duration,inflationRate,adjustForInflation`

use super::InvestmentInput;
use crate::error::Result;
use csv::Reader;
use log::debug;
use std::path::Path;

/// An input with the label it was filed under
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInput {
    pub name: String,
    pub input: InvestmentInput,
}

/// Raw CSV row matching the batch sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "initialInvestment")]
    initial_investment: f64,
    #[serde(rename = "annualInvestment")]
    annual_investment: f64,
    #[serde(rename = "expectedReturn")]
    expected_return: f64,
    #[serde(rename = "duration")]
    duration: u32,
    #[serde(rename = "inflationRate")]
    inflation_rate: f64,
    #[serde(rename = "adjustForInflation", default)]
    adjust_for_inflation: bool,
}

impl CsvRow {
    fn into_named_input(self) -> Result<NamedInput> {
        let input = InvestmentInput::new(
            self.initial_investment,
            self.annual_investment,
            self.expected_return,
            self.duration,
            self.inflation_rate,
            self.adjust_for_inflation,
        );
        input.validate()?;

        Ok(NamedInput {
            name: self.name.trim().to_string(),
            input,
        })
    }
}

/// Load all named inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<NamedInput>> {
    let path = path.as_ref();
    debug!("loading inputs from {}", path.display());
    let mut reader = Reader::from_path(path)?;
    read_rows(&mut reader)
}

/// Load named inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<NamedInput>> {
    let mut inputs = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.into_named_input()?);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::input::InputField;

    const SHEET: &str = "\
name,initialInvestment,annualInvestment,expectedReturn,duration,inflationRate,adjustForInflation
Baseline,10000,1200,6,10,2,false
 Cautious ,5000,600,3.5,25,2.5,true
";

    #[test]
    fn test_load_inputs_from_reader() {
        let inputs = load_inputs_from_reader(SHEET.as_bytes()).unwrap();
        assert_eq!(inputs.len(), 2);

        assert_eq!(inputs[0].name, "Baseline");
        assert_eq!(inputs[0].input, InvestmentInput::default());

        assert_eq!(inputs[1].name, "Cautious");
        assert_eq!(inputs[1].input.duration, 25);
        assert_eq!(inputs[1].input.expected_return, 3.5);
        assert!(inputs[1].input.adjust_for_inflation);
    }

    #[test]
    fn test_out_of_range_row_is_rejected() {
        let sheet = "\
name,initialInvestment,annualInvestment,expectedReturn,duration,inflationRate,adjustForInflation
Broken,10000,1200,6,0,2,false
";
        match load_inputs_from_reader(sheet.as_bytes()) {
            Err(CalculatorError::InvalidInput { field, .. }) => {
                assert_eq!(field, InputField::Duration)
            }
            other => panic!("expected invalid duration, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_a_csv_error() {
        let sheet = "\
name,initialInvestment,annualInvestment,expectedReturn,duration,inflationRate,adjustForInflation
Typo,ten,1200,6,10,2,false
";
        assert!(matches!(
            load_inputs_from_reader(sheet.as_bytes()),
            Err(CalculatorError::Csv(_))
        ));
    }
}
