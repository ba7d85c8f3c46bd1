//! Named scenarios and the repository capability that stores them
//!
//! The projection core never touches storage. Callers inject a
//! [`ScenarioRepository`] and hand the loaded inputs to the engine themselves.
//!
//! # Example
//! ```ignore
//! let mut store = JsonFileScenarioRepository::new("saved_scenarios.json");
//! let saved = store.save("Retire at 60", &InvestmentInput::default())?;
//!
//! for scenario in store.list()? {
//!     let outcome = ScenarioOutcome::evaluate(&scenario)?;
//!     println!("{}: {:.2}", outcome.name, outcome.final_value);
//! }
//! ```

mod store;

pub use store::{InMemoryScenarioRepository, JsonFileScenarioRepository, DEFAULT_STORE_PATH};

use crate::analytics::{summary_statistics, SummaryStatistics};
use crate::error::{CalculatorError, Result};
use crate::input::InvestmentInput;
use crate::projection::{try_project, YearRecord};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Scenario identifier: creation time in milliseconds since the Unix epoch
pub type ScenarioId = i64;

/// A saved input snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub input: InvestmentInput,
    /// Local date the scenario was saved
    #[serde(with = "saved_date")]
    pub date: NaiveDate,
}

/// Scenario dates are written as `YYYY-MM-DD`; US `M/D/YYYY` dates from
/// browser-saved scenario lists are read as well.
mod saved_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const ISO_FORMAT: &str = "%Y-%m-%d";
    const US_FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(ISO_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        let text = text.trim();
        NaiveDate::parse_from_str(text, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(text, US_FORMAT))
            .map_err(|_| de::Error::custom(format!("unrecognized scenario date: {}", text)))
    }
}

impl Scenario {
    /// Build the next scenario for a store holding `existing`
    ///
    /// The name is trimmed and must not end up empty. Ids follow the clock but
    /// stay strictly increasing when two saves land in the same millisecond.
    pub fn create(
        existing: &[Scenario],
        name: &str,
        input: &InvestmentInput,
        now: DateTime<Local>,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CalculatorError::BlankScenarioName);
        }
        input.validate()?;

        let clock_id = now.timestamp_millis();
        let id = match existing.iter().map(|s| s.id).max() {
            Some(last) if last >= clock_id => last + 1,
            _ => clock_id,
        };

        Ok(Self {
            id,
            name: name.to_string(),
            input: *input,
            date: now.date_naive(),
        })
    }

    /// Project the stored input
    pub fn project(&self) -> Result<Vec<YearRecord>> {
        try_project(&self.input)
    }
}

/// Storage capability for named scenarios
pub trait ScenarioRepository {
    /// Store a snapshot of `input` under `name` and return the new scenario
    fn save(&mut self, name: &str, input: &InvestmentInput) -> Result<Scenario>;

    /// All scenarios in save order
    fn list(&self) -> Result<Vec<Scenario>>;

    fn get(&self, id: ScenarioId) -> Result<Scenario> {
        self.list()?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(CalculatorError::ScenarioNotFound(id))
    }

    /// Remove a scenario, returning what was removed
    fn delete(&mut self, id: ScenarioId) -> Result<Scenario>;
}

/// Headline figures of one projected scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub scenario_id: Option<ScenarioId>,
    pub name: String,
    pub input: InvestmentInput,
    pub final_value: f64,
    pub summary: SummaryStatistics,
}

impl ScenarioOutcome {
    /// Project a labelled input and summarize it
    pub fn from_input(scenario_id: Option<ScenarioId>, name: &str, input: &InvestmentInput) -> Result<Self> {
        let records = try_project(input)?;
        let summary = summary_statistics(&records)?;
        let final_value = records
            .last()
            .map(|r| r.value_end_of_year)
            .ok_or(CalculatorError::EmptyProjection)?;

        Ok(Self {
            scenario_id,
            name: name.to_string(),
            input: *input,
            final_value,
            summary,
        })
    }

    pub fn evaluate(scenario: &Scenario) -> Result<Self> {
        Self::from_input(Some(scenario.id), &scenario.name, &scenario.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_create_trims_name_and_stamps_clock() {
        let now = at(1_700_000_000_000);
        let scenario = Scenario::create(&[], "  Baseline ", &InvestmentInput::default(), now).unwrap();
        assert_eq!(scenario.name, "Baseline");
        assert_eq!(scenario.id, 1_700_000_000_000);
        assert_eq!(scenario.date, now.date_naive());
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let result = Scenario::create(&[], "   ", &InvestmentInput::default(), at(0));
        assert!(matches!(result, Err(CalculatorError::BlankScenarioName)));
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let input = InvestmentInput {
            duration: 0,
            ..Default::default()
        };
        let result = Scenario::create(&[], "Nothing", &input, at(0));
        assert!(matches!(result, Err(CalculatorError::InvalidInput { .. })));
    }

    #[test]
    fn test_ids_stay_unique_within_one_millisecond() {
        let now = at(1_700_000_000_000);
        let first = Scenario::create(&[], "A", &InvestmentInput::default(), now).unwrap();
        let second = Scenario::create(&[first.clone()], "B", &InvestmentInput::default(), now).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_scenario_json_shape() {
        let scenario = Scenario::create(&[], "Baseline", &InvestmentInput::default(), at(1_700_000_000_000)).unwrap();
        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["id"], 1_700_000_000_000_i64);
        assert_eq!(json["input"]["expectedReturn"], 6.0);
        assert!(json["date"].is_string());
    }

    #[test]
    fn test_scenario_date_accepts_iso_and_us_forms() {
        let template = |date: &str| {
            format!(
                r#"{{"id":1,"name":"Imported","date":"{}","input":{{"initialInvestment":10000,
                    "annualInvestment":1200,"expectedReturn":6,"duration":10,
                    "inflationRate":2,"adjustForInflation":false}}}}"#,
                date
            )
        };
        let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        for text in ["2024-03-01", "3/1/2024", "03/01/2024"] {
            let scenario: Scenario = serde_json::from_str(&template(text)).unwrap();
            assert_eq!(scenario.date, march_first);
        }
        assert!(serde_json::from_str::<Scenario>(&template("1. März 2024")).is_err());

        let scenario: Scenario = serde_json::from_str(&template("3/1/2024")).unwrap();
        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["date"], "2024-03-01");
    }

    #[test]
    fn test_outcome_from_scenario() {
        let scenario = Scenario::create(&[], "Baseline", &InvestmentInput::default(), at(0)).unwrap();
        let outcome = ScenarioOutcome::evaluate(&scenario).unwrap();
        let records = scenario.project().unwrap();

        assert_eq!(outcome.scenario_id, Some(scenario.id));
        assert_eq!(outcome.final_value, records[9].value_end_of_year);
        assert_eq!(outcome.summary.total_return, records[9].value_end_of_year - 10_000.0);
    }
}
