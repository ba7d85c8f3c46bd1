//! Scenario repository implementations

use super::{Scenario, ScenarioId, ScenarioRepository};
use crate::error::{CalculatorError, Result};
use crate::input::InvestmentInput;
use chrono::Local;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the JSON scenario file
pub const DEFAULT_STORE_PATH: &str = "saved_scenarios.json";

fn remove_by_id(scenarios: &mut Vec<Scenario>, id: ScenarioId) -> Result<Scenario> {
    let position = scenarios
        .iter()
        .position(|s| s.id == id)
        .ok_or(CalculatorError::ScenarioNotFound(id))?;
    Ok(scenarios.remove(position))
}

/// Volatile store, mostly for tests and one-off sessions
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioRepository {
    scenarios: Vec<Scenario>,
}

impl InMemoryScenarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioRepository for InMemoryScenarioRepository {
    fn save(&mut self, name: &str, input: &InvestmentInput) -> Result<Scenario> {
        let scenario = Scenario::create(&self.scenarios, name, input, Local::now())?;
        self.scenarios.push(scenario.clone());
        Ok(scenario)
    }

    fn list(&self) -> Result<Vec<Scenario>> {
        Ok(self.scenarios.clone())
    }

    fn delete(&mut self, id: ScenarioId) -> Result<Scenario> {
        remove_by_id(&mut self.scenarios, id)
    }
}

/// Scenarios kept as one JSON array in a file
///
/// The file is re-read on every call, so several processes can share it as
/// long as they do not write at the same time. A missing file is an empty
/// store.
#[derive(Debug, Clone)]
pub struct JsonFileScenarioRepository {
    path: PathBuf,
}

impl JsonFileScenarioRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Scenario>> {
        if !self.path.exists() {
            debug!("no scenario file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let scenarios: Vec<Scenario> = serde_json::from_str(&content)?;
        debug!("loaded {} scenarios from {}", scenarios.len(), self.path.display());
        Ok(scenarios)
    }

    fn store(&self, scenarios: &[Scenario]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(scenarios)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Default for JsonFileScenarioRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

impl ScenarioRepository for JsonFileScenarioRepository {
    fn save(&mut self, name: &str, input: &InvestmentInput) -> Result<Scenario> {
        let mut scenarios = self.load()?;
        let scenario = Scenario::create(&scenarios, name, input, Local::now())?;
        scenarios.push(scenario.clone());
        self.store(&scenarios)?;
        info!("saved scenario {} ({})", scenario.id, scenario.name);
        Ok(scenario)
    }

    fn list(&self) -> Result<Vec<Scenario>> {
        self.load()
    }

    fn delete(&mut self, id: ScenarioId) -> Result<Scenario> {
        let mut scenarios = self.load()?;
        let removed = remove_by_id(&mut scenarios, id)?;
        self.store(&scenarios)?;
        info!("deleted scenario {} ({})", removed.id, removed.name);
        Ok(removed)
    }
}
