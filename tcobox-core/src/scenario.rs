//! Reading and writing scenario files.

use crate::error::TcoError;
use std::{fs, path::Path};
use tcobox_schemas::{
    file_formats::{ScenarioFile, SCENARIO_SCHEMA_VERSION},
    scenario::Scenario,
};

pub fn load_scenario(path: &Path) -> Result<Scenario, TcoError> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| TcoError::FileIO(shown.clone(), e))?;
    let file: ScenarioFile =
        serde_yaml::from_str(&content).map_err(|e| TcoError::YamlParsing(shown.clone(), e))?;
    if file.schema_version != SCENARIO_SCHEMA_VERSION {
        return Err(TcoError::ConfigError(format!(
            "'{}' uses schema version {}, expected {}",
            shown, file.schema_version, SCENARIO_SCHEMA_VERSION
        )));
    }
    tracing::debug!(path = %shown, client = %file.scenario.client_name, "Loaded scenario");
    Ok(file.scenario)
}

pub fn scenario_to_yaml(scenario: &Scenario) -> Result<String, TcoError> {
    let file = ScenarioFile {
        schema_version: SCENARIO_SCHEMA_VERSION.to_string(),
        scenario: scenario.clone(),
    };
    serde_yaml::to_string(&file).map_err(|e| TcoError::ConfigError(e.to_string()))
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> Result<(), TcoError> {
    let yaml = scenario_to_yaml(scenario)?;
    fs::write(path, yaml).map_err(|e| TcoError::FileIO(path.display().to_string(), e))
}
