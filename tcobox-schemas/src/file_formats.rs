use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

pub const SCENARIO_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub schema_version: String,
    pub scenario: Scenario,
}
