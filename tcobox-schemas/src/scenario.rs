use crate::{
    pricing::EnergyPrices,
    profile::{OwnershipCosts, ProjectParameters},
    technology::PerTechnology,
};
use serde::{Deserialize, Serialize};

/// Everything a user can edit for one comparison, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub client_name: String,
    pub city: String,
    /// Equipment capacity class in tonnes.
    pub capacity_ton: f64,
    pub project: ProjectParameters,
    pub energy_prices: EnergyPrices,
    pub capital_prices: PerTechnology<f64>,
    /// Hourly consumption per technology. Falls back to the capacity preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<PerTechnology<f64>>,
    pub electric_costs: OwnershipCosts,
    /// Shared by diesel, LPG and gasoline.
    pub combustion_costs: OwnershipCosts,
}

/// Cities offered for the operation site.
pub const KNOWN_CITIES: [&str; 4] = ["Cali", "Bogotá", "Medellín", "Barranquilla"];
