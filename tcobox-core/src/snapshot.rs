use crate::{error::TcoError, presets};
use tcobox_schemas::{
    pricing::EnergyPrices,
    profile::{OwnershipCosts, ProjectParameters, TechnologyProfile},
    scenario::Scenario,
    technology::{PerTechnology, Technology},
};

/// A complete, explicit set of calculator inputs.
///
/// Snapshots are values: event handlers such as [`InputSnapshot::on_capacity_change`]
/// return a new snapshot and leave the original untouched, so the caller decides
/// which one to keep between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    pub capacity_ton: f64,
    pub project: ProjectParameters,
    pub energy_prices: EnergyPrices,
    pub capital_prices: PerTechnology<f64>,
    pub consumption: PerTechnology<f64>,
    pub electric_costs: OwnershipCosts,
    pub combustion_costs: OwnershipCosts,
}

impl InputSnapshot {
    /// Resolves a stored scenario, filling missing consumption from the capacity preset.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, TcoError> {
        let consumption = match scenario.consumption {
            Some(consumption) => consumption,
            None => presets::preset_for(scenario.capacity_ton)?,
        };
        Ok(Self {
            capacity_ton: scenario.capacity_ton,
            project: scenario.project,
            energy_prices: scenario.energy_prices,
            capital_prices: scenario.capital_prices,
            consumption,
            electric_costs: scenario.electric_costs,
            combustion_costs: scenario.combustion_costs,
        })
    }

    pub fn to_scenario(&self, client_name: &str, city: &str) -> Scenario {
        Scenario {
            client_name: client_name.to_string(),
            city: city.to_string(),
            capacity_ton: self.capacity_ton,
            project: self.project,
            energy_prices: self.energy_prices,
            capital_prices: self.capital_prices,
            consumption: Some(self.consumption),
            electric_costs: self.electric_costs,
            combustion_costs: self.combustion_costs,
        }
    }

    /// Returns a copy with the consumption fields reset to the preset of `capacity_ton`.
    ///
    /// # Errors
    ///
    /// Returns `TcoError::PresetNotFound` if the capacity is not a known class.
    pub fn on_capacity_change(&self, capacity_ton: f64) -> Result<Self, TcoError> {
        let consumption = presets::preset_for(capacity_ton)?;
        tracing::debug!(capacity_ton, "Applied consumption preset");
        Ok(Self {
            capacity_ton,
            consumption,
            ..self.clone()
        })
    }

    /// Ownership costs that apply to `technology`.
    pub fn ownership_costs(&self, technology: Technology) -> &OwnershipCosts {
        if technology.is_combustion() {
            &self.combustion_costs
        } else {
            &self.electric_costs
        }
    }

    /// Expands the snapshot into one profile per technology.
    pub fn profiles(&self) -> PerTechnology<TechnologyProfile> {
        let prices = self.energy_prices.per_technology();
        self.capital_prices.map(|technology, &capital_price| {
            let costs = self.ownership_costs(technology);
            TechnologyProfile {
                capital_price,
                hourly_consumption: *self.consumption.get(technology),
                energy_unit_price: *prices.get(technology),
                monthly_maintenance: costs.monthly_maintenance,
                annual_tire_cost: costs.annual_tire_cost,
                salvage_percent: costs.salvage_percent,
            }
        })
    }
}
