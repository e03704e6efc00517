use crate::{error::TcoError, presets, snapshot::InputSnapshot};
use tcobox_schemas::{
    pricing::{self, EnergyPrices},
    profile::{OwnershipCosts, ProjectParameters, ShiftPattern},
    technology::PerTechnology,
};

/// Validates project parameters against the calculator's slider bounds.
///
/// # Errors
///
/// Returns `TcoError::OutOfRange` naming the first offending field.
pub fn project_parameters(
    operating_hours_per_year: u32,
    project_years: u32,
) -> Result<ProjectParameters, TcoError> {
    check_range(
        "operating_hours_per_year",
        operating_hours_per_year,
        ProjectParameters::MIN_HOURS_PER_YEAR,
        ProjectParameters::MAX_HOURS_PER_YEAR,
    )?;
    check_range(
        "project_years",
        project_years,
        ProjectParameters::MIN_YEARS,
        ProjectParameters::MAX_YEARS,
    )?;
    Ok(ProjectParameters {
        operating_hours_per_year,
        project_years,
    })
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), TcoError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(TcoError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
        })
    }
}

/// A fluent builder for an [`InputSnapshot`].
///
/// Every field starts at the calculator defaults: a 3.0 t truck on two shifts
/// over five years, average industrial tariffs and the reference prices.
/// Consumption follows the capacity preset unless set explicitly.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    capacity_ton: Option<f64>,
    shifts: Option<ShiftPattern>,
    hours_per_year: Option<u32>,
    project_years: Option<u32>,
    energy_prices: Option<EnergyPrices>,
    capital_prices: Option<PerTechnology<f64>>,
    consumption: Option<PerTechnology<f64>>,
    electric_costs: Option<OwnershipCosts>,
    combustion_costs: Option<OwnershipCosts>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity_ton: f64) -> Self {
        self.capacity_ton = Some(capacity_ton);
        self
    }

    /// Seeds the yearly hours from a shift pattern. An explicit
    /// [`with_hours_per_year`](Self::with_hours_per_year) wins.
    pub fn with_shifts(mut self, shifts: ShiftPattern) -> Self {
        self.shifts = Some(shifts);
        self
    }

    pub fn with_hours_per_year(mut self, hours: u32) -> Self {
        self.hours_per_year = Some(hours);
        self
    }

    pub fn with_project_years(mut self, years: u32) -> Self {
        self.project_years = Some(years);
        self
    }

    pub fn with_energy_prices(mut self, prices: EnergyPrices) -> Self {
        self.energy_prices = Some(prices);
        self
    }

    pub fn with_capital_prices(mut self, prices: PerTechnology<f64>) -> Self {
        self.capital_prices = Some(prices);
        self
    }

    /// Overrides the hourly consumption instead of using the capacity preset.
    pub fn with_consumption(mut self, consumption: PerTechnology<f64>) -> Self {
        self.consumption = Some(consumption);
        self
    }

    pub fn with_electric_costs(mut self, costs: OwnershipCosts) -> Self {
        self.electric_costs = Some(costs);
        self
    }

    /// Maintenance, tires and salvage used for diesel, LPG and gasoline alike.
    pub fn with_combustion_costs(mut self, costs: OwnershipCosts) -> Self {
        self.combustion_costs = Some(costs);
        self
    }

    /// Consumes the builder and returns the resolved snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TcoError::OutOfRange` for project parameters outside their bounds and
    /// `TcoError::PresetNotFound` when no consumption was given and the capacity
    /// is not a known class.
    pub fn build(self) -> Result<InputSnapshot, TcoError> {
        let defaults = ProjectParameters::default();
        let hours = self
            .hours_per_year
            .or_else(|| self.shifts.map(ShiftPattern::base_hours_per_year))
            .unwrap_or(defaults.operating_hours_per_year);
        let project =
            project_parameters(hours, self.project_years.unwrap_or(defaults.project_years))?;

        let capacity_ton = self.capacity_ton.unwrap_or(presets::DEFAULT_CAPACITY_TON);
        let consumption = match self.consumption {
            Some(consumption) => consumption,
            None => presets::preset_for(capacity_ton)?,
        };

        Ok(InputSnapshot {
            capacity_ton,
            project,
            energy_prices: self.energy_prices.unwrap_or_default(),
            capital_prices: self
                .capital_prices
                .unwrap_or_else(pricing::default_capital_prices),
            consumption,
            electric_costs: self.electric_costs.unwrap_or(OwnershipCosts::ELECTRIC_DEFAULT),
            combustion_costs: self
                .combustion_costs
                .unwrap_or(OwnershipCosts::COMBUSTION_DEFAULT),
        })
    }
}
