use serde::{Deserialize, Serialize};

/// Economic and technical inputs for one technology.
///
/// Currency amounts are nominal COP. Nothing here is validated: the engine
/// carries negative or absurd values straight through to the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnologyProfile {
    /// Purchase price before tax.
    pub capital_price: f64,
    /// Consumption per operating hour, in the technology's own unit.
    pub hourly_consumption: f64,
    /// Price per consumption unit.
    pub energy_unit_price: f64,
    pub monthly_maintenance: f64,
    pub annual_tire_cost: f64,
    /// Share of the capital price recovered at project end, 0 to 100.
    pub salvage_percent: f64,
}

/// Maintenance, tires and salvage for a group of technologies.
///
/// One instance covers the electric truck and a second one is shared by all
/// combustion technologies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnershipCosts {
    pub monthly_maintenance: f64,
    pub annual_tire_cost: f64,
    pub salvage_percent: f64,
}

impl OwnershipCosts {
    pub const ELECTRIC_DEFAULT: OwnershipCosts = OwnershipCosts {
        monthly_maintenance: 150_000.0,
        annual_tire_cost: 2_000_000.0,
        salvage_percent: 25.0,
    };

    pub const COMBUSTION_DEFAULT: OwnershipCosts = OwnershipCosts {
        monthly_maintenance: 450_000.0,
        annual_tire_cost: 3_500_000.0,
        salvage_percent: 15.0,
    };
}

/// Horizon shared by every technology in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectParameters {
    pub operating_hours_per_year: u32,
    pub project_years: u32,
}

impl ProjectParameters {
    pub const MIN_HOURS_PER_YEAR: u32 = 1000;
    pub const MAX_HOURS_PER_YEAR: u32 = 8000;
    pub const MIN_YEARS: u32 = 2;
    pub const MAX_YEARS: u32 = 10;

    pub fn total_hours(&self) -> f64 {
        f64::from(self.operating_hours_per_year) * f64::from(self.project_years)
    }

    pub fn total_months(&self) -> f64 {
        f64::from(self.project_years) * 12.0
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self {
            operating_hours_per_year: ShiftPattern::TwoShifts.base_hours_per_year(),
            project_years: 5,
        }
    }
}

/// Operating intensity used to seed the yearly hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPattern {
    OneShift,
    TwoShifts,
    ThreeShifts,
}

impl ShiftPattern {
    pub fn from_count(shifts: u8) -> Option<Self> {
        match shifts {
            1 => Some(ShiftPattern::OneShift),
            2 => Some(ShiftPattern::TwoShifts),
            3 => Some(ShiftPattern::ThreeShifts),
            _ => None,
        }
    }

    pub fn base_hours_per_year(self) -> u32 {
        match self {
            ShiftPattern::OneShift => 1800,
            ShiftPattern::TwoShifts => 3600,
            ShiftPattern::ThreeShifts => 5400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_map_to_base_hours() {
        let hours: Vec<_> = (1..=3)
            .filter_map(ShiftPattern::from_count)
            .map(ShiftPattern::base_hours_per_year)
            .collect();
        assert_eq!(hours, vec![1800, 3600, 5400]);
        assert_eq!(ShiftPattern::from_count(4), None);
    }

    #[test]
    fn derived_totals() {
        let params = ProjectParameters {
            operating_hours_per_year: 3600,
            project_years: 5,
        };
        assert_eq!(params.total_hours(), 18_000.0);
        assert_eq!(params.total_months(), 60.0);
    }
}
