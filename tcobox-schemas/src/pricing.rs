use crate::technology::PerTechnology;
use serde::{Deserialize, Serialize};

/// Energy tariffs, one per fuel, in COP per consumption unit.
///
/// Defaults are average unregulated industrial tariffs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyPrices {
    /// COP per kWh.
    pub electricity: f64,
    /// COP per gallon.
    pub diesel: f64,
    /// COP per kg.
    pub lpg: f64,
    /// COP per gallon.
    pub gasoline: f64,
}

impl Default for EnergyPrices {
    fn default() -> Self {
        Self {
            electricity: 920.0,
            diesel: 11_000.0,
            lpg: 6_000.0,
            gasoline: 16_500.0,
        }
    }
}

impl EnergyPrices {
    pub fn per_technology(&self) -> PerTechnology<f64> {
        PerTechnology::new(self.electricity, self.diesel, self.lpg, self.gasoline)
    }
}

/// Pre-tax purchase price of each truck.
pub fn default_capital_prices() -> PerTechnology<f64> {
    PerTechnology::new(135_000_000.0, 110_000_000.0, 105_000_000.0, 100_000_000.0)
}
