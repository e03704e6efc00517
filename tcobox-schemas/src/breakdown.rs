use crate::technology::Technology;
use serde::{Deserialize, Serialize};

/// Cost components of one technology over the whole project horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub capex_with_tax: f64,
    pub energy_cost: f64,
    pub maintenance_cost: f64,
    pub salvage_value: f64,
    pub net_tco: f64,
}

impl CostBreakdown {
    /// Gross spend before the salvage credit.
    pub fn gross_cost(&self) -> f64 {
        self.capex_with_tax + self.energy_cost + self.maintenance_cost
    }
}

/// Breakdowns for all four technologies plus the savings of EP against diesel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Always ordered like [`Technology::ALL`].
    pub breakdowns: [CostBreakdown; 4],
    pub savings: f64,
}

impl ComparisonResult {
    pub fn get(&self, technology: Technology) -> &CostBreakdown {
        // Indexing by discriminant relies on the canonical order.
        &self.breakdowns[technology as usize]
    }

    /// Iterates `(technology, breakdown)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Technology, &CostBreakdown)> {
        Technology::ALL.into_iter().zip(self.breakdowns.iter())
    }

    pub fn baseline(&self) -> &CostBreakdown {
        self.get(Technology::Diesel)
    }

    pub fn electric(&self) -> &CostBreakdown {
        self.get(Technology::ElectricLithium)
    }

    /// True when the electric option beats the diesel baseline.
    pub fn is_viable(&self) -> bool {
        self.savings > 0.0
    }

    /// Technology with the lowest net TCO. Ties go to the earlier one.
    pub fn cheapest(&self) -> Technology {
        self.iter()
            .fold((Technology::ElectricLithium, &self.breakdowns[0]), |best, (t, b)| {
                if b.net_tco < best.1.net_tco {
                    (t, b)
                } else {
                    best
                }
            })
            .0
    }
}
