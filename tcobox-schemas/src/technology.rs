use serde::{Deserialize, Serialize};
use std::fmt;

/// The four powertrains compared by the calculator.
///
/// The declaration order is the canonical display order used by every table,
/// chart and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    ElectricLithium,
    Diesel,
    Lpg,
    Gasoline,
}

impl Technology {
    pub const ALL: [Technology; 4] = [
        Technology::ElectricLithium,
        Technology::Diesel,
        Technology::Lpg,
        Technology::Gasoline,
    ];

    /// Human-readable name for tables and charts.
    pub fn label(self) -> &'static str {
        match self {
            Technology::ElectricLithium => "EP Lithium",
            Technology::Diesel => "Diesel",
            Technology::Lpg => "LPG",
            Technology::Gasoline => "Gasoline",
        }
    }

    /// Unit of the hourly consumption figure.
    pub fn consumption_unit(self) -> &'static str {
        match self {
            Technology::ElectricLithium => "kWh/h",
            Technology::Diesel | Technology::Gasoline => "gal/h",
            Technology::Lpg => "kg/h",
        }
    }

    /// Unit the energy price is quoted in.
    pub fn energy_price_unit(self) -> &'static str {
        match self {
            Technology::ElectricLithium => "COP/kWh",
            Technology::Diesel | Technology::Gasoline => "COP/gal",
            Technology::Lpg => "COP/kg",
        }
    }

    pub fn is_combustion(self) -> bool {
        !matches!(self, Technology::ElectricLithium)
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per technology, always addressed and iterated in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerTechnology<T> {
    pub electric_lithium: T,
    pub diesel: T,
    pub lpg: T,
    pub gasoline: T,
}

impl<T> PerTechnology<T> {
    pub const fn new(electric_lithium: T, diesel: T, lpg: T, gasoline: T) -> Self {
        Self {
            electric_lithium,
            diesel,
            lpg,
            gasoline,
        }
    }

    pub fn get(&self, technology: Technology) -> &T {
        match technology {
            Technology::ElectricLithium => &self.electric_lithium,
            Technology::Diesel => &self.diesel,
            Technology::Lpg => &self.lpg,
            Technology::Gasoline => &self.gasoline,
        }
    }

    /// Iterates `(technology, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Technology, &T)> {
        Technology::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    pub fn map<U, F>(&self, mut f: F) -> PerTechnology<U>
    where
        F: FnMut(Technology, &T) -> U,
    {
        PerTechnology {
            electric_lithium: f(Technology::ElectricLithium, &self.electric_lithium),
            diesel: f(Technology::Diesel, &self.diesel),
            lpg: f(Technology::Lpg, &self.lpg),
            gasoline: f(Technology::Gasoline, &self.gasoline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_follows_canonical_order() {
        let values = PerTechnology::new("ep", "diesel", "lpg", "gasoline");
        let order: Vec<_> = values.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(
            order,
            vec![
                (Technology::ElectricLithium, "ep"),
                (Technology::Diesel, "diesel"),
                (Technology::Lpg, "lpg"),
                (Technology::Gasoline, "gasoline"),
            ]
        );
    }

    #[test]
    fn only_electric_is_not_combustion() {
        let combustion: Vec<_> = Technology::ALL
            .into_iter()
            .filter(|t| t.is_combustion())
            .collect();
        assert_eq!(combustion, vec![Technology::Diesel, Technology::Lpg, Technology::Gasoline]);
    }
}
