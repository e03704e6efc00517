//! Default hourly consumption per equipment capacity class (VDI 2198 cycle).

use crate::error::TcoError;
use tcobox_schemas::technology::PerTechnology;

/// Hourly consumption per technology: kWh/h, gal/h, kg/h, gal/h.
pub type ConsumptionPreset = PerTechnology<f64>;

pub const DEFAULT_CAPACITY_TON: f64 = 3.0;

const PRESETS: [(f64, ConsumptionPreset); 7] = [
    (1.8, PerTechnology::new(4.2, 0.75, 1.6, 0.9)),
    (2.5, PerTechnology::new(4.8, 0.90, 2.1, 1.1)),
    (3.0, PerTechnology::new(5.1, 1.05, 2.4, 1.25)),
    (3.5, PerTechnology::new(5.8, 1.20, 2.8, 1.40)),
    (5.0, PerTechnology::new(9.2, 1.60, 3.5, 1.90)),
    (7.0, PerTechnology::new(14.5, 2.20, 4.8, 2.60)),
    (10.0, PerTechnology::new(19.5, 3.10, 6.5, 3.80)),
];

/// Looks up the preset for an exact capacity class.
pub fn preset_for(capacity_ton: f64) -> Result<ConsumptionPreset, TcoError> {
    PRESETS
        .iter()
        .find(|(capacity, _)| *capacity == capacity_ton)
        .map(|(_, preset)| *preset)
        .ok_or(TcoError::PresetNotFound(capacity_ton))
}

/// The capacity classes in ascending order.
pub fn capacity_classes() -> impl Iterator<Item = f64> {
    PRESETS.iter().map(|(capacity, _)| *capacity)
}

/// All `(capacity, preset)` rows in ascending capacity order.
pub fn all_presets() -> &'static [(f64, ConsumptionPreset)] {
    &PRESETS
}
