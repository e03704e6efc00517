//! CSV and JSON renditions of a comparison, produced in memory.

use crate::error::TcoError;
use serde::Serialize;
use std::{fs, path::Path};
use tcobox_schemas::breakdown::ComparisonResult;

/// One table row. Salvage is negated so each row sums to its net TCO.
#[derive(Debug, Serialize)]
struct ComparisonRow<'a> {
    technology: &'a str,
    capex_with_tax: f64,
    energy_cost: f64,
    maintenance_cost: f64,
    salvage: f64,
    net_tco: f64,
}

pub fn comparison_csv(result: &ComparisonResult) -> Result<Vec<u8>, TcoError> {
    let context = "comparison.csv";
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (technology, b) in result.iter() {
        writer
            .serialize(ComparisonRow {
                technology: technology.label(),
                capex_with_tax: b.capex_with_tax,
                energy_cost: b.energy_cost,
                maintenance_cost: b.maintenance_cost,
                salvage: -b.salvage_value,
                net_tco: b.net_tco,
            })
            .map_err(|e| TcoError::CsvError(context.to_string(), e))?;
    }
    writer
        .into_inner()
        .map_err(|e| TcoError::CsvError(context.to_string(), e.into_error().into()))
}

pub fn comparison_json(result: &ComparisonResult) -> Result<Vec<u8>, TcoError> {
    Ok(serde_json::to_vec_pretty(result)?)
}

/// Writes an already rendered buffer to disk.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), TcoError> {
    fs::write(path, bytes).map_err(|e| TcoError::FileIO(path.display().to_string(), e))
}
