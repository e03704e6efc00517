use anyhow::{bail, Context, Result};
use std::path::Path;
use tcobox_core::{
    builder::{project_parameters, SnapshotBuilder},
    scenario,
    snapshot::InputSnapshot,
};
use tcobox_schemas::{profile::ShiftPattern, scenario::KNOWN_CITIES};

use crate::cli::CompareArgs;

pub const DEFAULT_CLIENT: &str = "Empresa SAS";
pub const DEFAULT_CITY: &str = "Cali";

/// The inputs of one run after the scenario file and command-line overrides are merged.
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub client_name: String,
    pub city: String,
    pub snapshot: InputSnapshot,
}

pub fn resolve_inputs(args: &CompareArgs) -> Result<ResolvedInputs> {
    let (mut client_name, mut city, mut snapshot) = match &args.scenario {
        Some(path) => {
            let loaded = scenario::load_scenario(path)
                .with_context(|| format!("Failed to load scenario {:?}", path))?;
            let snapshot = InputSnapshot::from_scenario(&loaded)
                .context("Failed to resolve scenario inputs")?;
            (loaded.client_name, loaded.city, snapshot)
        }
        None => (
            DEFAULT_CLIENT.to_string(),
            DEFAULT_CITY.to_string(),
            SnapshotBuilder::new().build()?,
        ),
    };

    if let Some(capacity) = args.capacity {
        snapshot = snapshot
            .on_capacity_change(capacity)
            .with_context(|| format!("Capacity {} t is not one of the preset classes", capacity))?;
    }

    let hours = args
        .hours_per_year
        .or_else(|| {
            args.shifts
                .and_then(ShiftPattern::from_count)
                .map(ShiftPattern::base_hours_per_year)
        })
        .unwrap_or(snapshot.project.operating_hours_per_year);
    let years = args.years.unwrap_or(snapshot.project.project_years);
    snapshot.project = project_parameters(hours, years).context("Invalid project parameters")?;

    if let Some(client) = &args.client {
        client_name = client.clone();
    }
    if let Some(c) = &args.city {
        city = c.clone();
    }
    if !KNOWN_CITIES.contains(&city.as_str()) {
        tracing::warn!(%city, "Operating city is not one of the usual sites");
    }

    Ok(ResolvedInputs {
        client_name,
        city,
        snapshot,
    })
}

/// Writes the default scenario so it can be edited by hand.
pub fn write_default_scenario(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{:?} already exists, pass --force to overwrite it", path);
    }
    let defaults = SnapshotBuilder::new()
        .build()?
        .to_scenario(DEFAULT_CLIENT, DEFAULT_CITY);
    scenario::save_scenario(path, &defaults)
        .with_context(|| format!("Failed to write scenario {:?}", path))?;
    println!("Default scenario written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CompareArgs,
    }

    fn parse(flags: &[&str]) -> CompareArgs {
        Harness::parse_from(std::iter::once("tcobox").chain(flags.iter().copied())).args
    }

    #[test]
    fn defaults_without_scenario() {
        let inputs = resolve_inputs(&parse(&[])).unwrap();
        assert_eq!(inputs.client_name, DEFAULT_CLIENT);
        assert_eq!(inputs.city, DEFAULT_CITY);
        assert_eq!(inputs.snapshot.project.operating_hours_per_year, 3600);
        assert_eq!(inputs.snapshot.consumption.diesel, 1.05);
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let inputs = resolve_inputs(&parse(&[
            "--capacity", "5", "--shifts", "3", "--years", "8", "--client", "Acme",
        ]))
        .unwrap();
        assert_eq!(inputs.client_name, "Acme");
        assert_eq!(inputs.snapshot.capacity_ton, 5.0);
        assert_eq!(inputs.snapshot.consumption.electric_lithium, 9.2);
        assert_eq!(inputs.snapshot.project.operating_hours_per_year, 5400);
        assert_eq!(inputs.snapshot.project.project_years, 8);
    }

    #[test]
    fn hours_override_shifts() {
        let args = parse(&["--shifts", "1", "--hours-per-year", "2500"]);
        let inputs = resolve_inputs(&args).unwrap();
        assert_eq!(inputs.snapshot.project.operating_hours_per_year, 2500);
    }

    #[test]
    fn rejects_unknown_capacity_and_long_projects() {
        assert!(resolve_inputs(&parse(&["--capacity", "4"])).is_err());
        assert!(resolve_inputs(&parse(&["--years", "12"])).is_err());
    }
}
